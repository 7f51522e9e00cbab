use serde_json::Value;

/// Truthiness over the raw JSON fields, matching the upstream feed's
/// conventions: absent, null, false, numeric zero and the empty string all
/// count as missing.
pub fn is_falsy(raw: Option<&Value>) -> bool {
    match raw {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Coerce a raw field to a float. Numbers pass through; strings get a
/// trimmed decimal parse. Anything else is not a number.
pub fn to_float(raw: Option<&Value>) -> Option<f64> {
    match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Coerce a raw field expected to be an integer. Numbers pass through
/// unchanged (a numeric reading is used as delivered); strings must parse as
/// a whole number.
pub fn to_int(raw: Option<&Value>) -> Option<f64> {
    match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok().map(|v| v as f64),
        _ => None,
    }
}
