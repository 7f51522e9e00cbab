use serde_json::Value;

use crate::triage::coerce;

/// Blood pressure categories, checked in rule order. `Unclassified` is the
/// legacy fallback arm; the ordered rules cover every positive S/D pair, so
/// it cannot be produced (asserted by the grid sweep in tests) but the arm is
/// kept as part of the scoring contract.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BpCategory {
    Normal,
    Elevated,
    Stage1,
    Stage2,
    Unclassified,
}

impl BpCategory {
    pub fn classify(systolic: i64, diastolic: i64) -> Self {
        if systolic < 120 && diastolic < 80 {
            return BpCategory::Normal;
        }
        if (120..=129).contains(&systolic) && diastolic < 80 {
            return BpCategory::Elevated;
        }
        if (130..=139).contains(&systolic) || (80..=89).contains(&diastolic) {
            return BpCategory::Stage1;
        }
        if systolic >= 140 || diastolic >= 90 {
            return BpCategory::Stage2;
        }
        BpCategory::Unclassified
    }

    pub fn risk(self) -> u8 {
        match self {
            BpCategory::Normal | BpCategory::Unclassified => 1,
            BpCategory::Elevated => 2,
            BpCategory::Stage1 => 3,
            BpCategory::Stage2 => 4,
        }
    }
}

/// Risk contribution of a raw blood pressure reading, 0-4.
///
/// 0 means the reading could not be evaluated (missing, not a string, not an
/// "S/D" pair, or a part failing a positive-integer parse); the reason is
/// carried separately as a data quality tag.
pub fn blood_pressure_risk(raw: Option<&Value>) -> u8 {
    match parse_blood_pressure(raw) {
        Some((systolic, diastolic)) => BpCategory::classify(systolic, diastolic).risk(),
        None => 0,
    }
}

/// Splits a raw blood pressure value into positive systolic/diastolic parts.
pub(crate) fn parse_blood_pressure(raw: Option<&Value>) -> Option<(i64, i64)> {
    let reading = match raw {
        Some(Value::String(s)) => s,
        _ => return None,
    };

    let mut parts = reading.split('/');
    let (systolic, diastolic) = match (parts.next(), parts.next(), parts.next()) {
        (Some(s), Some(d), None) => (s, d),
        _ => return None,
    };

    let systolic = systolic.trim().parse::<i64>().ok()?;
    let diastolic = diastolic.trim().parse::<i64>().ok()?;

    if systolic <= 0 || diastolic <= 0 {
        return None;
    }

    Some((systolic, diastolic))
}

/// Risk contribution of a raw temperature reading, 0-2.
///
/// Accepts a number or a numeric string; anything else scores 0.
pub fn temperature_risk(raw: Option<&Value>) -> u8 {
    if coerce::is_falsy(raw) {
        return 0;
    }

    let temperature = match coerce::to_float(raw) {
        Some(t) => t,
        None => return 0,
    };

    if temperature <= 99.5 {
        0
    } else if (99.6..=100.9).contains(&temperature) {
        1
    } else if temperature >= 101.0 {
        2
    } else {
        // Readings strictly between 100.9 and 101.0 fall through here.
        0
    }
}

/// Risk contribution of a raw age, 0-2.
///
/// Accepts a number or an integer string; anything else scores 0.
pub fn age_risk(raw: Option<&Value>) -> u8 {
    if coerce::is_falsy(raw) {
        return 0;
    }

    let age = match coerce::to_int(raw) {
        Some(a) => a,
        None => return 0,
    };

    // The under-40 and 40-65 bands score identically. They are distinct
    // bands in the scoring contract, kept separate here rather than folded
    // into a single "65 and under" branch.
    if age < 40.0 {
        1
    } else if (40.0..=65.0).contains(&age) {
        1
    } else if age > 65.0 {
        2
    } else {
        0
    }
}
