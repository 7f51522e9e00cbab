pub mod alerts;
pub mod assess;
pub mod coerce;
pub mod quality;
pub mod record;
pub mod score;

pub use alerts::AlertBuckets;
pub use assess::{assess, assess_all};
pub use quality::DataQualityTag;
pub use record::{PatientAssessment, RawPatientRecord, RiskLevel};
