pub mod alert;
pub mod context;
pub mod error;
pub mod severity;
pub mod types;

pub use alert::{Alert, alert_id};
pub use context::{ComorbiditySet, PartialPatientContext, PatientContext};
pub use error::CoreError;
pub use severity::{SEVERITY_SCORES, Severity};
pub use types::{ComorbidityKey, DrugKey, DrugScope, Species};
