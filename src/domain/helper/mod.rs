pub mod service;
pub mod validation;

pub use service::{ApiHelper, ErrorOptions};
pub use validation::{FieldFailures, FieldLabels, ValidationMessages};
