//! Validation entry points

pub mod fallback;
pub mod input;
pub mod orchestrator;
pub mod traits;

pub use fallback::FallbackValidator;
pub use input::AddressInput;
pub use orchestrator::RuleBasedValidator;
pub use traits::AddressValidator;

use address_types::{ValidationMethod, ValidationReport, ValidationResult};
use chrono::Utc;
use std::time::Instant;

pub(crate) fn build_report(
    result: ValidationResult,
    method: ValidationMethod,
    started: Instant,
    fallback_error: Option<String>,
) -> ValidationReport {
    ValidationReport {
        result,
        validation_method: method,
        processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
        timestamp: Utc::now(),
        fallback_error,
    }
}
