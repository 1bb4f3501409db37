//! Validator seam shared by the rule-based engine and model-backed validators

use super::input::AddressInput;
use crate::error::Result;
use address_types::{ValidationMethod, ValidationResult};

/// Anything that can turn an address line into a [`ValidationResult`].
///
/// The rule-based engine never fails. Implementations backed by external
/// services may, and are expected to be wrapped in a
/// [`FallbackValidator`](super::FallbackValidator).
pub trait AddressValidator: Send + Sync {
    fn method(&self) -> ValidationMethod;

    fn validate(&self, input: &AddressInput) -> Result<ValidationResult>;
}
