use crate::error::{Result, ValidatorError};
use std::fmt;

/// A non-empty, trimmed address line. Constructing one is the boundary
/// check that runs before any validator sees the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressInput(String);

impl AddressInput {
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidatorError::InvalidInput(
                "Address cannot be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddressInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
