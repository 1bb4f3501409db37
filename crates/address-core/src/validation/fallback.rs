use super::input::AddressInput;
use super::orchestrator::RuleBasedValidator;
use super::traits::AddressValidator;
use super::build_report;
use address_types::{ValidationMethod, ValidationReport};
use std::time::Instant;

/// Runs a primary validator and falls back to the rule-based engine when it
/// fails. The primary's error text is kept on the report.
pub struct FallbackValidator<P: AddressValidator> {
    primary: P,
    fallback: RuleBasedValidator,
}

impl<P: AddressValidator> FallbackValidator<P> {
    pub fn new(primary: P, fallback: RuleBasedValidator) -> Self {
        Self { primary, fallback }
    }

    pub fn validate(&self, input: &AddressInput) -> ValidationReport {
        let started = Instant::now();

        match self.primary.validate(input) {
            Ok(result) => build_report(result, self.primary.method(), started, None),
            Err(e) => {
                log::warn!(
                    "{} validation failed for '{}', using rule-based fallback: {}",
                    self.primary.method(),
                    input,
                    e
                );
                let result = self.fallback.validate_address(input.as_str());
                build_report(
                    result,
                    ValidationMethod::RuleFallback,
                    started,
                    Some(e.to_string()),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::Country;
    use crate::error::{Result, ValidatorError};
    use address_types::{ParsedComponents, ValidationResult};

    struct FailingValidator;

    impl AddressValidator for FailingValidator {
        fn method(&self) -> ValidationMethod {
            ValidationMethod::Model
        }

        fn validate(&self, _input: &AddressInput) -> Result<ValidationResult> {
            Err(ValidatorError::Primary("model unavailable".to_string()))
        }
    }

    struct FixedValidator;

    impl AddressValidator for FixedValidator {
        fn method(&self) -> ValidationMethod {
            ValidationMethod::Model
        }

        fn validate(&self, input: &AddressInput) -> Result<ValidationResult> {
            Ok(ValidationResult::new(
                input.to_string(),
                input.to_string(),
                ParsedComponents::default(),
                88.0,
                vec![],
                vec![],
                None,
            ))
        }
    }

    fn rules() -> RuleBasedValidator {
        RuleBasedValidator::for_country(Country::SouthAfrica).unwrap()
    }

    #[test]
    fn test_primary_result_is_used() {
        let validator = FallbackValidator::new(FixedValidator, rules());
        let input = AddressInput::new("12 Long Street, Cape Town").unwrap();
        let report = validator.validate(&input);

        assert_eq!(report.validation_method, ValidationMethod::Model);
        assert_eq!(report.result.confidence_score, 88.0);
        assert!(report.fallback_error.is_none());
    }

    #[test]
    fn test_failure_falls_back_to_rules() {
        let validator = FallbackValidator::new(FailingValidator, rules());
        let input = AddressInput::new("12 Long Street, Cape Town").unwrap();
        let report = validator.validate(&input);

        assert_eq!(report.validation_method, ValidationMethod::RuleFallback);
        assert_eq!(report.result.confidence_score, 70.0);
        assert!(report
            .fallback_error
            .as_deref()
            .unwrap()
            .contains("model unavailable"));
    }
}
