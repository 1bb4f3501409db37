//! Rule-based validation pipeline
//!
//! parse -> validate -> score -> normalize -> resolve coordinates, in that
//! fixed order. Holds only immutable tables and compiled patterns, so one
//! instance can be shared across threads.

use super::input::AddressInput;
use super::traits::AddressValidator;
use super::build_report;
use crate::coordinates::CoordinateResolver;
use crate::country::Country;
use crate::error::Result;
use crate::normalizer::normalize;
use crate::parser::AddressParser;
use crate::reference::ReferenceData;
use crate::scorer::ConfidenceScorer;
use crate::validators::ComponentValidators;
use address_types::{AddressType, ValidationMethod, ValidationReport, ValidationResult};
use std::sync::Arc;
use std::time::Instant;

pub struct RuleBasedValidator {
    parser: AddressParser,
}

impl RuleBasedValidator {
    pub fn new(reference: Arc<ReferenceData>) -> Result<Self> {
        Ok(Self {
            parser: AddressParser::new(reference)?,
        })
    }

    /// Validator over the built-in tables of a country
    pub fn for_country(country: Country) -> Result<Self> {
        Self::new(ReferenceData::builtin(country))
    }

    pub fn reference(&self) -> &ReferenceData {
        self.parser.reference()
    }

    pub fn country(&self) -> Country {
        self.reference().country
    }

    pub fn validate_address(&self, raw: &str) -> ValidationResult {
        let reference = self.parser.reference();

        let mut components = self.parser.parse(raw);
        if ComponentValidators::is_po_box(raw) {
            components.address_type = Some(AddressType::PoBox);
        }

        let card = ConfidenceScorer::new(reference).score(&components, raw);
        let normalized = normalize(&components);
        let coordinates = CoordinateResolver::new(reference)
            .resolve(components.city.as_deref(), components.region.as_deref());

        log::debug!(
            "Validated '{}': score {} with {} issue(s)",
            raw,
            card.score,
            card.issues.len()
        );

        ValidationResult::new(
            raw.to_string(),
            normalized,
            components,
            card.score,
            card.issues,
            card.suggestions,
            Some(coordinates),
        )
    }

    /// Validate and wrap the result with method and timing
    pub fn report(&self, input: &AddressInput) -> ValidationReport {
        let started = Instant::now();
        let result = self.validate_address(input.as_str());
        build_report(result, ValidationMethod::Rule, started, None)
    }
}

impl AddressValidator for RuleBasedValidator {
    fn method(&self) -> ValidationMethod {
        ValidationMethod::Rule
    }

    fn validate(&self, input: &AddressInput) -> Result<ValidationResult> {
        Ok(self.validate_address(input.as_str()))
    }
}
