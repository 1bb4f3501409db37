//! Additive-penalty confidence scoring
//!
//! Every score starts at [`BASE_SCORE`] and loses points for each defect
//! found in the parsed components. All applicable penalties are applied, the
//! total is clamped to `0..=100`, and each penalty contributes one issue text
//! and possibly a suggestion.

use crate::reference::ReferenceData;
use crate::validators::ComponentValidators;
use address_types::ParsedComponents;

pub const BASE_SCORE: f64 = 100.0;

/// A scoring defect and its point cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Penalty {
    MissingStreet,
    MissingCity,
    MissingRegion,
    InvalidRegion,
    InvalidPostalCode,
    MissingPostalCode,
    UnclearPoBox,
    CoordinatesOutOfBounds,
}

impl Penalty {
    pub const fn points(self) -> f64 {
        match self {
            Self::MissingStreet => 25.0,
            Self::MissingCity => 20.0,
            Self::MissingRegion => 20.0,
            Self::InvalidRegion => 30.0,
            Self::InvalidPostalCode => 15.0,
            Self::MissingPostalCode => 10.0,
            Self::UnclearPoBox => 10.0,
            Self::CoordinatesOutOfBounds => 25.0,
        }
    }
}

/// Scorer output before it is folded into a `ValidationResult`
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub score: f64,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub penalties: Vec<Penalty>,
}

impl ScoreCard {
    fn new() -> Self {
        Self {
            score: BASE_SCORE,
            issues: Vec::new(),
            suggestions: Vec::new(),
            penalties: Vec::new(),
        }
    }

    fn penalize(&mut self, penalty: Penalty, issue: String) {
        log::debug!("Penalty {:?} (-{}): {}", penalty, penalty.points(), issue);
        self.score -= penalty.points();
        self.penalties.push(penalty);
        self.issues.push(issue);
    }

    fn suggest(&mut self, suggestion: impl Into<String>) {
        self.suggestions.push(suggestion.into());
    }
}

pub struct ConfidenceScorer<'a> {
    reference: &'a ReferenceData,
    validators: ComponentValidators<'a>,
}

impl<'a> ConfidenceScorer<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self {
            reference,
            validators: ComponentValidators::new(reference),
        }
    }

    pub fn score(&self, components: &ParsedComponents, raw: &str) -> ScoreCard {
        let mut card = ScoreCard::new();
        let label = self.reference.region_label.as_str();
        let is_po_box = ComponentValidators::is_po_box(raw);

        match components.street_address.as_deref() {
            None => card.penalize(Penalty::MissingStreet, "Missing street address".to_string()),
            Some(street) if !is_po_box && !self.has_street_type(street) => {
                card.suggest("Include a street type (e.g. Street, Road)");
            }
            Some(_) => {}
        }

        if components.city.is_none() {
            card.penalize(Penalty::MissingCity, "Missing city/town".to_string());
            card.suggest("Add city name for better accuracy");
        }

        match components.region.as_deref() {
            None => {
                card.penalize(Penalty::MissingRegion, format!("Missing {}/region", label));
                card.suggest(format!(
                    "Include {}: {}",
                    label,
                    self.reference.region_names().join(", ")
                ));
            }
            Some(region) if !self.validators.region_valid(region) => {
                card.penalize(Penalty::InvalidRegion, format!("Invalid {}: {}", label, region));
                card.suggest(format!(
                    "Valid {}s: {}",
                    label,
                    self.reference.region_names().join(", ")
                ));
            }
            Some(_) => {}
        }

        match components.postal_code.as_deref() {
            Some(code) => {
                let region = components.region.as_deref();
                if !self.validators.postal_code_valid(code, region) {
                    card.penalize(
                        Penalty::InvalidPostalCode,
                        format!("Invalid postal code: {}", code),
                    );
                    if let Some(suggestion) = region.and_then(|r| self.range_suggestion(r)) {
                        card.suggest(suggestion);
                    }
                }
            }
            None => {
                card.penalize(Penalty::MissingPostalCode, "Missing postal code".to_string());
                card.suggest(format!(
                    "Add {}-digit postal code",
                    self.reference.postal_code_digits
                ));
            }
        }

        if is_po_box && components.po_box_number.is_none() {
            card.penalize(
                Penalty::UnclearPoBox,
                "PO Box number not clearly specified".to_string(),
            );
        }

        if let Some(point) = components.coordinates() {
            if !self
                .validators
                .coordinates_in_bounds(point.latitude, point.longitude)
            {
                card.penalize(
                    Penalty::CoordinatesOutOfBounds,
                    "Coordinates outside country bounds".to_string(),
                );
            }
        }

        card.score = card.score.clamp(0.0, BASE_SCORE);
        card
    }

    fn has_street_type(&self, street: &str) -> bool {
        street
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| self.reference.is_street_type(word))
    }

    fn range_suggestion(&self, region: &str) -> Option<String> {
        let region = self.reference.resolve_region(region)?;
        if region.postal_ranges.is_empty() {
            return None;
        }
        let digits = self.reference.postal_code_digits;
        let ranges = region
            .postal_ranges
            .iter()
            .map(|r| r.display(digits))
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("Valid postal codes for {}: {}", region.name, ranges))
    }
}
