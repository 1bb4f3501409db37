//! Mapping of generative-model assessments onto [`ValidationResult`]
//!
//! A model-backed validator returns JSON in its own schema (camelCase field
//! names, qualitative bands named High/Medium/Low/Unusable). This module
//! turns that into the same result shape the rule-based engine produces so
//! callers never need to know which path answered.

use crate::coordinates::CoordinateResolver;
use crate::error::Result;
use crate::reference::ReferenceData;
use crate::validation::{AddressInput, AddressValidator};
use address_types::{
    ConfidenceLevel, Coordinates, ParsedComponents, ValidationMethod, ValidationResult,
};
use serde::Deserialize;
use std::sync::Arc;

const DEFAULT_MODEL_SCORE: f64 = 50.0;

/// Models emit some fields as either numbers or strings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl TextOrNumber {
    fn into_text(self) -> Option<String> {
        let text = match self {
            Self::Text(text) => text.trim().to_string(),
            Self::Number(number) => number.to_string(),
        };
        (!text.is_empty()).then_some(text)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelFields {
    pub street_number: Option<TextOrNumber>,
    pub street_name: Option<String>,
    pub suburb: Option<String>,
    pub city: Option<String>,
    #[serde(alias = "oblast")]
    pub province: Option<String>,
    pub postal_code: Option<TextOrNumber>,
    pub apartment: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ModelBand {
    High,
    Medium,
    Low,
    Unusable,
    #[serde(other)]
    Unknown,
}

impl ModelBand {
    pub fn level(&self) -> Option<ConfidenceLevel> {
        match self {
            Self::High => Some(ConfidenceLevel::Confident),
            Self::Medium => Some(ConfidenceLevel::Likely),
            Self::Low => Some(ConfidenceLevel::Suspicious),
            Self::Unusable => Some(ConfidenceLevel::Failed),
            Self::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModelConfidence {
    pub score: Option<f64>,
    pub band: Option<ModelBand>,
}

/// Assessment as returned by a generative validator
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelAssessment {
    pub normalized_address: Option<String>,
    pub fields: ModelFields,
    pub completeness: Option<String>,
    pub confidence: ModelConfidence,
    pub issues: Vec<String>,
    pub recommended_fixes: Vec<String>,
}

impl ModelAssessment {
    /// Parse raw model output, tolerating a surrounding Markdown code fence
    pub fn from_response_text(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(strip_code_fences(text))?)
    }

    /// Convert into a result with the same invariants as the rule-based path:
    /// the score is clamped and both band and validity follow from it.
    pub fn into_result(self, original: &str, reference: &ReferenceData) -> ValidationResult {
        let fields = self.fields;
        let raw_score = self.confidence.score.unwrap_or(DEFAULT_MODEL_SCORE);

        let expected = ConfidenceLevel::from_score(raw_score.clamp(0.0, 100.0));
        if let Some(claimed) = self.confidence.band.and_then(|band| band.level()) {
            if claimed != expected {
                log::warn!(
                    "Model band {} disagrees with score {} ({}), using the score",
                    claimed,
                    raw_score,
                    expected
                );
            }
        }

        let street_number = fields.street_number.and_then(TextOrNumber::into_text);
        let street_address = non_empty(fields.street_name).map(|name| match street_number {
            Some(number) => format!("{} {}", number, name),
            None => name,
        });

        let components = ParsedComponents {
            street_address,
            suburb: non_empty(fields.suburb),
            city: non_empty(fields.city),
            region: non_empty(fields.province),
            postal_code: fields.postal_code.and_then(TextOrNumber::into_text),
            unit: non_empty(fields.apartment),
            ..Default::default()
        };

        let coordinates = match (fields.latitude, fields.longitude) {
            (Some(lat), Some(lon)) if !(lat == 0.0 && lon == 0.0) && reference.bounds.contains(lat, lon) => {
                Coordinates::new(lat, lon)
            }
            (lat, lon) => {
                if lat.is_some() || lon.is_some() {
                    log::debug!("Rejected model coordinates ({:?}, {:?})", lat, lon);
                }
                CoordinateResolver::new(reference)
                    .resolve(components.city.as_deref(), components.region.as_deref())
            }
        };

        let normalized =
            non_empty(self.normalized_address).unwrap_or_else(|| original.to_string());

        ValidationResult::new(
            original.to_string(),
            normalized,
            components,
            raw_score,
            self.issues,
            self.recommended_fixes,
            Some(coordinates),
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.find("```") {
        Some(start) => {
            let body = &trimmed[start + 3..];
            let body = body.strip_prefix("json").unwrap_or(body);
            let end = body.find("```").unwrap_or(body.len());
            body[..end].trim()
        }
        None => trimmed,
    }
}

/// Validator backed by a generative model.
///
/// `complete` sends the address to the model and returns its raw text; any
/// error it reports, and any unparseable answer, surfaces as `Err` so a
/// [`FallbackValidator`](crate::validation::FallbackValidator) can take over.
pub struct ModelValidator<F> {
    reference: Arc<ReferenceData>,
    complete: F,
}

impl<F> ModelValidator<F>
where
    F: Fn(&AddressInput) -> Result<String> + Send + Sync,
{
    pub fn new(reference: Arc<ReferenceData>, complete: F) -> Self {
        Self {
            reference,
            complete,
        }
    }
}

impl<F> AddressValidator for ModelValidator<F>
where
    F: Fn(&AddressInput) -> Result<String> + Send + Sync,
{
    fn method(&self) -> ValidationMethod {
        ValidationMethod::Model
    }

    fn validate(&self, input: &AddressInput) -> Result<ValidationResult> {
        let text = (self.complete)(input)?;
        let assessment = ModelAssessment::from_response_text(&text)?;
        Ok(assessment.into_result(input.as_str(), &self.reference))
    }
}
