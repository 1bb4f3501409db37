//! Shared types for the address validation engine

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Kind of address when it is not a plain street address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressType {
    #[serde(rename = "PO Box")]
    PoBox,
}

impl AddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PoBox => "PO Box",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Components extracted from a raw address.
///
/// Every field is optional: `None` means the parser could not find the
/// component, which is never an error on its own. Serializes as a sparse
/// map so absent keys do not show up in JSON output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedComponents {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, alias = "province", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_box_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl ParsedComponents {
    /// Coordinates written in the address text, if both halves were found
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }

    pub fn is_po_box(&self) -> bool {
        self.address_type == Some(AddressType::PoBox)
    }

    /// Flatten into string keys for CSV and other flat formats.
    /// Absent components are left out.
    pub fn to_flat_map(&self) -> BTreeMap<&'static str, String> {
        let mut map = BTreeMap::new();
        let text_fields = [
            ("street_address", &self.street_address),
            ("suburb", &self.suburb),
            ("city", &self.city),
            ("region", &self.region),
            ("postal_code", &self.postal_code),
            ("po_box_number", &self.po_box_number),
            ("unit", &self.unit),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                map.insert(key, value.clone());
            }
        }
        if let Some(kind) = self.address_type {
            map.insert("type", kind.to_string());
        }
        if let Some(lat) = self.latitude {
            map.insert("latitude", lat.to_string());
        }
        if let Some(lon) = self.longitude {
            map.insert("longitude", lon.to_string());
        }
        map
    }
}

/// Qualitative band derived from the numeric confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    Confident,
    Likely,
    Suspicious,
    Failed,
}

impl ConfidenceLevel {
    pub const CONFIDENT_THRESHOLD: f64 = 90.0;
    pub const LIKELY_THRESHOLD: f64 = 70.0;
    pub const SUSPICIOUS_THRESHOLD: f64 = 50.0;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::CONFIDENT_THRESHOLD {
            Self::Confident
        } else if score >= Self::LIKELY_THRESHOLD {
            Self::Likely
        } else if score >= Self::SUSPICIOUS_THRESHOLD {
            Self::Suspicious
        } else {
            Self::Failed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confident => "CONFIDENT",
            Self::Likely => "LIKELY",
            Self::Suspicious => "SUSPICIOUS",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub confidence_score: f64,
    pub confidence_level: ConfidenceLevel,
    pub original_address: String,
    pub normalized_address: String,
    pub components: ParsedComponents,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub coordinates: Option<Coordinates>,
}

impl ValidationResult {
    /// Build a result from a raw score.
    ///
    /// The score is clamped to `0..=100` and both the band and `is_valid`
    /// are derived from the clamped value.
    pub fn new(
        original_address: String,
        normalized_address: String,
        components: ParsedComponents,
        raw_score: f64,
        issues: Vec<String>,
        suggestions: Vec<String>,
        coordinates: Option<Coordinates>,
    ) -> Self {
        let confidence_score = raw_score.clamp(0.0, 100.0);
        Self {
            is_valid: confidence_score >= ConfidenceLevel::LIKELY_THRESHOLD,
            confidence_score,
            confidence_level: ConfidenceLevel::from_score(confidence_score),
            original_address,
            normalized_address,
            components,
            issues,
            suggestions,
            coordinates,
        }
    }
}

/// Which strategy produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationMethod {
    #[serde(rename = "rule")]
    Rule,
    #[serde(rename = "rule (fallback)")]
    RuleFallback,
    #[serde(rename = "llm")]
    Model,
}

impl fmt::Display for ValidationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Rule => "rule",
            Self::RuleFallback => "rule (fallback)",
            Self::Model => "llm",
        };
        f.write_str(s)
    }
}

/// A result together with how and when it was produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(flatten)]
    pub result: ValidationResult,
    pub validation_method: ValidationMethod,
    pub processing_time_ms: f64,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_error: Option<String>,
}

/// Context for one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchJob {
    pub job_id: String,
    pub country: String,
    pub started_at: DateTime<Utc>,
}

impl BatchJob {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            job_id: Uuid::new_v4().to_string(),
            country: country.into(),
            started_at: Utc::now(),
        }
    }
}

/// Aggregated statistics of a finished batch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub job_id: String,
    pub total: usize,
    pub processed: usize,
    pub skipped: usize,
    pub valid: usize,
    pub level_counts: BTreeMap<String, usize>,
    pub average_score: f64,
    pub duration_ms: f64,
}

impl BatchSummary {
    pub fn new(job: &BatchJob) -> Self {
        Self {
            job_id: job.job_id.clone(),
            ..Default::default()
        }
    }

    /// Fold one result into the running totals
    pub fn record(&mut self, result: &ValidationResult) {
        let scored = self.average_score * self.processed as f64;
        self.processed += 1;
        self.total += 1;
        if result.is_valid {
            self.valid += 1;
        }
        *self
            .level_counts
            .entry(result.confidence_level.as_str().to_string())
            .or_insert(0) += 1;
        self.average_score = (scored + result.confidence_score) / self.processed as f64;
    }

    pub fn record_skipped(&mut self) {
        self.total += 1;
        self.skipped += 1;
    }

    pub fn count(&self, level: ConfidenceLevel) -> usize {
        self.level_counts.get(level.as_str()).copied().unwrap_or(0)
    }
}
