//! Address Validation Core Library
//!
//! Deterministic, rule-based validation of postal addresses for South Africa
//! and Kazakhstan: parsing, component checks, confidence scoring,
//! normalization and approximate geocoding. Also hosts the validator seam
//! used to put a model-backed validator in front of the rule engine.

pub mod config;
pub mod coordinates;
pub mod country;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod parser;
pub mod reference;
pub mod scorer;
pub mod validation;
pub mod validators;

// Re-export main types for easy access
pub use config::ValidatorConfig;
pub use country::Country;
pub use error::{Result, ValidatorError};
pub use reference::ReferenceData;

pub use coordinates::CoordinateResolver;
pub use model::{ModelAssessment, ModelValidator};
pub use normalizer::normalize;
pub use parser::AddressParser;
pub use scorer::{ConfidenceScorer, Penalty, ScoreCard};
pub use validators::ComponentValidators;

pub use validation::{AddressInput, AddressValidator, FallbackValidator, RuleBasedValidator};
