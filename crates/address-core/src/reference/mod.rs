//! Geographic reference tables
//!
//! A [`ReferenceData`] holds everything the parser, validators and the
//! coordinate resolver need for one country. The built-in tables are
//! constructed once per process and shared behind an `Arc`; custom tables
//! can be loaded from JSON with the same shape.
//!
//! Declaration order is significant throughout: regions, cities, suburbs and
//! abbreviations are scanned in the order they are listed and the first hit
//! wins.

mod kazakhstan;
mod south_africa;

use crate::country::Country;
use crate::error::{Result, ValidatorError};
use address_types::Coordinates;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

static SOUTH_AFRICA: Lazy<Arc<ReferenceData>> =
    Lazy::new(|| Arc::new(south_africa::reference_data()));

static KAZAKHSTAN: Lazy<Arc<ReferenceData>> =
    Lazy::new(|| Arc::new(kazakhstan::reference_data()));

/// Inclusive numeric postal code interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalRange {
    pub min: u32,
    pub max: u32,
}

impl PostalRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, code: u32) -> bool {
        self.min <= code && code <= self.max
    }

    /// Render as `min-max`, zero-padded to the postal code width
    pub fn display(&self, digits: usize) -> String {
        format!("{:0width$}-{:0width$}", self.min, self.max, width = digits)
    }
}

/// A province or oblast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub code: String,
    pub capital: String,
    pub major_cities: Vec<String>,

    /// Alternative spellings matched as whole words right after the full name
    #[serde(default)]
    pub aliases: Vec<String>,

    #[serde(default)]
    pub postal_ranges: Vec<PostalRange>,
}

impl Region {
    /// A city that is its own region (e.g. Almaty)
    pub fn is_city_region(&self) -> bool {
        self.name == self.capital
    }
}

/// Country bounding box in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Bounds {
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.lat_min <= latitude
            && latitude <= self.lat_max
            && self.lon_min <= longitude
            && longitude <= self.lon_max
    }
}

/// Whole-word abbreviation and its lowercase expansion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Abbreviation {
    pub short: String,
    pub expansion: String,
}

/// Serialized shape of the tables. `region_codes` is never read from input.
#[derive(Debug, Deserialize)]
struct RawReferenceData {
    country: Country,
    region_label: String,
    postal_code_digits: usize,
    regions: Vec<Region>,
    bounds: Bounds,
    #[serde(default)]
    street_types: Vec<String>,
    #[serde(default)]
    suburbs: HashMap<String, Vec<String>>,
    #[serde(default)]
    abbreviations: Vec<Abbreviation>,
    #[serde(default)]
    country_aliases: Vec<String>,
    #[serde(default)]
    city_coordinates: HashMap<String, Coordinates>,
    #[serde(default)]
    region_coordinates: HashMap<String, Coordinates>,
    country_center: Coordinates,
}

/// Immutable reference tables for one country
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceData {
    pub country: Country,
    /// What a region is called in issue texts ("province", "oblast")
    pub region_label: String,
    pub postal_code_digits: usize,
    pub regions: Vec<Region>,
    pub bounds: Bounds,
    pub street_types: Vec<String>,
    pub suburbs: HashMap<String, Vec<String>>,
    pub abbreviations: Vec<Abbreviation>,
    /// Country names and codes that may appear in an address line
    pub country_aliases: Vec<String>,
    pub city_coordinates: HashMap<String, Coordinates>,
    pub region_coordinates: HashMap<String, Coordinates>,
    pub country_center: Coordinates,

    #[serde(skip)]
    region_codes: HashMap<String, String>,
}

impl ReferenceData {
    /// Shared built-in tables for a country
    pub fn builtin(country: Country) -> Arc<ReferenceData> {
        match country {
            Country::SouthAfrica => Arc::clone(&SOUTH_AFRICA),
            Country::Kazakhstan => Arc::clone(&KAZAKHSTAN),
        }
    }

    /// Load custom tables from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidatorError::ReferenceData(format!(
                "Failed to read reference data {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Load custom tables from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawReferenceData = serde_json::from_str(json)?;
        let data = Self::assemble(
            raw.country,
            raw.region_label,
            raw.postal_code_digits,
            raw.regions,
            raw.bounds,
            raw.street_types,
            raw.suburbs,
            raw.abbreviations,
            raw.country_aliases,
            raw.city_coordinates,
            raw.region_coordinates,
            raw.country_center,
        );
        data.validate()?;
        Ok(data)
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        country: Country,
        region_label: String,
        postal_code_digits: usize,
        regions: Vec<Region>,
        bounds: Bounds,
        street_types: Vec<String>,
        suburbs: HashMap<String, Vec<String>>,
        abbreviations: Vec<Abbreviation>,
        country_aliases: Vec<String>,
        city_coordinates: HashMap<String, Coordinates>,
        region_coordinates: HashMap<String, Coordinates>,
        country_center: Coordinates,
    ) -> Self {
        let region_codes = regions
            .iter()
            .map(|r| (r.code.clone(), r.name.clone()))
            .collect();

        Self {
            country,
            region_label,
            postal_code_digits,
            regions,
            bounds,
            street_types,
            suburbs,
            abbreviations,
            country_aliases,
            city_coordinates,
            region_coordinates,
            country_center,
            region_codes,
        }
    }

    /// Check table consistency
    pub fn validate(&self) -> Result<()> {
        if !(1..=9).contains(&self.postal_code_digits) {
            return Err(ValidatorError::ReferenceData(format!(
                "postal_code_digits must be between 1 and 9, got {}",
                self.postal_code_digits
            )));
        }

        if self.regions.is_empty() {
            return Err(ValidatorError::ReferenceData(
                "at least one region is required".to_string(),
            ));
        }

        for region in &self.regions {
            if region.code.trim().is_empty() {
                return Err(ValidatorError::ReferenceData(format!(
                    "region {} has no code",
                    region.name
                )));
            }
            if let Some(range) = region.postal_ranges.iter().find(|r| r.min > r.max) {
                return Err(ValidatorError::ReferenceData(format!(
                    "region {} has an inverted postal range {}-{}",
                    region.name, range.min, range.max
                )));
            }
        }

        Ok(())
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Region name for a short code such as `WC`
    pub fn region_for_code(&self, code: &str) -> Option<&str> {
        self.region_codes.get(code).map(String::as_str)
    }

    /// Resolve a full name or short code to the region record
    pub fn resolve_region(&self, name_or_code: &str) -> Option<&Region> {
        self.region(name_or_code)
            .or_else(|| self.region_for_code(name_or_code).and_then(|name| self.region(name)))
    }

    pub fn region_names(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn suburbs_of(&self, city: &str) -> &[String] {
        self.suburbs.get(city).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All major cities across regions, in declaration order
    pub fn all_cities(&self) -> impl Iterator<Item = &str> {
        self.regions
            .iter()
            .flat_map(|r| r.major_cities.iter().map(String::as_str))
    }

    pub fn is_street_type(&self, word: &str) -> bool {
        self.street_types.iter().any(|t| t.eq_ignore_ascii_case(word))
    }
}

/// Table-building helpers shared by the built-in country modules
pub(crate) mod build {
    use super::*;

    pub fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    pub fn region(
        name: &str,
        code: &str,
        capital: &str,
        cities: &[&str],
        ranges: &[(u32, u32)],
    ) -> Region {
        Region {
            name: name.to_string(),
            code: code.to_string(),
            capital: capital.to_string(),
            major_cities: strings(cities),
            aliases: Vec::new(),
            postal_ranges: ranges
                .iter()
                .map(|&(min, max)| PostalRange::new(min, max))
                .collect(),
        }
    }

    pub fn with_aliases(mut region: Region, aliases: &[&str]) -> Region {
        region.aliases = strings(aliases);
        region
    }

    pub fn suburbs(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(city, list)| (city.to_string(), strings(list)))
            .collect()
    }

    pub fn abbreviations(entries: &[(&str, &str)]) -> Vec<Abbreviation> {
        entries
            .iter()
            .map(|(short, expansion)| Abbreviation {
                short: short.to_string(),
                expansion: expansion.to_string(),
            })
            .collect()
    }

    pub fn points(entries: &[(&str, f64, f64)]) -> HashMap<String, Coordinates> {
        entries
            .iter()
            .map(|&(name, lat, lon)| (name.to_string(), Coordinates::new(lat, lon)))
            .collect()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn assemble_tables(
        country: Country,
        region_label: &str,
        postal_code_digits: usize,
        regions: Vec<Region>,
        bounds: Bounds,
        street_types: &[&str],
        suburbs: HashMap<String, Vec<String>>,
        abbreviations: Vec<Abbreviation>,
        country_aliases: &[&str],
        city_coordinates: HashMap<String, Coordinates>,
        region_coordinates: HashMap<String, Coordinates>,
        country_center: Coordinates,
    ) -> ReferenceData {
        ReferenceData::assemble(
            country,
            region_label.to_string(),
            postal_code_digits,
            regions,
            bounds,
            strings(street_types),
            suburbs,
            abbreviations,
            strings(country_aliases),
            city_coordinates,
            region_coordinates,
            country_center,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_consistent() {
        for country in Country::ALL {
            let data = ReferenceData::builtin(country);
            data.validate().expect("built-in tables must validate");
            assert_eq!(data.country, country);
        }
    }

    #[test]
    fn test_builtin_tables_are_shared() {
        let a = ReferenceData::builtin(Country::SouthAfrica);
        let b = ReferenceData::builtin(Country::SouthAfrica);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_region_codes_are_derived() {
        let data = ReferenceData::builtin(Country::SouthAfrica);
        assert_eq!(data.region_for_code("WC"), Some("Western Cape"));
        assert_eq!(data.region_for_code("KZN"), Some("KwaZulu-Natal"));
        assert_eq!(data.region_for_code("GT"), None);
        assert_eq!(data.resolve_region("GP").map(|r| r.name.as_str()), Some("Gauteng"));
    }

    #[test]
    fn test_every_region_has_coordinates() {
        for country in Country::ALL {
            let data = ReferenceData::builtin(country);
            for region in &data.regions {
                assert!(
                    data.region_coordinates.contains_key(&region.name),
                    "missing centroid for {}",
                    region.name
                );
                assert!(!region.postal_ranges.is_empty(), "no postal ranges for {}", region.name);
            }
        }
    }

    #[test]
    fn test_postal_range_display_pads() {
        assert_eq!(PostalRange::new(600, 999).display(4), "0600-0999");
        assert_eq!(PostalRange::new(50000, 50999).display(6), "050000-050999");
    }

    #[test]
    fn test_from_json_derives_codes_and_rejects_inverted_ranges() {
        let json = r#"{
            "country": "ZA",
            "region_label": "province",
            "postal_code_digits": 4,
            "regions": [
                {"name": "Test Province", "code": "TP", "capital": "Testville",
                 "major_cities": ["Testville"], "postal_ranges": [{"min": 1000, "max": 1999}]}
            ],
            "bounds": {"lat_min": -35.0, "lat_max": -22.0, "lon_min": 16.0, "lon_max": 33.0},
            "country_center": {"latitude": -28.0, "longitude": 24.0}
        }"#;
        let data = ReferenceData::from_json_str(json).unwrap();
        assert_eq!(data.region_for_code("TP"), Some("Test Province"));
        assert!(data.suburbs_of("Testville").is_empty());

        let inverted = json.replace("\"min\": 1000, \"max\": 1999", "\"min\": 1999, \"max\": 1000");
        let err = ReferenceData::from_json_str(&inverted).unwrap_err();
        assert!(err.to_string().contains("inverted"));
    }
}
