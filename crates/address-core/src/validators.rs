//! Component-level checks against the reference tables

use crate::reference::ReferenceData;
use once_cell::sync::Lazy;
use regex::Regex;

static PO_BOX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"p\.?o\.?\s*box").expect("Failed to compile PO box regex"));

/// Stateless predicates over one country's reference tables
#[derive(Clone, Copy)]
pub struct ComponentValidators<'a> {
    reference: &'a ReferenceData,
}

impl<'a> ComponentValidators<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    /// Full region name or short code
    pub fn region_valid(&self, region: &str) -> bool {
        self.reference.resolve_region(region).is_some()
    }

    /// Format check, then range membership.
    ///
    /// With a known region the code must fall in one of that region's
    /// ranges. Without one (or with a region the tables do not know) any
    /// region's range will do.
    pub fn postal_code_valid(&self, code: &str, region: Option<&str>) -> bool {
        let digits = self.reference.postal_code_digits;
        if code.len() != digits || !code.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }

        let value = match code.parse::<u32>() {
            Ok(value) => value,
            Err(_) => return false,
        };

        match region.and_then(|r| self.reference.resolve_region(r)) {
            Some(region) => region.postal_ranges.iter().any(|range| range.contains(value)),
            None => self
                .reference
                .regions
                .iter()
                .flat_map(|r| r.postal_ranges.iter())
                .any(|range| range.contains(value)),
        }
    }

    pub fn coordinates_in_bounds(&self, latitude: f64, longitude: f64) -> bool {
        self.reference.bounds.contains(latitude, longitude)
    }

    /// Case-insensitive "PO Box" marker anywhere in the raw text
    pub fn is_po_box(raw: &str) -> bool {
        PO_BOX.is_match(&raw.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::Country;

    #[test]
    fn test_region_names_and_codes() {
        let data = ReferenceData::builtin(Country::SouthAfrica);
        let validators = ComponentValidators::new(&data);

        assert!(validators.region_valid("Gauteng"));
        assert!(validators.region_valid("KZN"));
        assert!(!validators.region_valid("GT"));
        assert!(!validators.region_valid("gauteng"));
    }

    #[test]
    fn test_postal_code_range_boundaries() {
        let data = ReferenceData::builtin(Country::SouthAfrica);
        let validators = ComponentValidators::new(&data);

        assert!(validators.postal_code_valid("1400", Some("Gauteng")));
        assert!(validators.postal_code_valid("2199", Some("Gauteng")));
        assert!(!validators.postal_code_valid("2200", Some("Gauteng")));
        assert!(!validators.postal_code_valid("1399", Some("Gauteng")));
        assert!(validators.postal_code_valid("2000", Some("GP")));
    }

    #[test]
    fn test_postal_code_format() {
        let data = ReferenceData::builtin(Country::SouthAfrica);
        let validators = ComponentValidators::new(&data);

        assert!(!validators.postal_code_valid("200", None));
        assert!(!validators.postal_code_valid("20000", None));
        assert!(!validators.postal_code_valid("20a0", None));
        assert!(validators.postal_code_valid("0600", Some("Limpopo")));
    }

    #[test]
    fn test_postal_code_without_known_region_is_permissive() {
        let data = ReferenceData::builtin(Country::SouthAfrica);
        let validators = ComponentValidators::new(&data);

        assert!(validators.postal_code_valid("8001", None));
        assert!(validators.postal_code_valid("2194", Some("GT")));
        assert!(!validators.postal_code_valid("0100", None));
    }

    #[test]
    fn test_kazakhstan_postal_codes() {
        let data = ReferenceData::builtin(Country::Kazakhstan);
        let validators = ComponentValidators::new(&data);

        assert!(validators.postal_code_valid("050000", Some("Almaty")));
        assert!(!validators.postal_code_valid("050000", Some("Astana")));
        assert!(validators.postal_code_valid("010000", Some("AST")));
    }

    #[test]
    fn test_coordinates_in_bounds() {
        let data = ReferenceData::builtin(Country::SouthAfrica);
        let validators = ComponentValidators::new(&data);

        assert!(validators.coordinates_in_bounds(-33.9249, 18.4241));
        assert!(validators.coordinates_in_bounds(-34.83, 16.45));
        assert!(!validators.coordinates_in_bounds(51.5, -0.12));
    }

    #[test]
    fn test_po_box_detection() {
        assert!(ComponentValidators::is_po_box("PO Box 123"));
        assert!(ComponentValidators::is_po_box("p.o. box 9"));
        assert!(ComponentValidators::is_po_box("P.O.Box"));
        assert!(!ComponentValidators::is_po_box("12 Post Office Road"));
    }
}
