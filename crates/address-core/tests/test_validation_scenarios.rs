use address_core::{
    AddressInput, ComponentValidators, Country, ReferenceData, RuleBasedValidator,
};
use address_types::{AddressType, ConfidenceLevel, ValidationResult};

fn south_africa() -> RuleBasedValidator {
    RuleBasedValidator::for_country(Country::SouthAfrica).expect("built-in tables compile")
}

fn kazakhstan() -> RuleBasedValidator {
    RuleBasedValidator::for_country(Country::Kazakhstan).expect("built-in tables compile")
}

fn assert_invariants(result: &ValidationResult) {
    assert!((0.0..=100.0).contains(&result.confidence_score));
    assert_eq!(result.is_valid, result.confidence_score >= 70.0);
    assert_eq!(
        result.confidence_level,
        ConfidenceLevel::from_score(result.confidence_score)
    );
    assert!(result.coordinates.is_some(), "coordinates must always be resolved");
}

#[test]
fn test_complete_cape_town_address() {
    let result = south_africa()
        .validate_address("123 Main Street, Sea Point, Cape Town, Western Cape, 8005");

    assert_eq!(result.components.region.as_deref(), Some("Western Cape"));
    assert_eq!(result.components.city.as_deref(), Some("Cape Town"));
    assert_eq!(result.components.suburb.as_deref(), Some("Sea Point"));
    assert_eq!(result.components.postal_code.as_deref(), Some("8005"));
    assert_eq!(result.confidence_score, 100.0);
    assert_eq!(result.confidence_level, ConfidenceLevel::Confident);
    assert!(result.is_valid);
    assert!(result.issues.is_empty());
    assert_invariants(&result);
}

#[test]
fn test_po_box_address() {
    let result = south_africa().validate_address("PO Box 456, Johannesburg, Gauteng, 2000");

    assert_eq!(result.components.address_type, Some(AddressType::PoBox));
    assert_eq!(result.components.po_box_number.as_deref(), Some("456"));
    assert_eq!(result.components.region.as_deref(), Some("Gauteng"));
    assert_eq!(result.components.postal_code.as_deref(), Some("2000"));
    assert!(!result.issues.iter().any(|i| i == "Missing street address"));
    assert!(!result.issues.iter().any(|i| i.starts_with("Invalid postal code")));
    assert_eq!(result.confidence_score, 100.0);
    // The box number is both prefix and street residue
    assert_eq!(
        result.normalized_address,
        "PO Box 456, Po Box 456, Johannesburg, Gauteng, 2000"
    );
    assert_invariants(&result);
}

#[test]
fn test_missing_region_and_postal_code_is_likely() {
    let result = south_africa().validate_address("12 Long Street, Cape Town");

    assert!(result.issues.contains(&"Missing province/region".to_string()));
    assert!(result.issues.contains(&"Missing postal code".to_string()));
    assert_eq!(result.confidence_score, 70.0);
    assert_eq!(result.confidence_level, ConfidenceLevel::Likely);
    assert!(result.is_valid);
    assert_invariants(&result);
}

#[test]
fn test_invalid_region_code() {
    let result = south_africa().validate_address("456 Beyers Naude Drive, Randburg, GT, 2194");

    assert_eq!(result.components.region.as_deref(), Some("GT"));
    assert!(result.issues.iter().any(|i| i.contains("Invalid province: GT")));
    assert_eq!(result.confidence_score, 70.0);
    assert_invariants(&result);
}

#[test]
fn test_region_name_never_reported_missing() {
    let validator = south_africa();
    for region in &validator.reference().regions {
        let raw = format!("1 Church Street, {}", region.name);
        let result = validator.validate_address(&raw);
        assert_eq!(result.components.region.as_deref(), Some(region.name.as_str()));
        assert!(
            !result.issues.iter().any(|i| i.starts_with("Missing province")),
            "region {} reported missing",
            region.name
        );
        assert_invariants(&result);
    }
}

#[test]
fn test_postal_range_boundaries_for_every_region() {
    for country in Country::ALL {
        let data = ReferenceData::builtin(country);
        let validators = ComponentValidators::new(&data);
        let digits = data.postal_code_digits;

        for region in &data.regions {
            for range in &region.postal_ranges {
                let code = |value: u32| format!("{:0width$}", value, width = digits);
                assert!(validators.postal_code_valid(&code(range.min), Some(&region.name)));
                assert!(validators.postal_code_valid(&code(range.max), Some(&region.name)));

                let covered = |value: u32| region.postal_ranges.iter().any(|r| r.contains(value));
                if range.min > 0 && !covered(range.min - 1) {
                    assert!(!validators.postal_code_valid(&code(range.min - 1), Some(&region.name)));
                }
                if !covered(range.max + 1) {
                    assert!(!validators.postal_code_valid(&code(range.max + 1), Some(&region.name)));
                }
            }
        }
    }
}

#[test]
fn test_penalties_clamp_at_zero() {
    let result = south_africa().validate_address("P.O. Box, Atlantis, ZZ, 0001, 51.50, -0.12");

    assert_eq!(result.confidence_score, 0.0);
    assert_eq!(result.confidence_level, ConfidenceLevel::Failed);
    assert!(!result.is_valid);
    assert_invariants(&result);
}

#[test]
fn test_validation_is_idempotent() {
    let validator = south_africa();
    let raw = "Unit 4, 20 Beach Rd, Sea Point, CPT, 8005";
    let first = validator.validate_address(raw);
    let second = validator.validate_address(raw);
    assert_eq!(first, second);
}

#[test]
fn test_validator_is_shareable_across_threads() {
    let validator = std::sync::Arc::new(south_africa());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let validator = std::sync::Arc::clone(&validator);
            std::thread::spawn(move || {
                validator
                    .validate_address("123 Main Street, Sea Point, Cape Town, Western Cape, 8005")
                    .confidence_score
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 100.0);
    }
}

#[test]
fn test_unknown_place_resolves_to_country_center() {
    let validator = kazakhstan();
    let result = validator.validate_address("Somewhere far away");
    assert_eq!(result.coordinates, Some(validator.reference().country_center));
}

#[test]
fn test_kazakhstan_city_of_republican_significance() {
    let result = kazakhstan().validate_address("ul. Abaya 150, Almaty, 050000");

    assert_eq!(result.components.region.as_deref(), Some("Almaty"));
    assert_eq!(result.components.city.as_deref(), Some("Almaty"));
    assert_eq!(result.confidence_score, 100.0);
    assert_invariants(&result);
}

#[test]
fn test_kazakhstan_postal_code_outside_region() {
    let result = kazakhstan().validate_address("Kenesary Street 40, Astana, 050000");

    assert!(result.issues.contains(&"Invalid postal code: 050000".to_string()));
    assert!(result
        .suggestions
        .contains(&"Valid postal codes for Astana: 010000-010999".to_string()));
    assert_eq!(result.confidence_score, 85.0);
}

#[test]
fn test_po_box_number_with_postal_code_width() {
    let result = south_africa().validate_address("PO Box 1234, Pretoria, Gauteng, 0002");

    assert_eq!(result.components.po_box_number.as_deref(), Some("1234"));
    assert_eq!(result.components.postal_code.as_deref(), Some("0002"));
    assert!(!result
        .issues
        .contains(&"PO Box number not clearly specified".to_string()));
    assert_eq!(result.issues, vec!["Invalid postal code: 0002".to_string()]);
    assert_eq!(result.confidence_score, 85.0);
    assert_invariants(&result);
}

#[test]
fn test_almaty_street_named_after_oblast() {
    let validator = kazakhstan();
    for raw in [
        "Zhambyl Street 10, Almaty, 050000",
        "Zhetysu-2 microdistrict 5, Almaty, 050000",
    ] {
        let result = validator.validate_address(raw);
        assert_eq!(result.components.region.as_deref(), Some("Almaty"), "{}", raw);
        assert_eq!(result.components.city.as_deref(), Some("Almaty"), "{}", raw);
        assert_eq!(result.confidence_score, 100.0, "{}: {:?}", raw, result.issues);
        assert_invariants(&result);
    }
}

#[test]
fn test_area_abbreviation_is_not_an_invalid_region() {
    let result = south_africa().validate_address("12 Long Street, CBD, Cape Town, 8001");

    assert!(result.components.region.is_none());
    assert!(result.issues.contains(&"Missing province/region".to_string()));
    assert!(!result.issues.iter().any(|i| i.starts_with("Invalid province")));
    assert_eq!(result.confidence_score, 80.0);
    assert_invariants(&result);
}

#[test]
fn test_blank_input_never_reaches_the_pipeline() {
    assert!(AddressInput::new("   ").is_err());
}
