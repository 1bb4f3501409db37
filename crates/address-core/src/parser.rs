//! Rule-based address parser
//!
//! Works on a lowercase working copy of the input. Each extraction step
//! removes what it matched so later steps cannot claim the same text, and
//! whatever survives all steps becomes the street address.
//!
//! Candidates are tried in table declaration order and the first hit wins.
//! Ambiguous input (a city name that is also part of another city's suburb,
//! say) is therefore resolved by the order of the reference tables, not by
//! any notion of best match.
//!
//! Region codes and aliases match as whole words, bounded by any
//! non-alphanumeric character rather than only by spaces, so `WC,` still
//! matches while `nc` inside `Fence` does not. Full region names match as
//! plain substrings.

use crate::error::{Result, ValidatorError};
use crate::reference::ReferenceData;
use address_types::{AddressType, ParsedComponents};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use std::sync::Arc;

static COORDINATE_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(-?\b\d{1,2}\.\d{2,})\s*[,;]\s*(-?\b\d{1,3}\.\d{2,})\b")
        .expect("Failed to compile coordinate regex")
});

static PO_BOX_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)p\.?o\.?\s*box\s*(\d+)").expect("Failed to compile PO box regex")
});

static UNIT_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(unit|apartment|apt|flat)\s*(\d+[a-z]?)").expect("Failed to compile unit regex")
});

static REGION_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2,3}$").expect("Failed to compile region token regex"));

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

/// Parses raw address text into [`ParsedComponents`]
pub struct AddressParser {
    reference: Arc<ReferenceData>,
    abbreviations: Vec<(Regex, String)>,
    postal_code: Regex,
}

impl AddressParser {
    pub fn new(reference: Arc<ReferenceData>) -> Result<Self> {
        let abbreviations = reference
            .abbreviations
            .iter()
            .map(|abbr| {
                let pattern = format!(r"\b{}\b", regex::escape(&abbr.short.to_lowercase()));
                Regex::new(&pattern)
                    .map(|re| (re, abbr.expansion.to_lowercase()))
                    .map_err(|e| {
                        ValidatorError::ReferenceData(format!(
                            "Invalid abbreviation '{}': {}",
                            abbr.short, e
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let postal_code = Regex::new(&format!(r"\b(\d{{{}}})\b", reference.postal_code_digits))
            .map_err(|e| ValidatorError::ReferenceData(format!("Invalid postal code width: {}", e)))?;

        Ok(Self {
            reference,
            abbreviations,
            postal_code,
        })
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Extract components from raw address text. Never fails: anything that
    /// cannot be found is simply left out.
    pub fn parse(&self, raw: &str) -> ParsedComponents {
        let mut components = ParsedComponents::default();
        let mut original = raw.to_string();
        let mut working = self.expand_abbreviations(&raw.to_lowercase());

        // Explicit coordinates go first so their digits are not read as a postal code
        if let Some(caps) = COORDINATE_PAIR.captures(raw) {
            let lat = caps[1].parse::<f64>();
            let lon = caps[2].parse::<f64>();
            if let (Ok(lat), Ok(lon)) = (lat, lon) {
                log::debug!("Parsed coordinates ({}, {})", lat, lon);
                components.latitude = Some(lat);
                components.longitude = Some(lon);
                let matched = caps[0].to_string();
                original = original.replacen(&matched, "", 1);
                working = COORDINATE_PAIR.replace(&working, "").into_owned();
            }
        }

        // Box and unit numbers are read before the postal code so a box number
        // of postal code width is not taken for one
        if let Some(caps) = PO_BOX_NUMBER.captures(&working) {
            components.po_box_number = Some(caps[1].to_string());
            components.address_type = Some(AddressType::PoBox);
        }

        if let Some(caps) = UNIT_NUMBER.captures(&working) {
            components.unit = Some(caps[2].to_string());
        }

        let postal_source = PO_BOX_NUMBER.replace_all(&original, "");
        if let Some(caps) = self.postal_code.captures(&postal_source) {
            let code = caps[1].to_string();
            working = remove_word(&working, &code);
            log::debug!("Parsed postal code {}", code);
            components.postal_code = Some(code);
        }

        if let Some((region, remaining)) = self.extract_region(raw, &working) {
            log::debug!("Parsed region {}", region);
            components.region = Some(region);
            working = remaining;
        }

        for alias in &self.reference.country_aliases {
            working = remove_word(&working, &alias.to_lowercase());
        }

        if let Some(city) = self
            .reference
            .all_cities()
            .find(|city| working.contains(&city.to_lowercase()))
        {
            working = working.replace(&city.to_lowercase(), "");
            components.city = Some(city.to_string());
        } else if let Some(region) = components
            .region
            .as_deref()
            .and_then(|name| self.reference.region(name))
            .filter(|region| region.is_city_region())
        {
            components.city = Some(region.capital.clone());
        }

        if let Some(city) = components.city.as_deref() {
            if let Some(suburb) = self
                .reference
                .suburbs_of(city)
                .iter()
                .find(|suburb| working.contains(&suburb.to_lowercase()))
            {
                working = working.replace(&suburb.to_lowercase(), "");
                components.suburb = Some(suburb.clone());
            }
        }

        components.street_address = street_from_residue(&working);
        log::debug!("Parsed components for '{}': {:?}", raw, components);

        components
    }

    fn expand_abbreviations(&self, text: &str) -> String {
        let mut expanded = text.to_string();
        for (pattern, expansion) in &self.abbreviations {
            expanded = pattern
                .replace_all(&expanded, NoExpand(expansion))
                .into_owned();
        }
        expanded
    }

    /// Region tiers: full name or alias, then short code, then a bare
    /// upper-case segment kept literally. Returns the region and the working
    /// copy with the matched text removed.
    fn extract_region(&self, raw: &str, working: &str) -> Option<(String, String)> {
        for region in &self.reference.regions {
            let needle = region.name.to_lowercase();
            if working.contains(&needle) {
                return Some((region.name.clone(), working.replace(&needle, "")));
            }
            for alias in &region.aliases {
                let needle = alias.to_lowercase();
                if contains_word(working, &needle) {
                    return Some((region.name.clone(), remove_word(working, &needle)));
                }
            }
        }

        for region in &self.reference.regions {
            let code = region.code.to_lowercase();
            if contains_word(working, &code) {
                return Some((region.name.clone(), remove_word(working, &code)));
            }
        }

        // Only the last segment before any postal code, coordinates or
        // country name can be a literal region
        let segment = raw
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .rev()
            .find(|segment| !self.is_trailing_segment(segment))?;

        let lower = segment.to_lowercase();
        if REGION_TOKEN.is_match(segment) && contains_word(working, &lower) {
            Some((segment.to_string(), remove_word(working, &lower)))
        } else {
            None
        }
    }

    /// Postal codes, coordinates and country names that close an address line
    fn is_trailing_segment(&self, segment: &str) -> bool {
        let numeric = segment
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | ' '));
        numeric
            || self
                .reference
                .country_aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(segment))
    }
}

/// Collapse whitespace, trim punctuation and title-case the residue.
/// Residue of three characters or fewer is treated as noise.
fn street_from_residue(working: &str) -> Option<String> {
    let collapsed = WHITESPACE.replace_all(working, " ");
    let trimmed = collapsed.trim();
    if trimmed.chars().count() <= 3 {
        return None;
    }

    let cleaned = trimmed.trim_matches(|c: char| matches!(c, ' ' | ',' | '.' | '-'));
    if cleaned.is_empty() {
        None
    } else {
        Some(title_case(cleaned))
    }
}

/// Upper-case a letter that follows a non-letter, lower-case the rest
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}

/// Byte ranges where `word` occurs with no alphanumeric neighbour
fn word_spans(haystack: &str, word: &str) -> Vec<(usize, usize)> {
    if word.is_empty() {
        return Vec::new();
    }

    haystack
        .match_indices(word)
        .map(|(start, _)| (start, start + word.len()))
        .filter(|&(start, end)| {
            let before = haystack[..start].chars().next_back();
            let after = haystack[end..].chars().next();
            !before.map_or(false, char::is_alphanumeric) && !after.map_or(false, char::is_alphanumeric)
        })
        .collect()
}

fn contains_word(haystack: &str, word: &str) -> bool {
    !word_spans(haystack, word).is_empty()
}

fn remove_word(haystack: &str, word: &str) -> String {
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    for (start, end) in word_spans(haystack, word) {
        out.push_str(&haystack[last..start]);
        last = end;
    }
    out.push_str(&haystack[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::Country;

    fn parser(country: Country) -> AddressParser {
        AddressParser::new(ReferenceData::builtin(country)).unwrap()
    }

    #[test]
    fn test_parse_full_street_address() {
        let components = parser(Country::SouthAfrica)
            .parse("123 Main Street, Sea Point, Cape Town, Western Cape, 8005");

        assert_eq!(components.street_address.as_deref(), Some("123 Main Street"));
        assert_eq!(components.suburb.as_deref(), Some("Sea Point"));
        assert_eq!(components.city.as_deref(), Some("Cape Town"));
        assert_eq!(components.region.as_deref(), Some("Western Cape"));
        assert_eq!(components.postal_code.as_deref(), Some("8005"));
        assert!(components.address_type.is_none());
    }

    #[test]
    fn test_abbreviations_are_expanded() {
        let components = parser(Country::SouthAfrica).parse("12 Main Rd, Sea Point, CPT");

        assert_eq!(components.city.as_deref(), Some("Cape Town"));
        assert_eq!(components.suburb.as_deref(), Some("Sea Point"));
        assert_eq!(components.street_address.as_deref(), Some("12 Main Road"));
        assert!(components.region.is_none(), "expanded abbreviation must not become a region");
    }

    #[test]
    fn test_region_code_is_resolved_to_name() {
        let components = parser(Country::SouthAfrica).parse("45 Long Street, Cape Town, WC, 8001");
        assert_eq!(components.region.as_deref(), Some("Western Cape"));
        assert_eq!(components.street_address.as_deref(), Some("45 Long Street"));
    }

    #[test]
    fn test_region_code_does_not_match_inside_words() {
        // "nc" and "ec" occur inside words here
        let components = parser(Country::SouthAfrica).parse("7 Fence Road, Welkom");
        assert_eq!(components.city.as_deref(), Some("Welkom"));
        assert!(components.region.is_none());
    }

    #[test]
    fn test_unknown_region_token_is_kept_literally() {
        let components =
            parser(Country::SouthAfrica).parse("456 Beyers Naude Drive, Randburg, GT, 2194");
        assert_eq!(components.region.as_deref(), Some("GT"));
        assert_eq!(components.city.as_deref(), Some("Randburg"));
        assert_eq!(components.street_address.as_deref(), Some("456 Beyers Naude Drive"));
        assert_eq!(components.postal_code.as_deref(), Some("2194"));
    }

    #[test]
    fn test_country_alias_is_not_a_region() {
        let components =
            parser(Country::SouthAfrica).parse("10 Oak Avenue, Durban, KwaZulu-Natal, 4001, RSA");
        assert_eq!(components.region.as_deref(), Some("KwaZulu-Natal"));
        assert_eq!(components.street_address.as_deref(), Some("10 Oak Avenue"));
    }

    #[test]
    fn test_po_box_is_extracted() {
        let components = parser(Country::SouthAfrica).parse("PO Box 456, Johannesburg, Gauteng, 2000");
        assert_eq!(components.address_type, Some(AddressType::PoBox));
        assert_eq!(components.po_box_number.as_deref(), Some("456"));
        assert_eq!(components.city.as_deref(), Some("Johannesburg"));
        assert_eq!(components.region.as_deref(), Some("Gauteng"));
        // The box text is not stripped and survives as street residue
        assert_eq!(components.street_address.as_deref(), Some("Po Box 456"));
    }

    #[test]
    fn test_unit_number_after_expansion() {
        let components =
            parser(Country::SouthAfrica).parse("Apt 4B, 20 Beach Road, Sea Point, Cape Town");
        assert_eq!(components.unit.as_deref(), Some("4b"));
    }

    #[test]
    fn test_explicit_coordinates_are_not_postal_codes() {
        let components = parser(Country::SouthAfrica).parse("12 Long Street, Cape Town, -33.9249, 18.4241");
        assert_eq!(components.latitude, Some(-33.9249));
        assert_eq!(components.longitude, Some(18.4241));
        assert!(components.postal_code.is_none());
        assert_eq!(components.street_address.as_deref(), Some("12 Long Street"));
    }

    #[test]
    fn test_short_residue_is_dropped() {
        let components = parser(Country::SouthAfrica).parse("Cape Town, Western Cape, 8001");
        assert!(components.street_address.is_none());
    }

    #[test]
    fn test_kazakhstan_city_region() {
        let components = parser(Country::Kazakhstan).parse("ul. Abaya 150, Almaty, 050000");
        assert_eq!(components.region.as_deref(), Some("Almaty"));
        assert_eq!(components.city.as_deref(), Some("Almaty"));
        assert_eq!(components.postal_code.as_deref(), Some("050000"));
        assert_eq!(components.street_address.as_deref(), Some("Ulitsa. Abaya 150"));
    }

    #[test]
    fn test_kazakhstan_oblast_before_city_region() {
        let components = parser(Country::Kazakhstan).parse("Abylai Khan 5, Talgar, Almaty Region, 040000");
        assert_eq!(components.region.as_deref(), Some("Almaty Region"));
        assert_eq!(components.city.as_deref(), Some("Talgar"));
    }

    #[test]
    fn test_box_number_of_postal_width_is_not_a_postal_code() {
        let components = parser(Country::SouthAfrica).parse("PO Box 1234, Pretoria, Gauteng, 0002");
        assert_eq!(components.po_box_number.as_deref(), Some("1234"));
        assert_eq!(components.postal_code.as_deref(), Some("0002"));
        assert_eq!(components.city.as_deref(), Some("Pretoria"));
        assert_eq!(components.street_address.as_deref(), Some("Po Box 1234"));
    }

    #[test]
    fn test_street_named_after_oblast_stays_in_city_region() {
        let parser = parser(Country::Kazakhstan);

        let components = parser.parse("Zhambyl Street 10, Almaty, 050000");
        assert_eq!(components.region.as_deref(), Some("Almaty"));
        assert_eq!(components.street_address.as_deref(), Some("Zhambyl Street 10"));

        let components = parser.parse("Zhetysu-2 microdistrict 5, Almaty, 050000");
        assert_eq!(components.region.as_deref(), Some("Almaty"));
        assert_eq!(
            components.street_address.as_deref(),
            Some("Zhetysu-2 Microdistrict 5")
        );
    }

    #[test]
    fn test_qualified_oblast_alias_matches() {
        let components = parser(Country::Kazakhstan).parse("Tole Bi Street 3, Karatau, Zhambyl Oblast, 080000");
        assert_eq!(components.region.as_deref(), Some("Jambyl Region"));
        assert_eq!(components.city.as_deref(), Some("Karatau"));
    }

    #[test]
    fn test_area_token_before_city_is_not_a_region() {
        let components = parser(Country::SouthAfrica).parse("12 Long Street, CBD, Cape Town, 8001");
        assert!(components.region.is_none());
        assert_eq!(components.city.as_deref(), Some("Cape Town"));
        assert_eq!(components.postal_code.as_deref(), Some("8001"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("12a main road"), "12A Main Road");
        assert_eq!(title_case("o'brien street"), "O'Brien Street");
        assert_eq!(title_case("BEYERS NAUDE"), "Beyers Naude");
    }

    #[test]
    fn test_remove_word_respects_boundaries() {
        assert_eq!(remove_word("gp, gpo gp", "gp"), ", gpo ");
        assert!(!contains_word("fence", "nc"));
        assert!(contains_word("welkom, nc", "nc"));
    }
}
