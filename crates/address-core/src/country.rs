//! Supported countries and normalization of user-supplied country names

use crate::error::{Result, ValidatorError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Countries with built-in reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "ZA", alias = "south-africa")]
    SouthAfrica,
    #[serde(rename = "KZ", alias = "kazakhstan")]
    Kazakhstan,
}

impl Country {
    pub const ALL: [Country; 2] = [Country::SouthAfrica, Country::Kazakhstan];

    /// ISO 3166-1 alpha-2 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::SouthAfrica => "ZA",
            Self::Kazakhstan => "KZ",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SouthAfrica => "South Africa",
            Self::Kazakhstan => "Kazakhstan",
        }
    }

    /// Lowercase hyphenated form, e.g. `south-africa`
    pub fn slug(&self) -> &'static str {
        match self {
            Self::SouthAfrica => "south-africa",
            Self::Kazakhstan => "kazakhstan",
        }
    }
}

impl Default for Country {
    fn default() -> Self {
        Self::SouthAfrica
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase, turn spaces and underscores into hyphens, collapse repeats.
fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    for ch in input.chars() {
        let ch = match ch {
            ' ' | '_' => '-',
            other => other.to_ascii_lowercase(),
        };
        if ch == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(ch);
    }
    slug.trim_matches('-').to_string()
}

impl FromStr for Country {
    type Err = ValidatorError;

    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidatorError::InvalidInput(
                "country input is required".to_string(),
            ));
        }

        let slug = slugify(trimmed);
        Country::ALL
            .into_iter()
            .find(|country| {
                country.code().eq_ignore_ascii_case(trimmed) || country.slug() == slug
            })
            .ok_or_else(|| ValidatorError::UnsupportedCountry(trimmed.to_string()))
    }
}
