//! Coded values found in the athlete events table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Returns true for cell values the source dataset uses to mean "no value".
///
/// The public athlete events export writes `NA` for missing medals, ages and
/// measurements; empty cells are treated the same way.
pub fn is_missing_token(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("NA") || trimmed.eq_ignore_ascii_case("nan")
}

/// Medal awarded for one athlete-event participation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub const ALL: [Medal; 3] = [Medal::Gold, Medal::Silver, Medal::Bronze];

    pub fn as_str(self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }

    /// Parses a medal cell. Missing tokens and `None` yield `Ok(None)`.
    pub fn parse_outcome(value: &str) -> Result<Option<Medal>, ModelError> {
        if is_missing_token(value) || value.trim().eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl FromStr for Medal {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Medal::ALL
            .into_iter()
            .find(|medal| medal.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownMedal(trimmed.to_string()))
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Games season. Only one season is analysed at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Season {
    #[default]
    Summer,
    Winter,
}

impl Season {
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Winter => "Winter",
        }
    }

    /// Case-insensitive comparison against a raw season cell.
    pub fn matches(self, raw: &str) -> bool {
        raw.trim().eq_ignore_ascii_case(self.as_str())
    }
}

impl FromStr for Season {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "summer" => Ok(Season::Summer),
            "winter" => Ok(Season::Winter),
            _ => Err(ModelError::UnknownSeason(value.trim().to_string())),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn code(self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

impl FromStr for Sex {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "M" | "MALE" => Ok(Sex::Male),
            "F" | "FEMALE" => Ok(Sex::Female),
            _ => Err(ModelError::UnknownSex(value.trim().to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medal_outcome_parsing() {
        assert_eq!(Medal::parse_outcome("Gold"), Ok(Some(Medal::Gold)));
        assert_eq!(Medal::parse_outcome(" bronze "), Ok(Some(Medal::Bronze)));
        assert_eq!(Medal::parse_outcome("NA"), Ok(None));
        assert_eq!(Medal::parse_outcome(""), Ok(None));
        assert_eq!(Medal::parse_outcome("None"), Ok(None));
        assert!(Medal::parse_outcome("Platinum").is_err());
    }

    #[test]
    fn season_matches_raw_cells() {
        assert!(Season::Summer.matches("Summer"));
        assert!(Season::Summer.matches(" summer"));
        assert!(!Season::Summer.matches("Winter"));
        assert_eq!("WINTER".parse::<Season>(), Ok(Season::Winter));
    }

    #[test]
    fn sex_codes() {
        assert_eq!("m".parse::<Sex>(), Ok(Sex::Male));
        assert_eq!("F".parse::<Sex>(), Ok(Sex::Female));
        assert!("X".parse::<Sex>().is_err());
        assert_eq!(Sex::Female.to_string(), "F");
    }

    #[test]
    fn missing_tokens() {
        assert!(is_missing_token(""));
        assert!(is_missing_token("  NA "));
        assert!(!is_missing_token("0"));
    }
}
