//! Row types for the two source tables and the normalized dataset.

use serde::{Deserialize, Serialize};

use crate::enums::{Medal, Sex};

/// One athlete-event participation as read from the events table.
///
/// Never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEventRecord {
    pub name: String,
    pub sex: Option<Sex>,
    pub age: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub team: String,
    pub noc: String,
    /// Games label, e.g. "2016 Summer".
    pub games: String,
    pub year: i32,
    pub season: String,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,
}

/// One row of the NOC → region reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub noc: String,
    /// `None` when the reference table lists the code without a region.
    pub region: Option<String>,
    pub notes: Option<String>,
}

impl RegionRecord {
    pub fn new(noc: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            noc: noc.into(),
            region: Some(region.into()),
            notes: None,
        }
    }
}

/// A raw record joined with its region and expanded for aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub name: String,
    pub sex: Option<Sex>,
    pub age: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub team: String,
    pub noc: String,
    pub games: String,
    pub season: String,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,
    pub region: String,
    /// Calendar year of the Games, taken from the year column.
    pub edition: i32,
    pub is_gold: bool,
    pub is_silver: bool,
    pub is_bronze: bool,
}

impl NormalizedRecord {
    /// Derives the normalized row. The medal indicators are mutually exclusive.
    pub fn from_raw(raw: &RawEventRecord, region: impl Into<String>) -> Self {
        Self {
            name: raw.name.clone(),
            sex: raw.sex,
            age: raw.age,
            height: raw.height,
            weight: raw.weight,
            team: raw.team.clone(),
            noc: raw.noc.clone(),
            games: raw.games.clone(),
            season: raw.season.clone(),
            city: raw.city.clone(),
            sport: raw.sport.clone(),
            event: raw.event.clone(),
            medal: raw.medal,
            region: region.into(),
            edition: raw.year,
            is_gold: raw.medal == Some(Medal::Gold),
            is_silver: raw.medal == Some(Medal::Silver),
            is_bronze: raw.medal == Some(Medal::Bronze),
        }
    }

    pub fn has_medal(&self) -> bool {
        self.medal.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(medal: Option<Medal>) -> RawEventRecord {
        RawEventRecord {
            name: "A Athlete".to_string(),
            sex: Some(Sex::Female),
            age: Some(24.0),
            height: None,
            weight: None,
            team: "Norway".to_string(),
            noc: "NOR".to_string(),
            games: "1992 Summer".to_string(),
            year: 1992,
            season: "Summer".to_string(),
            city: "Barcelona".to_string(),
            sport: "Rowing".to_string(),
            event: "Rowing Women's Single Sculls".to_string(),
            medal,
        }
    }

    #[test]
    fn indicators_are_mutually_exclusive() {
        for medal in [None, Some(Medal::Gold), Some(Medal::Silver), Some(Medal::Bronze)] {
            let record = NormalizedRecord::from_raw(&raw(medal), "Norway");
            let set = [record.is_gold, record.is_silver, record.is_bronze]
                .iter()
                .filter(|flag| **flag)
                .count();
            assert_eq!(set, usize::from(medal.is_some()));
            assert_eq!(record.edition, 1992);
            assert_eq!(record.region, "Norway");
        }
    }
}
