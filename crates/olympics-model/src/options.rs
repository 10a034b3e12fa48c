//! Configuration options for dataset preparation and queries.

use serde::{Deserialize, Serialize};

use crate::enums::{Medal, Season};

/// Default row limit for the global most-successful-athletes ranking.
pub const DEFAULT_TOP_ATHLETES: usize = 15;

/// Default row limit for the per-country athlete ranking.
pub const DEFAULT_TOP_ATHLETES_BY_COUNTRY: usize = 10;

/// Region label used when unresolved codes are bucketed instead of dropped.
pub const UNKNOWN_REGION: &str = "Unknown";

/// What to do with rows whose NOC code has no region mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnresolvedRegionPolicy {
    /// Remove the row from the normalized dataset.
    #[default]
    Drop,
    /// Keep the row under the [`UNKNOWN_REGION`] label.
    Bucket,
}

/// Whether per-edition medal series include editions without medals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZeroFillPolicy {
    /// Emit a zero row for every edition the country took part in.
    #[default]
    ParticipatedEditions,
    /// Emit only editions with at least one medal.
    Omit,
}

/// Points per medal color for athlete rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalWeights {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalWeights {
    /// One point per medal regardless of color.
    pub const UNIT: MedalWeights = MedalWeights {
        gold: 1,
        silver: 1,
        bronze: 1,
    };

    pub fn new(gold: u32, silver: u32, bronze: u32) -> Self {
        Self {
            gold,
            silver,
            bronze,
        }
    }

    pub fn weight(&self, medal: Medal) -> u32 {
        match medal {
            Medal::Gold => self.gold,
            Medal::Silver => self.silver,
            Medal::Bronze => self.bronze,
        }
    }
}

impl Default for MedalWeights {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Options controlling preprocessing and query behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Season kept by the preprocessor; every other season is excluded.
    pub season: Season,

    /// Handling of NOC codes missing from the region table.
    pub unresolved_regions: UnresolvedRegionPolicy,

    /// Remove rows that are identical in every field after the region join.
    pub drop_exact_duplicates: bool,

    /// Zero rows in per-edition country medal series.
    pub zero_fill: ZeroFillPolicy,

    /// Row limit for the global athlete ranking.
    pub top_athletes: usize,

    /// Row limit for the per-country athlete ranking.
    pub top_athletes_by_country: usize,

    /// Medal weighting for athlete ranking scores.
    pub medal_weights: MedalWeights,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            season: Season::Summer,
            unresolved_regions: UnresolvedRegionPolicy::Drop,
            drop_exact_duplicates: true,
            zero_fill: ZeroFillPolicy::ParticipatedEditions,
            top_athletes: DEFAULT_TOP_ATHLETES,
            top_athletes_by_country: DEFAULT_TOP_ATHLETES_BY_COUNTRY,
            medal_weights: MedalWeights::UNIT,
        }
    }
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_season(mut self, season: Season) -> Self {
        self.season = season;
        self
    }

    #[must_use]
    pub fn with_unresolved_regions(mut self, policy: UnresolvedRegionPolicy) -> Self {
        self.unresolved_regions = policy;
        self
    }

    #[must_use]
    pub fn with_drop_exact_duplicates(mut self, enable: bool) -> Self {
        self.drop_exact_duplicates = enable;
        self
    }

    #[must_use]
    pub fn with_zero_fill(mut self, policy: ZeroFillPolicy) -> Self {
        self.zero_fill = policy;
        self
    }

    #[must_use]
    pub fn with_top_athletes(mut self, limit: usize) -> Self {
        self.top_athletes = limit;
        self
    }

    #[must_use]
    pub fn with_top_athletes_by_country(mut self, limit: usize) -> Self {
        self.top_athletes_by_country = limit;
        self
    }

    #[must_use]
    pub fn with_medal_weights(mut self, weights: MedalWeights) -> Self {
        self.medal_weights = weights;
        self
    }
}
