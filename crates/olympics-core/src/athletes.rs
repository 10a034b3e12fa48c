//! Most successful athletes.
//!
//! Individual medals are counted per athlete row, not per team award: every
//! member of a medal-winning team earns that medal.

use std::collections::{BTreeSet, HashMap};

use polars::prelude::DataFrame;
use serde::Serialize;

use olympics_model::{Filter, Medal, MedalWeights, NormalizedRecord};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::frame::{ToFrame, frame, str_column, u32_column};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AthleteRank {
    /// 1-based position in the ranking.
    pub rank: u32,
    pub name: String,
    pub regions: Vec<String>,
    pub sports: Vec<String>,
    pub medals: u32,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub score: u32,
}

impl AthleteRank {
    pub fn regions_label(&self) -> String {
        self.regions.join(", ")
    }

    pub fn sports_label(&self) -> String {
        self.sports.join(", ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopAthletes {
    pub rows: Vec<AthleteRank>,
}

impl TopAthletes {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ToFrame for TopAthletes {
    fn to_frame(&self) -> Result<DataFrame> {
        let regions: Vec<String> = self.rows.iter().map(AthleteRank::regions_label).collect();
        let sports: Vec<String> = self.rows.iter().map(AthleteRank::sports_label).collect();
        frame(vec![
            u32_column("rank", self.rows.iter().map(|row| row.rank)),
            str_column("name", self.rows.iter().map(|row| row.name.as_str())),
            str_column("regions", regions.iter().map(String::as_str)),
            str_column("sport", sports.iter().map(String::as_str)),
            u32_column("medals", self.rows.iter().map(|row| row.medals)),
            u32_column("score", self.rows.iter().map(|row| row.score)),
        ])
    }
}

#[derive(Default)]
struct Tally<'a> {
    regions: BTreeSet<&'a str>,
    sports: BTreeSet<&'a str>,
    gold: u32,
    silver: u32,
    bronze: u32,
    score: u32,
}

impl<'a> Tally<'a> {
    fn add(&mut self, record: &'a NormalizedRecord, medal: Medal, weights: MedalWeights) {
        self.regions.insert(&record.region);
        self.sports.insert(&record.sport);
        let count = match medal {
            Medal::Gold => &mut self.gold,
            Medal::Silver => &mut self.silver,
            Medal::Bronze => &mut self.bronze,
        };
        *count = count.saturating_add(1);
        self.score = self.score.saturating_add(weights.weight(medal));
    }

    fn into_rank(self, name: &str) -> AthleteRank {
        AthleteRank {
            rank: 0,
            name: name.to_string(),
            regions: self.regions.into_iter().map(str::to_string).collect(),
            sports: self.sports.into_iter().map(str::to_string).collect(),
            medals: self
                .gold
                .saturating_add(self.silver)
                .saturating_add(self.bronze),
            gold: self.gold,
            silver: self.silver,
            bronze: self.bronze,
            score: self.score,
        }
    }
}

/// Ranks medal winners by medal count, then region label and name ascending,
/// and keeps the first `limit`. The weighted score is reported but never
/// changes the order.
pub fn rank_athletes(
    ds: &Dataset,
    sport: Filter<&str>,
    country: Filter<&str>,
    limit: usize,
) -> TopAthletes {
    let weights = ds.options().medal_weights;
    let mut by_name: HashMap<&str, Tally<'_>> = HashMap::new();
    for record in ds.records() {
        let Some(medal) = record.medal else {
            continue;
        };
        if !sport.matches(&record.sport) || !country.matches(&record.region) {
            continue;
        }
        by_name
            .entry(record.name.as_str())
            .or_default()
            .add(record, medal, weights);
    }

    let mut rows: Vec<AthleteRank> = by_name
        .into_iter()
        .map(|(name, tally)| tally.into_rank(name))
        .collect();
    rows.sort_by(|a, b| {
        b.medals
            .cmp(&a.medals)
            .then_with(|| a.regions.cmp(&b.regions))
            .then_with(|| a.name.cmp(&b.name))
    });
    rows.truncate(limit);
    for (idx, row) in rows.iter_mut().enumerate() {
        row.rank = u32::try_from(idx + 1).unwrap_or(u32::MAX);
    }
    TopAthletes { rows }
}

/// Global ranking, optionally restricted to one sport.
pub fn top_athletes(ds: &Dataset, sport: Filter<&str>) -> TopAthletes {
    rank_athletes(ds, sport, Filter::NoFilter, ds.options().top_athletes)
}

/// Ranking of one region's athletes across all sports.
pub fn top_athletes_by_country(ds: &Dataset, country: &str) -> TopAthletes {
    rank_athletes(
        ds,
        Filter::NoFilter,
        Filter::Exact(country),
        ds.options().top_athletes_by_country,
    )
}
