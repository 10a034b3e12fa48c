//! Medal tallies by region, by edition and per country.
//!
//! All counts are taken from team-medal deduplicated rows, so a medal won by
//! a team of N athletes counts once. Regions that took part in the selected
//! slice without winning appear with zero counts.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use polars::prelude::DataFrame;
use serde::Serialize;

use olympics_model::{Filter, Medal, NormalizedRecord, ZeroFillPolicy};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::frame::{ToFrame, frame, i32_column, str_column, u32_column};

/// Gold, silver and bronze counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MedalCounts {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalCounts {
    pub fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }

    fn add(&mut self, record: &NormalizedRecord) {
        match record.medal {
            Some(Medal::Gold) => self.gold += 1,
            Some(Medal::Silver) => self.silver += 1,
            Some(Medal::Bronze) => self.bronze += 1,
            None => {}
        }
    }

    /// Descending by gold, silver, bronze, then total.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .gold
            .cmp(&self.gold)
            .then(other.silver.cmp(&self.silver))
            .then(other.bronze.cmp(&self.bronze))
            .then(other.total().cmp(&self.total()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyRow {
    pub region: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

impl TallyRow {
    fn new(region: &str, counts: MedalCounts) -> Self {
        Self {
            region: region.to_string(),
            gold: counts.gold,
            silver: counts.silver,
            bronze: counts.bronze,
            total: counts.total(),
        }
    }

    fn counts(&self) -> MedalCounts {
        MedalCounts {
            gold: self.gold,
            silver: self.silver,
            bronze: self.bronze,
        }
    }
}

/// Medal table, best region first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MedalTally {
    pub rows: Vec<TallyRow>,
}

impl MedalTally {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, region: &str) -> Option<&TallyRow> {
        self.rows.iter().find(|row| row.region == region)
    }
}

impl ToFrame for MedalTally {
    fn to_frame(&self) -> Result<DataFrame> {
        frame(vec![
            str_column("region", self.rows.iter().map(|row| row.region.as_str())),
            u32_column("gold", self.rows.iter().map(|row| row.gold)),
            u32_column("silver", self.rows.iter().map(|row| row.silver)),
            u32_column("bronze", self.rows.iter().map(|row| row.bronze)),
            u32_column("total", self.rows.iter().map(|row| row.total)),
        ])
    }
}

/// Medal tally filtered by edition and region.
///
/// With both filters concrete the result has at most one row.
pub fn medal_tally(ds: &Dataset, year: Filter<i32>, country: Filter<&str>) -> MedalTally {
    let selected =
        |record: &NormalizedRecord| year.accepts(&record.edition) && country.matches(&record.region);

    let mut by_region: HashMap<&str, MedalCounts> = HashMap::new();
    for record in ds.records().iter().filter(|record| selected(record)) {
        by_region.entry(record.region.as_str()).or_default();
    }
    for record in ds.medal_records().filter(|record| selected(record)) {
        by_region
            .entry(record.region.as_str())
            .or_default()
            .add(record);
    }

    let mut rows: Vec<TallyRow> = by_region
        .into_iter()
        .map(|(region, counts)| TallyRow::new(region, counts))
        .collect();
    rows.sort_by(|a, b| {
        a.counts()
            .rank_cmp(&b.counts())
            .then_with(|| a.region.cmp(&b.region))
    });
    MedalTally { rows }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditionTallyRow {
    pub region: String,
    pub edition: i32,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

/// Per-edition breakdown, ascending by edition then region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MedalTallyByEdition {
    pub rows: Vec<EditionTallyRow>,
}

impl ToFrame for MedalTallyByEdition {
    fn to_frame(&self) -> Result<DataFrame> {
        frame(vec![
            str_column("region", self.rows.iter().map(|row| row.region.as_str())),
            i32_column("edition", self.rows.iter().map(|row| row.edition)),
            u32_column("gold", self.rows.iter().map(|row| row.gold)),
            u32_column("silver", self.rows.iter().map(|row| row.silver)),
            u32_column("bronze", self.rows.iter().map(|row| row.bronze)),
            u32_column("total", self.rows.iter().map(|row| row.total)),
        ])
    }
}

/// Tally of every (region, edition) pair a region took part in.
pub fn medal_tally_by_edition(ds: &Dataset, country: Filter<&str>) -> MedalTallyByEdition {
    let mut cells: BTreeMap<(i32, &str), MedalCounts> = BTreeMap::new();
    for record in ds.records().iter().filter(|r| country.matches(&r.region)) {
        cells
            .entry((record.edition, record.region.as_str()))
            .or_default();
    }
    for record in ds.medal_records().filter(|r| country.matches(&r.region)) {
        cells
            .entry((record.edition, record.region.as_str()))
            .or_default()
            .add(record);
    }

    let rows = cells
        .into_iter()
        .map(|((edition, region), counts)| EditionTallyRow {
            region: region.to_string(),
            edition,
            gold: counts.gold,
            silver: counts.silver,
            bronze: counts.bronze,
            total: counts.total(),
        })
        .collect();
    MedalTallyByEdition { rows }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearlyMedals {
    pub edition: i32,
    pub medals: u32,
}

/// One country's medal count per edition, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountryYearlyMedals {
    pub country: String,
    pub rows: Vec<YearlyMedals>,
}

impl ToFrame for CountryYearlyMedals {
    fn to_frame(&self) -> Result<DataFrame> {
        frame(vec![
            i32_column("edition", self.rows.iter().map(|row| row.edition)),
            u32_column("medals", self.rows.iter().map(|row| row.medals)),
        ])
    }
}

/// Medals per edition for one region, zero-filled per the dataset options.
pub fn country_yearly_medals(ds: &Dataset, country: &str) -> CountryYearlyMedals {
    country_yearly_medals_with(ds, country, ds.options().zero_fill)
}

pub fn country_yearly_medals_with(
    ds: &Dataset,
    country: &str,
    zero_fill: ZeroFillPolicy,
) -> CountryYearlyMedals {
    let mut per_edition: BTreeMap<i32, u32> = BTreeMap::new();
    if zero_fill == ZeroFillPolicy::ParticipatedEditions {
        for record in ds.region_records(country) {
            per_edition.entry(record.edition).or_default();
        }
    }
    for record in ds.medal_records().filter(|r| r.region == country) {
        *per_edition.entry(record.edition).or_default() += 1;
    }

    CountryYearlyMedals {
        country: country.to_string(),
        rows: per_edition
            .into_iter()
            .map(|(edition, medals)| YearlyMedals { edition, medals })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olympics_model::{AnalysisOptions, RawEventRecord, RegionRecord};

    fn raw(name: &str, noc: &str, year: i32, event: &str, medal: Option<Medal>) -> RawEventRecord {
        RawEventRecord {
            name: name.to_string(),
            sex: None,
            age: None,
            height: None,
            weight: None,
            team: noc.to_string(),
            noc: noc.to_string(),
            games: format!("{year} Summer"),
            year,
            season: "Summer".to_string(),
            city: "City".to_string(),
            sport: "Swimming".to_string(),
            event: event.to_string(),
            medal,
        }
    }

    fn dataset(options: AnalysisOptions) -> Dataset {
        Dataset::build(
            &[
                raw("A", "USA", 2008, "100m", Some(Medal::Gold)),
                raw("B", "USA", 2008, "Relay", Some(Medal::Gold)),
                raw("C", "USA", 2008, "Relay", Some(Medal::Gold)),
                raw("D", "AUS", 2008, "100m", Some(Medal::Silver)),
                raw("E", "AUS", 2012, "100m", Some(Medal::Gold)),
                raw("F", "CHN", 2012, "100m", Some(Medal::Bronze)),
                raw("G", "FIJ", 2012, "100m", None),
                raw("H", "USA", 2016, "100m", None),
            ],
            &[
                RegionRecord::new("USA", "USA"),
                RegionRecord::new("AUS", "Australia"),
                RegionRecord::new("CHN", "China"),
                RegionRecord::new("FIJ", "Fiji"),
            ],
            options,
        )
    }

    #[test]
    fn overall_tally_sorted_by_medals() {
        let tally = medal_tally(
            &dataset(AnalysisOptions::default()),
            Filter::NoFilter,
            Filter::NoFilter,
        );
        let regions: Vec<&str> = tally.rows.iter().map(|r| r.region.as_str()).collect();
        assert_eq!(regions, vec!["USA", "Australia", "China", "Fiji"]);
        assert_eq!(tally.row("USA").map(|r| r.gold), Some(2));
        assert_eq!(tally.row("Fiji").map(|r| r.total), Some(0));
    }

    #[test]
    fn concrete_year_and_country_gives_one_row() {
        let ds = dataset(AnalysisOptions::default());
        let tally = medal_tally(&ds, Filter::Exact(2008), Filter::Exact("Australia"));
        assert_eq!(tally.len(), 1);
        assert_eq!(tally.rows[0].silver, 1);
        assert_eq!(tally.rows[0].total, 1);

        let none = medal_tally(&ds, Filter::Exact(1900), Filter::Exact("Australia"));
        assert!(none.is_empty());
        let frame = none.to_frame().unwrap();
        assert_eq!(frame.height(), 0);
        assert_eq!(frame.width(), 5);
    }

    #[test]
    fn by_edition_breakdown() {
        let ds = dataset(AnalysisOptions::default());
        let by_edition = medal_tally_by_edition(&ds, Filter::Exact("USA"));
        let rows: Vec<(i32, u32)> = by_edition
            .rows
            .iter()
            .map(|r| (r.edition, r.gold))
            .collect();
        assert_eq!(rows, vec![(2008, 2), (2016, 0)]);
    }

    #[test]
    fn yearly_medals_zero_fill() {
        let ds = dataset(AnalysisOptions::default());
        let filled = country_yearly_medals(&ds, "USA");
        assert_eq!(
            filled.rows,
            vec![
                YearlyMedals { edition: 2008, medals: 2 },
                YearlyMedals { edition: 2016, medals: 0 },
            ]
        );

        let omitted = country_yearly_medals_with(&ds, "USA", ZeroFillPolicy::Omit);
        assert_eq!(omitted.rows, vec![YearlyMedals { edition: 2008, medals: 2 }]);

        assert!(country_yearly_medals(&ds, "Narnia").rows.is_empty());
    }

    #[test]
    fn tally_frame_columns() {
        let ds = dataset(AnalysisOptions::default());
        let df = medal_tally(&ds, Filter::NoFilter, Filter::NoFilter)
            .to_frame()
            .unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["region", "gold", "silver", "bronze", "total"]);
        assert_eq!(df.height(), 4);
    }
}
