//! Participation counts over time.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

use olympics_model::{NormalizedRecord, Sex};

use crate::dataset::Dataset;
use crate::dedupe::AthleteKey;
use crate::error::Result;
use crate::frame::{ToFrame, frame, i32_column, u32_column};

/// Value counted per edition by [`count_over_time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Nations,
    Events,
    Athletes,
    Sports,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Nations,
        Dimension::Events,
        Dimension::Athletes,
        Dimension::Sports,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Nations => "nations",
            Dimension::Events => "events",
            Dimension::Athletes => "athletes",
            Dimension::Sports => "sports",
        }
    }

    fn value(self, record: &NormalizedRecord) -> &str {
        match self {
            Dimension::Nations => &record.region,
            Dimension::Events => &record.event,
            Dimension::Athletes => &record.name,
            Dimension::Sports => &record.sport,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|dim| dim.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("unknown dimension '{value}'"))
    }
}

/// Whether counts restart every edition or accumulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Accumulation {
    /// Distinct values seen in that edition.
    #[default]
    PerEdition,
    /// Distinct values seen in that edition or any earlier one.
    Cumulative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditionCount {
    pub edition: i32,
    pub count: u32,
}

/// Time series with strictly ascending editions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountOverTime {
    pub dimension: Dimension,
    pub rows: Vec<EditionCount>,
}

impl ToFrame for CountOverTime {
    fn to_frame(&self) -> Result<DataFrame> {
        frame(vec![
            i32_column("edition", self.rows.iter().map(|row| row.edition)),
            u32_column("count", self.rows.iter().map(|row| row.count)),
        ])
    }
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

pub fn count_over_time(ds: &Dataset, dimension: Dimension, accumulation: Accumulation) -> CountOverTime {
    let mut per_edition: BTreeMap<i32, HashSet<&str>> = BTreeMap::new();
    for record in ds.records() {
        per_edition
            .entry(record.edition)
            .or_default()
            .insert(dimension.value(record));
    }

    let rows = match accumulation {
        Accumulation::PerEdition => per_edition
            .iter()
            .map(|(&edition, values)| EditionCount {
                edition,
                count: count(values.len()),
            })
            .collect(),
        Accumulation::Cumulative => {
            let mut seen: HashSet<&str> = HashSet::new();
            per_edition
                .iter()
                .map(|(&edition, values)| {
                    seen.extend(values.iter().copied());
                    EditionCount {
                        edition,
                        count: count(seen.len()),
                    }
                })
                .collect()
        }
    };

    CountOverTime { dimension, rows }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenderRow {
    pub edition: i32,
    pub male: u32,
    pub female: u32,
}

/// Distinct male and female athletes per edition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenderParticipation {
    pub rows: Vec<GenderRow>,
}

impl ToFrame for GenderParticipation {
    fn to_frame(&self) -> Result<DataFrame> {
        frame(vec![
            i32_column("edition", self.rows.iter().map(|row| row.edition)),
            u32_column("male", self.rows.iter().map(|row| row.male)),
            u32_column("female", self.rows.iter().map(|row| row.female)),
        ])
    }
}

/// Athletes are distinct on (name, region); rows without a sex are skipped.
/// Every edition of the dataset appears, with zeros where nobody of a sex took part.
pub fn gender_participation(ds: &Dataset) -> GenderParticipation {
    let mut per_edition: BTreeMap<i32, [HashSet<AthleteKey<'_>>; 2]> = ds
        .editions()
        .iter()
        .map(|&edition| (edition, [HashSet::new(), HashSet::new()]))
        .collect();

    for record in ds.records() {
        let slot = match record.sex {
            Some(Sex::Male) => 0,
            Some(Sex::Female) => 1,
            None => continue,
        };
        if let Some(sets) = per_edition.get_mut(&record.edition) {
            sets[slot].insert(AthleteKey::new(record));
        }
    }

    GenderParticipation {
        rows: per_edition
            .into_iter()
            .map(|(edition, [male, female])| GenderRow {
                edition,
                male: count(male.len()),
                female: count(female.len()),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olympics_model::{AnalysisOptions, RawEventRecord, RegionRecord};

    fn raw(name: &str, sex: Sex, noc: &str, year: i32, sport: &str, event: &str) -> RawEventRecord {
        RawEventRecord {
            name: name.to_string(),
            sex: Some(sex),
            age: None,
            height: None,
            weight: None,
            team: noc.to_string(),
            noc: noc.to_string(),
            games: format!("{year} Summer"),
            year,
            season: "Summer".to_string(),
            city: "City".to_string(),
            sport: sport.to_string(),
            event: event.to_string(),
            medal: None,
        }
    }

    fn dataset() -> Dataset {
        Dataset::build(
            &[
                raw("A", Sex::Male, "KEN", 1996, "Athletics", "Marathon"),
                raw("A", Sex::Male, "KEN", 1996, "Athletics", "10000m"),
                raw("B", Sex::Female, "ETH", 1996, "Athletics", "Marathon"),
                raw("C", Sex::Female, "JAM", 2000, "Athletics", "100m"),
                raw("D", Sex::Male, "KEN", 2000, "Boxing", "Flyweight"),
            ],
            &[
                RegionRecord::new("KEN", "Kenya"),
                RegionRecord::new("ETH", "Ethiopia"),
                RegionRecord::new("JAM", "Jamaica"),
            ],
            AnalysisOptions::default(),
        )
    }

    #[test]
    fn per_edition_counts() {
        let ds = dataset();
        let nations = count_over_time(&ds, Dimension::Nations, Accumulation::PerEdition);
        assert_eq!(
            nations.rows,
            vec![
                EditionCount { edition: 1996, count: 2 },
                EditionCount { edition: 2000, count: 2 },
            ]
        );

        let events = count_over_time(&ds, Dimension::Events, Accumulation::PerEdition);
        assert_eq!(events.rows[0].count, 2);
        assert_eq!(events.rows[1].count, 2);
    }

    #[test]
    fn cumulative_counts() {
        let ds = dataset();
        let nations = count_over_time(&ds, Dimension::Nations, Accumulation::Cumulative);
        let counts: Vec<u32> = nations.rows.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![2, 3]);

        let sports = count_over_time(&ds, Dimension::Sports, Accumulation::Cumulative);
        let counts: Vec<u32> = sports.rows.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![1, 2]);
    }

    #[test]
    fn gender_counts_distinct_athletes() {
        let ds = dataset();
        let gender = gender_participation(&ds);
        assert_eq!(
            gender.rows,
            vec![
                GenderRow { edition: 1996, male: 1, female: 1 },
                GenderRow { edition: 2000, male: 1, female: 1 },
            ]
        );
        assert_eq!(gender.to_frame().unwrap().width(), 3);
    }

    #[test]
    fn dimension_parses_case_insensitively() {
        assert_eq!("Nations".parse::<Dimension>(), Ok(Dimension::Nations));
        assert!("medals".parse::<Dimension>().is_err());
    }

    #[test]
    fn empty_dataset_gives_empty_series() {
        let ds = Dataset::build(&[], &[], AnalysisOptions::default());
        let series = count_over_time(&ds, Dimension::Athletes, Accumulation::Cumulative);
        assert!(series.rows.is_empty());
        assert_eq!(series.to_frame().unwrap().height(), 0);
        assert!(gender_participation(&ds).rows.is_empty());
    }
}
