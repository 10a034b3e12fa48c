//! Sport × edition pivots.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use polars::prelude::DataFrame;
use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::frame::{ToFrame, frame, str_column, u32_column};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapRow {
    pub sport: String,
    /// One cell per entry of [`Heatmap::editions`].
    pub counts: Vec<u32>,
}

/// Zero-filled pivot with sports as rows and editions as columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub editions: Vec<i32>,
    pub rows: Vec<HeatmapRow>,
}

impl Heatmap {
    fn from_cells(editions: Vec<i32>, cells: &BTreeMap<&str, BTreeMap<i32, u32>>) -> Self {
        let rows = cells
            .iter()
            .map(|(sport, per_edition)| HeatmapRow {
                sport: (*sport).to_string(),
                counts: editions
                    .iter()
                    .map(|edition| per_edition.get(edition).copied().unwrap_or(0))
                    .collect(),
            })
            .collect();
        Self { editions, rows }
    }

    /// Cell value, or `None` when the sport or edition is not in the pivot.
    pub fn cell(&self, sport: &str, edition: i32) -> Option<u32> {
        let column = self.editions.iter().position(|&e| e == edition)?;
        let row = self.rows.iter().find(|row| row.sport == sport)?;
        row.counts.get(column).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ToFrame for Heatmap {
    fn to_frame(&self) -> Result<DataFrame> {
        let mut columns = Vec::with_capacity(self.editions.len() + 1);
        columns.push(str_column(
            "sport",
            self.rows.iter().map(|row| row.sport.as_str()),
        ));
        for (idx, edition) in self.editions.iter().enumerate() {
            columns.push(u32_column(
                &edition.to_string(),
                self.rows
                    .iter()
                    .map(|row| row.counts.get(idx).copied().unwrap_or(0)),
            ));
        }
        frame(columns)
    }
}

/// Distinct events per sport per edition over the whole dataset.
pub fn sport_year_heatmap(ds: &Dataset) -> Heatmap {
    let mut seen = HashSet::new();
    let mut cells: BTreeMap<&str, BTreeMap<i32, u32>> = BTreeMap::new();
    for record in ds.records() {
        if seen.insert((record.edition, record.sport.as_str(), record.event.as_str())) {
            *cells
                .entry(record.sport.as_str())
                .or_default()
                .entry(record.edition)
                .or_default() += 1;
        }
    }
    Heatmap::from_cells(ds.editions().to_vec(), &cells)
}

/// Gold medals of one region per sport and edition.
///
/// Columns are the editions the region took part in; rows are the sports in
/// which it won at least one gold.
pub fn country_event_heatmap(ds: &Dataset, country: &str) -> Heatmap {
    let editions: Vec<i32> = ds
        .region_records(country)
        .map(|record| record.edition)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut cells: BTreeMap<&str, BTreeMap<i32, u32>> = BTreeMap::new();
    for record in ds
        .medal_records()
        .filter(|record| record.is_gold && record.region == country)
    {
        *cells
            .entry(record.sport.as_str())
            .or_default()
            .entry(record.edition)
            .or_default() += 1;
    }
    Heatmap::from_cells(editions, &cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use olympics_model::{AnalysisOptions, Medal, RawEventRecord, RegionRecord};

    fn raw(name: &str, noc: &str, year: i32, sport: &str, event: &str, medal: Option<Medal>) -> RawEventRecord {
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
            sport: sport.to_string(),
            event: event.to_string(),
            medal,
        }
    }

    fn dataset() -> Dataset {
        Dataset::build(
            &[
                raw("A", "IND", 1928, "Hockey", "Hockey Men's Hockey", Some(Medal::Gold)),
                raw("B", "IND", 1928, "Hockey", "Hockey Men's Hockey", Some(Medal::Gold)),
                raw("C", "NED", 1928, "Hockey", "Hockey Men's Hockey", Some(Medal::Silver)),
                raw("D", "IND", 1932, "Athletics", "Athletics Men's 100 metres", None),
                raw("E", "NED", 1932, "Athletics", "Athletics Men's 200 metres", None),
                raw("F", "NED", 1932, "Athletics", "Athletics Men's 200 metres", None),
            ],
            &[
                RegionRecord::new("IND", "India"),
                RegionRecord::new("NED", "Netherlands"),
            ],
            AnalysisOptions::default(),
        )
    }

    #[test]
    fn sport_year_counts_distinct_events() {
        let heatmap = sport_year_heatmap(&dataset());
        assert_eq!(heatmap.editions, vec![1928, 1932]);
        assert_eq!(heatmap.cell("Hockey", 1928), Some(1));
        assert_eq!(heatmap.cell("Hockey", 1932), Some(0));
        assert_eq!(heatmap.cell("Athletics", 1932), Some(2));
        assert_eq!(heatmap.cell("Rowing", 1932), None);
    }

    #[test]
    fn country_heatmap_counts_deduplicated_golds() {
        let ds = dataset();
        let india = country_event_heatmap(&ds, "India");
        assert_eq!(india.editions, vec![1928, 1932]);
        assert_eq!(india.rows.len(), 1);
        assert_eq!(india.cell("Hockey", 1928), Some(1));
        assert_eq!(india.cell("Hockey", 1932), Some(0));

        let netherlands = country_event_heatmap(&ds, "Netherlands");
        assert!(netherlands.is_empty());
    }

    #[test]
    fn frame_has_one_column_per_edition() {
        let df = sport_year_heatmap(&dataset()).to_frame().unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["sport", "1928", "1932"]);
        assert_eq!(df.height(), 2);
    }
}
