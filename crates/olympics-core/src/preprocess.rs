//! Season filtering, region join and medal expansion.
//!
//! The steps run in a fixed order:
//!
//! 1. Keep only rows of the configured season.
//! 2. Resolve each NOC code; unresolved rows are dropped or bucketed under
//!    [`UNKNOWN_REGION`] depending on [`UnresolvedRegionPolicy`].
//! 3. Take the edition from the year column, never from the games label.
//! 4. Expand the medal into three exclusive indicators.
//! 5. Optionally remove rows identical in every field.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;
use tracing::{info, warn};

use olympics_model::{
    AnalysisOptions, Medal, NormalizedRecord, RawEventRecord, Sex, UNKNOWN_REGION,
    UnresolvedRegionPolicy,
};

use crate::region::RegionResolver;

/// Row accounting for one preprocessing run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreprocessReport {
    pub input_rows: usize,
    /// Rows of any other season.
    pub season_excluded: usize,
    /// Rows whose NOC code had no region (dropped or bucketed).
    pub unresolved_rows: usize,
    pub unresolved_codes: BTreeSet<String>,
    /// Exact duplicates removed after the join.
    pub duplicate_rows: usize,
    pub output_rows: usize,
}

/// Every field of a normalized row, with measurements compared bitwise.
#[derive(PartialEq, Eq, Hash)]
struct ExactRowKey<'a> {
    name: &'a str,
    sex: Option<Sex>,
    measures: [Option<u64>; 3],
    team: &'a str,
    noc: &'a str,
    games: &'a str,
    edition: i32,
    season: &'a str,
    city: &'a str,
    sport: &'a str,
    event: &'a str,
    medal: Option<Medal>,
    region: &'a str,
}

impl<'a> ExactRowKey<'a> {
    fn new(record: &'a NormalizedRecord) -> Self {
        Self {
            name: &record.name,
            sex: record.sex,
            measures: [
                record.age.map(f64::to_bits),
                record.height.map(f64::to_bits),
                record.weight.map(f64::to_bits),
            ],
            team: &record.team,
            noc: &record.noc,
            games: &record.games,
            edition: record.edition,
            season: &record.season,
            city: &record.city,
            sport: &record.sport,
            event: &record.event,
            medal: record.medal,
            region: &record.region,
        }
    }
}

/// Turns raw event rows into the normalized dataset.
#[derive(Debug, Clone, Copy)]
pub struct Preprocessor<'a> {
    resolver: &'a RegionResolver,
    options: &'a AnalysisOptions,
}

impl<'a> Preprocessor<'a> {
    pub fn new(resolver: &'a RegionResolver, options: &'a AnalysisOptions) -> Self {
        Self { resolver, options }
    }

    pub fn run(&self, raw: &[RawEventRecord]) -> (Vec<NormalizedRecord>, PreprocessReport) {
        let mut report = PreprocessReport {
            input_rows: raw.len(),
            ..PreprocessReport::default()
        };

        let mut joined = Vec::with_capacity(raw.len());
        for record in raw {
            if !self.options.season.matches(&record.season) {
                report.season_excluded += 1;
                continue;
            }
            let region = match self.resolver.resolve(&record.noc) {
                Some(region) => region,
                None => {
                    report.unresolved_rows += 1;
                    report.unresolved_codes.insert(record.noc.clone());
                    match self.options.unresolved_regions {
                        UnresolvedRegionPolicy::Drop => continue,
                        UnresolvedRegionPolicy::Bucket => UNKNOWN_REGION,
                    }
                }
            };
            joined.push(NormalizedRecord::from_raw(record, region));
        }

        if report.unresolved_rows > 0 {
            let codes: Vec<&str> = report
                .unresolved_codes
                .iter()
                .map(String::as_str)
                .collect();
            warn!(
                rows = report.unresolved_rows,
                codes = %codes.join(","),
                policy = ?self.options.unresolved_regions,
                "NOC codes missing from region table"
            );
        }

        let records = if self.options.drop_exact_duplicates {
            let before = joined.len();
            let deduped = drop_exact_duplicates(joined);
            report.duplicate_rows = before - deduped.len();
            deduped
        } else {
            joined
        };
        report.output_rows = records.len();

        info!(
            input = report.input_rows,
            season = %self.options.season,
            season_excluded = report.season_excluded,
            unresolved = report.unresolved_rows,
            duplicates = report.duplicate_rows,
            output = report.output_rows,
            "preprocessing complete"
        );
        if records.is_empty() {
            warn!("normalized dataset is empty; every query will return an empty table");
        }

        (records, report)
    }
}

/// Keeps the first of each group of identical rows, preserving order.
fn drop_exact_duplicates(records: Vec<NormalizedRecord>) -> Vec<NormalizedRecord> {
    let mut keep = Vec::with_capacity(records.len());
    {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            keep.push(seen.insert(ExactRowKey::new(record)));
        }
    }
    records
        .into_iter()
        .zip(keep)
        .filter_map(|(record, keep)| keep.then_some(record))
        .collect()
}
