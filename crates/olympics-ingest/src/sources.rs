//! Loading both source tables from disk.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tracing::info;

use olympics_model::{RawEventRecord, RegionRecord};

use crate::csv::read_csv_table;
use crate::error::Result;
use crate::records::{events_from_frame, regions_from_frame};
use crate::schema::{EVENT_COLUMNS, EVENTS_TABLE, REGION_COLUMNS, REGIONS_TABLE};

/// Locations of the two source tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub events: PathBuf,
    pub regions: PathBuf,
}

impl SourcePaths {
    pub fn new(events: impl Into<PathBuf>, regions: impl Into<PathBuf>) -> Self {
        Self {
            events: events.into(),
            regions: regions.into(),
        }
    }

    /// Uses the conventional file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_EVENTS_FILE), dir.join(DEFAULT_REGIONS_FILE))
    }
}

pub const DEFAULT_EVENTS_FILE: &str = "athlete_events.csv";
pub const DEFAULT_REGIONS_FILE: &str = "noc_regions.csv";

/// Typed contents of both source tables.
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub events: Vec<RawEventRecord>,
    pub regions: Vec<RegionRecord>,
}

/// Reads the athlete events table into a string-typed frame.
pub fn read_events_frame(path: &Path) -> Result<DataFrame> {
    let (df, _headers) = read_csv_table(path, EVENTS_TABLE, &EVENT_COLUMNS)?;
    Ok(df)
}

/// Reads the NOC → region table into a string-typed frame.
pub fn read_regions_frame(path: &Path) -> Result<DataFrame> {
    let (df, _headers) = read_csv_table(path, REGIONS_TABLE, &REGION_COLUMNS)?;
    Ok(df)
}

/// Reads the athlete events table.
pub fn load_events(path: &Path) -> Result<Vec<RawEventRecord>> {
    events_from_frame(&read_events_frame(path)?, path)
}

/// Reads the NOC → region table.
pub fn load_regions(path: &Path) -> Result<Vec<RegionRecord>> {
    regions_from_frame(&read_regions_frame(path)?, path)
}

/// Reads both tables; any schema problem aborts before records are returned.
pub fn load_sources(paths: &SourcePaths) -> Result<SourceTables> {
    let events = load_events(&paths.events)?;
    let regions = load_regions(&paths.regions)?;
    info!(
        events = events.len(),
        regions = regions.len(),
        "source tables loaded"
    );
    Ok(SourceTables { events, regions })
}
