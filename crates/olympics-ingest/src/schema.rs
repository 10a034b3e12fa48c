//! Required columns of the two source tables.

use std::path::Path;

use polars::prelude::DataFrame;

use crate::error::{IngestError, Result};
use crate::frame_utils::find_column;

pub const COL_NAME: &str = "Name";
pub const COL_SEX: &str = "Sex";
pub const COL_AGE: &str = "Age";
pub const COL_HEIGHT: &str = "Height";
pub const COL_WEIGHT: &str = "Weight";
pub const COL_TEAM: &str = "Team";
pub const COL_NOC: &str = "NOC";
pub const COL_GAMES: &str = "Games";
pub const COL_YEAR: &str = "Year";
pub const COL_SEASON: &str = "Season";
pub const COL_CITY: &str = "City";
pub const COL_SPORT: &str = "Sport";
pub const COL_EVENT: &str = "Event";
pub const COL_MEDAL: &str = "Medal";

pub const COL_REGION: &str = "region";
pub const COL_NOTES: &str = "notes";

/// Columns the athlete events table must provide.
pub const EVENT_COLUMNS: [&str; 14] = [
    COL_NAME, COL_SEX, COL_AGE, COL_HEIGHT, COL_WEIGHT, COL_TEAM, COL_NOC, COL_GAMES, COL_YEAR,
    COL_SEASON, COL_CITY, COL_SPORT, COL_EVENT, COL_MEDAL,
];

/// Columns the region table must provide. `notes` is optional.
pub const REGION_COLUMNS: [&str; 2] = [COL_NOC, COL_REGION];

pub const EVENTS_TABLE: &str = "events";
pub const REGIONS_TABLE: &str = "regions";

/// Fails with [`IngestError::MissingColumns`] unless every required column is present.
pub fn validate_frame_columns(
    df: &DataFrame,
    table: &'static str,
    path: &Path,
    required: &[&str],
) -> Result<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|name| find_column(df, name).is_none())
        .map(|name| (*name).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(IngestError::MissingColumns {
            table,
            path: path.to_path_buf(),
            columns: missing,
        })
    }
}
