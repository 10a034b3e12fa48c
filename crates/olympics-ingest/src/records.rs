//! Typed record extraction from loaded DataFrames.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::{debug, warn};

use olympics_model::{Medal, RawEventRecord, RegionRecord, Sex, is_missing_token};

use crate::error::{IngestError, Result};
use crate::frame_utils::{column_strings, find_column, parse_f64, parse_i32};
use crate::schema::{
    COL_AGE, COL_CITY, COL_EVENT, COL_GAMES, COL_HEIGHT, COL_MEDAL, COL_NAME, COL_NOC, COL_NOTES,
    COL_REGION, COL_SEASON, COL_SEX, COL_SPORT, COL_TEAM, COL_WEIGHT, COL_YEAR, EVENT_COLUMNS,
    EVENTS_TABLE, REGION_COLUMNS, REGIONS_TABLE, validate_frame_columns,
};

fn text(cell: Option<&String>) -> String {
    cell.map(|value| value.trim().to_string()).unwrap_or_default()
}

fn optional_text(cell: Option<&String>) -> Option<String> {
    cell.filter(|value| !is_missing_token(value))
        .map(|value| value.trim().to_string())
}

fn measure(cell: Option<&String>) -> Option<f64> {
    cell.filter(|value| !is_missing_token(value))
        .and_then(|value| parse_f64(value))
}

/// Extracts athlete event rows from a frame holding the events table.
///
/// `path` only labels errors. A missing or non-numeric `Year` is fatal; an
/// unreadable sex, medal or measurement becomes `None`.
pub fn events_from_frame(df: &DataFrame, path: &Path) -> Result<Vec<RawEventRecord>> {
    validate_frame_columns(df, EVENTS_TABLE, path, &EVENT_COLUMNS)?;

    let names = column_strings(df, COL_NAME)?;
    let sexes = column_strings(df, COL_SEX)?;
    let ages = column_strings(df, COL_AGE)?;
    let heights = column_strings(df, COL_HEIGHT)?;
    let weights = column_strings(df, COL_WEIGHT)?;
    let teams = column_strings(df, COL_TEAM)?;
    let nocs = column_strings(df, COL_NOC)?;
    let games = column_strings(df, COL_GAMES)?;
    let years = column_strings(df, COL_YEAR)?;
    let seasons = column_strings(df, COL_SEASON)?;
    let cities = column_strings(df, COL_CITY)?;
    let sports = column_strings(df, COL_SPORT)?;
    let events = column_strings(df, COL_EVENT)?;
    let medals = column_strings(df, COL_MEDAL)?;

    let mut unknown_medals = 0usize;
    let mut unknown_sexes = 0usize;
    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let raw_year = text(years[idx].as_ref());
        let year = parse_i32(&raw_year).ok_or_else(|| IngestError::InvalidValue {
            field: COL_YEAR,
            value: raw_year.clone(),
            row: idx + 1,
            path: path.to_path_buf(),
        })?;

        let medal = match medals[idx].as_deref() {
            None => None,
            Some(value) => Medal::parse_outcome(value).unwrap_or_else(|_| {
                unknown_medals += 1;
                None
            }),
        };

        let sex = optional_text(sexes[idx].as_ref()).and_then(|value| {
            value.parse::<Sex>().ok().or_else(|| {
                unknown_sexes += 1;
                None
            })
        });

        records.push(RawEventRecord {
            name: text(names[idx].as_ref()),
            sex,
            age: measure(ages[idx].as_ref()),
            height: measure(heights[idx].as_ref()),
            weight: measure(weights[idx].as_ref()),
            team: text(teams[idx].as_ref()),
            noc: text(nocs[idx].as_ref()),
            games: text(games[idx].as_ref()),
            year,
            season: text(seasons[idx].as_ref()),
            city: text(cities[idx].as_ref()),
            sport: text(sports[idx].as_ref()),
            event: text(events[idx].as_ref()),
            medal,
        });
    }

    if unknown_medals > 0 {
        warn!(
            path = %path.display(),
            rows = unknown_medals,
            "unrecognised medal values treated as no medal"
        );
    }
    if unknown_sexes > 0 {
        debug!(
            path = %path.display(),
            rows = unknown_sexes,
            "unrecognised sex codes treated as missing"
        );
    }

    Ok(records)
}

/// Extracts NOC → region rows. Rows without an NOC code are skipped.
pub fn regions_from_frame(df: &DataFrame, path: &Path) -> Result<Vec<RegionRecord>> {
    validate_frame_columns(df, REGIONS_TABLE, path, &REGION_COLUMNS)?;

    let nocs = column_strings(df, COL_NOC)?;
    let regions = column_strings(df, COL_REGION)?;
    let notes = if find_column(df, COL_NOTES).is_some() {
        column_strings(df, COL_NOTES)?
    } else {
        vec![None; df.height()]
    };

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let noc = text(nocs[idx].as_ref());
        if noc.is_empty() {
            continue;
        }
        records.push(RegionRecord {
            noc,
            region: optional_text(regions[idx].as_ref()),
            notes: optional_text(notes[idx].as_ref()),
        });
    }
    Ok(records)
}
