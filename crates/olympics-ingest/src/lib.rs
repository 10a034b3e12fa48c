//! Olympic results ingestion utilities.
//!
//! This crate loads the two source tables (athlete events and the NOC → region
//! reference table) from CSV into Polars DataFrames, checks that every required
//! column is present, and extracts typed records for the preprocessor.
//!
//! # Features
//!
//! - **CSV Loading**: All columns read as strings, UTF-16 inputs rejected
//! - **Schema Validation**: Missing columns fail fast with every absent name listed
//! - **Record Extraction**: `NA`/empty cells become `None`, `Year` must be numeric
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use olympics_ingest::{SourcePaths, load_sources};
//!
//! let sources = load_sources(&SourcePaths::in_dir(Path::new("data")))?;
//! println!("{} event rows", sources.events.len());
//! ```

mod csv;
mod error;
mod frame_utils;
mod records;
mod schema;
mod sources;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{CsvHeaders, read_csv_header, read_csv_table, validate_encoding};

// === Frame Helpers ===
pub use frame_utils::{
    any_to_string, column_strings, find_column, format_numeric, parse_f64, parse_i32,
};

// === Schema ===
pub use schema::{EVENT_COLUMNS, EVENTS_TABLE, REGION_COLUMNS, REGIONS_TABLE, validate_frame_columns};

// === Records ===
pub use records::{events_from_frame, regions_from_frame};
pub use sources::{
    DEFAULT_EVENTS_FILE, DEFAULT_REGIONS_FILE, SourcePaths, SourceTables, load_events,
    load_regions, load_sources, read_events_frame, read_regions_frame,
};
