//! Data model types for Olympic Games results analysis.
//!
//! This crate holds the plain data shared by the ingestion, aggregation and
//! CLI crates. It has no I/O and no polars dependency.
//!
//! # Module Organization
//!
//! - [`enums`]: Medal, season and sex codes with tolerant parsing
//! - [`record`]: Raw event rows, region table rows and normalized rows
//! - [`filter`]: The `Filter` selection type replacing the "Overall" sentinel
//! - [`options`]: Analysis configuration (season, policies, limits, weights)
//! - [`error`]: Parse errors for the enum codes

pub mod enums;
pub mod error;
pub mod filter;
pub mod options;
pub mod record;

pub use enums::{Medal, Season, Sex, is_missing_token};
pub use error::{ModelError, Result};
pub use filter::{Filter, OVERALL_LABEL};
pub use options::{
    AnalysisOptions, DEFAULT_TOP_ATHLETES, DEFAULT_TOP_ATHLETES_BY_COUNTRY, MedalWeights,
    UNKNOWN_REGION, UnresolvedRegionPolicy, ZeroFillPolicy,
};
pub use record::{NormalizedRecord, RawEventRecord, RegionRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_serialize_round_trip() {
        let options = AnalysisOptions::default()
            .with_unresolved_regions(UnresolvedRegionPolicy::Bucket)
            .with_top_athletes(5);
        let json = serde_json::to_string(&options).expect("serialize options");
        let round: AnalysisOptions = serde_json::from_str(&json).expect("deserialize options");
        assert_eq!(round, options);
    }

    #[test]
    fn partial_options_fill_defaults() {
        let round: AnalysisOptions =
            serde_json::from_str(r#"{"season":"Winter"}"#).expect("deserialize options");
        assert_eq!(round.season, Season::Winter);
        assert_eq!(round.top_athletes, DEFAULT_TOP_ATHLETES);
        assert_eq!(round.unresolved_regions, UnresolvedRegionPolicy::Drop);
    }
}
