//! CLI argument definitions for the `olympics` tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use olympics_core::{Accumulation, Dimension};
use olympics_model::Season;

#[derive(Parser)]
#[command(
    name = "olympics",
    version,
    about = "Medal tallies, participation trends and athlete rankings from Olympic results",
    long_about = "Medal tallies, participation trends and athlete rankings from Olympic results.\n\n\
                  Reads the athlete events table and the NOC region table (CSV), keeps one\n\
                  season, and prints the selected query as a table or as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub data: DataArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct DataArgs {
    /// Directory holding athlete_events.csv and noc_regions.csv.
    #[arg(long = "data-dir", value_name = "DIR", default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// Athlete events CSV (overrides --data-dir).
    #[arg(long = "events", value_name = "CSV", global = true)]
    pub events: Option<PathBuf>,

    /// NOC region CSV (overrides --data-dir).
    #[arg(long = "regions", value_name = "CSV", global = true)]
    pub regions: Option<PathBuf>,

    /// JSON file with analysis options.
    #[arg(long = "config", value_name = "JSON", global = true)]
    pub config: Option<PathBuf>,

    /// Season to analyse.
    #[arg(long = "season", value_enum, global = true)]
    pub season: Option<SeasonArg>,

    /// Tally unmapped NOC codes under "Unknown" instead of dropping them.
    #[arg(long = "bucket-unknown", global = true)]
    pub bucket_unknown: bool,

    /// Omit editions without medals from per-country series.
    #[arg(long = "no-zero-fill", global = true)]
    pub no_zero_fill: bool,

    /// Keep rows that are identical in every field.
    #[arg(long = "keep-duplicates", global = true)]
    pub keep_duplicates: bool,

    /// Result format.
    #[arg(long = "output", value_enum, default_value = "table", global = true)]
    pub output: OutputArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Medal tally by region.
    Tally(TallyArgs),

    /// Values offered by a selection control.
    Options {
        #[arg(value_enum)]
        kind: OptionKind,
    },

    /// Headline counts for the whole dataset.
    Overview,

    /// Distinct nations, events, athletes or sports per edition.
    Trend(TrendArgs),

    /// Sport × edition pivot of events, or of one country's golds.
    Heatmap {
        /// Show gold medals of this region instead of events held.
        #[arg(long = "country", value_name = "REGION")]
        country: Option<String>,
    },

    /// Most successful athletes.
    Athletes(AthleteArgs),

    /// Medals per edition for one region.
    Country {
        #[arg(value_name = "REGION")]
        country: String,
    },

    /// Age samples overall and per medal color.
    Ages {
        /// One gold medalist sample per popular sport instead.
        #[arg(long = "by-sport")]
        by_sport: bool,
    },

    /// Height, weight and medal per distinct athlete.
    Physique {
        #[arg(long = "sport", value_name = "SPORT")]
        sport: Option<String>,
    },

    /// Distinct male and female athletes per edition.
    Gender,
}

#[derive(Args)]
pub struct TallyArgs {
    /// Edition year, or "Overall".
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<String>,

    /// Region name, or "Overall".
    #[arg(long = "country", value_name = "REGION")]
    pub country: Option<String>,

    /// One row per region and edition, across every edition.
    #[arg(long = "by-edition", conflicts_with = "year")]
    pub by_edition: bool,
}

#[derive(Args)]
pub struct TrendArgs {
    #[arg(value_enum)]
    pub dimension: DimensionArg,

    /// Count values seen up to each edition.
    #[arg(long = "cumulative")]
    pub cumulative: bool,
}

impl TrendArgs {
    pub fn accumulation(&self) -> Accumulation {
        if self.cumulative {
            Accumulation::Cumulative
        } else {
            Accumulation::PerEdition
        }
    }
}

#[derive(Args)]
pub struct AthleteArgs {
    /// Sport name, or "Overall".
    #[arg(long = "sport", value_name = "SPORT")]
    pub sport: Option<String>,

    /// Region name, or "Overall".
    #[arg(long = "country", value_name = "REGION")]
    pub country: Option<String>,

    /// Maximum number of athletes.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OptionKind {
    Editions,
    Countries,
    Sports,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DimensionArg {
    Nations,
    Events,
    Athletes,
    Sports,
}

impl From<DimensionArg> for Dimension {
    fn from(arg: DimensionArg) -> Self {
        match arg {
            DimensionArg::Nations => Dimension::Nations,
            DimensionArg::Events => Dimension::Events,
            DimensionArg::Athletes => Dimension::Athletes,
            DimensionArg::Sports => Dimension::Sports,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SeasonArg {
    Summer,
    Winter,
}

impl From<SeasonArg> for Season {
    fn from(arg: SeasonArg) -> Self {
        match arg {
            SeasonArg::Summer => Season::Summer,
            SeasonArg::Winter => Season::Winter,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_edition_rejects_year() {
        let err = Cli::try_parse_from(["olympics", "tally", "--by-edition", "--year", "2016"])
            .err()
            .map(|err| err.kind());
        assert_eq!(err, Some(clap::error::ErrorKind::ArgumentConflict));
    }

    #[test]
    fn by_edition_accepts_country() {
        let cli = Cli::try_parse_from(["olympics", "tally", "--by-edition", "--country", "USA"])
            .unwrap();
        let Command::Tally(args) = cli.command else {
            panic!("expected tally");
        };
        assert!(args.by_edition);
        assert_eq!(args.year, None);
        assert_eq!(args.country.as_deref(), Some("USA"));
    }
}
