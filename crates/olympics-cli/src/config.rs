//! Analysis options from a JSON file plus command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use olympics_model::{AnalysisOptions, Season, UnresolvedRegionPolicy, ZeroFillPolicy};

/// Flags that take precedence over the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub season: Option<Season>,
    pub bucket_unknown: bool,
    pub no_zero_fill: bool,
    pub keep_duplicates: bool,
}

/// Reads `path` when given; missing fields take their defaults.
pub fn load_options(path: Option<&Path>) -> Result<AnalysisOptions> {
    let Some(path) = path else {
        return Ok(AnalysisOptions::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let options: AnalysisOptions = serde_json::from_str(&text)
        .with_context(|| format!("parse config {}", path.display()))?;
    debug!(path = %path.display(), ?options, "loaded analysis options");
    Ok(options)
}

pub fn apply_overrides(options: AnalysisOptions, overrides: OptionOverrides) -> AnalysisOptions {
    let mut options = options;
    if let Some(season) = overrides.season {
        options = options.with_season(season);
    }
    if overrides.bucket_unknown {
        options = options.with_unresolved_regions(UnresolvedRegionPolicy::Bucket);
    }
    if overrides.no_zero_fill {
        options = options.with_zero_fill(ZeroFillPolicy::Omit);
    }
    if overrides.keep_duplicates {
        options = options.with_drop_exact_duplicates(false);
    }
    options
}

/// Config file first, then overrides.
pub fn resolve_options(path: Option<&Path>, overrides: OptionOverrides) -> Result<AnalysisOptions> {
    Ok(apply_overrides(load_options(path)?, overrides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn no_file_gives_defaults() {
        assert_eq!(load_options(None).unwrap(), AnalysisOptions::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "season": "Winter", "top_athletes": 5 }}"#).unwrap();

        let options = load_options(Some(file.path())).unwrap();
        assert_eq!(options.season, Season::Winter);
        assert_eq!(options.top_athletes, 5);
        assert!(options.drop_exact_duplicates);
    }

    #[test]
    fn overrides_win_over_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "season": "Winter" }}"#).unwrap();

        let options = resolve_options(
            Some(file.path()),
            OptionOverrides {
                season: Some(Season::Summer),
                bucket_unknown: true,
                no_zero_fill: true,
                keep_duplicates: false,
            },
        )
        .unwrap();
        assert_eq!(options.season, Season::Summer);
        assert_eq!(options.unresolved_regions, UnresolvedRegionPolicy::Bucket);
        assert_eq!(options.zero_fill, ZeroFillPolicy::Omit);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_options(Some(file.path())).unwrap_err();
        assert!(err.to_string().starts_with("parse config"));
    }
}
