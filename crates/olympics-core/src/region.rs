//! NOC code → region resolution.

use std::collections::HashMap;

use tracing::debug;

use olympics_model::RegionRecord;

/// Lookup table from NOC code to normalized region name.
///
/// Built once from the reference table. Codes that are absent, or listed
/// without a region, resolve to `None`; the caller decides whether to drop
/// or bucket them.
#[derive(Debug, Clone, Default)]
pub struct RegionResolver {
    regions: HashMap<String, Option<String>>,
}

impl RegionResolver {
    /// Builds the lookup. When a code is listed twice the first row wins.
    pub fn new(records: &[RegionRecord]) -> Self {
        let mut regions = HashMap::with_capacity(records.len());
        for record in records {
            let code = record.noc.trim();
            if code.is_empty() {
                continue;
            }
            if regions.contains_key(code) {
                debug!(noc = code, "duplicate NOC code in region table ignored");
                continue;
            }
            let region = record
                .region
                .as_deref()
                .map(str::trim)
                .filter(|region| !region.is_empty())
                .map(str::to_string);
            regions.insert(code.to_string(), region);
        }
        Self { regions }
    }

    /// Returns the region for `noc`, or `None` when it is unresolved.
    pub fn resolve(&self, noc: &str) -> Option<&str> {
        self.regions.get(noc.trim())?.as_deref()
    }

    /// True when the code is listed in the table, even without a region.
    pub fn contains(&self, noc: &str) -> bool {
        self.regions.contains_key(noc.trim())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> RegionResolver {
        RegionResolver::new(&[
            RegionRecord::new("USA", "USA"),
            RegionRecord::new("URS", "Russia"),
            RegionRecord::new("RUS", "Russia"),
            RegionRecord {
                noc: "ROT".to_string(),
                region: None,
                notes: Some("Refugee Olympic Team".to_string()),
            },
            RegionRecord::new("USA", "United States"),
        ])
    }

    #[test]
    fn resolves_known_codes() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("USA"), Some("USA"));
        assert_eq!(resolver.resolve(" URS "), Some("Russia"));
        assert_eq!(resolver.resolve("RUS"), Some("Russia"));
        assert_eq!(resolver.len(), 4);
    }

    #[test]
    fn unknown_and_regionless_codes_are_unresolved() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("ZZZ"), None);
        assert!(!resolver.contains("ZZZ"));
        assert_eq!(resolver.resolve("ROT"), None);
        assert!(resolver.contains("ROT"));
    }

    #[test]
    fn empty_table() {
        let resolver = RegionResolver::new(&[]);
        assert!(resolver.is_empty());
        assert_eq!(resolver.resolve("USA"), None);
    }
}
