//! The immutable normalized dataset shared by every query.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::{info, info_span};

use olympics_ingest::{SourcePaths, SourceTables, load_sources};
use olympics_model::{AnalysisOptions, NormalizedRecord, RawEventRecord, RegionRecord};

use crate::dedupe::team_medal_rows;
use crate::error::Result;
use crate::preprocess::{PreprocessReport, Preprocessor};
use crate::region::RegionResolver;

#[derive(Debug)]
struct DatasetInner {
    records: Vec<NormalizedRecord>,
    options: AnalysisOptions,
    report: PreprocessReport,
    editions: Vec<i32>,
    by_region: HashMap<String, Vec<usize>>,
    medal_rows: Vec<usize>,
}

/// Read-only handle to the normalized dataset.
///
/// Cloning is cheap and the handle can be shared across threads. Indexes are
/// built once at construction; queries only read them.
#[derive(Debug, Clone)]
pub struct Dataset {
    inner: Arc<DatasetInner>,
}

impl Dataset {
    /// Preprocesses raw rows against the region table.
    pub fn build(
        events: &[RawEventRecord],
        regions: &[RegionRecord],
        options: AnalysisOptions,
    ) -> Self {
        let span = info_span!("build_dataset", rows = events.len());
        let _guard = span.enter();

        let resolver = RegionResolver::new(regions);
        let (records, report) = Preprocessor::new(&resolver, &options).run(events);
        Self::from_records(records, report, options)
    }

    pub fn from_sources(sources: &SourceTables, options: AnalysisOptions) -> Self {
        Self::build(&sources.events, &sources.regions, options)
    }

    /// Loads both tables from disk and builds the dataset. Schema problems
    /// abort here, before any query can run.
    pub fn load(paths: &SourcePaths, options: AnalysisOptions) -> Result<Self> {
        let sources = load_sources(paths)?;
        Ok(Self::from_sources(&sources, options))
    }

    fn from_records(
        records: Vec<NormalizedRecord>,
        report: PreprocessReport,
        options: AnalysisOptions,
    ) -> Self {
        let editions: Vec<i32> = records
            .iter()
            .map(|record| record.edition)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut by_region: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            by_region.entry(record.region.clone()).or_default().push(idx);
        }

        let medal_rows = team_medal_rows(&records);

        info!(
            records = records.len(),
            editions = editions.len(),
            regions = by_region.len(),
            medals = medal_rows.len(),
            "dataset ready"
        );

        Self {
            inner: Arc::new(DatasetInner {
                records,
                options,
                report,
                editions,
                by_region,
                medal_rows,
            }),
        }
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.inner.records
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.inner.options
    }

    pub fn report(&self) -> &PreprocessReport {
        &self.inner.report
    }

    /// Distinct editions, ascending.
    pub fn editions(&self) -> &[i32] {
        &self.inner.editions
    }

    /// Distinct regions, ascending.
    pub fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = self.inner.by_region.keys().map(String::as_str).collect();
        regions.sort_unstable();
        regions
    }

    /// Row indices of one region, in dataset order.
    pub fn region_indices(&self, region: &str) -> &[usize] {
        self.inner
            .by_region
            .get(region)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Rows of one region, in dataset order.
    pub fn region_records<'a>(
        &'a self,
        region: &str,
    ) -> impl Iterator<Item = &'a NormalizedRecord> + use<'a> {
        let records = &self.inner.records;
        self.region_indices(region)
            .iter()
            .map(move |&idx| &records[idx])
    }

    /// Medal-bearing rows after team-medal deduplication.
    pub fn medal_records(&self) -> impl Iterator<Item = &NormalizedRecord> + '_ {
        self.inner
            .medal_rows
            .iter()
            .map(|&idx| &self.inner.records[idx])
    }

    pub fn medal_count(&self) -> usize {
        self.inner.medal_rows.len()
    }

    pub fn len(&self) -> usize {
        self.inner.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records.is_empty()
    }
}
