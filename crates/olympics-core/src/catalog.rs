//! Selectable values for filter controls, and headline counts.

use std::collections::{BTreeSet, HashSet};
use std::fmt::Display;

use polars::prelude::DataFrame;
use serde::Serialize;

use olympics_model::Filter;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::frame::{ToFrame, frame, str_column, u32_column};

/// Choices for one selection control. The first entry is always
/// [`Filter::NoFilter`], shown as "Overall".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOptions<T> {
    pub options: Vec<Filter<T>>,
}

impl<T> SelectOptions<T> {
    fn with_values(values: impl IntoIterator<Item = T>) -> Self {
        let options = std::iter::once(Filter::NoFilter)
            .chain(values.into_iter().map(Filter::Exact))
            .collect();
        Self { options }
    }

    /// Concrete values, without the leading "Overall" entry.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.options.iter().filter_map(Filter::as_exact)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<T: Display> ToFrame for SelectOptions<T> {
    fn to_frame(&self) -> Result<DataFrame> {
        let labels: Vec<String> = self.options.iter().map(ToString::to_string).collect();
        frame(vec![str_column("option", labels.iter().map(String::as_str))])
    }
}

/// Editions with at least one medal, ascending.
pub fn edition_list(ds: &Dataset) -> SelectOptions<i32> {
    let editions: BTreeSet<i32> = ds.medal_records().map(|record| record.edition).collect();
    SelectOptions::with_values(editions)
}

/// Regions present after preprocessing, ascending.
pub fn country_list(ds: &Dataset) -> SelectOptions<String> {
    SelectOptions::with_values(ds.regions().into_iter().map(str::to_string))
}

/// Sports present after preprocessing, ascending.
pub fn sport_list(ds: &Dataset) -> SelectOptions<String> {
    let sports: BTreeSet<&str> = ds.records().iter().map(|r| r.sport.as_str()).collect();
    SelectOptions::with_values(sports.into_iter().map(str::to_string))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OverviewStats {
    /// Editions with at least one medal.
    pub editions: u32,
    pub hosts: u32,
    pub sports: u32,
    pub events: u32,
    pub athletes: u32,
    pub nations: u32,
}

impl OverviewStats {
    fn entries(&self) -> [(&'static str, u32); 6] {
        [
            ("editions", self.editions),
            ("hosts", self.hosts),
            ("sports", self.sports),
            ("events", self.events),
            ("athletes", self.athletes),
            ("nations", self.nations),
        ]
    }
}

impl ToFrame for OverviewStats {
    fn to_frame(&self) -> Result<DataFrame> {
        let entries = self.entries();
        frame(vec![
            str_column("statistic", entries.iter().map(|(name, _)| *name)),
            u32_column("value", entries.iter().map(|(_, value)| *value)),
        ])
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> u32 {
    u32::try_from(values.collect::<HashSet<_>>().len()).unwrap_or(u32::MAX)
}

pub fn overview(ds: &Dataset) -> OverviewStats {
    let records = ds.records();
    OverviewStats {
        editions: u32::try_from(edition_list(ds).values().count()).unwrap_or(u32::MAX),
        hosts: distinct(records.iter().map(|r| r.city.as_str())),
        sports: distinct(records.iter().map(|r| r.sport.as_str())),
        events: distinct(records.iter().map(|r| r.event.as_str())),
        athletes: distinct(records.iter().map(|r| r.name.as_str())),
        nations: distinct(records.iter().map(|r| r.region.as_str())),
    }
}
