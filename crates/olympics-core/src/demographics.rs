//! Age samples and height/weight points.
//!
//! No binning happens here; callers plot the raw samples.

use polars::prelude::DataFrame;
use serde::Serialize;

use olympics_model::{Filter, Medal, NormalizedRecord, Sex};

use crate::dataset::Dataset;
use crate::dedupe::distinct_athletes;
use crate::error::Result;
use crate::frame::{ToFrame, f64_column, frame, str_column};

/// Sports shown by [`age_distribution_by_sport`] unless the caller picks its own list.
pub const POPULAR_SPORTS: [&str; 38] = [
    "Basketball",
    "Judo",
    "Football",
    "Tug-Of-War",
    "Athletics",
    "Swimming",
    "Badminton",
    "Sailing",
    "Gymnastics",
    "Art Competitions",
    "Handball",
    "Weightlifting",
    "Wrestling",
    "Water Polo",
    "Hockey",
    "Rowing",
    "Fencing",
    "Shooting",
    "Boxing",
    "Taekwondo",
    "Cycling",
    "Diving",
    "Canoeing",
    "Tennis",
    "Golf",
    "Softball",
    "Archery",
    "Volleyball",
    "Synchronized Swimming",
    "Table Tennis",
    "Baseball",
    "Rhythmic Gymnastics",
    "Rugby Sevens",
    "Beach Volleyball",
    "Triathlon",
    "Rugby",
    "Polo",
    "Ice Hockey",
];

pub const OVERALL_AGE_LABEL: &str = "Overall Age";

/// Label of the age sample for one medal color.
pub fn medalist_label(medal: Medal) -> &'static str {
    match medal {
        Medal::Gold => "Gold Medalist",
        Medal::Silver => "Silver Medalist",
        Medal::Bronze => "Bronze Medalist",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeSample {
    pub label: String,
    pub ages: Vec<f64>,
}

/// Named age samples, in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgeDistribution {
    pub samples: Vec<AgeSample>,
}

impl AgeDistribution {
    pub fn sample(&self, label: &str) -> Option<&AgeSample> {
        self.samples.iter().find(|sample| sample.label == label)
    }
}

impl ToFrame for AgeDistribution {
    fn to_frame(&self) -> Result<DataFrame> {
        let groups = self
            .samples
            .iter()
            .flat_map(|sample| sample.ages.iter().map(|_| sample.label.as_str()));
        let ages = self
            .samples
            .iter()
            .flat_map(|sample| sample.ages.iter().map(|&age| Some(age)));
        frame(vec![str_column("group", groups), f64_column("age", ages)])
    }
}

fn ages<'a>(athletes: impl IntoIterator<Item = &'a NormalizedRecord>) -> Vec<f64> {
    athletes.into_iter().filter_map(|record| record.age).collect()
}

/// Ages of every athlete, then of gold, silver and bronze medalists.
///
/// Athletes are reduced to their first (name, region) row before any medal
/// filter, so each athlete lands in at most one medal sample. An athlete whose
/// first row has no age is left out rather than taking the age of a later row.
pub fn age_distribution(ds: &Dataset) -> AgeDistribution {
    let athletes = distinct_athletes(ds.records());
    let mut samples = vec![AgeSample {
        label: OVERALL_AGE_LABEL.to_string(),
        ages: ages(athletes.iter().copied()),
    }];
    for medal in Medal::ALL {
        samples.push(AgeSample {
            label: medalist_label(medal).to_string(),
            ages: ages(athletes.iter().copied().filter(|r| r.medal == Some(medal))),
        });
    }
    AgeDistribution { samples }
}

/// Gold medalist ages per listed sport, in list order. Sports without any
/// gold medalist keep an empty sample.
pub fn age_distribution_by_sport(ds: &Dataset, sports: &[&str]) -> AgeDistribution {
    let athletes = distinct_athletes(ds.records());
    let samples = sports
        .iter()
        .map(|&sport| AgeSample {
            label: sport.to_string(),
            ages: ages(
                athletes
                    .iter()
                    .copied()
                    .filter(|r| r.is_gold && r.sport == sport),
            ),
        })
        .collect();
    AgeDistribution { samples }
}

/// Label used in the frame form for athletes without a medal.
pub const NO_MEDAL_LABEL: &str = "No Medal";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhysiqueRow {
    pub name: String,
    pub region: String,
    pub sport: String,
    pub sex: Option<Sex>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub medal: Option<Medal>,
}

/// One row per distinct athlete; missing measurements are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeightWeight {
    pub rows: Vec<PhysiqueRow>,
}

impl ToFrame for HeightWeight {
    fn to_frame(&self) -> Result<DataFrame> {
        frame(vec![
            str_column("name", self.rows.iter().map(|row| row.name.as_str())),
            str_column("region", self.rows.iter().map(|row| row.region.as_str())),
            str_column("sport", self.rows.iter().map(|row| row.sport.as_str())),
            str_column(
                "sex",
                self.rows
                    .iter()
                    .map(|row| row.sex.map_or("", |sex| sex.code())),
            ),
            f64_column("height", self.rows.iter().map(|row| row.height)),
            f64_column("weight", self.rows.iter().map(|row| row.weight)),
            str_column(
                "medal",
                self.rows
                    .iter()
                    .map(|row| row.medal.map_or(NO_MEDAL_LABEL, Medal::as_str)),
            ),
        ])
    }
}

/// Height, weight, sex and medal per distinct athlete, optionally for one sport.
/// The sport filter applies to each athlete's first row.
pub fn height_weight(ds: &Dataset, sport: Filter<&str>) -> HeightWeight {
    let rows = distinct_athletes(ds.records())
        .into_iter()
        .filter(|record| sport.matches(&record.sport))
        .map(|record| PhysiqueRow {
            name: record.name.clone(),
            region: record.region.clone(),
            sport: record.sport.clone(),
            sex: record.sex,
            height: record.height,
            weight: record.weight,
            medal: record.medal,
        })
        .collect();
    HeightWeight { rows }
}
