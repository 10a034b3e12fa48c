//! Deduplication keys shared by the aggregation queries.

use std::collections::HashSet;

use olympics_model::{Medal, NormalizedRecord};

/// One medal award. Every athlete of a team shares the same key, so a team
/// medal is counted once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeamMedalKey<'a> {
    pub team: &'a str,
    pub noc: &'a str,
    pub games: &'a str,
    pub sport: &'a str,
    pub event: &'a str,
    pub medal: Option<Medal>,
}

impl<'a> TeamMedalKey<'a> {
    pub fn new(record: &'a NormalizedRecord) -> Self {
        Self {
            team: &record.team,
            noc: &record.noc,
            games: &record.games,
            sport: &record.sport,
            event: &record.event,
            medal: record.medal,
        }
    }
}

/// One athlete, identified by name and region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AthleteKey<'a> {
    pub name: &'a str,
    pub region: &'a str,
}

impl<'a> AthleteKey<'a> {
    pub fn new(record: &'a NormalizedRecord) -> Self {
        Self {
            name: &record.name,
            region: &record.region,
        }
    }
}

/// Indices of medal rows, keeping the first row of every team-medal key.
pub fn team_medal_rows(records: &[NormalizedRecord]) -> Vec<usize> {
    let mut seen = HashSet::new();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.has_medal())
        .filter(|&(_, record)| seen.insert(TeamMedalKey::new(record)))
        .map(|(idx, _)| idx)
        .collect()
}

/// Keeps the first record of every athlete, preserving input order.
pub fn distinct_athletes<'a, I>(records: I) -> Vec<&'a NormalizedRecord>
where
    I: IntoIterator<Item = &'a NormalizedRecord>,
{
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|&record| seen.insert(AthleteKey::new(record)))
        .collect()
}
