//! Property-based tests for the aggregation queries.

use std::collections::HashSet;

use proptest::prelude::*;

use olympics_core::{
    Accumulation, Dataset, Dimension, age_distribution, count_over_time, country_event_heatmap,
    country_list, medal_tally, sport_year_heatmap, top_athletes,
};
use olympics_model::{AnalysisOptions, Filter, Medal, MedalWeights, RawEventRecord, RegionRecord};

fn arb_medal() -> impl Strategy<Value = Option<Medal>> {
    prop_oneof![
        2 => Just(None),
        1 => Just(Some(Medal::Gold)),
        1 => Just(Some(Medal::Silver)),
        1 => Just(Some(Medal::Bronze)),
    ]
}

fn arb_record() -> impl Strategy<Value = RawEventRecord> {
    (
        prop::sample::select(vec!["Ada", "Ben", "Cai", "Dee", "Eve"]),
        prop::sample::select(vec!["USA", "GBR", "KEN", "ZZZ"]),
        prop::sample::select(vec![1996, 2000, 2004, 2008]),
        prop::sample::select(vec!["Rowing", "Hockey", "Judo"]),
        prop::sample::select(vec!["Final A", "Final B"]),
        arb_medal(),
        prop::option::of(15.0f64..40.0),
        any::<bool>(),
    )
        .prop_map(|(name, noc, year, sport, event, medal, age, winter)| {
            let season = if winter { "Winter" } else { "Summer" };
            RawEventRecord {
                name: name.to_string(),
                sex: None,
                age: age.map(f64::round),
                height: None,
                weight: None,
                team: noc.to_string(),
                noc: noc.to_string(),
                games: format!("{year} {season}"),
                year,
                season: season.to_string(),
                city: "Host".to_string(),
                sport: sport.to_string(),
                event: format!("{sport} {event}"),
                medal,
            }
        })
}

fn regions() -> Vec<RegionRecord> {
    vec![
        RegionRecord::new("USA", "USA"),
        RegionRecord::new("GBR", "UK"),
        RegionRecord::new("KEN", "Kenya"),
    ]
}

fn arb_dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(arb_record(), 0..60)
        .prop_map(|events| Dataset::build(&events, &regions(), AnalysisOptions::default()))
}

/// Raw rows where every athlete row carries an age.
fn arb_aged_dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(arb_record(), 0..60).prop_map(|mut events| {
        for event in &mut events {
            event.age.get_or_insert(30.0);
        }
        Dataset::build(&events, &regions(), AnalysisOptions::default())
    })
}

fn arb_weights() -> impl Strategy<Value = MedalWeights> {
    (0u32..10, 0u32..10, 0u32..10)
        .prop_map(|(gold, silver, bronze)| MedalWeights::new(gold, silver, bronze))
}

proptest! {
    #[test]
    fn tally_total_matches_deduplicated_medal_rows(ds in arb_dataset()) {
        let tally = medal_tally(&ds, Filter::NoFilter, Filter::NoFilter);
        let total: u32 = tally.rows.iter().map(|row| row.gold + row.silver + row.bronze).sum();
        prop_assert_eq!(total as usize, ds.medal_count());
        for row in &tally.rows {
            prop_assert_eq!(row.total, row.gold + row.silver + row.bronze);
        }
    }

    #[test]
    fn tally_rows_are_sorted(ds in arb_dataset()) {
        let tally = medal_tally(&ds, Filter::NoFilter, Filter::NoFilter);
        for pair in tally.rows.windows(2) {
            let a = (pair[0].gold, pair[0].silver, pair[0].bronze, pair[0].total);
            let b = (pair[1].gold, pair[1].silver, pair[1].bronze, pair[1].total);
            prop_assert!(a >= b);
            if a == b {
                prop_assert!(pair[0].region < pair[1].region);
            }
        }
    }

    #[test]
    fn unresolved_codes_never_surface(ds in arb_dataset()) {
        prop_assert!(ds.records().iter().all(|record| record.noc != "ZZZ"));
        prop_assert!(country_list(&ds).values().all(|region| region != "ZZZ"));
        let tally = medal_tally(&ds, Filter::NoFilter, Filter::NoFilter);
        prop_assert!(tally.rows.iter().all(|row| row.region != "ZZZ"));
    }

    #[test]
    fn count_over_time_editions_strictly_ascend(ds in arb_dataset(), cumulative in any::<bool>()) {
        let accumulation = if cumulative { Accumulation::Cumulative } else { Accumulation::PerEdition };
        for dimension in Dimension::ALL {
            let series = count_over_time(&ds, dimension, accumulation);
            for pair in series.rows.windows(2) {
                prop_assert!(pair[0].edition < pair[1].edition);
                if cumulative {
                    prop_assert!(pair[0].count <= pair[1].count);
                }
            }
        }
    }

    #[test]
    fn heatmap_cells_are_zero_without_events(ds in arb_dataset()) {
        let heatmap = sport_year_heatmap(&ds);
        for row in &heatmap.rows {
            for (edition, &cell) in heatmap.editions.iter().zip(&row.counts) {
                let held = ds
                    .records()
                    .iter()
                    .any(|record| record.sport == row.sport && record.edition == *edition);
                prop_assert_eq!(cell > 0, held);
            }
        }

        for region in ["USA", "UK", "Kenya"] {
            let country = country_event_heatmap(&ds, region);
            for row in &country.rows {
                prop_assert_eq!(row.counts.len(), country.editions.len());
            }
        }
    }

    #[test]
    fn top_athletes_respect_limit_and_order(ds in arb_dataset()) {
        let top = top_athletes(&ds, Filter::NoFilter);
        prop_assert!(top.rows.len() <= ds.options().top_athletes);
        for pair in top.rows.windows(2) {
            prop_assert!(pair[0].medals >= pair[1].medals);
            prop_assert!(pair[0].rank < pair[1].rank);
        }
    }

    #[test]
    fn weights_change_scores_not_order(
        events in prop::collection::vec(arb_record(), 0..60),
        weights in arb_weights(),
    ) {
        let unit = Dataset::build(&events, &regions(), AnalysisOptions::default());
        let weighted = Dataset::build(
            &events,
            &regions(),
            AnalysisOptions::default().with_medal_weights(weights),
        );
        let unit_top = top_athletes(&unit, Filter::NoFilter);
        let weighted_top = top_athletes(&weighted, Filter::NoFilter);

        let unit_names: Vec<&str> = unit_top.rows.iter().map(|row| row.name.as_str()).collect();
        let weighted_names: Vec<&str> =
            weighted_top.rows.iter().map(|row| row.name.as_str()).collect();
        prop_assert_eq!(unit_names, weighted_names);

        for pair in weighted_top.rows.windows(2) {
            prop_assert!(pair[0].medals >= pair[1].medals);
        }
        for row in &weighted_top.rows {
            let score = row.gold * weights.gold
                + row.silver * weights.silver
                + row.bronze * weights.bronze;
            prop_assert_eq!(row.score, score);
        }
    }

    #[test]
    fn age_samples_count_each_athlete_once(ds in arb_aged_dataset()) {
        // First row per (name, region), in input order.
        let mut seen = HashSet::new();
        let first_rows: Vec<_> = ds
            .records()
            .iter()
            .filter(|&record| seen.insert((record.name.as_str(), record.region.as_str())))
            .collect();

        let ages = age_distribution(&ds);
        prop_assert_eq!(ages.samples[0].ages.len(), first_rows.len());
        for (sample, medal) in ages.samples[1..].iter().zip(Medal::ALL) {
            let expected = first_rows
                .iter()
                .filter(|record| record.medal == Some(medal))
                .count();
            prop_assert_eq!(sample.ages.len(), expected);
        }

        let medal_total: usize = ages.samples[1..].iter().map(|sample| sample.ages.len()).sum();
        prop_assert!(medal_total <= ages.samples[0].ages.len());
    }
}
