use std::time::Instant;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, info_span};

use olympics_cli::config::{OptionOverrides, resolve_options};
use olympics_cli::render::print_frame;
use olympics_core::{
    Dataset, Dimension, POPULAR_SPORTS, ToFrame, age_distribution, age_distribution_by_sport,
    count_over_time, country_event_heatmap, country_list, country_yearly_medals, edition_list,
    gender_participation, height_weight, medal_tally, medal_tally_by_edition, overview,
    rank_athletes, sport_list, sport_year_heatmap,
};
use olympics_ingest::SourcePaths;
use olympics_model::Filter;

use crate::cli::{AthleteArgs, Cli, Command, DataArgs, OptionKind, OutputArg, TallyArgs};

pub fn run(cli: &Cli) -> Result<()> {
    let ds = load_dataset(&cli.data)?;
    let output = cli.data.output;

    match &cli.command {
        Command::Tally(args) => run_tally(&ds, args, output),
        Command::Options { kind } => match kind {
            OptionKind::Editions => emit(output, "Editions", &edition_list(&ds)),
            OptionKind::Countries => emit(output, "Countries", &country_list(&ds)),
            OptionKind::Sports => emit(output, "Sports", &sport_list(&ds)),
        },
        Command::Overview => emit(output, "Overview", &overview(&ds)),
        Command::Trend(args) => {
            let dimension: Dimension = args.dimension.into();
            let series = count_over_time(&ds, dimension, args.accumulation());
            emit(output, &format!("Participating {dimension} over time"), &series)
        }
        Command::Heatmap { country } => match country {
            Some(country) => emit(
                output,
                &format!("{country}: gold medals by sport and edition"),
                &country_event_heatmap(&ds, country),
            ),
            None => emit(output, "Events by sport and edition", &sport_year_heatmap(&ds)),
        },
        Command::Athletes(args) => run_athletes(&ds, args, output),
        Command::Country { country } => emit(
            output,
            &format!("{country}: medals per edition"),
            &country_yearly_medals(&ds, country),
        ),
        Command::Ages { by_sport } => {
            if *by_sport {
                emit(
                    output,
                    "Gold medalist ages by sport",
                    &age_distribution_by_sport(&ds, &POPULAR_SPORTS),
                )
            } else {
                emit(output, "Age distribution", &age_distribution(&ds))
            }
        }
        Command::Physique { sport } => {
            let sport = overall_filter(sport.as_deref());
            emit(
                output,
                &format!("Height and weight: {sport}"),
                &height_weight(&ds, sport.as_str_filter()),
            )
        }
        Command::Gender => emit(
            output,
            "Men and women over the years",
            &gender_participation(&ds),
        ),
    }
}

fn load_dataset(args: &DataArgs) -> Result<Dataset> {
    let span = info_span!("load", data_dir = %args.data_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    let options = resolve_options(
        args.config.as_deref(),
        OptionOverrides {
            season: args.season.map(Into::into),
            bucket_unknown: args.bucket_unknown,
            no_zero_fill: args.no_zero_fill,
            keep_duplicates: args.keep_duplicates,
        },
    )?;

    let defaults = SourcePaths::in_dir(&args.data_dir);
    let paths = SourcePaths::new(
        args.events.clone().unwrap_or(defaults.events),
        args.regions.clone().unwrap_or(defaults.regions),
    );
    let ds = Dataset::load(&paths, options).context("load source tables")?;
    info!(
        rows = ds.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "dataset loaded"
    );
    Ok(ds)
}

fn run_tally(ds: &Dataset, args: &TallyArgs, output: OutputArg) -> Result<()> {
    let year = parse_year(args.year.as_deref())?;
    let country = overall_filter(args.country.as_deref());

    if args.by_edition {
        let tally = medal_tally_by_edition(ds, country.as_str_filter());
        return emit(output, &format!("Medal tally by edition: {country}"), &tally);
    }
    let tally = medal_tally(ds, year.clone(), country.as_str_filter());
    emit(output, &tally_title(&year, &country), &tally)
}

fn tally_title(year: &Filter<i32>, country: &Filter<String>) -> String {
    match (year, country) {
        (Filter::NoFilter, Filter::NoFilter) => "Overall Tally".to_string(),
        (Filter::Exact(year), Filter::NoFilter) => format!("Medal Tally in {year} Olympics"),
        (Filter::NoFilter, Filter::Exact(country)) => format!("{country} overall performance"),
        (Filter::Exact(year), Filter::Exact(country)) => {
            format!("{country} performance in {year} Olympics")
        }
    }
}

fn run_athletes(ds: &Dataset, args: &AthleteArgs, output: OutputArg) -> Result<()> {
    let sport = overall_filter(args.sport.as_deref());
    let country = overall_filter(args.country.as_deref());
    let limit = args.limit.unwrap_or_else(|| {
        if country.is_no_filter() {
            ds.options().top_athletes
        } else {
            ds.options().top_athletes_by_country
        }
    });
    let top = rank_athletes(ds, sport.as_str_filter(), country.as_str_filter(), limit);
    emit(
        output,
        &format!("Most successful athletes: {sport} / {country}"),
        &top,
    )
}

fn overall_filter(raw: Option<&str>) -> Filter<String> {
    raw.map_or(Filter::NoFilter, Filter::parse_overall)
}

fn parse_year(raw: Option<&str>) -> Result<Filter<i32>> {
    match overall_filter(raw) {
        Filter::NoFilter => Ok(Filter::NoFilter),
        Filter::Exact(text) => match text.parse::<i32>() {
            Ok(year) => Ok(Filter::Exact(year)),
            Err(_) => bail!("invalid year '{text}': expected a number or Overall"),
        },
    }
}

fn emit<T: ToFrame + Serialize>(output: OutputArg, title: &str, result: &T) -> Result<()> {
    match output {
        OutputArg::Table => {
            let df = result.to_frame().context("build result table")?;
            print_frame(title, &df);
        }
        OutputArg::Json => {
            let json = serde_json::to_string_pretty(result).context("serialize result")?;
            println!("{json}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_filter_parsing() {
        assert_eq!(parse_year(None).unwrap(), Filter::NoFilter);
        assert_eq!(parse_year(Some("Overall")).unwrap(), Filter::NoFilter);
        assert_eq!(parse_year(Some("2016")).unwrap(), Filter::Exact(2016));
        assert!(parse_year(Some("last year")).is_err());
    }

    #[test]
    fn tally_titles() {
        assert_eq!(
            tally_title(&Filter::NoFilter, &Filter::NoFilter),
            "Overall Tally"
        );
        assert_eq!(
            tally_title(&Filter::Exact(2016), &Filter::Exact("India".to_string())),
            "India performance in 2016 Olympics"
        );
    }
}
