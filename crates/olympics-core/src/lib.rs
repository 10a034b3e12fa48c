pub mod athletes;
pub mod catalog;
pub mod dataset;
pub mod dedupe;
pub mod demographics;
pub mod error;
pub mod frame;
pub mod heatmap;
pub mod preprocess;
pub mod region;
pub mod tally;
pub mod trends;

pub use athletes::{AthleteRank, TopAthletes, rank_athletes, top_athletes, top_athletes_by_country};
pub use catalog::{
    OverviewStats, SelectOptions, country_list, edition_list, overview, sport_list,
};
pub use dataset::Dataset;
pub use dedupe::{AthleteKey, TeamMedalKey, distinct_athletes, team_medal_rows};
pub use demographics::{
    AgeDistribution, AgeSample, HeightWeight, NO_MEDAL_LABEL, OVERALL_AGE_LABEL, POPULAR_SPORTS,
    PhysiqueRow, age_distribution, age_distribution_by_sport, height_weight, medalist_label,
};
pub use error::{AnalysisError, Result};
pub use frame::ToFrame;
pub use heatmap::{Heatmap, HeatmapRow, country_event_heatmap, sport_year_heatmap};
pub use preprocess::{PreprocessReport, Preprocessor};
pub use region::RegionResolver;
pub use tally::{
    CountryYearlyMedals, EditionTallyRow, MedalCounts, MedalTally, MedalTallyByEdition, TallyRow,
    YearlyMedals, country_yearly_medals, country_yearly_medals_with, medal_tally,
    medal_tally_by_edition,
};
pub use trends::{
    Accumulation, CountOverTime, Dimension, EditionCount, GenderParticipation, GenderRow,
    count_over_time, gender_participation,
};
