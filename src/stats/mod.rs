pub mod basic;
pub mod cross;
pub mod movies;
pub mod rank;
pub mod ratings;
pub mod tags;

use anyhow::Result;
use serde::Serialize;

use crate::dataset::Dataset;

pub use basic::BasicStats;
pub use cross::CrossTableStats;
pub use movies::MoviesTableStats;
pub use ratings::RatingsTableStats;
pub use tags::TagsTableStats;

/// Number of entries every top-N ranking keeps.
pub const TOP_N: usize = 10;

/// The five result groups handed to the presentation layer. Serializes
/// as one JSON object keyed by group name.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub basic: BasicStats,
    pub movies: MoviesTableStats,
    pub ratings: RatingsTableStats,
    pub tags: TagsTableStats,
    pub cross: CrossTableStats,
}

/// Compute all five statistic groups. The groups are independent and
/// share nothing but the loaded tables, which they take read-only.
pub fn compute_all(dataset: &Dataset) -> Result<DashboardStats> {
    Ok(DashboardStats {
        basic: basic::basic_stats(dataset),
        movies: movies::movies_table_stats(&dataset.movies),
        ratings: ratings::rating_table_stats(&dataset.movies, &dataset.ratings)?,
        tags: tags::tag_table_stats(&dataset.tags),
        cross: cross::cross_table_stats(&dataset.movies, &dataset.ratings, &dataset.tags)?,
    })
}
