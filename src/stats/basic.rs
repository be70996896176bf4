use std::collections::HashSet;

use serde::Serialize;

use crate::dataset::{Dataset, UserId};

/// Row totals across the tables plus the distinct-user count.
#[derive(Debug, Serialize)]
pub struct BasicStats {
    pub total_movies: usize,
    pub total_ratings: usize,
    pub total_unique_users: usize,
    pub total_tags: usize,
}

pub fn basic_stats(dataset: &Dataset) -> BasicStats {
    let unique_users: HashSet<UserId> = dataset.ratings.iter().map(|r| r.user_id).collect();

    BasicStats {
        total_movies: dataset.movies.len(),
        total_ratings: dataset.ratings.len(),
        total_unique_users: unique_users.len(),
        total_tags: dataset.tags.len(),
    }
}
