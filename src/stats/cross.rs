use std::collections::{HashMap, HashSet};

use anyhow::{bail, Result};
use serde::Serialize;

use crate::dataset::{Movie, MovieId, Rating, Tag};

#[derive(Debug, Serialize)]
pub struct CrossTableStats {
    /// Percent of movies with at least one rating. Not clamped: orphan
    /// movie ids in the ratings table push it past 100.
    pub ratings_coverage: f64,
    pub tags_coverage: f64,
    /// Mean rating per genre, descending by mean.
    pub genre_rating_correlation: Vec<(String, f64)>,
}

pub fn cross_table_stats(
    movies: &[Movie],
    ratings: &[Rating],
    tags: &[Tag],
) -> Result<CrossTableStats> {
    if movies.is_empty() {
        bail!("cannot compute coverage percentages over an empty movies table");
    }

    // Coverage counts distinct referenced ids without joining, so ids
    // absent from the movies table still count toward the numerator
    let rated: HashSet<MovieId> = ratings.iter().map(|r| r.movie_id).collect();
    let tagged: HashSet<MovieId> = tags.iter().map(|t| t.movie_id).collect();
    let ratings_coverage = rated.len() as f64 / movies.len() as f64 * 100.0;
    let tags_coverage = tagged.len() as f64 / movies.len() as f64 * 100.0;

    // Inner join on movie id: here orphan ratings drop out, unlike the
    // coverage numerators above
    let genres_by_movie: HashMap<MovieId, &str> = movies
        .iter()
        .map(|m| (m.movie_id, m.genres.as_str()))
        .collect();
    let mut per_genre: HashMap<&str, (f64, u64)> = HashMap::new();
    for r in ratings {
        if let Some(genres) = genres_by_movie.get(&r.movie_id) {
            for genre in genres.split('|') {
                let entry = per_genre.entry(genre).or_insert((0.0, 0));
                entry.0 += f64::from(r.rating);
                entry.1 += 1;
            }
        }
    }
    let mut genre_rating_correlation: Vec<(String, f64)> = per_genre
        .into_iter()
        .map(|(genre, (sum, count))| (genre.to_string(), sum / count as f64))
        .collect();
    genre_rating_correlation.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(CrossTableStats {
        ratings_coverage,
        tags_coverage,
        genre_rating_correlation,
    })
}
