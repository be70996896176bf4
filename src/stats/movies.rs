use serde::Serialize;

use crate::dataset::Movie;
use crate::stats::rank::{count_by, top_n};
use crate::stats::TOP_N;

#[derive(Debug, Serialize)]
pub struct GenresPerMovie {
    pub min: u32,
    pub max: u32,
    pub avg: f64,
}

#[derive(Debug, Serialize)]
pub struct GenreDiverseMovie {
    pub title: String,
    pub genres: String,
}

#[derive(Debug, Serialize)]
pub struct MoviesTableStats {
    pub top_genres: Vec<(String, u64)>,
    pub genres_per_movie: GenresPerMovie,
    pub most_genre_diverse_movies: Vec<GenreDiverseMovie>,
}

/// Genre count of one movie: delimiter count + 1. An empty genres field
/// therefore counts as one genre; accepted input quirk, not corrected.
fn genre_count(movie: &Movie) -> u32 {
    movie.genres.matches('|').count() as u32 + 1
}

pub fn movies_table_stats(movies: &[Movie]) -> MoviesTableStats {
    let genre_counts = count_by(movies.iter().flat_map(|m| m.genres.split('|')));
    let top_genres = top_n(genre_counts, TOP_N)
        .into_iter()
        .map(|(genre, count)| (genre.to_string(), count))
        .collect();

    let per_movie: Vec<u32> = movies.iter().map(genre_count).collect();
    let min = per_movie.iter().copied().min().unwrap_or(0);
    let max = per_movie.iter().copied().max().unwrap_or(0);
    let avg = if per_movie.is_empty() {
        0.0
    } else {
        per_movie.iter().map(|&c| u64::from(c)).sum::<u64>() as f64 / per_movie.len() as f64
    };

    // All ties at the max, in input order
    let most_genre_diverse_movies = movies
        .iter()
        .zip(&per_movie)
        .filter(|&(_, &count)| count == max)
        .map(|(m, _)| GenreDiverseMovie {
            title: m.title.clone(),
            genres: m.genres.clone(),
        })
        .collect();

    MoviesTableStats {
        top_genres,
        genres_per_movie: GenresPerMovie { min, max, avg },
        most_genre_diverse_movies,
    }
}
