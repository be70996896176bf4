use std::collections::HashMap;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::dataset::{Movie, MovieId, Rating, UserId};
use crate::stats::rank::{count_by, top_n};
use crate::stats::TOP_N;

/// Minimum ratings a movie needs to enter the top-rated ranking.
/// Movies below the threshold are excluded even if their mean would
/// rank first.
pub const MIN_RATINGS_FOR_TOP: u64 = 100;

#[derive(Debug, Serialize)]
pub struct MostRatedMovie {
    pub movie_id: MovieId,
    pub title: String,
    pub rating_count: u64,
}

#[derive(Debug, Serialize)]
pub struct TopRatedMovie {
    pub movie_id: MovieId,
    pub title: String,
    pub avg_rating: f64,
    pub rating_count: u64,
}

#[derive(Debug, Serialize)]
pub struct RatingsTableStats {
    pub avg_rating_overall: f64,
    /// Count per distinct rating value, ascending by value.
    pub rating_distribution: Vec<(f32, u64)>,
    pub most_rated_movies: Vec<MostRatedMovie>,
    pub top_rated_movies: Vec<TopRatedMovie>,
    pub most_active_users: Vec<(UserId, u64)>,
}

pub fn rating_table_stats(movies: &[Movie], ratings: &[Rating]) -> Result<RatingsTableStats> {
    let titles: HashMap<MovieId, &str> = movies
        .iter()
        .map(|m| (m.movie_id, m.title.as_str()))
        .collect();

    // NaN on an empty table, mirroring a mean over zero rows
    let avg_rating_overall =
        ratings.iter().map(|r| f64::from(r.rating)).sum::<f64>() / ratings.len() as f64;

    // Keyed by bit pattern so any float value groups exactly
    let mut value_counts: HashMap<u32, u64> = HashMap::new();
    for r in ratings {
        *value_counts.entry(r.rating.to_bits()).or_insert(0) += 1;
    }
    let mut rating_distribution: Vec<(f32, u64)> = value_counts
        .into_iter()
        .map(|(bits, count)| (f32::from_bits(bits), count))
        .collect();
    rating_distribution.sort_by(|a, b| a.0.total_cmp(&b.0));

    let most_rated_movies = top_n(count_by(ratings.iter().map(|r| r.movie_id)), TOP_N)
        .into_iter()
        .map(|(movie_id, rating_count)| {
            Ok(MostRatedMovie {
                movie_id,
                title: lookup_title(&titles, movie_id)?,
                rating_count,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut sums: HashMap<MovieId, (f64, u64)> = HashMap::new();
    for r in ratings {
        let entry = sums.entry(r.movie_id).or_insert((0.0, 0));
        entry.0 += f64::from(r.rating);
        entry.1 += 1;
    }
    let mut qualified: Vec<(MovieId, f64, u64)> = sums
        .into_iter()
        .filter(|&(_, (_, count))| count >= MIN_RATINGS_FOR_TOP)
        .map(|(movie_id, (sum, count))| (movie_id, sum / count as f64, count))
        .collect();
    qualified.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    qualified.truncate(TOP_N);
    let top_rated_movies = qualified
        .into_iter()
        .map(|(movie_id, avg_rating, rating_count)| {
            Ok(TopRatedMovie {
                movie_id,
                title: lookup_title(&titles, movie_id)?,
                avg_rating,
                rating_count,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let most_active_users = top_n(count_by(ratings.iter().map(|r| r.user_id)), TOP_N);

    Ok(RatingsTableStats {
        avg_rating_overall,
        rating_distribution,
        most_rated_movies,
        top_rated_movies,
        most_active_users,
    })
}

fn lookup_title(titles: &HashMap<MovieId, &str>, movie_id: MovieId) -> Result<String> {
    titles
        .get(&movie_id)
        .map(|t| t.to_string())
        .ok_or_else(|| anyhow!("movie {movie_id} is ranked but missing from movies.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(movie_id: u32, title: &str) -> Movie {
        Movie {
            movie_id,
            title: title.into(),
            genres: "Action".into(),
        }
    }

    fn rating(user_id: u32, movie_id: u32, rating: f32) -> Rating {
        Rating {
            user_id,
            movie_id,
            rating,
            timestamp: 0,
        }
    }

    #[test]
    fn test_overall_average_and_most_rated() {
        let movies = vec![movie(1, "A"), movie(2, "B")];
        let ratings = vec![rating(1, 1, 5.0), rating(1, 2, 3.0), rating(2, 1, 4.0)];

        let stats = rating_table_stats(&movies, &ratings).unwrap();
        assert!((stats.avg_rating_overall - 4.0).abs() < 1e-9);

        assert_eq!(stats.most_rated_movies[0].movie_id, 1);
        assert_eq!(stats.most_rated_movies[0].title, "A");
        assert_eq!(stats.most_rated_movies[0].rating_count, 2);
        assert_eq!(stats.most_rated_movies[1].movie_id, 2);
    }

    #[test]
    fn test_distribution_ascending_and_sums_to_total() {
        let movies = vec![movie(1, "A")];
        let ratings = vec![
            rating(1, 1, 4.0),
            rating(2, 1, 0.5),
            rating(3, 1, 4.0),
            rating(4, 1, 5.0),
            rating(5, 1, 0.5),
        ];

        let stats = rating_table_stats(&movies, &ratings).unwrap();
        let values: Vec<f32> = stats.rating_distribution.iter().map(|e| e.0).collect();
        assert_eq!(values, vec![0.5, 4.0, 5.0]);

        let total: u64 = stats.rating_distribution.iter().map(|e| e.1).sum();
        assert_eq!(total as usize, ratings.len());
    }

    #[test]
    fn test_top_rated_threshold_excludes_small_samples() {
        let movies = vec![movie(1, "Popular"), movie(2, "Obscure")];
        let mut ratings = Vec::new();
        for user in 0..100 {
            ratings.push(rating(user, 1, 4.0));
        }
        // higher mean, far too few ratings
        ratings.push(rating(200, 2, 5.0));
        ratings.push(rating(201, 2, 5.0));

        let stats = rating_table_stats(&movies, &ratings).unwrap();
        assert_eq!(stats.top_rated_movies.len(), 1);
        assert_eq!(stats.top_rated_movies[0].movie_id, 1);
        assert_eq!(stats.top_rated_movies[0].rating_count, 100);
        assert!((stats.top_rated_movies[0].avg_rating - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_rated_empty_when_nothing_qualifies() {
        let movies = vec![movie(1, "A")];
        let ratings = vec![rating(1, 1, 5.0)];

        let stats = rating_table_stats(&movies, &ratings).unwrap();
        assert!(stats.top_rated_movies.is_empty());
    }

    #[test]
    fn test_top_rated_tie_broken_by_movie_id() {
        let movies = vec![movie(2, "B"), movie(1, "A")];
        let mut ratings = Vec::new();
        for user in 0..100 {
            ratings.push(rating(user, 1, 4.0));
            ratings.push(rating(user, 2, 4.0));
        }

        let stats = rating_table_stats(&movies, &ratings).unwrap();
        let ids: Vec<MovieId> = stats.top_rated_movies.iter().map(|m| m.movie_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_most_active_users() {
        let movies = vec![movie(1, "A")];
        let ratings = vec![
            rating(7, 1, 3.0),
            rating(7, 1, 4.0),
            rating(7, 1, 5.0),
            rating(3, 1, 2.0),
            rating(3, 1, 2.5),
            rating(9, 1, 1.0),
        ];

        let stats = rating_table_stats(&movies, &ratings).unwrap();
        assert_eq!(stats.most_active_users, vec![(7, 3), (3, 2), (9, 1)]);
    }

    #[test]
    fn test_fewer_than_ten_returns_all() {
        let movies = vec![movie(1, "A"), movie(2, "B")];
        let ratings = vec![rating(1, 1, 3.0), rating(1, 2, 4.0)];

        let stats = rating_table_stats(&movies, &ratings).unwrap();
        assert_eq!(stats.most_rated_movies.len(), 2);
        assert_eq!(stats.most_active_users.len(), 1);
    }

    #[test]
    fn test_ranked_movie_missing_from_movies_is_an_error() {
        let movies = vec![movie(1, "A")];
        let ratings = vec![rating(1, 99, 5.0)];

        assert!(rating_table_stats(&movies, &ratings).is_err());
    }

    #[test]
    fn test_empty_ratings_table() {
        let movies = vec![movie(1, "A")];
        let stats = rating_table_stats(&movies, &[]).unwrap();

        assert!(stats.avg_rating_overall.is_nan());
        assert!(stats.rating_distribution.is_empty());
        assert!(stats.most_rated_movies.is_empty());
        assert!(stats.top_rated_movies.is_empty());
        assert!(stats.most_active_users.is_empty());
    }
}
