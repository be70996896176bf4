use serde::Deserialize;

pub type MovieId = u32;
pub type UserId = u32;

/// One row of movies.csv. `genres` stays as the raw pipe-delimited
/// string and is split on demand by the statistics that need it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_id: MovieId,
    pub title: String,
    pub genres: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub rating: f32,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub tag: String,
    pub timestamp: i64,
}

/// External identifiers. Loaded for completeness; no statistic consumes
/// them. `imdb_id` keeps its leading zeros, `tmdb_id` may be blank.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub movie_id: MovieId,
    pub imdb_id: String,
    pub tmdb_id: Option<u32>,
}

/// The four tables, loaded once and read-only afterwards. Foreign keys
/// are not checked: a rating or tag may reference a movie id that is
/// absent from `movies` (the coverage statistics measure exactly that).
#[derive(Debug)]
pub struct Dataset {
    pub links: Vec<Link>,
    pub movies: Vec<Movie>,
    pub ratings: Vec<Rating>,
    pub tags: Vec<Tag>,
}
