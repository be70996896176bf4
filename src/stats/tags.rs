use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::dataset::{MovieId, Tag, UserId};
use crate::stats::rank::{count_by, top_n};
use crate::stats::TOP_N;

#[derive(Debug, Serialize)]
pub struct TagsTableStats {
    /// Tag strings are compared case-sensitively, no normalization.
    pub most_common_tags: Vec<(String, u64)>,
    pub unique_tags_count: usize,
    /// Per user, the number of distinct movies tagged.
    pub top_tagging_users: Vec<(UserId, u64)>,
}

pub fn tag_table_stats(tags: &[Tag]) -> TagsTableStats {
    let tag_counts = count_by(tags.iter().map(|t| t.tag.as_str()));
    let unique_tags_count = tag_counts.len();
    let most_common_tags = top_n(tag_counts, TOP_N)
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();

    // Tagging the same movie ten times counts once
    let mut movies_by_user: HashMap<UserId, HashSet<MovieId>> = HashMap::new();
    for t in tags {
        movies_by_user.entry(t.user_id).or_default().insert(t.movie_id);
    }
    let distinct_counts: HashMap<UserId, u64> = movies_by_user
        .into_iter()
        .map(|(user, movies)| (user, movies.len() as u64))
        .collect();
    let top_tagging_users = top_n(distinct_counts, TOP_N);

    TagsTableStats {
        most_common_tags,
        unique_tags_count,
        top_tagging_users,
    }
}
