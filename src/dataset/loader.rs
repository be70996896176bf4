use std::fs::File;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::dataset::model::Dataset;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl Dataset {
    /// Load the four CSV tables from `dir`. The first missing file or
    /// malformed row aborts the load; there is no partial-results mode.
    pub fn load(dir: &Path) -> Result<Self, DatasetError> {
        let links = read_table(&dir.join("links.csv"))?;
        let movies = read_table(&dir.join("movies.csv"))?;
        let ratings = read_table(&dir.join("ratings.csv"))?;
        let tags = read_table(&dir.join("tags.csv"))?;

        info!(
            "Loaded {} links, {} movies, {} ratings, {} tags",
            links.len(),
            movies.len(),
            ratings.len(),
            tags.len()
        );

        Ok(Self {
            links,
            movies,
            ratings,
            tags,
        })
    }
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Reading {}", path.display()));

    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: T = result.map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(row);
        // ratings.csv can run to millions of rows; don't redraw per row
        if rows.len() % 50_000 == 0 {
            spinner.set_message(format!("Reading {} ({} rows)", path.display(), rows.len()));
            spinner.tick();
        }
    }
    spinner.finish_and_clear();

    Ok(rows)
}
