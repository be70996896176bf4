pub mod loader;
pub mod model;

pub use loader::DatasetError;
pub use model::{Dataset, Link, Movie, MovieId, Rating, Tag, UserId};
