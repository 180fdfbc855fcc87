mod details;
mod movie;

pub use details::{MovieDetails, NamedEntry, TmdbMovieResponse};
pub use movie::{Movie, MovieId};
