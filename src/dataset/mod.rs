pub mod bootstrap;
mod similarity;

pub use similarity::SimilarityMatrix;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::Movie;

/// Immutable in-memory dataset: the movie table and its similarity matrix.
///
/// Loaded exactly once at startup and shared read-only for the process
/// lifetime; both artifacts are required static dependencies, so any missing
/// or malformed file aborts startup.
#[derive(Debug, Clone)]
pub struct Dataset {
    movies: Vec<Movie>,
    similarity: SimilarityMatrix,
}

impl Dataset {
    /// Loads the movie table and similarity matrix from disk.
    ///
    /// The matrix dimension must equal the movie count; the row alignment
    /// between the two artifacts is positional, and a dimension mismatch
    /// would otherwise silently pair scores with the wrong movies.
    pub fn load(movies_path: &Path, similarity_path: &Path) -> AppResult<Self> {
        let file = File::open(movies_path).map_err(|e| {
            AppError::Dataset(format!(
                "cannot open movie table {}: {}",
                movies_path.display(),
                e
            ))
        })?;

        let movies: Vec<Movie> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| AppError::Dataset(format!("malformed movie table: {}", e)))?;

        let similarity = SimilarityMatrix::load(similarity_path)?;

        Self::from_parts(movies, similarity)
    }

    /// Assembles a dataset from already-deserialized parts, enforcing the
    /// row-alignment invariant
    pub fn from_parts(movies: Vec<Movie>, similarity: SimilarityMatrix) -> AppResult<Self> {
        if similarity.dimension() != movies.len() {
            return Err(AppError::Dataset(format!(
                "similarity matrix dimension {} does not match movie count {}",
                similarity.dimension(),
                movies.len()
            )));
        }

        Ok(Self { movies, similarity })
    }

    /// All titles in table row order, for the title selector
    pub fn titles(&self) -> Vec<String> {
        self.movies.iter().map(|m| m.title.clone()).collect()
    }

    /// Row index of the first movie whose title exactly equals `title`.
    ///
    /// Duplicate titles resolve to the first matching row.
    pub fn index_of_title(&self, title: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.title == title)
    }

    /// Movie at a given table row
    pub fn movie(&self, index: usize) -> &Movie {
        &self.movies[index]
    }

    /// Number of movies in the table
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Similarity scores for the movie at `index` against every movie
    pub fn similarity_row(&self, index: usize) -> &[f32] {
        self.similarity.row(index)
    }
}
