use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Dense square matrix of pairwise similarity scores, row-major.
///
/// Serialized at rest as a bincode `Vec<Vec<f32>>` produced by the offline
/// pipeline. Row `i` must line up with row `i` of the movie table; the
/// dimension check against the table happens in `Dataset::load`.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    dimension: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Builds a matrix from per-row vectors, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<f32>>) -> AppResult<Self> {
        let dimension = rows.len();
        let mut scores = Vec::with_capacity(dimension * dimension);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dimension {
                return Err(AppError::Dataset(format!(
                    "similarity matrix is not square: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    dimension
                )));
            }
            scores.extend(row);
        }

        Ok(Self { dimension, scores })
    }

    /// Deserializes the matrix from a bincode file
    pub fn load(path: &Path) -> AppResult<Self> {
        let file = File::open(path).map_err(|e| {
            AppError::Dataset(format!(
                "cannot open similarity matrix {}: {}",
                path.display(),
                e
            ))
        })?;

        let rows: Vec<Vec<f32>> = bincode::deserialize_from(BufReader::new(file))
            .map_err(|e| AppError::Dataset(format!("malformed similarity matrix: {}", e)))?;

        Self::from_rows(rows)
    }

    /// Number of rows (and columns)
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Similarity scores of movie `index` against every movie, in row order
    pub fn row(&self, index: usize) -> &[f32] {
        let start = index * self.dimension;
        &self.scores[start..start + self.dimension]
    }
}
