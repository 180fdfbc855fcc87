use serde::{Deserialize, Serialize};

/// TMDB movie identifier
pub type MovieId = u32;

/// One row of the movie table.
///
/// Row order is fixed at load time and shared with the similarity matrix:
/// row `i` of the matrix scores movie `i` of this table against every other
/// movie. The table is immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// TMDB identifier used for metadata lookups
    pub movie_id: MovieId,
    /// Display title; the recommendation lookup key
    pub title: String,
    /// Derived feature tags used upstream to compute similarity
    #[serde(default)]
    pub tags: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_deserialization() {
        let json = r#"{
            "movie_id": 19995,
            "title": "Avatar",
            "tags": "action adventure fantasy sciencefiction"
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.movie_id, 19995);
        assert_eq!(movie.title, "Avatar");
        assert!(movie.tags.contains("adventure"));
    }

    #[test]
    fn test_movie_tags_default_to_empty() {
        let movie: Movie = serde_json::from_str(r#"{"movie_id": 1, "title": "A"}"#).unwrap();
        assert_eq!(movie.tags, "");
    }
}
