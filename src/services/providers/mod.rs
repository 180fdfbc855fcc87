/// Movie metadata provider abstraction
///
/// A provider resolves a movie id to a display-ready detail record by
/// calling an external movie-database API. Failures are expected operational
/// events (timeouts, rate limits, malformed bodies) and are absorbed by
/// [`fetch_details_or_fallback`] rather than failing the whole
/// recommendation response.
use crate::error::AppResult;
use crate::models::{MovieDetails, MovieId};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch descriptive fields for one movie by id
    async fn fetch_details(&self, movie_id: MovieId) -> AppResult<MovieDetails>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Resolves a movie id to details, substituting the fallback record on any
/// provider error. The returned flag reports whether the record is degraded
/// so callers can surface a non-fatal warning to the user.
pub async fn fetch_details_or_fallback(
    provider: &dyn MetadataProvider,
    movie_id: MovieId,
) -> (MovieDetails, bool) {
    match provider.fetch_details(movie_id).await {
        Ok(details) => (details, false),
        Err(e) => {
            tracing::warn!(
                movie_id,
                provider = provider.name(),
                error = %e,
                "Failed to fetch movie details, serving fallback record"
            );
            (MovieDetails::unavailable(), true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_fallback_on_provider_error() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_fetch_details()
            .returning(|_| Err(AppError::ExternalApi("boom".to_string())));
        provider.expect_name().return_const("mock");

        let (details, degraded) = fetch_details_or_fallback(&provider, 42).await;

        assert!(degraded);
        assert_eq!(details, MovieDetails::unavailable());
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let mut provider = MockMetadataProvider::new();
        provider.expect_fetch_details().returning(|_| {
            let mut details = MovieDetails::unavailable();
            details.title = "Arrival".to_string();
            Ok(details)
        });

        let (details, degraded) = fetch_details_or_fallback(&provider, 42).await;

        assert!(!degraded);
        assert_eq!(details.title, "Arrival");
    }
}
