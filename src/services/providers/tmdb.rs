use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{MovieDetails, MovieId, TmdbMovieResponse};
use crate::services::providers::MetadataProvider;

/// TMDB metadata provider
///
/// Issues one `GET /3/movie/{id}` per lookup, gated by a fixed request
/// timeout, and decodes the body into a typed record at the boundary.
#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    poster_cdn_prefix: String,
}

impl TmdbProvider {
    pub fn new(
        api_key: String,
        api_url: String,
        poster_cdn_prefix: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
            poster_cdn_prefix,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.poster_cdn_prefix.clone(),
            Duration::from_secs(config.fetch_timeout_secs),
        )
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    async fn fetch_details(&self, movie_id: MovieId) -> AppResult<MovieDetails> {
        let url = format!("{}/3/movie/{}", self.api_url, movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", "en-US"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let movie: TmdbMovieResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Failed to parse TMDB response: {}", e)))?;

        tracing::debug!(movie_id, provider = "tmdb", "Movie details fetched");

        Ok(MovieDetails::from_response(movie, &self.poster_cdn_prefix))
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
