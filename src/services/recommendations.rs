use crate::dataset::Dataset;
use crate::error::{AppError, AppResult};
use crate::models::{MovieDetails, MovieId};
use crate::services::providers::{self, MetadataProvider};

/// How many neighbors a recommendation returns
pub const RECOMMENDATION_COUNT: usize = 5;

/// Returns the ids of the movies most similar to `title`, best match first.
///
/// Looks up the row of the first movie whose title exactly equals the input,
/// sorts that row's `(index, score)` pairs by descending score (the sort is
/// stable, so ties keep ascending row order), drops the top entry — the
/// queried movie itself, trivially at similarity 1.0 — and maps the next
/// five rows back to movie ids. A table with fewer than six movies yields a
/// correspondingly shorter list.
pub fn recommend(dataset: &Dataset, title: &str) -> AppResult<Vec<MovieId>> {
    let movie_index = dataset
        .index_of_title(title)
        .ok_or_else(|| AppError::NotFound(format!("unknown movie title: {}", title)))?;

    let distances = dataset.similarity_row(movie_index);

    let mut ranked: Vec<(usize, f32)> = distances.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let ids = ranked
        .into_iter()
        .skip(1)
        .take(RECOMMENDATION_COUNT)
        .map(|(index, _)| dataset.movie(index).movie_id)
        .collect();

    tracing::debug!(title = %title, row = movie_index, "Computed recommendations");

    Ok(ids)
}

/// Recommendations enriched with metadata, plus any non-fatal warnings.
///
/// Details are fetched one movie at a time, in recommendation order; each
/// call is gated by the provider's request timeout, so a slow external API
/// slows the response by up to one timeout per recommendation. A failed
/// fetch degrades that slot to the fallback record and adds a warning
/// instead of failing the response.
pub async fn recommend_details(
    dataset: &Dataset,
    provider: &dyn MetadataProvider,
    title: &str,
) -> AppResult<(Vec<MovieDetails>, Vec<String>)> {
    let ids = recommend(dataset, title)?;

    let mut details = Vec::with_capacity(ids.len());
    let mut warnings = Vec::new();

    for movie_id in ids {
        let (record, degraded) = providers::fetch_details_or_fallback(provider, movie_id).await;
        if degraded {
            warnings.push("Failed to fetch movie details. Please try again later.".to_string());
        }
        details.push(record);
    }

    Ok((details, warnings))
}
