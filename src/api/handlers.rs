use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::MovieDetails;
use crate::services::recommendations;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    /// Enriched records for the recommended movies, best match first
    pub recommendations: Vec<MovieDetails>,
    /// Non-fatal warnings, one per recommendation that fell back to the
    /// placeholder record
    pub warnings: Vec<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Returns every known movie title, in table order.
///
/// This feeds the client's single-select control; `recommendations` expects
/// one of these values back verbatim.
pub async fn get_titles(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.dataset.titles())
}

/// Handler for the recommendations endpoint
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationParams>,
) -> AppResult<Json<RecommendationsResponse>> {
    if params.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title cannot be empty".to_string()));
    }

    let (details, warnings) =
        recommendations::recommend_details(&state.dataset, state.metadata.as_ref(), &params.title)
            .await?;

    tracing::info!(
        title = %params.title,
        results = details.len(),
        degraded = warnings.len(),
        "Recommendations served"
    );

    Ok(Json(RecommendationsResponse {
        recommendations: details,
        warnings,
    }))
}
