use std::sync::Arc;

use axum_test::TestServer;

use marquee_api::api::{create_router, AppState};
use marquee_api::dataset::{Dataset, SimilarityMatrix};
use marquee_api::error::{AppError, AppResult};
use marquee_api::models::{Movie, MovieDetails, MovieId};
use marquee_api::services::providers::MetadataProvider;

/// Provider stub: answers from the movie id, fails for ids in `fail_ids`
struct StubProvider {
    fail_ids: Vec<MovieId>,
}

#[async_trait::async_trait]
impl MetadataProvider for StubProvider {
    async fn fetch_details(&self, movie_id: MovieId) -> AppResult<MovieDetails> {
        if self.fail_ids.contains(&movie_id) {
            return Err(AppError::ExternalApi("stubbed outage".to_string()));
        }

        let mut details = MovieDetails::unavailable();
        details.title = format!("Movie {}", movie_id);
        details.poster_url = format!("http://cdn.local/{}.jpg", movie_id);
        Ok(details)
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

fn movie(id: u32, title: &str) -> Movie {
    Movie {
        movie_id: id,
        title: title.to_string(),
        tags: String::new(),
    }
}

fn test_dataset() -> Dataset {
    let movies = vec![
        movie(1, "A"),
        movie(2, "B"),
        movie(3, "C"),
        movie(4, "D"),
        movie(5, "E"),
        movie(6, "F"),
    ];
    let similarity = SimilarityMatrix::from_rows(vec![
        vec![1.0, 0.9, 0.1, 0.8, 0.95, 0.2],
        vec![0.9, 1.0, 0.3, 0.4, 0.5, 0.6],
        vec![0.1, 0.3, 1.0, 0.2, 0.3, 0.4],
        vec![0.8, 0.4, 0.2, 1.0, 0.7, 0.5],
        vec![0.95, 0.5, 0.3, 0.7, 1.0, 0.6],
        vec![0.2, 0.6, 0.4, 0.5, 0.6, 1.0],
    ])
    .unwrap();
    Dataset::from_parts(movies, similarity).unwrap()
}

fn create_test_server(fail_ids: Vec<MovieId>) -> TestServer {
    let state = AppState::new(
        Arc::new(test_dataset()),
        Arc::new(StubProvider { fail_ids }),
    );
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(vec![]);
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_get_movies_lists_titles_in_table_order() {
    let server = create_test_server(vec![]);

    let response = server.get("/api/v1/movies").await;
    response.assert_status_ok();

    let titles: Vec<String> = response.json();
    assert_eq!(titles, vec!["A", "B", "C", "D", "E", "F"]);
}

#[tokio::test]
async fn test_recommendations_ordered_by_similarity() {
    let server = create_test_server(vec![]);

    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "A")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 5);

    // Neighbor ids of "A" by descending score: 5, 2, 4, 6, 3
    let titles: Vec<&str> = recommendations
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec!["Movie 5", "Movie 2", "Movie 4", "Movie 6", "Movie 3"]
    );

    assert!(body["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_recommendations_unknown_title_is_404() {
    let server = create_test_server(vec![]);

    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "Nonexistent")
        .await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Nonexistent"));
}

#[tokio::test]
async fn test_recommendations_blank_title_is_400() {
    let server = create_test_server(vec![]);

    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "   ")
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_provider_outage_degrades_to_fallback_with_warning() {
    // Movie id 2 ("B") is among A's recommendations and will fail
    let server = create_test_server(vec![2]);

    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "A")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 5);

    // The failed slot keeps its rank and shows the fallback record
    assert_eq!(recommendations[1]["title"], "Unavailable");
    assert_eq!(recommendations[1]["budget"], 0);
    assert_eq!(recommendations[1]["rating"], "N/A");

    let warnings = body["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
}
