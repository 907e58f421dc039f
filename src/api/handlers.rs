use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::Recommendation;
use crate::services::recommend;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    /// Title of the selected movie
    pub title: String,
    /// How many recommendations to return; falls back to the configured
    /// default when absent
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub title: String,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub titles: Vec<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Returns every catalog title in matrix order, for selection UIs
pub async fn list_movies(State(state): State<AppState>) -> Json<MovieListResponse> {
    let titles = state
        .snapshot
        .catalog()
        .movies()
        .iter()
        .map(|movie| movie.title.clone())
        .collect();
    Json(MovieListResponse { titles })
}

/// Runs the top-N similarity query for the selected movie.
///
/// Fewer than `top_n` results means the catalog ran out of candidates; the
/// response is not padded, that is left to the presentation layer.
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> AppResult<Json<RecommendResponse>> {
    let top_n = params.top_n.unwrap_or(state.default_top_n);
    let recommendations = recommend::recommend(&state.snapshot, &params.title, top_n)?;

    Ok(Json(RecommendResponse {
        title: params.title,
        recommendations,
    }))
}
