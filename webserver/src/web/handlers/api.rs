//! REST API handlers
//!
//! One POST endpoint per artifact kind plus a health probe. Handlers only see
//! the [`ArtifactGenerator`] capability.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use generator::ArtifactGenerator;
use shared::{
    Component, EducationalRoadmap, EducationalRoadmapRequest, EducationalTrail, EducationalTrailRequest,
    KeyResultsRequest, KeyResultsResponse, Roadmap, RoadmapRequest, TopicsRequest, TopicsResponse, service_debug,
    service_warn,
};

use crate::error::ApiError;
use crate::state::AppState;

pub const SERVICE_NAME: &str = "spellbook";

/// Health check endpoint - /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
    }))
}

/// Unwrap a JSON body, reporting the primary field when binding fails
fn bind<T>(body: Result<Json<T>, JsonRejection>, field: &str) -> Result<T, ApiError> {
    body.map(|Json(request)| request).map_err(|rejection| {
        service_debug!(Component::WebServer, reason = %rejection.body_text(), "Rejected request body");
        ApiError::missing_field(field)
    })
}

/// Token for one request: cancelled on server shutdown or when the handler is dropped
fn request_token<G>(state: &AppState<G>) -> CancellationToken {
    state.shutdown.child_token()
}

fn failure(endpoint: &str, error: generator::GenerationError) -> ApiError {
    service_warn!(Component::WebServer, endpoint, error = %error, "Generation request failed");
    ApiError::from(error)
}

/// Roadmap endpoint - /api/v1/roadmap
pub async fn generate_roadmap<G>(
    State(state): State<AppState<G>>,
    body: Result<Json<RoadmapRequest>, JsonRejection>,
) -> Result<Json<Roadmap>, ApiError>
where
    G: ArtifactGenerator + 'static,
{
    let request = bind(body, "topic")?;
    let cancel = request_token(&state);
    let _guard = cancel.clone().drop_guard();

    state
        .generator
        .generate_roadmap(request, &cancel)
        .await
        .map(Json)
        .map_err(|e| failure("roadmap", e))
}

/// Topics endpoint - /api/v1/topics
pub async fn generate_topics<G>(
    State(state): State<AppState<G>>,
    body: Result<Json<TopicsRequest>, JsonRejection>,
) -> Result<Json<TopicsResponse>, ApiError>
where
    G: ArtifactGenerator + 'static,
{
    let request = bind(body, "subject")?;
    let cancel = request_token(&state);
    let _guard = cancel.clone().drop_guard();

    state
        .generator
        .generate_topics(request, &cancel)
        .await
        .map(Json)
        .map_err(|e| failure("topics", e))
}

/// Key results endpoint - /api/v1/key-results
pub async fn generate_key_results<G>(
    State(state): State<AppState<G>>,
    body: Result<Json<KeyResultsRequest>, JsonRejection>,
) -> Result<Json<KeyResultsResponse>, ApiError>
where
    G: ArtifactGenerator + 'static,
{
    let request = bind(body, "objective")?;
    let cancel = request_token(&state);
    let _guard = cancel.clone().drop_guard();

    state
        .generator
        .generate_key_results(request, &cancel)
        .await
        .map(Json)
        .map_err(|e| failure("key-results", e))
}

/// Educational roadmap endpoint - /api/v1/educational-roadmap
pub async fn generate_educational_roadmap<G>(
    State(state): State<AppState<G>>,
    body: Result<Json<EducationalRoadmapRequest>, JsonRejection>,
) -> Result<Json<EducationalRoadmap>, ApiError>
where
    G: ArtifactGenerator + 'static,
{
    let request = bind(body, "topic")?;
    let cancel = request_token(&state);
    let _guard = cancel.clone().drop_guard();

    state
        .generator
        .generate_educational_roadmap(request, &cancel)
        .await
        .map(Json)
        .map_err(|e| failure("educational-roadmap", e))
}

/// Educational trail endpoint - /api/v1/educational-trail
pub async fn generate_educational_trail<G>(
    State(state): State<AppState<G>>,
    body: Result<Json<EducationalTrailRequest>, JsonRejection>,
) -> Result<Json<EducationalTrail>, ApiError>
where
    G: ArtifactGenerator + 'static,
{
    let request = bind(body, "topic")?;
    let cancel = request_token(&state);
    let _guard = cancel.clone().drop_guard();

    state
        .generator
        .generate_educational_trail(request, &cancel)
        .await
        .map(Json)
        .map_err(|e| failure("educational-trail", e))
}
