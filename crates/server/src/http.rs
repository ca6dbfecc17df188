//! HTTP Endpoints
//!
//! REST API for profile extraction and scheme finding.

use std::time::Duration;

use axum::{
    extract::{Json, State},
    http::{HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use sahaj_seva_core::{Language, Profile};
use sahaj_seva_matching::SchemeResult;

use crate::state::AppState;
use crate::ServerError;

/// Upper bound accepted for a submitted age
const MAX_AGE: i64 = 130;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let server = &state.config.server;
    let cors_layer = build_cors_layer(&server.cors_origins, server.cors_enabled);
    let timeout = Duration::from_secs(server.timeout_seconds);

    Router::new()
        .route("/api/profile/extract", post(extract_profile))
        .route("/api/scheme-finder", post(scheme_finder))
        .route("/api/meta/states", get(states_meta))
        .route("/api/meta/schemes", get(schemes_meta))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(timeout))
                .layer(cors_layer),
        )
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If cors_origins is empty, defaults to localhost:3000
/// - Otherwise, uses the configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins");
        return CorsLayer::permissive();
    }

    let localhost = || {
        CorsLayer::new()
            .allow_origin(HeaderValue::from_static("http://localhost:3000"))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };

    if origins.is_empty() {
        tracing::info!("No CORS origins configured, defaulting to localhost:3000");
        return localhost();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::error!("All configured CORS origins are invalid, falling back to localhost");
        return localhost();
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Text-to-profile request
#[derive(Debug, Deserialize)]
struct ExtractRequest {
    text: String,
    /// Extraction scans both scripts regardless of the hint
    #[serde(default)]
    language: Language,
}

/// Extract a profile from free text
async fn extract_profile(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Json<Profile> {
    tracing::debug!(language = %request.language, chars = request.text.chars().count(), "Extracting profile");
    Json(state.extractor.extract(&request.text))
}

/// Form-to-matches request
#[derive(Debug, Deserialize)]
struct SchemeFinderRequest {
    #[serde(default)]
    age: Option<i64>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    occupation: Option<String>,
    #[serde(default)]
    income: Option<f64>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    language: Language,
}

impl SchemeFinderRequest {
    fn into_profile(self) -> Result<(Profile, Language), ServerError> {
        let age = match self.age {
            None => None,
            Some(age) if (0..=MAX_AGE).contains(&age) => u32::try_from(age).ok(),
            Some(age) => {
                return Err(ServerError::validation(
                    "age",
                    format!("must be between 0 and {}, got {}", MAX_AGE, age),
                ))
            }
        };

        if let Some(income) = self.income {
            if !income.is_finite() || income < 0.0 {
                return Err(ServerError::validation(
                    "income",
                    format!("must be a non-negative number, got {}", income),
                ));
            }
        }

        let profile = Profile {
            age,
            gender: self.gender.unwrap_or_default(),
            occupation: self.occupation.unwrap_or_default(),
            income: self.income,
            state: self.state.unwrap_or_default(),
        };
        Ok((profile, self.language))
    }
}

#[derive(Debug, Serialize)]
struct SchemeFinderResponse {
    schemes: Vec<SchemeResult>,
}

/// Match a submitted profile against the catalog
async fn scheme_finder(
    State(state): State<AppState>,
    Json(request): Json<SchemeFinderRequest>,
) -> Result<Json<SchemeFinderResponse>, ServerError> {
    let (profile, language) = request.into_profile()?;
    let schemes = state.finder.find(&profile, language);
    Ok(Json(SchemeFinderResponse { schemes }))
}

/// State and union territory listing
async fn states_meta(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({ "states": state.states.as_slice() }))
}

/// Scheme listing
async fn schemes_meta(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({ "schemes": state.scheme_index.as_slice() }))
}

/// Health check
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness check
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ready",
        "schemes": state.scheme_count(),
        "regions": state.states.len(),
    }))
}
