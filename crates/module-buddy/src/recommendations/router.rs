use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::error::RecommendationError;
use super::service::RecommendationService;
use super::source::CandidateSource;
use super::student::StudentRecord;
use super::views::{CareerModulesResponse, ModuleSummary, RecommendationsResponse};

/// Router builder exposing recommendation and catalog listing endpoints.
pub fn recommendation_router<S>(service: Arc<RecommendationService<S>>) -> Router
where
    S: CandidateSource + 'static,
{
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler::<S>))
        .route("/api/v1/modules", get(overview_handler::<S>))
        .route("/api/v1/modules/reserved", get(reserved_handler::<S>))
        .route("/api/v1/lecturers", get(lecturers_handler::<S>))
        .route("/api/v1/occupations", get(occupations_handler::<S>))
        .route(
            "/api/v1/occupations/:occupation/modules",
            get(occupation_modules_handler::<S>),
        )
        .route("/api/v1/career-modules", post(career_modules_handler::<S>))
        .with_state(service)
}

pub(crate) async fn recommend_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
    payload: Result<axum::Json<Value>, JsonRejection>,
) -> Response
where
    S: CandidateSource + 'static,
{
    let axum::Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    let result = StudentRecord::from_json(&payload)
        .and_then(|student| service.recommend(&student.preference_profile()));

    match result {
        Ok(ranked) => {
            let body = RecommendationsResponse::from_ranked(&ranked);
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn overview_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
) -> Response
where
    S: CandidateSource + 'static,
{
    match service.overview() {
        Ok(modules) => {
            let body = RecommendationsResponse::from_ranked(&modules);
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reserved_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
) -> Response
where
    S: CandidateSource + 'static,
{
    match service.reserved_modules() {
        Ok(modules) => {
            let modules: Vec<ModuleSummary> = modules.iter().map(ModuleSummary::from).collect();
            (StatusCode::OK, axum::Json(json!({ "modules": modules }))).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn lecturers_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
) -> Response
where
    S: CandidateSource + 'static,
{
    match service.lecturers() {
        Ok(lecturers) => {
            (StatusCode::OK, axum::Json(json!({ "lecturers": lecturers }))).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn occupations_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
) -> Response
where
    S: CandidateSource + 'static,
{
    match service.occupations() {
        Ok(occupations) => {
            (StatusCode::OK, axum::Json(json!({ "occupations": occupations }))).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn occupation_modules_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
    Path(occupation): Path<String>,
) -> Response
where
    S: CandidateSource + 'static,
{
    match service.modules_for_occupation(&occupation) {
        Ok(modules) => (
            StatusCode::OK,
            axum::Json(json!({ "occupation": occupation, "modules": modules })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn career_modules_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
    payload: Result<axum::Json<Value>, JsonRejection>,
) -> Response
where
    S: CandidateSource + 'static,
{
    let axum::Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    let result = StudentRecord::from_json(&payload)
        .and_then(|student| service.career_modules(&student.desired_jobs));

    match result {
        Ok(careers) => {
            (StatusCode::OK, axum::Json(CareerModulesResponse { careers })).into_response()
        }
        Err(error) => error_response(error),
    }
}

// Body extraction failures keep axum's status but use the JSON error shape.
fn rejection_response(rejection: JsonRejection) -> Response {
    debug!(%rejection, "request body rejected");
    let payload = json!({ "error": rejection.body_text() });
    (rejection.status(), axum::Json(payload)).into_response()
}

fn error_response(error: RecommendationError) -> Response {
    let status = match &error {
        RecommendationError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        RecommendationError::Source(_) => {
            warn!(%error, "candidate source failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
