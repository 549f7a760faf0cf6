use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{Candidate, CandidateId, JobDescription, JobId};
use super::overrides::OverrideRequest;
use super::profiles::RoleFamily;
use super::repository::{RepositoryError, ReviewRepository};
use super::service::{ScreeningService, ScreeningServiceError};

/// Catalog entry as listed by `GET /api/v1/jobs`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobView {
    pub id: JobId,
    pub title: String,
    pub role_family: RoleFamily,
    pub application_count: u32,
    pub pool_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortlistRequest {
    pub shortlisted: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisResponse {
    pub job_id: JobId,
    pub candidates: Vec<Candidate>,
}

/// Router builder exposing the candidate pool, review, and audit endpoints.
pub fn screening_router<R>(service: Arc<ScreeningService<R>>) -> Router
where
    R: ReviewRepository + 'static,
{
    Router::new()
        .route("/api/v1/jobs", get(jobs_handler::<R>))
        .route("/api/v1/jobs/synthesize", post(synthesize_handler::<R>))
        .route(
            "/api/v1/jobs/:job_id/candidates",
            get(candidates_handler::<R>),
        )
        .route(
            "/api/v1/jobs/:job_id/candidates/:candidate_id",
            get(candidate_handler::<R>),
        )
        .route(
            "/api/v1/jobs/:job_id/candidates/:candidate_id/shortlist",
            post(shortlist_handler::<R>),
        )
        .route(
            "/api/v1/jobs/:job_id/candidates/:candidate_id/override",
            post(override_handler::<R>),
        )
        .route("/api/v1/jobs/:job_id/audit", get(audit_handler::<R>))
        .route("/api/v1/jobs/:job_id/summary", get(summary_handler::<R>))
        .with_state(service)
}

pub(crate) async fn jobs_handler<R>(State(service): State<Arc<ScreeningService<R>>>) -> Response
where
    R: ReviewRepository + 'static,
{
    let jobs: Vec<JobView> = service
        .jobs()
        .iter()
        .map(|job| JobView {
            id: job.id.clone(),
            title: job.title.clone(),
            role_family: job.role_family,
            application_count: job.application_count,
            pool_size: service.store().get(&job.id).len(),
        })
        .collect();
    (StatusCode::OK, Json(jobs)).into_response()
}

pub(crate) async fn synthesize_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Json(job): Json<JobDescription>,
) -> Response
where
    R: ReviewRepository + 'static,
{
    match service.synthesize(&job) {
        Ok(candidates) => {
            let body = SynthesisResponse {
                job_id: job.id,
                candidates,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn candidates_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: ReviewRepository + 'static,
{
    match service.candidates(&JobId(job_id)) {
        Ok(candidates) => (StatusCode::OK, Json(candidates)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn candidate_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path((job_id, candidate_id)): Path<(String, String)>,
) -> Response
where
    R: ReviewRepository + 'static,
{
    match service.candidate(&JobId(job_id), &CandidateId(candidate_id)) {
        Ok(candidate) => (StatusCode::OK, Json(candidate)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn shortlist_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path((job_id, candidate_id)): Path<(String, String)>,
    Json(request): Json<ShortlistRequest>,
) -> Response
where
    R: ReviewRepository + 'static,
{
    match service.shortlist(
        &JobId(job_id),
        &CandidateId(candidate_id),
        request.shortlisted,
    ) {
        Ok(candidate) => (StatusCode::OK, Json(candidate)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn override_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path((job_id, candidate_id)): Path<(String, String)>,
    Json(request): Json<OverrideRequest>,
) -> Response
where
    R: ReviewRepository + 'static,
{
    match service.override_bucket(&JobId(job_id), &CandidateId(candidate_id), request) {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn audit_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: ReviewRepository + 'static,
{
    match service.audit_trail(&JobId(job_id)) {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn summary_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: ReviewRepository + 'static,
{
    match service.pool_summary(&JobId(job_id)) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ScreeningServiceError) -> Response {
    let status = match &error {
        ScreeningServiceError::UnknownJob(_)
        | ScreeningServiceError::UnknownCandidate(_)
        | ScreeningServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ScreeningServiceError::Override(_) | ScreeningServiceError::InvalidJob(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ScreeningServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
