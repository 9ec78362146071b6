use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{
    ApplicantId, ApplicantSubmission, ApplicationId, JobId, JobPosting, JobStatus, Stage,
};
use super::repository::{ApplicationStatusView, HiringRepository};
use super::search::ApplicantQuery;
use super::service::{ApplicationUpdate, ContactUpdate, HiringService, HiringServiceError};

/// Router exposing the hiring registry over HTTP.
pub fn hiring_router<R>(service: Arc<HiringService<R>>) -> Router
where
    R: HiringRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/jobs",
            post(post_job_handler::<R>).get(list_jobs_handler::<R>),
        )
        .route("/api/v1/jobs/:job_id/status", put(job_status_handler::<R>))
        .route("/api/v1/jobs/:job_id/ranking", get(ranking_handler::<R>))
        .route("/api/v1/jobs/:job_id/pipeline", get(pipeline_handler::<R>))
        .route(
            "/api/v1/applicants",
            post(add_applicant_handler::<R>).get(search_applicants_handler::<R>),
        )
        .route(
            "/api/v1/applicants/:applicant_id",
            put(applicant_contact_handler::<R>),
        )
        .route("/api/v1/applications", post(apply_handler::<R>))
        .route(
            "/api/v1/applications/:application_id",
            get(application_handler::<R>),
        )
        .route(
            "/api/v1/applications/:application_id/stage",
            put(stage_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobStatusRequest {
    pub(crate) status: JobStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplyRequest {
    pub(crate) applicant_id: ApplicantId,
    pub(crate) job_id: JobId,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StageRequest {
    pub(crate) stage: Stage,
}

/// Query string for applicant listing; at most one filter applies, checked
/// in the order skill, min_years, keyword.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApplicantSearchParams {
    pub(crate) skill: Option<String>,
    pub(crate) min_years: Option<u32>,
    pub(crate) keyword: Option<String>,
    pub(crate) field: Option<String>,
}

impl ApplicantSearchParams {
    fn into_query(self) -> Option<ApplicantQuery> {
        if let Some(skill) = self.skill {
            return Some(ApplicantQuery::Skill { skill });
        }
        if let Some(min_years) = self.min_years {
            return Some(ApplicantQuery::MinimumExperience { min_years });
        }
        self.keyword.map(|keyword| ApplicantQuery::Keyword {
            keyword,
            field: self.field.unwrap_or_else(|| "name".to_string()),
        })
    }
}

fn error_response(error: HiringServiceError) -> Response {
    let status = if error.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

pub(crate) async fn post_job_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Json(posting): Json<JobPosting>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.post_job(posting) {
        Ok(job) => (StatusCode::CREATED, Json(job)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_jobs_handler<R>(State(service): State<Arc<HiringService<R>>>) -> Response
where
    R: HiringRepository + 'static,
{
    match service.jobs() {
        Ok(jobs) => (StatusCode::OK, Json(jobs)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn job_status_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(job_id): Path<String>,
    Json(request): Json<JobStatusRequest>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.update_job_status(&JobId(job_id), request.status) {
        Ok(job) => (StatusCode::OK, Json(job)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn ranking_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.rank_by_score(&JobId(job_id)) {
        Ok(ranked) => {
            let views: Vec<ApplicationStatusView> =
                ranked.iter().map(|record| record.status_view()).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn pipeline_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: HiringRepository + 'static,
{
    let job_id = JobId(job_id);
    match service.job_pipeline(&job_id) {
        Ok(Some(pipeline)) => (StatusCode::OK, Json(pipeline)).into_response(),
        Ok(None) => error_response(HiringServiceError::JobNotFound(job_id)),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_applicant_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Json(submission): Json<ApplicantSubmission>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.add_applicant(submission) {
        Ok(applicant) => (StatusCode::CREATED, Json(applicant)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn search_applicants_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Query(params): Query<ApplicantSearchParams>,
) -> Response
where
    R: HiringRepository + 'static,
{
    let result = match params.into_query() {
        Some(query) => service.search_applicants(&query),
        None => service.applicants(),
    };

    match result {
        Ok(applicants) => (StatusCode::OK, Json(applicants)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn applicant_contact_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(applicant_id): Path<String>,
    Json(update): Json<ContactUpdate>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.update_applicant_contact(&ApplicantId(applicant_id), update) {
        Ok(applicant) => (StatusCode::OK, Json(applicant)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn apply_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Json(request): Json<ApplyRequest>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.apply(&request.applicant_id, &request.job_id) {
        Ok(record) => (StatusCode::CREATED, Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn application_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.application(&ApplicationId(application_id)) {
        Ok(record) => (StatusCode::OK, Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn stage_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(application_id): Path<String>,
    Json(request): Json<StageRequest>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.advance_stage(&ApplicationId(application_id), request.stage) {
        Ok(ApplicationUpdate::Updated(record)) => {
            (StatusCode::OK, Json(record.status_view())).into_response()
        }
        Ok(ApplicationUpdate::NotFound(id)) => {
            error_response(HiringServiceError::ApplicationNotFound(id))
        }
        Err(error) => error_response(error),
    }
}
