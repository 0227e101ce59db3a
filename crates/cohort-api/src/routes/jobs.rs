use axum::Json;
use axum::extract::{Path, State};

use cohort_core::models::job::InferenceJob;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<InferenceJob>>, ApiError> {
    Ok(Json(state.cases.list_jobs()?))
}

pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InferenceJob>, ApiError> {
    Ok(Json(state.cases.get_job(&id)?))
}

/// Resolve the job a case was dispatched with.
pub async fn get_case_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InferenceJob>, ApiError> {
    let record = state.cases.get_case(&id)?;
    let job_id = record
        .job_id
        .ok_or_else(|| ApiError::NotFound(format!("case {id} has no inference job")))?;
    Ok(Json(state.cases.get_job(&job_id)?))
}
