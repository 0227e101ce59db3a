use axum::Json;
use axum::extract::rejection::JsonRejection;

use cohort_predictive::compute_predictive_result;
use cohort_predictive::input::PredictiveInput;
use cohort_predictive::result::PredictiveResult;

use crate::error::ApiError;

pub async fn defaults() -> Json<PredictiveInput> {
    Json(PredictiveInput::default())
}

pub async fn predict(
    payload: Result<Json<PredictiveInput>, JsonRejection>,
) -> Result<Json<PredictiveResult>, ApiError> {
    let Json(input) = payload?;
    Ok(Json(compute_predictive_result(&input)))
}
