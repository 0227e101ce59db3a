use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use cohort_core::models::case::CaseRecord;
use cohort_predictive::compute_predictive_result;
use cohort_predictive::input::PredictiveInput;
use cohort_predictive::result::PredictiveResult;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummary {
    id: String,
    case_label: String,
    age_months: u32,
    top_prediction: String,
}

/// A stored case mapped onto the engine, with the result for that profile.
#[derive(Serialize)]
pub struct CasePrediction {
    input: PredictiveInput,
    result: PredictiveResult,
}

pub async fn list_cases(
    State(state): State<AppState>,
) -> Result<Json<Vec<CaseSummary>>, ApiError> {
    let summaries = state
        .cases
        .list_cases(Some(state.case_list_limit))?
        .into_iter()
        .map(|record| CaseSummary {
            id: record.id,
            case_label: record.demographics.case_label,
            age_months: record.demographics.age_months,
            top_prediction: record.inference.top_prediction,
        })
        .collect();
    Ok(Json(summaries))
}

pub async fn get_case(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CaseRecord>, ApiError> {
    Ok(Json(state.cases.get_case(&id)?))
}

pub async fn predict_case(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CasePrediction>, ApiError> {
    let record = state.cases.get_case(&id)?;
    let input = PredictiveInput::from(&record);
    let result = compute_predictive_result(&input);
    Ok(Json(CasePrediction { input, result }))
}
