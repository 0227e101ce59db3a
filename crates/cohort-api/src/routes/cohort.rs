use axum::Json;
use axum::extract::State;

use cohort_predictive::stats::{self, CohortStats};

use crate::error::ApiError;
use crate::state::AppState;

/// Aggregates over every stored case, ignoring the listing limit.
pub async fn cohort_stats(
    State(state): State<AppState>,
) -> Result<Json<CohortStats>, ApiError> {
    let records = state.cases.list_cases(None)?;
    Ok(Json(stats::cohort_stats(&records)))
}
