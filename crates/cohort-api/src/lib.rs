//! cohort-api
//!
//! HTTP surface over the predictive engine and the stored case records.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/predict", post(routes::predict::predict))
        .route("/predict/defaults", get(routes::predict::defaults))
        .route("/cases", get(routes::cases::list_cases))
        .route("/cases/{id}", get(routes::cases::get_case))
        .route("/cases/{id}/predict", get(routes::cases::predict_case))
        .route("/cases/{id}/job", get(routes::jobs::get_case_job))
        .route("/cohort/stats", get(routes::cohort::cohort_stats))
        .route("/jobs", get(routes::jobs::list_jobs))
        .route("/jobs/{id}", get(routes::jobs::get_job))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
