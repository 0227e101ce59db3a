use std::sync::Arc;

use cohort_storage::cases::CaseSource;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub cases: Arc<dyn CaseSource>,
    pub case_list_limit: usize,
}
