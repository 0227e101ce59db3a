use cohort_core::models::case::CaseRecord;
use cohort_core::models::job::InferenceJob;

use crate::error::StorageError;

/// Source of stored case records and the inference jobs dispatched for them.
pub trait CaseSource: Send + Sync {
    /// List cases ordered by id, truncated to `limit` when given.
    fn list_cases(&self, limit: Option<usize>) -> Result<Vec<CaseRecord>, StorageError>;

    /// Fetch a single case. Unknown ids are [`StorageError::NotFound`].
    fn get_case(&self, id: &str) -> Result<CaseRecord, StorageError>;

    /// List jobs, most recently submitted first.
    fn list_jobs(&self) -> Result<Vec<InferenceJob>, StorageError>;

    /// Fetch a single job. Unknown ids are [`StorageError::JobNotFound`].
    fn get_job(&self, id: &str) -> Result<InferenceJob, StorageError>;
}
