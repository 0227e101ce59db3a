use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::inference::InferenceResult;
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum InferenceJobStatus {
    Queued,
    Running,
    Succeeded,
    Failed,
}

impl InferenceJobStatus {
    /// Whether the job has stopped executing.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// An inference job dispatched to an edge node for a submitted case.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InferenceJob {
    pub id: String,
    pub case_id: String,
    pub status: InferenceJobStatus,
    pub submitted_at: jiff::Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<jiff::Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_cid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<InferenceResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub status_history: Vec<StatusChange>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusChange {
    pub status: InferenceJobStatus,
    pub timestamp: jiff::Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl InferenceJob {
    /// Parse a job from its stored JSON form, rejecting blank ids.
    pub fn from_json(value: serde_json::Value) -> Result<Self, CoreError> {
        let job: InferenceJob = serde_json::from_value(value)?;
        if job.id.trim().is_empty() {
            return Err(CoreError::InvalidJobId(job.id));
        }
        Ok(job)
    }
}
