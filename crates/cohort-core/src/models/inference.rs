use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inference summary persisted alongside a case record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InferenceResult {
    pub top_prediction: String,
    pub categories: Vec<InferenceCategory>,
    pub explanation: String,
    pub recommended_actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InferenceCategory {
    pub label: String,
    pub probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}
