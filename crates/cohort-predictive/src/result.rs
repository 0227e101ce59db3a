use serde::Serialize;
use ts_rs::TS;

use cohort_core::models::inference::{InferenceCategory, InferenceResult};

use crate::scenario::Scenario;

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct PredictiveScenario {
    pub scenario: Scenario,
    pub label: String,
    pub probability: f64,
    pub narrative: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PredictiveResult {
    pub top_finding: String,
    /// Highest probability first.
    pub scenarios: Vec<PredictiveScenario>,
    pub risk_summary: String,
    pub recommendations: Vec<String>,
}

/// Pair probabilities (in [`Scenario::ALL`] order) with their scenarios and
/// sort descending. The sort is stable, so ties keep definition order.
pub fn rank_scenarios(probabilities: [f64; 3]) -> Vec<PredictiveScenario> {
    let mut scenarios: Vec<PredictiveScenario> = Scenario::ALL
        .iter()
        .zip(probabilities)
        .map(|(&scenario, probability)| PredictiveScenario {
            scenario,
            label: scenario.label().to_string(),
            probability,
            narrative: scenario.narrative().to_string(),
        })
        .collect();

    scenarios.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    scenarios
}

impl From<PredictiveResult> for InferenceResult {
    fn from(result: PredictiveResult) -> Self {
        InferenceResult {
            top_prediction: result.top_finding,
            categories: result
                .scenarios
                .into_iter()
                .map(|s| InferenceCategory {
                    label: s.label,
                    probability: s.probability,
                    narrative: Some(s.narrative),
                })
                .collect(),
            explanation: result.risk_summary,
            recommended_actions: result.recommendations,
        }
    }
}
