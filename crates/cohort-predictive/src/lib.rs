//! cohort-predictive
//!
//! Rule-based predictive engine. Scores three fixed clinical scenarios from a
//! structured intake profile, normalizes the scores with a softmax and attaches
//! narratives and recommended next steps. Also aggregates cohort statistics
//! over stored cases. Pure — no I/O, no shared state.

pub mod input;
pub mod normalize;
pub mod recommend;
pub mod result;
pub mod scenario;
pub mod signals;
pub mod stats;

use input::PredictiveInput;
use result::{PredictiveResult, rank_scenarios};
use scenario::Scenario;
use signals::SeveritySignals;

/// Run the engine over a single intake profile.
///
/// Total over its input domain: always returns exactly three scenarios whose
/// probabilities sum to one, ranked highest first.
pub fn compute_predictive_result(input: &PredictiveInput) -> PredictiveResult {
    let signals = SeveritySignals::derive(input);
    let raw = Scenario::ALL.map(|scenario| scenario.raw_score(input, &signals));
    let probabilities = normalize::softmax(raw);

    let scenarios = rank_scenarios(probabilities);
    let top = &scenarios[0];
    tracing::debug!(
        top_finding = top.label.as_str(),
        probability = top.probability,
        "predictive result computed"
    );

    PredictiveResult {
        top_finding: top.label.clone(),
        risk_summary: top.scenario.risk_summary().to_string(),
        recommendations: recommend::recommendations(input, &signals)
            .into_iter()
            .map(|r| r.text().to_string())
            .collect(),
        scenarios,
    }
}
