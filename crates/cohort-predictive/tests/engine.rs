use std::collections::BTreeSet;

use cohort_core::models::clinical::{DevelopmentalDelay, LanguageLevel, PrenatalFactor};
use cohort_core::models::inference::InferenceResult;
use cohort_predictive::compute_predictive_result;
use cohort_predictive::input::{EegStatus, MriStatus, PredictiveInput};
use cohort_predictive::recommend::Recommendation;
use cohort_predictive::result::rank_scenarios;
use cohort_predictive::scenario::{Scenario, raw_scores};

fn baseline() -> PredictiveInput {
    PredictiveInput {
        behavioral_concerns: 0,
        ..PredictiveInput::default()
    }
}

/// A spread of profiles covering every categorical value and the load clamps.
fn profiles() -> Vec<PredictiveInput> {
    let mut out = Vec::new();
    for language_level in [LanguageLevel::Functional, LanguageLevel::Delayed, LanguageLevel::Absent] {
        for eeg_status in [EegStatus::Normal, EegStatus::Focal, EegStatus::Bilateral] {
            for mri_status in [MriStatus::Normal, MriStatus::Anomaly, MriStatus::Unknown] {
                for (dysmorphic_features, counts) in [(false, 0), (true, 2), (false, 9), (true, 40)] {
                    out.push(PredictiveInput {
                        language_level,
                        eeg_status,
                        mri_status,
                        dysmorphic_features,
                        behavioral_concerns: counts,
                        comorbidities: counts,
                        prenatal_factors: BTreeSet::from([
                            PrenatalFactor::Twin,
                            PrenatalFactor::Complication,
                        ]),
                        developmental_delays: BTreeSet::from([
                            DevelopmentalDelay::Global,
                            DevelopmentalDelay::Motor,
                        ]),
                        ..PredictiveInput::default()
                    });
                }
            }
        }
    }
    out
}

#[test]
fn probabilities_form_a_distribution() {
    for input in profiles() {
        let result = compute_predictive_result(&input);
        assert_eq!(result.scenarios.len(), 3);

        let total: f64 = result.scenarios.iter().map(|s| s.probability).sum();
        assert!((total - 1.0).abs() < 1e-9, "sum was {total} for {input:?}");
        for scenario in &result.scenarios {
            assert!((0.0..=1.0).contains(&scenario.probability));
            assert!(scenario.probability > 0.0);
        }
    }
}

#[test]
fn scenarios_are_sorted_and_top_finding_matches() {
    for input in profiles() {
        let result = compute_predictive_result(&input);
        for pair in result.scenarios.windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
        assert_eq!(result.top_finding, result.scenarios[0].label);
        assert_eq!(result.risk_summary, result.scenarios[0].scenario.risk_summary());
    }
}

#[test]
fn every_scenario_appears_exactly_once() {
    let result = compute_predictive_result(&PredictiveInput::default());
    for scenario in Scenario::ALL {
        let hits = result.scenarios.iter().filter(|s| s.scenario == scenario).count();
        assert_eq!(hits, 1, "{scenario:?}");
    }
}

#[test]
fn behavioral_concerns_raise_profound_probability() {
    let probability_of_profound = |concerns: u32| {
        let input = PredictiveInput {
            behavioral_concerns: concerns,
            ..baseline()
        };
        let result = compute_predictive_result(&input);
        let profound = result
            .scenarios
            .iter()
            .find(|s| s.scenario == Scenario::ProfoundSensory)
            .unwrap();
        (raw_scores(&input)[0], profound.probability)
    };

    let mut previous = probability_of_profound(0);
    for concerns in 1..=3 {
        let current = probability_of_profound(concerns);
        assert!(current.0 > previous.0, "raw score did not rise at {concerns}");
        assert!(current.1 > previous.1, "probability did not rise at {concerns}");
        previous = current;
    }
}

#[test]
fn identical_inputs_give_identical_results() {
    for input in profiles() {
        let first = compute_predictive_result(&input);
        let second = compute_predictive_result(&input.clone());
        assert_eq!(first, second);
        for (a, b) in first.scenarios.iter().zip(&second.scenarios) {
            assert_eq!(a.probability.to_bits(), b.probability.to_bits());
        }
    }
}

#[test]
fn absent_language_with_bilateral_eeg_is_profound() {
    let input = PredictiveInput {
        age_months: 48,
        language_level: LanguageLevel::Absent,
        eeg_status: EegStatus::Bilateral,
        mri_status: MriStatus::Unknown,
        prenatal_factors: BTreeSet::from([PrenatalFactor::Natural]),
        developmental_delays: BTreeSet::from([DevelopmentalDelay::Global]),
        dysmorphic_features: false,
        behavioral_concerns: 3,
        comorbidities: 0,
        case_id: None,
    };

    let raw = raw_scores(&input);
    assert!((raw[0] - 11.42).abs() < 1e-9);
    assert!((raw[1] - 0.6).abs() < 1e-9);
    assert!((raw[2] - 1.8).abs() < 1e-9);

    let result = compute_predictive_result(&input);
    assert_eq!(result.top_finding, "Profound ASD with sensory dysregulation");
}

#[test]
fn recommendations_follow_guard_order() {
    let input = PredictiveInput {
        language_level: LanguageLevel::Absent,
        eeg_status: EegStatus::Focal,
        dysmorphic_features: true,
        ..PredictiveInput::default()
    };

    let result = compute_predictive_result(&input);
    assert_eq!(
        result.recommendations,
        vec![
            Recommendation::AugmentativeCommunication.text(),
            Recommendation::NeurologyFollowUp.text(),
            Recommendation::GeneticsReview.text(),
        ]
    );
}

#[test]
fn functional_profile_favours_high_functioning() {
    let input = PredictiveInput {
        language_level: LanguageLevel::Functional,
        mri_status: MriStatus::Normal,
        developmental_delays: BTreeSet::new(),
        behavioral_concerns: 0,
        ..PredictiveInput::default()
    };

    let result = compute_predictive_result(&input);
    assert_eq!(result.scenarios[0].scenario, Scenario::HighFunctioningVerbal);
    assert_eq!(
        result.recommendations,
        vec![Recommendation::LanguageEnrichment.text()]
    );
}

#[test]
fn syndromic_markers_favour_syndromic() {
    let input = PredictiveInput {
        mri_status: MriStatus::Anomaly,
        dysmorphic_features: true,
        comorbidities: 4,
        prenatal_factors: BTreeSet::from([PrenatalFactor::Complication, PrenatalFactor::Twin]),
        developmental_delays: BTreeSet::from([DevelopmentalDelay::Motor]),
        ..PredictiveInput::default()
    };

    let result = compute_predictive_result(&input);
    assert_eq!(result.top_finding, Scenario::SyndromicMultisystem.label());
}

#[test]
fn ivf_does_not_move_any_score() {
    let without = baseline();
    let with = PredictiveInput {
        prenatal_factors: BTreeSet::from([PrenatalFactor::Natural, PrenatalFactor::Ivf]),
        ..baseline()
    };
    assert_eq!(raw_scores(&without), raw_scores(&with));
}

#[test]
fn tied_probabilities_keep_definition_order() {
    let third = 1.0 / 3.0;
    let ranked = rank_scenarios([third, third, third]);
    let order: Vec<Scenario> = ranked.iter().map(|s| s.scenario).collect();
    assert_eq!(order, Scenario::ALL.to_vec());

    let ranked = rank_scenarios([0.2, 0.4, 0.4]);
    let order: Vec<Scenario> = ranked.iter().map(|s| s.scenario).collect();
    assert_eq!(
        order,
        vec![
            Scenario::HighFunctioningVerbal,
            Scenario::SyndromicMultisystem,
            Scenario::ProfoundSensory,
        ]
    );
}

#[test]
fn converts_into_stored_inference_summary() {
    let result = compute_predictive_result(&PredictiveInput::default());
    let expected_top = result.top_finding.clone();
    let expected_actions = result.recommendations.clone();

    let summary = InferenceResult::from(result);
    assert_eq!(summary.top_prediction, expected_top);
    assert_eq!(summary.categories.len(), 3);
    assert_eq!(summary.categories[0].label, expected_top);
    assert!(summary.categories.iter().all(|c| c.narrative.is_some()));
    assert_eq!(summary.recommended_actions, expected_actions);
}

#[test]
fn result_serializes_with_camel_case_keys() {
    let result = compute_predictive_result(&PredictiveInput::default());
    let json = serde_json::to_value(&result).unwrap();

    assert!(json.get("topFinding").is_some());
    assert!(json.get("riskSummary").is_some());
    assert_eq!(json["scenarios"].as_array().unwrap().len(), 3);
    assert!(json["scenarios"][0].get("narrative").is_some());
}
