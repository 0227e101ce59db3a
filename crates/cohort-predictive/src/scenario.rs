use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::input::{EegStatus, MriStatus, PredictiveInput};
use crate::signals::SeveritySignals;

// Profound ASD with sensory dysregulation.
pub const PROFOUND_BASE: f64 = 2.5;
pub const PROFOUND_LANGUAGE: f64 = 3.2;
pub const PROFOUND_EEG: f64 = 2.1;
pub const PROFOUND_BEHAVIORAL: f64 = 1.8;
pub const PROFOUND_GLOBAL_DELAY: f64 = 1.4;
pub const PROFOUND_DYSMORPHIC: f64 = 0.6;

// High-functioning ASD with emerging verbal skills.
pub const HIGH_FUNCTIONING_BASE: f64 = 2.0;
pub const HIGH_FUNCTIONING_LANGUAGE: f64 = 2.5;
pub const HIGH_FUNCTIONING_NORMAL_EEG: f64 = 1.0;
pub const HIGH_FUNCTIONING_NORMAL_MRI: f64 = 0.6;
pub const HIGH_FUNCTIONING_NO_DELAY: f64 = 0.9;
pub const HIGH_FUNCTIONING_BEHAVIORAL_PENALTY: f64 = 1.4;
pub const HIGH_FUNCTIONING_COMORBIDITY_PENALTY: f64 = 1.0;

// Syndromic ASD with multi-system comorbidities.
pub const SYNDROMIC_BASE: f64 = 1.8;
pub const SYNDROMIC_DYSMORPHIC: f64 = 2.5;
pub const SYNDROMIC_MRI: f64 = 2.2;
pub const SYNDROMIC_COMORBIDITY: f64 = 2.0;
pub const SYNDROMIC_MOTOR_DELAY: f64 = 0.8;

/// The fixed set of clinical scenarios the engine scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Scenario {
    ProfoundSensory,
    HighFunctioningVerbal,
    SyndromicMultisystem,
}

impl Scenario {
    /// Definition order. Ties in probability keep this order.
    pub const ALL: [Scenario; 3] = [
        Scenario::ProfoundSensory,
        Scenario::HighFunctioningVerbal,
        Scenario::SyndromicMultisystem,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Scenario::ProfoundSensory => "Profound ASD with sensory dysregulation",
            Scenario::HighFunctioningVerbal => "High-functioning ASD with emerging verbal skills",
            Scenario::SyndromicMultisystem => "Syndromic ASD with multi-system comorbidities",
        }
    }

    pub fn narrative(self) -> &'static str {
        match self {
            Scenario::ProfoundSensory => {
                "Language severity combined with EEG findings mirrors the high-intensity sensory \
                 subgroup described in the Romanian cohort."
            }
            Scenario::HighFunctioningVerbal => {
                "Preserved language trajectory and lower neurophysiological burden align with the \
                 later-diagnosed functional cluster."
            }
            Scenario::SyndromicMultisystem => {
                "Structural findings and comorbid load map to the syndromic cases (≈19%) \
                 highlighted in the clinical study."
            }
        }
    }

    /// One-sentence summary used when this scenario ranks first.
    pub fn risk_summary(self) -> &'static str {
        match self {
            Scenario::ProfoundSensory => {
                "Indicators point toward a high-support sensory profile. Prioritise stabilising \
                 sensory input and monitoring EEG fluctuations."
            }
            Scenario::HighFunctioningVerbal => {
                "Presentation aligns with a milder phenotype; focus on language scaffolding and \
                 executive function supports."
            }
            Scenario::SyndromicMultisystem => {
                "Multi-system markers suggest investigating underlying syndromic etiologies \
                 alongside targeted behavioural care."
            }
        }
    }

    /// Unnormalized weighted score for this scenario.
    pub fn raw_score(self, input: &PredictiveInput, s: &SeveritySignals) -> f64 {
        let when = |on: bool, weight: f64| if on { weight } else { 0.0 };

        match self {
            Scenario::ProfoundSensory => {
                PROFOUND_BASE
                    + s.language_severity * PROFOUND_LANGUAGE
                    + s.eeg_severity * PROFOUND_EEG
                    + s.behavioral_load * PROFOUND_BEHAVIORAL
                    + when(s.global_delay, PROFOUND_GLOBAL_DELAY)
                    + when(input.dysmorphic_features, PROFOUND_DYSMORPHIC)
            }
            Scenario::HighFunctioningVerbal => {
                HIGH_FUNCTIONING_BASE
                    + (1.0 - s.language_severity) * HIGH_FUNCTIONING_LANGUAGE
                    + when(input.eeg_status == EegStatus::Normal, HIGH_FUNCTIONING_NORMAL_EEG)
                    + when(input.mri_status == MriStatus::Normal, HIGH_FUNCTIONING_NORMAL_MRI)
                    + when(
                        !s.global_delay && !s.cognitive_delay,
                        HIGH_FUNCTIONING_NO_DELAY,
                    )
                    - s.behavioral_load * HIGH_FUNCTIONING_BEHAVIORAL_PENALTY
                    - s.comorbidity_load * HIGH_FUNCTIONING_COMORBIDITY_PENALTY
            }
            Scenario::SyndromicMultisystem => {
                SYNDROMIC_BASE
                    + when(input.dysmorphic_features, SYNDROMIC_DYSMORPHIC)
                    + s.mri_severity * SYNDROMIC_MRI
                    + s.comorbidity_load * SYNDROMIC_COMORBIDITY
                    + s.prenatal_weight
                    + s.twin_weight
                    + when(s.motor_delay, SYNDROMIC_MOTOR_DELAY)
            }
        }
    }
}

/// Raw scores for every scenario, in definition order.
pub fn raw_scores(input: &PredictiveInput) -> [f64; 3] {
    let signals = SeveritySignals::derive(input);
    Scenario::ALL.map(|scenario| scenario.raw_score(input, &signals))
}
