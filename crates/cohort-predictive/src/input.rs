use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use cohort_core::models::case::CaseRecord;
use cohort_core::models::clinical::{DevelopmentalDelay, LanguageLevel, PrenatalFactor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EegStatus {
    Normal,
    Focal,
    Bilateral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MriStatus {
    Normal,
    Anomaly,
    Unknown,
}

/// Structured clinical profile fed to the engine.
///
/// Callers own validation; the engine only clamps the two count-derived loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PredictiveInput {
    /// Originating case, when the profile was pre-filled from a stored record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    pub age_months: u32,
    pub language_level: LanguageLevel,
    pub eeg_status: EegStatus,
    pub mri_status: MriStatus,
    #[serde(default)]
    pub prenatal_factors: BTreeSet<PrenatalFactor>,
    #[serde(default)]
    pub developmental_delays: BTreeSet<DevelopmentalDelay>,
    pub dysmorphic_features: bool,
    pub behavioral_concerns: u32,
    pub comorbidities: u32,
}

impl Default for PredictiveInput {
    /// Manual-configuration starting point of the predictive lab.
    fn default() -> Self {
        Self {
            case_id: None,
            age_months: 48,
            language_level: LanguageLevel::Delayed,
            eeg_status: EegStatus::Normal,
            mri_status: MriStatus::Unknown,
            prenatal_factors: BTreeSet::from([PrenatalFactor::Natural]),
            developmental_delays: BTreeSet::from([DevelopmentalDelay::Cognitive]),
            dysmorphic_features: false,
            behavioral_concerns: 1,
            comorbidities: 0,
        }
    }
}

impl From<&CaseRecord> for PredictiveInput {
    fn from(record: &CaseRecord) -> Self {
        let eeg_status = if record.assessments.eeg_anomalies {
            EegStatus::Focal
        } else {
            EegStatus::Normal
        };

        Self {
            case_id: Some(record.id.clone()),
            age_months: record.demographics.age_months,
            language_level: record.behaviors.language_level,
            eeg_status,
            mri_status: mri_status_from_findings(record.assessments.mri_findings.as_deref()),
            prenatal_factors: record.demographics.prenatal_factors.iter().copied().collect(),
            developmental_delays: record.development.delays.iter().copied().collect(),
            dysmorphic_features: record.development.dysmorphic_features,
            behavioral_concerns: count(record.behaviors.concerns.len()),
            comorbidities: count(record.development.comorbidities.len()),
        }
    }
}

/// Classify a free-text MRI summary. Missing or blank text means no scan.
pub fn mri_status_from_findings(findings: Option<&str>) -> MriStatus {
    match findings {
        None | Some("") => MriStatus::Unknown,
        Some(text) if text.to_lowercase().contains("normal") => MriStatus::Normal,
        Some(_) => MriStatus::Anomaly,
    }
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
