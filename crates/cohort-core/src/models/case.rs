use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::clinical::{
    AutismSubtype, BehaviorConcern, DevelopmentalDelay, LanguageLevel, PrenatalFactor, Sex,
};
use super::inference::InferenceResult;
use crate::error::CoreError;

/// A submitted intake case as held by the case-record store.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CaseRecord {
    pub id: String,
    pub submitted_at: jiff::Timestamp,
    pub demographics: Demographics,
    pub development: Development,
    pub assessments: Assessments,
    pub behaviors: Behaviors,
    #[serde(default)]
    pub notes: String,
    pub inference: InferenceResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<CaseArtifacts>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Demographics {
    pub case_label: String,
    pub age_months: u32,
    pub sex: Sex,
    pub parental_age: ParentalAge,
    pub subtype: AutismSubtype,
    pub diagnostic_age_months: u32,
    #[serde(default)]
    pub prenatal_factors: Vec<PrenatalFactor>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParentalAge {
    pub mother: u32,
    pub father: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Development {
    #[serde(default)]
    pub delays: Vec<DevelopmentalDelay>,
    pub dysmorphic_features: bool,
    /// Free-text comorbidity labels; only the count feeds the predictive engine.
    #[serde(default)]
    pub comorbidities: Vec<String>,
    pub regression_observed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Assessments {
    pub ados_score: f64,
    pub adir_score: f64,
    pub eeg_anomalies: bool,
    /// Radiologist's free-text MRI summary, `None` when no scan was done.
    #[serde(default)]
    pub mri_findings: Option<String>,
    pub head_circumference: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Behaviors {
    #[serde(default)]
    pub concerns: Vec<BehaviorConcern>,
    pub language_level: LanguageLevel,
    #[serde(default)]
    pub sensory_notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CaseArtifacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_cid: Option<String>,
}

impl CaseRecord {
    /// Parse a record from its stored JSON form, rejecting blank ids.
    pub fn from_json(value: serde_json::Value) -> Result<Self, CoreError> {
        let record: CaseRecord = serde_json::from_value(value)?;
        if record.id.trim().is_empty() {
            return Err(CoreError::InvalidCaseId(record.id));
        }
        Ok(record)
    }
}
