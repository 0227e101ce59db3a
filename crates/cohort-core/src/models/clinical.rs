//! Categorical clinical vocabulary shared by intake forms, stored records
//! and the predictive engine.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PrenatalFactor {
    Natural,
    #[serde(rename = "IVF")]
    Ivf,
    Twin,
    Complication,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DevelopmentalDelay {
    None,
    Motor,
    Language,
    Cognitive,
    Global,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BehaviorConcern {
    Aggressivity,
    #[serde(rename = "Self-injury")]
    SelfInjury,
    Agitation,
    Stereotypy,
    Hyperactivity,
    Sleep,
    Sensory,
}

/// Expressive language level observed at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LanguageLevel {
    Functional,
    Delayed,
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

/// ICD-10 pervasive developmental disorder subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AutismSubtype {
    #[serde(rename = "F84.0 Childhood autism")]
    ChildhoodAutism,
    #[serde(rename = "F84.1 Atypical autism")]
    AtypicalAutism,
    #[serde(rename = "F84.5 Asperger syndrome")]
    AspergerSyndrome,
}
