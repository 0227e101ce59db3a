use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::input::PredictiveInput;
use crate::signals::SeveritySignals;

pub const COMORBIDITY_REVIEW_THRESHOLD: f64 = 0.7;
pub const CO_REGULATION_THRESHOLD: f64 = 0.6;

/// A recommended next step. Text is fixed per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Recommendation {
    AugmentativeCommunication,
    PragmaticLanguage,
    LanguageEnrichment,
    NeurologyFollowUp,
    GeneticsReview,
    CoRegulation,
    StandardPlan,
}

impl Recommendation {
    pub fn text(self) -> &'static str {
        match self {
            Recommendation::AugmentativeCommunication => {
                "Introduce AAC strategies and intensive speech-language therapy blocks."
            }
            Recommendation::PragmaticLanguage => {
                "Expand pragmatic language interventions and parent-led modelling."
            }
            Recommendation::LanguageEnrichment => {
                "Maintain language enrichment and social communication coaching."
            }
            Recommendation::NeurologyFollowUp => {
                "Schedule neurology follow-up to assess epileptiform activity trajectory."
            }
            Recommendation::GeneticsReview => {
                "Coordinate genetics and multi-specialty review to rule out syndromic etiologies."
            }
            Recommendation::CoRegulation => {
                "Implement co-regulation programmes and track behavioural triggers across settings."
            }
            Recommendation::StandardPlan => {
                "Continue standard developmental therapy plan and monitor quarterly."
            }
        }
    }
}

/// Evaluate the recommendation guards in order over the input profile.
pub fn recommendations(input: &PredictiveInput, s: &SeveritySignals) -> Vec<Recommendation> {
    let mut out = Vec::with_capacity(4);

    out.push(if s.language_severity >= 1.0 {
        Recommendation::AugmentativeCommunication
    } else if s.language_severity > 0.0 {
        Recommendation::PragmaticLanguage
    } else {
        Recommendation::LanguageEnrichment
    });

    if s.eeg_severity > 0.0 {
        out.push(Recommendation::NeurologyFollowUp);
    }
    if input.dysmorphic_features || s.comorbidity_load > COMORBIDITY_REVIEW_THRESHOLD {
        out.push(Recommendation::GeneticsReview);
    }
    if s.behavioral_load > CO_REGULATION_THRESHOLD {
        out.push(Recommendation::CoRegulation);
    }

    with_fallback(out)
}

/// Guarantee a non-empty list. The language guard always fires, so the
/// fallback is unreachable from [`recommendations`] as the guards stand.
pub fn with_fallback(mut list: Vec<Recommendation>) -> Vec<Recommendation> {
    if list.is_empty() {
        list.push(Recommendation::StandardPlan);
    }
    list
}
