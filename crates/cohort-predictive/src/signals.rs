//! Severity signals derived from a [`PredictiveInput`] before scoring.

use cohort_core::models::clinical::{DevelopmentalDelay, LanguageLevel, PrenatalFactor};

use crate::input::{EegStatus, MriStatus, PredictiveInput};

pub const COMPLICATION_WEIGHT: f64 = 1.2;
pub const TWIN_WEIGHT: f64 = 0.8;
pub const IVF_WEIGHT: f64 = 0.4;

pub const LANGUAGE_ABSENT_SEVERITY: f64 = 1.0;
pub const LANGUAGE_DELAYED_SEVERITY: f64 = 0.5;

pub const EEG_BILATERAL_SEVERITY: f64 = 1.2;
pub const EEG_FOCAL_SEVERITY: f64 = 0.8;

pub const MRI_ANOMALY_SEVERITY: f64 = 1.1;

/// Counts are divided by this before clamping into a load.
pub const LOAD_DIVISOR: f64 = 3.0;
pub const LOAD_CEILING: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeveritySignals {
    pub prenatal_weight: f64,
    pub twin_weight: f64,
    /// Derived but not consumed by any scenario formula.
    pub ivf_weight: f64,
    pub global_delay: bool,
    pub cognitive_delay: bool,
    pub motor_delay: bool,
    pub language_severity: f64,
    pub eeg_severity: f64,
    pub mri_severity: f64,
    pub behavioral_load: f64,
    pub comorbidity_load: f64,
}

impl SeveritySignals {
    pub fn derive(input: &PredictiveInput) -> Self {
        let has_factor = |factor: PrenatalFactor| input.prenatal_factors.contains(&factor);
        let has_delay = |delay: DevelopmentalDelay| input.developmental_delays.contains(&delay);
        let gate = |on: bool, weight: f64| if on { weight } else { 0.0 };

        Self {
            prenatal_weight: gate(has_factor(PrenatalFactor::Complication), COMPLICATION_WEIGHT),
            twin_weight: gate(has_factor(PrenatalFactor::Twin), TWIN_WEIGHT),
            ivf_weight: gate(has_factor(PrenatalFactor::Ivf), IVF_WEIGHT),
            global_delay: has_delay(DevelopmentalDelay::Global),
            cognitive_delay: has_delay(DevelopmentalDelay::Cognitive),
            motor_delay: has_delay(DevelopmentalDelay::Motor),
            language_severity: language_severity(input.language_level),
            eeg_severity: eeg_severity(input.eeg_status),
            mri_severity: mri_severity(input.mri_status),
            behavioral_load: load(input.behavioral_concerns),
            comorbidity_load: load(input.comorbidities),
        }
    }
}

pub fn language_severity(level: LanguageLevel) -> f64 {
    match level {
        LanguageLevel::Absent => LANGUAGE_ABSENT_SEVERITY,
        LanguageLevel::Delayed => LANGUAGE_DELAYED_SEVERITY,
        LanguageLevel::Functional => 0.0,
    }
}

pub fn eeg_severity(status: EegStatus) -> f64 {
    match status {
        EegStatus::Bilateral => EEG_BILATERAL_SEVERITY,
        EegStatus::Focal => EEG_FOCAL_SEVERITY,
        EegStatus::Normal => 0.0,
    }
}

pub fn mri_severity(status: MriStatus) -> f64 {
    match status {
        MriStatus::Anomaly => MRI_ANOMALY_SEVERITY,
        MriStatus::Normal | MriStatus::Unknown => 0.0,
    }
}

/// Scale a concern count into a load in `[0, LOAD_CEILING]`.
pub fn load(count: u32) -> f64 {
    (f64::from(count) / LOAD_DIVISOR).clamp(0.0, LOAD_CEILING)
}
