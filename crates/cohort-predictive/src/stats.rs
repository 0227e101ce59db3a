//! Aggregate statistics over a cohort of stored cases, for research insights.

use serde::Serialize;
use ts_rs::TS;

use cohort_core::models::case::CaseRecord;
use cohort_core::models::clinical::{DevelopmentalDelay, LanguageLevel, PrenatalFactor, Sex};

use crate::input::{MriStatus, mri_status_from_findings};

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CohortStats {
    pub total_cases: usize,
    pub gender: GenderCounts,
    pub pregnancy: PregnancyCounts,
    pub language: LanguageCounts,
    pub delays: DelayCounts,
    pub diagnosis_age: DiagnosisAge,
    /// Whole-number percentage of cases with EEG anomalies.
    pub eeg_anomaly_rate: u32,
    /// Whole-number percentage of cases with an anomalous MRI report.
    pub mri_anomaly_rate: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct GenderCounts {
    pub male: usize,
    pub female: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PregnancyCounts {
    pub natural: usize,
    pub ivf: usize,
    pub twin: usize,
    pub abnormal_evolution: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct LanguageCounts {
    pub functional: usize,
    pub delayed: usize,
    pub absent: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export)]
pub struct DelayCounts {
    pub global: usize,
    pub motor: usize,
    pub cognitive: usize,
}

/// Age at diagnosis in months, to one decimal. `None` without data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct DiagnosisAge {
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

pub fn cohort_stats(records: &[CaseRecord]) -> CohortStats {
    let mut gender = GenderCounts::default();
    let mut pregnancy = PregnancyCounts::default();
    let mut language = LanguageCounts::default();
    let mut delays = DelayCounts::default();
    let mut eeg_anomalies = 0;
    let mut mri_anomalies = 0;
    let mut diagnosis_ages = Vec::with_capacity(records.len());

    for record in records {
        match record.demographics.sex {
            Sex::Male => gender.male += 1,
            Sex::Female => gender.female += 1,
        }

        let factors = &record.demographics.prenatal_factors;
        let tally = |factor: PrenatalFactor| usize::from(factors.contains(&factor));
        pregnancy.natural += tally(PrenatalFactor::Natural);
        pregnancy.ivf += tally(PrenatalFactor::Ivf);
        pregnancy.twin += tally(PrenatalFactor::Twin);
        pregnancy.abnormal_evolution += tally(PrenatalFactor::Complication);

        match record.behaviors.language_level {
            LanguageLevel::Functional => language.functional += 1,
            LanguageLevel::Delayed => language.delayed += 1,
            LanguageLevel::Absent => language.absent += 1,
        }

        let recorded = &record.development.delays;
        let tally = |delay: DevelopmentalDelay| usize::from(recorded.contains(&delay));
        delays.global += tally(DevelopmentalDelay::Global);
        delays.motor += tally(DevelopmentalDelay::Motor);
        delays.cognitive += tally(DevelopmentalDelay::Cognitive);

        if record.assessments.eeg_anomalies {
            eeg_anomalies += 1;
        }
        if mri_status_from_findings(record.assessments.mri_findings.as_deref())
            == MriStatus::Anomaly
        {
            mri_anomalies += 1;
        }

        diagnosis_ages.push(f64::from(record.demographics.diagnostic_age_months));
    }

    CohortStats {
        total_cases: records.len(),
        gender,
        pregnancy,
        language,
        delays,
        diagnosis_age: DiagnosisAge {
            mean: mean(&diagnosis_ages),
            median: median(&mut diagnosis_ages),
        },
        eeg_anomaly_rate: percentage(eeg_anomalies, records.len()),
        mri_anomaly_rate: percentage(mri_anomalies, records.len()),
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let total: f64 = values.iter().sum();
    Some(round_tenths(total / values.len() as f64))
}

/// Middle value; even-length inputs average the two middle values.
fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    let middle = if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    };
    Some(round_tenths(middle))
}

/// Rounded percentage; zero for an empty cohort.
fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
