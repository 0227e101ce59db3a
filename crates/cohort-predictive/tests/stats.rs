use cohort_core::models::case::CaseRecord;
use cohort_predictive::stats::{DelayCounts, GenderCounts, LanguageCounts, cohort_stats};

struct Case<'a> {
    id: &'a str,
    sex: &'a str,
    diagnostic_age: u32,
    prenatal: &'a [&'a str],
    delays: &'a [&'a str],
    language: &'a str,
    eeg_anomalies: bool,
    mri: Option<&'a str>,
}

fn record(case: Case<'_>) -> CaseRecord {
    CaseRecord::from_json(serde_json::json!({
        "id": case.id,
        "submittedAt": "2024-03-22T08:15:00Z",
        "demographics": {
            "caseLabel": case.id,
            "ageMonths": 60,
            "sex": case.sex,
            "parentalAge": { "mother": 33, "father": 35 },
            "subtype": "F84.0 Childhood autism",
            "diagnosticAgeMonths": case.diagnostic_age,
            "prenatalFactors": case.prenatal
        },
        "development": {
            "delays": case.delays,
            "dysmorphicFeatures": false,
            "comorbidities": [],
            "regressionObserved": false
        },
        "assessments": {
            "adosScore": 12,
            "adirScore": 20,
            "eegAnomalies": case.eeg_anomalies,
            "mriFindings": case.mri,
            "headCircumference": 50.0
        },
        "behaviors": {
            "concerns": [],
            "languageLevel": case.language,
            "sensoryNotes": ""
        },
        "notes": "",
        "inference": {
            "topPrediction": "Pending inference",
            "categories": [],
            "explanation": "",
            "recommendedActions": []
        }
    }))
    .unwrap()
}

fn three_cases() -> Vec<CaseRecord> {
    vec![
        record(Case {
            id: "A",
            sex: "Male",
            diagnostic_age: 20,
            prenatal: &["Natural", "Complication"],
            delays: &["Global", "Cognitive"],
            language: "Absent",
            eeg_anomalies: true,
            mri: Some("Arachnoid cyst"),
        }),
        record(Case {
            id: "B",
            sex: "Female",
            diagnostic_age: 42,
            prenatal: &["IVF", "Twin"],
            delays: &["Motor"],
            language: "Functional",
            eeg_anomalies: false,
            mri: Some("Normal study"),
        }),
        record(Case {
            id: "C",
            sex: "Male",
            diagnostic_age: 30,
            prenatal: &["Natural"],
            delays: &["Cognitive", "Language"],
            language: "Delayed",
            eeg_anomalies: false,
            mri: None,
        }),
    ]
}

#[test]
fn empty_cohort_has_no_ages_and_zero_rates() {
    let stats = cohort_stats(&[]);

    assert_eq!(stats.total_cases, 0);
    assert_eq!(stats.gender, GenderCounts::default());
    assert_eq!(stats.diagnosis_age.mean, None);
    assert_eq!(stats.diagnosis_age.median, None);
    assert_eq!(stats.eeg_anomaly_rate, 0);
    assert_eq!(stats.mri_anomaly_rate, 0);
}

#[test]
fn counts_categories() {
    let stats = cohort_stats(&three_cases());

    assert_eq!(stats.total_cases, 3);
    assert_eq!(stats.gender, GenderCounts { male: 2, female: 1 });
    assert_eq!(stats.pregnancy.natural, 2);
    assert_eq!(stats.pregnancy.ivf, 1);
    assert_eq!(stats.pregnancy.twin, 1);
    assert_eq!(stats.pregnancy.abnormal_evolution, 1);
    assert_eq!(
        stats.language,
        LanguageCounts {
            functional: 1,
            delayed: 1,
            absent: 1
        }
    );
    assert_eq!(
        stats.delays,
        DelayCounts {
            global: 1,
            motor: 1,
            cognitive: 2
        }
    );
}

#[test]
fn odd_cohort_takes_middle_age() {
    let stats = cohort_stats(&three_cases());

    // 92 / 3 = 30.67
    assert_eq!(stats.diagnosis_age.mean, Some(30.7));
    assert_eq!(stats.diagnosis_age.median, Some(30.0));
}

#[test]
fn even_cohort_averages_middle_ages() {
    let mut cases = three_cases();
    cases.push(record(Case {
        id: "D",
        sex: "Female",
        diagnostic_age: 31,
        prenatal: &[],
        delays: &[],
        language: "Functional",
        eeg_anomalies: false,
        mri: Some(""),
    }));

    let stats = cohort_stats(&cases);
    assert_eq!(stats.diagnosis_age.median, Some(30.5));
    assert_eq!(stats.diagnosis_age.mean, Some(30.8));
}

#[test]
fn anomaly_rates_round_to_whole_percent() {
    let mut cases = three_cases();
    assert_eq!(cohort_stats(&cases).eeg_anomaly_rate, 33);
    assert_eq!(cohort_stats(&cases).mri_anomaly_rate, 33);

    cases[2] = record(Case {
        id: "C",
        sex: "Male",
        diagnostic_age: 30,
        prenatal: &[],
        delays: &[],
        language: "Delayed",
        eeg_anomalies: true,
        mri: Some("Cortical dysplasia"),
    });
    let stats = cohort_stats(&cases);
    assert_eq!(stats.eeg_anomaly_rate, 67);
    assert_eq!(stats.mri_anomaly_rate, 67);
}

#[test]
fn serializes_with_insight_keys() {
    let json = serde_json::to_value(cohort_stats(&three_cases())).unwrap();

    assert_eq!(json["totalCases"], 3);
    assert_eq!(json["pregnancy"]["abnormalEvolution"], 1);
    assert_eq!(json["delays"]["Cognitive"], 2);
    assert_eq!(json["diagnosisAge"]["median"], 30.0);
    assert_eq!(json["eegAnomalyRate"], 33);

    let empty = serde_json::to_value(cohort_stats(&[])).unwrap();
    assert!(empty["diagnosisAge"]["mean"].is_null());
}
