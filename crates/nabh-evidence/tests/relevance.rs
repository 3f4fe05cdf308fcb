//! Integration tests for evidence relevance over the embedded dataset.

mod common;

use std::collections::{BTreeMap, BTreeSet};

use nabh_evidence::{
    EvidenceCategory, RelevantData, SamplingConfig, get_relevant_data, get_relevant_data_with,
};
use nabh_hospital::dataset;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn shape(data: &RelevantData) -> BTreeMap<&'static str, usize> {
    let mut shape = BTreeMap::new();
    if let Some(records) = &data.patients {
        shape.insert("patients", records.len());
    }
    if let Some(records) = &data.staff {
        shape.insert("staff", records.len());
    }
    if let Some(records) = &data.equipment {
        shape.insert("equipment", records.len());
    }
    if let Some(records) = &data.incidents {
        shape.insert("incidents", records.len());
    }
    shape
}

#[test]
fn discharge_summary_samples_patients_only() {
    common::init_tracing();
    let data = get_relevant_data("patient discharge summary");

    assert_eq!(
        data.categories(),
        BTreeSet::from([EvidenceCategory::Patients])
    );
    let patients = data.patients.expect("patients present");
    assert_eq!(patients.len(), 5);
    for patient in &patients {
        assert!(dataset().find_patient(&patient.uhid).is_some());
    }
}

#[test]
fn calibration_record_samples_patients_and_equipment() {
    common::init_tracing();
    let mut rng = StdRng::seed_from_u64(42);
    let data = get_relevant_data_with(
        "equipment calibration record",
        dataset(),
        &SamplingConfig::default(),
        &mut rng,
    );

    insta::assert_json_snapshot!(shape(&data), @r#"
    {
      "equipment": 5,
      "patients": 5
    }
    "#);
}

#[test]
fn incident_sample_uses_smaller_default() {
    let data = get_relevant_data("Adverse event reporting");
    assert_eq!(data.incidents.map(|i| i.len()), Some(3));
    assert!(data.patients.is_none());
}

#[test]
fn empty_label_is_empty() {
    let data = get_relevant_data("");
    assert!(data.is_empty());

    let json = serde_json::to_value(&data).expect("serialize");
    assert_eq!(json, serde_json::json!({}));
}

#[test]
fn unmatched_categories_are_absent_not_empty() {
    let mut rng = StdRng::seed_from_u64(1);
    let data = get_relevant_data_with(
        "Staff credentialing file",
        dataset(),
        &SamplingConfig::uniform(0),
        &mut rng,
    );

    let json = serde_json::to_value(&data).expect("serialize");
    let object = json.as_object().expect("object");
    assert_eq!(object.len(), 1);
    assert_eq!(object["staff"], serde_json::json!([]));
    assert!(!object.contains_key("patients"));
}

#[test]
fn large_count_returns_whole_collection() {
    let mut rng = StdRng::seed_from_u64(5);
    let data = get_relevant_data_with(
        "Sentinel incident register",
        dataset(),
        &SamplingConfig::uniform(100),
        &mut rng,
    );
    let incidents = data.incidents.expect("incidents present");
    assert_eq!(incidents.len(), dataset().incidents.len());
}

#[test]
fn same_seed_same_sample() {
    let sample = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        get_relevant_data_with(
            "Biomedical device maintenance log",
            dataset(),
            &SamplingConfig::default(),
            &mut rng,
        )
    };
    assert_eq!(sample(11), sample(11));
}

#[test]
fn result_round_trips_through_json() {
    let mut rng = StdRng::seed_from_u64(8);
    let data = get_relevant_data_with(
        "patient incident log",
        dataset(),
        &SamplingConfig::default(),
        &mut rng,
    );
    let json = serde_json::to_string(&data).expect("serialize");
    let back: RelevantData = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, data);
}
