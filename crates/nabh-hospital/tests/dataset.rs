//! Integration tests for the embedded hospital dataset.

use std::collections::HashSet;

use nabh_hospital::{EquipmentStatus, HospitalDataset, IncidentSeverity, dataset};

fn assert_unique<'a>(ids: impl IntoIterator<Item = &'a str>, what: &str) {
    let mut seen = HashSet::new();
    for id in ids {
        assert!(seen.insert(id), "duplicate {what} identifier {id}");
    }
}

#[test]
fn identifiers_are_unique() {
    let dataset = dataset();
    assert_unique(dataset.patients.iter().map(|p| p.uhid.as_str()), "patient");
    assert_unique(dataset.staff.iter().map(|s| s.employee_id.as_str()), "staff");
    assert_unique(
        dataset.equipment.iter().map(|e| e.equipment_id.as_str()),
        "equipment",
    );
    assert_unique(
        dataset.incidents.iter().map(|i| i.incident_id.as_str()),
        "incident",
    );
}

#[test]
fn discharge_never_precedes_admission() {
    for patient in &dataset().patients {
        if let Some(days) = patient.length_of_stay() {
            assert!(days >= 0, "{} discharged before admission", patient.uhid);
        }
    }
}

#[test]
fn calibration_due_follows_last_calibration() {
    for item in &dataset().equipment {
        assert!(
            item.next_calibration_due > item.last_calibration,
            "{} has inverted calibration dates",
            item.equipment_id
        );
    }
}

#[test]
fn every_equipment_status_is_represented() {
    let statuses: HashSet<_> = dataset().equipment.iter().map(|e| e.status).collect();
    for status in [
        EquipmentStatus::Operational,
        EquipmentStatus::UnderMaintenance,
        EquipmentStatus::CalibrationDue,
        EquipmentStatus::Condemned,
    ] {
        assert!(statuses.contains(&status), "no equipment is {status}");
    }
}

#[test]
fn sentinel_events_are_recorded() {
    assert!(
        dataset()
            .incidents
            .iter()
            .any(|i| i.severity == IncidentSeverity::Sentinel)
    );
}

#[test]
fn load_is_repeatable() {
    let loaded = HospitalDataset::load().expect("load dataset");
    assert_eq!(&loaded, dataset());
}

#[test]
fn records_serialize_with_iso_dates() {
    let patient = dataset()
        .find_patient("UHID-2024-00101")
        .expect("first patient");
    let json = serde_json::to_value(patient).expect("serialize patient");
    assert_eq!(json["admission_date"], "2024-01-08");
    assert_eq!(json["discharge_date"], "2024-01-15");
    assert_eq!(json["gender"], "Male");
}
