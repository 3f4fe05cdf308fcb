//! The hospital dataset: four independent record collections.

use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::embedded;
use crate::error::Result;
use crate::loader;
use crate::records::{
    EquipmentRecord, EquipmentStatus, IncidentRecord, IncidentStatus, PatientRecord, StaffRecord,
};

static DATASET: LazyLock<HospitalDataset> = LazyLock::new(|| {
    HospitalDataset::load()
        .unwrap_or_else(|err| panic!("embedded hospital dataset is malformed: {err}"))
});

/// Returns the embedded hospital dataset.
///
/// # Panics
///
/// Panics on first access if the record data compiled into the crate fails
/// to load. The embedded data is covered by this crate's tests.
pub fn dataset() -> &'static HospitalDataset {
    &DATASET
}

/// Sample hospital records.
///
/// The collections do not reference each other: a patient's consultant is a
/// display name, not a staff identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HospitalDataset {
    pub patients: Vec<PatientRecord>,
    pub staff: Vec<StaffRecord>,
    pub equipment: Vec<EquipmentRecord>,
    pub incidents: Vec<IncidentRecord>,
}

impl HospitalDataset {
    /// Load all four collections from embedded data.
    ///
    /// # Errors
    ///
    /// Returns an error if any embedded CSV file is malformed.
    pub fn load() -> Result<Self> {
        let dataset = Self {
            patients: loader::load_patients_from_str(embedded::PATIENTS)?,
            staff: loader::load_staff_from_str(embedded::STAFF)?,
            equipment: loader::load_equipment_from_str(embedded::EQUIPMENT)?,
            incidents: loader::load_incidents_from_str(embedded::INCIDENTS)?,
        };

        debug!(
            patients = dataset.patients.len(),
            staff = dataset.staff.len(),
            equipment = dataset.equipment.len(),
            incidents = dataset.incidents.len(),
            "loaded hospital dataset"
        );
        Ok(dataset)
    }

    /// Find a patient by UHID (case-insensitive).
    pub fn find_patient(&self, uhid: &str) -> Option<&PatientRecord> {
        self.patients
            .iter()
            .find(|p| p.uhid.eq_ignore_ascii_case(uhid))
    }

    /// Find a staff member by employee ID (case-insensitive).
    pub fn find_staff(&self, employee_id: &str) -> Option<&StaffRecord> {
        self.staff
            .iter()
            .find(|s| s.employee_id.eq_ignore_ascii_case(employee_id))
    }

    /// Find an equipment item by ID (case-insensitive).
    pub fn find_equipment(&self, equipment_id: &str) -> Option<&EquipmentRecord> {
        self.equipment
            .iter()
            .find(|e| e.equipment_id.eq_ignore_ascii_case(equipment_id))
    }

    /// Find an incident by ID (case-insensitive).
    pub fn find_incident(&self, incident_id: &str) -> Option<&IncidentRecord> {
        self.incidents
            .iter()
            .find(|i| i.incident_id.eq_ignore_ascii_case(incident_id))
    }

    /// Patients without a discharge date.
    pub fn current_inpatients(&self) -> Vec<&PatientRecord> {
        self.patients
            .iter()
            .filter(|p| p.discharge_date.is_none())
            .collect()
    }

    pub fn equipment_by_status(&self, status: EquipmentStatus) -> Vec<&EquipmentRecord> {
        self.equipment
            .iter()
            .filter(|e| e.status == status)
            .collect()
    }

    /// Equipment still in the inventory whose calibration fell due before `as_of`.
    ///
    /// Condemned equipment is excluded.
    pub fn equipment_calibration_overdue(&self, as_of: NaiveDate) -> Vec<&EquipmentRecord> {
        self.equipment
            .iter()
            .filter(|e| e.status != EquipmentStatus::Condemned && e.is_calibration_overdue(as_of))
            .collect()
    }

    pub fn incidents_by_status(&self, status: IncidentStatus) -> Vec<&IncidentRecord> {
        self.incidents
            .iter()
            .filter(|i| i.status == status)
            .collect()
    }

    /// Incidents that are not yet closed.
    pub fn open_incidents(&self) -> Vec<&IncidentRecord> {
        self.incidents
            .iter()
            .filter(|i| i.status != IncidentStatus::Closed)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_loads() {
        let dataset = dataset();
        assert_eq!(dataset.patients.len(), 20);
        assert_eq!(dataset.staff.len(), 15);
        assert_eq!(dataset.equipment.len(), 15);
        assert_eq!(dataset.incidents.len(), 12);
    }

    #[test]
    fn test_lookups() {
        let dataset = dataset();
        assert_eq!(
            dataset.find_patient("uhid-2024-00105").map(|p| p.age),
            Some(8)
        );
        assert!(dataset.find_staff("EMP-3003").is_some());
        assert!(dataset.find_equipment("EQ-BME-009").is_some());
        assert!(dataset.find_incident("INC-2024-012").is_some());
        assert!(dataset.find_patient("UHID-0000").is_none());
    }

    #[test]
    fn test_current_inpatients() {
        let uhids: Vec<_> = dataset()
            .current_inpatients()
            .iter()
            .map(|p| p.uhid.as_str())
            .collect();
        assert_eq!(uhids, vec!["UHID-2024-00119", "UHID-2024-00120"]);
    }

    #[test]
    fn test_open_incidents() {
        let open = dataset().open_incidents();
        assert_eq!(open.len(), 4);
        assert!(open.iter().all(|i| i.status != IncidentStatus::Closed));
        assert_eq!(dataset().incidents_by_status(IncidentStatus::Open).len(), 2);
    }

    #[test]
    fn test_calibration_overdue() {
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let ids: Vec<_> = dataset()
            .equipment_calibration_overdue(as_of)
            .iter()
            .map(|e| e.equipment_id.as_str())
            .collect();
        assert_eq!(ids, vec!["EQ-BME-011"]);
        assert_eq!(
            dataset()
                .equipment_by_status(EquipmentStatus::CalibrationDue)
                .len(),
            2
        );
    }
}
