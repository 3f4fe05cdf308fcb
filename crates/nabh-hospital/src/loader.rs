//! Hospital record loading from embedded CSV data.

use std::collections::HashSet;
use std::io::Cursor;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{HospitalError, Result};
use crate::records::{EquipmentRecord, IncidentRecord, PatientRecord, StaffRecord};

const PATIENTS_FILE: &str = "patients.csv";
const STAFF_FILE: &str = "staff.csv";
const EQUIPMENT_FILE: &str = "equipment.csv";
const INCIDENTS_FILE: &str = "incidents.csv";

/// Date format used throughout the record files.
const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// CSV Row Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct PatientCsvRow {
    #[serde(rename = "UHID")]
    uhid: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Age")]
    age: String,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "Diagnosis")]
    diagnosis: String,
    #[serde(rename = "Admission Date")]
    admission_date: String,
    #[serde(rename = "Discharge Date")]
    discharge_date: String,
    #[serde(rename = "Consultant")]
    consultant: String,
}

#[derive(Debug, Deserialize)]
struct StaffCsvRow {
    #[serde(rename = "Employee ID")]
    employee_id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Designation")]
    designation: String,
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "Qualification")]
    qualification: String,
    #[serde(rename = "Date of Joining")]
    date_of_joining: String,
    #[serde(rename = "Registration Number")]
    registration_number: String,
}

#[derive(Debug, Deserialize)]
struct EquipmentCsvRow {
    #[serde(rename = "Equipment ID")]
    equipment_id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Make and Model")]
    make_model: String,
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "Installation Date")]
    installation_date: String,
    #[serde(rename = "Last Calibration")]
    last_calibration: String,
    #[serde(rename = "Next Calibration Due")]
    next_calibration_due: String,
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Debug, Deserialize)]
struct IncidentCsvRow {
    #[serde(rename = "Incident ID")]
    incident_id: String,
    #[serde(rename = "Reported On")]
    reported_on: String,
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "Incident Type")]
    incident_type: String,
    #[serde(rename = "Severity")]
    severity: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Reported By")]
    reported_by: String,
    #[serde(rename = "Status")]
    status: String,
}

// =============================================================================
// Loading Functions
// =============================================================================

/// Load patient records from CSV string content.
pub fn load_patients_from_str(content: &str) -> Result<Vec<PatientRecord>> {
    let mut records = Vec::new();
    for row in read_rows::<PatientCsvRow>(content, PATIENTS_FILE)? {
        let f = PATIENTS_FILE;
        records.push(PatientRecord {
            age: row
                .age
                .trim()
                .parse()
                .map_err(|_| invalid("Age", &row.age, f))?,
            gender: row
                .gender
                .parse()
                .map_err(|_| invalid("Gender", &row.gender, f))?,
            admission_date: parse_date("Admission Date", &row.admission_date, f)?,
            discharge_date: parse_optional_date("Discharge Date", &row.discharge_date, f)?,
            uhid: row.uhid.trim().to_string(),
            name: row.name.trim().to_string(),
            department: row.department.trim().to_string(),
            diagnosis: row.diagnosis.trim().to_string(),
            consultant: row.consultant.trim().to_string(),
        });
    }
    ensure_unique(&records, |r| r.uhid.as_str(), PATIENTS_FILE)?;
    Ok(records)
}

/// Load staff records from CSV string content.
pub fn load_staff_from_str(content: &str) -> Result<Vec<StaffRecord>> {
    let mut records = Vec::new();
    for row in read_rows::<StaffCsvRow>(content, STAFF_FILE)? {
        records.push(StaffRecord {
            date_of_joining: parse_date("Date of Joining", &row.date_of_joining, STAFF_FILE)?,
            registration_number: non_empty(&row.registration_number),
            employee_id: row.employee_id.trim().to_string(),
            name: row.name.trim().to_string(),
            designation: row.designation.trim().to_string(),
            department: row.department.trim().to_string(),
            qualification: row.qualification.trim().to_string(),
        });
    }
    ensure_unique(&records, |r| r.employee_id.as_str(), STAFF_FILE)?;
    Ok(records)
}

/// Load equipment records from CSV string content.
pub fn load_equipment_from_str(content: &str) -> Result<Vec<EquipmentRecord>> {
    let mut records = Vec::new();
    for row in read_rows::<EquipmentCsvRow>(content, EQUIPMENT_FILE)? {
        let f = EQUIPMENT_FILE;
        records.push(EquipmentRecord {
            installation_date: parse_date("Installation Date", &row.installation_date, f)?,
            last_calibration: parse_date("Last Calibration", &row.last_calibration, f)?,
            next_calibration_due: parse_date(
                "Next Calibration Due",
                &row.next_calibration_due,
                f,
            )?,
            status: row
                .status
                .parse()
                .map_err(|_| invalid("Status", &row.status, f))?,
            equipment_id: row.equipment_id.trim().to_string(),
            name: row.name.trim().to_string(),
            make_model: row.make_model.trim().to_string(),
            department: row.department.trim().to_string(),
        });
    }
    ensure_unique(&records, |r| r.equipment_id.as_str(), EQUIPMENT_FILE)?;
    Ok(records)
}

/// Load incident records from CSV string content.
pub fn load_incidents_from_str(content: &str) -> Result<Vec<IncidentRecord>> {
    let mut records = Vec::new();
    for row in read_rows::<IncidentCsvRow>(content, INCIDENTS_FILE)? {
        let f = INCIDENTS_FILE;
        records.push(IncidentRecord {
            reported_on: parse_date("Reported On", &row.reported_on, f)?,
            severity: row
                .severity
                .parse()
                .map_err(|_| invalid("Severity", &row.severity, f))?,
            status: row
                .status
                .parse()
                .map_err(|_| invalid("Status", &row.status, f))?,
            incident_id: row.incident_id.trim().to_string(),
            department: row.department.trim().to_string(),
            incident_type: row.incident_type.trim().to_string(),
            description: row.description.trim().to_string(),
            reported_by: row.reported_by.trim().to_string(),
        });
    }
    ensure_unique(&records, |r| r.incident_id.as_str(), INCIDENTS_FILE)?;
    Ok(records)
}

// =============================================================================
// Helpers
// =============================================================================

fn read_rows<T>(content: &str, file: &'static str) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    let cursor = Cursor::new(content.as_bytes());
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(cursor);

    reader
        .deserialize::<T>()
        .map(|result| {
            result.map_err(|e| HospitalError::CsvParse {
                file,
                message: e.to_string(),
            })
        })
        .collect()
}

fn ensure_unique<T>(records: &[T], id: impl Fn(&T) -> &str, file: &'static str) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        let key = id(record);
        if key.is_empty() {
            return Err(invalid("identifier", key, file));
        }
        if !seen.insert(key) {
            return Err(HospitalError::DuplicateId {
                id: key.to_string(),
                file,
            });
        }
    }
    Ok(())
}

fn parse_date(field: &'static str, value: &str, file: &'static str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| invalid(field, value, file))
}

fn parse_optional_date(
    field: &'static str,
    value: &str,
    file: &'static str,
) -> Result<Option<NaiveDate>> {
    match non_empty(value) {
        Some(date) => parse_date(field, &date, file).map(Some),
        None => Ok(None),
    }
}

fn invalid(field: &'static str, value: &str, file: &'static str) -> HospitalError {
    HospitalError::InvalidValue {
        field,
        value: value.to_string(),
        file,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{EquipmentStatus, Gender, IncidentSeverity, IncidentStatus};

    #[test]
    fn test_load_patient_without_discharge() {
        let content = "\"UHID\",\"Name\",\"Age\",\"Gender\",\"Department\",\"Diagnosis\",\"Admission Date\",\"Discharge Date\",\"Consultant\"
\"UHID-1\",\"Asha Rao\",\"41\",\"Female\",\"General Medicine\",\"Malaria\",\"2024-05-01\",\"\",\"Dr. Iyer\"
";
        let patients = load_patients_from_str(content).expect("load patients");
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0].gender, Gender::Female);
        assert_eq!(patients[0].discharge_date, None);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let content = "\"Employee ID\",\"Name\",\"Designation\",\"Department\",\"Qualification\",\"Date of Joining\",\"Registration Number\"
\"EMP-1\",\"Ravi\",\"Technician\",\"Radiology\",\"Diploma\",\"01/02/2020\",\"\"
";
        let err = load_staff_from_str(content).expect_err("bad date");
        assert!(matches!(
            err,
            HospitalError::InvalidValue {
                field: "Date of Joining",
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_equipment_rejected() {
        let content = "\"Equipment ID\",\"Name\",\"Make and Model\",\"Department\",\"Installation Date\",\"Last Calibration\",\"Next Calibration Due\",\"Status\"
\"EQ-1\",\"Monitor\",\"GE\",\"ICU\",\"2020-01-01\",\"2024-01-01\",\"2025-01-01\",\"Operational\"
\"EQ-1\",\"Monitor\",\"GE\",\"ICU\",\"2020-01-01\",\"2024-01-01\",\"2025-01-01\",\"Condemned\"
";
        let err = load_equipment_from_str(content).expect_err("duplicate");
        assert!(matches!(err, HospitalError::DuplicateId { .. }));
    }

    #[test]
    fn test_load_incident_enums() {
        let content = "\"Incident ID\",\"Reported On\",\"Department\",\"Incident Type\",\"Severity\",\"Description\",\"Reported By\",\"Status\"
\"INC-1\",\"2024-06-01\",\"Pharmacy\",\"Dispensing Error\",\"Near Miss\",\"Intercepted\",\"Pharmacist\",\"Under Investigation\"
";
        let incidents = load_incidents_from_str(content).expect("load incidents");
        assert_eq!(incidents[0].severity, IncidentSeverity::NearMiss);
        assert_eq!(incidents[0].status, IncidentStatus::UnderInvestigation);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let content = "\"Equipment ID\",\"Name\",\"Make and Model\",\"Department\",\"Installation Date\",\"Last Calibration\",\"Next Calibration Due\",\"Status\"
\"EQ-1\",\"Monitor\",\"GE\",\"ICU\",\"2020-01-01\",\"2024-01-01\",\"2025-01-01\",\"Missing\"
";
        let err = load_equipment_from_str(content).expect_err("bad status");
        assert!(matches!(err, HospitalError::InvalidValue { field: "Status", .. }));
        // Sanity: the valid spelling parses.
        assert!("Operational".parse::<EquipmentStatus>().is_ok());
    }
}
