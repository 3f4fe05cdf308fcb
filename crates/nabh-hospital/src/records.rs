//! Hospital record types.
//!
//! Each record type has a unique identifier field:
//!
//! | Record            | Identifier     |
//! |-------------------|----------------|
//! | [`PatientRecord`]   | `uhid`         |
//! | [`StaffRecord`]     | `employee_id`  |
//! | [`EquipmentRecord`] | `equipment_id` |
//! | [`IncidentRecord`]  | `incident_id`  |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Patient gender as recorded at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MALE" | "M" => Ok(Gender::Male),
            "FEMALE" | "F" => Ok(Gender::Female),
            "OTHER" | "O" => Ok(Gender::Other),
            _ => Err(format!("Unknown gender: {s}")),
        }
    }
}

/// Operational status of a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EquipmentStatus {
    /// In service.
    Operational,
    /// Out of service for repair or preventive maintenance.
    UnderMaintenance,
    /// In service but past its calibration due date.
    CalibrationDue,
    /// Permanently withdrawn from service.
    Condemned,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Operational => "Operational",
            EquipmentStatus::UnderMaintenance => "Under Maintenance",
            EquipmentStatus::CalibrationDue => "Calibration Due",
            EquipmentStatus::Condemned => "Condemned",
        }
    }

    /// Returns true if the equipment may be used on patients.
    pub fn is_in_service(&self) -> bool {
        matches!(
            self,
            EquipmentStatus::Operational | EquipmentStatus::CalibrationDue
        )
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EquipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "OPERATIONAL" => Ok(EquipmentStatus::Operational),
            "UNDER MAINTENANCE" => Ok(EquipmentStatus::UnderMaintenance),
            "CALIBRATION DUE" => Ok(EquipmentStatus::CalibrationDue),
            "CONDEMNED" => Ok(EquipmentStatus::Condemned),
            _ => Err(format!("Unknown equipment status: {s}")),
        }
    }
}

/// Investigation status of an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IncidentStatus {
    Open,
    UnderInvestigation,
    Closed,
}

impl IncidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "Open",
            IncidentStatus::UnderInvestigation => "Under Investigation",
            IncidentStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IncidentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "OPEN" => Ok(IncidentStatus::Open),
            "UNDER INVESTIGATION" => Ok(IncidentStatus::UnderInvestigation),
            "CLOSED" => Ok(IncidentStatus::Closed),
            _ => Err(format!("Unknown incident status: {s}")),
        }
    }
}

/// Harm classification of an incident, from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IncidentSeverity {
    /// Intercepted before reaching the patient.
    NearMiss,
    Minor,
    Moderate,
    Major,
    /// Unexpected occurrence involving death or serious harm, or the risk of it.
    Sentinel,
}

impl IncidentSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentSeverity::NearMiss => "Near Miss",
            IncidentSeverity::Minor => "Minor",
            IncidentSeverity::Moderate => "Moderate",
            IncidentSeverity::Major => "Major",
            IncidentSeverity::Sentinel => "Sentinel",
        }
    }
}

impl fmt::Display for IncidentSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IncidentSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "NEAR MISS" => Ok(IncidentSeverity::NearMiss),
            "MINOR" => Ok(IncidentSeverity::Minor),
            "MODERATE" => Ok(IncidentSeverity::Moderate),
            "MAJOR" => Ok(IncidentSeverity::Major),
            "SENTINEL" => Ok(IncidentSeverity::Sentinel),
            _ => Err(format!("Unknown incident severity: {s}")),
        }
    }
}

/// An inpatient admission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Unique hospital identification number.
    pub uhid: String,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub department: String,
    pub diagnosis: String,
    pub admission_date: NaiveDate,
    /// `None` while the patient is still admitted.
    pub discharge_date: Option<NaiveDate>,
    /// Consultant in charge of the patient's care.
    pub consultant: String,
}

impl PatientRecord {
    /// Length of stay in days, if discharged.
    pub fn length_of_stay(&self) -> Option<i64> {
        self.discharge_date
            .map(|discharged| (discharged - self.admission_date).num_days())
    }
}

/// A member of staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub employee_id: String,
    pub name: String,
    pub designation: String,
    pub department: String,
    pub qualification: String,
    pub date_of_joining: NaiveDate,
    /// Professional council registration, for registered professions only.
    pub registration_number: Option<String>,
}

/// An item from the equipment inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub equipment_id: String,
    pub name: String,
    pub make_model: String,
    pub department: String,
    pub installation_date: NaiveDate,
    pub last_calibration: NaiveDate,
    pub next_calibration_due: NaiveDate,
    pub status: EquipmentStatus,
}

impl EquipmentRecord {
    /// True if calibration was due before `as_of`.
    pub fn is_calibration_overdue(&self, as_of: NaiveDate) -> bool {
        self.next_calibration_due < as_of
    }
}

/// An entry in the incident register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub incident_id: String,
    pub reported_on: NaiveDate,
    pub department: String,
    pub incident_type: String,
    pub severity: IncidentSeverity,
    pub description: String,
    pub reported_by: String,
    pub status: IncidentStatus,
}
