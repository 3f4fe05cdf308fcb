//! Fabricated hospital records used as accreditation evidence samples.
//!
//! The dataset holds four independent collections loaded from embedded CSV:
//!
//! - [`PatientRecord`] keyed by `uhid`
//! - [`StaffRecord`] keyed by `employee_id`
//! - [`EquipmentRecord`] keyed by `equipment_id`
//! - [`IncidentRecord`] keyed by `incident_id`
//!
//! The records are illustrative, not a live operational store. They are
//! loaded once on first access to [`dataset()`] and never mutated.

pub mod dataset;
pub mod embedded;
pub mod error;
pub mod loader;
pub mod records;

pub use dataset::{HospitalDataset, dataset};
pub use error::{HospitalError, Result};
pub use records::{
    EquipmentRecord, EquipmentStatus, Gender, IncidentRecord, IncidentSeverity, IncidentStatus,
    PatientRecord, StaffRecord,
};
