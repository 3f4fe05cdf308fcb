//! Embedded hospital records.
//!
//! The records are fabricated sample data, embedded at compile time using
//! `include_str!()`. The four collections are independent: no file refers to
//! identifiers in another.

/// Patient admissions.
pub const PATIENTS: &str = include_str!("../data/patients.csv");

/// Staff register.
pub const STAFF: &str = include_str!("../data/staff.csv");

/// Biomedical equipment inventory.
pub const EQUIPMENT: &str = include_str!("../data/equipment.csv");

/// Incident register.
pub const INCIDENTS: &str = include_str!("../data/incidents.csv");
