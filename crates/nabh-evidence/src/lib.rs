//! Evidence relevance over the hospital dataset.
//!
//! Given a free-text evidence label such as "patient discharge summary",
//! this crate decides which record collections are relevant and returns a
//! small random sample of each.
//!
//! - [`classify`]: keyword groups and label classification
//! - [`sampling`]: sampling without replacement
//! - [`relevance`]: dispatch from a label to sampled records
//!
//! # Example
//!
//! ```rust,ignore
//! use nabh_evidence::get_relevant_data;
//!
//! let data = get_relevant_data("Equipment calibration record");
//! assert!(data.equipment.is_some());
//! assert!(data.staff.is_none());
//! ```

pub mod classify;
pub mod relevance;
pub mod sampling;

pub use classify::{EvidenceCategory, EvidenceClassifier, classify_evidence_type};
pub use relevance::{RelevantData, SamplingConfig, get_relevant_data, get_relevant_data_with};
pub use sampling::{sample_records, sample_records_random};
