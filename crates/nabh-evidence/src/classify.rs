//! Keyword-based classification of evidence labels.
//!
//! An evidence label ("patient discharge summary", "equipment calibration
//! record") is lower-cased and tested for substring matches against one
//! keyword group per record collection. Groups are not mutually exclusive:
//! "record" belongs to the patient group, so "equipment calibration record"
//! matches both patients and equipment.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Patient-related keywords.
pub const PATIENT_KEYWORDS: &[&str] = &[
    "patient",
    "admission",
    "discharge",
    "record",
    "consent",
    "diagnosis",
    "clinical",
];

/// Staff-related keywords.
pub const STAFF_KEYWORDS: &[&str] = &[
    "staff",
    "employee",
    "training",
    "credential",
    "personnel",
    "privileg",
    "competenc",
    "doctor",
    "nurse",
];

/// Equipment-related keywords.
pub const EQUIPMENT_KEYWORDS: &[&str] = &[
    "equipment",
    "calibration",
    "maintenance",
    "device",
    "biomedical",
    "machine",
];

/// Incident-related keywords.
pub const INCIDENT_KEYWORDS: &[&str] = &[
    "incident",
    "adverse",
    "error",
    "near miss",
    "fall",
    "sentinel",
    "complaint",
];

static DEFAULT_CLASSIFIER: LazyLock<EvidenceClassifier> = LazyLock::new(EvidenceClassifier::default);

/// Record collection an evidence label can be relevant to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceCategory {
    Patients,
    Staff,
    Equipment,
    Incidents,
}

impl EvidenceCategory {
    /// All categories in result-key order.
    pub const ALL: [EvidenceCategory; 4] = [
        EvidenceCategory::Patients,
        EvidenceCategory::Staff,
        EvidenceCategory::Equipment,
        EvidenceCategory::Incidents,
    ];

    /// Returns the result key for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceCategory::Patients => "patients",
            EvidenceCategory::Staff => "staff",
            EvidenceCategory::Equipment => "equipment",
            EvidenceCategory::Incidents => "incidents",
        }
    }

    /// Built-in keyword group for this category.
    pub fn default_keywords(&self) -> &'static [&'static str] {
        match self {
            EvidenceCategory::Patients => PATIENT_KEYWORDS,
            EvidenceCategory::Staff => STAFF_KEYWORDS,
            EvidenceCategory::Equipment => EQUIPMENT_KEYWORDS,
            EvidenceCategory::Incidents => INCIDENT_KEYWORDS,
        }
    }
}

impl fmt::Display for EvidenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EvidenceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "patients" | "patient" => Ok(EvidenceCategory::Patients),
            "staff" => Ok(EvidenceCategory::Staff),
            "equipment" => Ok(EvidenceCategory::Equipment),
            "incidents" | "incident" => Ok(EvidenceCategory::Incidents),
            _ => Err(format!("Unknown evidence category: {s}")),
        }
    }
}

/// Keyword groups used to classify evidence labels.
///
/// # Example
///
/// ```
/// use nabh_evidence::{EvidenceCategory, EvidenceClassifier};
///
/// let classifier = EvidenceClassifier::default();
/// let matched = classifier.classify("Patient discharge summary");
/// assert!(matched.contains(&EvidenceCategory::Patients));
/// assert_eq!(matched.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceClassifier {
    /// Lower-case keywords per category.
    groups: BTreeMap<EvidenceCategory, Vec<String>>,
}

impl Default for EvidenceClassifier {
    fn default() -> Self {
        let groups = EvidenceCategory::ALL
            .iter()
            .map(|&category| {
                let keywords = category
                    .default_keywords()
                    .iter()
                    .map(|k| (*k).to_string())
                    .collect();
                (category, keywords)
            })
            .collect();
        Self { groups }
    }
}

impl EvidenceClassifier {
    /// Extend a category's keyword group.
    ///
    /// Keywords are lower-cased; blank keywords are ignored since they would
    /// match every label.
    pub fn with_keywords<I, S>(mut self, category: EvidenceCategory, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let group = self.groups.entry(category).or_default();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !group.contains(&keyword) {
                group.push(keyword);
            }
        }
        self
    }

    /// Keywords for a category.
    pub fn keywords(&self, category: EvidenceCategory) -> &[String] {
        self.groups
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Categories whose keyword group matches the label.
    ///
    /// Returns an empty set when nothing matches; that is the normal
    /// "not relevant" outcome, not an error.
    pub fn classify(&self, label: &str) -> BTreeSet<EvidenceCategory> {
        let label = label.to_lowercase();
        let matched: BTreeSet<_> = self
            .groups
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| label.contains(k.as_str())))
            .map(|(category, _)| *category)
            .collect();

        trace!(label = %label, matched = ?matched, "classified evidence label");
        matched
    }
}

/// Classify a label with the built-in keyword groups.
pub fn classify_evidence_type(label: &str) -> BTreeSet<EvidenceCategory> {
    DEFAULT_CLASSIFIER.classify(label)
}
