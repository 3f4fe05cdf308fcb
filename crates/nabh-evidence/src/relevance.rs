//! Relevance dispatch: from an evidence label to sampled records.
//!
//! The label is classified into evidence categories and each matched
//! collection is sampled. Unmatched collections are left out of the result
//! entirely; a consumer must read absence, not emptiness, as "not relevant".

use std::collections::BTreeSet;

use nabh_hospital::{
    EquipmentRecord, HospitalDataset, IncidentRecord, PatientRecord, StaffRecord, dataset,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{EvidenceCategory, EvidenceClassifier};
use crate::sampling::sample_records;

/// Number of records sampled per matched category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub patients: usize,
    pub staff: usize,
    pub equipment: usize,
    pub incidents: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            patients: 5,
            staff: 5,
            equipment: 5,
            incidents: 3,
        }
    }
}

impl SamplingConfig {
    /// Same sample size for every category.
    pub fn uniform(count: usize) -> Self {
        Self {
            patients: count,
            staff: count,
            equipment: count,
            incidents: count,
        }
    }

    /// Sample size for one category.
    pub fn count_for(&self, category: EvidenceCategory) -> usize {
        match category {
            EvidenceCategory::Patients => self.patients,
            EvidenceCategory::Staff => self.staff,
            EvidenceCategory::Equipment => self.equipment,
            EvidenceCategory::Incidents => self.incidents,
        }
    }
}

/// Records sampled for an evidence label.
///
/// A field is `Some` only if its category matched the label. `None` fields
/// are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevantData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patients: Option<Vec<PatientRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff: Option<Vec<StaffRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<EquipmentRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incidents: Option<Vec<IncidentRecord>>,
}

impl RelevantData {
    /// True if no category matched.
    pub fn is_empty(&self) -> bool {
        self.categories().is_empty()
    }

    /// Categories present in the result.
    pub fn categories(&self) -> BTreeSet<EvidenceCategory> {
        let mut present = BTreeSet::new();
        if self.patients.is_some() {
            present.insert(EvidenceCategory::Patients);
        }
        if self.staff.is_some() {
            present.insert(EvidenceCategory::Staff);
        }
        if self.equipment.is_some() {
            present.insert(EvidenceCategory::Equipment);
        }
        if self.incidents.is_some() {
            present.insert(EvidenceCategory::Incidents);
        }
        present
    }
}

impl EvidenceClassifier {
    /// Classify `evidence_type` and sample each matched collection.
    pub fn relevant_data<R>(
        &self,
        evidence_type: &str,
        dataset: &HospitalDataset,
        config: &SamplingConfig,
        rng: &mut R,
    ) -> RelevantData
    where
        R: Rng + ?Sized,
    {
        let mut data = RelevantData::default();

        for category in self.classify(evidence_type) {
            let count = config.count_for(category);
            match category {
                EvidenceCategory::Patients => {
                    data.patients = Some(sample_records(&dataset.patients, count, rng));
                }
                EvidenceCategory::Staff => {
                    data.staff = Some(sample_records(&dataset.staff, count, rng));
                }
                EvidenceCategory::Equipment => {
                    data.equipment = Some(sample_records(&dataset.equipment, count, rng));
                }
                EvidenceCategory::Incidents => {
                    data.incidents = Some(sample_records(&dataset.incidents, count, rng));
                }
            }
        }

        debug!(
            evidence_type,
            categories = ?data.categories(),
            "resolved relevant data"
        );
        data
    }
}

/// Sample the embedded dataset for an evidence label with default settings.
///
/// Uses the built-in keyword groups, [`SamplingConfig::default`] and the
/// thread-local random number generator.
pub fn get_relevant_data(evidence_type: &str) -> RelevantData {
    get_relevant_data_with(
        evidence_type,
        dataset(),
        &SamplingConfig::default(),
        &mut rand::thread_rng(),
    )
}

/// Sample `dataset` for an evidence label with explicit settings.
pub fn get_relevant_data_with<R>(
    evidence_type: &str,
    dataset: &HospitalDataset,
    config: &SamplingConfig,
    rng: &mut R,
) -> RelevantData
where
    R: Rng + ?Sized,
{
    EvidenceClassifier::default().relevant_data(evidence_type, dataset, config, rng)
}
