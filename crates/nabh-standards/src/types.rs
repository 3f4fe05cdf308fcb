//! Catalog model: chapters, standards and objective elements.
//!
//! The catalog is a strict three-level hierarchy. Each level owns the level
//! below it exclusively:
//!
//! ```text
//! Chapter (AAC)
//! └── Standard (AAC.1)
//!     └── ObjectiveElement (AAC.1.a)
//! ```

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Assessment-timing category of an objective element.
///
/// Each category is assessed at a different stage of the accreditation cycle.
/// The variants are declared in the order they are reported.
///
/// # Example
///
/// ```
/// use nabh_standards::ElementCategory;
///
/// let category: ElementCategory = "achievement".parse().unwrap();
/// assert_eq!(category, ElementCategory::Achievement);
/// assert!(!category.is_core());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementCategory {
    /// Essential requirements, assessed at every assessment.
    Core,
    /// Requirements the organisation commits to from pre-accreditation onward.
    Commitment,
    /// Requirements assessed during surveillance.
    Achievement,
    /// Requirements assessed at re-accreditation.
    Excellence,
}

impl ElementCategory {
    /// All categories in reporting order.
    pub const ALL: [ElementCategory; 4] = [
        ElementCategory::Core,
        ElementCategory::Commitment,
        ElementCategory::Achievement,
        ElementCategory::Excellence,
    ];

    /// Returns the category name as it appears in the catalog data.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementCategory::Core => "Core",
            ElementCategory::Commitment => "Commitment",
            ElementCategory::Achievement => "Achievement",
            ElementCategory::Excellence => "Excellence",
        }
    }

    /// Returns true for the Core category.
    pub fn is_core(&self) -> bool {
        matches!(self, ElementCategory::Core)
    }

    /// Returns the accreditation-cycle stage at which this category is assessed.
    pub fn assessment_stage(&self) -> &'static str {
        match self {
            ElementCategory::Core => "Every assessment",
            ElementCategory::Commitment => "Pre-accreditation and onward",
            ElementCategory::Achievement => "Surveillance",
            ElementCategory::Excellence => "Re-accreditation",
        }
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ElementCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CORE" => Ok(ElementCategory::Core),
            "COMMITMENT" => Ok(ElementCategory::Commitment),
            "ACHIEVEMENT" => Ok(ElementCategory::Achievement),
            "EXCELLENCE" => Ok(ElementCategory::Excellence),
            _ => Err(format!("Unknown element category: {s}")),
        }
    }
}

/// Chapter orientation.
///
/// The first five chapters deal with the patient's journey through the
/// organisation; the last five with how the organisation itself is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChapterType {
    /// Patient-centred chapters (AAC, COP, MOM, PRE, HIC).
    PatientCentered,
    /// Organisation-centred chapters (PSQ, ROM, FMS, HRM, IMS).
    OrganizationCentered,
}

impl ChapterType {
    /// Returns the chapter type as it appears in the catalog data.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChapterType::PatientCentered => "Patient Centered",
            ChapterType::OrganizationCentered => "Organization Centered",
        }
    }
}

impl fmt::Display for ChapterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChapterType {
    type Err = String;

    /// Accepts both spellings ("Centered"/"Centred") and separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_uppercase()
            .replace(['-', '_'], " ")
            .replace("CENTRED", "CENTERED")
            .replace("ORGANISATION", "ORGANIZATION");
        match normalized.as_str() {
            "PATIENT CENTERED" | "PATIENTCENTERED" => Ok(ChapterType::PatientCentered),
            "ORGANIZATION CENTERED" | "ORGANIZATIONCENTERED" => {
                Ok(ChapterType::OrganizationCentered)
            }
            _ => Err(format!("Unknown chapter type: {s}")),
        }
    }
}

/// Smallest assessable compliance requirement in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObjectiveElement {
    /// Dotted hierarchical identifier (e.g., "AAC.1.a").
    pub code: String,
    /// Requirement text.
    pub description: String,
    /// Assessment-timing category.
    pub category: ElementCategory,
}

impl ObjectiveElement {
    /// Returns true if this element is a Core element.
    ///
    /// Derived from [`ObjectiveElement::category`], never stored separately.
    pub fn is_core(&self) -> bool {
        self.category.is_core()
    }
}

/// A standard within a chapter, owning its objective elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standard {
    /// Standard code (e.g., "AAC.1").
    pub code: String,
    /// Standard statement.
    pub title: String,
    /// Optional intent statement.
    pub intent: Option<String>,
    /// Objective elements in declaration order.
    pub objective_elements: Vec<ObjectiveElement>,
}

impl Standard {
    /// Find an objective element by code (case-insensitive).
    pub fn find_element(&self, code: &str) -> Option<&ObjectiveElement> {
        self.objective_elements
            .iter()
            .find(|e| e.code.eq_ignore_ascii_case(code))
    }
}

/// A chapter of the catalog, owning its standards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Three-letter chapter code (e.g., "AAC").
    pub code: String,
    /// Chapter name.
    pub name: String,
    /// Chapter name including its code.
    pub full_name: String,
    /// Patient- or organisation-centred.
    pub chapter_type: ChapterType,
    /// Standards in declaration order.
    pub standards: Vec<Standard>,
}

impl Chapter {
    /// Find a standard by code (case-insensitive).
    pub fn find_standard(&self, code: &str) -> Option<&Standard> {
        self.standards
            .iter()
            .find(|s| s.code.eq_ignore_ascii_case(code))
    }

    /// Iterate over every objective element in this chapter.
    pub fn elements(&self) -> impl Iterator<Item = &ObjectiveElement> + '_ {
        self.standards
            .iter()
            .flat_map(|s| s.objective_elements.iter())
    }
}

// Serialized elements carry the derived `is_core` flag alongside the category.
impl Serialize for ObjectiveElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ObjectiveElement", 4)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("is_core", &self.is_core())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "Core".parse::<ElementCategory>().unwrap(),
            ElementCategory::Core
        );
        assert_eq!(
            " EXCELLENCE ".parse::<ElementCategory>().unwrap(),
            ElementCategory::Excellence
        );
        assert!("Essential".parse::<ElementCategory>().is_err());
    }

    #[test]
    fn test_category_is_core() {
        assert!(ElementCategory::Core.is_core());
        for category in &ElementCategory::ALL[1..] {
            assert!(!category.is_core(), "{category} should not be core");
        }
    }

    #[test]
    fn test_category_order() {
        assert!(ElementCategory::Core < ElementCategory::Commitment);
        assert!(ElementCategory::Achievement < ElementCategory::Excellence);
    }

    #[test]
    fn test_chapter_type_from_str() {
        assert_eq!(
            "Patient Centered".parse::<ChapterType>().unwrap(),
            ChapterType::PatientCentered
        );
        assert_eq!(
            "organisation-centred".parse::<ChapterType>().unwrap(),
            ChapterType::OrganizationCentered
        );
        assert!("Hybrid".parse::<ChapterType>().is_err());
    }

    #[test]
    fn test_find_element_case_insensitive() {
        let standard = Standard {
            code: "AAC.1".to_string(),
            title: "Services are defined".to_string(),
            intent: None,
            objective_elements: vec![ObjectiveElement {
                code: "AAC.1.a".to_string(),
                description: "Services are displayed".to_string(),
                category: ElementCategory::Core,
            }],
        };
        assert!(standard.find_element("aac.1.A").is_some());
        assert!(standard.find_element("AAC.1.b").is_none());
    }

    #[test]
    fn test_element_serializes_is_core() {
        let element = ObjectiveElement {
            code: "HIC.2.a".to_string(),
            description: "Standard precautions are followed".to_string(),
            category: ElementCategory::Core,
        };
        let json = serde_json::to_value(&element).expect("serialize element");
        assert_eq!(json["category"], "Core");
        assert_eq!(json["is_core"], true);

        let round: ObjectiveElement = serde_json::from_value(json).expect("deserialize element");
        assert_eq!(round, element);
    }
}
