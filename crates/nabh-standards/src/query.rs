//! Aggregation and filtering over the standards catalog.
//!
//! Every query is pure and total: it reads the catalog and returns derived
//! data without side effects. Each query is available as a method on
//! [`StandardsCatalog`] and as a free function over the embedded catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::{StandardsCatalog, catalog};
use crate::types::{Chapter, ElementCategory, ObjectiveElement};

/// Objective element counts per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub core: usize,
    pub commitment: usize,
    pub achievement: usize,
    pub excellence: usize,
}

impl CategoryCounts {
    /// Count elements by category.
    pub fn from_elements<'a, I>(elements: I) -> Self
    where
        I: IntoIterator<Item = &'a ObjectiveElement>,
    {
        let mut counts = Self::default();
        for element in elements {
            match element.category {
                ElementCategory::Core => counts.core += 1,
                ElementCategory::Commitment => counts.commitment += 1,
                ElementCategory::Achievement => counts.achievement += 1,
                ElementCategory::Excellence => counts.excellence += 1,
            }
        }
        counts
    }

    /// Count for a single category.
    pub fn get(&self, category: ElementCategory) -> usize {
        match category {
            ElementCategory::Core => self.core,
            ElementCategory::Commitment => self.commitment,
            ElementCategory::Achievement => self.achievement,
            ElementCategory::Excellence => self.excellence,
        }
    }

    /// Sum over all categories.
    pub fn total(&self) -> usize {
        self.core + self.commitment + self.achievement + self.excellence
    }
}

/// Catalog-wide totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStatistics {
    pub total_chapters: usize,
    pub total_standards: usize,
    pub total_elements: usize,
    pub core_elements: usize,
    pub commitment_elements: usize,
    pub achievement_elements: usize,
    pub excellence_elements: usize,
}

/// Totals for a single chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterStatistics {
    pub code: String,
    pub standards: usize,
    pub elements: usize,
    pub categories: CategoryCounts,
}

impl ChapterStatistics {
    fn from_chapter(chapter: &Chapter) -> Self {
        let categories = CategoryCounts::from_elements(chapter.elements());
        Self {
            code: chapter.code.clone(),
            standards: chapter.standards.len(),
            elements: categories.total(),
            categories,
        }
    }
}

impl StandardsCatalog {
    /// Every objective element across every chapter, in catalog order.
    pub fn flatten_elements(&self) -> Vec<&ObjectiveElement> {
        self.chapters().iter().flat_map(Chapter::elements).collect()
    }

    /// Elements flagged as Core.
    pub fn filter_by_core(&self) -> Vec<&ObjectiveElement> {
        self.flatten_elements()
            .into_iter()
            .filter(|e| e.is_core())
            .collect()
    }

    /// Elements of exactly the given category.
    pub fn filter_by_category(&self, category: ElementCategory) -> Vec<&ObjectiveElement> {
        self.flatten_elements()
            .into_iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Catalog-wide totals.
    ///
    /// Category counts are taken from the `category` field of the flattened
    /// elements, including the Core count.
    pub fn compute_statistics(&self) -> CatalogStatistics {
        let elements = self.flatten_elements();
        let categories = CategoryCounts::from_elements(elements.iter().copied());

        CatalogStatistics {
            total_chapters: self.chapters().len(),
            total_standards: self.chapters().iter().map(|c| c.standards.len()).sum(),
            total_elements: elements.len(),
            core_elements: categories.core,
            commitment_elements: categories.commitment,
            achievement_elements: categories.achievement,
            excellence_elements: categories.excellence,
        }
    }

    /// Per-chapter totals in catalog order.
    pub fn chapter_statistics(&self) -> Vec<ChapterStatistics> {
        self.chapters()
            .iter()
            .map(ChapterStatistics::from_chapter)
            .collect()
    }
}

/// Every objective element of the embedded catalog, in catalog order.
pub fn flatten_elements() -> Vec<&'static ObjectiveElement> {
    catalog().flatten_elements()
}

/// Core elements of the embedded catalog.
pub fn filter_by_core() -> Vec<&'static ObjectiveElement> {
    catalog().filter_by_core()
}

/// Elements of the embedded catalog with the given category.
pub fn filter_by_category(category: ElementCategory) -> Vec<&'static ObjectiveElement> {
    catalog().filter_by_category(category)
}

/// Totals for the embedded catalog.
pub fn compute_statistics() -> CatalogStatistics {
    catalog().compute_statistics()
}
