//! Standards catalog registry.
//!
//! Provides read access to the ordered chapter sequence and code lookups.
//! The embedded catalog is built once on first access and shared for the
//! lifetime of the process.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::Result;
use crate::loader;
use crate::types::{Chapter, ChapterType, ObjectiveElement, Standard};

/// The embedded catalog, loaded on first access.
static CATALOG: LazyLock<StandardsCatalog> = LazyLock::new(|| {
    StandardsCatalog::load()
        .unwrap_or_else(|err| panic!("embedded standards catalog is malformed: {err}"))
});

/// Returns the embedded standards catalog.
///
/// # Panics
///
/// Panics on first access if the catalog data compiled into the crate fails
/// to load. The embedded data is covered by this crate's tests.
pub fn catalog() -> &'static StandardsCatalog {
    &CATALOG
}

/// Ordered catalog of accreditation chapters.
///
/// Chapter order is significant: it is the chapter numbering used throughout
/// the accreditation documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandardsCatalog {
    chapters: Vec<Chapter>,
}

impl StandardsCatalog {
    /// Load the catalog from embedded data.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded CSV data is malformed.
    pub fn load() -> Result<Self> {
        Ok(Self::from_chapters(loader::load()?))
    }

    /// Build a catalog from already-assembled chapters.
    pub fn from_chapters(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    /// The chapters in catalog order.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Find a chapter by code (case-insensitive).
    pub fn find_chapter(&self, code: &str) -> Option<&Chapter> {
        self.chapters
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Find a standard by code (case-insensitive).
    ///
    /// The chapter is resolved from the code prefix (e.g., "COP" for "COP.7").
    pub fn find_standard(&self, code: &str) -> Option<&Standard> {
        let chapter_code = code.split('.').next()?;
        self.find_chapter(chapter_code)?.find_standard(code)
    }

    /// Find an objective element by code (case-insensitive).
    pub fn find_element(&self, code: &str) -> Option<&ObjectiveElement> {
        let (standard_code, _) = code.rsplit_once('.')?;
        self.find_standard(standard_code)?.find_element(code)
    }

    /// All objective elements of one chapter, in declaration order.
    ///
    /// Returns an empty vector for an unknown chapter code.
    pub fn elements_in_chapter(&self, code: &str) -> Vec<&ObjectiveElement> {
        self.find_chapter(code)
            .map(|c| c.elements().collect())
            .unwrap_or_default()
    }

    /// Chapters grouped by orientation, preserving catalog order in each group.
    pub fn chapters_by_type(&self) -> BTreeMap<ChapterType, Vec<&Chapter>> {
        let mut grouped: BTreeMap<ChapterType, Vec<&Chapter>> = BTreeMap::new();
        for chapter in &self.chapters {
            grouped.entry(chapter.chapter_type).or_default().push(chapter);
        }
        grouped
    }
}
