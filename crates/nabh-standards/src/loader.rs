//! Catalog loading from embedded CSV data.
//!
//! Chapters, standards and objective elements are stored in three flat CSV
//! files and joined on their parent codes while loading. Row order inside each
//! file is the declaration order within the parent.

use std::collections::{BTreeMap, HashSet};
use std::io::Cursor;

use serde::Deserialize;
use tracing::debug;

use crate::embedded;
use crate::error::{Result, StandardsError};
use crate::types::{Chapter, ChapterType, ElementCategory, ObjectiveElement, Standard};

const CHAPTERS_FILE: &str = "chapters.csv";
const STANDARDS_FILE: &str = "standards.csv";
const ELEMENTS_FILE: &str = "objective_elements.csv";

/// Load the catalog chapters from embedded data.
///
/// # Example
///
/// ```rust,ignore
/// let chapters = nabh_standards::loader::load()?;
/// assert_eq!(chapters[0].code, "AAC");
/// ```
pub fn load() -> Result<Vec<Chapter>> {
    load_from_str(
        embedded::CHAPTERS,
        embedded::STANDARDS,
        embedded::OBJECTIVE_ELEMENTS,
    )
}

/// Load catalog chapters from CSV string content.
///
/// Useful for loading an alternate edition of the catalog or test fixtures.
pub fn load_from_str(chapters: &str, standards: &str, elements: &str) -> Result<Vec<Chapter>> {
    let chapter_rows = load_chapters_from_str(chapters)?;
    let standard_rows = load_standards_from_str(standards)?;
    let element_rows = load_elements_from_str(elements)?;
    let catalog = build_catalog(chapter_rows, standard_rows, element_rows)?;

    debug!(
        chapters = catalog.len(),
        standards = catalog.iter().map(|c| c.standards.len()).sum::<usize>(),
        "loaded standards catalog"
    );
    Ok(catalog)
}

// =============================================================================
// CSV Row Types
// =============================================================================

/// Row from chapters.csv.
#[derive(Debug, Deserialize)]
struct ChapterCsvRow {
    #[serde(rename = "Chapter Order")]
    order: String,
    #[serde(rename = "Chapter Code")]
    code: String,
    #[serde(rename = "Chapter Name")]
    name: String,
    #[serde(rename = "Full Name")]
    full_name: String,
    #[serde(rename = "Chapter Type")]
    chapter_type: String,
}

/// Row from standards.csv.
#[derive(Debug, Deserialize)]
struct StandardCsvRow {
    #[serde(rename = "Chapter Code")]
    chapter_code: String,
    #[serde(rename = "Standard Code")]
    code: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Intent")]
    intent: String,
}

/// Row from objective_elements.csv.
#[derive(Debug, Deserialize)]
struct ElementCsvRow {
    #[serde(rename = "Standard Code")]
    standard_code: String,
    #[serde(rename = "Element Code")]
    code: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Category")]
    category: String,
}

// =============================================================================
// Loading Functions
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
            result.map_err(|e| StandardsError::CsvParse {
                file,
                message: e.to_string(),
            })
        })
        .collect()
}

/// Chapter metadata keyed by position, without its standards.
struct ChapterMeta {
    order: u32,
    code: String,
    name: String,
    full_name: String,
    chapter_type: ChapterType,
}

fn load_chapters_from_str(content: &str) -> Result<Vec<ChapterMeta>> {
    let mut chapters = Vec::new();

    for row in read_rows::<ChapterCsvRow>(content, CHAPTERS_FILE)? {
        let code = row.code.trim().to_uppercase();
        if code.is_empty() {
            continue;
        }

        let order = row
            .order
            .trim()
            .parse::<u32>()
            .map_err(|_| invalid("Chapter Order", &row.order, CHAPTERS_FILE))?;
        let chapter_type = row
            .chapter_type
            .parse::<ChapterType>()
            .map_err(|_| invalid("Chapter Type", &row.chapter_type, CHAPTERS_FILE))?;

        chapters.push(ChapterMeta {
            order,
            code,
            name: row.name.trim().to_string(),
            full_name: row.full_name.trim().to_string(),
            chapter_type,
        });
    }

    chapters.sort_by_key(|c| c.order);
    Ok(chapters)
}

fn load_standards_from_str(content: &str) -> Result<Vec<(String, Standard)>> {
    let mut standards = Vec::new();

    for row in read_rows::<StandardCsvRow>(content, STANDARDS_FILE)? {
        let code = row.code.trim().to_string();
        if code.is_empty() {
            continue;
        }
        standards.push((
            row.chapter_code.trim().to_uppercase(),
            Standard {
                code,
                title: row.title.trim().to_string(),
                intent: non_empty(&row.intent),
                objective_elements: Vec::new(),
            },
        ));
    }

    Ok(standards)
}

fn load_elements_from_str(content: &str) -> Result<Vec<(String, ObjectiveElement)>> {
    let mut elements = Vec::new();

    for row in read_rows::<ElementCsvRow>(content, ELEMENTS_FILE)? {
        let code = row.code.trim().to_string();
        if code.is_empty() {
            continue;
        }

        let category = row
            .category
            .parse::<ElementCategory>()
            .map_err(|_| invalid("Category", &row.category, ELEMENTS_FILE))?;

        elements.push((
            row.standard_code.trim().to_string(),
            ObjectiveElement {
                code,
                description: row.description.trim().to_string(),
                category,
            },
        ));
    }

    Ok(elements)
}

// =============================================================================
// Build Catalog
// =============================================================================

/// Join the flat rows into the chapter hierarchy.
fn build_catalog(
    chapter_rows: Vec<ChapterMeta>,
    standard_rows: Vec<(String, Standard)>,
    element_rows: Vec<(String, ObjectiveElement)>,
) -> Result<Vec<Chapter>> {
    let mut chapter_codes = HashSet::new();
    for chapter in &chapter_rows {
        if !chapter_codes.insert(chapter.code.clone()) {
            return Err(StandardsError::DuplicateCode {
                kind: "chapter",
                code: chapter.code.clone(),
            });
        }
    }

    // Standard code -> (chapter code, index within chapter)
    let mut standard_index: BTreeMap<String, (String, usize)> = BTreeMap::new();
    let mut standards_by_chapter: BTreeMap<String, Vec<Standard>> = BTreeMap::new();

    for (chapter_code, standard) in standard_rows {
        if !chapter_codes.contains(&chapter_code) {
            return Err(StandardsError::UnknownParent {
                kind: "standard",
                code: standard.code,
                parent: chapter_code,
            });
        }
        if !has_code_prefix(&standard.code, &chapter_code) {
            return Err(invalid("Standard Code", &standard.code, STANDARDS_FILE));
        }

        let siblings = standards_by_chapter.entry(chapter_code.clone()).or_default();
        if standard_index.contains_key(&standard.code) {
            return Err(StandardsError::DuplicateCode {
                kind: "standard",
                code: standard.code,
            });
        }
        standard_index.insert(standard.code.clone(), (chapter_code, siblings.len()));
        siblings.push(standard);
    }

    for (standard_code, element) in element_rows {
        let Some((chapter_code, position)) = standard_index.get(&standard_code) else {
            return Err(StandardsError::UnknownParent {
                kind: "objective element",
                code: element.code,
                parent: standard_code,
            });
        };
        if !has_code_prefix(&element.code, &standard_code) {
            return Err(invalid("Element Code", &element.code, ELEMENTS_FILE));
        }

        let Some(standard) = standards_by_chapter
            .get_mut(chapter_code)
            .and_then(|standards| standards.get_mut(*position))
        else {
            continue;
        };
        if standard.find_element(&element.code).is_some() {
            return Err(StandardsError::DuplicateCode {
                kind: "objective element",
                code: element.code,
            });
        }
        standard.objective_elements.push(element);
    }

    Ok(chapter_rows
        .into_iter()
        .map(|meta| Chapter {
            standards: standards_by_chapter.remove(&meta.code).unwrap_or_default(),
            code: meta.code,
            name: meta.name,
            full_name: meta.full_name,
            chapter_type: meta.chapter_type,
        })
        .collect())
}

// =============================================================================
// Helpers
// =============================================================================

/// True if `code` is `parent` followed by a dot and a non-empty suffix.
fn has_code_prefix(code: &str, parent: &str) -> bool {
    code.strip_prefix(parent)
        .and_then(|rest| rest.strip_prefix('.'))
        .is_some_and(|suffix| !suffix.is_empty())
}

fn invalid(field: &'static str, value: &str, file: &'static str) -> StandardsError {
    StandardsError::InvalidValue {
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
