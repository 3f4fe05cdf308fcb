//! Embedded catalog data.
//!
//! The catalog is embedded at compile time using `include_str!()`, so loading
//! never touches the filesystem.
//!
//! # Structure
//!
//! - `chapters.csv`: one row per chapter, with its position in the catalog
//! - `standards.csv`: one row per standard, keyed to its chapter code
//! - `objective_elements.csv`: one row per objective element, keyed to its
//!   standard code

/// Chapter definitions (NABH 5th edition chapter order).
pub const CHAPTERS: &str = include_str!("../data/chapters.csv");

/// Standard definitions.
pub const STANDARDS: &str = include_str!("../data/standards.csv");

/// Objective element definitions with their compliance category.
pub const OBJECTIVE_ELEMENTS: &str = include_str!("../data/objective_elements.csv");
