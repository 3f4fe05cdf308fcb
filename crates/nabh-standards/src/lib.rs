//! NABH accreditation standards catalog.
//!
//! This crate provides:
//!
//! - **Type definitions** for chapters, standards and objective elements
//! - **Catalog loader** from embedded CSV data
//! - **Registry** with code lookups over the ordered chapter sequence
//! - **Queries**: flattening, category filters and statistics
//!
//! # Module Organization
//!
//! - [`types`]: Catalog model and enumerations (ElementCategory, ChapterType)
//! - [`loader`]: CSV loading and hierarchy assembly
//! - [`catalog`]: The embedded catalog and its lookups
//! - [`query`]: Aggregation and filtering
//!
//! # Example
//!
//! ```rust,ignore
//! use nabh_standards::{ElementCategory, catalog, compute_statistics};
//!
//! let stats = compute_statistics();
//! println!("{} elements in {} chapters", stats.total_elements, stats.total_chapters);
//!
//! let cop = catalog().find_chapter("COP").unwrap();
//! println!("{} has {} standards", cop.full_name, cop.standards.len());
//!
//! let excellence = nabh_standards::filter_by_category(ElementCategory::Excellence);
//! ```

pub mod catalog;
pub mod embedded;
pub mod error;
pub mod loader;
pub mod query;
pub mod types;

// Error types
pub use error::{Result, StandardsError};

// Registry
pub use catalog::{StandardsCatalog, catalog};

// Queries
pub use query::{
    CatalogStatistics, CategoryCounts, ChapterStatistics, compute_statistics, filter_by_category,
    filter_by_core, flatten_elements,
};

// Model
pub use types::{Chapter, ChapterType, ElementCategory, ObjectiveElement, Standard};
