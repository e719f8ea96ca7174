// src/core/mod.rs

// This makes the `models`, `scanner`, and `knowledge_base` modules available
// to other parts of the application. The `mod.rs` file acts as the root
// of the `core` module, exposing its sub-modules to the crate.

/// Contains all data structures and models used throughout the application,
/// such as `ScanReport`, `Finding`, `Severity`, and the compliance and
/// alert result structs.
pub mod models;

/// Houses the scan pipeline: the line-by-line pattern scan, the compliance
/// keyword check, and the severity classifier that derives composite
/// alerts from the complete result set.
pub mod scanner;

/// Contains the static, read-only catalogs that drive the scan: the PII
/// pattern rules and the compliance keyword categories.
pub mod knowledge_base;
