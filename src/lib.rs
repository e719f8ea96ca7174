// src/lib.rs

//! PII pattern and compliance keyword scanner for plain text.
//!
//! Given a text blob, [`core::scanner::run_scan`] produces a
//! [`core::models::ScanReport`] containing per-line PII findings with
//! context snippets, per-category compliance keyword coverage, composite
//! risk alerts derived from finding co-occurrence, and aggregate counts.
//!
//! Detection is regex-based and advisory: credit card candidates are not
//! Luhn-validated and SSN candidates are not range-checked, so false
//! positives are expected. Use the output for review, not as an
//! authoritative validator.

pub mod core;
pub mod logging;
pub mod report;
