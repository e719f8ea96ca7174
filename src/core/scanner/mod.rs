// src/core/scanner/mod.rs

// This file acts as the public interface for the `scanner` module.
// It declares and makes all scan-stage modules public.
pub mod compliance_scanner;
pub mod pattern_scanner;
pub mod severity_scanner;

use tracing::info;

use crate::core::models::ScanReport;
use self::compliance_scanner::check_compliance;
use self::pattern_scanner::scan_patterns;
use self::severity_scanner::classify;

/// Runs the full scan pipeline over one text blob.
///
/// The pipeline is an explicit three-stage pass: the pattern scan produces
/// raw hits, the compliance check covers the same text independently, and
/// the classifier consumes the complete hit set to compute presence flags,
/// composite alerts and per-finding severities. The stages are kept
/// separate so each is independently testable as the rule set grows.
///
/// The computation is synchronous and request-scoped: no shared mutable
/// state survives between invocations, so concurrent callers only share
/// the read-only rule catalogs.
///
/// # Arguments
///
/// * `text` - The text to scan. Empty or whitespace-only input is valid
///   and produces an empty report; deciding whether the input was worth
///   scanning is the caller's concern.
///
/// # Returns
///
/// A `ScanReport` aggregating findings, compliance coverage, alerts and
/// counts.
pub fn run_scan(text: &str) -> ScanReport {
    info!(bytes = %text.len(), "Starting scan.");

    let hits = scan_patterns(text);
    let compliance = check_compliance(text);
    let report = classify(hits, compliance);

    info!(
        findings = %report.total_findings,
        alerts = %report.alerts.len(),
        "Scan finished."
    );
    report
}
