// src/report.rs

use std::fmt::Write;

use chrono::Utc;

use crate::core::models::ScanReport;

/// Renders a scan report as plain text for terminal output.
///
/// Pure presentation: every value shown here comes from the `ScanReport`,
/// except the header timestamp, which is taken at render time so the
/// report itself stays a pure function of the scanned text.
pub fn render(report: &ScanReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "PII & Compliance Scan Report");
    let _ = writeln!(out, "Generated: {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    let _ = writeln!(out, "{}", "=".repeat(60));

    if !report.alerts.is_empty() {
        let _ = writeln!(out, "\nCritical Alerts");
        let _ = writeln!(out, "{}", "-".repeat(60));
        for alert in &report.alerts {
            let _ = writeln!(out, "{} {} [{}]", alert.icon, alert.title, alert.severity);
            let _ = writeln!(out, "   {}", alert.description);
        }
    }

    let _ = writeln!(out, "\nFindings ({})", report.total_findings);
    let _ = writeln!(out, "{}", "-".repeat(60));
    if report.findings.is_empty() {
        let _ = writeln!(out, "No PII detected.");
    } else {
        for finding in &report.findings {
            let _ = writeln!(
                out,
                "{} [line {}] {} ({}): \"{}\"",
                finding.severity_icon,
                finding.line_number,
                finding.pii_type,
                finding.severity,
                finding.snippet
            );
        }
    }

    if !report.type_counts.is_empty() {
        let _ = writeln!(out, "\nBy Type");
        let _ = writeln!(out, "{}", "-".repeat(60));
        for tc in &report.type_counts {
            let _ = writeln!(out, "{:>4}  {}", tc.count, tc.pii_type);
        }
    }

    let _ = writeln!(out, "\nCompliance Coverage");
    let _ = writeln!(out, "{}", "-".repeat(60));
    for status in &report.compliance {
        let marker = if status.has_any { "✔" } else { "✘" };
        let _ = writeln!(out, "{} {}", marker, status.category);
        if !status.found.is_empty() {
            let _ = writeln!(out, "   found:   {}", status.found.join(", "));
        }
        if !status.missing.is_empty() {
            let _ = writeln!(out, "   missing: {}", status.missing.join(", "));
        }
    }

    let counts = &report.severity_counts;
    let _ = writeln!(out, "\nSummary");
    let _ = writeln!(out, "{}", "-".repeat(60));
    let _ = writeln!(
        out,
        "Total findings: {} (critical: {}, high: {}, medium: {})",
        report.total_findings, counts.critical, counts.high, counts.medium
    );

    out
}
