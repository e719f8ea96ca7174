// src/core/models.rs

use serde::{Serialize, Deserialize};
use strum::Display;

// --- Core Data Models ---

/// The intrinsic risk level declared on a pattern rule in the knowledge base.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
pub enum RiskLevel {
    High,
    Medium,
}

/// The severity tier assigned to a finding by the classifier.
///
/// Unlike `RiskLevel`, which is a static property of a rule, severity is
/// computed per scan: a finding can be escalated to `Critical` based on
/// which other finding types are present in the same document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
pub enum Severity {
    Critical,
    High,
    Medium,
}

impl Severity {
    /// Icon shown next to a finding of this severity.
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Critical => "🚨",
            Severity::High => "⚠️",
            Severity::Medium => "ℹ️",
        }
    }

    /// CSS class used by presenters to style a finding of this severity.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Critical => "severity-critical",
            Severity::High => "severity-high",
            Severity::Medium => "severity-medium",
        }
    }
}

/// Severity of a composite alert, derived from finding co-occurrence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    Warning,
}

// --- Pattern Scan Models ---

/// A single PII match with its location and classification metadata.
///
/// `severity`, `severity_icon` and `severity_class` are assigned by the
/// classifier after the full set of raw matches for the document is known.
/// The icon/class pair is cosmetic metadata for presenters, not logic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    pub pii_type: String,
    pub risk_level: RiskLevel,
    /// 1-based index into the newline-split input.
    pub line_number: usize,
    /// Up to 10 characters of context on either side of the match, clipped
    /// to the line boundaries.
    pub snippet: String,
    pub matched_text: String,
    pub severity: Severity,
    pub severity_icon: String,
    pub severity_class: String,
}

/// Number of findings per severity tier across a whole report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
}

/// Number of findings for one PII type. Reported in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeCount {
    pub pii_type: String,
    pub count: usize,
}

// --- Compliance Models ---

/// Keyword coverage for one compliance category.
///
/// `found` and `missing` preserve the category's declared keyword order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComplianceStatus {
    pub category: String,
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub has_any: bool,
}

// --- Alert Models ---

/// A risk signal derived from the co-occurrence of multiple finding types,
/// not from any single match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CriticalAlert {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub severity: AlertSeverity,
}

// --- Main Report ---

/// The complete result of scanning one text blob.
///
/// A pure value with no identity beyond the scan that produced it: scanning
/// the same text twice yields equal reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ScanReport {
    pub findings: Vec<Finding>,
    pub compliance: Vec<ComplianceStatus>,
    pub alerts: Vec<CriticalAlert>,
    pub severity_counts: SeverityCounts,
    pub type_counts: Vec<TypeCount>,
    pub total_findings: usize,
}
