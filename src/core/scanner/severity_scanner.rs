// src/core/scanner/severity_scanner.rs

use std::collections::HashMap;

use tracing::{debug, info};

use crate::core::knowledge_base::{self, CREDIT_CARD, DATE_OF_BIRTH, EMAIL, IBAN, PASSPORT, SSN};
use crate::core::models::{
    AlertSeverity, ComplianceStatus, CriticalAlert, Finding, RiskLevel, ScanReport, Severity,
    SeverityCounts, TypeCount,
};
use crate::core::scanner::pattern_scanner::PatternHit;

/// Total-findings thresholds for the volume alerts. The mass threshold is
/// checked first; the two alerts are mutually exclusive.
const MASS_EXPOSURE_THRESHOLD: usize = 50;
const HIGH_VOLUME_THRESHOLD: usize = 20;

/// Which escalation-relevant PII types are present anywhere in the scan.
/// Derived once from the tally and consulted by both the alert rules and
/// the per-finding severity assignment.
#[derive(Debug, Clone, Copy, Default)]
struct TypePresence {
    ssn: bool,
    credit_card: bool,
    email: bool,
    passport: bool,
    iban: bool,
    date_of_birth: bool,
}

impl TypePresence {
    fn from_tally(tally: &HashMap<&'static str, usize>) -> Self {
        let has = |name: &str| tally.get(name).copied().unwrap_or(0) > 0;
        Self {
            ssn: has(SSN),
            credit_card: has(CREDIT_CARD),
            email: has(EMAIL),
            passport: has(PASSPORT),
            iban: has(IBAN),
            date_of_birth: has(DATE_OF_BIRTH),
        }
    }
}

/// Classifies a complete set of raw hits and assembles the final report.
///
/// This is the second pass of the pipeline: severity depends on which other
/// finding types are present in the document, so it can only run once the
/// pattern scan has produced the full hit set.
///
/// # Arguments
/// * `hits` - All raw matches from the pattern scan, in scan order.
/// * `compliance` - The compliance keyword coverage for the same text.
///
/// # Returns
/// A `ScanReport` with per-finding severities, composite alerts and
/// aggregate counts filled in.
pub fn classify(hits: Vec<PatternHit>, compliance: Vec<ComplianceStatus>) -> ScanReport {
    // Pass 2a: tally per-type counts and derive presence flags.
    let mut tally: HashMap<&'static str, usize> = HashMap::new();
    for hit in &hits {
        *tally.entry(hit.pii_type).or_insert(0) += 1;
    }
    let presence = TypePresence::from_tally(&tally);
    debug!(types = %tally.len(), "Tallied finding types.");

    // Pass 2b: composite alerts from co-occurrence and volume.
    let total_findings = hits.len();
    let alerts = build_alerts(&tally, presence, total_findings);

    // Pass 3: re-annotate each hit with its final severity.
    let findings: Vec<Finding> = hits.into_iter().map(|h| annotate(h, presence)).collect();

    let severity_counts = count_severities(&findings);

    // Per-type counts reported in catalog order, not tally order.
    let type_counts = knowledge_base::PII_RULES
        .iter()
        .filter_map(|rule| {
            tally.get(rule.name).map(|&count| TypeCount {
                pii_type: rule.name.to_string(),
                count,
            })
        })
        .collect();

    info!(
        total = %total_findings,
        critical = %severity_counts.critical,
        alerts = %alerts.len(),
        "Severity classification finished."
    );

    ScanReport {
        findings,
        compliance,
        alerts,
        severity_counts,
        type_counts,
        total_findings,
    }
}

/// Evaluates the composite alert rules against the tally.
///
/// The co-occurrence rules are independent; a single scan can trigger any
/// combination of them. Only the two volume alerts are mutually exclusive.
fn build_alerts(
    tally: &HashMap<&'static str, usize>,
    presence: TypePresence,
    total_findings: usize,
) -> Vec<CriticalAlert> {
    let count = |name: &str| tally.get(name).copied().unwrap_or(0);
    let mut alerts = Vec::new();

    if presence.ssn && presence.credit_card {
        debug!("Alert triggered: Identity Theft Risk.");
        alerts.push(CriticalAlert {
            icon: "🆔".to_string(),
            title: "Identity Theft Risk".to_string(),
            description: format!(
                "Social Security Numbers ({}) and credit card numbers ({}) appear in the same document.",
                count(SSN),
                count(CREDIT_CARD)
            ),
            severity: AlertSeverity::Critical,
        });
    }

    if (presence.credit_card || presence.iban) && presence.email {
        debug!("Alert triggered: Financial Fraud Risk.");
        let mut financial = Vec::new();
        if presence.credit_card {
            financial.push(format!("credit card numbers ({})", count(CREDIT_CARD)));
        }
        if presence.iban {
            financial.push(format!("IBANs ({})", count(IBAN)));
        }
        alerts.push(CriticalAlert {
            icon: "💳".to_string(),
            title: "Financial Fraud Risk".to_string(),
            description: format!(
                "{} appear alongside email addresses ({}).",
                financial.join(" and "),
                count(EMAIL)
            ),
            severity: AlertSeverity::Critical,
        });
    }

    if (presence.ssn || presence.passport) && presence.date_of_birth && presence.email {
        debug!("Alert triggered: Full Identity Profile.");
        alerts.push(CriticalAlert {
            icon: "👤".to_string(),
            title: "Full Identity Profile".to_string(),
            description: "A government identifier, a date of birth and an email address \
                          were all found in the same document."
                .to_string(),
            severity: AlertSeverity::Critical,
        });
    }

    if total_findings >= MASS_EXPOSURE_THRESHOLD {
        debug!(total = %total_findings, "Alert triggered: Mass Data Exposure.");
        alerts.push(CriticalAlert {
            icon: "🚨".to_string(),
            title: "Mass Data Exposure".to_string(),
            description: format!("{total_findings} PII matches found in a single document."),
            severity: AlertSeverity::Critical,
        });
    } else if total_findings >= HIGH_VOLUME_THRESHOLD {
        debug!(total = %total_findings, "Alert triggered: High Volume Data Exposure.");
        alerts.push(CriticalAlert {
            icon: "⚠️".to_string(),
            title: "High Volume Data Exposure".to_string(),
            description: format!("{total_findings} PII matches found in a single document."),
            severity: AlertSeverity::Warning,
        });
    }

    alerts
}

/// Assigns the final severity to one hit. The precedence is ordered and the
/// first matching rule wins:
///
/// 1. SSN or credit card finding while both types are present → Critical.
/// 2. Credit card or IBAN finding while an email is present → Critical.
/// 3. Intrinsic rule risk High → High.
/// 4. Otherwise → Medium.
fn annotate(hit: PatternHit, presence: TypePresence) -> Finding {
    let severity = if (hit.pii_type == SSN || hit.pii_type == CREDIT_CARD)
        && presence.ssn
        && presence.credit_card
    {
        Severity::Critical
    } else if (hit.pii_type == CREDIT_CARD || hit.pii_type == IBAN) && presence.email {
        Severity::Critical
    } else if hit.risk_level == RiskLevel::High {
        Severity::High
    } else {
        Severity::Medium
    };

    Finding {
        pii_type: hit.pii_type.to_string(),
        risk_level: hit.risk_level,
        line_number: hit.line_number,
        snippet: hit.snippet,
        matched_text: hit.matched_text,
        severity,
        severity_icon: severity.icon().to_string(),
        severity_class: severity.css_class().to_string(),
    }
}

/// Totals findings per severity tier.
fn count_severities(findings: &[Finding]) -> SeverityCounts {
    let mut counts = SeverityCounts::default();
    for finding in findings {
        match finding.severity {
            Severity::Critical => counts.critical += 1,
            Severity::High => counts.high += 1,
            Severity::Medium => counts.medium += 1,
        }
    }
    counts
}
