// tests/scan_report.rs

use privscan_rs::core::knowledge_base::{CREDIT_CARD, EMAIL, SSN};
use privscan_rs::core::models::{AlertSeverity, Severity};
use privscan_rs::core::scanner::run_scan;

#[test]
fn every_line_number_is_within_the_split_line_count() {
    let text = "a@b.com\n\nserver 10.0.0.1\ncall 555-123-4567\n";
    let line_count = text.split('\n').count();
    let report = run_scan(text);
    assert!(!report.findings.is_empty());
    for finding in &report.findings {
        assert!(finding.line_number >= 1);
        assert!(finding.line_number <= line_count);
    }
}

#[test]
fn scanning_twice_yields_identical_reports() {
    let text = "My SSN is 123-45-6789 and card 4111-1111-1111-1111, email a@b.com\n\
                We comply with GDPR and our Cookie Policy covers Encryption.";
    assert_eq!(run_scan(text), run_scan(text));
}

#[test]
fn empty_and_whitespace_input_produce_empty_reports() {
    for text in ["", "   \n \t \n"] {
        let report = run_scan(text);
        assert!(report.findings.is_empty());
        assert!(report.alerts.is_empty());
        assert_eq!(report.total_findings, 0);
        // The compliance section is still produced, all categories uncovered.
        assert!(!report.compliance.is_empty());
        assert!(report.compliance.iter().all(|s| !s.has_any));
    }
}

#[test]
fn email_only_text_has_no_compliance_coverage() {
    let report = run_scan("a@b.com");
    for status in &report.compliance {
        assert!(!status.has_any, "unexpected coverage in {}", status.category);
        assert!(status.found.is_empty());
    }
}

#[test]
fn ssn_card_email_combination_escalates_and_alerts() {
    let report = run_scan("My SSN is 123-45-6789 and card 4111-1111-1111-1111, email a@b.com");

    let by_type = |t: &str| report.findings.iter().find(|f| f.pii_type == t);
    let ssn = by_type(SSN).expect("SSN finding");
    let card = by_type(CREDIT_CARD).expect("credit card finding");
    let email = by_type(EMAIL).expect("email finding");

    assert_eq!(ssn.severity, Severity::Critical);
    assert_eq!(card.severity, Severity::Critical);
    assert_eq!(email.severity, Severity::High);

    let titles: Vec<&str> = report.alerts.iter().map(|a| a.title.as_str()).collect();
    assert!(titles.contains(&"Identity Theft Risk"));
    assert!(titles.contains(&"Financial Fraud Risk"));
    assert!(report
        .alerts
        .iter()
        .all(|a| a.severity == AlertSeverity::Critical));
}

#[test]
fn fifty_five_emails_trigger_mass_exposure_not_high_volume() {
    let text: String = (0..55)
        .map(|i| format!("user{i}@example.com\n"))
        .collect();
    let report = run_scan(&text);
    assert_eq!(report.total_findings, 55);

    let titles: Vec<&str> = report.alerts.iter().map(|a| a.title.as_str()).collect();
    assert!(titles.contains(&"Mass Data Exposure"));
    assert!(!titles.contains(&"High Volume Data Exposure"));
}

#[test]
fn gdpr_and_right_to_access_are_reported_found() {
    let report = run_scan("We comply with GDPR and support the Right to Access.");

    let frameworks = report
        .compliance
        .iter()
        .find(|s| s.category == "Regulatory Frameworks")
        .unwrap();
    assert!(frameworks.has_any);
    assert_eq!(frameworks.found, vec!["GDPR".to_string()]);

    let rights = report
        .compliance
        .iter()
        .find(|s| s.category == "Data Rights (General)")
        .unwrap();
    assert!(rights.has_any);
    assert_eq!(rights.found, vec!["Right to Access".to_string()]);
    assert_eq!(rights.missing.len(), 5);
}

#[test]
fn snippet_is_whole_line_when_window_exceeds_bounds() {
    // Match spans character positions 5..10 of a 12-character line.
    let report = run_scan("ab 1.2.3.4 c");
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].snippet, "ab 1.2.3.4 c");
}

#[test]
fn severity_counts_match_findings() {
    let report = run_scan("My SSN is 123-45-6789 and card 4111-1111-1111-1111, email a@b.com");
    let counts = report.severity_counts;
    assert_eq!(counts.critical, 2);
    assert_eq!(counts.high, 1);
    assert_eq!(counts.medium, 0);
    assert_eq!(
        counts.critical + counts.high + counts.medium,
        report.total_findings
    );
}

#[test]
fn report_serializes_to_json() {
    let report = run_scan("contact a@b.com");
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("Email Address"));
    let parsed: privscan_rs::core::models::ScanReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}
