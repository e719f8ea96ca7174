// src/core/scanner/compliance_scanner.rs

use tracing::{debug, info};

use crate::core::knowledge_base;
use crate::core::models::ComplianceStatus;

/// Checks every compliance keyword category against the whole document.
///
/// Matching is case-insensitive substring containment over the full text,
/// not tokenized word matching: a keyword appearing inside a longer word
/// still counts as found. No line numbers are tracked at this level.
///
/// # Arguments
/// * `text` - The full input text.
///
/// # Returns
/// One `ComplianceStatus` per catalog category, in catalog order, with
/// `found` and `missing` preserving each category's declared keyword order.
pub fn check_compliance(text: &str) -> Vec<ComplianceStatus> {
    info!(categories = %knowledge_base::COMPLIANCE_KEYWORDS.len(), "Starting compliance check.");
    let lowered = text.to_lowercase();

    let statuses: Vec<ComplianceStatus> = knowledge_base::COMPLIANCE_KEYWORDS
        .iter()
        .map(|category| {
            let mut found = Vec::new();
            let mut missing = Vec::new();

            for keyword in category.keywords {
                if lowered.contains(&keyword.to_lowercase()) {
                    found.push(keyword.to_string());
                } else {
                    missing.push(keyword.to_string());
                }
            }

            debug!(category = category.name, found = %found.len(), "Category checked.");
            ComplianceStatus {
                category: category.name.to_string(),
                has_any: !found.is_empty(),
                found,
                missing,
            }
        })
        .collect();

    info!(
        covered = %statuses.iter().filter(|s| s.has_any).count(),
        "Compliance check finished."
    );
    statuses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_keywords_reports_nothing_found() {
        let statuses = check_compliance("just an email: a@b.com");
        assert_eq!(statuses.len(), knowledge_base::COMPLIANCE_KEYWORDS.len());
        for status in &statuses {
            assert!(!status.has_any, "unexpected match in {}", status.category);
            assert!(status.found.is_empty());
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let statuses = check_compliance("our COOKIE POLICY explains everything");
        let consent = statuses.iter().find(|s| s.category == "Consent & Policy").unwrap();
        assert!(consent.has_any);
        assert_eq!(consent.found, vec!["Cookie Policy".to_string()]);
    }

    #[test]
    fn substring_containment_counts_as_found() {
        // "Encryption" matched inside a longer word still counts.
        let statuses = check_compliance("we rely on hardware-encryption-modules");
        let security = statuses.iter().find(|s| s.category == "Security & Breach").unwrap();
        assert!(security.found.contains(&"Encryption".to_string()));
    }

    #[test]
    fn found_and_missing_preserve_declared_order() {
        let statuses =
            check_compliance("We comply with GDPR and support the Right to Access.");

        let frameworks = statuses.iter().find(|s| s.category == "Regulatory Frameworks").unwrap();
        assert_eq!(frameworks.found, vec!["GDPR".to_string()]);
        assert_eq!(
            frameworks.missing,
            vec!["CCPA", "CPRA", "HIPAA", "PIPEDA", "LGPD"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );

        let rights = statuses.iter().find(|s| s.category == "Data Rights (General)").unwrap();
        assert_eq!(rights.found, vec!["Right to Access".to_string()]);
        assert_eq!(
            rights.missing,
            vec![
                "Right to be Forgotten",
                "Right to Rectification",
                "Data Portability",
                "Data Subject Request",
                "DSAR",
            ]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
        );
    }
}
