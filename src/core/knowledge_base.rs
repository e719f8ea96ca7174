//! This module acts as the central "brain" of the scanner.
//! It contains the static, read-only catalogs the scan stages iterate over:
//! the PII pattern rules and the compliance keyword categories.
//! Making this data-driven allows for easy updates and maintenance of the
//! scanner's intelligence.
//!
//! Detection is regex-only by design: there is no Luhn checksum on credit
//! card candidates and no range validation on SSN candidates, so false
//! positives are expected. The scanner is an advisory tool, not an
//! authoritative validator.

use crate::core::models::RiskLevel;
use once_cell::sync::Lazy;
use regex::Regex;

// Canonical rule names. The classifier keys its presence checks on these,
// so they must stay in sync with the `PII_RULES` table below.
pub const EMAIL: &str = "Email Address";
pub const CREDIT_CARD: &str = "Credit Card (VISA/Mastercard)";
pub const SSN: &str = "US Social Security Number (SSN)";
pub const PASSPORT: &str = "Passport Number";
pub const IBAN: &str = "IBAN";
pub const DATE_OF_BIRTH: &str = "Date of Birth";
pub const MAC_ADDRESS: &str = "MAC Address";
pub const IPV4: &str = "IPv4 Address";
pub const PHONE: &str = "Phone Number (US/Simple Intl)";

/// A rule that defines how to detect a single category of PII.
pub struct PatternRule {
    /// The canonical name of the PII type (e.g., "Email Address").
    pub name: &'static str,
    /// The intrinsic risk level of this PII type.
    pub risk: RiskLevel,
    /// The compiled detection regex, applied line-by-line.
    pub regex: &'static Lazy<Regex>,
}

// Statically compiled regexes. A malformed pattern is a configuration bug
// and panics on first access rather than surfacing as a per-scan error.
static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,6}").unwrap());
static RE_CREDIT_CARD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:4\d{3}|5[1-5]\d{2})[ -]?\d{4}[ -]?\d{4}[ -]?\d{4}").unwrap());
static RE_SSN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}[ -]?\d{2}[ -]?\d{4}\b").unwrap());
static RE_PASSPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{1,2}\d{6,9}\b").unwrap());
static RE_IBAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{2}\d{2}[A-Z0-9]{10,30}\b").unwrap());
static RE_DATE_OF_BIRTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:0[1-9]|1[0-2])[/\-](?:0[1-9]|[12]\d|3[01])[/\-](?:19|20)\d{2}\b").unwrap());
static RE_MAC_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:[0-9A-Fa-f]{2}[:\-]){5}[0-9A-Fa-f]{2}\b").unwrap());
static RE_IPV4: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").unwrap());
static RE_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:\d{3}[-.\s]?){2}\d{4}\b").unwrap());

/// The master list of PII detection rules.
///
/// Declaration order is load-bearing: it is the iteration order of the
/// pattern scan, and therefore the grouping order of findings in a report.
pub static PII_RULES: &[PatternRule] = &[
    PatternRule { name: EMAIL, risk: RiskLevel::High, regex: &RE_EMAIL },
    PatternRule { name: CREDIT_CARD, risk: RiskLevel::High, regex: &RE_CREDIT_CARD },
    PatternRule { name: SSN, risk: RiskLevel::High, regex: &RE_SSN },
    PatternRule { name: PASSPORT, risk: RiskLevel::High, regex: &RE_PASSPORT },
    PatternRule { name: IBAN, risk: RiskLevel::High, regex: &RE_IBAN },
    PatternRule { name: DATE_OF_BIRTH, risk: RiskLevel::Medium, regex: &RE_DATE_OF_BIRTH },
    PatternRule { name: MAC_ADDRESS, risk: RiskLevel::Medium, regex: &RE_MAC_ADDRESS },
    PatternRule { name: IPV4, risk: RiskLevel::Medium, regex: &RE_IPV4 },
    PatternRule { name: PHONE, risk: RiskLevel::Medium, regex: &RE_PHONE },
];

/// A named group of compliance keywords checked against the whole document.
pub struct KeywordCategory {
    /// The category name shown in reports (e.g., "Regulatory Frameworks").
    pub name: &'static str,
    /// Keywords in declaration order. Matching is case-insensitive substring
    /// containment, so short keywords like "DPA" will also match inside
    /// longer words.
    pub keywords: &'static [&'static str],
}

/// The master list of compliance keyword categories.
pub static COMPLIANCE_KEYWORDS: &[KeywordCategory] = &[
    KeywordCategory {
        name: "Regulatory Frameworks",
        keywords: &["GDPR", "CCPA", "CPRA", "HIPAA", "PIPEDA", "LGPD"],
    },
    KeywordCategory {
        name: "Data Rights (General)",
        keywords: &[
            "Right to be Forgotten",
            "Right to Access",
            "Right to Rectification",
            "Data Portability",
            "Data Subject Request",
            "DSAR",
        ],
    },
    KeywordCategory {
        name: "CCPA-Specific Rights",
        keywords: &[
            "Right to Opt-Out",
            "Do Not Sell",
            "Shine the Light",
            "Consumer Request",
        ],
    },
    KeywordCategory {
        name: "Consent & Policy",
        keywords: &[
            "Cookie Policy",
            "Privacy Notice",
            "Lawful Basis",
            "Legitimate Interest",
            "Explicit Consent",
        ],
    },
    KeywordCategory {
        name: "Data Processing",
        keywords: &[
            "Data Processing Agreement",
            "DPA",
            "Data Controller",
            "Data Processor",
            "Records of Processing",
        ],
    },
    KeywordCategory {
        name: "Security & Breach",
        keywords: &[
            "Data Breach Notification",
            "Security Measures",
            "Encryption",
            "Anonymization",
            "Pseudonymization",
        ],
    },
    KeywordCategory {
        name: "Transfers & Third Parties",
        keywords: &[
            "Data Transfer",
            "Third Parties",
            "Standard Contractual Clauses",
            "Adequacy Decision",
            "Sub-processor",
        ],
    },
];

/// Looks up a rule by its canonical name.
///
/// # Arguments
///
/// * `name` - The canonical PII type name.
///
/// # Returns
///
/// An `Option` containing a reference to the `PatternRule` if the name is
/// present in the catalog, or `None` otherwise.
pub fn get_pattern_rule(name: &str) -> Option<&'static PatternRule> {
    PII_RULES.iter().find(|r| r.name == name)
}
