// src/core/scanner/pattern_scanner.rs

use tracing::{debug, info};

use crate::core::knowledge_base::{self, PatternRule};
use crate::core::models::RiskLevel;

/// A raw regex match produced by the pattern scan, before severity
/// classification. The classifier turns these into `Finding`s once the
/// full set for the document is known.
#[derive(Debug, Clone)]
pub struct PatternHit {
    pub pii_type: &'static str,
    pub risk_level: RiskLevel,
    pub line_number: usize,
    pub snippet: String,
    pub matched_text: String,
}

/// Runs every catalog rule over every line of the input text.
///
/// The text is split on `\n` only; line numbering is 1-based and patterns
/// are matched line-by-line, so a value broken across a line ending is not
/// detected. Matches of different rules may overlap; no suppression or
/// precedence is applied between rule types.
///
/// # Arguments
/// * `text` - The full input text.
///
/// # Returns
/// Raw hits ordered by (rule catalog order, line order, match order within
/// the line). Empty or whitespace-only input yields an empty vector.
pub fn scan_patterns(text: &str) -> Vec<PatternHit> {
    let lines: Vec<&str> = text.split('\n').collect();
    info!(lines = %lines.len(), rules = %knowledge_base::PII_RULES.len(), "Starting pattern scan.");

    let mut hits = Vec::new();
    for rule in knowledge_base::PII_RULES {
        let before = hits.len();
        scan_rule(rule, &lines, &mut hits);
        if hits.len() > before {
            debug!(rule = rule.name, matches = %(hits.len() - before), "Rule matched.");
        }
    }

    info!(total = %hits.len(), "Pattern scan finished.");
    hits
}

/// Applies a single rule to every line, appending one hit per match.
fn scan_rule(rule: &'static PatternRule, lines: &[&str], hits: &mut Vec<PatternHit>) {
    for (idx, line) in lines.iter().enumerate() {
        for m in rule.regex.find_iter(line) {
            hits.push(PatternHit {
                pii_type: rule.name,
                risk_level: rule.risk,
                line_number: idx + 1,
                snippet: context_snippet(line, m.start(), m.end()),
                matched_text: m.as_str().to_string(),
            });
        }
    }
}

/// Extracts up to 10 characters of context on either side of a match,
/// clipped to the line boundaries (no padding, no surrounding lines).
///
/// `start` and `end` are byte offsets into `line`; the window is counted
/// in characters so multi-byte text never splits a code point.
fn context_snippet(line: &str, start: usize, end: usize) -> String {
    let prefix: String = {
        let mut chars: Vec<char> = line[..start].chars().rev().take(10).collect();
        chars.reverse();
        chars.into_iter().collect()
    };
    let suffix: String = line[end..].chars().take(10).collect();
    format!("{}{}{}", prefix, &line[start..end], suffix)
}
