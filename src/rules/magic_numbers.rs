//! magic_numbers: bare numeric literals
//!
//! A literal is only flagged when the line also carries an operator or a
//! control-flow keyword; a number on its own (a line count, an id) is more
//! likely noise than a tunable.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{RuleCategory, RuleContext, Severity, Violation};
use crate::rules::base::DetectRule;

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").unwrap());

/// Values common enough to never count as magic, whatever their digit count
const ALLOWED_NUMBERS: &[u64] = &[0, 1, 2, 10, 100, 1000];

const CONTEXT_MARKERS: &[&str] = &["=", "+", "-", "*", "/", "if", "for"];

pub struct MagicNumberRule;

impl MagicNumberRule {
    pub fn new() -> Self {
        Self
    }
}

impl DetectRule for MagicNumberRule {
    fn rule_id(&self) -> &str {
        "magic_numbers"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::MagicNumbers
    }

    fn description(&self) -> &str {
        "Unexplained numeric literals should be named constants"
    }

    fn check(&self, context: &RuleContext) -> Result<Vec<Violation>, String> {
        let mut violations = Vec::new();

        for (i, line) in context.lines.iter().enumerate() {
            let lower = line.to_lowercase();
            let has_context = CONTEXT_MARKERS.iter().any(|m| lower.contains(m));
            if !has_context {
                continue;
            }

            for m in NUMBER_PATTERN.find_iter(line) {
                let num: u64 = match m.as_str().parse() {
                    Ok(n) => n,
                    Err(_) => continue, // wider than u64; leave it alone
                };

                // single digits and the allow-list are never magic
                if num < 10 || ALLOWED_NUMBERS.contains(&num) {
                    continue;
                }

                violations.push(Violation::new(
                    RuleCategory::MagicNumbers,
                    "magicNumber",
                    Severity::Info,
                    i + 1,
                    format!("Potential magic number: {}", num),
                    "Replace with a named constant",
                    line.trim().to_string(),
                ));
            }
        }

        Ok(violations)
    }
}
