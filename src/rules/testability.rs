//! testability: hardcoded non-deterministic dependencies
//!
//! Lines that reach directly for the clock or a random generator are hard
//! to put under test.

use crate::models::{RuleCategory, RuleContext, Severity, Violation};
use crate::rules::base::DetectRule;

const NONDETERMINISTIC_MARKERS: &[&str] = &["new date()", "datetime.now()", "math.random"];

pub struct HardcodedDependencyRule;

impl HardcodedDependencyRule {
    pub fn new() -> Self {
        Self
    }
}

impl DetectRule for HardcodedDependencyRule {
    fn rule_id(&self) -> &str {
        "testability"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Testability
    }

    fn description(&self) -> &str {
        "Time and randomness must be injectable"
    }

    fn check(&self, context: &RuleContext) -> Result<Vec<Violation>, String> {
        let mut violations = Vec::new();

        for (i, line) in context.lines.iter().enumerate() {
            let lower = line.to_lowercase();
            if NONDETERMINISTIC_MARKERS.iter().any(|m| lower.contains(m)) {
                violations.push(Violation::new(
                    RuleCategory::Testability,
                    "hardcodedDependencies",
                    Severity::Warning,
                    i + 1,
                    "Hardcoded time/random values make testing difficult".to_string(),
                    "Inject dependencies or use test doubles",
                    line.trim().to_string(),
                ));
            }
        }

        Ok(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn check(source: &str, language: Language) -> Vec<Violation> {
        let lines: Vec<&str> = source.split('\n').collect();
        let context = RuleContext {
            content: source,
            lines: &lines,
            language,
        };
        HardcodedDependencyRule::new().check(&context).unwrap()
    }

    #[test]
    fn test_datetime_now_flagged() {
        let violations = check("stamp = datetime.now()", Language::Python);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "hardcodedDependencies");
    }

    #[test]
    fn test_math_random_flagged() {
        let violations = check("const pick = Math.random();", Language::JavaScript);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_new_date_flagged() {
        let violations = check("const now = new Date();", Language::JavaScript);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_injected_clock_clean() {
        let violations = check("stamp = clock.now_utc()", Language::Python);
        assert!(violations.is_empty());
    }
}
