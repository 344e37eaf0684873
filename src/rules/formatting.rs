//! formatting: line length and trailing whitespace

use crate::models::{RuleCategory, RuleContext, Severity, Violation};
use crate::rules::base::DetectRule;

const MAX_LINE_LENGTH: usize = 100;

pub struct FormattingRule;

impl FormattingRule {
    pub fn new() -> Self {
        Self
    }
}

impl DetectRule for FormattingRule {
    fn rule_id(&self) -> &str {
        "formatting"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Formatting
    }

    fn description(&self) -> &str {
        "Lines must stay within the length limit and carry no trailing whitespace"
    }

    fn check(&self, context: &RuleContext) -> Result<Vec<Violation>, String> {
        let mut violations = Vec::new();

        for (i, line) in context.lines.iter().enumerate() {
            let width = line.chars().count();
            if width > MAX_LINE_LENGTH {
                violations.push(Violation::new(
                    RuleCategory::Formatting,
                    "lineLength",
                    Severity::Warning,
                    i + 1,
                    format!("Line too long ({} characters)", width),
                    "Break line or shorten variable names",
                    line.trim().to_string(),
                ));
            }

            if line.trim_end() != *line {
                violations.push(Violation::new(
                    RuleCategory::Formatting,
                    "trailingWhitespace",
                    Severity::Info,
                    i + 1,
                    "Line has trailing whitespace".to_string(),
                    "Remove trailing whitespace",
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

    fn check(source: &str) -> Vec<Violation> {
        let lines: Vec<&str> = source.split('\n').collect();
        let context = RuleContext {
            content: source,
            lines: &lines,
            language: Language::Python,
        };
        FormattingRule::new().check(&context).unwrap()
    }

    #[test]
    fn test_long_line_flagged() {
        let source = format!("x = '{}'", "a".repeat(120));
        let violations = check(&source);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "lineLength");
        assert_eq!(violations[0].severity, Severity::Warning);
    }

    #[test]
    fn test_line_at_limit_clean() {
        let source = "a".repeat(100);
        assert!(check(&source).is_empty());
    }

    #[test]
    fn test_trailing_whitespace_flagged() {
        let violations = check("x = 1   \ny = 2");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "trailingWhitespace");
        assert_eq!(violations[0].line_number, 1);
    }

    #[test]
    fn test_both_flagged_on_one_line() {
        let source = format!("x = '{}'  ", "a".repeat(120));
        let violations = check(&source);
        assert_eq!(violations.len(), 2);
    }
}
