//! duplication: exact repeated lines
//!
//! Maps trimmed line text to its occurrence lines and flags text that is
//! long enough to matter and repeated more than twice. Comment lines are
//! excluded whichever language is active; the check runs on trimmed text,
//! so comments behind leading whitespace are excluded too.

use crate::language::is_any_comment;
use crate::models::{RuleCategory, RuleContext, Severity, Violation};
use crate::rules::base::DetectRule;
use std::collections::HashMap;

const MIN_DUPLICATE_LENGTH: usize = 20;
const MAX_OCCURRENCES: usize = 2;

pub struct DuplicateCodeRule;

impl DuplicateCodeRule {
    pub fn new() -> Self {
        Self
    }
}

impl DetectRule for DuplicateCodeRule {
    fn rule_id(&self) -> &str {
        "duplication"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Duplication
    }

    fn description(&self) -> &str {
        "Repeated statements should be extracted"
    }

    fn check(&self, context: &RuleContext) -> Result<Vec<Violation>, String> {
        let mut occurrences: HashMap<&str, Vec<usize>> = HashMap::new();

        for (i, line) in context.lines.iter().enumerate() {
            let stripped = line.trim();
            if !stripped.is_empty() && !is_any_comment(stripped) {
                occurrences.entry(stripped).or_default().push(i + 1);
            }
        }

        let mut duplicates: Vec<(&str, Vec<usize>)> = occurrences
            .into_iter()
            .filter(|(text, lines)| {
                lines.len() > MAX_OCCURRENCES && text.chars().count() > MIN_DUPLICATE_LENGTH
            })
            .collect();
        // HashMap iteration order is arbitrary; report in file order
        duplicates.sort_by_key(|(_, lines)| lines[0]);

        let violations = duplicates
            .into_iter()
            .map(|(text, lines)| {
                Violation::new(
                    RuleCategory::Duplication,
                    "duplicateCode",
                    Severity::Warning,
                    lines[0],
                    format!("Duplicate code found ({} times)", lines.len()),
                    "Extract to a function or utility",
                    text.to_string(),
                )
            })
            .collect();

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
        DuplicateCodeRule::new().check(&context).unwrap()
    }

    #[test]
    fn test_three_occurrences_flagged() {
        // 25 characters, repeated exactly 3 times
        let line = "result = compute(a, b, c)";
        assert_eq!(line.len(), 25);
        let source = format!("{}\nx = 1\n{}\ny = 2\n{}", line, line, line);
        let violations = check(&source);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line_number, 1);
        assert!(violations[0].description.contains("3 times"));
    }

    #[test]
    fn test_two_occurrences_clean() {
        let line = "result = compute(a, b, c)";
        let source = format!("{}\nx = 1\n{}", line, line);
        assert!(check(&source).is_empty());
    }

    #[test]
    fn test_short_lines_ignored() {
        let source = "x += 1\ny = 2\nx += 1\nz = 3\nx += 1";
        assert!(check(&source).is_empty());
    }

    #[test]
    fn test_comment_lines_ignored() {
        let comment = "# the same long comment repeated";
        let source = format!("{}\n    {}\n{}", comment, comment, comment);
        assert!(check(&source).is_empty());
    }
}
