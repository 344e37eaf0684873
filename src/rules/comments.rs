//! comments: content-free comment lines
//!
//! Flags full-line comments whose body is a bare marker word or a
//! restatement of the obvious.

use crate::models::{RuleCategory, RuleContext, Severity, Violation};
use crate::rules::base::DetectRule;

/// Shared with the useless-comment transformer
pub fn is_useless_comment_body(body: &str) -> bool {
    let lower = body.to_lowercase();
    matches!(lower.as_str(), "todo" | "fixme" | "hack")
        || lower.starts_with("this function")
        || lower.starts_with("this variable")
}

pub struct UselessCommentRule;

impl UselessCommentRule {
    pub fn new() -> Self {
        Self
    }
}

impl DetectRule for UselessCommentRule {
    fn rule_id(&self) -> &str {
        "comments"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Comments
    }

    fn description(&self) -> &str {
        "Comments must add information the code does not"
    }

    fn check(&self, context: &RuleContext) -> Result<Vec<Violation>, String> {
        let mut violations = Vec::new();
        let prefix = context.language.comment_prefix();

        for (i, line) in context.lines.iter().enumerate() {
            let stripped = line.trim();
            if !stripped.starts_with(prefix) {
                continue;
            }

            let body = stripped[prefix.len()..].trim();
            if is_useless_comment_body(body) {
                violations.push(Violation::new(
                    RuleCategory::Comments,
                    "uselessComment",
                    Severity::Info,
                    i + 1,
                    format!("Potentially useless comment: {}", body),
                    "Remove or make the comment more meaningful",
                    stripped.to_string(),
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
        UselessCommentRule::new().check(&context).unwrap()
    }

    #[test]
    fn test_bare_markers_flagged() {
        let source = "# TODO\n# fixme\nx = 1\n# computes the checksum over the payload";
        let violations = check(source, Language::Python);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].line_number, 1);
        assert_eq!(violations[1].line_number, 2);
    }

    #[test]
    fn test_restatement_flagged() {
        let violations = check("// This function does things", Language::JavaScript);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "uselessComment");
        assert_eq!(violations[0].severity, Severity::Info);
    }

    #[test]
    fn test_prefix_is_language_specific() {
        // a '#' line is not a comment in JavaScript
        let violations = check("# todo", Language::JavaScript);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_meaningful_comment_clean() {
        let violations = check("# retry twice because the API is flaky", Language::Python);
        assert!(violations.is_empty());
    }
}
