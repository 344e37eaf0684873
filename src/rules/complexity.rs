//! complexity: nesting depth of control-flow statements
//!
//! Depth is approximated from leading whitespace, four columns per level.

use crate::language::indent_width;
use crate::models::{RuleCategory, RuleContext, Severity, Violation};
use crate::rules::base::DetectRule;

const MAX_NESTING_INDENT: usize = 8;
const COLUMNS_PER_LEVEL: usize = 4;

pub struct DeepNestingRule;

impl DeepNestingRule {
    pub fn new() -> Self {
        Self
    }
}

impl DetectRule for DeepNestingRule {
    fn rule_id(&self) -> &str {
        "complexity"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Complexity
    }

    fn description(&self) -> &str {
        "Control flow must not nest too deeply"
    }

    fn check(&self, context: &RuleContext) -> Result<Vec<Violation>, String> {
        let mut violations = Vec::new();
        let keywords = context.language.control_flow_keywords();

        for (i, line) in context.lines.iter().enumerate() {
            let stripped = line.trim_start();
            if !keywords.iter().any(|k| stripped.starts_with(k)) {
                continue;
            }

            let width = indent_width(line);
            if width > MAX_NESTING_INDENT {
                violations.push(Violation::new(
                    RuleCategory::Complexity,
                    "deepNesting",
                    Severity::Warning,
                    i + 1,
                    format!("Deep nesting level ({})", width / COLUMNS_PER_LEVEL),
                    "Use guard clauses or extract to function",
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
        DeepNestingRule::new().check(&context).unwrap()
    }

    #[test]
    fn test_deep_if_flagged() {
        let source = "            if done:\n                pass";
        let violations = check(source, Language::Python);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "deepNesting");
        assert!(violations[0].description.contains("(3)"));
    }

    #[test]
    fn test_shallow_if_clean() {
        let source = "        if done:\n            pass";
        assert!(check(source, Language::Python).is_empty());
    }

    #[test]
    fn test_non_control_lines_ignored() {
        let source = "                value = compute()";
        assert!(check(source, Language::Python).is_empty());
    }

    #[test]
    fn test_js_keywords() {
        let source = "            for (const x of items) {";
        let violations = check(source, Language::JavaScript);
        assert_eq!(violations.len(), 1);
    }
}
