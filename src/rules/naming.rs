//! naming: declaration-site identifier conventions
//!
//! Brace-block languages expect camelCase, so an underscore in a declared
//! name is flagged. Python expects snake_case, so an underscore-free
//! mixed-case name is flagged.

use crate::language::NameCase;
use crate::models::{RuleCategory, RuleContext, Severity, Violation};
use crate::rules::base::DetectRule;

pub struct NamingConventionRule;

impl NamingConventionRule {
    pub fn new() -> Self {
        Self
    }
}

impl DetectRule for NamingConventionRule {
    fn rule_id(&self) -> &str {
        "naming"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Naming
    }

    fn description(&self) -> &str {
        "Declared names must follow the language's case convention"
    }

    fn check(&self, context: &RuleContext) -> Result<Vec<Violation>, String> {
        let mut violations = Vec::new();
        let pattern = context.language.declaration_regex();

        for (i, line) in context.lines.iter().enumerate() {
            for caps in pattern.captures_iter(line) {
                let name = &caps[2];
                match context.language.expected_case() {
                    NameCase::Camel => {
                        if name.contains('_') {
                            violations.push(Violation::new(
                                RuleCategory::Naming,
                                "camelCaseConvention",
                                Severity::Error,
                                i + 1,
                                format!("Use camelCase: {}", name),
                                "Change variable/function name to camelCase",
                                line.trim().to_string(),
                            ));
                        }
                    }
                    NameCase::Snake => {
                        if name != name.to_lowercase() && !name.contains('_') {
                            violations.push(Violation::new(
                                RuleCategory::Naming,
                                "snakeCaseConvention",
                                Severity::Error,
                                i + 1,
                                format!("Use snake_case: {}", name),
                                "Change function/class name to snake_case",
                                line.trim().to_string(),
                            ));
                        }
                    }
                }
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
        NamingConventionRule::new().check(&context).unwrap()
    }

    #[test]
    fn test_js_snake_case_flagged() {
        let violations = check("const user_name = 'x';\nlet count = 0;", Language::JavaScript);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "camelCaseConvention");
        assert_eq!(violations[0].line_number, 1);
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn test_js_camel_case_clean() {
        let violations = check("function fetchUser() {\n}", Language::JavaScript);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_python_camel_case_flagged() {
        let violations = check("def fetchData():\n    pass", Language::Python);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "snakeCaseConvention");
    }

    #[test]
    fn test_python_snake_case_clean() {
        let violations = check("def fetch_data():\n    pass", Language::Python);
        assert!(violations.is_empty());
    }
}
