//! design_patterns: file-level structure
//!
//! Counts class declarations across the whole file and flags the file once
//! when there are too many for one module.

use crate::models::{RuleCategory, RuleContext, Severity, Violation};
use crate::rules::base::DetectRule;

const MAX_CLASSES_PER_FILE: usize = 10;

pub struct TooManyClassesRule;

impl TooManyClassesRule {
    pub fn new() -> Self {
        Self
    }
}

impl DetectRule for TooManyClassesRule {
    fn rule_id(&self) -> &str {
        "design_patterns"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::DesignPatterns
    }

    fn description(&self) -> &str {
        "A single file must not accumulate too many classes"
    }

    fn check(&self, context: &RuleContext) -> Result<Vec<Violation>, String> {
        let class_count = context
            .lines
            .iter()
            .filter(|line| line.contains("class "))
            .count();

        let mut violations = Vec::new();
        if class_count > MAX_CLASSES_PER_FILE {
            violations.push(Violation::new(
                RuleCategory::DesignPatterns,
                "tooManyClasses",
                Severity::Warning,
                1,
                format!("Too many classes ({}) in single file", class_count),
                "Consider breaking into modules",
                "File structure analysis".to_string(),
            ));
        }

        Ok(violations)
    }
}
