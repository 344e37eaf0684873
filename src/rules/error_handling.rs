//! error_handling: catch blocks that swallow failures
//!
//! Brace languages: walk a `catch { ... }` body and flag lines that neither
//! log nor re-throw. Python: flag a broad `except` whose body is a no-op.

use crate::language::BlockStyle;
use crate::models::{RuleCategory, RuleContext, Severity, Violation};
use crate::rules::base::DetectRule;

pub struct ErrorHandlingRule;

impl ErrorHandlingRule {
    pub fn new() -> Self {
        Self
    }

    fn is_broad_except(stripped: &str) -> bool {
        stripped == "except:" || stripped.starts_with("except Exception")
    }

    fn handles_error(line: &str) -> bool {
        line.contains("console.log") || line.contains("console.error") || line.contains("throw")
    }
}

impl DetectRule for ErrorHandlingRule {
    fn rule_id(&self) -> &str {
        "error_handling"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::ErrorHandling
    }

    fn description(&self) -> &str {
        "Catch blocks must log or re-throw instead of swallowing errors"
    }

    fn check(&self, context: &RuleContext) -> Result<Vec<Violation>, String> {
        let mut violations = Vec::new();
        let lines = context.lines;

        match context.language.block_style() {
            BlockStyle::Braces => {
                for (i, line) in lines.iter().enumerate() {
                    if !(line.contains("catch") && line.contains('{')) {
                        continue;
                    }

                    let mut j = i + 1;
                    while j < lines.len() && !lines[j].trim_end().ends_with('}') {
                        let body = lines[j].trim();
                        if Self::handles_error(body) {
                            break;
                        }
                        if !body.is_empty() && !body.starts_with("//") {
                            violations.push(Violation::new(
                                RuleCategory::ErrorHandling,
                                "emptyCatch",
                                Severity::Warning,
                                j + 1,
                                "Empty catch block or only console.log".to_string(),
                                "Add proper error handling or re-throw",
                                body.to_string(),
                            ));
                        }
                        j += 1;
                    }
                }
            }
            BlockStyle::Indentation => {
                for (i, line) in lines.iter().enumerate() {
                    let stripped = line.trim();
                    if !Self::is_broad_except(stripped) {
                        continue;
                    }

                    let body_is_noop = match lines.get(i + 1) {
                        None => true,
                        Some(next) => {
                            let next = next.trim();
                            next.is_empty() || next == "pass" || next.starts_with('#')
                        }
                    };

                    if body_is_noop {
                        violations.push(Violation::new(
                            RuleCategory::ErrorHandling,
                            "poorExcept",
                            Severity::Warning,
                            i + 1,
                            "Poor exception handling".to_string(),
                            "Add proper error handling logic",
                            stripped.to_string(),
                        ));
                    }
                }
            }
        }

        Ok(violations)
    }
}
