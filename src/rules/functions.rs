//! functions: function body length
//!
//! Finds function starts via the language's function keyword, walks to the
//! block end (brace depth for brace languages, indentation for Python),
//! and flags bodies longer than the threshold. Body lines exclude the
//! signature line and, for brace languages, the closing-brace line.

use crate::language::{indent_width, BlockStyle};
use crate::models::{RuleCategory, RuleContext, Severity, Violation};
use crate::rules::base::DetectRule;

const MAX_FUNCTION_BODY_LINES: usize = 20;

pub struct FunctionLengthRule;

impl FunctionLengthRule {
    pub fn new() -> Self {
        Self
    }

    fn brace_delta(line: &str) -> i32 {
        let opens = line.matches('{').count() as i32;
        let closes = line.matches('}').count() as i32;
        opens - closes
    }
}

impl DetectRule for FunctionLengthRule {
    fn rule_id(&self) -> &str {
        "functions"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Functions
    }

    fn description(&self) -> &str {
        "Function bodies must not exceed the line-count threshold"
    }

    fn check(&self, context: &RuleContext) -> Result<Vec<Violation>, String> {
        let mut violations = Vec::new();
        let lines = context.lines;
        let keyword = context.language.function_keyword();

        match context.language.block_style() {
            BlockStyle::Braces => {
                for (i, line) in lines.iter().enumerate() {
                    if !line.contains(keyword) {
                        continue;
                    }

                    let mut depth = Self::brace_delta(line);
                    let mut j = i + 1;
                    while j < lines.len() && depth > 0 {
                        depth += Self::brace_delta(lines[j]);
                        j += 1;
                    }

                    // lines strictly between the start line and the line
                    // where depth returned to zero
                    let body_len = if depth <= 0 {
                        (j - i).saturating_sub(2)
                    } else {
                        j - i - 1
                    };

                    if body_len > MAX_FUNCTION_BODY_LINES {
                        let text = lines[i..j].join("\n");
                        let snippet: String = text.chars().take(100).collect();
                        violations.push(Violation::new(
                            RuleCategory::Functions,
                            "functionLength",
                            Severity::Warning,
                            i + 1,
                            format!("Function is too long ({} lines)", body_len),
                            "Break down into smaller functions",
                            format!("{}...", snippet),
                        ));
                    }
                }
            }
            BlockStyle::Indentation => {
                for (i, line) in lines.iter().enumerate() {
                    if !line.trim_start().starts_with(keyword) {
                        continue;
                    }

                    let start_indent = indent_width(line);
                    let mut body_len = 0;
                    let mut j = i + 1;
                    while j < lines.len() {
                        let current = lines[j];
                        if !current.trim().is_empty() && indent_width(current) <= start_indent {
                            break;
                        }
                        body_len += 1;
                        j += 1;
                    }

                    if body_len > MAX_FUNCTION_BODY_LINES {
                        let end = (i + 4).min(lines.len());
                        violations.push(Violation::new(
                            RuleCategory::Functions,
                            "functionLength",
                            Severity::Warning,
                            i + 1,
                            format!("Function is too long ({} lines)", body_len),
                            "Break down into smaller functions",
                            format!("{}...", lines[i..end].join("\n")),
                        ));
                    }
                }
            }
        }

        Ok(violations)
    }
}
