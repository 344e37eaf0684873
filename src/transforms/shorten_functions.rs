//! shorten_functions: heuristic line shortening
//!
//! Applies the same reflow heuristic as break_long_lines at a tighter
//! threshold. It does not restructure control flow or extract functions.

use crate::models::RuleCategory;
use crate::transforms::base::{RefactorBuffer, TransformRule};
use crate::transforms::break_long_lines::break_line;

const TARGET_LINE_LENGTH: usize = 80;

pub struct ShortenFunctionsRule;

impl ShortenFunctionsRule {
    pub fn new() -> Self {
        Self
    }
}

impl TransformRule for ShortenFunctionsRule {
    fn name(&self) -> &str {
        "shorten_functions"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Functions
    }

    fn description(&self) -> &str {
        "Break down long functions"
    }

    fn apply(&self, buffer: &mut RefactorBuffer) -> Result<bool, String> {
        let mut output = Vec::with_capacity(buffer.lines.len());
        let mut changed = false;

        for line in &buffer.lines {
            if line.chars().count() > TARGET_LINE_LENGTH {
                let replacement = break_line(line, buffer.language);
                if replacement.len() != 1 || replacement[0] != *line {
                    changed = true;
                }
                output.extend(replacement);
            } else {
                output.push(line.clone());
            }
        }

        buffer.lines = output;
        Ok(changed)
    }
}
