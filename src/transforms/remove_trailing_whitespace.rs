//! remove_trailing_whitespace
//!
//! Idempotent: a second run over its own output changes nothing.

use crate::models::RuleCategory;
use crate::transforms::base::{RefactorBuffer, TransformRule};

pub struct RemoveTrailingWhitespaceRule;

impl RemoveTrailingWhitespaceRule {
    pub fn new() -> Self {
        Self
    }
}

impl TransformRule for RemoveTrailingWhitespaceRule {
    fn name(&self) -> &str {
        "remove_trailing_whitespace"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Formatting
    }

    fn description(&self) -> &str {
        "Remove trailing whitespace"
    }

    fn apply(&self, buffer: &mut RefactorBuffer) -> Result<bool, String> {
        let mut changed = false;

        for line in buffer.lines.iter_mut() {
            let trimmed = line.trim_end();
            if trimmed.len() != line.len() {
                *line = trimmed.to_string();
                changed = true;
            }
        }

        Ok(changed)
    }
}
