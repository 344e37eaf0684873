//! Base trait for all transformer rules

use crate::language::Language;
use crate::models::RuleCategory;

/// The mutable line buffer one refactor call operates on
///
/// Seeded from the target file once per call; transformers run against it
/// in registration order, each seeing the cumulative effect of the rules
/// before it. Joining the lines back with `\n` reproduces the original
/// byte-for-byte when nothing changed, trailing newline included.
pub struct RefactorBuffer {
    pub language: Language,
    pub lines: Vec<String>,
}

impl RefactorBuffer {
    pub fn new(language: Language, content: &str) -> Self {
        Self {
            language,
            lines: content.split('\n').map(String::from).collect(),
        }
    }

    pub fn to_content(&self) -> String {
        self.lines.join("\n")
    }
}

/// Base trait that all transformer rules must implement
///
/// `apply` returns whether the rule changed the buffer; `Err` marks the
/// rule as skipped without stopping the rules after it.
pub trait TransformRule: Send + Sync {
    /// The unique registry name for this rule (e.g., "fix_naming")
    fn name(&self) -> &str;

    /// The category this rule belongs to
    fn category(&self) -> RuleCategory;

    /// Short description of the fix, shown in dry runs
    fn description(&self) -> &str;

    /// Mutate the buffer; report whether anything changed
    fn apply(&self, buffer: &mut RefactorBuffer) -> Result<bool, String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_round_trip() {
        let content = "line one\nline two\n";
        let buffer = RefactorBuffer::new(Language::Python, content);
        assert_eq!(buffer.lines.len(), 3); // trailing newline yields an empty tail
        assert_eq!(buffer.to_content(), content);
    }
}
