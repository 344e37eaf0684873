//! remove_useless_comments: blank out content-free comment lines
//!
//! Matches the same patterns the comments detector flags, restricted to
//! full-line comments in the active language's prefix. The whole line is
//! blanked so no indentation-only residue is left behind.

use crate::models::RuleCategory;
use crate::rules::comments::is_useless_comment_body;
use crate::transforms::base::{RefactorBuffer, TransformRule};

pub struct RemoveUselessCommentsRule;

impl RemoveUselessCommentsRule {
    pub fn new() -> Self {
        Self
    }
}

impl TransformRule for RemoveUselessCommentsRule {
    fn name(&self) -> &str {
        "remove_useless_comments"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Comments
    }

    fn description(&self) -> &str {
        "Remove useless comments"
    }

    fn apply(&self, buffer: &mut RefactorBuffer) -> Result<bool, String> {
        let prefix = buffer.language.comment_prefix();
        let mut changed = false;

        for line in buffer.lines.iter_mut() {
            let stripped = line.trim();
            if !stripped.starts_with(prefix) {
                continue;
            }

            let body = stripped[prefix.len()..].trim();
            if is_useless_comment_body(body) {
                line.clear();
                changed = true;
            }
        }

        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    #[test]
    fn test_marker_comments_blanked() {
        let source = "# TODO\nx = 1\n    # fixme";
        let mut buffer = RefactorBuffer::new(Language::Python, source);
        let changed = RemoveUselessCommentsRule::new().apply(&mut buffer).unwrap();
        assert!(changed);
        assert_eq!(buffer.lines, vec!["", "x = 1", ""]);
    }

    #[test]
    fn test_restatement_blanked() {
        let source = "// this function sorts the list\nfunction sortList() {}";
        let mut buffer = RefactorBuffer::new(Language::JavaScript, source);
        let changed = RemoveUselessCommentsRule::new().apply(&mut buffer).unwrap();
        assert!(changed);
        assert_eq!(buffer.lines[0], "");
    }

    #[test]
    fn test_meaningful_comment_kept() {
        let source = "# retry twice, the upstream API drops connections";
        let mut buffer = RefactorBuffer::new(Language::Python, source);
        let changed = RemoveUselessCommentsRule::new().apply(&mut buffer).unwrap();
        assert!(!changed);
        assert_eq!(buffer.lines[0], source);
    }

    #[test]
    fn test_wrong_prefix_ignored() {
        let mut buffer = RefactorBuffer::new(Language::JavaScript, "# todo");
        let changed = RemoveUselessCommentsRule::new().apply(&mut buffer).unwrap();
        assert!(!changed);
    }
}
