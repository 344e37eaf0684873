//! Transformation engine
//!
//! Seeds a line buffer from the target file, runs the selected transformers
//! in registration order, and persists the result behind a timestamped
//! backup. One invocation treats read, mutate, backup, write as a single
//! logical unit; concurrent invocations against the same path are out of
//! scope and not locked against.

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::language::Language;
use crate::models::{RefactorOutcome, RuleDiagnostic};
use crate::transforms::base::{RefactorBuffer, TransformRule};
use crate::transforms::get_selected_transforms;

/// Refactor a file in place.
///
/// `rule_names` limits which transformers run; unknown names are ignored.
/// Failures come back as a result object so the rules applied before the
/// failure can still be reported.
pub fn refactor_file(
    path: &Path,
    language: Language,
    rule_names: Option<&[String]>,
) -> RefactorOutcome {
    let original = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            return RefactorOutcome::failed(
                format!("Failed to read {}: {}", path.display(), e),
                Vec::new(),
            )
        }
    };

    let transforms = get_selected_transforms(rule_names);
    let mut buffer = RefactorBuffer::new(language, &original);
    let lines_before = buffer.lines.len() as i64;

    let (rules_applied, diagnostics) = run_transforms(&mut buffer, &transforms);

    if rules_applied.is_empty() {
        let mut outcome = RefactorOutcome::unchanged();
        outcome.diagnostics = diagnostics;
        return outcome;
    }

    let lines_after = buffer.lines.len() as i64;
    let backup_path = backup_path_for(path);

    if let Err(e) = fs::write(&backup_path, &original) {
        return RefactorOutcome::failed(
            format!("Failed to write backup {}: {}", backup_path.display(), e),
            rules_applied,
        );
    }
    if let Err(e) = fs::write(path, buffer.to_content()) {
        return RefactorOutcome::failed(
            format!("Failed to write {}: {}", path.display(), e),
            rules_applied,
        );
    }

    RefactorOutcome {
        success: true,
        rules_applied,
        backup_file: Some(backup_path),
        changes_count: lines_after - lines_before,
        error: None,
        diagnostics,
    }
}

/// Run transformers over a buffer, isolating per-rule failures
pub(crate) fn run_transforms(
    buffer: &mut RefactorBuffer,
    transforms: &[Box<dyn TransformRule>],
) -> (Vec<String>, Vec<RuleDiagnostic>) {
    let mut rules_applied = Vec::new();
    let mut diagnostics = Vec::new();

    for rule in transforms {
        match rule.apply(buffer) {
            Ok(true) => rules_applied.push(rule.name().to_string()),
            Ok(false) => {}
            Err(message) => diagnostics.push(RuleDiagnostic {
                rule_id: rule.name().to_string(),
                message,
            }),
        }
    }

    (rules_applied, diagnostics)
}

/// The rules a refactor call would run, without performing any I/O
pub fn plan(rule_names: Option<&[String]>) -> Vec<(String, String)> {
    get_selected_transforms(rule_names)
        .iter()
        .map(|rule| (rule.name().to_string(), rule.description().to_string()))
        .collect()
}

fn backup_path_for(path: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("{}.backup.{}", path.display(), stamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RuleCategory;
    use tempfile::TempDir;

    struct FailingRule;

    impl TransformRule for FailingRule {
        fn name(&self) -> &str {
            "always_fails"
        }

        fn category(&self) -> RuleCategory {
            RuleCategory::Formatting
        }

        fn description(&self) -> &str {
            "A rule that always fails"
        }

        fn apply(&self, _buffer: &mut RefactorBuffer) -> Result<bool, String> {
            Err("boom".to_string())
        }
    }

    #[test]
    fn test_backup_before_write() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("script.py");
        let original = "x = 1   \ny = 2\n";
        fs::write(&target, original).unwrap();

        let outcome = refactor_file(&target, Language::Python, None);
        assert!(outcome.success);
        assert!(outcome
            .rules_applied
            .contains(&"remove_trailing_whitespace".to_string()));

        let backup = outcome.backup_file.expect("backup must exist");
        assert_eq!(fs::read_to_string(&backup).unwrap(), original);
        assert_ne!(fs::read_to_string(&target).unwrap(), original);
    }

    #[test]
    fn test_no_change_no_backup() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("clean.py");
        let original = "def fetch_data():\n    return 1\n";
        fs::write(&target, original).unwrap();

        let outcome = refactor_file(&target, Language::Python, None);
        assert!(outcome.success);
        assert!(outcome.rules_applied.is_empty());
        assert!(outcome.backup_file.is_none());
        assert_eq!(outcome.changes_count, 0);
        assert_eq!(fs::read_to_string(&target).unwrap(), original);
    }

    #[test]
    fn test_missing_file_fails_with_result() {
        let outcome = refactor_file(Path::new("/no/such/file.py"), Language::Python, None);
        assert!(!outcome.success);
        assert!(outcome.error.is_some());
        assert!(outcome.rules_applied.is_empty());
    }

    #[test]
    fn test_explicit_rule_subset() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("script.py");
        fs::write(&target, "limit = 50   \n").unwrap();

        let rules = vec!["remove_trailing_whitespace".to_string()];
        let outcome = refactor_file(&target, Language::Python, Some(&rules));
        assert!(outcome.success);
        assert_eq!(outcome.rules_applied, vec!["remove_trailing_whitespace"]);
        // extract_constants was not selected, the literal stays
        assert_eq!(fs::read_to_string(&target).unwrap(), "limit = 50\n");
    }

    #[test]
    fn test_failing_rule_isolated() {
        let mut buffer = RefactorBuffer::new(Language::Python, "x = 1   \n");
        let transforms: Vec<Box<dyn TransformRule>> = vec![
            Box::new(FailingRule),
            Box::new(crate::transforms::remove_trailing_whitespace::RemoveTrailingWhitespaceRule::new()),
        ];

        let (applied, diagnostics) = run_transforms(&mut buffer, &transforms);
        assert_eq!(applied, vec!["remove_trailing_whitespace"]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule_id, "always_fails");
        assert_eq!(buffer.to_content(), "x = 1\n");
    }

    #[test]
    fn test_net_line_delta() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("script.py");
        fs::write(&target, "limit = 50\n").unwrap();

        let rules = vec!["extract_constants".to_string()];
        let outcome = refactor_file(&target, Language::Python, Some(&rules));
        assert!(outcome.success);
        assert_eq!(outcome.changes_count, 1); // one declaration line inserted
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "MAX_RESULTS = 50\nlimit = MAX_RESULTS\n"
        );
    }

    #[test]
    fn test_plan_lists_rules_without_io() {
        let all = plan(None);
        assert_eq!(all.len(), 7);

        let names = vec!["fix_naming".to_string(), "bogus".to_string()];
        let subset = plan(Some(&names));
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].0, "fix_naming");
    }
}
