//! Detector rules for cleancode-linter

pub mod base;

// Rule implementations, one per category
pub mod comments;
pub mod complexity;
pub mod design_patterns;
pub mod duplication;
pub mod error_handling;
pub mod formatting;
pub mod functions;
pub mod magic_numbers;
pub mod naming;
pub mod testability;

use base::DetectRule;

/// Get all available rules, in registration order
pub fn get_all_rules() -> Vec<Box<dyn DetectRule>> {
    vec![
        Box::new(naming::NamingConventionRule::new()),
        Box::new(functions::FunctionLengthRule::new()),
        Box::new(comments::UselessCommentRule::new()),
        Box::new(formatting::FormattingRule::new()),
        Box::new(error_handling::ErrorHandlingRule::new()),
        Box::new(duplication::DuplicateCodeRule::new()),
        Box::new(complexity::DeepNestingRule::new()),
        Box::new(testability::HardcodedDependencyRule::new()),
        Box::new(design_patterns::TooManyClassesRule::new()),
        Box::new(magic_numbers::MagicNumberRule::new()),
    ]
}

/// Get all available rule ids
pub fn get_all_rule_ids() -> Vec<String> {
    get_all_rules()
        .iter()
        .map(|rule| rule.rule_id().to_string())
        .collect()
}

/// Get rules filtered by enabled ids; `None` keeps the full set
pub fn get_enabled_rules(enabled_ids: Option<&[String]>) -> Vec<Box<dyn DetectRule>> {
    let all_rules = get_all_rules();

    match enabled_ids {
        Some(ids) => all_rules
            .into_iter()
            .filter(|rule| ids.contains(&rule.rule_id().to_string()))
            .collect(),
        None => all_rules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules_loaded() {
        let rules = get_all_rules();
        assert_eq!(rules.len(), 10);

        let rule_ids: Vec<_> = rules.iter().map(|r| r.rule_id()).collect();
        assert!(rule_ids.contains(&"naming"));
        assert!(rule_ids.contains(&"functions"));
        assert!(rule_ids.contains(&"comments"));
        assert!(rule_ids.contains(&"formatting"));
        assert!(rule_ids.contains(&"error_handling"));
        assert!(rule_ids.contains(&"duplication"));
        assert!(rule_ids.contains(&"complexity"));
        assert!(rule_ids.contains(&"testability"));
        assert!(rule_ids.contains(&"design_patterns"));
        assert!(rule_ids.contains(&"magic_numbers"));
    }

    #[test]
    fn test_get_enabled_rules() {
        let enabled = vec!["naming".to_string(), "formatting".to_string()];
        let rules = get_enabled_rules(Some(&enabled));
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let enabled = vec!["naming".to_string(), "nonexistent".to_string()];
        let rules = get_enabled_rules(Some(&enabled));
        assert_eq!(rules.len(), 1);
    }
}
