//! noqa comment parsing and handling
//!
//! Supports inline comments to suppress rules on a line:
//! - `# noqa` / `// noqa` - suppress all rules on this line
//! - `# noqa: magicNumber` - suppress a specific rule
//! - `// noqa: lineLength, magicNumber` - suppress multiple rules

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static NOQA_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:#|//)\s*noqa(?:\s*:\s*([A-Za-z0-9_,\s]+))?").unwrap()
});

/// Parsed noqa directives for a file
#[derive(Debug, Default)]
pub struct NoqaDirectives {
    /// Lines where all rules are suppressed
    pub suppress_all: HashSet<usize>,
    /// Lines where specific rules are suppressed: line -> set of rule ids
    pub suppress_rules: HashMap<usize, HashSet<String>>,
}

impl NoqaDirectives {
    /// Parse noqa directives from source code
    pub fn parse(source: &str) -> Self {
        let mut directives = NoqaDirectives::default();

        for (line_num, line) in source.lines().enumerate() {
            let line_number = line_num + 1; // 1-indexed

            if let Some(caps) = NOQA_REGEX.captures(line) {
                if let Some(rules_match) = caps.get(1) {
                    let rules: HashSet<String> = rules_match
                        .as_str()
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect();

                    if !rules.is_empty() {
                        directives
                            .suppress_rules
                            .entry(line_number)
                            .or_default()
                            .extend(rules);
                    }
                } else {
                    directives.suppress_all.insert(line_number);
                }
            }
        }

        directives
    }

    /// Check if a rule is suppressed at a given line
    pub fn is_suppressed(&self, line: usize, rule_id: &str) -> bool {
        if self.suppress_all.contains(&line) {
            return true;
        }

        if let Some(rules) = self.suppress_rules.get(&line) {
            if rules.contains(rule_id) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_noqa_all() {
        let source = "\nvalue = compute()  # noqa\n";
        let directives = NoqaDirectives::parse(source);
        assert!(directives.suppress_all.contains(&2));
    }

    #[test]
    fn test_parse_noqa_specific() {
        let source = "\nlet total = 42;  // noqa: magicNumber\n";
        let directives = NoqaDirectives::parse(source);
        assert!(!directives.suppress_all.contains(&2));
        assert!(directives
            .suppress_rules
            .get(&2)
            .unwrap()
            .contains("magicNumber"));
    }

    #[test]
    fn test_parse_noqa_multiple() {
        let source = "\nx = 42  # noqa: magicNumber, lineLength\n";
        let directives = NoqaDirectives::parse(source);
        let rules = directives.suppress_rules.get(&2).unwrap();
        assert!(rules.contains("magicNumber"));
        assert!(rules.contains("lineLength"));
    }

    #[test]
    fn test_is_suppressed() {
        let source = "\nline1  # noqa\nline2  # noqa: magicNumber\nline3\n";
        let directives = NoqaDirectives::parse(source);

        assert!(directives.is_suppressed(2, "magicNumber"));
        assert!(directives.is_suppressed(2, "lineLength"));

        assert!(directives.is_suppressed(3, "magicNumber"));
        assert!(!directives.is_suppressed(3, "lineLength"));

        assert!(!directives.is_suppressed(4, "magicNumber"));
    }
}
