//! fix_naming: rewrite declaration-site identifiers to the language's case
//!
//! Brace languages get camelCase, Python gets snake_case. The two
//! conversions are deliberately not exact inverses: `to_camel_case`
//! collapses consecutive underscores and capitalization it cannot see,
//! so `my_Var` -> `myVar` -> `my_var`. Round trips are stable only for
//! names already in one of the two canonical forms.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::language::NameCase;
use crate::models::RuleCategory;
use crate::transforms::base::{RefactorBuffer, TransformRule};

static BRACE_VAR_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(let|const|var)\s+([a-z][a-zA-Z0-9_]*)").unwrap());

static BRACE_FUNC_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bfunction\s+([a-z][a-zA-Z0-9_]*)").unwrap());

static PYTHON_DEF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bdef\s+([a-z][a-zA-Z0-9_]*)").unwrap());

static PYTHON_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bclass\s+([A-Z][a-zA-Z0-9_]*)").unwrap());

/// snake_case -> camelCase: split on underscores, capitalize the tail segments
pub fn to_camel_case(snake: &str) -> String {
    let mut parts = snake.split('_');
    let mut result = parts.next().unwrap_or("").to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.extend(chars.flat_map(|c| c.to_lowercase()));
        }
    }
    result
}

/// camelCase -> snake_case: underscore before each internal uppercase letter
pub fn to_snake_case(camel: &str) -> String {
    let mut result = String::with_capacity(camel.len() + 4);
    for (i, c) in camel.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}

pub struct FixNamingRule;

impl FixNamingRule {
    pub fn new() -> Self {
        Self
    }
}

impl TransformRule for FixNamingRule {
    fn name(&self) -> &str {
        "fix_naming"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Naming
    }

    fn description(&self) -> &str {
        "Fix naming conventions"
    }

    fn apply(&self, buffer: &mut RefactorBuffer) -> Result<bool, String> {
        let mut changed = false;

        for line in buffer.lines.iter_mut() {
            let rewritten = match buffer.language.expected_case() {
                NameCase::Camel => {
                    let pass = BRACE_VAR_DECL.replace_all(line, |caps: &Captures| {
                        format!("{} {}", &caps[1], to_camel_case(&caps[2]))
                    });
                    BRACE_FUNC_DECL
                        .replace_all(&pass, |caps: &Captures| {
                            format!("function {}", to_camel_case(&caps[1]))
                        })
                        .into_owned()
                }
                NameCase::Snake => {
                    let pass = PYTHON_DEF.replace_all(line, |caps: &Captures| {
                        format!("def {}", to_snake_case(&caps[1]))
                    });
                    PYTHON_CLASS
                        .replace_all(&pass, |caps: &Captures| {
                            format!("class {}", to_snake_case(&caps[1]))
                        })
                        .into_owned()
                }
            };

            if rewritten != *line {
                *line = rewritten;
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
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("my_var_name"), "myVarName");
        assert_eq!(to_camel_case("single"), "single");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("myVarName"), "my_var_name");
        assert_eq!(to_snake_case("single"), "single");
    }

    #[test]
    fn test_round_trip_asymmetry() {
        // canonical forms survive the round trip
        assert_eq!(to_snake_case(&to_camel_case("my_var_name")), "my_var_name");
        // mixed forms do not: the conversions are not exact inverses
        assert_eq!(to_camel_case("my_Var"), "myVar");
        assert_eq!(to_snake_case("myVar"), "my_var");
    }

    #[test]
    fn test_js_declarations_rewritten() {
        let mut buffer = RefactorBuffer::new(
            Language::JavaScript,
            "const user_name = 'x';\nfunction fetch_user() {}",
        );
        let changed = FixNamingRule::new().apply(&mut buffer).unwrap();
        assert!(changed);
        assert_eq!(buffer.lines[0], "const userName = 'x';");
        assert_eq!(buffer.lines[1], "function fetchUser() {}");
    }

    #[test]
    fn test_python_declarations_rewritten() {
        let mut buffer =
            RefactorBuffer::new(Language::Python, "def fetchData():\n    return 1");
        let changed = FixNamingRule::new().apply(&mut buffer).unwrap();
        assert!(changed);
        assert_eq!(buffer.lines[0], "def fetch_data():");
    }

    #[test]
    fn test_clean_input_unchanged() {
        let mut buffer = RefactorBuffer::new(Language::Python, "def fetch_data():\n    pass");
        let changed = FixNamingRule::new().apply(&mut buffer).unwrap();
        assert!(!changed);
    }
}
