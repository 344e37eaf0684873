//! improve_error_handling: give swallowed errors a name and a log line
//!
//! Brace languages: a parameterless `catch ()` gains an `error` binding and
//! a `console.error` as the new first body line. Python: `except:` followed
//! by `pass` becomes `except Exception as e:` with the `pass` replaced by a
//! logging call at the same indentation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::language::{indent_width, BlockStyle};
use crate::models::RuleCategory;
use crate::transforms::base::{RefactorBuffer, TransformRule};

static EMPTY_CATCH: Lazy<Regex> = Lazy::new(|| Regex::new(r"catch\s*\(\s*\)\s*\{").unwrap());

pub struct ImproveErrorHandlingRule;

impl ImproveErrorHandlingRule {
    pub fn new() -> Self {
        Self
    }
}

impl TransformRule for ImproveErrorHandlingRule {
    fn name(&self) -> &str {
        "improve_error_handling"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::ErrorHandling
    }

    fn description(&self) -> &str {
        "Improve error handling"
    }

    fn apply(&self, buffer: &mut RefactorBuffer) -> Result<bool, String> {
        let mut output = Vec::with_capacity(buffer.lines.len());
        let mut changed = false;

        match buffer.language.block_style() {
            BlockStyle::Braces => {
                for line in &buffer.lines {
                    if EMPTY_CATCH.is_match(line) {
                        let indent = " ".repeat(indent_width(line) + 4);
                        output.push(EMPTY_CATCH.replace(line, "catch (error) {").into_owned());
                        output.push(format!("{}console.error('Error:', error);", indent));
                        changed = true;
                    } else {
                        output.push(line.clone());
                    }
                }
            }
            BlockStyle::Indentation => {
                let mut i = 0;
                while i < buffer.lines.len() {
                    let line = &buffer.lines[i];
                    let next_is_pass = buffer
                        .lines
                        .get(i + 1)
                        .map(|n| n.trim() == "pass")
                        .unwrap_or(false);

                    if line.trim() == "except:" && next_is_pass {
                        let body = &buffer.lines[i + 1];
                        let body_indent = " ".repeat(indent_width(body));
                        output.push(line.replace("except:", "except Exception as e:"));
                        output.push(format!("{}logger.error(f'Error: {{e}}')", body_indent));
                        changed = true;
                        i += 2;
                    } else {
                        output.push(line.clone());
                        i += 1;
                    }
                }
            }
        }

        buffer.lines = output;
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    #[test]
    fn test_js_empty_catch_rewritten() {
        let source = "try {\n    run();\n} catch () {\n}";
        let mut buffer = RefactorBuffer::new(Language::JavaScript, source);
        let changed = ImproveErrorHandlingRule::new().apply(&mut buffer).unwrap();
        assert!(changed);
        assert_eq!(buffer.lines[2], "} catch (error) {");
        assert_eq!(buffer.lines[3], "    console.error('Error:', error);");
        assert_eq!(buffer.lines[4], "}");
    }

    #[test]
    fn test_python_bare_except_pass_rewritten() {
        let source = "try:\n    run()\nexcept:\n    pass";
        let mut buffer = RefactorBuffer::new(Language::Python, source);
        let changed = ImproveErrorHandlingRule::new().apply(&mut buffer).unwrap();
        assert!(changed);
        assert_eq!(buffer.lines[2], "except Exception as e:");
        assert_eq!(buffer.lines[3], "    logger.error(f'Error: {e}')");
    }

    #[test]
    fn test_named_except_untouched() {
        let source = "try:\n    run()\nexcept ValueError:\n    pass";
        let mut buffer = RefactorBuffer::new(Language::Python, source);
        let changed = ImproveErrorHandlingRule::new().apply(&mut buffer).unwrap();
        assert!(!changed);
        assert_eq!(buffer.to_content(), source);
    }

    #[test]
    fn test_bare_except_with_real_body_untouched() {
        let source = "try:\n    run()\nexcept:\n    retry()";
        let mut buffer = RefactorBuffer::new(Language::Python, source);
        let changed = ImproveErrorHandlingRule::new().apply(&mut buffer).unwrap();
        assert!(!changed);
    }
}
