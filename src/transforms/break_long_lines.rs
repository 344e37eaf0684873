//! break_long_lines: reflow lines over the length limit
//!
//! Best effort only. Brace languages break at a `+` concatenation; Python
//! moves the first parenthesized argument list onto its own indented
//! block. A line with no usable break point is left as it is.

use crate::language::{indent_width, BlockStyle, Language};
use crate::models::RuleCategory;
use crate::transforms::base::{RefactorBuffer, TransformRule};

const MAX_LINE_LENGTH: usize = 100;

/// Split one long line into its replacement lines. Returns the input
/// unchanged (as a single element) when no break point is found.
pub(crate) fn break_line(line: &str, language: Language) -> Vec<String> {
    match language.block_style() {
        BlockStyle::Braces => break_concatenation(line),
        BlockStyle::Indentation => break_call_arguments(line),
    }
}

fn break_concatenation(line: &str) -> Vec<String> {
    // template literals interpolate; splitting them would change meaning
    if !line.contains('+') || line.contains("template") || line.contains('`') {
        return vec![line.to_string()];
    }

    let parts: Vec<&str> = line.split('+').collect();
    if parts.len() < 2 {
        return vec![line.to_string()];
    }

    let spaces = " ".repeat(indent_width(line));
    let tail: Vec<&str> = parts[1..].iter().map(|p| p.trim()).collect();
    vec![
        format!("{} +", parts[0].trim_end()),
        format!("{}{}", spaces, tail.join(" + ")),
    ]
}

fn break_call_arguments(line: &str) -> Vec<String> {
    let open = match line.find('(') {
        Some(i) => i,
        None => return vec![line.to_string()],
    };
    let close = match line.rfind(')') {
        Some(i) if i > open => i,
        _ => return vec![line.to_string()],
    };

    let args = &line[open + 1..close];
    if args.trim().is_empty() {
        return vec![line.to_string()];
    }

    let indent = indent_width(line);
    let spaces = " ".repeat(indent);
    let arg_indent = " ".repeat(indent + 4);
    let reflowed: Vec<&str> = args.split(',').map(|a| a.trim()).collect();

    vec![
        format!("{}(", &line[..open]),
        format!("{}{}", arg_indent, reflowed.join(", ")),
        format!("{}){}", spaces, &line[close + 1..]),
    ]
}

pub struct BreakLongLinesRule;

impl BreakLongLinesRule {
    pub fn new() -> Self {
        Self
    }
}

impl TransformRule for BreakLongLinesRule {
    fn name(&self) -> &str {
        "break_long_lines"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Formatting
    }

    fn description(&self) -> &str {
        "Break long lines"
    }

    fn apply(&self, buffer: &mut RefactorBuffer) -> Result<bool, String> {
        let mut output = Vec::with_capacity(buffer.lines.len());
        let mut changed = false;

        for line in &buffer.lines {
            if line.chars().count() > MAX_LINE_LENGTH {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_concatenation_broken() {
        let line = format!("const msg = '{}' + name + '!';", "a".repeat(90));
        let mut buffer = RefactorBuffer::new(Language::JavaScript, &line);
        let changed = BreakLongLinesRule::new().apply(&mut buffer).unwrap();
        assert!(changed);
        assert_eq!(buffer.lines.len(), 2);
        assert!(buffer.lines[0].ends_with('+'));
        assert!(buffer.lines[1].contains("name + '!';"));
    }

    #[test]
    fn test_python_call_broken() {
        let line = format!(
            "    result = build_widget({}, mode, flags)",
            format!("'{}'", "a".repeat(80))
        );
        let mut buffer = RefactorBuffer::new(Language::Python, &line);
        let changed = BreakLongLinesRule::new().apply(&mut buffer).unwrap();
        assert!(changed);
        assert_eq!(buffer.lines.len(), 3);
        assert_eq!(buffer.lines[0], "    result = build_widget(");
        assert!(buffer.lines[1].starts_with("        "));
        assert_eq!(buffer.lines[2], "    )");
    }

    #[test]
    fn test_no_break_point_left_alone() {
        let line = "x".repeat(120);
        let mut buffer = RefactorBuffer::new(Language::Python, &line);
        let changed = BreakLongLinesRule::new().apply(&mut buffer).unwrap();
        assert!(!changed);
        assert_eq!(buffer.lines, vec![line]);
    }

    #[test]
    fn test_short_lines_untouched() {
        let mut buffer = RefactorBuffer::new(Language::JavaScript, "const a = b + c;");
        let changed = BreakLongLinesRule::new().apply(&mut buffer).unwrap();
        assert!(!changed);
    }
}
