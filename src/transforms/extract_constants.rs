//! extract_constants: name the well-known magic numbers
//!
//! Rebuilds the buffer through an output builder instead of inserting into
//! the sequence being iterated: each original line is either copied,
//! rewritten, or preceded by a fresh declaration line. Lines that already
//! name one of the constants are left untouched, which keeps the rule
//! idempotent.

use std::collections::HashSet;

use regex::Regex;

use crate::language::BlockStyle;
use crate::models::RuleCategory;
use crate::transforms::base::{RefactorBuffer, TransformRule};

/// Literal -> suggested constant name
const MAGIC_CONSTANTS: &[(&str, &str)] = &[
    ("1000", "MAX_ITEMS"),
    ("100", "DEFAULT_TIMEOUT"),
    ("50", "MAX_RESULTS"),
    ("10", "DEFAULT_LIMIT"),
    ("5", "RETRY_COUNT"),
];

pub struct ExtractConstantsRule;

impl ExtractConstantsRule {
    pub fn new() -> Self {
        Self
    }

    fn declaration(style: BlockStyle, name: &str, literal: &str, indent: &str) -> String {
        match style {
            BlockStyle::Indentation => format!("{}{} = {}", indent, name, literal),
            BlockStyle::Braces => format!("{}const {} = {};", indent, name, literal),
        }
    }
}

impl TransformRule for ExtractConstantsRule {
    fn name(&self) -> &str {
        "extract_constants"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::MagicNumbers
    }

    fn description(&self) -> &str {
        "Extract magic numbers to constants"
    }

    fn apply(&self, buffer: &mut RefactorBuffer) -> Result<bool, String> {
        let patterns: Vec<(Regex, &str, &str)> = MAGIC_CONSTANTS
            .iter()
            .map(|(literal, name)| {
                Regex::new(&format!(r"\b{}\b", literal))
                    .map(|re| (re, *literal, *name))
                    .map_err(|e| format!("bad literal pattern {}: {}", literal, e))
            })
            .collect::<Result<_, _>>()?;

        let mut declared: HashSet<&str> = HashSet::new();
        let mut output = Vec::with_capacity(buffer.lines.len());
        let mut changed = false;

        for line in &buffer.lines {
            // a line that already names a constant is settled; recording it
            // also stops duplicate declarations on re-runs
            let named: Vec<&str> = MAGIC_CONSTANTS
                .iter()
                .map(|(_, name)| *name)
                .filter(|name| line.contains(name))
                .collect();
            if !named.is_empty() {
                declared.extend(named);
                output.push(line.clone());
                continue;
            }

            let mut rewritten = line.clone();
            for (pattern, literal, name) in &patterns {
                if !pattern.is_match(&rewritten) {
                    continue;
                }

                if !declared.contains(name) {
                    let indent: String = line
                        .chars()
                        .take_while(|c| c.is_whitespace())
                        .collect();
                    output.push(Self::declaration(
                        buffer.language.block_style(),
                        name,
                        literal,
                        &indent,
                    ));
                    declared.insert(name);
                }

                rewritten = pattern.replace_all(&rewritten, *name).into_owned();
                changed = true;
            }

            output.push(rewritten);
        }

        buffer.lines = output;
        Ok(changed)
    }
}
