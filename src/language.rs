//! Language profiles
//!
//! Each supported language exposes its lexical conventions through this
//! capability object so individual rules never branch on a language tag.
//! The engines are purely line/regex based; a profile describes how a
//! language delimits blocks and writes comments, nothing deeper.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// How a language delimits function and control bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    /// Bodies delimited by matching `{` / `}` tokens
    Braces,
    /// Bodies delimited by leading-whitespace depth
    Indentation,
}

/// Identifier convention a language expects at declaration sites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCase {
    Camel,
    Snake,
}

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
}

static BRACE_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(let|const|var|function)\s+([a-z][a-zA-Z0-9_]*)").unwrap()
});

static PYTHON_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(def|class)\s+([a-zA-Z_][a-zA-Z0-9_]*)").unwrap()
});

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        }
    }

    /// Infer the language from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext {
            "py" => Some(Language::Python),
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            "ts" | "tsx" => Some(Language::TypeScript),
            _ => None,
        }
    }

    pub fn block_style(&self) -> BlockStyle {
        match self {
            Language::Python => BlockStyle::Indentation,
            Language::JavaScript | Language::TypeScript => BlockStyle::Braces,
        }
    }

    pub fn expected_case(&self) -> NameCase {
        match self {
            Language::Python => NameCase::Snake,
            Language::JavaScript | Language::TypeScript => NameCase::Camel,
        }
    }

    /// Prefix that starts a full-line comment
    pub fn comment_prefix(&self) -> &'static str {
        match self {
            Language::Python => "#",
            Language::JavaScript | Language::TypeScript => "//",
        }
    }

    /// Keyword (with trailing space) that opens a function declaration
    pub fn function_keyword(&self) -> &'static str {
        match self {
            Language::Python => "def ",
            Language::JavaScript | Language::TypeScript => "function ",
        }
    }

    /// Declaration-site pattern: keyword capture group 1, identifier group 2
    pub fn declaration_regex(&self) -> &'static Regex {
        match self.block_style() {
            BlockStyle::Braces => &BRACE_DECLARATION,
            BlockStyle::Indentation => &PYTHON_DECLARATION,
        }
    }

    /// Control-flow keywords checked by the nesting-depth rule
    pub fn control_flow_keywords(&self) -> &'static [&'static str] {
        match self {
            Language::Python => &["if ", "for ", "while ", "with "],
            Language::JavaScript | Language::TypeScript => {
                &["if ", "for ", "while ", "switch "]
            }
        }
    }

    /// Extensions collected when the target is a directory
    pub fn source_extensions(&self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py"],
            Language::JavaScript => &["js", "jsx", "mjs", "cjs"],
            Language::TypeScript => &["ts", "tsx"],
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "javascript" | "js" => Ok(Language::JavaScript),
            "typescript" | "ts" => Ok(Language::TypeScript),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

/// Whether a trimmed line is a comment in any supported language.
/// Used by the duplication rule, which excludes comments regardless of the
/// active language; trimming first makes the check whitespace-tolerant.
pub fn is_any_comment(trimmed: &str) -> bool {
    trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with("/*")
        || trimmed.starts_with("*/")
}

/// Leading-whitespace width of a line
pub fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}
