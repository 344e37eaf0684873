//! cleancode-linter: a heuristic linter and refactorer for Clean Code
//! conventions
//!
//! The engines work on raw text and line structure only, with no parsing.
//! Detection turns one file into a sorted violation list; transformation
//! rewrites a file in place behind a timestamped backup.

pub mod config;
pub mod error;
pub mod language;
pub mod logging;
pub mod models;
pub mod noqa;
pub mod refactor;
pub mod rules;
pub mod stats;
pub mod transforms;

use error::AnalyzeError;
use language::Language;
use models::{AnalysisReport, RuleContext, RuleDiagnostic};
use noqa::NoqaDirectives;
use rayon::prelude::*;
use rules::base::DetectRule;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Analyze a single file and return the report
pub fn analyze_file(
    file_path: &Path,
    language: Language,
    rules: &[Box<dyn DetectRule>],
) -> Result<AnalysisReport, AnalyzeError> {
    if !file_path.exists() {
        return Err(AnalyzeError::NotFound {
            path: file_path.to_path_buf(),
        });
    }

    let source = std::fs::read_to_string(file_path).map_err(|e| AnalyzeError::Io {
        path: file_path.to_path_buf(),
        source: e,
    })?;

    Ok(analyze_source(
        &file_path.to_string_lossy(),
        &source,
        language,
        rules,
    ))
}

/// Analyze source text and return the report
///
/// Violations come back sorted by severity rank then line number; the sort
/// is stable, so ties keep rule-registration order. A rule that fails is
/// skipped and surfaces as a diagnostic, never as a missing report.
pub fn analyze_source(
    file_path: &str,
    source: &str,
    language: Language,
    rules: &[Box<dyn DetectRule>],
) -> AnalysisReport {
    let lines: Vec<&str> = source.split('\n').collect();
    let directives = NoqaDirectives::parse(source);
    let mut report = AnalysisReport::new(file_path.to_string(), language);

    let context = RuleContext {
        content: source,
        lines: &lines,
        language,
    };

    for rule in rules {
        match rule.check(&context) {
            Ok(violations) => {
                for v in violations {
                    let suppressed = directives.is_suppressed(v.line_number, &v.rule_id)
                        || directives.is_suppressed(v.line_number, rule.rule_id());
                    if !suppressed {
                        report.violations.push(v);
                    }
                }
            }
            Err(message) => report.diagnostics.push(RuleDiagnostic {
                rule_id: rule.rule_id().to_string(),
                message,
            }),
        }
    }

    report
        .violations
        .sort_by_key(|v| (v.severity.rank(), v.line_number));

    report
}

/// Collect source files from a path
///
/// A file target is taken as-is. A directory is walked for the language's
/// extensions (every supported extension when no language is fixed),
/// skipping excluded components.
pub fn collect_source_files(
    root: &Path,
    language: Option<Language>,
    exclude_patterns: &[String],
) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    let extensions: Vec<&str> = match language {
        Some(lang) => lang.source_extensions().to_vec(),
        None => [Language::Python, Language::JavaScript, Language::TypeScript]
            .iter()
            .flat_map(|l| l.source_extensions().iter().copied())
            .collect(),
    };

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !should_exclude(e.path(), exclude_patterns))
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .and_then(|e| e.to_str())
                .map_or(false, |e| extensions.contains(&e))
        {
            files.push(path.to_path_buf());
        }
    }

    files
}

fn should_exclude(path: &Path, patterns: &[String]) -> bool {
    for pattern in patterns {
        if let Some(name) = path.file_name() {
            if let Some(name_str) = name.to_str() {
                if name_str == pattern || name_str.contains(pattern.as_str()) {
                    return true;
                }
            }
        }
        for component in path.components() {
            if let Some(comp_str) = component.as_os_str().to_str() {
                if comp_str == pattern {
                    return true;
                }
            }
        }
    }
    false
}

/// Analyze multiple files in parallel
///
/// Each entry carries its already-resolved language; files are independent
/// of one another, so the batch preserves per-file determinism.
pub fn analyze_files_parallel(
    files: &[(PathBuf, Language)],
    rules: &[Box<dyn DetectRule>],
) -> Vec<Result<AnalysisReport, AnalyzeError>> {
    files
        .par_iter()
        .map(|(file, language)| analyze_file(file, *language, rules))
        .collect()
}
