//! Run logging for cleancode-linter
//!
//! Appends one JSON Lines record per analysis run so results can be
//! studied later by the stats module.

use crate::models::{AnalysisReport, Severity};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// A single log entry representing one analysis run
#[derive(Debug, Serialize, Deserialize)]
pub struct RunLogEntry {
    /// Unix timestamp of when the run happened
    pub timestamp: u64,
    /// ISO 8601 formatted date string
    pub datetime: String,
    /// Total number of files scanned
    pub files_scanned: usize,
    /// Total number of violations found
    pub total_violations: usize,
    /// Number of errors
    pub error_count: usize,
    /// Number of warnings
    pub warning_count: usize,
    /// Number of info messages
    pub info_count: usize,
    /// Individual violations
    pub violations: Vec<ViolationLogEntry>,
    /// Enabled rules for this run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_rules: Option<Vec<String>>,
}

/// Log entry for a single violation
#[derive(Debug, Serialize, Deserialize)]
pub struct ViolationLogEntry {
    /// Category name (e.g., formatting)
    pub category: String,
    /// Rule id (e.g., trailingWhitespace)
    pub rule_id: String,
    /// File the violation was found in
    pub file_path: String,
    /// 1-based line number
    pub line: usize,
    /// Severity level
    pub severity: String,
    /// Violation description
    pub description: String,
    /// Source excerpt (truncated if too long)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl RunLogEntry {
    /// Create a new log entry from analysis reports
    pub fn from_reports(reports: &[AnalysisReport], enabled_rules: Option<Vec<String>>) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let timestamp = now.as_secs();
        let datetime = format_datetime(timestamp);

        let mut violations = Vec::new();
        let mut error_count = 0;
        let mut warning_count = 0;
        let mut info_count = 0;

        for report in reports {
            for v in &report.violations {
                match v.severity {
                    Severity::Error => error_count += 1,
                    Severity::Warning => warning_count += 1,
                    Severity::Info => info_count += 1,
                }

                violations.push(ViolationLogEntry {
                    category: v.category.to_string(),
                    rule_id: v.rule_id.clone(),
                    file_path: report.file_path.clone(),
                    line: v.line_number,
                    severity: v.severity.to_string(),
                    description: v.description.clone(),
                    snippet: if v.code_snippet.is_empty() {
                        None
                    } else {
                        Some(truncate_snippet(&v.code_snippet, 200))
                    },
                });
            }
        }

        let files_scanned = reports.len();
        let total_violations = violations.len();

        Self {
            timestamp,
            datetime,
            files_scanned,
            total_violations,
            error_count,
            warning_count,
            info_count,
            violations,
            enabled_rules,
        }
    }
}

/// Logger that appends run entries to a file
pub struct RunLogger {
    writer: BufWriter<File>,
    log_path: String,
}

impl RunLogger {
    /// Create a logger appending to the given file, creating parents as
    /// needed
    pub fn new(log_path: &str) -> std::io::Result<Self> {
        let path = Path::new(log_path);

        if let Some(parent) = path.parent() {
            if !parent.exists() && !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            log_path: log_path.to_string(),
        })
    }

    /// Append one run entry
    pub fn log(&mut self, entry: &RunLogEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()
    }

    pub fn log_path(&self) -> &str {
        &self.log_path
    }
}

/// Format a unix timestamp as ISO 8601 datetime string
fn format_datetime(timestamp: u64) -> String {
    use std::time::Duration;
    let d = UNIX_EPOCH + Duration::from_secs(timestamp);
    let datetime: chrono::DateTime<chrono::Utc> = chrono::DateTime::from(d);
    datetime.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

fn truncate_snippet(snippet: &str, max_len: usize) -> String {
    if snippet.chars().count() > max_len {
        let cut: String = snippet.chars().take(max_len).collect();
        format!("{}...", cut)
    } else {
        snippet.to_string()
    }
}
