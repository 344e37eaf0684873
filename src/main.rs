//! cleancode CLI

use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use cleancode_linter::language::Language;
use cleancode_linter::models::{AnalysisReport, Severity};
use cleancode_linter::{
    analyze_files_parallel, collect_source_files, config, logging, refactor, rules, stats,
};

#[derive(Parser, Debug)]
#[command(name = "cleancode")]
#[command(version, about = "Analyze and refactor source files against Clean Code conventions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report Clean Code violations in a file or directory
    Analyze {
        /// File or directory to analyze
        path: PathBuf,

        /// Source language: python, javascript, typescript (inferred from
        /// the file extension when omitted)
        #[arg(long)]
        language: Option<String>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        output_format: String,

        /// Enable specific rules (comma-separated, or "ALL")
        #[arg(long, value_delimiter = ',')]
        enable: Vec<String>,

        /// Disable specific rules (comma-separated)
        #[arg(long, value_delimiter = ',')]
        disable: Vec<String>,

        /// Exclude paths matching patterns
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Append a run record to this JSON Lines log
        #[arg(long)]
        log_file: Option<PathBuf>,

        /// Ignore cleancode.toml configuration
        #[arg(long)]
        no_config: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Apply Clean Code fixes to a file, keeping a timestamped backup
    Refactor {
        /// File to refactor in place
        path: PathBuf,

        /// Source language (inferred from the file extension when omitted)
        #[arg(long)]
        language: Option<String>,

        /// Specific rules to apply (comma-separated; default: all rules)
        #[arg(long, value_delimiter = ',')]
        rules: Vec<String>,

        /// List the rules that would run without touching any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Summarize past analysis runs from the log
    Stats {
        /// JSON Lines log written by `analyze --log-file`
        #[arg(long, default_value = ".cleancode/runs.jsonl")]
        log_file: PathBuf,

        /// Show runs per day
        #[arg(long)]
        trend: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            path,
            language,
            output_format,
            enable,
            disable,
            exclude,
            log_file,
            no_config,
            verbose,
        } => run_analyze(
            &path,
            language.as_deref(),
            &output_format,
            &enable,
            &disable,
            &exclude,
            log_file.as_deref(),
            no_config,
            verbose,
        ),
        Command::Refactor {
            path,
            language,
            rules,
            dry_run,
        } => run_refactor(&path, language.as_deref(), &rules, dry_run),
        Command::Stats { log_file, trend } => run_stats(&log_file, trend),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_analyze(
    path: &Path,
    language_arg: Option<&str>,
    output_format: &str,
    cli_enable: &[String],
    cli_disable: &[String],
    cli_exclude: &[String],
    log_file: Option<&Path>,
    no_config: bool,
    verbose: bool,
) -> ExitCode {
    let language = match language_arg {
        Some(s) => match Language::from_str(s) {
            Ok(l) => Some(l),
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                return ExitCode::from(1);
            }
        },
        None => None,
    };

    if !path.exists() {
        eprintln!("{} file not found: {}", "Error:".red(), path.display());
        return ExitCode::from(1);
    }

    let loaded_config = if no_config {
        None
    } else {
        config::find_config_file(path).and_then(|p| config::load_config(Some(&p)))
    };

    let (enabled_rules, exclude_patterns) =
        config::merge_config(loaded_config.as_ref(), cli_enable, cli_disable, cli_exclude);

    if verbose {
        eprintln!("Enabled rules: {:?}", enabled_rules);
        eprintln!("Exclude patterns: {:?}", exclude_patterns);
    }

    let active_rules = rules::get_enabled_rules(enabled_rules.as_deref());

    let files = collect_source_files(path, language, &exclude_patterns);
    if files.is_empty() {
        eprintln!("No source files found under {}", path.display());
        return ExitCode::SUCCESS;
    }

    if verbose {
        eprintln!("Found {} source file(s)", files.len());
    }

    let mut targets: Vec<(PathBuf, Language)> = Vec::with_capacity(files.len());
    for file in files {
        match language.or_else(|| Language::from_path(&file)) {
            Some(lang) => targets.push((file, lang)),
            None => {
                eprintln!(
                    "{} cannot infer language for {}; pass --language",
                    "Error:".red(),
                    file.display()
                );
                return ExitCode::from(1);
            }
        }
    }

    let results = analyze_files_parallel(&targets, &active_rules);

    let mut reports: Vec<AnalysisReport> = Vec::new();
    let mut fatal_errors = 0;
    for result in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                fatal_errors += 1;
            }
        }
    }

    // rule failures go to the warning channel, never into the report body
    for report in &reports {
        for d in &report.diagnostics {
            eprintln!(
                "{} rule {} skipped: {}",
                "Warning:".yellow(),
                d.rule_id,
                d.message
            );
        }
    }

    match output_format {
        "json" => print_json(&reports),
        _ => print_text(&reports),
    }

    if let Some(log_path) = log_file {
        let entry = logging::RunLogEntry::from_reports(&reports, enabled_rules.clone());
        match logging::RunLogger::new(&log_path.to_string_lossy()) {
            Ok(mut logger) => {
                if let Err(e) = logger.log(&entry) {
                    eprintln!("{} could not write run log: {}", "Warning:".yellow(), e);
                } else if verbose {
                    eprintln!("Run logged to {}", logger.log_path());
                }
            }
            Err(e) => eprintln!("{} could not open run log: {}", "Warning:".yellow(), e),
        }
    }

    if fatal_errors > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn print_text(reports: &[AnalysisReport]) {
    for report in reports {
        println!("\n{}", "Clean Code Analysis Report".bold());
        println!("File: {}", report.file_path);
        println!("Language: {}", report.language.as_str().to_uppercase());
        println!("Total Violations: {}\n", report.violations.len());

        if report.violations.is_empty() {
            println!("{}", "No Clean Code violations found!".green());
            continue;
        }

        for v in &report.violations {
            let tag = match v.severity {
                Severity::Error => "[ERROR]".red().bold(),
                Severity::Warning => "[WARN]".yellow().bold(),
                Severity::Info => "[INFO]".blue(),
            };
            println!("{} Line {}: {}", tag, v.line_number, v.description);
            println!("   Suggestion: {}", v.suggestion);
            println!("   Code: {}...\n", truncate(&v.code_snippet, 50));
        }
    }
}

fn print_json(reports: &[AnalysisReport]) {
    let documents: Vec<serde_json::Value> = reports.iter().map(report_to_json).collect();

    let output = if documents.len() == 1 {
        serde_json::to_string_pretty(&documents[0])
    } else {
        serde_json::to_string_pretty(&documents)
    };
    println!("{}", output.unwrap_or_default());
}

fn report_to_json(report: &AnalysisReport) -> serde_json::Value {
    serde_json::json!({
        "file": report.file_path,
        "language": report.language.as_str(),
        "total_violations": report.violations.len(),
        "violations": report.violations.iter().map(|v| serde_json::json!({
            "category": v.category.as_str(),
            "rule": v.rule_id,
            "severity": v.severity.to_string(),
            "line": v.line_number,
            "description": v.description,
            "suggestion": v.suggestion,
            "snippet": v.code_snippet,
        })).collect::<Vec<_>>(),
        "diagnostics": report.diagnostics.iter().map(|d| serde_json::json!({
            "rule": d.rule_id,
            "message": d.message,
        })).collect::<Vec<_>>(),
    })
}

fn run_refactor(
    path: &Path,
    language_arg: Option<&str>,
    rule_names: &[String],
    dry_run: bool,
) -> ExitCode {
    let language = match language_arg {
        Some(s) => match Language::from_str(s) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                return ExitCode::from(1);
            }
        },
        None => match Language::from_path(path) {
            Some(l) => l,
            None => {
                eprintln!(
                    "{} cannot infer language for {}; pass --language",
                    "Error:".red(),
                    path.display()
                );
                return ExitCode::from(1);
            }
        },
    };

    let rule_filter: Option<&[String]> = if rule_names.is_empty() {
        None
    } else {
        Some(rule_names)
    };

    if dry_run {
        println!(
            "Dry run - rules that would be applied to {}:",
            path.display()
        );
        let planned = refactor::plan(rule_filter);
        for (name, description) in &planned {
            println!("  {} {} - {}", "+".green(), name, description);
        }
        if let Some(requested) = rule_filter {
            for name in requested {
                if !planned.iter().any(|(n, _)| n == name) {
                    println!("  {} unknown rule: {}", "-".red(), name);
                }
            }
        }
        return ExitCode::SUCCESS;
    }

    let outcome = refactor::refactor_file(path, language, rule_filter);

    for d in &outcome.diagnostics {
        eprintln!(
            "{} rule {} skipped: {}",
            "Warning:".yellow(),
            d.rule_id,
            d.message
        );
    }

    if !outcome.success {
        eprintln!(
            "{} {}",
            "Refactoring failed:".red(),
            outcome.error.unwrap_or_default()
        );
        return ExitCode::from(1);
    }

    println!("{}", "Refactoring completed successfully!".green());
    println!("   Rules applied: {}", outcome.rules_applied.len());
    println!("   Net line change: {}", outcome.changes_count);

    if let Some(backup) = &outcome.backup_file {
        println!("   Backup saved to: {}", backup.display());
    }

    if !outcome.rules_applied.is_empty() {
        println!("   Rules applied:");
        for rule in &outcome.rules_applied {
            println!("     - {}", rule);
        }
    }

    ExitCode::SUCCESS
}

fn run_stats(log_file: &Path, trend: bool) -> ExitCode {
    let log_stats = match stats::LogStats::from_log_file(log_file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!(
                "{} failed to read log {}: {}",
                "Error:".red(),
                log_file.display(),
                e
            );
            return ExitCode::from(1);
        }
    };

    stats::print_stats(&log_stats);
    if trend {
        stats::print_trend(&log_stats);
    }

    ExitCode::SUCCESS
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
