//! Configuration loading for cleancode-linter
//!
//! Loads configuration from a `cleancode.toml` found by walking up from
//! the analysis target. CLI flags take precedence over the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::rules::get_all_rule_ids;

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct Config {
    /// Rules to enable (empty means all rules, or use ["ALL"])
    #[serde(default)]
    pub enable: Vec<String>,

    /// Rules to disable
    #[serde(default)]
    pub disable: Vec<String>,

    /// Paths to exclude when the target is a directory
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Find cleancode.toml starting from a path and walking up
pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
    let mut current = if start_path.is_file() {
        start_path.parent()?
    } else {
        start_path
    };

    loop {
        let candidate = current.join("cleancode.toml");
        if candidate.exists() {
            return Some(candidate);
        }

        current = current.parent()?;
    }
}

/// Load configuration from cleancode.toml
pub fn load_config(path: Option<&Path>) -> Option<Config> {
    let config_path = match path {
        Some(p) if p.exists() => p.to_path_buf(),
        Some(_) => return None,
        None => find_config_file(&std::env::current_dir().ok()?)?,
    };

    let content = std::fs::read_to_string(&config_path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge command line arguments with config file settings
/// CLI arguments take precedence
pub fn merge_config(
    config: Option<&Config>,
    cli_enable: &[String],
    cli_disable: &[String],
    cli_exclude: &[String],
) -> (Option<Vec<String>>, Vec<String>) {
    let mut enable = None;
    let mut exclude = vec![];

    // Start with config file settings
    if let Some(cfg) = config {
        if !cfg.enable.is_empty() && cli_enable.is_empty() && cli_disable.is_empty() {
            if cfg.enable.contains(&"ALL".to_string()) {
                enable = Some(subtract(get_all_rule_ids(), &cfg.disable));
            } else {
                enable = Some(cfg.enable.clone());
            }
        } else if !cfg.disable.is_empty() && cli_enable.is_empty() && cli_disable.is_empty() {
            enable = Some(subtract(get_all_rule_ids(), &cfg.disable));
        }

        exclude.extend(cfg.exclude.iter().cloned());
    }

    // Apply CLI overrides
    if !cli_enable.is_empty() {
        if cli_enable.contains(&"ALL".to_string()) {
            enable = Some(subtract(get_all_rule_ids(), cli_disable));
        } else {
            enable = Some(cli_enable.to_vec());
        }
    } else if !cli_disable.is_empty() {
        enable = Some(subtract(get_all_rule_ids(), cli_disable));
    }

    exclude.extend(cli_exclude.iter().cloned());

    // Add default excludes
    let defaults = [
        ".git",
        "node_modules",
        "__pycache__",
        ".venv",
        "venv",
        "dist",
        "build",
        "target",
        ".pytest_cache",
        ".mypy_cache",
    ];
    for default in defaults {
        if !exclude.contains(&default.to_string()) {
            exclude.push(default.to_string());
        }
    }

    (enable, exclude)
}

fn subtract(all: Vec<String>, removed: &[String]) -> Vec<String> {
    all.into_iter().filter(|r| !removed.contains(r)).collect()
}
