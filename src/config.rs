//! Configuration handling for the composer

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the submission output directory
pub const OUTPUT_DIR_ENV: &str = "QUIZ_COMPOSER_OUTPUT_DIR";

const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_OUTPUT_DIR: &str = "submissions";

/// User configuration for the composer
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ComposerConfig {
    /// Directory accepted submissions are written to
    pub output_dir: Option<PathBuf>,
    /// Value pre-filled into the quiz language field
    pub default_language: Option<String>,
    /// Copy the form-encoded body to the clipboard after each accepted submission
    pub copy_on_submit: Option<bool>,
    /// Write logs to a file in the data directory instead of stderr
    pub log_to_file: Option<bool>,
}

impl ComposerConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "quiz-composer", "quiz-composer")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory the log file goes into
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                let config: ComposerConfig = serde_json::from_str(&content)
                    .with_context(|| format!("parsing {}", path.display()))?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Resolved output directory: environment, then config, then `./submissions`
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir_with_env(std::env::var(OUTPUT_DIR_ENV).ok())
    }

    fn output_dir_with_env(&self, env_value: Option<String>) -> PathBuf {
        env_value
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    pub fn language(&self) -> &str {
        self.default_language
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn copy_on_submit(&self) -> bool {
        self.copy_on_submit.unwrap_or(false)
    }

    pub fn log_to_file(&self) -> bool {
        self.log_to_file.unwrap_or(true)
    }
}
