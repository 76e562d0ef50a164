//! Check results and error reporting

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub type CoreResult<T> = Result<T, LintError>;

/// Outcome of a single lint check.
///
/// Each list keeps messages in the order the check produced them. A check
/// that could not find its input only populates `ignored`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintResult {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub passed: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignored: Vec<String>,
}

impl LintResult {
    /// Result holding a single ignored message and nothing else
    pub fn ignored(message: impl Into<String>) -> Self {
        Self {
            ignored: vec![message.into()],
            ..Self::default()
        }
    }

    /// Result holding a single failure and nothing else
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            failed: vec![message.into()],
            ..Self::default()
        }
    }

    pub fn pass(&mut self, message: impl Into<String>) {
        self.passed.push(message.into());
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.failed.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.passed.is_empty() && self.failed.is_empty() && self.ignored.is_empty()
    }
}

/// Result of one named check inside a pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub check: String,
    #[serde(flatten)]
    pub result: LintResult,
}

/// All check results for one pipeline directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub wf_path: PathBuf,
    pub pipeline_name: String,
    pub checks: Vec<CheckReport>,
    /// Checks switched off with `<check>: false` in the lint config
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled: Vec<String>,
}

impl PipelineReport {
    pub fn passed_count(&self) -> usize {
        self.checks.iter().map(|c| c.result.passed.len()).sum()
    }

    pub fn failed_count(&self) -> usize {
        self.checks.iter().map(|c| c.result.failed.len()).sum()
    }

    pub fn ignored_count(&self) -> usize {
        self.checks.iter().map(|c| c.result.ignored.len()).sum()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }
}

/// Linter errors
#[derive(Error, Debug)]
pub enum LintError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML in {path}: {source}")]
    YamlParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid lint configuration in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}
