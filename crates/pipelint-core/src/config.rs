//! Linter configuration loaded from a pipeline's `.nf-core.yml`

use crate::diagnostics::{CoreResult, LintError};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// File names searched in the workflow root, in order
pub const PROJECT_CONFIG_FILES: &[&str] = &[".nf-core.yml", ".nf-core.yaml"];

/// Contents of `.nf-core.yml` relevant to linting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub lint: Option<LintConfig>,

    #[serde(default)]
    pub template: Option<TemplateConfig>,
}

/// Pipeline template metadata written by the nf-core tooling
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub prefix: Option<String>,
}

/// Per-check settings from the `lint:` section.
///
/// ```yaml
/// lint:
///   multiqc_config:
///     - report_comment
///   nextflow_config:
///     - manifest.name
///     - config_defaults:
///         - params.input
///   files_exist: false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LintConfig {
    pub checks: BTreeMap<String, CheckSetting>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckSetting {
    /// `false` switches the whole check off
    Enabled(bool),
    /// Sub-checks to skip. Items are names, or mappings carrying
    /// check-specific options
    Ignore(Vec<Value>),
    /// Any other check-specific setting
    Other(Value),
}

impl LintConfig {
    /// Ignore a single sub-check of `check`
    pub fn ignore(&mut self, check: &str, item: &str) {
        let setting = self
            .checks
            .entry(check.to_string())
            .or_insert_with(|| CheckSetting::Ignore(Vec::new()));
        match setting {
            CheckSetting::Ignore(items) => {
                if !items.iter().any(|i| i.as_str() == Some(item)) {
                    items.push(Value::from(item));
                }
            }
            CheckSetting::Enabled(_) | CheckSetting::Other(_) => {
                *setting = CheckSetting::Ignore(vec![Value::from(item)])
            }
        }
    }

    /// A check runs unless it is explicitly set to `false`
    pub fn is_check_enabled(&self, check: &str) -> bool {
        !matches!(self.checks.get(check), Some(CheckSetting::Enabled(false)))
    }

    /// Sub-checks of `check` the pipeline asked to skip
    pub fn ignored_items(&self, check: &str) -> BTreeSet<&str> {
        match self.checks.get(check) {
            Some(CheckSetting::Ignore(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => BTreeSet::new(),
        }
    }

    pub fn is_ignored(&self, check: &str, item: &str) -> bool {
        self.ignored_items(check).contains(item)
    }
}

impl ProjectConfig {
    /// Load config from file
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LintError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|e| LintError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Locate the project config in a workflow root
    pub fn find(wf_path: &Path) -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(|name| wf_path.join(name))
            .find(|p| p.is_file())
    }

    /// Load the project config of a workflow, or the default when it has none
    pub fn discover(wf_path: &Path) -> CoreResult<Self> {
        match Self::find(wf_path) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading project config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn lint_config(&self) -> LintConfig {
        self.lint.clone().unwrap_or_default()
    }
}
