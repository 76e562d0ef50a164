//! Shared context handed to every lint check

use crate::config::{LintConfig, ProjectConfig};
use crate::diagnostics::CoreResult;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Prefix used when neither the caller nor `.nf-core.yml` names one
pub const DEFAULT_PIPELINE_PREFIX: &str = "nf-core";

/// Read-only view of the pipeline being linted
#[derive(Debug, Clone)]
pub struct LintContext {
    pub wf_path: PathBuf,
    pub pipeline_name: String,
    pub pipeline_prefix: String,
    pub lint_config: LintConfig,
}

/// Values supplied by the caller that win over `.nf-core.yml`
#[derive(Debug, Clone, Default)]
pub struct ContextOverrides {
    pub pipeline_name: Option<String>,
    pub pipeline_prefix: Option<String>,
}

impl LintContext {
    pub fn new(
        wf_path: impl Into<PathBuf>,
        pipeline_name: impl Into<String>,
        pipeline_prefix: impl Into<String>,
        lint_config: LintConfig,
    ) -> Self {
        Self {
            wf_path: wf_path.into(),
            pipeline_name: pipeline_name.into(),
            pipeline_prefix: pipeline_prefix.into(),
            lint_config,
        }
    }

    /// Build the context for a workflow directory.
    ///
    /// The pipeline name comes from the overrides, then `template.name` in
    /// `.nf-core.yml`, then the directory name. The prefix falls back to
    /// `nf-core`.
    pub fn load(wf_path: &Path, overrides: &ContextOverrides) -> CoreResult<Self> {
        let project = ProjectConfig::discover(wf_path)?;
        let template = project.template.clone().unwrap_or_default();

        let pipeline_name = overrides
            .pipeline_name
            .clone()
            .or(template.name)
            .unwrap_or_else(|| directory_name(wf_path));
        let pipeline_prefix = overrides
            .pipeline_prefix
            .clone()
            .or(template.prefix)
            .unwrap_or_else(|| DEFAULT_PIPELINE_PREFIX.to_string());

        tracing::debug!(
            wf_path = %wf_path.display(),
            %pipeline_name,
            %pipeline_prefix,
            "lint context loaded"
        );

        Ok(Self::new(
            wf_path,
            pipeline_name,
            pipeline_prefix,
            project.lint_config(),
        ))
    }

    /// Sub-checks of `check` listed in the ignore configuration
    pub fn ignored_items(&self, check: &str) -> BTreeSet<&str> {
        self.lint_config.ignored_items(check)
    }
}

fn directory_name(path: &Path) -> String {
    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_name_from_directory() {
        let temp = TempDir::new().unwrap();
        let wf = temp.path().join("rnaseq");
        std::fs::create_dir_all(&wf).unwrap();

        let ctx = LintContext::load(&wf, &ContextOverrides::default()).unwrap();
        assert_eq!(ctx.pipeline_name, "rnaseq");
        assert_eq!(ctx.pipeline_prefix, DEFAULT_PIPELINE_PREFIX);
    }

    #[test]
    fn test_name_and_prefix_from_template() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(".nf-core.yml"),
            "template:\n  name: sarek\n  prefix: myorg\n",
        )
        .unwrap();

        let ctx = LintContext::load(temp.path(), &ContextOverrides::default()).unwrap();
        assert_eq!(ctx.pipeline_name, "sarek");
        assert_eq!(ctx.pipeline_prefix, "myorg");
    }

    #[test]
    fn test_overrides_win() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(".nf-core.yml"),
            "template:\n  name: sarek\n  prefix: myorg\n",
        )
        .unwrap();

        let overrides = ContextOverrides {
            pipeline_name: Some("quantms".to_string()),
            pipeline_prefix: Some("nf-core".to_string()),
        };
        let ctx = LintContext::load(temp.path(), &overrides).unwrap();
        assert_eq!(ctx.pipeline_name, "quantms");
        assert_eq!(ctx.pipeline_prefix, "nf-core");
    }

    #[test]
    fn test_ignore_list_reaches_context() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(".nf-core.yml"),
            "lint:\n  multiqc_config:\n    - report_comment\n",
        )
        .unwrap();

        let ctx = LintContext::load(temp.path(), &ContextOverrides::default()).unwrap();
        assert!(ctx.ignored_items("multiqc_config").contains("report_comment"));
    }

    #[test]
    fn test_nested_settings_for_other_checks_load() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(".nf-core.yml"),
            r#"lint:
  multiqc_config:
    - report_comment
  nextflow_config:
    - manifest.name
    - config_defaults:
        - params.input
"#,
        )
        .unwrap();

        let ctx = LintContext::load(temp.path(), &ContextOverrides::default()).unwrap();
        assert!(ctx.ignored_items("multiqc_config").contains("report_comment"));
        assert!(ctx.ignored_items("nextflow_config").contains("manifest.name"));
    }

    #[test]
    fn test_broken_project_config_is_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".nf-core.yml"), "lint: [unclosed\n").unwrap();

        assert!(LintContext::load(temp.path(), &ContextOverrides::default()).is_err());
    }
}
