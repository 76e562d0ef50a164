//! # pipelint-core
//!
//! Lint checks for nf-core style pipelines.
//!
//! Validates:
//! - MultiQC configuration (`assets/multiqc_config.yml`)
//!
//! Checks read the pipeline through a [`LintContext`] and return a
//! [`LintResult`] of passed, failed and ignored messages. Sub-checks can be
//! skipped, and whole checks disabled, from the `lint:` section of
//! `.nf-core.yml`.

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod parsers;
pub mod rules;
pub mod schemas;

use rayon::prelude::*;

pub use config::LintConfig;
pub use context::{ContextOverrides, LintContext};
pub use diagnostics::{CheckReport, CoreResult, LintError, LintResult, PipelineReport};
pub use rules::{all_checks, LintCheck};

/// Run every enabled check against one pipeline
pub fn lint_pipeline(ctx: &LintContext) -> PipelineReport {
    let mut checks = Vec::new();
    let mut disabled = Vec::new();

    for check in all_checks() {
        if !ctx.lint_config.is_check_enabled(check.name()) {
            tracing::info!(check = check.name(), "check disabled by lint config");
            disabled.push(check.name().to_string());
            continue;
        }

        tracing::debug!(check = check.name(), wf_path = %ctx.wf_path.display(), "running check");
        let result = check.run(ctx);
        checks.push(CheckReport {
            check: check.name().to_string(),
            result,
        });
    }

    PipelineReport {
        wf_path: ctx.wf_path.clone(),
        pipeline_name: ctx.pipeline_name.clone(),
        checks,
        disabled,
    }
}

/// Lint several pipelines in parallel; reports keep the input order
pub fn lint_pipelines(contexts: &[LintContext]) -> Vec<PipelineReport> {
    contexts.par_iter().map(lint_pipeline).collect()
}
