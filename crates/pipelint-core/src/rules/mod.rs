//! Lint checks

pub mod multiqc_config;

use crate::{context::LintContext, diagnostics::LintResult};

/// Trait for pipeline lint checks
pub trait LintCheck: Send + Sync {
    /// Name used in reports and in the `lint:` section of `.nf-core.yml`
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, ctx: &LintContext) -> LintResult;
}

/// Every registered check, in run order
pub fn all_checks() -> Vec<Box<dyn LintCheck>> {
    vec![Box::new(multiqc_config::MultiqcConfigCheck)]
}
