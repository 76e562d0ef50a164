//! MultiQC config validation
//!
//! Checks `assets/multiqc_config.yml` for:
//! - section ordering of the software versions and workflow summary plugins
//! - the standard `report_comment` (can be ignored as `report_comment`)
//! - `export_plots: true`

use crate::{
    context::LintContext,
    diagnostics::LintResult,
    parsers::yaml::parse_yaml_file,
    rules::LintCheck,
    schemas::multiqc::{FieldError, MultiqcConfig},
};
use std::error::Error as _;
use thiserror::Error;

pub const CHECK_NAME: &str = "multiqc_config";

/// Config location relative to the workflow root
pub const CONFIG_PATH: &str = "assets/multiqc_config.yml";

/// Ignore-list entry that skips the comment check
pub const REPORT_COMMENT: &str = "report_comment";

const SOFTWARE_VERSIONS: &str = "software_versions";

/// First ordering requirement a config breaks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingViolation {
    #[error("'report_section_order' missing")]
    MissingSectionOrder,

    #[error("Section {0} missing in report_section_order")]
    MissingSection(String),

    #[error("Section {0} 'order' missing. Must be < 0")]
    MissingOrder(String),

    #[error("Section {0} 'order' must be < 0")]
    NonNegativeOrder(String),

    #[error("Section {0} should have the lowest order")]
    NotLowest(String),

    #[error("Section software_versions should have the second lowest order")]
    NotSecondLowest,

    #[error(transparent)]
    Structure(#[from] FieldError),
}

/// Name of the workflow summary section MultiQC renders for a pipeline
pub fn summary_plugin_name(ctx: &LintContext) -> String {
    format!("{}-{}-summary", ctx.pipeline_prefix, ctx.pipeline_name)
}

/// The `report_comment` every pipeline is expected to carry
pub fn expected_report_comment(pipeline_name: &str) -> String {
    format!(
        "This report has been generated by the <a href=\"https://github.com/nf-core/{name}\" \
         target=\"_blank\">nf-core/{name}</a> analysis pipeline. For information about how to \
         interpret these results, please see the <a href=\"https://nf-co.re/{name}\" \
         target=\"_blank\">documentation</a>.",
        name = pipeline_name
    )
}

/// Check that the summary and software versions sections come first.
///
/// Stops at the first violated requirement.
pub fn check_section_order(
    config: &MultiqcConfig,
    summary_plugin: &str,
) -> Result<(), OrderingViolation> {
    let sections = config
        .report_section_order()?
        .ok_or(OrderingViolation::MissingSectionOrder)?;

    for plugin in [SOFTWARE_VERSIONS, summary_plugin] {
        let entry = sections
            .entry(plugin)
            .ok_or_else(|| OrderingViolation::MissingSection(plugin.to_string()))?;
        let order = entry
            .order()?
            .ok_or_else(|| OrderingViolation::MissingOrder(plugin.to_string()))?;
        if order >= 0.0 {
            return Err(OrderingViolation::NonNegativeOrder(plugin.to_string()));
        }
    }

    // Orders of every section, not just the required two
    let orders = sections.orders()?;
    let summary_order = order_of(&orders, summary_plugin)?;
    let versions_order = order_of(&orders, SOFTWARE_VERSIONS)?;
    let others: Vec<f64> = orders
        .iter()
        .filter(|(name, _)| *name != summary_plugin)
        .map(|(_, order)| *order)
        .collect();

    if others.iter().any(|&order| order <= summary_order) {
        return Err(OrderingViolation::NotLowest(summary_plugin.to_string()));
    }
    if others.iter().any(|&order| order < versions_order) {
        return Err(OrderingViolation::NotSecondLowest);
    }

    Ok(())
}

fn order_of(orders: &[(&str, f64)], plugin: &str) -> Result<f64, OrderingViolation> {
    orders
        .iter()
        .find(|(name, _)| *name == plugin)
        .map(|(_, order)| *order)
        .ok_or_else(|| OrderingViolation::MissingOrder(plugin.to_string()))
}

fn report_comment_matches(config: &MultiqcConfig, pipeline_name: &str) -> bool {
    config
        .report_comment()
        .is_ok_and(|comment| comment.trim() == expected_report_comment(pipeline_name))
}

pub struct MultiqcConfigCheck;

impl LintCheck for MultiqcConfigCheck {
    fn name(&self) -> &'static str {
        CHECK_NAME
    }

    fn description(&self) -> &'static str {
        "MultiQC config orders the required sections first, carries the standard report comment and exports plots"
    }

    fn run(&self, ctx: &LintContext) -> LintResult {
        let path = ctx.wf_path.join(CONFIG_PATH);

        if !path.is_file() {
            tracing::debug!(path = %path.display(), "multiqc config not found");
            return LintResult::ignored(format!("'{}' not found", CONFIG_PATH));
        }

        let config = match parse_yaml_file(&path) {
            Ok(document) => MultiqcConfig::new(document),
            Err(e) => {
                let cause = e.source().map_or_else(|| e.to_string(), |s| s.to_string());
                return LintResult::failed(format!(
                    "Could not parse yaml file: {}, {}",
                    path.display(),
                    cause
                ));
            }
        };

        let mut result = LintResult::default();

        let summary_plugin = summary_plugin_name(ctx);
        match check_section_order(&config, &summary_plugin) {
            Ok(()) => result.pass(format!(
                "'{}' follows the ordering scheme of the minimally required plugins.",
                CONFIG_PATH
            )),
            Err(violation) => {
                tracing::debug!(%violation, "section ordering check failed");
                result.fail(format!(
                    "'{}' does not meet requirements: {}",
                    CONFIG_PATH, violation
                ));
            }
        }

        if ctx.ignored_items(CHECK_NAME).contains(REPORT_COMMENT) {
            tracing::debug!("report_comment check ignored by lint config");
        } else if report_comment_matches(&config, &ctx.pipeline_name) {
            result.pass(format!(
                "'{}' contains a matching 'report_comment'.",
                CONFIG_PATH
            ));
        } else {
            result.fail(format!(
                "'{}' does not contain a matching 'report_comment'.",
                CONFIG_PATH
            ));
        }

        if config.export_plots().unwrap_or(false) {
            result.pass(format!("'{}' contains 'export_plots: true'.", CONFIG_PATH));
        } else {
            result.fail(format!(
                "'{}' does not contain 'export_plots: true'.",
                CONFIG_PATH
            ));
        }

        result
    }
}
