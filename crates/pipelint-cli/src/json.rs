//! JSON output format support.
//!
//! Provides a simple, machine-readable JSON output format for pipeline reports.

use pipelint_core::diagnostics::PipelineReport;
use serde::Serialize;
use std::path::Path;

/// Root structure for JSON output.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// Version of pipelint that produced this output.
    pub version: String,
    /// One entry per linted pipeline, in argument order.
    pub pipelines: Vec<JsonPipeline>,
    /// Message counts over all pipelines.
    pub summary: JsonSummary,
}

#[derive(Debug, Serialize)]
pub struct JsonPipeline {
    /// Workflow path (forward slashes for cross-platform consistency).
    pub path: String,
    pub pipeline_name: String,
    pub checks: Vec<JsonCheck>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disabled: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct JsonCheck {
    pub check: String,
    pub passed: Vec<String>,
    pub failed: Vec<String>,
    pub ignored: Vec<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct JsonSummary {
    pub passed: usize,
    pub failed: usize,
    pub ignored: usize,
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Convert pipeline reports to JSON output format.
pub fn reports_to_json(reports: &[PipelineReport]) -> JsonOutput {
    let mut summary = JsonSummary::default();

    let pipelines = reports
        .iter()
        .map(|report| {
            summary.passed += report.passed_count();
            summary.failed += report.failed_count();
            summary.ignored += report.ignored_count();

            JsonPipeline {
                path: path_to_string(&report.wf_path),
                pipeline_name: report.pipeline_name.clone(),
                checks: report
                    .checks
                    .iter()
                    .map(|c| JsonCheck {
                        check: c.check.clone(),
                        passed: c.result.passed.clone(),
                        failed: c.result.failed.clone(),
                        ignored: c.result.ignored.clone(),
                    })
                    .collect(),
                disabled: report.disabled.clone(),
            }
        })
        .collect();

    JsonOutput {
        version: env!("CARGO_PKG_VERSION").to_string(),
        pipelines,
        summary,
    }
}
