//! pipelint CLI - lint nf-core style pipelines

mod json;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use pipelint_core::{
    all_checks, lint_pipelines, ContextOverrides, LintContext, PipelineReport,
};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pipelint")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Lint nf-core style pipelines",
    long_about = "Run pipeline lint checks against one or more workflow directories.\n\nChecks: MultiQC config"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pipeline directories to lint (defaults to current directory)
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Pipeline name (defaults to template.name in .nf-core.yml, then the directory name)
    #[arg(long, global = true)]
    name: Option<String>,

    /// Pipeline prefix used in the summary section name
    #[arg(long, global = true)]
    prefix: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also print passed tests
    #[arg(long, global = true)]
    show_passed: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint pipeline directories
    Lint {
        /// Pipeline directories to lint
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,
    },

    /// List available checks
    Checks,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Some(Commands::Lint { paths }) => lint_command(paths, &cli),
        Some(Commands::Checks) => checks_command(),
        None => lint_command(&cli.paths, &cli),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // RUST_LOG wins when set; logs go to stderr so JSON on stdout stays parseable
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn lint_command(paths: &[PathBuf], cli: &Cli) -> anyhow::Result<()> {
    if cli.name.is_some() && paths.len() > 1 {
        bail!("--name can only be used when linting a single pipeline");
    }

    let overrides = ContextOverrides {
        pipeline_name: cli.name.clone(),
        pipeline_prefix: cli.prefix.clone(),
    };

    let contexts = paths
        .iter()
        .map(|path| {
            if !path.is_dir() {
                bail!("Pipeline directory not found: {}", path.display());
            }
            LintContext::load(path, &overrides)
                .with_context(|| format!("Failed to load lint context for {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let reports = lint_pipelines(&contexts);

    match cli.format {
        OutputFormat::Json => {
            let output = json::reports_to_json(&reports);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => print_text(&reports, cli.show_passed),
    }

    // Exit with error code if needed
    if reports.iter().any(PipelineReport::has_failures) {
        process::exit(1);
    }

    Ok(())
}

fn print_text(reports: &[PipelineReport], show_passed: bool) {
    for report in reports {
        println!(
            "{} {} ({})",
            "Linting:".cyan().bold(),
            report.wf_path.display(),
            report.pipeline_name
        );

        for check in &report.checks {
            if show_passed {
                for message in &check.result.passed {
                    println!("  {} {}: {}", "✓".green().bold(), check.check.dimmed(), message);
                }
            }
            for message in &check.result.ignored {
                println!("  {} {}: {}", "?".yellow().bold(), check.check.dimmed(), message);
            }
            for message in &check.result.failed {
                println!("  {} {}: {}", "✗".red().bold(), check.check.dimmed(), message);
            }
        }

        for name in &report.disabled {
            println!("  {} {}: disabled in lint config", "-".dimmed(), name.dimmed());
        }
        println!();
    }

    let passed: usize = reports.iter().map(PipelineReport::passed_count).sum();
    let failed: usize = reports.iter().map(PipelineReport::failed_count).sum();
    let ignored: usize = reports.iter().map(PipelineReport::ignored_count).sum();

    // Summary
    println!("{}", "─".repeat(60).dimmed());
    if failed == 0 {
        println!("{}", "✓ No failed tests".green().bold());
    }
    println!("{} passed, {} failed, {} ignored", passed, failed, ignored);
}

fn checks_command() -> anyhow::Result<()> {
    for check in all_checks() {
        println!("{}  {}", check.name().cyan().bold(), check.description());
    }
    Ok(())
}
