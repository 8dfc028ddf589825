//! framecut - CLI tool to compute window-frame cut lists.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use framecut_core::config::round_to;
use framecut_core::transform::{piece_count, total_required_length};
use framecut_core::{
    generate_report, optimize_job, parse_job_file, validate, CutSummary, Job, PackedProfile,
};

/// Output format for the cut list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable cut list
    Text,
    /// Profiles and summary as JSON
    Json,
}

/// Compute cut lists for window frames from standard-length profiles.
#[derive(Parser, Debug)]
#[command(name = "framecut")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input job file (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Blade size in the profile's unit; enables kerf accounting
    #[arg(long)]
    kerf: Option<f64>,

    /// Validate only, don't compute a cut list
    #[arg(long)]
    validate: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// JSON document written with `--format json`.
#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    profiles: &'a [PackedProfile],
    summary: &'a CutSummary,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Processing: {}", args.input.display());

    let mut job = parse_job_file(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    apply_overrides(&mut job, &args);

    info!("{}", job_overview(&job));

    // Validate-only mode
    if args.validate {
        validate(&job.frames, &job.profile).context("Validation failed")?;
        info!("Validation passed");
        return Ok(());
    }

    let rendered = run(&job, args.format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Apply command-line settings on top of the job file.
fn apply_overrides(job: &mut Job, args: &Args) {
    if let Some(kerf) = args.kerf {
        if job.profile.include_blade_size && job.profile.blade_size != kerf {
            warn!(
                "Overriding blade size {} from job file with {}",
                job.profile.blade_size, kerf
            );
        }
        job.profile.blade_size = kerf;
        job.profile.include_blade_size = true;
    }
}

/// One-line description of a loaded job, lengths in the profile's unit.
fn job_overview(job: &Job) -> String {
    let unit = job.profile.unit;
    let required = round_to(
        total_required_length(&job.frames, unit),
        unit.display_decimals(),
    );
    format!(
        "Loaded {} frame(s), {} piece(s), total required length {}{}, stock {}{}",
        job.frames.len(),
        piece_count(&job.frames),
        required,
        unit,
        job.profile.length,
        unit
    )
}

/// Optimize a job and render the result.
fn run(job: &Job, format: OutputFormat) -> Result<String> {
    let profiles = optimize_job(job).context("Optimization failed")?;
    let summary = CutSummary::from_profiles(&profiles);

    info!(
        "{} profile(s) used, waste {:.1}%",
        summary.total_profiles, summary.waste_percentage
    );

    let rendered = match format {
        OutputFormat::Text => generate_report(&profiles, &summary),
        OutputFormat::Json => {
            let output = JsonOutput {
                profiles: &profiles,
                summary: &summary,
            };
            let mut json = serde_json::to_string_pretty(&output)?;
            json.push('\n');
            json
        }
    };

    Ok(rendered)
}
