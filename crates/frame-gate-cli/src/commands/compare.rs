//! Compare command - run the gates on a current photo against a reference.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use frame_gate_adapters::{analysis_path, FsImageLoader, RecordedAnalysis, SidecarKeypoints};
use frame_gate_core::{
    Evaluation, ExecutionPolicy, GateConfig, GatePipeline, GateSession, GateThresholds, Language,
    Messages, ReportOutput,
};
use tracing::{debug, info};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{JsonOutput, TextOutput};

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Machine-readable JSON result
    #[default]
    Json,
    /// Human-readable report
    Text,
}

/// Parse and validate a threshold value (0-100).
fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in 0..=100"))
    }
}

pub(crate) fn parse_language(s: &str) -> Result<Language, String> {
    s.parse()
}

/// Shared arguments for comparing two images.
#[derive(Args, Clone, Default)]
pub struct CompareArgs {
    /// Photo to evaluate
    pub current: Option<PathBuf>,

    /// Reference photo to match
    pub reference: Option<PathBuf>,

    /// Recorded framing/margin/compression analysis
    /// [default: <CURRENT stem>.analysis.json]
    #[arg(long, value_name = "FILE")]
    pub analysis: Option<PathBuf>,

    /// Keypoints for the current photo [default: <stem>.keypoints.json]
    #[arg(long, value_name = "FILE")]
    pub keypoints_current: Option<PathBuf>,

    /// Keypoints for the reference photo [default: <stem>.keypoints.json]
    #[arg(long, value_name = "FILE")]
    pub keypoints_reference: Option<PathBuf>,

    /// Camera profile for zoom hints (iPhone, Galaxy, generic; case-insensitive)
    #[arg(long)]
    pub device: Option<String>,

    /// Message language (en, ko)
    #[arg(long, value_parser = parse_language)]
    pub language: Option<Language>,

    /// Run every gate instead of stopping at the first failure
    #[arg(long)]
    pub evaluate_all: bool,

    /// Aspect ratio pass threshold (0-100)
    #[arg(long, value_parser = parse_threshold)]
    pub aspect_threshold: Option<f64>,

    /// Framing pass threshold (0-100)
    #[arg(long, value_parser = parse_threshold)]
    pub framing_threshold: Option<f64>,

    /// Composition pass threshold (0-100)
    #[arg(long, value_parser = parse_threshold)]
    pub composition_threshold: Option<f64>,

    /// Compression pass threshold (0-100)
    #[arg(long, value_parser = parse_threshold)]
    pub compression_threshold: Option<f64>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,

    /// Thresholds from config files (populated by `with_config`, not from CLI).
    #[arg(skip)]
    config_thresholds: Option<GateThresholds>,
}

impl CompareArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        args.language = args.language.or_else(|| config.language());
        if args.device.is_none() {
            args.device.clone_from(&config.general.device);
        }
        if !args.evaluate_all {
            args.evaluate_all = config.general.evaluate_all.unwrap_or(false);
        }

        if args.format.is_none() {
            args.format = config
                .output
                .format
                .as_ref()
                .and_then(|s| match s.as_str() {
                    "json" => Some(OutputFormat::Json),
                    "text" => Some(OutputFormat::Text),
                    _ => None,
                });
        }
        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }

        args.config_thresholds = Some(config.thresholds());
        args
    }

    /// Effective thresholds: CLI flags over config over defaults.
    pub fn thresholds(&self) -> GateThresholds {
        let base = self.config_thresholds.unwrap_or_default();
        GateThresholds {
            aspect_ratio: self.aspect_threshold.unwrap_or(base.aspect_ratio),
            framing: self.framing_threshold.unwrap_or(base.framing),
            composition: self.composition_threshold.unwrap_or(base.composition),
            compression: self.compression_threshold.unwrap_or(base.compression),
        }
    }

    fn device(&self) -> &str {
        self.device.as_deref().unwrap_or("generic")
    }

    const fn policy(&self) -> ExecutionPolicy {
        ExecutionPolicy::from_stop_on_fail(!self.evaluate_all)
    }

    fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn gate_config(&self) -> GateConfig {
        GateConfig {
            thresholds: self.thresholds(),
            language: self.language.unwrap_or_default(),
            ..GateConfig::default()
        }
    }
}

/// Run the compare command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
pub fn run(args: &CompareArgs) -> Result<ExitCode> {
    let (Some(current), Some(reference)) = (&args.current, &args.reference) else {
        anyhow::bail!("Both CURRENT and REFERENCE images are required");
    };
    let current_path = current.to_string_lossy();
    let reference_path = reference.to_string_lossy();
    info!("Comparing {current_path} against {reference_path}");

    let analysis_file = args
        .analysis
        .clone()
        .unwrap_or_else(|| analysis_path(current));
    let analysis = RecordedAnalysis::from_file(&analysis_file)
        .context("Framing analysis is required (see --analysis)")?;

    let mut keypoints = SidecarKeypoints::new();
    if let Some(ref file) = args.keypoints_current {
        keypoints = keypoints.with_override(current_path.to_string(), file.clone());
    }
    if let Some(ref file) = args.keypoints_reference {
        keypoints = keypoints.with_override(reference_path.to_string(), file.clone());
    }

    let config = args.gate_config();
    debug!(
        thresholds = ?config.thresholds,
        language = config.language.code(),
        device = args.device(),
        "effective configuration"
    );
    let messages = Messages::new(config.language);

    let session = GateSession::new(
        Box::new(FsImageLoader::new()),
        Box::new(keypoints),
        Box::new(analysis.clone()),
        GatePipeline::new(config, Box::new(analysis.clone()), Box::new(analysis)),
    );

    let evaluation = session.evaluate(
        &current_path,
        &reference_path,
        args.device(),
        args.policy(),
    );

    let output: Box<dyn ReportOutput> = match args.format() {
        OutputFormat::Json => Box::new(JsonOutput::stdout(args.pretty)),
        OutputFormat::Text => Box::new(TextOutput::stdout(messages)),
    };
    output.write(&evaluation)?;
    output.flush()?;

    Ok(exit_code(&evaluation))
}

/// Exit code for an evaluation.
fn exit_code(evaluation: &Evaluation) -> ExitCode {
    match evaluation {
        Evaluation::Failed(_) => ExitCode::Error,
        Evaluation::Completed(result) if result.status.is_blocked() => ExitCode::Blocked,
        Evaluation::Completed(_) => ExitCode::Passed,
    }
}
