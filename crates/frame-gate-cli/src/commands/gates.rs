//! Gates command - show the gate sequence and effective thresholds.

use anyhow::Result;
use clap::Args;
use frame_gate_core::{GateKey, GateThresholds, Language, Messages};
use serde_json::json;

use super::compare::{parse_language, OutputFormat};
use crate::config::AppConfig;

/// Arguments for the gates command
#[derive(Args)]
pub struct GatesArgs {
    /// Message language for gate names (en, ko)
    #[arg(long, value_parser = parse_language)]
    pub language: Option<Language>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Run the gates command.
pub fn run(args: &GatesArgs, config: &AppConfig) -> Result<()> {
    let messages = Messages::new(args.language.or_else(|| config.language()).unwrap_or_default());
    let thresholds = config.thresholds();

    let rendered = match args.format {
        OutputFormat::Text => render_text(&thresholds, &messages),
        OutputFormat::Json => serde_json::to_string_pretty(&render_json(&thresholds, &messages))?,
    };
    println!("{rendered}");
    Ok(())
}

fn render_text(thresholds: &GateThresholds, messages: &Messages) -> String {
    GateKey::ORDER
        .iter()
        .map(|&gate| {
            let threshold = thresholds
                .for_gate(gate)
                .map_or_else(|| "-".to_string(), |t| format!("{t:.0}"));
            let role = if gate.is_blocking() { "blocking" } else { "advisory" };
            format!(
                "{}. {:<12} {:<14} {:>4}  {role}",
                gate.index() + 1,
                gate.as_str(),
                messages.gate_name(gate),
                threshold
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_json(thresholds: &GateThresholds, messages: &Messages) -> serde_json::Value {
    GateKey::ORDER
        .iter()
        .map(|&gate| {
            json!({
                "gate": gate,
                "name": messages.gate_name(gate),
                "threshold": thresholds.for_gate(gate),
                "blocking": gate.is_blocking(),
            })
        })
        .collect()
}
