//! Configuration file support for frame-gate.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/frame-gate/config.toml` (lowest priority)
//! - Project-local: `.frame-gate.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use frame_gate_core::{GateThresholds, Language};
use serde::Deserialize;
use tracing::{debug, info};

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// Gate pass thresholds.
    pub gates: GatesConfig,
    /// Output formatting settings.
    pub output: OutputConfig,
}

/// General configuration options.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Message language: "en" or "ko".
    pub language: Option<String>,
    /// Camera profile used for zoom step hints.
    pub device: Option<String>,
    /// Run every gate instead of stopping at the first failure.
    pub evaluate_all: Option<bool>,
}

/// Gate threshold overrides (0-100).
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GatesConfig {
    /// Aspect ratio threshold.
    pub aspect_ratio: Option<f64>,
    /// Framing threshold.
    pub framing: Option<f64>,
    /// Composition threshold.
    pub composition: Option<f64>,
    /// Compression threshold.
    pub compression: Option<f64>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "json" or "text".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/frame-gate/config.toml`
    /// 2. Project-local: `.frame-gate.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are logged as warnings.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        if let Err(e) = config.validate() {
            eprintln!("warning: {e}");
        }

        config
    }

    /// Validate configuration values are within acceptable ranges.
    fn validate(&self) -> Result<(), String> {
        let gates = [
            ("gates.aspect_ratio", self.gates.aspect_ratio),
            ("gates.framing", self.gates.framing),
            ("gates.composition", self.gates.composition),
            ("gates.compression", self.gates.compression),
        ];
        for (key, value) in gates {
            if let Some(t) = value {
                if !(0.0..=100.0).contains(&t) {
                    return Err(format!("{key} must be 0-100, got {t}"));
                }
            }
        }

        if let Some(ref lang) = self.general.language {
            lang.parse::<Language>()
                .map_err(|e| format!("general.language: {e}"))?;
        }

        if let Some(ref f) = self.output.format {
            if f != "json" && f != "text" {
                return Err(format!("output.format must be 'json' or 'text', got '{f}'"));
            }
        }

        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        // General
        self.general.language = other
            .general
            .language
            .or_else(|| self.general.language.take());
        self.general.device = other.general.device.or_else(|| self.general.device.take());
        self.general.evaluate_all = other.general.evaluate_all.or(self.general.evaluate_all);

        // Gates
        self.gates.aspect_ratio = other.gates.aspect_ratio.or(self.gates.aspect_ratio);
        self.gates.framing = other.gates.framing.or(self.gates.framing);
        self.gates.composition = other.gates.composition.or(self.gates.composition);
        self.gates.compression = other.gates.compression.or(self.gates.compression);

        // Output
        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
    }

    /// Thresholds from this config layered over the built-in defaults.
    ///
    /// Out-of-range values were already reported by `validate` and are
    /// ignored here.
    pub fn thresholds(&self) -> GateThresholds {
        let defaults = GateThresholds::default();
        let pick = |value: Option<f64>, fallback: f64| {
            value
                .filter(|t| (0.0..=100.0).contains(t))
                .unwrap_or(fallback)
        };
        GateThresholds {
            aspect_ratio: pick(self.gates.aspect_ratio, defaults.aspect_ratio),
            framing: pick(self.gates.framing, defaults.framing),
            composition: pick(self.gates.composition, defaults.composition),
            compression: pick(self.gates.compression, defaults.compression),
        }
    }

    /// Configured language, if set and recognized.
    pub fn language(&self) -> Option<Language> {
        self.general
            .language
            .as_deref()
            .and_then(|l| l.parse().ok())
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("frame-gate").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.frame-gate.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(".frame-gate.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}
