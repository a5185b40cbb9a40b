//! Static pipeline configuration.
//!
//! Fixed once a [`GatePipeline`](crate::pipeline::GatePipeline) is built;
//! nothing here changes between runs.

use serde::{Deserialize, Serialize};

use crate::domain::GateKey;
use crate::text::Language;

/// Pass thresholds for the four scored gates (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateThresholds {
    /// Aspect ratio threshold.
    pub aspect_ratio: f64,
    /// Framing threshold.
    pub framing: f64,
    /// Composition threshold.
    pub composition: f64,
    /// Compression threshold.
    pub compression: f64,
}

impl Default for GateThresholds {
    fn default() -> Self {
        Self {
            aspect_ratio: 90.0,
            framing: 70.0,
            composition: 75.0,
            compression: 80.0,
        }
    }
}

impl GateThresholds {
    /// Threshold for a gate; `None` for the unscored pose gate.
    #[must_use]
    pub const fn for_gate(&self, gate: GateKey) -> Option<f64> {
        match gate {
            GateKey::AspectRatio => Some(self.aspect_ratio),
            GateKey::Framing => Some(self.framing),
            GateKey::Composition => Some(self.composition),
            GateKey::Compression => Some(self.compression),
            GateKey::Pose => None,
        }
    }
}

/// Zoom steps offered by a camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Device name as given by the caller.
    pub name: String,
    /// Available zoom multipliers, ascending.
    pub zoom_steps: Vec<f64>,
}

impl DeviceProfile {
    /// Creates a profile.
    #[must_use]
    pub fn new(name: impl Into<String>, zoom_steps: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            zoom_steps,
        }
    }
}

/// Known devices and their zoom steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCatalog {
    devices: Vec<DeviceProfile>,
    fallback: DeviceProfile,
}

impl Default for DeviceCatalog {
    fn default() -> Self {
        Self {
            devices: vec![
                DeviceProfile::new("iPhone", vec![0.5, 1.0, 2.0, 3.0, 5.0]),
                DeviceProfile::new("Galaxy", vec![0.6, 1.0, 3.0, 10.0]),
            ],
            fallback: DeviceProfile::new("generic", vec![0.5, 1.0, 2.0, 3.0, 5.0]),
        }
    }
}

impl DeviceCatalog {
    /// Looks up a device by name (case-insensitive), falling back to the generic profile.
    #[must_use]
    pub fn resolve(&self, name: &str) -> &DeviceProfile {
        self.devices
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .unwrap_or(&self.fallback)
    }

    /// Names of the known devices, generic last.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.devices
            .iter()
            .chain(std::iter::once(&self.fallback))
            .map(|d| d.name.as_str())
    }
}

/// Everything a pipeline needs besides its collaborators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GateConfig {
    /// Pass thresholds.
    pub thresholds: GateThresholds,
    /// Language of every generated message.
    pub language: Language,
    /// Zoom step tables.
    pub devices: DeviceCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = GateThresholds::default();
        assert_eq!(t.for_gate(GateKey::AspectRatio), Some(90.0));
        assert_eq!(t.for_gate(GateKey::Framing), Some(70.0));
        assert_eq!(t.for_gate(GateKey::Composition), Some(75.0));
        assert_eq!(t.for_gate(GateKey::Compression), Some(80.0));
        assert_eq!(t.for_gate(GateKey::Pose), None);
    }

    #[test]
    fn test_device_lookup() {
        let catalog = DeviceCatalog::default();
        assert_eq!(catalog.resolve("Galaxy").zoom_steps, vec![0.6, 1.0, 3.0, 10.0]);
        assert_eq!(catalog.resolve("iphone").name, "iPhone");
        assert_eq!(catalog.resolve("GALAXY").name, "Galaxy");
        let unknown = catalog.resolve("pixel");
        assert_eq!(unknown.name, "generic");
        assert_eq!(unknown.zoom_steps, vec![0.5, 1.0, 2.0, 3.0, 5.0]);
    }

    #[test]
    fn test_device_names() {
        let catalog = DeviceCatalog::default();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["iPhone", "Galaxy", "generic"]);
    }
}
