//! Galaxy options with TOML preset support.
//!
//! Every tweakable setting (phase timing, color stops, drift, field shape)
//! is consolidated here. Options serialize to/from TOML for presets stored in
//! `assets/presets/`.

mod colors;
mod drift;
mod field;
mod phase;

use std::path::Path;

pub use colors::ColorOptions;
pub use drift::DriftOptions;
pub use field::FieldOptions;
pub use phase::PhaseOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GalaxyError;
use crate::galaxy::GalaxyPhaseEvaluator;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[colors]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Phase window and easing.
    pub phase: PhaseOptions,
    /// Radial color gradient.
    pub colors: ColorOptions,
    /// Per-axis drift tuning.
    #[schemars(skip)]
    pub drift: DriftOptions,
    /// Generated particle disc.
    pub field: FieldOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GalaxyError> {
        let content = std::fs::read_to_string(path).map_err(GalaxyError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| GalaxyError::OptionsParse(e.to_string()))?;
        options.validate()?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GalaxyError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GalaxyError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GalaxyError::Io)?;
        }
        std::fs::write(path, content).map_err(GalaxyError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Check field and color parameters.
    ///
    /// A phase window with `duration <= env_start` is accepted (it evaluates
    /// as an inverted ramp or a step) but logged, since it is rarely
    /// intended.
    pub fn validate(&self) -> Result<(), GalaxyError> {
        if self.phase.window().is_degenerate() {
            log::warn!(
                "phase window is degenerate (env_start {} >= duration {}); \
                 progress will ramp backwards or step",
                self.phase.env_start,
                self.phase.duration
            );
        }
        let c = &self.colors;
        if !(c.inner_radius.is_finite() && c.outer_radius.is_finite())
            || c.inner_radius <= 0.0
            || c.outer_radius <= c.inner_radius
        {
            return Err(GalaxyError::InvalidField(format!(
                "color stop radii must satisfy 0 < inner < outer, got {} and {}",
                c.inner_radius, c.outer_radius
            )));
        }
        self.field.validate()
    }

    /// Build the per-particle evaluator these options describe.
    #[must_use]
    pub fn evaluator(&self) -> GalaxyPhaseEvaluator {
        GalaxyPhaseEvaluator::new(self.phase.window(), self.colors.stops())
            .with_drift(self.drift.drift())
            .with_easing(self.phase.easing)
    }
}
