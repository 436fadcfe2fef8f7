//! Core configuration for loadburst-core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while validating or loading a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config json parse error: {0}")]
    Parse(String),
    #[error("{field} must be finite and > 0 (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("particle_count must be > 0")]
    ZeroParticles,
    #[error("loader_frames must be > 0")]
    ZeroLoaderFrames,
    #[error("particle duration range invalid: min {min} .. max {max}")]
    BadDurationRange { min: f32, max: f32 },
    #[error("particle_exit_margin must be finite (got {0})")]
    BadExitMargin(f32),
}

/// Sizing and timing knobs for the animation. Defaults reproduce the
/// original 512x350 instance; hosts override per view.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Logical view size in surface units.
    pub view_width: f32,
    pub view_height: f32,

    /// Nominal per-frame timestep. Entities advance by exactly this much
    /// every frame; animation speed follows frame count, not wall time.
    pub time_step: f32,

    /// Particles rebuilt at the start of every cycle.
    pub particle_count: usize,

    /// Frames for the loading wheel to fill (progress step = 1/loader_frames).
    pub loader_frames: u32,
    pub loader_radius: f32,

    pub exploder_duration: f32,

    /// Per-particle lifetime is drawn uniformly from [min, max).
    pub particle_duration_min: f32,
    pub particle_duration_max: f32,
    pub particle_width: f32,
    pub particle_height: f32,

    /// How far below the bottom edge particle paths terminate.
    pub particle_exit_margin: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view_width: 512.0,
            view_height: 350.0,
            time_step: 1.0 / 60.0,
            particle_count: 128,
            loader_frames: 45,
            loader_radius: 24.0,
            exploder_duration: 0.4,
            particle_duration_min: 3.0,
            particle_duration_max: 5.0,
            particle_width: 8.0,
            particle_height: 6.0,
            particle_exit_margin: 64.0,
        }
    }
}

impl Config {
    /// Check the invariants the entities rely on (nonzero durations and
    /// extents; a usable duration range). Driver construction calls this.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("view_width", self.view_width),
            ("view_height", self.view_height),
            ("time_step", self.time_step),
            ("loader_radius", self.loader_radius),
            ("exploder_duration", self.exploder_duration),
            ("particle_width", self.particle_width),
            ("particle_height", self.particle_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.particle_count == 0 {
            return Err(ConfigError::ZeroParticles);
        }
        if self.loader_frames == 0 {
            return Err(ConfigError::ZeroLoaderFrames);
        }
        let (min, max) = (self.particle_duration_min, self.particle_duration_max);
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || max < min {
            return Err(ConfigError::BadDurationRange { min, max });
        }
        if !self.particle_exit_margin.is_finite() {
            return Err(ConfigError::BadExitMargin(self.particle_exit_margin));
        }
        Ok(())
    }

    /// Parse a JSON config and validate it.
    pub fn from_json(s: &str) -> Result<Config, ConfigError> {
        let cfg: Config = serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
