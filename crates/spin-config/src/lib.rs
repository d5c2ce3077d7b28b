//! Spinquad configuration
//!
//! Centralized settings for the transform demo, loaded from `spinquad.toml`
//! with environment-variable overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for the demo
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SpinConfig {
    /// Window settings
    pub window: WindowConfig,
    /// Quad geometry and initial transform
    pub quad: QuadConfig,
    /// Keyboard step sizes
    pub input: InputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Clear color as sRGB u8 RGBA
    pub clear_color: [u8; 4],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadConfig {
    /// Side length of the quad in pixels
    pub side: f32,
    /// Initial world-space placement of the quad's pivot
    pub translation: [f32; 2],
    /// Initial rotation in degrees
    pub rotation_deg: f32,
    /// Initial x/y scale factors
    pub scale: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Pixels moved per arrow press
    pub move_step: f32,
    /// Degrees rotated per rotate press
    pub rotate_step_deg: f32,
    /// Scale delta per scale press
    pub scale_step: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Spinquad".to_string(),
            clear_color: [0, 0, 0, 0],
        }
    }
}

impl Default for QuadConfig {
    fn default() -> Self {
        Self {
            side: 500.0,
            translation: [250.0, 250.0],
            rotation_deg: 0.0,
            scale: [1.0, 1.0],
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_step: 25.0,
            rotate_step_deg: 15.0,
            scale_step: 0.1,
        }
    }
}

impl SpinConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (spinquad.toml in the
    /// current directory) or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("spinquad.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(title) = std::env::var("SPIN_TITLE") {
            self.window.title = title;
        }
        if let Ok(val) = std::env::var("SPIN_QUAD_SIDE") {
            if let Ok(side) = val.parse::<f32>() {
                self.quad.side = side;
            }
        }
        if let Ok(val) = std::env::var("SPIN_MOVE_STEP") {
            if let Ok(step) = val.parse::<f32>() {
                self.input.move_step = step;
            }
        }
        if let Ok(val) = std::env::var("SPIN_ROTATE_STEP") {
            if let Ok(step) = val.parse::<f32>() {
                self.input.rotate_step_deg = step;
            }
        }
        if let Ok(val) = std::env::var("SPIN_SCALE_STEP") {
            if let Ok(step) = val.parse::<f32>() {
                self.input.scale_step = step;
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from spinquad.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
