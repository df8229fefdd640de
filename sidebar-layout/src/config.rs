use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Viewport width (px) at or below which the sidebar auto-closes.
pub const DEFAULT_BREAKPOINT: u32 = 768;
/// Gap (px) between the toggle button and the left edge or the sidebar.
pub const DEFAULT_GUTTER: f32 = 15.0;

/// Tunables of the responsive sidebar layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Widths at or below this value collapse the sidebar.
    pub breakpoint: u32,
    /// Toggle offset while closed, spacing past the sidebar while open.
    pub gutter: f32,
    /// Host-side resize coalescing interval. Zero applies every resize.
    pub resize_throttle_ms: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            gutter: DEFAULT_GUTTER,
            resize_throttle_ms: 0,
        }
    }
}

impl LayoutConfig {
    /// Parse and validate a JSON payload.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `path`, using defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!(
                    "layout config {} not found, using defaults",
                    path.display()
                );
                return Ok(Self::default());
            },
            Err(err) => return Err(err.into()),
        };
        Self::from_json_str(&content)
    }

    /// Reject values the controller cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breakpoint == 0 {
            return Err(ConfigError::Validation {
                message: String::from("breakpoint must be greater than zero"),
            });
        }

        if !self.gutter.is_finite() || self.gutter < 0.0 {
            return Err(ConfigError::Validation {
                message: format!(
                    "gutter must be a non-negative number, got {}",
                    self.gutter
                ),
            });
        }

        Ok(())
    }

    /// Return the coalescing interval as a duration.
    pub fn resize_throttle(&self) -> Duration {
        Duration::from_millis(self.resize_throttle_ms)
    }

    /// Return whether `width` falls in the collapsed band.
    pub fn is_narrow(&self, width: u32) -> bool {
        width <= self.breakpoint
    }
}
