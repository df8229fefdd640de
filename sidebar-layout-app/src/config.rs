use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sidebar_layout::{ConfigError, LayoutConfig};

/// Host settings read from `config.json`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) layout: LayoutConfig,
    /// Sidebar width on roomy viewports.
    pub(crate) sidebar_width: f32,
    /// Sidebar width once the viewport is narrower than `compact_below`.
    pub(crate) compact_sidebar_width: f32,
    pub(crate) compact_below: u32,
    pub(crate) window_width: f32,
    pub(crate) window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            sidebar_width: 250.0,
            compact_sidebar_width: 200.0,
            compact_below: 1024,
            window_width: 1024.0,
            window_height: 768.0,
        }
    }
}

impl AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;

        let widths = [
            ("sidebar_width", self.sidebar_width),
            ("compact_sidebar_width", self.compact_sidebar_width),
            ("window_width", self.window_width),
            ("window_height", self.window_height),
        ];
        for (name, value) in widths {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation {
                    message: format!(
                        "{name} must be a non-negative number, got {value}"
                    ),
                });
            }
        }

        Ok(())
    }

    /// Sidebar width the stylesheet would give the panel at `viewport_width`.
    pub(crate) fn sidebar_width_for(&self, viewport_width: u32) -> f32 {
        if viewport_width < self.compact_below {
            self.compact_sidebar_width
        } else {
            self.sidebar_width
        }
    }
}

/// Return the path to the host config file.
fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("sidebar-layout")
            .join("config.json");
    }
    std::env::temp_dir()
        .join("sidebar-layout")
        .join("config.json")
}

/// Parse and validate a host config payload.
pub(crate) fn parse_app_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load the host config from `path`. A missing file yields defaults.
pub(crate) fn load_app_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        },
        Err(err) => return Err(err.into()),
    };
    parse_app_config(&content)
}

/// Load config from the default location, falling back to defaults on error.
pub(crate) fn load_initial_config() -> AppConfig {
    let path = config_path();
    match load_app_config(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!(
                "failed to load {}, using defaults: {err}",
                path.display()
            );
            AppConfig::default()
        },
    }
}
