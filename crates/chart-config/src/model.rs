use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "budget-chart";

/// Stores user-configurable chart preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub labels: LabelSettings,
    #[serde(default = "Config::default_surface_width_value")]
    pub default_surface_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// First year on the projection x-axis. Defaults to the current year.
    pub projection_start_year: Option<i32>,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            labels: LabelSettings::default(),
            default_surface_width: Self::default_surface_width_value(),
            projection_start_year: None,
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_surface_width_value() -> f64 {
        800.0
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_projection_start_year(&self) -> i32 {
        self.projection_start_year
            .unwrap_or_else(|| Local::now().year())
    }

    /// Platform configuration directory for the application, e.g. `~/.config/budget-chart`.
    pub fn resolve_default_base_dir() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(APP_DIR_NAME)
    }
}

/// Thresholds controlling which donut slices get a data label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelSettings {
    #[serde(default = "LabelSettings::default_outer_threshold")]
    pub outer_threshold: f64,
    #[serde(default = "LabelSettings::default_inner_threshold")]
    pub inner_threshold: f64,
    #[serde(default = "LabelSettings::default_responsive_breakpoint")]
    pub responsive_breakpoint: f64,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            outer_threshold: Self::default_outer_threshold(),
            inner_threshold: Self::default_inner_threshold(),
            responsive_breakpoint: Self::default_responsive_breakpoint(),
        }
    }
}

impl LabelSettings {
    pub fn default_outer_threshold() -> f64 {
        5.0
    }

    pub fn default_inner_threshold() -> f64 {
        1.0
    }

    pub fn default_responsive_breakpoint() -> f64 {
        400.0
    }
}
