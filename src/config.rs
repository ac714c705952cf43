//! Chart configuration.
//!
//! Defaults reproduce the stock chart; a JSON file may override any subset of
//! fields.

use crate::data_types::{BarStyle, Reduce};
use crate::layout::Margins;
use eyre::WrapErr;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the path of an optional JSON config file.
pub const CONFIG_ENV: &str = "EPISODE_CHART_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// CSV file with the episode log, relative to the working directory.
    pub data_path: PathBuf,
    pub margins: Margins,
    /// Inner and outer band padding, as a fraction of the band step.
    pub band_padding: f32,
    pub entrance_duration_ms: u64,
    pub stagger_ms: u64,
    pub axis_duration_ms: u64,
    pub value_tick_count: usize,
    /// Horizontal distance between the pointer and the tooltip.
    pub tooltip_offset_x: f32,
    pub tooltip_label: String,
    /// Reduction of the per-episode detail view.
    pub detail_reduce: Reduce,
    pub bar: BarStyle,
    /// Initial size of the chart window.
    pub window_size: (f32, f32),
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("Game_of_Thrones.csv"),
            margins: Margins::default(),
            band_padding: 0.2,
            entrance_duration_ms: 800,
            stagger_ms: 100,
            axis_duration_ms: 1000,
            value_tick_count: 10,
            tooltip_offset_x: 70.0,
            tooltip_label: "Rotten Tomatoes Rating".to_string(),
            detail_reduce: Reduce::Sum,
            bar: BarStyle::default(),
            window_size: (1280.0, 800.0),
        }
    }
}

impl ChartConfig {
    pub fn from_json(text: &str) -> eyre::Result<Self> {
        serde_json::from_str(text).wrap_err("invalid chart configuration")
    }

    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text)
    }

    /// Config from `EPISODE_CHART_CONFIG` when set, defaults otherwise.
    pub fn from_env() -> eyre::Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    pub fn entrance_duration(&self) -> Duration {
        Duration::from_millis(self.entrance_duration_ms)
    }

    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    pub fn axis_duration(&self) -> Duration {
        Duration::from_millis(self.axis_duration_ms)
    }
}
