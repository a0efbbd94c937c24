use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::markers::DEFAULT_MARKER_LAG_DAYS;
use crate::core::paths::resolve_resource_path;
use crate::core::rail_chain::ChainConfig;
use crate::core::ticks::DEFAULT_MIN_TICK_SPACING_PX;
use crate::core::time::SECONDS_PER_DAY;

/// Environment variable naming an explicit settings file.
pub const SETTINGS_PATH_ENV: &str = "TIMELINE_CONFIG_PATH";
const DEFAULT_SETTINGS_PATH: &str = "config/timeline.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse timeline settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read timeline settings from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Calendar layout and behavior settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    /// Battle dataset, relative to the resource roots unless absolute
    pub dataset_path: PathBuf,
    /// Rail height used until the calendar has been measured
    pub rail_height_px: f64,
    pub rail_width_px: f64,
    /// Horizontal space between rails, where the projection is drawn
    pub rail_gap_px: f64,
    pub min_tick_spacing_px: f64,
    /// Rails whose ticks span no more than this stop zooming
    pub min_resolution_days: i64,
    pub max_rail_depth: usize,
    /// How long before/after an event its marker stays visible
    pub marker_lag_days: i64,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("assets/data/nw.json"),
            rail_height_px: 480.0,
            rail_width_px: 120.0,
            rail_gap_px: 64.0,
            min_tick_spacing_px: DEFAULT_MIN_TICK_SPACING_PX,
            min_resolution_days: 366,
            max_rail_depth: 16,
            marker_lag_days: DEFAULT_MARKER_LAG_DAYS,
        }
    }
}

impl TimelineSettings {
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn resolved_dataset_path(&self) -> PathBuf {
        resolve_resource_path(&self.dataset_path)
    }

    /// Chain parameters for rails of `height` pixels.
    pub fn chain_config(&self, height: f64) -> ChainConfig {
        ChainConfig {
            rail_height_px: height,
            min_tick_spacing_px: self.min_tick_spacing_px,
            min_resolution_seconds: self.min_resolution_days.max(1) * SECONDS_PER_DAY,
            max_depth: self.max_rail_depth.max(1),
        }
    }
}

/// Load settings from `TIMELINE_CONFIG_PATH` or the bundled default path,
/// falling back to builtin values. Returns the file that was used, if any.
pub fn load_settings_from_env() -> (TimelineSettings, Option<PathBuf>) {
    let path = env::var(SETTINGS_PATH_ENV)
        .ok()
        .map(PathBuf::from)
        .unwrap_or_else(|| resolve_resource_path(Path::new(DEFAULT_SETTINGS_PATH)));

    match TimelineSettings::from_file(&path) {
        Ok(settings) => {
            tracing::info!(
                target: "battle_timeline::config",
                path = %path.display(),
                "settings.loaded=file"
            );
            (settings, Some(path))
        }
        Err(err) => {
            tracing::warn!(
                target: "battle_timeline::config",
                path = %path.display(),
                error = %err,
                "settings.load_failed"
            );
            tracing::info!(target: "battle_timeline::config", "settings.loaded=builtin");
            (TimelineSettings::default(), None)
        }
    }
}

/// Name shown for the settings source: the file name, or "builtin" when no
/// file was loaded.
pub fn settings_source_label(path: Option<&Path>) -> String {
    path.and_then(Path::file_name)
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "builtin".to_string())
}
