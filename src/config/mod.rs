//! Configuration module for the ECG Lead Trainer
//!
//! Only preferences are persisted. The wiring a user builds is deliberately
//! lost when the application closes.
//!
//! # App Data Location
//!
//! Application data is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.hxyulin.ecg-lead-trainer/`
//! - **macOS**: `~/Library/Application Support/dev.hxyulin.ecg-lead-trainer/`
//! - **Windows**: `%APPDATA%\dev.hxyulin.ecg-lead-trainer\`
//!
//! # Files
//!
//! - `app_state.json` - UI preferences and exercise display settings

use crate::error::{Result, TrainerError};
use crate::waveform::{CYCLE_LENGTH, DEFAULT_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.hxyulin.ecg-lead-trainer";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Smallest waveform length offered in preferences (one full cycle)
pub const MIN_WAVEFORM_LENGTH: usize = CYCLE_LENGTH;

/// Largest waveform length offered in preferences
pub const MAX_WAVEFORM_LENGTH: usize = 1000;

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        TrainerError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            TrainerError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

// ==================== App State ====================

/// Persistent application state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Version for future migration support
    #[serde(default = "default_app_state_version")]
    pub version: u32,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,

    /// Exercise display settings
    #[serde(default)]
    pub exercise: ExerciseSettings,
}

fn default_app_state_version() -> u32 {
    1
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            ui_preferences: UiPreferences::default(),
            exercise: ExerciseSettings::default(),
        }
    }
}

impl AppState {
    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_state_path().ok_or_else(|| {
            TrainerError::Config("Could not determine app state path".to_string())
        })?;
        Self::load_from(path)
    }

    /// Load app state from an explicit path. A missing file yields defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| TrainerError::Config(format!("Failed to read app state: {}", e)))?;

        let mut state: Self = serde_json::from_str(&content)
            .map_err(|e| TrainerError::Config(format!("Failed to parse app state: {}", e)))?;
        state.ui_preferences.sanitize();
        state.exercise.sanitize();
        Ok(state)
    }

    /// Load app state, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(dir.join(APP_STATE_FILE))
    }

    /// Save app state to an explicit path
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TrainerError::Config(format!("Failed to create {:?}: {}", parent, e))
            })?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| TrainerError::Config(format!("Failed to serialize app state: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| TrainerError::Config(format!("Failed to write app state: {}", e)))?;

        tracing::debug!("Saved app state to {:?}", path);
        Ok(())
    }
}

/// UI preferences that persist across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Enable dark mode
    #[serde(default)]
    pub dark_mode: bool,

    /// Font scale factor
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,

    /// Open the instructions dialog on startup
    #[serde(default = "default_true")]
    pub show_instructions_on_start: bool,
}

fn default_true() -> bool {
    true
}

fn default_font_scale() -> f32 {
    1.0
}

/// Supported range of [`UiPreferences::font_scale`]
pub const FONT_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.5..=2.0;

impl UiPreferences {
    /// Clamp values loaded from disk into their supported ranges
    pub fn sanitize(&mut self) {
        // clamp passes NaN through
        if self.font_scale.is_nan() {
            self.font_scale = default_font_scale();
        }
        self.font_scale = self
            .font_scale
            .clamp(*FONT_SCALE_RANGE.start(), *FONT_SCALE_RANGE.end());
    }
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_scale: 1.0,
            show_instructions_on_start: true,
        }
    }
}

/// Exercise display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSettings {
    /// Samples produced per waveform
    #[serde(default = "default_waveform_length")]
    pub waveform_length: usize,

    /// Show grid on the waveform plot
    #[serde(default = "default_true")]
    pub show_grid: bool,

    /// Waveform line width in pixels
    #[serde(default = "default_line_width")]
    pub line_width: f32,
}

fn default_waveform_length() -> usize {
    DEFAULT_LENGTH
}

fn default_line_width() -> f32 {
    2.0
}

impl Default for ExerciseSettings {
    fn default() -> Self {
        Self {
            waveform_length: DEFAULT_LENGTH,
            show_grid: true,
            line_width: 2.0,
        }
    }
}

impl ExerciseSettings {
    /// Clamp values loaded from disk into their supported ranges
    pub fn sanitize(&mut self) {
        self.waveform_length = self
            .waveform_length
            .clamp(MIN_WAVEFORM_LENGTH, MAX_WAVEFORM_LENGTH);
        self.line_width = self.line_width.clamp(0.5, 5.0);
    }
}
