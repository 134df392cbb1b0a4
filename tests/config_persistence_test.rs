//! Preference persistence through the JSON app state file

use ecg_lead_trainer::config::{AppState, FONT_SCALE_RANGE, MAX_WAVEFORM_LENGTH, MIN_WAVEFORM_LENGTH};
use ecg_lead_trainer::TrainerError;
use tempfile::TempDir;

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app_state.json");

    let mut state = AppState::default();
    state.ui_preferences.dark_mode = true;
    state.ui_preferences.show_instructions_on_start = false;
    state.exercise.waveform_length = 400;
    state.exercise.show_grid = false;
    state.save_to(&path).unwrap();

    let loaded = AppState::load_from(&path).unwrap();
    assert!(loaded.ui_preferences.dark_mode);
    assert!(!loaded.ui_preferences.show_instructions_on_start);
    assert_eq!(loaded.exercise.waveform_length, 400);
    assert!(!loaded.exercise.show_grid);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = AppState::load_from(dir.path().join("nope.json")).unwrap();
    assert_eq!(loaded.exercise.waveform_length, 200);
    assert!(loaded.ui_preferences.show_instructions_on_start);
}

#[test]
fn test_invalid_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app_state.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = AppState::load_from(&path).unwrap_err();
    assert!(matches!(err, TrainerError::Config(_)));
}

#[test]
fn test_out_of_range_values_are_clamped_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app_state.json");

    let mut state = AppState::default();
    state.exercise.waveform_length = 5;
    state.save_to(&path).unwrap();
    assert_eq!(
        AppState::load_from(&path).unwrap().exercise.waveform_length,
        MIN_WAVEFORM_LENGTH
    );

    state.exercise.waveform_length = 1_000_000;
    state.save_to(&path).unwrap();
    assert_eq!(
        AppState::load_from(&path).unwrap().exercise.waveform_length,
        MAX_WAVEFORM_LENGTH
    );
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("app_state.json");
    AppState::default().save_to(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_font_scale_is_clamped_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app_state.json");

    std::fs::write(&path, r#"{"ui_preferences":{"font_scale":-3.0}}"#).unwrap();
    let loaded = AppState::load_from(&path).unwrap();
    assert_eq!(loaded.ui_preferences.font_scale, *FONT_SCALE_RANGE.start());

    std::fs::write(&path, r#"{"ui_preferences":{"font_scale":40.0}}"#).unwrap();
    let loaded = AppState::load_from(&path).unwrap();
    assert_eq!(loaded.ui_preferences.font_scale, *FONT_SCALE_RANGE.end());
}
