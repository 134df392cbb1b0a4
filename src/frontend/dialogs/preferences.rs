//! Preferences dialog
//!
//! App-wide appearance plus waveform display settings.

use egui::Ui;

use crate::config::{
    ExerciseSettings, UiPreferences, FONT_SCALE_RANGE, MAX_WAVEFORM_LENGTH, MIN_WAVEFORM_LENGTH,
};
use crate::frontend::dialogs::{Dialog, DialogAction, DialogState, DialogWindowConfig};

/// State for the preferences dialog
#[derive(Debug, Clone, PartialEq)]
pub struct PreferencesState {
    // App-wide (from UiPreferences)
    pub dark_mode: bool,
    pub font_scale: f32,

    // Waveform (from ExerciseSettings)
    pub show_grid: bool,
    pub line_width: f32,
    pub waveform_length: usize,
}

impl Default for PreferencesState {
    fn default() -> Self {
        Self::from_config(&UiPreferences::default(), &ExerciseSettings::default())
    }
}

impl PreferencesState {
    /// Create from current preferences and settings
    pub fn from_config(ui_prefs: &UiPreferences, exercise: &ExerciseSettings) -> Self {
        Self {
            dark_mode: ui_prefs.dark_mode,
            font_scale: ui_prefs.font_scale,
            show_grid: exercise.show_grid,
            line_width: exercise.line_width,
            waveform_length: exercise.waveform_length,
        }
    }

    /// Write the edited values back into the persisted config
    pub fn apply_to(&self, ui_prefs: &mut UiPreferences, exercise: &mut ExerciseSettings) {
        ui_prefs.dark_mode = self.dark_mode;
        ui_prefs.font_scale = self.font_scale;
        ui_prefs.sanitize();
        exercise.show_grid = self.show_grid;
        exercise.line_width = self.line_width;
        exercise.waveform_length = self.waveform_length;
        exercise.sanitize();
    }
}

impl DialogState for PreferencesState {}

/// Actions produced by the preferences dialog
#[derive(Debug, Clone)]
pub enum PreferencesAction {
    /// Apply preferences
    Apply(PreferencesState),
}

/// Context for rendering
pub struct PreferencesContext;

/// The preferences dialog
pub struct PreferencesDialog;

impl Dialog for PreferencesDialog {
    type State = PreferencesState;
    type Action = PreferencesAction;
    type Context<'a> = PreferencesContext;

    fn title(_state: &Self::State) -> &'static str {
        "Preferences"
    }

    fn window_config() -> DialogWindowConfig {
        DialogWindowConfig {
            default_width: 380.0,
            ..Default::default()
        }
    }

    fn render(
        state: &mut Self::State,
        _ctx: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action> {
        // === Appearance ===
        ui.heading("Appearance");
        ui.add_space(4.0);

        egui::Grid::new("prefs_appearance_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Dark mode:");
                ui.checkbox(&mut state.dark_mode, "");
                ui.end_row();

                ui.label("Font scale:");
                ui.add(
                    egui::Slider::new(&mut state.font_scale, FONT_SCALE_RANGE).step_by(0.1),
                );
                ui.end_row();
            });

        ui.add_space(8.0);

        // === Waveform ===
        ui.heading("Waveform");
        ui.add_space(4.0);

        egui::Grid::new("prefs_waveform_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Grid:");
                ui.checkbox(&mut state.show_grid, "");
                ui.end_row();

                ui.label("Line width:");
                ui.add(egui::Slider::new(&mut state.line_width, 0.5..=5.0));
                ui.end_row();

                ui.label("Samples:");
                ui.add(
                    egui::Slider::new(
                        &mut state.waveform_length,
                        MIN_WAVEFORM_LENGTH..=MAX_WAVEFORM_LENGTH,
                    )
                    .step_by(50.0),
                );
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Apply").clicked() {
                return DialogAction::CloseWithAction(PreferencesAction::Apply(state.clone()));
            }
            if ui.button("Cancel").clicked() {
                return DialogAction::Close;
            }
            DialogAction::None
        })
        .inner
    }
}
