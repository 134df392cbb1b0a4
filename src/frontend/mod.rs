//! Frontend module for egui UI
//!
//! The window is laid out as a toolbar, the wiring diagram in the central
//! panel, the monitor strip below it and a status bar at the bottom.
//!
//! # Main Types
//!
//! - [`TrainerApp`] - Main application state implementing [`eframe::App`]
//! - [`WaveformView`] - Plot configuration and rendering
//!
//! # Submodules
//!
//! - `diagram` - Body, amplifier and wire painting plus pointer handling
//! - `layout` - Diagram geometry and hit testing
//! - `dialogs` - Feedback, instructions and preferences windows
//! - `plot` - Waveform rendering with egui_plot

pub mod diagram;
pub mod dialogs;
pub mod layout;
mod plot;
pub mod state;
pub mod status_bar;
pub mod toolbar;

pub use plot::WaveformView;
pub use state::{AppAction, DialogId};
pub use status_bar::{StatusKind, StatusMessage};

use std::sync::Arc;

use dialogs::{
    show_dialog, FeedbackAction, FeedbackContext, FeedbackDialog, FeedbackState,
    InstructionsAction, InstructionsContext, InstructionsDialog, InstructionsState,
    PreferencesAction, PreferencesContext, PreferencesDialog, PreferencesState,
};
use status_bar::{render_status_bar, StatusBarContext, STATUS_MESSAGE_TTL};
use toolbar::{render_toolbar, ToolbarContext};

use crate::config::AppState;
use crate::editor::{DropOutcome, ReferenceMapping};
use crate::session::TrainerSession;
use crate::waveform::export::{default_file_name, export_to_file, EXPORT_FILE_EXTENSION};

/// Main application state
pub struct TrainerApp {
    session: TrainerSession,
    app_state: AppState,
    waveform_view: WaveformView,
    status: Option<StatusMessage>,
    /// Style captured at startup, before font scaling
    base_style: Arc<egui::Style>,

    feedback_open: bool,
    feedback_state: FeedbackState,
    instructions_open: bool,
    instructions_state: InstructionsState,
    preferences_open: bool,
    preferences_state: PreferencesState,
}

impl TrainerApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, app_state: AppState) -> Self {
        let fonts = egui::FontDefinitions::default();
        cc.egui_ctx.set_fonts(fonts);

        let base_style = cc.egui_ctx.style();
        let session = TrainerSession::new(
            ReferenceMapping::lead_i(),
            app_state.exercise.waveform_length,
        );
        let show_instructions = app_state.ui_preferences.show_instructions_on_start;

        let app = Self {
            session,
            waveform_view: WaveformView::from_settings(&app_state.exercise),
            instructions_state: InstructionsState::new(show_instructions),
            app_state,
            status: None,
            base_style,
            feedback_open: false,
            feedback_state: FeedbackState::default(),
            instructions_open: show_instructions,
            preferences_open: false,
            preferences_state: PreferencesState::default(),
        };
        app.apply_appearance(&cc.egui_ctx);
        app
    }

    /// Read-only access to the exercise state
    pub fn session(&self) -> &TrainerSession {
        &self.session
    }

    fn apply_appearance(&self, ctx: &egui::Context) {
        let prefs = &self.app_state.ui_preferences;
        let mut style = (*self.base_style).clone();
        style.visuals = if prefs.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        style.visuals.window_shadow.offset = [0, 0];
        style.text_styles.iter_mut().for_each(|(_, font_id)| {
            font_id.size *= prefs.font_scale;
        });
        ctx.set_theme(if prefs.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        ctx.set_style(style);
    }

    fn set_status(&mut self, message: StatusMessage) {
        self.status = Some(message);
    }

    /// Handle an action emitted by a widget or dialog
    fn handle_action(&mut self, ctx: &egui::Context, action: AppAction) {
        match action {
            AppAction::BeginDrag {
                electrode,
                position,
            } => {
                if self.session.press(electrode, position) {
                    tracing::debug!("Drag started from {}", electrode);
                }
            }
            AppAction::UpdateDrag(position) => {
                self.session.drag_to(position);
            }
            AppAction::EndDrag(target) => {
                let outcome = self.session.release(target);
                tracing::debug!("Drop finished: {:?}", outcome);
                match &outcome {
                    DropOutcome::Rejected { .. } => {
                        if let Some(text) = outcome.describe() {
                            self.set_status(StatusMessage::warning(text));
                        }
                    }
                    DropOutcome::Connected { .. } => {
                        if let Some(text) = outcome.describe() {
                            self.set_status(StatusMessage::info(text));
                        }
                    }
                    DropOutcome::Cancelled { .. } | DropOutcome::NoGesture => {}
                }
            }
            AppAction::Check => {
                let report = self.session.check().clone();
                let status = if report.passed {
                    StatusMessage::info(report.headline())
                } else {
                    StatusMessage::warning(report.headline())
                };
                self.set_status(status);
                self.feedback_state = FeedbackState::with_report(report);
                self.feedback_open = true;
            }
            AppAction::Reset => {
                self.session.reset();
                self.feedback_open = false;
                self.feedback_state = FeedbackState::default();
                self.set_status(StatusMessage::info("All connections removed"));
                tracing::info!("Exercise reset");
            }
            AppAction::RegenerateWaveform => {
                self.session.regenerate_waveform();
            }
            AppAction::ExportWaveform => self.export_waveform(),
            AppAction::OpenDialog(id) => match id {
                DialogId::Feedback => {
                    if let Some(report) = self.session.last_report() {
                        self.feedback_state = FeedbackState::with_report(report.clone());
                        self.feedback_open = true;
                    }
                }
                DialogId::Instructions => {
                    self.instructions_state = InstructionsState::new(
                        self.app_state.ui_preferences.show_instructions_on_start,
                    );
                    self.instructions_open = true;
                }
                DialogId::Preferences => {
                    self.preferences_state = PreferencesState::from_config(
                        &self.app_state.ui_preferences,
                        &self.app_state.exercise,
                    );
                    self.preferences_open = true;
                }
            },
            AppAction::ApplyPreferences(prefs) => {
                prefs.apply_to(
                    &mut self.app_state.ui_preferences,
                    &mut self.app_state.exercise,
                );
                self.waveform_view = WaveformView::from_settings(&self.app_state.exercise);
                self.session
                    .set_waveform_length(self.app_state.exercise.waveform_length);
                self.apply_appearance(ctx);
                if let Err(e) = self.app_state.save() {
                    tracing::warn!("Failed to save preferences: {}", e);
                }
            }
            AppAction::SetShowInstructionsOnStart(show) => {
                self.app_state.ui_preferences.show_instructions_on_start = show;
            }
        }
    }

    fn export_waveform(&mut self) {
        let Some(waveform) = self.session.waveform() else {
            self.set_status(StatusMessage::warning("No waveform to print"));
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .set_title("Print Waveform")
            .add_filter("CSV", &[EXPORT_FILE_EXTENSION])
            .set_file_name(default_file_name(chrono::Local::now()))
            .save_file()
        else {
            return;
        };

        let status = match export_to_file(waveform, self.waveform_view.axis, &path) {
            Ok(rows) => {
                StatusMessage::info(format!("Saved {} samples to {}", rows, path.display()))
            }
            Err(e) => {
                tracing::error!("Failed to export waveform: {}", e);
                StatusMessage::error(format!("Export failed: {}", e))
            }
        };
        self.set_status(status);
    }

    fn render_dialogs(&mut self, ctx: &egui::Context) -> Vec<AppAction> {
        let mut actions = Vec::new();

        if let Some(FeedbackAction::StartOver) = show_dialog::<FeedbackDialog>(
            ctx,
            &mut self.feedback_open,
            &mut self.feedback_state,
            FeedbackContext,
        ) {
            actions.push(AppAction::Reset);
        }

        let instructions_ctx = InstructionsContext {
            lead_name: &self.session.editor().reference().lead_name,
        };
        if let Some(InstructionsAction::SetShowOnStart(show)) = show_dialog::<InstructionsDialog>(
            ctx,
            &mut self.instructions_open,
            &mut self.instructions_state,
            instructions_ctx,
        ) {
            actions.push(AppAction::SetShowInstructionsOnStart(show));
        }

        if let Some(PreferencesAction::Apply(prefs)) = show_dialog::<PreferencesDialog>(
            ctx,
            &mut self.preferences_open,
            &mut self.preferences_state,
            PreferencesContext,
        ) {
            actions.push(AppAction::ApplyPreferences(prefs));
        }

        actions
    }
}

impl eframe::App for TrainerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.editor().gesture().is_active() {
            ctx.request_repaint();
        }
        if self.status.as_ref().is_some_and(|m| !m.is_expired()) {
            ctx.request_repaint_after(STATUS_MESSAGE_TTL);
        }

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            let toolbar_ctx = ToolbarContext {
                has_waveform: self.session.waveform().is_some(),
                has_connections: self.session.editor().connection_count() > 0,
            };
            actions.extend(render_toolbar(ui, &toolbar_ctx));
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status_ctx = StatusBarContext {
                editor: self.session.editor(),
                message: self.status.as_ref(),
                last_report: self.session.last_report(),
            };
            actions.extend(render_status_bar(ui, &status_ctx));
        });

        egui::TopBottomPanel::bottom("waveform_panel")
            .resizable(true)
            .min_height(160.0)
            .default_height(220.0)
            .show(ctx, |ui| {
                self.waveform_view.render(
                    ui,
                    self.session.waveform(),
                    self.session.waveform_length(),
                );
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            actions.extend(diagram::render(ui, self.session.editor()));
        });

        actions.extend(self.render_dialogs(ctx));

        for action in actions {
            self.handle_action(ctx, action);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }
}
