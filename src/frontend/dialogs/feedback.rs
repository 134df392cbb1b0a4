//! Check result dialog
//!
//! Shown after CHECK with the pass/fail headline and the required wiring.

use super::{Dialog, DialogAction, DialogState, DialogWindowConfig};
use crate::editor::ValidationReport;
use egui::{Color32, RichText, Ui};

/// State for the feedback dialog
#[derive(Debug, Default)]
pub struct FeedbackState {
    /// Report being shown
    pub report: Option<ValidationReport>,
}

impl DialogState for FeedbackState {}

impl FeedbackState {
    pub fn with_report(report: ValidationReport) -> Self {
        Self {
            report: Some(report),
        }
    }

    fn passed(&self) -> bool {
        self.report.as_ref().is_some_and(|r| r.passed)
    }

    /// Start Over is offered for any result, passed or failed
    pub fn offers_start_over(&self) -> bool {
        self.report.is_some()
    }
}

/// Action from the feedback dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackAction {
    /// Clear the wiring and try again
    StartOver,
}

/// Context for rendering (none needed)
pub struct FeedbackContext;

/// The feedback dialog
pub struct FeedbackDialog;

impl Dialog for FeedbackDialog {
    type State = FeedbackState;
    type Action = FeedbackAction;
    type Context<'a> = FeedbackContext;

    fn title(state: &Self::State) -> &'static str {
        if state.passed() {
            "Correct Configuration"
        } else {
            "Incorrect Configuration"
        }
    }

    fn window_config() -> DialogWindowConfig {
        DialogWindowConfig::centered(360.0)
    }

    fn render(
        state: &mut Self::State,
        _ctx: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action> {
        let Some(report) = state.report.as_ref() else {
            return DialogAction::Close;
        };

        let color = if report.passed {
            Color32::from_rgb(0x22, 0xc5, 0x5e)
        } else {
            Color32::from_rgb(0xef, 0x44, 0x44)
        };
        ui.label(RichText::new(report.headline()).strong().color(color));
        ui.add_space(4.0);

        for line in report.message().lines().skip(1) {
            ui.label(line);
        }

        if !report.unexpected.is_empty() {
            ui.add_space(4.0);
            for conn in &report.unexpected {
                ui.colored_label(Color32::LIGHT_RED, format!("Unexpected: {}", conn));
            }
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                return DialogAction::Close;
            }
            if state.offers_start_over() && ui.button("Start Over").clicked() {
                return DialogAction::CloseWithAction(FeedbackAction::StartOver);
            }
            DialogAction::None
        })
        .inner
    }
}
