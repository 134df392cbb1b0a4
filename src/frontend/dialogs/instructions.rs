//! Instructions dialog describing the wiring task.

use super::{Dialog, DialogAction, DialogState, DialogWindowConfig};
use egui::Ui;

/// State for the instructions dialog
#[derive(Debug, Clone, Default)]
pub struct InstructionsState {
    /// Mirrors the "show on startup" preference while the dialog is open
    pub show_on_start: bool,
}

impl DialogState for InstructionsState {}

impl InstructionsState {
    pub fn new(show_on_start: bool) -> Self {
        Self { show_on_start }
    }
}

/// Actions produced by the instructions dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionsAction {
    SetShowOnStart(bool),
}

/// Context for rendering
pub struct InstructionsContext<'a> {
    pub lead_name: &'a str,
}

/// The instructions dialog
pub struct InstructionsDialog;

impl Dialog for InstructionsDialog {
    type State = InstructionsState;
    type Action = InstructionsAction;
    type Context<'a> = InstructionsContext<'a>;

    fn title(_state: &Self::State) -> &'static str {
        "Instructions"
    }

    fn window_config() -> DialogWindowConfig {
        DialogWindowConfig::centered(420.0)
    }

    fn render(
        state: &mut Self::State,
        ctx: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action> {
        ui.label(format!(
            "Wire the patient's electrodes to the amplifier to record {}.",
            ctx.lead_name
        ));
        ui.add_space(6.0);
        ui.label("1. Press on an electrode (RA, LA or RL) on the body.");
        ui.label("2. Drag the wire to an amplifier input and release.");
        ui.label("3. Wires dropped on the wrong input are discarded.");
        ui.label("4. Press CHECK when every electrode is wired.");
        ui.add_space(6.0);
        ui.label("A correct configuration displays the recorded waveform. WAVEFORM draws a new trace, PRINT saves it as CSV and RESET removes every wire.");

        ui.separator();
        let mut action = DialogAction::None;
        ui.horizontal(|ui| {
            if ui
                .checkbox(&mut state.show_on_start, "Show on startup")
                .changed()
            {
                action = DialogAction::Action(InstructionsAction::SetShowOnStart(
                    state.show_on_start,
                ));
            }
            if ui.button("Close").clicked() {
                action = DialogAction::Close;
            }
        });
        action
    }
}
