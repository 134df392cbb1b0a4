//! Toolbar panel: exercise controls along the top of the window.

use egui::{Button, Color32, RichText, Ui};

use crate::frontend::state::{AppAction, DialogId};

/// Fill color shared by the exercise buttons
const BUTTON_FILL: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);

/// Context needed to render the toolbar.
pub struct ToolbarContext {
    /// Whether a waveform is available to export
    pub has_waveform: bool,
    /// Whether any wiring or drag is in progress
    pub has_connections: bool,
}

fn exercise_button(label: &str) -> Button<'static> {
    Button::new(RichText::new(label.to_string()).strong().color(Color32::WHITE))
        .fill(BUTTON_FILL)
        .min_size(egui::vec2(96.0, 28.0))
}

/// Render the main toolbar.
pub fn render_toolbar(ui: &mut Ui, ctx: &ToolbarContext) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;

        if ui
            .add(exercise_button("CHECK"))
            .on_hover_text("Check the wiring against Lead I")
            .clicked()
        {
            actions.push(AppAction::Check);
        }

        if ui
            .add_enabled(ctx.has_connections || ctx.has_waveform, exercise_button("RESET"))
            .on_hover_text("Remove all connections")
            .clicked()
        {
            actions.push(AppAction::Reset);
        }

        if ui
            .add(exercise_button("WAVEFORM"))
            .on_hover_text("Generate a fresh waveform")
            .clicked()
        {
            actions.push(AppAction::RegenerateWaveform);
        }

        if ui
            .add_enabled(ctx.has_waveform, exercise_button("PRINT"))
            .on_hover_text("Save the waveform as CSV")
            .clicked()
        {
            actions.push(AppAction::ExportWaveform);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add(exercise_button("INSTRUCTIONS")).clicked() {
                actions.push(AppAction::OpenDialog(DialogId::Instructions));
            }
            if ui.button("⚙").on_hover_text("Preferences").clicked() {
                actions.push(AppAction::OpenDialog(DialogId::Preferences));
            }
        });
    });

    actions
}
