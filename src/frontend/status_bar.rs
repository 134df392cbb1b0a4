//! Status bar panel: bottom bar showing wiring progress and feedback.

use std::time::{Duration, Instant};

use egui::{Color32, RichText, Ui};

use crate::editor::{ConnectionEditor, DragGesture, ValidationReport};
use crate::frontend::state::{AppAction, DialogId};

/// How long a status message stays visible
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(6);

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

/// A transient message shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub shown_at: Instant,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Error, text)
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() > STATUS_MESSAGE_TTL
    }

    fn color(&self) -> Color32 {
        match self.kind {
            StatusKind::Info => Color32::GRAY,
            StatusKind::Warning => Color32::from_rgb(0xf5, 0x9e, 0x0b),
            StatusKind::Error => Color32::LIGHT_RED,
        }
    }
}

/// Context needed to render the status bar.
pub struct StatusBarContext<'a> {
    pub editor: &'a ConnectionEditor,
    pub message: Option<&'a StatusMessage>,
    pub last_report: Option<&'a ValidationReport>,
}

/// Label for the last check result, clickable to reopen the feedback dialog
pub fn last_check_label(report: Option<&ValidationReport>) -> Option<&'static str> {
    report.map(|r| {
        if r.passed {
            "Last check: correct"
        } else {
            "Last check: incorrect"
        }
    })
}

/// Render the status bar and return any actions it produced.
pub fn render_status_bar(ui: &mut Ui, ctx: &StatusBarContext<'_>) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        // === Wiring progress ===
        let wired = ctx.editor.connection_count();
        let total = ctx.editor.reference().len();
        let color = if ctx.editor.is_complete() {
            Color32::GREEN
        } else {
            Color32::GRAY
        };
        ui.colored_label(color, "●");
        ui.label(RichText::new(format!("Connections: {}/{}", wired, total)).small());

        ui.separator();

        // === Gesture ===
        let gesture = match ctx.editor.gesture() {
            DragGesture::Active { source, .. } => format!("Dragging from {}", source),
            DragGesture::Idle => "Idle".to_string(),
        };
        ui.label(RichText::new(gesture).small());

        // === Last check ===
        if let Some(label) = last_check_label(ctx.last_report) {
            ui.separator();
            if ui
                .link(RichText::new(label).small())
                .on_hover_text("Show the check result again")
                .clicked()
            {
                actions.push(AppAction::OpenDialog(DialogId::Feedback));
            }
        }

        // === Last message ===
        if let Some(msg) = ctx.message.filter(|m| !m.is_expired()) {
            ui.separator();
            ui.colored_label(msg.color(), RichText::new(&msg.text).small());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(ctx.editor.reference().lead_name.as_str()).small());
        });
    });

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_message_not_expired() {
        let msg = StatusMessage::warning("LA cannot be connected to ground");
        assert!(!msg.is_expired());
        assert_eq!(msg.kind, StatusKind::Warning);
    }

    #[test]
    fn test_last_check_label_follows_report() {
        use crate::editor::ReferenceMapping;

        let reference = ReferenceMapping::lead_i();
        assert_eq!(last_check_label(None), None);

        let failed = ValidationReport::evaluate(&reference, &[]);
        assert_eq!(last_check_label(Some(&failed)), Some("Last check: incorrect"));

        let passed = ValidationReport::evaluate(&reference, &reference.connections());
        assert_eq!(last_check_label(Some(&passed)), Some("Last check: correct"));
    }

    #[test]
    fn test_old_message_expired() {
        let mut msg = StatusMessage::info("Connected");
        if let Some(past) = Instant::now().checked_sub(STATUS_MESSAGE_TTL * 2) {
            msg.shown_at = past;
            assert!(msg.is_expired());
        }
    }
}
