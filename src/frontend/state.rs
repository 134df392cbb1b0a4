//! Action types for the frontend
//!
//! Widgets never mutate the session directly. They return `AppAction`s,
//! which the app applies in order once the frame's widgets are drawn.

use crate::frontend::dialogs::PreferencesState;
use crate::types::{AmplifierInput, ElectrodeId, Position};

/// Actions that any widget can emit
#[derive(Debug, Clone)]
pub enum AppAction {
    // Pointer gestures on the diagram
    /// Pointer pressed on an electrode handle
    BeginDrag {
        electrode: ElectrodeId,
        position: Position,
    },
    /// Pointer moved while a drag is held
    UpdateDrag(Position),
    /// Pointer released, over an amplifier input or empty space
    EndDrag(Option<AmplifierInput>),

    // Toolbar
    /// Validate the wiring (CHECK)
    Check,
    /// Clear everything (RESET)
    Reset,
    /// Generate a fresh waveform (WAVEFORM)
    RegenerateWaveform,
    /// Save the current waveform to CSV (PRINT)
    ExportWaveform,

    // Dialogs
    /// Open a dialog
    OpenDialog(DialogId),
    /// Apply edited preferences
    ApplyPreferences(PreferencesState),
    /// Toggle the instructions dialog on startup
    SetShowInstructionsOnStart(bool),
}

/// Dialog identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogId {
    /// Result of the last check
    Feedback,
    /// Task description
    Instructions,
    /// Appearance and waveform settings
    Preferences,
}
