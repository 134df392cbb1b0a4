//! # ECG Lead Trainer
//!
//! An interactive exercise for wiring ECG electrodes to a differential
//! amplifier. The learner drags a wire from each patient electrode (RA, LA,
//! RL) to an amplifier input, checks the wiring against Lead I and, once it
//! is correct, watches a synthetic trace of the recorded signal.
//!
//! ## Architecture
//!
//! - **Editor**: Drag-to-connect state machine and validation against a reference mapping
//! - **Waveform**: Synthetic PQRST generator plus CSV export
//! - **Session**: Single owner of exercise state, driven by UI events
//! - **Frontend**: Renders the diagram, toolbar and monitor using eframe/egui with egui_plot
//!
//! ## Configuration
//!
//! Preferences are stored in the platform-appropriate data directory under
//! `dev.hxyulin.ecg-lead-trainer`:
//!
//! - **Linux**: `~/.local/share/dev.hxyulin.ecg-lead-trainer/`
//! - **macOS**: `~/Library/Application Support/dev.hxyulin.ecg-lead-trainer/`
//! - **Windows**: `%APPDATA%\dev.hxyulin.ecg-lead-trainer\`
//!
//! ## Example
//!
//! ```
//! use ecg_lead_trainer::{AmplifierInput, ElectrodeId, Position, TrainerSession};
//!
//! let mut session = TrainerSession::default();
//! for (electrode, input) in [
//!     (ElectrodeId::RA, AmplifierInput::Negative),
//!     (ElectrodeId::LA, AmplifierInput::Positive),
//!     (ElectrodeId::RL, AmplifierInput::Ground),
//! ] {
//!     session.press(electrode, Position::ORIGIN);
//!     session.release(Some(input));
//! }
//!
//! assert!(session.check().passed);
//! assert_eq!(session.waveform().map(|w| w.len()), Some(200));
//! ```

pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod frontend;
pub mod session;
pub mod types;
pub mod waveform;

// Re-export commonly used types
pub use app::TrainerApp;
pub use config::AppState;
pub use editor::{ConnectionEditor, DropOutcome, ReferenceMapping, ValidationReport};
pub use error::{Result, TrainerError};
pub use session::TrainerSession;
pub use types::{AmplifierInput, Connection, ElectrodeId, Position};
pub use waveform::{Waveform, WaveformGenerator};
