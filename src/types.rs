//! Core data types for the ECG Lead Trainer
//!
//! This module contains the labels and value types shared by the
//! connection editor, the waveform generator and the frontend.
//!
//! # Main Types
//!
//! - [`ElectrodeId`] - Body electrodes acting as connection sources
//! - [`AmplifierInput`] - Amplifier terminals acting as connection targets
//! - [`Connection`] - A committed electrode-to-input wire
//! - [`Position`] - A point in diagram-local coordinates
//!
//! Both label sets are closed enums so lookup tables over them are
//! exhaustive and checked at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A body electrode that can be dragged onto an amplifier input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElectrodeId {
    /// Right arm
    RA,
    /// Left arm
    LA,
    /// Right leg
    RL,
}

impl ElectrodeId {
    /// All electrodes, in drawing order
    pub const ALL: [ElectrodeId; 3] = [ElectrodeId::RA, ElectrodeId::LA, ElectrodeId::RL];

    /// Short label drawn next to the electrode
    pub fn label(&self) -> &'static str {
        match self {
            ElectrodeId::RA => "RA",
            ElectrodeId::LA => "LA",
            ElectrodeId::RL => "RL",
        }
    }

    /// Long human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ElectrodeId::RA => "Right Arm",
            ElectrodeId::LA => "Left Arm",
            ElectrodeId::RL => "Right Leg",
        }
    }
}

impl fmt::Display for ElectrodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A terminal on the simulated differential amplifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AmplifierInput {
    Positive,
    Negative,
    Ground,
}

impl AmplifierInput {
    /// All amplifier inputs, in drawing order
    pub const ALL: [AmplifierInput; 3] = [
        AmplifierInput::Positive,
        AmplifierInput::Negative,
        AmplifierInput::Ground,
    ];

    /// Symbol drawn on the amplifier body
    pub fn symbol(&self) -> &'static str {
        match self {
            AmplifierInput::Positive => "+",
            AmplifierInput::Negative => "-",
            AmplifierInput::Ground => "⏚",
        }
    }

    /// Short terminal name, e.g. `Positive`
    pub fn terminal_name(&self) -> &'static str {
        match self {
            AmplifierInput::Positive => "Positive",
            AmplifierInput::Negative => "Negative",
            AmplifierInput::Ground => "Ground",
        }
    }

    /// Human-readable name used in feedback messages
    pub fn display_name(&self) -> &'static str {
        match self {
            AmplifierInput::Positive => "positive input",
            AmplifierInput::Negative => "negative input",
            AmplifierInput::Ground => "ground",
        }
    }
}

impl fmt::Display for AmplifierInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A committed wire from an electrode to an amplifier input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Connection {
    pub from: ElectrodeId,
    pub to: AmplifierInput,
}

impl Connection {
    pub fn new(from: ElectrodeId, to: AmplifierInput) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// A point in diagram-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// The origin, used as the resting pointer position when no drag is active
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<egui::Pos2> for Position {
    fn from(pos: egui::Pos2) -> Self {
        Self { x: pos.x, y: pos.y }
    }
}

impl From<Position> for egui::Pos2 {
    fn from(pos: Position) -> Self {
        egui::pos2(pos.x, pos.y)
    }
}
