//! Diagram geometry and hit testing
//!
//! All positions are in diagram-local units on a fixed
//! [`DIAGRAM_WIDTH`] x [`DIAGRAM_HEIGHT`] canvas. [`DiagramTransform`] maps
//! them onto whatever screen rect the canvas is given, preserving aspect.

use egui::{Pos2, Rect, Vec2};

use crate::types::{AmplifierInput, ElectrodeId, Position};

pub const DIAGRAM_WIDTH: f32 = 620.0;
pub const DIAGRAM_HEIGHT: f32 = 520.0;

/// Radius of the drawn connection handles
pub const HANDLE_RADIUS: f32 = 8.0;

/// Pointer distance within which a handle counts as hit
pub const HIT_RADIUS: f32 = 16.0;

/// Top-left vertex of the amplifier triangle; the triangle is 100 wide, 100 tall
pub const AMPLIFIER_ORIGIN: Position = Position { x: 450.0, y: 250.0 };

/// Electrode location on the body figure
pub fn electrode_anchor(electrode: ElectrodeId) -> Position {
    match electrode {
        ElectrodeId::RA => Position::new(340.0, 250.0),
        ElectrodeId::LA => Position::new(170.0, 250.0),
        ElectrodeId::RL => Position::new(230.0, 450.0),
    }
}

/// Amplifier input handle location
pub fn input_anchor(input: AmplifierInput) -> Position {
    match input {
        AmplifierInput::Positive => Position::new(405.0, 265.0),
        AmplifierInput::Negative => Position::new(405.0, 340.0),
        AmplifierInput::Ground => Position::new(500.0, 410.0),
    }
}

/// Where an electrode's label is drawn (above the handle, below for the leg)
pub fn electrode_label_anchor(electrode: ElectrodeId) -> Position {
    let p = electrode_anchor(electrode);
    match electrode {
        ElectrodeId::RL => Position::new(p.x, p.y + 22.0),
        _ => Position::new(p.x, p.y - 18.0),
    }
}

fn nearest_within<T: Copy>(
    candidates: impl IntoIterator<Item = (T, Position)>,
    point: Position,
) -> Option<T> {
    candidates
        .into_iter()
        .map(|(item, anchor)| (item, anchor.distance(point)))
        .filter(|(_, d)| *d <= HIT_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(item, _)| item)
}

/// Electrode handle under `point`, if any
pub fn electrode_at(point: Position) -> Option<ElectrodeId> {
    nearest_within(ElectrodeId::ALL.map(|e| (e, electrode_anchor(e))), point)
}

/// Amplifier input handle under `point`, if any
pub fn input_at(point: Position) -> Option<AmplifierInput> {
    nearest_within(AmplifierInput::ALL.map(|i| (i, input_anchor(i))), point)
}

/// Uniform scale + offset from diagram units to screen points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramTransform {
    pub origin: Pos2,
    pub scale: f32,
}

impl DiagramTransform {
    /// Fit the diagram into `rect`, centered, preserving aspect ratio
    pub fn fit(rect: Rect) -> Self {
        let scale = (rect.width() / DIAGRAM_WIDTH)
            .min(rect.height() / DIAGRAM_HEIGHT)
            .max(0.1);
        let used = Vec2::new(DIAGRAM_WIDTH * scale, DIAGRAM_HEIGHT * scale);
        let origin = rect.center() - used * 0.5;
        Self { origin, scale }
    }

    pub fn to_screen(&self, p: Position) -> Pos2 {
        self.origin + Vec2::new(p.x, p.y) * self.scale
    }

    pub fn to_diagram(&self, p: Pos2) -> Position {
        let local = (p - self.origin) / self.scale;
        Position::new(local.x, local.y)
    }

    /// Scale a length in diagram units
    pub fn len(&self, l: f32) -> f32 {
        l * self.scale
    }
}
