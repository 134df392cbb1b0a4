//! Connection editor: the drag-to-connect state machine
//!
//! The editor owns the committed connections and the in-progress drag
//! gesture. A gesture starts on an electrode, follows the pointer, and is
//! resolved when the pointer is released. Only the wire required by the
//! [`ReferenceMapping`] is ever committed, so the stored set never holds an
//! incorrect or partial connection.
//!
//! # Gesture lifecycle
//!
//! ```text
//!   Idle ──begin_drag──▶ Active ──update_drag──▶ Active
//!    ▲                      │
//!    └──────end_drag────────┘   (always, matched or not)
//! ```
//!
//! # Example
//!
//! ```
//! use ecg_lead_trainer::editor::{ConnectionEditor, DropOutcome};
//! use ecg_lead_trainer::types::{AmplifierInput, ElectrodeId, Position};
//!
//! let mut editor = ConnectionEditor::default();
//! editor.begin_drag(ElectrodeId::LA, Position::new(170.0, 250.0));
//! let outcome = editor.end_drag(Some(AmplifierInput::Positive));
//! assert!(matches!(outcome, DropOutcome::Connected { .. }));
//! assert!(!editor.gesture().is_active());
//! ```

pub mod reference;
pub mod validation;

pub use reference::ReferenceMapping;
pub use validation::ValidationReport;

use std::collections::BTreeMap;

use crate::types::{AmplifierInput, Connection, ElectrodeId, Position};

/// Transient pointer-drag state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragGesture {
    /// No drag in progress
    #[default]
    Idle,
    /// Dragging a wire out of `source`, pointer currently at `position`
    Active {
        source: ElectrodeId,
        position: Position,
    },
}

impl DragGesture {
    pub fn is_active(&self) -> bool {
        matches!(self, DragGesture::Active { .. })
    }

    /// Electrode the wire is being dragged from
    pub fn source(&self) -> Option<ElectrodeId> {
        match self {
            DragGesture::Active { source, .. } => Some(*source),
            DragGesture::Idle => None,
        }
    }

    /// Current pointer position, or the origin when idle
    pub fn position(&self) -> Position {
        match self {
            DragGesture::Active { position, .. } => *position,
            DragGesture::Idle => Position::ORIGIN,
        }
    }
}

/// How a drag gesture was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The required wire was committed; `replaced` is set when it replaced
    /// an existing wire from the same electrode
    Connected {
        connection: Connection,
        replaced: bool,
    },
    /// Dropped on an input the electrode must not be wired to
    Rejected {
        source: ElectrodeId,
        target: AmplifierInput,
    },
    /// Released away from any input
    Cancelled { source: ElectrodeId },
    /// Released while no drag was active
    NoGesture,
}

impl DropOutcome {
    /// Whether the connection set changed
    pub fn is_committed(&self) -> bool {
        matches!(self, DropOutcome::Connected { .. })
    }

    /// Feedback line for the status bar, if the outcome warrants one
    pub fn describe(&self) -> Option<String> {
        match self {
            DropOutcome::Connected { connection, .. } => Some(format!("Connected {}", connection)),
            DropOutcome::Rejected { source, target } => Some(format!(
                "{} cannot be connected to the {}",
                source, target
            )),
            DropOutcome::Cancelled { .. } | DropOutcome::NoGesture => None,
        }
    }
}

/// Tracks connection attempts and validates the resulting wiring
#[derive(Debug, Clone, Default)]
pub struct ConnectionEditor {
    reference: ReferenceMapping,
    /// Keyed by source so each electrode holds at most one wire
    connections: BTreeMap<ElectrodeId, AmplifierInput>,
    gesture: DragGesture,
}

impl ConnectionEditor {
    /// Create an editor checking against the given reference mapping
    pub fn new(reference: ReferenceMapping) -> Self {
        Self {
            reference,
            connections: BTreeMap::new(),
            gesture: DragGesture::Idle,
        }
    }

    /// Start dragging a wire from `source`.
    ///
    /// Returns `false` and leaves the current gesture untouched if a drag is
    /// already in progress.
    pub fn begin_drag(&mut self, source: ElectrodeId, position: Position) -> bool {
        if self.gesture.is_active() {
            tracing::trace!("Ignoring drag from {} while another drag is active", source);
            return false;
        }
        tracing::debug!("Begin drag from {}", source);
        self.gesture = DragGesture::Active { source, position };
        true
    }

    /// Move the dragged wire end to `position`. No-op when idle.
    pub fn update_drag(&mut self, position: Position) {
        if let DragGesture::Active { position: current, .. } = &mut self.gesture {
            *current = position;
        }
    }

    /// Resolve the current gesture against `target`.
    ///
    /// The wire is committed only if `target` is the input the reference
    /// mapping requires for the gesture's source. The gesture is idle
    /// afterward in every case.
    pub fn end_drag(&mut self, target: Option<AmplifierInput>) -> DropOutcome {
        let gesture = std::mem::take(&mut self.gesture);

        let DragGesture::Active { source, .. } = gesture else {
            return DropOutcome::NoGesture;
        };

        let outcome = match target {
            Some(target) if self.reference.accepts(source, target) => {
                let replaced = self.connections.insert(source, target).is_some();
                DropOutcome::Connected {
                    connection: Connection::new(source, target),
                    replaced,
                }
            }
            Some(target) => DropOutcome::Rejected { source, target },
            None => DropOutcome::Cancelled { source },
        };

        tracing::debug!("End drag from {}: {:?}", source, outcome);
        outcome
    }

    /// Check the current wiring against the reference mapping
    pub fn validate(&self) -> ValidationReport {
        let report = ValidationReport::evaluate(&self.reference, &self.connections());
        tracing::info!(
            passed = report.passed,
            connections = self.connections.len(),
            "Validated wiring for {}",
            report.lead_name
        );
        report
    }

    /// Clear all connections and any in-progress drag
    pub fn reset(&mut self) {
        tracing::debug!("Reset {} connection(s)", self.connections.len());
        self.connections.clear();
        self.gesture = DragGesture::Idle;
    }

    /// Committed connections, ordered by electrode
    pub fn connections(&self) -> Vec<Connection> {
        self.connections
            .iter()
            .map(|(&from, &to)| Connection::new(from, to))
            .collect()
    }

    /// The wire currently attached to `source`, if any
    pub fn connection_for(&self, source: ElectrodeId) -> Option<Connection> {
        self.connections
            .get(&source)
            .map(|&to| Connection::new(source, to))
    }

    /// Number of committed connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    pub fn reference(&self) -> &ReferenceMapping {
        &self.reference
    }

    /// Whether every electrode is wired
    pub fn is_complete(&self) -> bool {
        self.connections.len() == self.reference.len()
    }
}
