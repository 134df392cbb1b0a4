//! Trainer session: the single owner of exercise state
//!
//! The frontend never touches the editor or the waveform directly. Every
//! pointer event and button press goes through a [`TrainerSession`] method,
//! so each UI event applies exactly one state transition.

use crate::editor::{ConnectionEditor, DropOutcome, ReferenceMapping, ValidationReport};
use crate::types::{AmplifierInput, ElectrodeId, Position};
use crate::waveform::{Waveform, WaveformGenerator, DEFAULT_LENGTH};

/// Exercise state shared by the diagram, toolbar and plot
#[derive(Debug, Clone)]
pub struct TrainerSession {
    editor: ConnectionEditor,
    generator: WaveformGenerator,
    waveform: Option<Waveform>,
    last_report: Option<ValidationReport>,
    waveform_length: usize,
}

impl Default for TrainerSession {
    fn default() -> Self {
        Self::new(ReferenceMapping::default(), DEFAULT_LENGTH)
    }
}

impl TrainerSession {
    pub fn new(reference: ReferenceMapping, waveform_length: usize) -> Self {
        Self {
            editor: ConnectionEditor::new(reference),
            generator: WaveformGenerator::new(),
            waveform: None,
            last_report: None,
            waveform_length,
        }
    }

    /// Pointer pressed on an electrode
    pub fn press(&mut self, electrode: ElectrodeId, position: Position) -> bool {
        self.editor.begin_drag(electrode, position)
    }

    /// Pointer moved while held
    pub fn drag_to(&mut self, position: Position) {
        self.editor.update_drag(position);
    }

    /// Pointer released, over an amplifier input or not
    pub fn release(&mut self, target: Option<AmplifierInput>) -> DropOutcome {
        self.editor.end_drag(target)
    }

    /// Validate the wiring. On pass a fresh waveform is generated.
    pub fn check(&mut self) -> &ValidationReport {
        let report = self.editor.validate();
        if report.passed {
            self.regenerate_waveform();
        }
        self.last_report.insert(report)
    }

    /// Replace the waveform with a freshly generated one
    pub fn regenerate_waveform(&mut self) -> &Waveform {
        let waveform = self.generator.generate(self.waveform_length);
        self.waveform.insert(waveform)
    }

    /// Clear connections, the drag gesture, the waveform and the last report
    pub fn reset(&mut self) {
        self.editor.reset();
        self.waveform = None;
        self.last_report = None;
    }

    /// Change the number of samples generated from now on
    pub fn set_waveform_length(&mut self, length: usize) {
        self.waveform_length = length;
    }

    pub fn waveform_length(&self) -> usize {
        self.waveform_length
    }

    pub fn editor(&self) -> &ConnectionEditor {
        &self.editor
    }

    pub fn waveform(&self) -> Option<&Waveform> {
        self.waveform.as_ref()
    }

    pub fn last_report(&self) -> Option<&ValidationReport> {
        self.last_report.as_ref()
    }
}
