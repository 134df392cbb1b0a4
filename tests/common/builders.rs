//! Test data builders for creating test objects

use ecg_lead_trainer::{AmplifierInput, DropOutcome, ElectrodeId, Position, TrainerSession};

/// Builder that replays drag gestures onto a fresh session
pub struct SessionBuilder {
    waveform_length: usize,
    drops: Vec<(ElectrodeId, Option<AmplifierInput>)>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            waveform_length: ecg_lead_trainer::waveform::DEFAULT_LENGTH,
            drops: Vec::new(),
        }
    }

    pub fn waveform_length(mut self, length: usize) -> Self {
        self.waveform_length = length;
        self
    }

    /// Drag from `electrode` and release over `input`
    pub fn wire(mut self, electrode: ElectrodeId, input: AmplifierInput) -> Self {
        self.drops.push((electrode, Some(input)));
        self
    }

    /// Drag from `electrode` and release over empty space
    pub fn cancel(mut self, electrode: ElectrodeId) -> Self {
        self.drops.push((electrode, None));
        self
    }

    /// Build the session, returning the outcome of each gesture in order
    pub fn build_with_outcomes(self) -> (TrainerSession, Vec<DropOutcome>) {
        let mut session = TrainerSession::new(Default::default(), self.waveform_length);
        let outcomes = self
            .drops
            .into_iter()
            .map(|(electrode, target)| {
                session.press(electrode, Position::new(10.0, 10.0));
                session.drag_to(Position::new(200.0, 150.0));
                session.release(target)
            })
            .collect();
        (session, outcomes)
    }

    pub fn build(self) -> TrainerSession {
        self.build_with_outcomes().0
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_builder() {
        let session = SessionBuilder::new()
            .wire(ElectrodeId::LA, AmplifierInput::Positive)
            .build();

        assert_eq!(session.editor().connection_count(), 1);
        assert!(!session.editor().gesture().is_active());
    }
}
