//! End-to-end exercise workflow through the session API

mod common;

use common::builders::SessionBuilder;
use common::LEAD_I_WIRING;
use ecg_lead_trainer::{AmplifierInput, Connection, DropOutcome, ElectrodeId, Position, TrainerSession};

fn lead_i_session() -> TrainerSession {
    LEAD_I_WIRING
        .iter()
        .fold(SessionBuilder::new(), |b, &(e, i)| b.wire(e, i))
        .build()
}

#[test]
fn test_correct_wiring_passes_and_shows_waveform() {
    let mut session = lead_i_session();
    assert!(session.editor().is_complete());

    let report = session.check();
    assert!(report.passed);
    assert!(report.message().starts_with("Correct Configuration!"));
    assert!(report.missing.is_empty());

    let waveform = session.waveform().expect("waveform after passing check");
    assert_eq!(waveform.len(), 200);
}

#[test]
fn test_wiring_order_does_not_matter() {
    let mut session = SessionBuilder::new()
        .wire(ElectrodeId::RL, AmplifierInput::Ground)
        .wire(ElectrodeId::LA, AmplifierInput::Positive)
        .wire(ElectrodeId::RA, AmplifierInput::Negative)
        .build();

    assert!(session.check().passed);
}

#[test]
fn test_incomplete_wiring_fails_without_waveform() {
    let mut session = SessionBuilder::new()
        .wire(ElectrodeId::LA, AmplifierInput::Positive)
        .wire(ElectrodeId::RA, AmplifierInput::Negative)
        .build();

    let report = session.check();
    assert!(!report.passed);
    assert_eq!(
        report.missing,
        vec![Connection::new(ElectrodeId::RL, AmplifierInput::Ground)]
    );
    assert!(report.message().contains("Lead I requires:"));
    assert!(session.waveform().is_none());
}

#[test]
fn test_empty_check_fails() {
    let mut session = TrainerSession::default();
    let report = session.check();
    assert!(!report.passed);
    assert_eq!(report.missing.len(), 3);
}

#[test]
fn test_wrong_drop_is_rejected_and_discarded() {
    let (session, outcomes) = SessionBuilder::new()
        .wire(ElectrodeId::LA, AmplifierInput::Negative)
        .wire(ElectrodeId::RL, AmplifierInput::Positive)
        .build_with_outcomes();

    assert!(matches!(
        outcomes[0],
        DropOutcome::Rejected {
            source: ElectrodeId::LA,
            target: AmplifierInput::Negative
        }
    ));
    assert_eq!(
        outcomes[1].describe().as_deref(),
        Some("RL cannot be connected to the positive input")
    );
    assert_eq!(session.editor().connection_count(), 0);
    assert!(!session.editor().gesture().is_active());
}

#[test]
fn test_release_over_empty_space_cancels() {
    let (session, outcomes) = SessionBuilder::new()
        .cancel(ElectrodeId::RA)
        .build_with_outcomes();

    assert_eq!(outcomes, vec![DropOutcome::Cancelled { source: ElectrodeId::RA }]);
    assert_eq!(session.editor().connection_count(), 0);
}

#[test]
fn test_rewiring_same_electrode_keeps_single_wire() {
    let (session, outcomes) = SessionBuilder::new()
        .wire(ElectrodeId::LA, AmplifierInput::Positive)
        .wire(ElectrodeId::LA, AmplifierInput::Positive)
        .build_with_outcomes();

    assert!(matches!(
        outcomes[1],
        DropOutcome::Connected { replaced: true, .. }
    ));
    assert_eq!(session.editor().connection_count(), 1);
}

#[test]
fn test_second_press_during_drag_is_ignored() {
    let mut session = TrainerSession::default();
    assert!(session.press(ElectrodeId::RA, Position::new(1.0, 1.0)));
    assert!(!session.press(ElectrodeId::LA, Position::new(2.0, 2.0)));
    assert_eq!(session.editor().gesture().source(), Some(ElectrodeId::RA));

    let outcome = session.release(Some(AmplifierInput::Negative));
    assert!(outcome.is_committed());
}

#[test]
fn test_release_without_press_is_noop() {
    let mut session = TrainerSession::default();
    assert_eq!(session.release(Some(AmplifierInput::Ground)), DropOutcome::NoGesture);
    assert_eq!(session.editor().connection_count(), 0);
}

#[test]
fn test_drag_tracks_pointer() {
    let mut session = TrainerSession::default();
    session.press(ElectrodeId::RL, Position::new(0.0, 0.0));
    session.drag_to(Position::new(42.0, 24.0));
    assert_eq!(session.editor().gesture().position(), Position::new(42.0, 24.0));
}

#[test]
fn test_reset_clears_everything() {
    let mut session = lead_i_session();
    session.check();
    session.press(ElectrodeId::RA, Position::ORIGIN);

    session.reset();

    assert_eq!(session.editor().connection_count(), 0);
    assert!(!session.editor().gesture().is_active());
    assert!(session.waveform().is_none());
    assert!(session.last_report().is_none());
}

#[test]
fn test_regenerate_replaces_waveform() {
    let mut session = lead_i_session();
    session.check();
    let first = session.waveform().cloned();
    session.regenerate_waveform();
    assert_ne!(session.waveform().cloned(), first);
}

#[test]
fn test_waveform_length_setting_applies_to_next_generation() {
    let mut session = lead_i_session();
    session.set_waveform_length(350);
    session.check();
    assert_eq!(session.waveform().map(|w| w.len()), Some(350));
}
