//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use ecg_lead_trainer::{AmplifierInput, ElectrodeId};

/// The Lead I wiring as (electrode, input) pairs
pub const LEAD_I_WIRING: [(ElectrodeId, AmplifierInput); 3] = [
    (ElectrodeId::RA, AmplifierInput::Negative),
    (ElectrodeId::LA, AmplifierInput::Positive),
    (ElectrodeId::RL, AmplifierInput::Ground),
];

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}
