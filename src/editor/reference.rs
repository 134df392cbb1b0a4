//! Reference wiring for the exercise
//!
//! A [`ReferenceMapping`] names exactly one correct amplifier input for every
//! electrode. It doubles as the compatibility table consulted on every drop
//! and as the target configuration checked by validation.

use serde::{Deserialize, Serialize};

use crate::types::{AmplifierInput, Connection, ElectrodeId};

/// The required electrode-to-input wiring for a lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceMapping {
    /// Lead name used in feedback messages
    pub lead_name: String,
    pub right_arm: AmplifierInput,
    pub left_arm: AmplifierInput,
    pub right_leg: AmplifierInput,
}

impl Default for ReferenceMapping {
    fn default() -> Self {
        Self::lead_i()
    }
}

impl ReferenceMapping {
    /// Create a mapping from one input per electrode
    pub fn new(
        lead_name: impl Into<String>,
        right_arm: AmplifierInput,
        left_arm: AmplifierInput,
        right_leg: AmplifierInput,
    ) -> Self {
        Self {
            lead_name: lead_name.into(),
            right_arm,
            left_arm,
            right_leg,
        }
    }

    /// Standard limb Lead I: LA positive, RA negative, RL ground
    pub fn lead_i() -> Self {
        Self::new(
            "Lead I",
            AmplifierInput::Negative,
            AmplifierInput::Positive,
            AmplifierInput::Ground,
        )
    }

    /// The input an electrode must be wired to
    pub fn required(&self, electrode: ElectrodeId) -> AmplifierInput {
        match electrode {
            ElectrodeId::RA => self.right_arm,
            ElectrodeId::LA => self.left_arm,
            ElectrodeId::RL => self.right_leg,
        }
    }

    /// Whether `electrode -> input` is the required wire
    pub fn accepts(&self, electrode: ElectrodeId, input: AmplifierInput) -> bool {
        self.required(electrode) == input
    }

    /// Number of required connections (one per electrode)
    pub fn len(&self) -> usize {
        ElectrodeId::ALL.len()
    }

    /// Always false: every electrode has a required input
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Required connections ordered by amplifier input (positive, negative, ground)
    pub fn connections(&self) -> Vec<Connection> {
        let mut pairs: Vec<Connection> = ElectrodeId::ALL
            .iter()
            .map(|&e| Connection::new(e, self.required(e)))
            .collect();
        pairs.sort_by_key(|c| (c.to, c.from));
        pairs
    }

    /// Whether a connection is part of this mapping
    pub fn contains(&self, connection: &Connection) -> bool {
        self.accepts(connection.from, connection.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_i_mapping() {
        let mapping = ReferenceMapping::lead_i();
        assert_eq!(mapping.required(ElectrodeId::LA), AmplifierInput::Positive);
        assert_eq!(mapping.required(ElectrodeId::RA), AmplifierInput::Negative);
        assert_eq!(mapping.required(ElectrodeId::RL), AmplifierInput::Ground);
        assert_eq!(mapping.len(), 3);
    }

    #[test]
    fn test_accepts_only_required_input() {
        let mapping = ReferenceMapping::lead_i();
        assert!(mapping.accepts(ElectrodeId::LA, AmplifierInput::Positive));
        assert!(!mapping.accepts(ElectrodeId::LA, AmplifierInput::Negative));
        assert!(!mapping.accepts(ElectrodeId::RL, AmplifierInput::Positive));
    }

    #[test]
    fn test_connections_ordered_by_input() {
        let order: Vec<_> = ReferenceMapping::lead_i()
            .connections()
            .iter()
            .map(|c| c.from)
            .collect();
        assert_eq!(order, vec![ElectrodeId::LA, ElectrodeId::RA, ElectrodeId::RL]);
    }

    #[test]
    fn test_custom_mapping_is_data() {
        let swapped = ReferenceMapping::new(
            "Swapped",
            AmplifierInput::Positive,
            AmplifierInput::Negative,
            AmplifierInput::Ground,
        );
        assert!(swapped.accepts(ElectrodeId::RA, AmplifierInput::Positive));
        assert!(!swapped.contains(&Connection::new(ElectrodeId::LA, AmplifierInput::Positive)));
    }
}
