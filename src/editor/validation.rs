//! Validation of a wiring against the reference mapping
//!
//! Validation is a set-equality check: the user's connections must contain
//! every required pair and nothing else.

use std::fmt::Write as _;

use super::reference::ReferenceMapping;
use crate::types::Connection;

/// Result of checking the current connections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Whether the wiring matches the reference exactly
    pub passed: bool,
    /// Lead the wiring was checked against
    pub lead_name: String,
    /// Required connections that are absent
    pub missing: Vec<Connection>,
    /// Present connections that are not required
    pub unexpected: Vec<Connection>,
    /// Full required wiring, for the explanation
    pub required: Vec<Connection>,
}

impl ValidationReport {
    /// Compare a set of connections against the reference mapping
    pub fn evaluate(reference: &ReferenceMapping, connections: &[Connection]) -> Self {
        let required = reference.connections();

        let missing: Vec<Connection> = required
            .iter()
            .filter(|r| !connections.contains(r))
            .copied()
            .collect();

        let mut unexpected: Vec<Connection> = connections
            .iter()
            .filter(|c| !reference.contains(c))
            .copied()
            .collect();
        unexpected.sort();
        unexpected.dedup();

        let passed =
            missing.is_empty() && unexpected.is_empty() && connections.len() == required.len();

        Self {
            passed,
            lead_name: reference.lead_name.clone(),
            missing,
            unexpected,
            required,
        }
    }

    /// Short headline for the result
    pub fn headline(&self) -> &'static str {
        if self.passed {
            "Correct Configuration!"
        } else {
            "Incorrect Configuration!"
        }
    }

    /// Human-readable explanation of the required configuration
    pub fn message(&self) -> String {
        let mut msg = String::new();
        if self.passed {
            let _ = writeln!(msg, "{} {} is properly connected.", self.headline(), self.lead_name);
            for conn in &self.required {
                let _ = writeln!(
                    msg,
                    "{} ({}) → {}",
                    conn.from,
                    conn.from.display_name(),
                    conn.to.terminal_name()
                );
            }
        } else {
            let _ = writeln!(msg, "{} Please check your connections.", self.headline());
            let _ = writeln!(msg, "{} requires:", self.lead_name);
            for conn in &self.required {
                let _ = writeln!(msg, "- {} to {}", conn.from, conn.to);
            }
        }
        msg.trim_end().to_string()
    }
}
