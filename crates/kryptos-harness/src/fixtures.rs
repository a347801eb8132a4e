//! Fixture loading and management.

use kryptos_core::schedule::ScheduleShape;
use serde::{Deserialize, Serialize};

/// One anchor crib in a fixture file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorFixture {
    /// Starting message index.
    pub start: usize,
    /// Plaintext crib text, uppercase `A..Z`.
    pub text: String,
}

/// The verdict a fixture case expects from the feasibility oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpectedOutcome {
    /// Forcing succeeds (the schedule need not be complete).
    Feasible,
    /// Forcing an anchor would force a zero residue on a
    /// Vigenere/VariantBeaufort wheel.
    OptionAViolation,
    /// Two anchors force different residues at the same slot.
    ResidueCollision,
    /// The schedule shape itself is invalid.
    ShapeInvalid,
}

/// A single fixture test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// 97-letter ciphertext, uppercase `A..Z`.
    pub ciphertext: String,
    /// Anchors to force, in any order (the forcer normalizes order itself).
    pub anchors: Vec<AnchorFixture>,
    /// Schedule shape to force under.
    pub shape: ScheduleShape,
    /// Expected oracle verdict.
    pub expected: ExpectedOutcome,
}

/// A collection of fixture cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Parses a fixture set from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes a fixture set to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
