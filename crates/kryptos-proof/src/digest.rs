//! The proof digest schema (spec.md §4.6): per-class `{family, L, phase,
//! residues, present_slots_mask}` plus the redundant human-readable fields
//! and top-level verification bookkeeping.

use crate::error::ProofError;
use kryptos_core::wheel::addressed_slots_for;
use kryptos_core::{CipherFamily, Schedule, Wheel};
use serde::{Deserialize, Serialize};

/// One class's serialized wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelDigest {
    /// Class id `0..=5`.
    pub class_id: u8,
    /// Cipher family tag (`"vigenere"`, `"beaufort"`, `"variant_beaufort"`).
    pub family: String,
    /// Period.
    pub l: u8,
    /// Phase.
    pub phase: u8,
    /// Residues, `None` for unset slots.
    pub residues: Vec<Option<char>>,
    /// Redundant human-readable form: `'.'` marks an unset slot.
    pub residues_alpha: String,
    /// Bitstring of length `l`, `'1'` where `residues[k]` is present.
    pub present_slots_mask: String,
    /// Bitstring of length `l`, `'1'` where some message index `0..97`
    /// addresses that slot. Differs from `present_slots_mask` only when a
    /// slot is set-but-unaddressed, or addressed-but-unset.
    pub addressed_slots_mask: String,
}

impl WheelDigest {
    /// Builds the serialized form of one class's wheel.
    pub fn from_wheel(class_id: u8, wheel: &Wheel) -> Self {
        let shape = wheel.shape();
        let residues: Vec<Option<char>> = wheel
            .residues()
            .iter()
            .map(|r| r.map(|letter| (b'A' + letter) as char))
            .collect();
        let residues_alpha: String = residues.iter().map(|r| r.unwrap_or('.')).collect();
        let present_slots_mask: String = residues
            .iter()
            .map(|r| if r.is_some() { '1' } else { '0' })
            .collect();
        let addressed: std::collections::HashSet<usize> =
            addressed_slots_for(shape).into_iter().collect();
        let addressed_slots_mask: String = (0..shape.l as usize)
            .map(|slot| if addressed.contains(&slot) { '1' } else { '0' })
            .collect();

        Self {
            class_id,
            family: shape.family.tag().to_string(),
            l: shape.l,
            phase: shape.phase,
            residues,
            residues_alpha,
            present_slots_mask,
            addressed_slots_mask,
        }
    }

    /// Validates internal consistency: `residues_alpha` must agree with
    /// `residues`, and every addressed slot must be present.
    pub fn validate(&self) -> Result<(), ProofError> {
        for (slot, residue) in self.residues.iter().enumerate() {
            let alpha_char = self.residues_alpha.as_bytes()[slot] as char;
            let matches = match residue {
                Some(c) => alpha_char == *c,
                None => alpha_char == '.',
            };
            if !matches {
                return Err(ProofError::AlphaMismatch { class: self.class_id, slot });
            }
        }
        for (slot, marker) in self.addressed_slots_mask.bytes().enumerate() {
            if marker == b'1' && self.residues[slot].is_none() {
                return Err(ProofError::AddressedSlotMissing { class: self.class_id, slot });
            }
        }
        Ok(())
    }

    /// The family this wheel digest declares.
    pub fn family(&self) -> Option<CipherFamily> {
        CipherFamily::from_tag(&self.family)
    }
}

/// A single entry in the Option-A audit ledger: empty on a fully successful
/// digest, populated only if a caller chooses to record near-miss checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionACheckEntry {
    /// Class the check ran against.
    pub class_id: u8,
    /// Message index checked.
    pub index: usize,
    /// Whether the residue at that index's slot was non-zero.
    pub passed: bool,
}

/// The serialized form of a complete `Schedule`: six `WheelDigest`s plus
/// top-level verification bookkeeping (spec.md §6 "enhanced" proof digest).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofDigest {
    /// One entry per class, in class order.
    pub wheels: Vec<WheelDigest>,
    /// Option-A audit ledger; empty on success.
    pub optiona_checks: Vec<OptionACheckEntry>,
    /// Whether the producer ran the rederivation verifier (`kryptos-verify`)
    /// and obtained a matching SHA-256.
    pub derivation_verified: bool,
}

impl ProofDigest {
    /// Serializes a schedule into its enhanced proof digest form.
    pub fn from_schedule(schedule: &Schedule, derivation_verified: bool) -> Self {
        let wheels = schedule
            .wheels()
            .iter()
            .enumerate()
            .map(|(class_id, wheel)| WheelDigest::from_wheel(class_id as u8, wheel))
            .collect();
        Self { wheels, optiona_checks: Vec::new(), derivation_verified }
    }

    /// Validates every wheel digest.
    pub fn validate(&self) -> Result<(), ProofError> {
        for wheel in &self.wheels {
            wheel.validate()?;
        }
        Ok(())
    }

    /// Parses a proof digest from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ProofError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes this digest to pretty JSON.
    pub fn to_json(&self) -> Result<String, ProofError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
