//! Proof-digest-specific failure kinds, layered on top of `kryptos_core::CoreError`.

use kryptos_core::CoreError;

/// Failures specific to building, parsing, or validating a proof digest.
#[derive(Debug, thiserror::Error)]
pub enum ProofError {
    /// A core-level error (invalid shape, incomplete schedule, etc.).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// JSON (de)serialization failed.
    #[error("proof digest JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A slot addressed by some message index `0..97` had no residue in the
    /// serialized digest (spec.md §4.6 last paragraph).
    #[error("class {class} slot {slot} is addressed by the schedule but absent from the proof digest")]
    AddressedSlotMissing {
        /// Offending class.
        class: u8,
        /// Offending slot.
        slot: usize,
    },

    /// `residues` and `residues_alpha` disagree on some slot.
    #[error("class {class} slot {slot} disagrees between residues and residues_alpha")]
    AlphaMismatch {
        /// Offending class.
        class: u8,
        /// Offending slot.
        slot: usize,
    },
}
