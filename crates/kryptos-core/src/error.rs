//! The closed set of verdicts this crate can return (spec.md §7).
//!
//! Every fallible operation returns one of these kinds rather than recovering
//! internally; callers see the same structured payload across runs for
//! identical inputs (spec.md §5, §9 "Determinism").

use crate::alphabet::Letter;
use crate::class::ClassId;

/// A typed failure from class-partition, wheel, forcing, or engine
/// operations. `PartialEq`/`Eq` so tests can assert structural equality of
/// reproduced diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Ciphertext, anchor text, or tail crib was not 97 (or fewer, for a
    /// crib) uppercase `A..Z` letters, or an anchor extends past index 96.
    #[error("malformed input: {detail}")]
    InputMalformed {
        /// Human-readable description of what was malformed.
        detail: String,
    },

    /// A schedule shape named an out-of-range period, phase, or unknown
    /// family tag.
    #[error("invalid schedule shape: {detail}")]
    ShapeInvalid {
        /// Human-readable description of the invalid field.
        detail: String,
    },

    /// At an anchor position with a Vigenere or VariantBeaufort wheel, the
    /// forced residue would be zero.
    #[error("Option-A violation at class {class} slot {slot} (index {index})")]
    OptionAViolation {
        /// Class of the offending wheel.
        class: ClassId,
        /// Slot address within that wheel.
        slot: usize,
        /// Message index that triggered the violation.
        index: usize,
    },

    /// Two anchor positions (or an anchor and a prior derivation) imply
    /// different residues at the same `(class, slot)`.
    #[error(
        "residue collision at class {class} slot {slot}: existing={existing} attempted={attempted} \
         (indices {prior_index} and {index})"
    )]
    ResidueCollision {
        /// Class of the offending wheel.
        class: ClassId,
        /// Slot address within that wheel.
        slot: usize,
        /// Residue already written at this slot.
        existing: Letter,
        /// Residue this write attempted to set.
        attempted: Letter,
        /// Index of the write that first set `existing`.
        prior_index: usize,
        /// Index of the write that attempted `attempted`.
        index: usize,
    },

    /// Encrypt/decrypt was asked to read a slot with no residue written.
    #[error("incomplete schedule: slot addressed by index {index} is unset")]
    IncompleteSchedule {
        /// The message index whose addressed slot was unset.
        index: usize,
    },

    /// Rederivation either failed to re-encrypt to the original ciphertext,
    /// or its plaintext SHA-256 did not match the one declared in the bundle.
    #[error("rederivation mismatch: {detail}")]
    MismatchOnRederivation {
        /// Human-readable description of the mismatch.
        detail: String,
    },
}

/// Convenience alias for fallible core operations.
pub type CoreResult<T> = Result<T, CoreError>;
