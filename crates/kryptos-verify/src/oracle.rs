//! The Feasibility Oracle (C9, spec.md §4.8): a pure, total composition
//! used by candidate-sweep callers outside this crate.

use kryptos_core::anchors::Anchor;
use kryptos_core::class::ClassId;
use kryptos_core::error::CoreError;
use kryptos_core::forcer::AnchorForcer;
use kryptos_core::schedule::{Schedule, ScheduleShape};
use kryptos_core::{Letter, alphabet};

/// The verdict the oracle returns for `(ciphertext, anchors, shape)`: a
/// partial schedule on success, or one of the three failure kinds spec.md
/// §4.8 names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feasibility {
    /// The anchor set is jointly satisfiable under this shape.
    Feasible(Schedule),
    /// The shape itself was invalid (bad `L`, phase, or family).
    ShapeInvalid {
        /// Human-readable description.
        detail: String,
    },
    /// Forcing an anchor would have required a zero residue at a
    /// Vigenere/VariantBeaufort slot.
    OptionAViolation {
        /// Offending class.
        class: ClassId,
        /// Offending slot.
        slot: usize,
        /// Offending message index.
        index: usize,
    },
    /// Two anchors imply different residues at the same `(class, slot)`.
    ResidueCollision {
        /// Offending class.
        class: ClassId,
        /// Offending slot.
        slot: usize,
        /// Residue already present.
        existing: Letter,
        /// Residue the second anchor attempted.
        attempted: Letter,
        /// Index of the first write.
        prior_index: usize,
        /// Index of the conflicting write.
        index: usize,
    },
}

impl Feasibility {
    /// Whether this verdict is `Feasible`.
    pub const fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible(_))
    }
}

/// Runs the anchor forcer over `(ciphertext, anchors, shape)` and reports
/// exactly one verdict in `O(|anchors|)` time. Pure and total: every input,
/// valid or not, returns without panicking.
pub fn feasible(ciphertext: &[Letter], anchors: &[Anchor], shape: &ScheduleShape) -> Feasibility {
    if ciphertext.len() != kryptos_core::MESSAGE_LEN {
        return Feasibility::ShapeInvalid {
            detail: format!(
                "ciphertext has {} letters, expected {}",
                ciphertext.len(),
                kryptos_core::MESSAGE_LEN
            ),
        };
    }

    let mut forcer = match AnchorForcer::new(shape) {
        Ok(forcer) => forcer,
        Err(CoreError::ShapeInvalid { detail }) => return Feasibility::ShapeInvalid { detail },
        Err(other) => return Feasibility::ShapeInvalid { detail: other.to_string() },
    };

    match forcer.force_anchors(ciphertext, anchors) {
        Ok(()) => Feasibility::Feasible(forcer.into_schedule()),
        Err(CoreError::OptionAViolation { class, slot, index }) => {
            Feasibility::OptionAViolation { class, slot, index }
        }
        Err(CoreError::ResidueCollision { class, slot, existing, attempted, prior_index, index }) => {
            Feasibility::ResidueCollision { class, slot, existing, attempted, prior_index, index }
        }
        // Anchors built via `Anchor::from_str` are already format- and
        // bounds-checked, so `InputMalformed` here means the caller bypassed
        // that constructor; fold it into `ShapeInvalid` so the oracle still
        // returns one of its three documented failure kinds.
        Err(other) => Feasibility::ShapeInvalid { detail: other.to_string() },
    }
}

/// Parses a ciphertext string and runs [`feasible`], validating the input
/// format first rather than silently truncating or panicking.
pub fn feasible_from_str(ciphertext: &str, anchors: &[Anchor], shape: &ScheduleShape) -> Feasibility {
    let upper = ciphertext.to_ascii_uppercase();
    match alphabet::parse_letters(&upper) {
        Ok(letters) => feasible(&letters, anchors, shape),
        Err(offset) => Feasibility::ShapeInvalid {
            detail: format!("ciphertext byte {offset} is not an ASCII letter"),
        },
    }
}
