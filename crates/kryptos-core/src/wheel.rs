//! Per-class wheel model: `(family, period, phase, residues)`.

use crate::alphabet::Letter;
use crate::class::ordinal_in_class;
use crate::error::{CoreError, CoreResult};
use crate::family::CipherFamily;
use serde::{Deserialize, Serialize};

/// Minimum allowed wheel period.
pub const MIN_PERIOD: u8 = 10;
/// Maximum allowed wheel period.
pub const MAX_PERIOD: u8 = 22;

/// The caller-supplied shape of one class's wheel: family, period, and
/// phase. This is the configuration surface spec.md §4.8/§9 describes —
/// callers supply it, the solver never guesses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelShape {
    /// Cipher family this wheel applies.
    pub family: CipherFamily,
    /// Period (residue table length), must be in `[10,22]`.
    pub l: u8,
    /// Phase offset, must be in `[0,l)`.
    pub phase: u8,
}

impl WheelShape {
    /// Validates the shape against spec.md §4.8's `ShapeInvalid` rule.
    pub fn validate(self) -> CoreResult<()> {
        if !(MIN_PERIOD..=MAX_PERIOD).contains(&self.l) {
            return Err(CoreError::ShapeInvalid {
                detail: format!("L={} out of range [{MIN_PERIOD},{MAX_PERIOD}]", self.l),
            });
        }
        if self.phase as usize >= self.l as usize {
            return Err(CoreError::ShapeInvalid {
                detail: format!("phase={} out of range [0,{})", self.phase, self.l),
            });
        }
        Ok(())
    }

    /// The slot address that message index `i` maps to under this shape.
    pub const fn slot(self, i: usize) -> usize {
        (ordinal_in_class(i) + self.phase as usize) % (self.l as usize)
    }
}

/// One class's wheel: shape plus a write-once residue table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wheel {
    shape: WheelShape,
    residues: Vec<Option<Letter>>,
}

impl Wheel {
    /// Builds an empty wheel (all residues `unset`) from a validated shape.
    pub fn new(shape: WheelShape) -> CoreResult<Self> {
        shape.validate()?;
        Ok(Self {
            shape,
            residues: vec![None; shape.l as usize],
        })
    }

    /// The wheel's shape.
    pub const fn shape(&self) -> WheelShape {
        self.shape
    }

    /// The cipher family this wheel applies.
    pub const fn family(&self) -> CipherFamily {
        self.shape.family
    }

    /// The wheel's period.
    pub const fn period(&self) -> u8 {
        self.shape.l
    }

    /// Whether this wheel enforces Option-A (derived from its family).
    pub const fn requires_option_a(&self) -> bool {
        self.shape.family.requires_option_a()
    }

    /// The slot address that message index `i` maps to.
    pub const fn slot(&self, i: usize) -> usize {
        self.shape.slot(i)
    }

    /// Reads the residue at `slot`, or `None` if unset.
    pub fn residue(&self, slot: usize) -> Option<Letter> {
        self.residues[slot]
    }

    /// Writes `value` to `slot`. Write-once: a second write with a
    /// different value is a collision (returned to the caller, who attaches
    /// the offending indices — the wheel itself has no index context).
    ///
    /// Returns `Ok(true)` if this was a fresh write, `Ok(false)` if it was an
    /// idempotent no-op (same value already present), and `Err(existing)` on
    /// collision.
    pub fn try_write(&mut self, slot: usize, value: Letter) -> Result<bool, Letter> {
        match self.residues[slot] {
            None => {
                self.residues[slot] = Some(value);
                Ok(true)
            }
            Some(existing) if existing == value => Ok(false),
            Some(existing) => Err(existing),
        }
    }

    /// The full residue array, `None` for unset slots.
    pub fn residues(&self) -> &[Option<Letter>] {
        &self.residues
    }

    /// Every slot index this wheel will ever address for some message index
    /// in `0..97` (spec.md §4.6, §9 "Null slots"). Derived by iterating the
    /// message, never hard-coded per `(L, phase)`.
    pub fn addressed_slots(&self) -> Vec<usize> {
        addressed_slots_for(self.shape)
    }

    /// Whether every slot this wheel addresses has a residue.
    pub fn is_covered(&self) -> bool {
        self.addressed_slots()
            .into_iter()
            .all(|s| self.residues[s].is_some())
    }
}

/// Computes the set of slots addressed by some message index `0..97` for a
/// wheel of the given shape, without assuming any particular period. This is
/// the pure, non-hard-coded rule spec.md §9 demands for "null slot per
/// class" reasoning.
pub fn addressed_slots_for(shape: WheelShape) -> Vec<usize> {
    let mut mask = vec![false; shape.l as usize];
    for i in 0..crate::MESSAGE_LEN {
        mask[shape.slot(i)] = true;
    }
    mask.into_iter()
        .enumerate()
        .filter_map(|(slot, present)| present.then_some(slot))
        .collect()
}
