//! The full six-wheel key schedule.

use crate::class::{ClassId, NUM_CLASSES, class};
use crate::error::CoreResult;
use crate::wheel::{Wheel, WheelShape};
use serde::{Deserialize, Serialize};

/// The shape (family/L/phase) of all six wheels, in class order `0..=5`.
/// This is the caller-supplied configuration spec.md calls "schedule shape."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleShape {
    /// One shape per class, indexed by `ClassId`.
    pub wheels: [WheelShape; NUM_CLASSES as usize],
}

impl ScheduleShape {
    /// Builds a shape from six `(family, L, phase)` wheel shapes in class
    /// order.
    pub const fn new(wheels: [WheelShape; NUM_CLASSES as usize]) -> Self {
        Self { wheels }
    }

    /// Validates every wheel shape.
    pub fn validate(&self) -> CoreResult<()> {
        for w in &self.wheels {
            w.validate()?;
        }
        Ok(())
    }
}

/// A complete key generator: six `Wheel`s, one per class, born with all
/// residues `unset` and mutated only by monotonic anchor-forcer writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    wheels: [Wheel; NUM_CLASSES as usize],
}

impl Schedule {
    /// Builds an empty schedule from a validated shape.
    pub fn new(shape: &ScheduleShape) -> CoreResult<Self> {
        shape.validate()?;
        let wheels = shape
            .wheels
            .iter()
            .map(|w| Wheel::new(*w))
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Self {
            wheels: wheels
                .try_into()
                .unwrap_or_else(|_| unreachable!("exactly NUM_CLASSES wheels")),
        })
    }

    /// The wheel for class `c`.
    pub fn wheel(&self, c: ClassId) -> &Wheel {
        &self.wheels[c as usize]
    }

    /// Mutable access to the wheel for class `c`, used only by the forcer.
    pub(crate) fn wheel_mut(&mut self, c: ClassId) -> &mut Wheel {
        &mut self.wheels[c as usize]
    }

    /// The wheel that owns message index `i`.
    pub fn wheel_for_index(&self, i: usize) -> &Wheel {
        self.wheel(class(i))
    }

    /// True once every slot addressed by some index `0..97` is filled in
    /// every wheel. Null slots (never addressed) may legitimately remain
    /// `unset` even when the schedule is complete.
    pub fn is_complete(&self) -> bool {
        self.wheels.iter().all(Wheel::is_covered)
    }

    /// The first message index whose addressed slot is still `unset`, if
    /// any. Used to build an `IncompleteSchedule` error with a concrete
    /// offending index.
    pub fn first_incomplete_index(&self) -> Option<usize> {
        (0..crate::MESSAGE_LEN).find(|&i| {
            let w = self.wheel_for_index(i);
            w.residue(w.slot(i)).is_none()
        })
    }

    /// All six wheels, in class order.
    pub fn wheels(&self) -> &[Wheel; NUM_CLASSES as usize] {
        &self.wheels
    }
}
