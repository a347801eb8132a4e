//! The Encrypt/Decrypt Engine (spec.md §4.5): applies a completed schedule
//! across the whole message, one direction at a time.

use crate::alphabet::Letter;
use crate::class::class;
use crate::error::{CoreError, CoreResult};
use crate::schedule::Schedule;

/// Direction to apply the schedule in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ciphertext letters in, plaintext letters out.
    Decrypt,
    /// Plaintext letters in, ciphertext letters out.
    Encrypt,
}

/// Runs `schedule` over `input` in the given `direction`.
///
/// Pure, O(1) per index beyond the family dispatch; returns
/// `IncompleteSchedule` at the first index whose addressed slot is unset
/// rather than panicking (spec.md §4.5 step 2).
pub fn run(schedule: &Schedule, input: &[Letter], direction: Direction) -> CoreResult<Vec<Letter>> {
    let mut out = Vec::with_capacity(input.len());
    for (i, &letter) in input.iter().enumerate() {
        let wheel = schedule.wheel(class(i));
        let slot = wheel.slot(i);
        let k = wheel
            .residue(slot)
            .ok_or(CoreError::IncompleteSchedule { index: i })?;
        let family = wheel.family();
        out.push(match direction {
            Direction::Decrypt => family.decrypt(letter, k),
            Direction::Encrypt => family.encrypt(letter, k),
        });
    }
    Ok(out)
}

/// Convenience wrapper for [`run`] with [`Direction::Decrypt`].
pub fn decrypt(schedule: &Schedule, ciphertext: &[Letter]) -> CoreResult<Vec<Letter>> {
    run(schedule, ciphertext, Direction::Decrypt)
}

/// Convenience wrapper for [`run`] with [`Direction::Encrypt`].
pub fn encrypt(schedule: &Schedule, plaintext: &[Letter]) -> CoreResult<Vec<Letter>> {
    run(schedule, plaintext, Direction::Encrypt)
}
