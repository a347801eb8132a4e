//! Anchor cribs: known plaintext at a known starting index.

use crate::alphabet::{Letter, parse_letters};
use crate::error::CoreError;

/// A known-plaintext crib: `text` begins at message index `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Starting message index.
    pub start: usize,
    /// Plaintext letters, in order, starting at `start`.
    pub text: Vec<Letter>,
}

impl Anchor {
    /// Builds an anchor from an uppercase ASCII string, validating that
    /// every byte is `A..Z` and that the crib does not run past index 96.
    pub fn from_str(start: usize, text: &str) -> Result<Self, CoreError> {
        let letters = parse_letters(text).map_err(|offset| CoreError::InputMalformed {
            detail: format!("anchor text byte {offset} is not an uppercase ASCII letter"),
        })?;
        if start + letters.len() > crate::MESSAGE_LEN {
            return Err(CoreError::InputMalformed {
                detail: format!(
                    "anchor at start={start} len={} extends past index {}",
                    letters.len(),
                    crate::MESSAGE_LEN - 1
                ),
            });
        }
        Ok(Self { start, text: letters })
    }

    /// Expands this anchor into `(index, letter)` pairs.
    pub fn expand(&self) -> impl Iterator<Item = (usize, Letter)> + '_ {
        self.text
            .iter()
            .enumerate()
            .map(move |(offset, &letter)| (self.start + offset, letter))
    }
}

/// The three canonical reference anchors for this problem (spec.md §6),
/// exposed as data so callers don't need to re-type them. This documents a
/// public fixed input, not a solution — the forcer still has to derive the
/// schedule from them.
pub fn canonical_anchors() -> Vec<Anchor> {
    vec![
        Anchor::from_str(21, "EAST").expect("canonical anchor EAST is well-formed"),
        Anchor::from_str(25, "NORTHEAST").expect("canonical anchor NORTHEAST is well-formed"),
        Anchor::from_str(63, "BERLINCLOCK").expect("canonical anchor BERLINCLOCK is well-formed"),
    ]
}
