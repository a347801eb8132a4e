//! The Rederivation Verifier (C7, spec.md §4.7).

use kryptos_core::error::{CoreError, CoreResult};
use kryptos_core::forcer::AnchorForcer;
use kryptos_core::schedule::{Schedule, ScheduleShape};
use kryptos_core::{Letter, engine};
use kryptos_proof::sha::sha256_hex;

/// Result of a successful rederivation: the schedule recovered from
/// `(ciphertext, plaintext)` plus the plaintext's canonical SHA-256.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RederivationOutcome {
    /// The schedule rebuilt by treating every message index as an anchor.
    pub schedule: Schedule,
    /// SHA-256 (lowercase hex) of the candidate plaintext.
    pub plaintext_sha256: String,
}

/// Recovers wheels from `(ciphertext, plaintext, shape)` and checks the
/// round trip, per spec.md §4.7 steps 1-5:
///
/// 1. Build an empty schedule of the given shape.
/// 2. Treat every `(i, plaintext[i])` as an anchor and force it.
/// 3. Confirm every addressed slot ended up set.
/// 4. Re-run the engine in encrypt direction; the output must equal
///    `ciphertext` exactly.
/// 5. Compute the plaintext's SHA-256 as its canonical identity.
pub fn rederive(
    ciphertext: &[Letter],
    plaintext: &[Letter],
    shape: &ScheduleShape,
) -> CoreResult<RederivationOutcome> {
    if ciphertext.len() != kryptos_core::MESSAGE_LEN {
        return Err(CoreError::InputMalformed {
            detail: format!(
                "ciphertext has {} letters, expected {}",
                ciphertext.len(),
                kryptos_core::MESSAGE_LEN
            ),
        });
    }
    if plaintext.len() != kryptos_core::MESSAGE_LEN {
        return Err(CoreError::InputMalformed {
            detail: format!(
                "plaintext has {} letters, expected {}",
                plaintext.len(),
                kryptos_core::MESSAGE_LEN
            ),
        });
    }

    let mut forcer = AnchorForcer::new(shape)?;
    for (i, &letter) in plaintext.iter().enumerate() {
        forcer.force_index(ciphertext, i, letter)?;
    }
    let schedule = forcer.into_schedule();

    if let Some(index) = schedule.first_incomplete_index() {
        return Err(CoreError::IncompleteSchedule { index });
    }

    let re_encrypted = engine::encrypt(&schedule, plaintext)?;
    if re_encrypted != ciphertext {
        return Err(CoreError::MismatchOnRederivation {
            detail: "re-encrypting the candidate plaintext did not reproduce the ciphertext"
                .to_string(),
        });
    }

    Ok(RederivationOutcome {
        schedule,
        plaintext_sha256: sha256_hex(plaintext),
    })
}

/// Checks the conjunction spec.md §4.7 demands when a bundle declares an
/// expected plaintext SHA-256: rederivation must succeed *and* its digest
/// must match the declared one.
pub fn rederive_and_check_sha(
    ciphertext: &[Letter],
    plaintext: &[Letter],
    shape: &ScheduleShape,
    declared_sha256: &str,
) -> CoreResult<RederivationOutcome> {
    let outcome = rederive(ciphertext, plaintext, shape)?;
    if !outcome.plaintext_sha256.eq_ignore_ascii_case(declared_sha256) {
        return Err(CoreError::MismatchOnRederivation {
            detail: format!(
                "derived SHA-256 {} does not match declared {declared_sha256}",
                outcome.plaintext_sha256
            ),
        });
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kryptos_core::CipherFamily;
    use kryptos_core::class::class;
    use kryptos_core::wheel::WheelShape;

    fn shape() -> ScheduleShape {
        ScheduleShape::new(std::array::from_fn(|_| WheelShape {
            family: CipherFamily::Vigenere,
            l: 17,
            phase: 0,
        }))
    }

    // A period short enough that some classes wrap: with MESSAGE_LEN=97 over
    // six classes, one class has 17 members, so L=10 guarantees at least one
    // slot is addressed by two distinct message indices.
    fn wrapping_shape() -> ScheduleShape {
        ScheduleShape::new(std::array::from_fn(|_| WheelShape {
            family: CipherFamily::Vigenere,
            l: 10,
            phase: 0,
        }))
    }

    fn sample_plaintext() -> Vec<Letter> {
        (0..97u32).map(|i| ((i * 7 + 3) % 26) as Letter).collect()
    }

    fn encrypt_with_arbitrary_schedule(shape: &ScheduleShape, pt: &[Letter]) -> Vec<Letter> {
        // Derive an arbitrary but internally consistent schedule by forcing
        // synthetic key residues, then encrypt through it.
        let mut forcer = AnchorForcer::new(shape).unwrap();
        let synthetic_ct: Vec<Letter> = (0..97u32).map(|i| (i % 26) as Letter).collect();
        for (i, &p) in pt.iter().enumerate() {
            forcer.force_index(&synthetic_ct, i, p).unwrap();
        }
        engine::encrypt(&forcer.into_schedule(), pt).unwrap()
    }

    // Derives ciphertext from a key that depends only on `(class(i), slot)`,
    // so every message index sharing a slot with another agrees by
    // construction. Unlike `encrypt_with_arbitrary_schedule`, this stays
    // self-consistent even when the shape's period is short enough to wrap.
    fn encrypt_with_wrapping_schedule(shape: &ScheduleShape, pt: &[Letter]) -> Vec<Letter> {
        pt.iter()
            .enumerate()
            .map(|(i, &p)| {
                let wheel_shape = shape.wheels[class(i) as usize];
                let slot = wheel_shape.slot(i);
                // `% 25 + 1` keeps the key in `1..=25`, never the zero residue
                // Option-A forbids for Vigenere wheels.
                let key = ((slot as u32 * 7 + class(i) as u32 * 13 + 3) % 25 + 1) as Letter;
                wheel_shape.family.encrypt(p, key)
            })
            .collect()
    }

    #[test]
    fn rederivation_succeeds_and_matches_plaintext_sha() {
        let shape = shape();
        let pt = sample_plaintext();
        let ct = encrypt_with_arbitrary_schedule(&shape, &pt);

        let outcome = rederive(&ct, &pt, &shape).unwrap();
        assert_eq!(outcome.plaintext_sha256, sha256_hex(&pt));
    }

    #[test]
    fn perturbing_one_plaintext_letter_breaks_rederivation() {
        // Under a period of 17 every message index owns a slot no other
        // index addresses, so a single perturbed letter re-derives its own
        // private residue and the round trip "succeeds" vacuously. Use a
        // wrapping period instead, and perturb one of a pair of indices
        // (0 and 60) that provably address the same (class, slot).
        let shape = wrapping_shape();
        assert_eq!(class(0), class(60));
        assert_eq!(shape.wheels[class(0) as usize].slot(0), shape.wheels[class(60) as usize].slot(60));

        let pt = sample_plaintext();
        let ct = encrypt_with_wrapping_schedule(&shape, &pt);

        let mut bad_pt = pt.clone();
        bad_pt[0] = (bad_pt[0] + 1) % 26;

        match rederive(&ct, &bad_pt, &shape) {
            Err(CoreError::ResidueCollision { index, prior_index, .. }) => {
                assert_eq!((prior_index, index), (0, 60));
            }
            Err(CoreError::MismatchOnRederivation { .. }) => {}
            Err(CoreError::OptionAViolation { index, .. }) => assert_eq!(index, 0),
            other => panic!("expected a forcer or round-trip failure, got {other:?}"),
        }
    }

    #[test]
    fn declared_sha_mismatch_is_reported() {
        let shape = shape();
        let pt = sample_plaintext();
        let ct = encrypt_with_arbitrary_schedule(&shape, &pt);
        let err = rederive_and_check_sha(&ct, &pt, &shape, "0000").unwrap_err();
        assert!(matches!(err, CoreError::MismatchOnRederivation { .. }));
    }

    #[test]
    fn wrong_length_input_is_malformed() {
        let shape = shape();
        let err = rederive(&[0u8; 50], &sample_plaintext(), &shape).unwrap_err();
        assert!(matches!(err, CoreError::InputMalformed { .. }));
    }
}
