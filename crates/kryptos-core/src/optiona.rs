//! The Option-A checker (spec.md §4.4): an independent audit, run after
//! forcing, of the same non-triviality rule the forcer already enforces
//! on the fly.

use crate::anchors::Anchor;
use crate::class::class;
use crate::error::{CoreError, CoreResult};
use crate::schedule::Schedule;

/// Verifies that for every anchor index addressed by a Vigenere or
/// VariantBeaufort wheel, the residue at its slot is non-zero. Beaufort
/// positions are exempt (spec.md §3, §4.4).
///
/// This is redundant with the forcer's on-the-fly rejection; it exists as a
/// separate audit so a schedule assembled by some other path (e.g. a
/// rederivation) is still checked against the same rule.
pub fn audit(schedule: &Schedule, anchors: &[Anchor]) -> CoreResult<()> {
    for anchor in anchors {
        for (index, _letter) in anchor.expand() {
            let c = class(index);
            let wheel = schedule.wheel(c);
            if !wheel.requires_option_a() {
                continue;
            }
            let slot = wheel.slot(index);
            if wheel.residue(slot) == Some(0) {
                return Err(CoreError::OptionAViolation { class: c, slot, index });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::CipherFamily;
    use crate::forcer::AnchorForcer;
    use crate::schedule::ScheduleShape;
    use crate::wheel::WheelShape;

    fn shape() -> ScheduleShape {
        ScheduleShape::new(std::array::from_fn(|_| WheelShape {
            family: CipherFamily::Vigenere,
            l: 17,
            phase: 0,
        }))
    }

    #[test]
    fn passes_on_a_schedule_the_forcer_already_accepted() {
        let ct: Vec<u8> = (0..97u32).map(|i| (i % 26) as u8).collect();
        let anchors = vec![Anchor::from_str(21, "EAST").unwrap()];
        let mut forcer = AnchorForcer::new(&shape()).unwrap();
        forcer.force_anchors(&ct, &anchors).unwrap();
        assert!(audit(forcer.schedule(), &anchors).is_ok());
    }

    #[test]
    fn beaufort_positions_are_exempt_even_with_zero_residue() {
        let mut beaufort_shape = shape();
        beaufort_shape.wheels[class(21) as usize].family = CipherFamily::Beaufort;
        let mut ct: Vec<u8> = (0..97u32).map(|i| (i % 26) as u8).collect();
        ct[21] = 0;
        let anchors = vec![Anchor::from_str(21, "A").unwrap()];
        let mut forcer = AnchorForcer::new(&beaufort_shape).unwrap();
        forcer.force_anchors(&ct, &anchors).unwrap();
        assert!(audit(forcer.schedule(), &anchors).is_ok());
    }
}
