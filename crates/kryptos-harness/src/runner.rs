//! Fixture execution engine.

use crate::fixtures::{ExpectedOutcome, FixtureCase, FixtureSet};
use kryptos_core::alphabet::parse_letters;
use kryptos_core::anchors::Anchor;
use kryptos_verify::Feasibility;

/// Outcome of replaying one fixture case.
#[derive(Debug, Clone)]
pub struct VerificationResult {
    /// The fixture case's name.
    pub case_name: String,
    /// Whether the observed verdict matched `expected`.
    pub passed: bool,
    /// Human-readable description of the observed verdict.
    pub observed: String,
}

/// Replays fixture cases against the feasibility oracle.
pub struct TestRunner;

impl TestRunner {
    /// Runs every case in `set`, collecting one result per case.
    pub fn run(set: &FixtureSet) -> Vec<VerificationResult> {
        set.cases.iter().map(Self::run_case).collect()
    }

    fn run_case(case: &FixtureCase) -> VerificationResult {
        let ciphertext = match parse_letters(&case.ciphertext) {
            Ok(letters) => letters,
            Err(offset) => {
                return VerificationResult {
                    case_name: case.name.clone(),
                    passed: matches!(case.expected, ExpectedOutcome::ShapeInvalid),
                    observed: format!("ciphertext byte {offset} is not an uppercase letter"),
                };
            }
        };

        let anchors: Result<Vec<Anchor>, _> = case
            .anchors
            .iter()
            .map(|a| Anchor::from_str(a.start, &a.text))
            .collect();
        let anchors = match anchors {
            Ok(anchors) => anchors,
            Err(e) => {
                return VerificationResult {
                    case_name: case.name.clone(),
                    passed: matches!(case.expected, ExpectedOutcome::ShapeInvalid),
                    observed: e.to_string(),
                };
            }
        };

        let verdict = kryptos_verify::feasible(&ciphertext, &anchors, &case.shape);
        let observed_kind = match &verdict {
            Feasibility::Feasible(_) => ExpectedOutcome::Feasible,
            Feasibility::OptionAViolation { .. } => ExpectedOutcome::OptionAViolation,
            Feasibility::ResidueCollision { .. } => ExpectedOutcome::ResidueCollision,
            Feasibility::ShapeInvalid { .. } => ExpectedOutcome::ShapeInvalid,
        };

        VerificationResult {
            case_name: case.name.clone(),
            passed: observed_kind == case.expected,
            observed: format!("{verdict:?}"),
        }
    }
}
