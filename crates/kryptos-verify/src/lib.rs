//! # kryptos-verify
//!
//! The rederivation verifier (spec.md §4.7) and feasibility oracle (spec.md
//! §4.8), built as thin compositions over `kryptos-core`'s forcer and
//! engine. Neither function recovers internally; every outcome is returned
//! as data.

#![deny(unsafe_code)]

pub mod oracle;
pub mod rederive;

pub use oracle::{Feasibility, feasible};
pub use rederive::{RederivationOutcome, rederive};
