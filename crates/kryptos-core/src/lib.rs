//! # kryptos-core
//!
//! Pure, safe Rust implementation of a constraint solver and verifier for a
//! fixed-length classical cipher built from six interleaved periodic
//! polyalphabetic key wheels.
//!
//! This crate computes the class partition of a 97-letter message, models
//! each class's wheel (family, period, phase, residue table), forces residues
//! from known-plaintext anchors, checks the family-specific Option-A
//! non-triviality rule, and runs the mixed-family encrypt/decrypt engine over
//! a completed schedule. No `unsafe` code is permitted at the crate level.

#![deny(unsafe_code)]

/// Fixed length of the message this solver operates over.
pub const MESSAGE_LEN: usize = 97;

pub mod alphabet;
pub mod anchors;
pub mod class;
pub mod engine;
pub mod error;
pub mod family;
pub mod forcer;
pub mod optiona;
pub mod schedule;
pub mod wheel;

pub use alphabet::Letter;
pub use class::{ClassId, class, ordinal_in_class};
pub use error::CoreError;
pub use family::CipherFamily;
pub use schedule::{Schedule, ScheduleShape};
pub use wheel::{Wheel, WheelShape};
