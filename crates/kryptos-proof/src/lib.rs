//! # kryptos-proof
//!
//! Serialization schema for the proof digest spec.md §4.6/§6 describes: the
//! serialized form of a complete (or partial) `kryptos_core::Schedule`, plus
//! the SHA-256 manifest helpers used to check rederivation parity (§4.7,
//! §8 property 8).

#![deny(unsafe_code)]

pub mod digest;
pub mod error;
pub mod sha;

pub use digest::{ProofDigest, WheelDigest};
pub use error::ProofError;
