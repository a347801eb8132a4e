//! Cipher families: the closed set of per-wheel substitution rules.

use crate::alphabet::{Letter, add_mod26, sub_mod26};
use serde::{Deserialize, Serialize};

/// One of the three classical polyalphabetic substitution rules this solver
/// understands. Dispatch is always a three-way match, never subtype
/// polymorphism — the set is closed by the cipher family, not by caller
/// extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherFamily {
    /// `E(P,K) = (P+K) mod 26`, `D(C,K) = (C-K) mod 26`.
    Vigenere,
    /// `E(P,K) = (K-P) mod 26`, `D(C,K) = (K-C) mod 26`.
    Beaufort,
    /// `E(P,K) = (P-K) mod 26`, `D(C,K) = (C+K) mod 26`.
    VariantBeaufort,
}

impl CipherFamily {
    /// Parses the string tag used in a proof digest (`"vigenere"`,
    /// `"beaufort"`, `"variant_beaufort"`, case-insensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "vigenere" => Some(Self::Vigenere),
            "beaufort" => Some(Self::Beaufort),
            "variant_beaufort" | "variantbeaufort" => Some(Self::VariantBeaufort),
            _ => None,
        }
    }

    /// The string tag this family serializes to.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Vigenere => "vigenere",
            Self::Beaufort => "beaufort",
            Self::VariantBeaufort => "variant_beaufort",
        }
    }

    /// Encrypts plaintext letter `p` under key residue `k`.
    pub const fn encrypt(self, p: Letter, k: Letter) -> Letter {
        match self {
            Self::Vigenere => add_mod26(p, k),
            Self::Beaufort => sub_mod26(k, p),
            Self::VariantBeaufort => sub_mod26(p, k),
        }
    }

    /// Decrypts ciphertext letter `c` under key residue `k`.
    pub const fn decrypt(self, c: Letter, k: Letter) -> Letter {
        match self {
            Self::Vigenere => sub_mod26(c, k),
            Self::Beaufort => sub_mod26(k, c),
            Self::VariantBeaufort => add_mod26(c, k),
        }
    }

    /// Derives the key residue `k` that makes `decrypt(c, k) == p`.
    ///
    /// This is the inverse used by the anchor forcer (spec.md §4.3): given a
    /// known `(ciphertext, plaintext)` pair at some index, recover the
    /// residue the family's wheel must hold at that index's slot.
    pub const fn key_for(self, c: Letter, p: Letter) -> Letter {
        match self {
            Self::Vigenere => sub_mod26(c, p),
            Self::Beaufort => add_mod26(p, c),
            Self::VariantBeaufort => sub_mod26(p, c),
        }
    }

    /// Whether this family's Option-A rule forbids a zero residue at anchor
    /// slots. Beaufort carries no such restriction (spec.md §3, §4.4).
    pub const fn requires_option_a(self) -> bool {
        matches!(self, Self::Vigenere | Self::VariantBeaufort)
    }
}
