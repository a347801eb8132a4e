//! SHA-256 helpers for plaintext/ciphertext identity and file manifests
//! (spec.md §6 "Persisted state", §4.7 step 5, §8 property 8).

use kryptos_core::Letter;
use sha2::{Digest, Sha256};

/// Renders letters `0..26` back to uppercase ASCII bytes before hashing, so
/// the digest matches what a caller would get hashing the canonical
/// `ciphertext_97.txt` / `plaintext_97.txt` files.
fn letters_to_ascii(letters: &[Letter]) -> Vec<u8> {
    letters.iter().map(|&l| b'A' + l).collect()
}

/// Computes the lowercase-hex SHA-256 of a letter sequence's ASCII form.
pub fn sha256_hex(letters: &[Letter]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(letters_to_ascii(letters));
    hex_encode(&hasher.finalize())
}

/// Computes the lowercase-hex SHA-256 of raw bytes (for hashing a file's
/// contents directly, e.g. `ciphertext_97.txt`).
pub fn sha256_hex_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex_encode(&hasher.finalize())
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_hex_is_deterministic() {
        let letters: Vec<Letter> = (0..26).collect();
        assert_eq!(sha256_hex(&letters), sha256_hex(&letters));
    }

    #[test]
    fn sha256_hex_matches_raw_bytes_hash() {
        let letters: Vec<Letter> = vec![0, 1, 2]; // "ABC"
        assert_eq!(sha256_hex(&letters), sha256_hex_bytes(b"ABC"));
    }
}
