//! Anonymized colour classes for type hashes.

use sha2::{Digest, Sha256};

/// Hex digits kept from the digest.
const CLASS_DIGITS: usize = 6;

/// Map a type hash to a stable class suffix that does not reveal it.
///
/// A leading `#` and letter case are ignored, so `#A0B1C2` and `a0b1c2`
/// share a class.
pub fn obfuscate_type_hash(type_hash: &str) -> String {
    let normalized = type_hash.trim_start_matches('#').to_ascii_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());
    let mut class = String::with_capacity(CLASS_DIGITS);
    for byte in digest.iter().take(CLASS_DIGITS / 2) {
        class.push_str(&format!("{byte:02x}"));
    }
    class
}
