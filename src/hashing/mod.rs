//! PIN hashing and validation.
//!
//! Deletion gating compares a caller-supplied PIN against the hash stored on
//! the entry record. The PIN is never persisted in cleartext.

use crate::constants::PIN_LENGTH;

/// Hashes a PIN with BLAKE3, returned as lowercase hex.
#[inline]
pub fn hash_pin(pin: &str) -> String {
    blake3::hash(pin.as_bytes()).to_hex().to_string()
}

/// Returns `true` if `pin` hashes to `stored_hash`.
///
/// Comparison happens hash-to-hash; the stored value is opaque to callers.
#[inline]
pub fn verify_pin(pin: &str, stored_hash: &str) -> bool {
    hash_pin(pin) == stored_hash
}

/// Returns `true` if `pin` is exactly four ASCII digits.
#[inline]
pub fn is_valid_pin(pin: &str) -> bool {
    pin.len() == PIN_LENGTH && pin.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_pin_determinism() {
        assert_eq!(hash_pin("1234"), hash_pin("1234"));
        assert_ne!(hash_pin("1234"), hash_pin("1235"));
    }

    #[test]
    fn test_hash_pin_is_not_cleartext() {
        let hash = hash_pin("0042");
        assert_ne!(hash, "0042");
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn test_verify_pin_roundtrip() {
        let stored = hash_pin("9876");
        assert!(verify_pin("9876", &stored));
        assert!(!verify_pin("9875", &stored));
        assert!(!verify_pin("", &stored));
    }

    #[test]
    fn test_valid_pin_shapes() {
        assert!(is_valid_pin("0000"));
        assert!(is_valid_pin("1234"));
        assert!(is_valid_pin("0042"));
    }

    #[test]
    fn test_invalid_pin_shapes() {
        assert!(!is_valid_pin(""));
        assert!(!is_valid_pin("123"));
        assert!(!is_valid_pin("12345"));
        assert!(!is_valid_pin("12a4"));
        assert!(!is_valid_pin("12 4"));
        // Non-ASCII digits are rejected even though they are numeric.
        assert!(!is_valid_pin("١٢٣٤"));
    }
}
