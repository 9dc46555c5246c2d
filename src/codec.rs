//! Conversion between secret bytes and field integers.
//!
//! Bytes are read as a big-endian unsigned integer. The empty secret encodes to
//! zero. Leading zero bytes carry no value and do not survive a round trip.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{KeysplitError, Result};

pub fn encode(secret: &[u8]) -> BigUint {
    BigUint::from_bytes_be(secret)
}

/// Inverse of [`encode`]: zero decodes to no bytes, anything else to its
/// minimal big-endian representation.
pub fn decode(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        return Vec::new();
    }
    value.to_bytes_be()
}

/// Decodes to text, substituting U+FFFD for every invalid UTF-8 sequence.
pub fn decode_text_lossy(value: &BigUint) -> String {
    String::from_utf8_lossy(&decode(value)).into_owned()
}

pub fn decode_text(value: &BigUint) -> Result<String> {
    String::from_utf8(decode(value)).map_err(|_| KeysplitError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_secret_is_zero() {
        assert!(encode(b"").is_zero());
        assert!(decode(&BigUint::zero()).is_empty());
        assert_eq!(decode_text_lossy(&BigUint::zero()), "");
    }

    #[test]
    fn big_endian_interpretation() {
        assert_eq!(encode(b"hi"), BigUint::from(0x6869u32));
        assert_eq!(encode(&[1, 0]), BigUint::from(256u32));
        assert_eq!(decode(&BigUint::from(256u32)), vec![1, 0]);
    }

    #[test]
    fn text_survives() {
        let secret = "pässwörd ✓";
        assert_eq!(decode_text(&encode(secret.as_bytes())).unwrap(), secret);
    }

    #[test]
    fn leading_zero_bytes_are_dropped() {
        assert_eq!(decode(&encode(&[0, 0, 7])), vec![7]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let value = encode(&[b'o', b'k', 0xff, b'!']);
        assert_eq!(decode_text_lossy(&value), "ok\u{fffd}!");
    }

    #[test]
    fn strict_decode_rejects_invalid_utf8() {
        let value = encode(&[0xc3, 0x28]);
        assert!(matches!(decode_text(&value), Err(KeysplitError::InvalidUtf8)));
    }
}
