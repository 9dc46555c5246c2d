use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::{KeysplitError, Result};

/// One point `(x, f(x) mod modulus)` of a split, carrying its own modulus.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Share {
    pub x: BigUint,
    pub y: BigUint,
    pub modulus: BigUint,
}

impl Share {
    pub fn new(x: BigUint, y: BigUint, modulus: BigUint) -> Self {
        Share { x, y, modulus }
    }

    /// Parses a persisted `x y modulus` record. Tokens past the third are
    /// ignored. `id` names the record in errors.
    pub fn from_record(record: &str, id: &str) -> Result<Self> {
        let malformed = |reason: String| KeysplitError::MalformedShare {
            id: id.to_string(),
            reason,
        };

        let tokens: Vec<&str> = record.split_whitespace().take(3).collect();
        if tokens.len() < 3 {
            return Err(malformed(format!(
                "expected 3 integers, found {}",
                tokens.len()
            )));
        }

        let mut values = Vec::with_capacity(3);
        for token in tokens {
            let value = token
                .parse::<BigUint>()
                .map_err(|_| malformed(format!("'{}' is not a non-negative integer", token)))?;
            values.push(value);
        }

        let modulus = values.pop().unwrap_or_default();
        let y = values.pop().unwrap_or_default();
        let x = values.pop().unwrap_or_default();
        if modulus < BigUint::from(2u32) {
            return Err(malformed(format!("modulus {} is below 2", modulus)));
        }
        Ok(Share::new(x, y, modulus))
    }

    pub fn to_record(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.modulus)
    }
}

impl FromStr for Share {
    type Err = KeysplitError;

    fn from_str(s: &str) -> Result<Self> {
        Share::from_record(s, "<record>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record() {
        let share: Share = "3 1234 26731".parse().unwrap();
        assert_eq!(share.x, BigUint::from(3u32));
        assert_eq!(share.y, BigUint::from(1234u32));
        assert_eq!(share.modulus, BigUint::from(26731u32));
    }

    #[test]
    fn tolerates_surrounding_whitespace_and_extra_tokens() {
        let share = Share::from_record("\n 1\t2  5 trailing\n", "share_1.txt").unwrap();
        assert_eq!(share.to_record(), "1 2 5");
    }

    #[test]
    fn record_is_space_separated_without_newline() {
        let share = Share::new(1u32.into(), 2u32.into(), 7u32.into());
        assert_eq!(share.to_record(), "1 2 7");
    }

    #[test]
    fn too_few_tokens() {
        let err = Share::from_record("1 2", "share_1.txt").unwrap_err();
        match err {
            KeysplitError::MalformedShare { id, reason } => {
                assert_eq!(id, "share_1.txt");
                assert!(reason.contains("found 2"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn non_integer_token() {
        assert!(matches!(
            "1 two 7".parse::<Share>(),
            Err(KeysplitError::MalformedShare { .. })
        ));
        assert!(matches!(
            "-1 2 7".parse::<Share>(),
            Err(KeysplitError::MalformedShare { .. })
        ));
    }

    #[test]
    fn degenerate_modulus() {
        assert!(matches!(
            "1 0 1".parse::<Share>(),
            Err(KeysplitError::MalformedShare { .. })
        ));
    }
}
