use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::codec::{decode, decode_text, decode_text_lossy};
use crate::error::{KeysplitError, Result};
use crate::share::Share;

/// Inverse of `a` modulo `modulus` via the extended Euclidean algorithm, or
/// `None` when `gcd(a, modulus) != 1`.
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    let m = BigInt::from(modulus.clone());
    let a = BigInt::from(a % modulus);
    let egcd = a.extended_gcd(&m);
    if !egcd.gcd.is_one() {
        return None;
    }
    egcd.x.mod_floor(&m).to_biguint()
}

fn neg_mod(a: &BigUint, modulus: &BigUint) -> BigUint {
    (modulus - a % modulus) % modulus
}

fn sub_mod(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    (a % modulus + modulus - b % modulus) % modulus
}

/// Performs a Lagrange interpolation in field Zp at the origin for the
/// polynomial through `points`. The result is the value of the polynomial at
/// x=0, i.e. its constant coefficient.
///
/// Points below the original threshold still yield a field element, just not
/// the shared one.
pub fn lagrange_interpolation_at_zero(
    points: &[(BigUint, BigUint)],
    modulus: &BigUint,
) -> Result<BigUint> {
    if points.is_empty() {
        return Err(KeysplitError::EmptyInput);
    }
    if modulus < &BigUint::from(2u32) {
        return Err(KeysplitError::InvalidModulus(modulus.clone()));
    }

    let mut acc = BigUint::zero();
    for (i, (xi, yi)) in points.iter().enumerate() {
        let mut num = BigUint::one();
        let mut den = BigUint::one();

        for (j, (xj, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let diff = sub_mod(xi, xj, modulus);
            if diff.is_zero() {
                return Err(KeysplitError::DuplicateShare(xi.clone()));
            }
            num = (num * neg_mod(xj, modulus)) % modulus;
            den = (den * diff) % modulus;
        }

        let den_inv = mod_inverse(&den, modulus)
            .ok_or_else(|| KeysplitError::InvalidModulus(modulus.clone()))?;
        acc = (acc + yi * num * den_inv) % modulus;
    }

    Ok(acc)
}

/// Recovers the encoded secret from shares that must all agree on one modulus.
pub fn reconstruct(shares: &[Share]) -> Result<BigUint> {
    let first = shares.first().ok_or(KeysplitError::EmptyInput)?;
    if shares.iter().any(|s| s.modulus != first.modulus) {
        return Err(KeysplitError::ModulusMismatch);
    }

    let points = shares
        .iter()
        .map(|s| (s.x.clone(), s.y.clone()))
        .collect::<Vec<_>>();
    lagrange_interpolation_at_zero(&points, &first.modulus)
}

pub fn recover_secret(shares: &[Share]) -> Result<Vec<u8>> {
    reconstruct(shares).map(|value| decode(&value))
}

/// Recovers the secret as text. With `strict` unset, invalid UTF-8 is replaced
/// by U+FFFD instead of failing.
pub fn recover_text(shares: &[Share], strict: bool) -> Result<String> {
    let value = reconstruct(shares)?;
    if strict {
        decode_text(&value)
    } else {
        Ok(decode_text_lossy(&value))
    }
}
