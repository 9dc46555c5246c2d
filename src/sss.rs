use num_bigint::BigUint;
use num_traits::One;
use rand::{rngs::OsRng, CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::codec::encode;
use crate::error::{KeysplitError, Result};
use crate::poly::{eval_poly, sample_polynomial};
use crate::prime::next_prime_at_least;
use crate::share::Share;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ShamirSecretSharing {
    pub threshold: usize,   //t
    pub share_count: usize, //n
}

impl ShamirSecretSharing {
    pub fn new(threshold: usize, share_count: usize) -> Result<Self> {
        if !(1 < threshold && threshold <= share_count) {
            return Err(KeysplitError::InvalidParameters {
                threshold,
                total: share_count,
            });
        }
        Ok(ShamirSecretSharing {
            threshold,
            share_count,
        })
    }

    /// Field modulus for a secret: the smallest probable prime above both the
    /// encoded secret and the largest share index, so every `x` in `1..=n` is
    /// a distinct nonzero field element.
    pub fn modulus_for(&self, secret: &BigUint) -> BigUint {
        let lower = std::cmp::max(secret + BigUint::one(), BigUint::from(self.share_count) + 1u32);
        next_prime_at_least(&lower)
    }

    pub fn share(&self, secret: &[u8]) -> Vec<Share> {
        self.share_with_rng(secret, &mut OsRng)
    }

    pub fn share_with_rng<R: RngCore + CryptoRng>(&self, secret: &[u8], rng: &mut R) -> Vec<Share> {
        let secret = encode(secret);
        let modulus = self.modulus_for(&secret);
        let polynomial = sample_polynomial(&secret, self.threshold, &modulus, rng);

        (1..=self.share_count)
            .map(|i| {
                let x = BigUint::from(i);
                let y = eval_poly(&polynomial, &x, &modulus);
                Share::new(x, y, modulus.clone())
            })
            .collect::<Vec<_>>()
    }
}

/// Splits `secret` into `total` shares, any `threshold` of which recover it.
pub fn split(threshold: usize, secret: &[u8], total: usize) -> Result<Vec<Share>> {
    split_with_rng(threshold, secret, total, &mut OsRng)
}

pub fn split_with_rng<R: RngCore + CryptoRng>(
    threshold: usize,
    secret: &[u8],
    total: usize,
    rng: &mut R,
) -> Result<Vec<Share>> {
    let sss = ShamirSecretSharing::new(threshold, total)?;
    Ok(sss.share_with_rng(secret, rng))
}
