use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

/// Samples `[secret, r_1, .., r_{threshold-1}]` with each `r_i` uniform in `[0, modulus)`.
pub fn sample_polynomial<R: RngCore + CryptoRng>(
    secret: &BigUint,
    threshold: usize,
    modulus: &BigUint,
    rng: &mut R,
) -> Vec<BigUint> {
    let mut coefficients = Vec::with_capacity(threshold);
    coefficients.push(secret.clone());
    let random_coefficients: Vec<BigUint> = (1..threshold)
        .map(|_| rng.gen_biguint_below(modulus))
        .collect();
    coefficients.extend(random_coefficients);
    coefficients
}

/// Evaluates the polynomial at `x` with Horner's rule, constant term first in
/// `coefficients`. The result is always reduced into `[0, modulus)`.
pub fn eval_poly(coefficients: &[BigUint], x: &BigUint, modulus: &BigUint) -> BigUint {
    coefficients
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, c| (acc * x + c) % modulus)
}
