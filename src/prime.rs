use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

/// Fermat witnesses tried by [`is_probable_prime`].
pub const FERMAT_WITNESSES: [u32; 5] = [2, 3, 5, 7, 11];

/// Fermat test against [`FERMAT_WITNESSES`], skipping any witness `>= x`.
///
/// This is not a proof of primality. Carmichael numbers coprime to every
/// witness (29341 is the smallest) pass the test. For moduli sized to short
/// secrets the chance of landing on one is negligible, which is the only
/// guarantee this function makes.
pub fn is_probable_prime(x: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if x < &two {
        return false;
    }
    if x.is_even() {
        return *x == two;
    }

    let exponent = x - &BigUint::one();
    for witness in FERMAT_WITNESSES {
        let base = BigUint::from(witness);
        if &base >= x {
            break;
        }
        if !base.modpow(&exponent, x).is_one() {
            return false;
        }
    }
    true
}

/// Smallest probable prime `p >= n`.
///
/// Only odd candidates are tested once `n > 2`; the search has no upper bound.
pub fn next_prime_at_least(n: &BigUint) -> BigUint {
    let two = BigUint::from(2u32);
    if *n <= two {
        return two;
    }

    let mut candidate = n.clone() | BigUint::one();
    while !is_probable_prime(&candidate) {
        candidate += 2u32;
    }
    candidate
}
