//! Uniform scalar sampling and deterministic byte-to-scalar derivation.

use ark_ff::{Field, PrimeField};
use ark_std::UniformRand;
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::curve::Scalar;

/// A scalar that zeroizes its backing memory when dropped. Used for
/// every ephemeral value drawn by this crate (`r`, `l`, `t`) and for
/// the per-message ephemeral keys `b_i` derived from them.
///
/// Deliberately not `Copy`: a copy of the inner scalar would escape the
/// zeroize-on-drop guarantee, defeating the point of the wrapper.
pub struct SecretScalar(Scalar);

impl SecretScalar {
    pub(crate) fn new(value: Scalar) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> Scalar {
        self.0
    }
}

impl Zeroize for SecretScalar {
    fn zeroize(&mut self) {
        self.0 = Scalar::from(0u64);
    }
}

impl Drop for SecretScalar {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Sample k uniformly from [0, q), resampling on a zero draw. Terminates
/// almost surely — a zero draw has probability 1/q.
pub fn random_nonzero_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> SecretScalar {
    loop {
        let k = Scalar::rand(rng);
        if !k.is_zero() {
            return SecretScalar::new(k);
        }
    }
}

/// Derive a non-zero scalar from an arbitrary byte string:
///
/// 1. `h <- SHA-256(input)`
/// 2. `k <- BE-integer(h) mod q`
/// 3. if `k == 0`, `h <- SHA-256(h)`, go to 2.
///
/// Implementations MUST match this byte-for-byte, including re-hashing
/// `h` (not the original input) on collision, for sender/receiver to
/// derive the same ephemeral key from the same canonical point
/// encoding.
pub fn derive_scalar_from_bytes(input: &[u8]) -> Scalar {
    let mut h: [u8; 32] = Sha256::digest(input).into();
    loop {
        let k = Scalar::from_be_bytes_mod_order(&h);
        if !k.is_zero() {
            return k;
        }
        h = Sha256::digest(h).into();
    }
}
