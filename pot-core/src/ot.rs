//! 1-of-N oblivious transfer.
//!
//! Ordinals are 1-based in the scalar arithmetic (`i*t*pkA` for
//! `i in [1, N]`) so that `β = 0` is excluded and no `kp_i` ever
//! trivially collides with `skB * L'`. Callers may still index their
//! own message arrays however they like; only the scalar fed into
//! `calculate_key_points` must be the 1-based ordinal.

use rand_core::{CryptoRng, RngCore};

use crate::curve::{self, G1Affine, Scalar};
use crate::error::PotError;
use crate::rand_utils::random_nonzero_scalar;

fn validate_choice(beta: u64, n: u64) -> Result<(), PotError> {
    if beta < 1 || beta > n {
        return Err(PotError::ChoiceOutOfRange { beta, n });
    }
    Ok(())
}

/// SealChoice(β, pkA, pkB) -> (Y, L).
///
/// Run by the receiver. Draws a fresh non-zero `l`, and returns
/// `L = l*G1` and `Y = β*pkA + l*pkB`. A single observation of `(Y, L)`
/// hides β: for any β' Alice might guess, a unique `l'` exists
/// satisfying both equations, so she gains no distinguishing
/// information.
pub fn seal_choice<R: RngCore + CryptoRng>(
    rng: &mut R,
    beta: u64,
    n: u64,
    pk_a: &G1Affine,
    pk_b: &G1Affine,
) -> Result<(G1Affine, G1Affine), PotError> {
    validate_choice(beta, n)?;
    let l = random_nonzero_scalar(rng).expose();
    let l_point = curve::g1_affine(curve::g1_generator() * l);
    let beta_scalar = Scalar::from(beta);
    let y = curve::g1_affine(*pk_a * beta_scalar + *pk_b * l);
    Ok((y, l_point))
}

/// CalculateKeyPoints(Y, L, pkA, N) -> (kps, L').
///
/// Run by the sender. Draws a fresh non-zero `t` and returns, for every
/// `i in [1, N]`, `kp_i = t*Y - i*t*pkA`, plus `L' = t*L`. For `i = β`
/// this collapses to `l*t*pkB = skB * L'`; for every other `i` it
/// carries an unrecoverable `(β - i)*t*pkA` term that only Alice's
/// secret key could strip.
pub fn calculate_key_points<R: RngCore + CryptoRng>(
    rng: &mut R,
    y: &G1Affine,
    l: &G1Affine,
    pk_a: &G1Affine,
    n: u64,
) -> (Vec<G1Affine>, G1Affine) {
    let t = random_nonzero_scalar(rng).expose();
    let ty = *y * t;
    let kps = (1..=n)
        .map(|i| {
            let i_t = Scalar::from(i) * t;
            curve::g1_affine(ty - *pk_a * i_t)
        })
        .collect();
    let l_prime = curve::g1_affine(*l * t);
    (kps, l_prime)
}

/// RevealKeyPoint(L', skB) -> kp.
///
/// Run by the receiver. `kp = skB * L'`, which by construction equals
/// `kp_β` from [`calculate_key_points`] exactly.
pub fn reveal_key_point(l_prime: &G1Affine, sk_b: Scalar) -> G1Affine {
    curve::g1_affine(*l_prime * sk_b)
}
