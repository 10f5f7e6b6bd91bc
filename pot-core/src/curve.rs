//! Group and scalar wrappers over BLS12-381.
//!
//! `G1`/`G2` are the prime-order source groups of the pairing, `Gt` is
//! the target group. `Scalar` is the common field `Fr` underlying both
//! source groups' order `q`. Everything here is a thin wrapper around
//! `ark-bls12-381`/`ark-ec`; the point of this module is to fix one
//! canonical serialization per group and to give the rest of the crate
//! two deserialization entry points per group instead of one, matching
//! the trusted/untrusted distinction peers and local buffers need.

use ark_ec::{
    pairing::{Pairing, PairingOutput},
    CurveGroup, Group,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::error::PotError;

pub use ark_bls12_381::{
    Bls12_381, Fr as Scalar, G1Affine, G1Projective, G2Affine, G2Projective,
};

/// Target group element, `e(G1, G2)`. Written additively: `a + b`
/// corresponds to the multiplicative `a * b` in the pairing's textbook
/// notation, and `a * scalar` corresponds to `a^scalar`.
pub type Gt = PairingOutput<Bls12_381>;

/// Compressed G1 point, 48 bytes.
pub const G1_BYTES: usize = 48;
/// Compressed G2 point, 96 bytes.
pub const G2_BYTES: usize = 96;
/// Uncompressed GT element, 576 bytes (12 limbs of 48 bytes each).
pub const GT_BYTES: usize = 576;

/// The big-endian bytes of `q`, the prime order of the G1/G2 subgroups
/// and the modulus `Scalar` arithmetic is done under. Diagnostic only;
/// every scalar operation in this crate goes through `Scalar`/`Fr`
/// directly rather than through this encoding.
pub fn subgroup_order_be_bytes() -> Vec<u8> {
    use ark_ff::{BigInteger, PrimeField};
    Scalar::MODULUS.to_bytes_be()
}

/// `g1 * G1`
pub fn g1_generator() -> G1Projective {
    G1Projective::generator()
}

/// `g2 * G2`
pub fn g2_generator() -> G2Projective {
    G2Projective::generator()
}

/// `e(p, q)`
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
    Bls12_381::pairing(*p, *q)
}

/// `scalar^{-1} mod q`. Fails on a zero scalar — callers must not reach
/// this with a zero `a`/`b`, since derived scalars are always non-zero
/// by construction.
pub fn invert(scalar: Scalar) -> Result<Scalar, PotError> {
    use ark_ff::Field;
    scalar.inverse().ok_or(PotError::ZeroScalar)
}

pub fn g1_to_bytes(p: &G1Affine) -> [u8; G1_BYTES] {
    let mut buf = [0u8; G1_BYTES];
    p.serialize_compressed(&mut buf[..])
        .expect("fixed-size G1 buffer");
    buf
}

/// Decode a G1 point received from an untrusted peer. Performs the
/// on-curve and subgroup checks.
pub fn g1_from_bytes_checked(bytes: &[u8]) -> Result<G1Affine, PotError> {
    G1Affine::deserialize_compressed(bytes).map_err(PotError::from)
}

/// Decode a G1 point produced by this crate's own serialization (e.g.
/// round-tripping through a local buffer). Skips the subgroup check.
pub fn g1_from_bytes_trusted(bytes: &[u8]) -> Result<G1Affine, PotError> {
    G1Affine::deserialize_compressed_unchecked(bytes).map_err(PotError::from)
}

pub fn g2_to_bytes(p: &G2Affine) -> [u8; G2_BYTES] {
    let mut buf = [0u8; G2_BYTES];
    p.serialize_compressed(&mut buf[..])
        .expect("fixed-size G2 buffer");
    buf
}

pub fn g2_from_bytes_checked(bytes: &[u8]) -> Result<G2Affine, PotError> {
    G2Affine::deserialize_compressed(bytes).map_err(PotError::from)
}

pub fn g2_from_bytes_trusted(bytes: &[u8]) -> Result<G2Affine, PotError> {
    G2Affine::deserialize_compressed_unchecked(bytes).map_err(PotError::from)
}

pub fn gt_to_bytes(p: &Gt) -> [u8; GT_BYTES] {
    let mut buf = [0u8; GT_BYTES];
    p.serialize_uncompressed(&mut buf[..])
        .expect("fixed-size GT buffer");
    buf
}

pub fn gt_from_bytes_checked(bytes: &[u8]) -> Result<Gt, PotError> {
    Gt::deserialize_uncompressed(bytes).map_err(PotError::from)
}

pub(crate) fn g1_affine(p: G1Projective) -> G1Affine {
    p.into_affine()
}

pub(crate) fn g2_affine(p: G2Projective) -> G2Affine {
    p.into_affine()
}
