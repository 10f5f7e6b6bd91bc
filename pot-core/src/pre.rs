//! Proxy re-encryption over BLS12-381.
//!
//! A random GT mask `B = e(r*G1, G2)` is hidden behind a G1 ciphertext
//! component `A = r*pkA`. A re-key `rk = (b/a)*G2` lets an untrusted
//! proxy turn `A` into `A' = e(A, rk)`, which only the holder of `b` can
//! collapse back to `B`.

use rand_core::{CryptoRng, RngCore};

use crate::curve::{self, G1Affine, G2Affine, Gt, Scalar};
use crate::error::PotError;
use crate::rand_utils::random_nonzero_scalar;

/// The `A` half of a PRE ciphertext; the opaque symmetric ciphertext is
/// produced by the caller's `encryptor` closure and travels alongside
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ciphertext {
    pub a: G1Affine,
}

/// Encrypt(pkA, encryptor) -> A.
///
/// Draws a fresh non-zero `r`, computes `A = r*pkA` and the GT mask
/// `B = e(r*G1, G2)`, and hands `B`'s canonical encoding to
/// `encryptor`. Any error the callback returns is propagated unchanged.
pub fn encrypt<R, F>(rng: &mut R, pk_a: &G1Affine, encryptor: F) -> Result<Ciphertext, PotError>
where
    R: RngCore + CryptoRng,
    F: FnOnce(&[u8]) -> Result<(), PotError>,
{
    let r = random_nonzero_scalar(rng).expose();
    let a = curve::g1_affine(*pk_a * r);
    let b = curve::pairing(&curve::g1_affine(curve::g1_generator() * r), &curve::g2_affine(curve::g2_generator()));
    encryptor(&curve::gt_to_bytes(&b))?;
    Ok(Ciphertext { a })
}

/// GenerateReKey(a, b) -> rk = (b * a^-1) * G2.
///
/// Requires `a != 0`. The re-key is short-lived and, in the composite
/// protocol, specific to a single message index.
pub fn generate_rekey(a: Scalar, b: Scalar) -> Result<G2Affine, PotError> {
    let inv_a = curve::invert(a)?;
    let rk = curve::g2_generator() * (b * inv_a);
    Ok(curve::g2_affine(rk))
}

/// ReEncrypt(A, rk) -> A' = e(A, rk). No secrets touched — safe for an
/// untrusted proxy to compute.
pub fn re_encrypt(a: &G1Affine, rk: &G2Affine) -> Gt {
    curve::pairing(a, rk)
}

/// Batches `re_encrypt` across an index-aligned list of ciphertext/
/// re-key pairs, preserving order.
pub fn re_encrypt_all(pairs: &[(G1Affine, G2Affine)]) -> Vec<Gt> {
    pairs.iter().map(|(a, rk)| re_encrypt(a, rk)).collect()
}

/// DecryptByReceiver(A', b, decryptor).
///
/// Requires `b != 0`. Computes `B = A'^{b^-1}` and hands its canonical
/// encoding to `decryptor`.
pub fn decrypt_by_receiver<F>(a_prime: &Gt, b: Scalar, decryptor: F) -> Result<(), PotError>
where
    F: FnOnce(&[u8]) -> Result<(), PotError>,
{
    let inv_b = curve::invert(b)?;
    let b_mask = *a_prime * inv_b;
    decryptor(&curve::gt_to_bytes(&b_mask))
}

/// DecryptByOwner(A, a, decryptor).
///
/// Owner path that bypasses the proxy entirely: requires `a != 0`,
/// computes `rG = a^-1 * A` and `B = e(rG, G2)`.
pub fn decrypt_by_owner<F>(a: &G1Affine, a_scalar: Scalar, decryptor: F) -> Result<(), PotError>
where
    F: FnOnce(&[u8]) -> Result<(), PotError>,
{
    let inv_a = curve::invert(a_scalar)?;
    let r_g = curve::g1_affine(*a * inv_a);
    let b = curve::pairing(&r_g, &curve::g2_affine(curve::g2_generator()));
    decryptor(&curve::gt_to_bytes(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::UniformRand;
    use rand::rngs::OsRng;

    fn random_keypair<R: RngCore + CryptoRng>(rng: &mut R) -> (Scalar, G1Affine) {
        let sk = Scalar::rand(rng);
        let pk = curve::g1_affine(curve::g1_generator() * sk);
        (sk, pk)
    }

    #[test]
    fn owner_decrypts_her_own_ciphertext() {
        let mut rng = OsRng;
        let (a_sk, a_pk) = random_keypair(&mut rng);

        let mut captured = Vec::new();
        let ct = encrypt(&mut rng, &a_pk, |mask| {
            captured = mask.to_vec();
            Ok(())
        })
        .unwrap();

        let mut recovered = Vec::new();
        decrypt_by_owner(&ct.a, a_sk, |mask| {
            recovered = mask.to_vec();
            Ok(())
        })
        .unwrap();

        assert_eq!(captured, recovered);
    }

    #[test]
    fn receiver_decrypts_via_delegated_rekey() {
        let mut rng = OsRng;
        let (a_sk, a_pk) = random_keypair(&mut rng);
        let b_sk = Scalar::rand(&mut rng);

        let mut mask = Vec::new();
        let ct = encrypt(&mut rng, &a_pk, |m| {
            mask = m.to_vec();
            Ok(())
        })
        .unwrap();

        let rk = generate_rekey(a_sk, b_sk).unwrap();
        let a_prime = re_encrypt(&ct.a, &rk);

        let mut recovered = Vec::new();
        decrypt_by_receiver(&a_prime, b_sk, |m| {
            recovered = m.to_vec();
            Ok(())
        })
        .unwrap();

        assert_eq!(mask, recovered);
    }

    #[test]
    fn rekey_is_deterministic_in_its_inputs() {
        let mut rng = OsRng;
        let a = Scalar::rand(&mut rng);
        let b = Scalar::rand(&mut rng);
        assert_eq!(generate_rekey(a, b).unwrap(), generate_rekey(a, b).unwrap());
    }

    #[test]
    fn rekey_rejects_zero_a() {
        let mut rng = OsRng;
        let b = Scalar::rand(&mut rng);
        assert!(matches!(
            generate_rekey(Scalar::from(0u64), b),
            Err(PotError::ZeroScalar)
        ));
    }
}
