//! Composite protocol glue: wires OT's sealed key points into PRE's
//! re-key derivation so a proxy can re-encrypt only the β-th ciphertext
//! into a form Bob can decrypt.
//!
//! `AliceSession`/`BobSession` are convenience wrappers over the bare
//! `ot`/`pre`/`rand_utils` functions, added for API ergonomics — every
//! operation they call is also reachable directly for callers who want
//! the primitives without a session object.

use rand_core::{CryptoRng, RngCore};

use crate::curve::{self, G1Affine, G2Affine, Gt, Scalar};
use crate::error::PotError;
use crate::ot;
use crate::pre::{self, Ciphertext};
use crate::rand_utils::{derive_scalar_from_bytes, random_nonzero_scalar};

/// Deterministically derive a PRE ephemeral scalar from a sealed key
/// point's canonical G1 encoding. Only whoever can compute the matching
/// `kp` can compute the matching `b`.
pub fn derive_ephemeral_scalar(kp: &G1Affine) -> Scalar {
    derive_scalar_from_bytes(&curve::g1_to_bytes(kp))
}

/// Alice's long-lived keypair plus the per-session operations she runs:
/// encrypting messages under her public key, and turning Bob's sealed
/// choice into N re-keys once he sends it.
pub struct AliceSession {
    sk: Scalar,
    pub pk: G1Affine,
}

impl AliceSession {
    pub fn new<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let sk = random_nonzero_scalar(rng).expose();
        let pk = curve::g1_affine(curve::g1_generator() * sk);
        Self { sk, pk }
    }

    /// Encrypt(pkA, encryptor) -> A, using Alice's own public key.
    pub fn encrypt_message<R, F>(&self, rng: &mut R, encryptor: F) -> Result<Ciphertext, PotError>
    where
        R: RngCore + CryptoRng,
        F: FnOnce(&[u8]) -> Result<(), PotError>,
    {
        pre::encrypt(rng, &self.pk, encryptor)
    }

    /// Given Bob's `(Y, L)`, derive N re-keys `{rk_i}` and `L'` for the
    /// proxy: one re-key per message index, index-aligned with the
    /// ciphertexts produced by [`AliceSession::encrypt_message`].
    pub fn derive_rekeys<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        y: &G1Affine,
        l: &G1Affine,
        n: u64,
    ) -> Result<(Vec<G2Affine>, G1Affine), PotError> {
        let (key_points, l_prime) = ot::calculate_key_points(rng, y, l, &self.pk, n);
        let rekeys = key_points
            .iter()
            .map(|kp| {
                let b_i = derive_ephemeral_scalar(kp);
                pre::generate_rekey(self.sk, b_i)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok((rekeys, l_prime))
    }
}

/// Bob's long-lived keypair plus the per-session operations he runs:
/// sealing his choice, and decrypting the proxy's re-encrypted output
/// once it comes back.
pub struct BobSession {
    sk: Scalar,
    pub pk: G1Affine,
}

impl BobSession {
    pub fn new<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let sk = random_nonzero_scalar(rng).expose();
        let pk = curve::g1_affine(curve::g1_generator() * sk);
        Self { sk, pk }
    }

    /// SealChoice(β, pkA, pkB) -> (Y, L), sent to Alice.
    pub fn seal_choice<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        beta: u64,
        n: u64,
        pk_a: &G1Affine,
    ) -> Result<(G1Affine, G1Affine), PotError> {
        ot::seal_choice(rng, beta, n, pk_a, &self.pk)
    }

    /// Given `L'` from Alice and the proxy's re-encrypted `A'_β`,
    /// recover the chosen message's GT mask and hand it to `decryptor`.
    pub fn decrypt_selected<F>(
        &self,
        l_prime: &G1Affine,
        a_prime_beta: &Gt,
        decryptor: F,
    ) -> Result<(), PotError>
    where
        F: FnOnce(&[u8]) -> Result<(), PotError>,
    {
        let kp = ot::reveal_key_point(l_prime, self.sk);
        let b = derive_ephemeral_scalar(&kp);
        pre::decrypt_by_receiver(a_prime_beta, b, decryptor)
    }
}

/// The proxy's one operation: re-encrypt every index-aligned
/// `(A_i, rk_i)` pair. It sees no secrets and needs none of Alice's or
/// Bob's session state.
pub fn proxy_re_encrypt_all(pairs: &[(G1Affine, G2Affine)]) -> Vec<Gt> {
    pre::re_encrypt_all(pairs)
}
