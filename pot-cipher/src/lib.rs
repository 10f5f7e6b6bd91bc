//! Reference `Encryptor`/`Decryptor` callbacks for `pot-core`.
//!
//! `pot-core`'s PRE operations hand a closure the canonical encoding of
//! a GT element (576 bytes) and expect it to key a symmetric stream
//! cipher over the actual plaintext/ciphertext. This crate is one such
//! keying: HKDF-SHA256 derives a 256-bit key and a 96-bit nonce from
//! the GT bytes, and ChaCha20Poly1305 does the sealing. It is
//! deployment-layer by design — `pot-core` never depends on it, and a
//! caller is free to swap in any other AEAD.

use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Key, Nonce,
};
use hkdf::Hkdf;
use sha2::Sha256;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("HKDF failed to expand the derived key")]
    KeyDerivation,
    #[error("AEAD seal failed")]
    Seal,
    #[error("AEAD open failed: ciphertext is not authentic or was truncated")]
    Open,
}

const HKDF_INFO: &[u8] = b"pot-cipher/chacha20poly1305/v1";

fn derive_key_and_nonce(mask: &[u8]) -> Result<(Key, Nonce), CipherError> {
    let hk = Hkdf::<Sha256>::new(None, mask);
    let mut okm = [0u8; 32 + 12];
    hk.expand(HKDF_INFO, &mut okm)
        .map_err(|_| CipherError::KeyDerivation)?;
    let key = *Key::from_slice(&okm[..32]);
    let nonce = *Nonce::from_slice(&okm[32..]);
    Ok((key, nonce))
}

/// Seal `plaintext` under a key derived from `mask` (the GT bytes
/// `pot-core::pre::encrypt` hands its callback).
pub fn seal(mask: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
    let (key, nonce) = derive_key_and_nonce(mask)?;
    ChaCha20Poly1305::new(&key)
        .encrypt(&nonce, plaintext)
        .map_err(|_| CipherError::Seal)
}

/// Reverse of [`seal`]: open `ciphertext` under a key derived from the
/// same `mask` value (the GT bytes `pot-core::pre::decrypt_by_*` hands
/// its callback).
pub fn open(mask: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
    let (key, nonce) = derive_key_and_nonce(mask)?;
    ChaCha20Poly1305::new(&key)
        .decrypt(&nonce, ciphertext)
        .map_err(|_| CipherError::Open)
}

/// Build an `Encryptor` closure over an in-memory plaintext buffer, in
/// the shape `pot-core::pre::encrypt` expects:
/// `FnOnce(&[u8]) -> Result<(), pot_core::PotError>`. `ciphertext_out`
/// receives the sealed bytes on success.
pub fn encryptor<'a>(
    plaintext: &'a [u8],
    ciphertext_out: &'a mut Vec<u8>,
) -> impl FnOnce(&[u8]) -> Result<(), pot_core::PotError> + 'a {
    move |mask: &[u8]| {
        *ciphertext_out = seal(mask, plaintext).map_err(|e| pot_core::PotError::Cipher(Box::new(e)))?;
        Ok(())
    }
}

/// Build a `Decryptor` closure over an in-memory ciphertext buffer,
/// mirroring [`encryptor`]. `plaintext_out` receives the opened bytes
/// on success.
pub fn decryptor<'a>(
    ciphertext: &'a [u8],
    plaintext_out: &'a mut Vec<u8>,
) -> impl FnOnce(&[u8]) -> Result<(), pot_core::PotError> + 'a {
    move |mask: &[u8]| {
        *plaintext_out = open(mask, ciphertext).map_err(|e| pot_core::PotError::Cipher(Box::new(e)))?;
        Ok(())
    }
}
