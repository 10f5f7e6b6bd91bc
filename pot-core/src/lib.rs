//! Proxy oblivious transfer (POT) over BLS12-381.
//!
//! A sender ("Alice") uploads encrypted messages to an untrusted proxy;
//! a receiver ("Bob") privately selects one by index; the proxy
//! re-encrypts only the chosen message into a form Bob can decrypt —
//! without the proxy learning which message was chosen, without Bob
//! learning the others, and without Alice learning Bob's choice.
//!
//! This crate is the cryptographic core only: the algebra over
//! BLS12-381's G1/G2/GT, the 1-of-N OT sealing/reveal, the PRE
//! encrypt/re-key/decrypt operations, and the scalar derivation that
//! glues them together. It does not implement a symmetric cipher
//! (see `pot-cipher` for a reference one), a transport, persistence,
//! or party authentication.
//!
//! The four modules mirror the protocol's own layering: [`curve`] and
//! [`rand_utils`] are leaf utilities; [`pre`] and [`ot`] are the two
//! primitives the protocol composes; [`protocol`] wires them together.

pub mod curve;
pub mod error;
pub mod ot;
pub mod pre;
pub mod protocol;
pub mod rand_utils;

pub use error::PotError;
pub use protocol::{derive_ephemeral_scalar, proxy_re_encrypt_all, AliceSession, BobSession};
