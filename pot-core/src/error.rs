use thiserror::Error;

/// Errors returned by `pot-core` operations.
///
/// There is deliberately no entropy-failure variant: every operation
/// here takes a generic `RngCore + CryptoRng` and treats sampling as
/// infallible, matching how `rand_core`'s own sampling methods are
/// infallible.
#[derive(Debug, Error)]
pub enum PotError {
    /// A point or GT element is not a canonical encoding for its group.
    #[error("not a canonical group element encoding")]
    Decode(#[from] ark_serialize::SerializationError),

    /// An inversion was requested of a zero scalar.
    #[error("scalar is zero and has no multiplicative inverse")]
    ZeroScalar,

    /// `beta` is not a valid 1-based choice ordinal for `n` messages.
    #[error("choice index {beta} is out of range for {n} messages")]
    ChoiceOutOfRange { beta: u64, n: u64 },

    /// A cipher callback (`Encryptor`/`Decryptor`) failed. The core
    /// treats the cause as opaque and only propagates it.
    #[error("cipher callback failed")]
    Cipher(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}
