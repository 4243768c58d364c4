//! Cryptographic backend used for signatures.
//!
//! The signature scheme only needs a SHA-1 digest and a slice comparison, but both are routed
//! through the [`Cryptographer`] trait so that applications can pick between `ring` (the default)
//! and `openssl`, or supply their own implementation with [`set_cryptographer`].
use failure::Fail;

pub(crate) mod holder;
pub(crate) use holder::get_cryptographer;
pub use holder::{set_boxed_cryptographer, set_cryptographer, SetCryptographerError};

#[cfg(feature = "use_ring")]
pub(crate) mod ring;

#[cfg(feature = "use_openssl")]
pub(crate) mod openssl;

#[derive(Debug, Fail)]
pub enum CryptoError {
    #[fail(display = "No cryptographer has been configured")]
    Uninitialized,

    #[fail(display = "{}", _0)]
    Other(failure::Error),
}

/// An incremental digest computation.
pub trait Hasher {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError>;
    fn finish(&mut self) -> Result<Vec<u8>, CryptoError>;
}

/// The operations this crate needs from a cryptographic library.
pub trait Cryptographer: Send + Sync + 'static {
    /// Start a new SHA-1 digest.
    fn new_sha1(&self) -> Result<Box<dyn Hasher>, CryptoError>;

    /// Compare two byte strings.  Slices of different lengths are never equal.
    fn constant_time_compare(&self, a: &[u8], b: &[u8]) -> bool;
}

/// Compute the SHA-1 digest of the concatenation of `parts` with the configured backend.
pub(crate) fn sha1(parts: &[&[u8]]) -> Result<Vec<u8>, CryptoError> {
    let mut hasher = get_cryptographer()?.new_sha1()?;
    for part in parts {
        hasher.update(part)?;
    }
    hasher.finish()
}

pub(crate) fn constant_time_compare(a: &[u8], b: &[u8]) -> Result<bool, CryptoError> {
    Ok(get_cryptographer()?.constant_time_compare(a, b))
}
