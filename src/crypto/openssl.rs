use super::{CryptoError, Cryptographer, Hasher};
use openssl::error::ErrorStack;
use openssl::hash::MessageDigest;

impl From<ErrorStack> for CryptoError {
    fn from(e: ErrorStack) -> Self {
        CryptoError::Other(e.into())
    }
}

pub struct OpensslCryptographer;

struct OpensslHasher(openssl::hash::Hasher);

impl Hasher for OpensslHasher {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        self.0.update(data)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>, CryptoError> {
        Ok(self.0.finish()?.to_vec())
    }
}

impl Cryptographer for OpensslCryptographer {
    fn new_sha1(&self) -> Result<Box<dyn Hasher>, CryptoError> {
        let hasher = openssl::hash::Hasher::new(MessageDigest::sha1())?;
        Ok(Box::new(OpensslHasher(hasher)))
    }

    fn constant_time_compare(&self, a: &[u8], b: &[u8]) -> bool {
        // openssl::memcmp::eq panics on length mismatch
        a.len() == b.len() && openssl::memcmp::eq(a, b)
    }
}
