use super::{CryptoError, Cryptographer, Hasher};
use ring::digest;

pub struct RingCryptographer;

// This is always `Some` until `finish` is called.
struct RingHasher(Option<digest::Context>);

impl Hasher for RingHasher {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        match self.0.as_mut() {
            Some(ctx) => {
                ctx.update(data);
                Ok(())
            }
            None => Err(finished()),
        }
    }

    fn finish(&mut self) -> Result<Vec<u8>, CryptoError> {
        let digest = self.0.take().ok_or_else(finished)?.finish();
        let bytes: &[u8] = digest.as_ref();
        Ok(bytes.to_owned())
    }
}

fn finished() -> CryptoError {
    CryptoError::Other(failure::err_msg("hasher used after `finish`"))
}

impl Cryptographer for RingCryptographer {
    fn new_sha1(&self) -> Result<Box<dyn Hasher>, CryptoError> {
        let ctx = digest::Context::new(&digest::SHA1_FOR_LEGACY_USE_ONLY);
        Ok(Box::new(RingHasher(Some(ctx))))
    }

    fn constant_time_compare(&self, a: &[u8], b: &[u8]) -> bool {
        ring::constant_time::verify_slices_are_equal(a, b).is_ok()
    }
}
