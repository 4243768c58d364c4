use crate::crypto;
use crate::error::*;
use log::warn;

/// Compute the signature of a base string: the lower-case hex SHA-1 digest of the base string
/// with the secret appended.
///
/// Note that this is a plain concatenated hash, not an HMAC; the order (base string first) is
/// fixed by the platform.
pub fn sign(base_string: &str, secret: &str) -> Result<String> {
    check_inputs(base_string, secret)?;
    let digest = crypto::sha1(&[base_string.as_bytes(), secret.as_bytes()])?;
    Ok(hex::encode(digest))
}

/// Verify a signature supplied by a caller by recomputing it from the base string and secret.
///
/// A difference yields `Error::SignatureMismatch`; a missing base string or secret yields
/// `Error::Configuration`.
pub fn verify(candidate: &str, base_string: &str, secret: &str) -> Result<()> {
    let expected = sign(base_string, secret)?;
    if crypto::constant_time_compare(candidate.as_bytes(), expected.as_bytes())? {
        Ok(())
    } else {
        warn!("signature mismatch");
        Err(Error::SignatureMismatch)
    }
}

fn check_inputs(base_string: &str, secret: &str) -> Result<()> {
    if secret.is_empty() {
        return Err(Error::config("Require secret"));
    }
    if base_string.is_empty() {
        return Err(Error::config("Require base string"));
    }
    Ok(())
}

#[cfg(all(test, any(feature = "use_ring", feature = "use_openssl")))]
mod test {
    use super::*;

    #[test]
    fn test_sign_known_value() {
        // sha1("abc")
        assert_eq!(
            sign("a", "bc").unwrap(),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn test_sign_is_lowercase_hex() {
        let sig = sign("source=1&timestamp=1.000000", "s3cr3t").unwrap();
        assert_eq!(sig.len(), 40);
        assert!(sig
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_order_matters() {
        assert_ne!(sign("ab", "cd").unwrap(), sign("cd", "ab").unwrap());
    }

    #[test]
    fn test_verify() {
        let sig = sign("a=1", "secret").unwrap();
        assert!(verify(&sig, "a=1", "secret").is_ok());
    }

    #[test]
    fn test_verify_mismatch() {
        let sig = sign("a=1", "secret").unwrap();
        match verify(&sig, "a=2", "secret") {
            Err(Error::SignatureMismatch) => {}
            other => panic!("unexpected {:?}", other),
        }
        match verify(&sig, "a=1", "secreT") {
            Err(Error::SignatureMismatch) => {}
            other => panic!("unexpected {:?}", other),
        }
        match verify(&sig.to_uppercase(), "a=1", "secret") {
            Err(Error::SignatureMismatch) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_missing_secret() {
        match sign("a=1", "") {
            Err(Error::Configuration(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
        match verify("abc", "a=1", "") {
            Err(Error::Configuration(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_missing_base_string() {
        match verify("abc", "", "secret") {
            Err(Error::Configuration(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
