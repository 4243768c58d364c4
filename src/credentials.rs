use crate::error::*;
use std::fmt;

/// Application credentials issued by the platform: the app key (`source`) and the app secret.
#[derive(Clone)]
pub struct Credentials {
    source: String,
    secret: String,
}

impl Credentials {
    /// Create new credentials.  Both the source and the secret are required.
    pub fn new<S, K>(source: S, secret: K) -> Result<Credentials>
    where
        S: ToString,
        K: Into<String>,
    {
        let source = source.to_string();
        let secret = secret.into();
        if source.is_empty() {
            return Err(Error::config("Require source"));
        }
        if secret.is_empty() {
            return Err(Error::config("Require secret"));
        }
        Ok(Credentials { source, secret })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("source", &self.source)
            .field("secret", &"..")
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new() {
        let creds = Credentials::new(1111111111u64, "2222222222").unwrap();
        assert_eq!(creds.source(), "1111111111");
        assert_eq!(creds.secret(), "2222222222");
    }

    #[test]
    fn test_required() {
        assert!(Credentials::new("", "secret").is_err());
        assert!(Credentials::new("src", "").is_err());
    }

    #[test]
    fn test_debug_hides_secret() {
        let creds = Credentials::new("src", "hunter2").unwrap();
        let dbg = format!("{:?}", creds);
        assert!(dbg.contains("src"));
        assert!(!dbg.contains("hunter2"));
    }
}
