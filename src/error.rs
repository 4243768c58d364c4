use crate::crypto::CryptoError;
use failure::Fail;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Fail, Debug)]
pub enum Error {
    #[fail(display = "Configuration error: {}", _0)]
    Configuration(String),

    #[fail(display = "Signature error")]
    SignatureMismatch,

    #[fail(display = "Session key checked before the signature was verified")]
    SignatureNotChecked,

    #[fail(display = "Session key error: {}", _0)]
    SessionFormat(String),

    #[fail(display = "Session was rejected by an earlier check")]
    SessionRejected,

    #[fail(display = "Invalid url: {}", _0)]
    InvalidUrl(String),

    #[fail(display = "{}", _0)]
    Crypto(#[fail(cause)] CryptoError),

    #[fail(display = "Transport error: {}", _0)]
    Transport(failure::Error),

    #[fail(display = "Response decode error: {}", _0)]
    Decode(failure::Error),
}

impl Error {
    pub(crate) fn config<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    pub(crate) fn session_format<S: Into<String>>(msg: S) -> Self {
        Error::SessionFormat(msg.into())
    }
}

impl From<CryptoError> for Error {
    fn from(e: CryptoError) -> Self {
        Error::Crypto(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::InvalidUrl(e.to_string())
    }
}
