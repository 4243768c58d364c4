use crate::base_string::build_base_string;
use crate::credentials::Credentials;
use crate::error::*;
use crate::signature;
use crate::value::{Params, Value};
use std::time::{SystemTime, UNIX_EPOCH};

/// Request represents the parameters of a single signed API call.
///
/// The structure is created using the builder idiom, with [`RequestBuilder`].  Once built, the
/// request is a pure function of its fields: signing it twice yields the same string.
///
/// # Examples
///
/// ```
/// use wyx_sign::{Credentials, RequestBuilder};
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let credentials = Credentials::new(1, "s3cr3t").unwrap();
/// let request = RequestBuilder::new(&credentials)
///     .param("uid", 42)
///     .timestamp(UNIX_EPOCH + Duration::new(1334567890, 500_000_000))
///     .request();
/// let signed = request.signed_string().unwrap();
/// assert!(signed.starts_with("source=1&timestamp=1334567890.500000&uid=42&signature="));
/// ```
#[derive(Debug, Clone)]
pub struct Request<'a> {
    credentials: &'a Credentials,
    session_key: Option<&'a str>,
    timestamp: SystemTime,
    params: Params,
}

impl<'a> Request<'a> {
    /// The full parameter mapping that will be signed.
    ///
    /// `source` and `timestamp` come first, then `session_key` if one was given; caller-supplied
    /// parameters are applied last and may override any of them.
    pub fn params(&self) -> Params {
        let mut merged = Params::new();
        merged.insert(
            "source".to_string(),
            Value::from(self.credentials.source()),
        );
        merged.insert(
            "timestamp".to_string(),
            Value::Scalar(format_timestamp(self.timestamp)),
        );
        if let Some(session_key) = self.session_key {
            merged.insert("session_key".to_string(), Value::from(session_key));
        }
        merged.extend(self.params.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    pub fn base_string(&self) -> String {
        build_base_string(&self.params())
    }

    pub fn signature(&self) -> Result<String> {
        signature::sign(&self.base_string(), self.credentials.secret())
    }

    /// The base string with `&signature=<hex>` appended, ready to use as a query string or
    /// `POST` body.
    pub fn signed_string(&self) -> Result<String> {
        let base_string = self.base_string();
        let sig = signature::sign(&base_string, self.credentials.secret())?;
        Ok(format!("{}&signature={}", base_string, sig))
    }
}

#[derive(Debug, Clone)]
pub struct RequestBuilder<'a> {
    credentials: &'a Credentials,
    session_key: Option<&'a str>,
    timestamp: Option<SystemTime>,
    params: Params,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        RequestBuilder {
            credentials,
            session_key: None,
            timestamp: None,
            params: Params::new(),
        }
    }

    /// Set the session key of the user on whose behalf the call is made.
    pub fn session_key<S: Into<Option<&'a str>>>(mut self, session_key: S) -> Self {
        self.session_key = session_key.into();
        self
    }

    /// Add a single parameter, replacing any earlier value for the same key.
    pub fn param<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add a set of parameters, replacing any earlier values for the same keys.
    pub fn params(mut self, params: Params) -> Self {
        self.params.extend(params);
        self
    }

    /// Fix the request timestamp.  By default the time at which `request` is called is used.
    pub fn timestamp(mut self, timestamp: SystemTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Get the request from this builder
    pub fn request(self) -> Request<'a> {
        Request {
            credentials: self.credentials,
            session_key: self.session_key,
            timestamp: self.timestamp.unwrap_or_else(SystemTime::now),
            params: self.params,
        }
    }
}

/// Format a timestamp as seconds since the epoch with exactly six fractional digits.
pub(crate) fn format_timestamp(ts: SystemTime) -> String {
    let since_epoch = ts.duration_since(UNIX_EPOCH).unwrap_or_default();
    format!(
        "{}.{:06}",
        since_epoch.as_secs(),
        since_epoch.subsec_micros()
    )
}
