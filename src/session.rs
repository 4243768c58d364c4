//! Validation of the session parameters handed to the application by the platform.
//!
//! After a user logs in, the platform redirects to the application with a set of parameters
//! whose names start with [`PREFIX_PARAM`]: `wyx_user_id`, `wyx_session_key`, `wyx_create`,
//! `wyx_expire` and `wyx_signature`.  The signature covers all of the other prefixed
//! parameters, and must be checked before anything in the session key is trusted.

use crate::base_string::build_base_string;
use crate::error::*;
use crate::signature;
use crate::value::{InboundParameters, Params, Value};
use log::{debug, warn};
use std::str::FromStr;

/// Prefix of every parameter the platform hands to the application.
pub const PREFIX_PARAM: &str = "wyx_";

pub(crate) const SESSION_KEY: &str = "wyx_session_key";
pub(crate) const SIGNATURE: &str = "wyx_signature";
const CREATE: &str = "wyx_create";
const EXPIRE: &str = "wyx_expire";

/// A parsed session key.
///
/// Session keys are `_`-separated tokens with at least three fields; the second is an expiry
/// marker and the third the numeric user id.  Any further fields are ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionKey {
    raw: String,
    expire: String,
    user_id: u64,
}

impl SessionKey {
    pub fn parse(raw: &str) -> Result<SessionKey> {
        raw.parse()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The expiry marker embedded in the key.
    pub fn expire(&self) -> &str {
        &self.expire
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }
}

impl FromStr for SessionKey {
    type Err = Error;
    fn from_str(raw: &str) -> Result<SessionKey> {
        let fields: Vec<&str> = raw.split('_').collect();
        if fields.len() < 3 {
            return Err(Error::session_format(format!(
                "expected at least 3 fields, got {}",
                fields.len()
            )));
        }

        let user_id = u64::from_str(fields[2])
            .map_err(|_| Error::session_format(format!("invalid user id {:?}", fields[2])))?;

        Ok(SessionKey {
            raw: raw.to_string(),
            expire: fields[1].to_string(),
            user_id,
        })
    }
}

/// The session of the user on whose behalf the application is acting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    session_key: Option<String>,
    user_id: Option<u64>,
    created_at: Option<String>,
    expires_at: Option<String>,
}

impl Session {
    /// Derive a session from a session key and the inbound parameters that came with it.
    ///
    /// An explicit `wyx_expire` parameter takes precedence over the expiry marker in the key.
    pub fn from_params(session_key: &str, inbound: &InboundParameters) -> Result<Session> {
        let key = SessionKey::parse(session_key)?;
        let expires_at = match inbound.get(EXPIRE) {
            Some(expire) => expire.clone(),
            None => {
                debug!("no {} parameter; using expiry from session key", EXPIRE);
                key.expire().to_string()
            }
        };

        Ok(Session {
            user_id: Some(key.user_id()),
            created_at: inbound.get(CREATE).cloned(),
            expires_at: Some(expires_at),
            session_key: Some(key.raw),
        })
    }

    pub fn session_key(&self) -> Option<&str> {
        self.session_key.as_deref()
    }

    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }

    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    pub fn expires_at(&self) -> Option<&str> {
        self.expires_at.as_deref()
    }
}

/// Build the base string covered by an inbound signature: every prefixed parameter except the
/// signature itself.
pub fn inbound_base_string(inbound: &InboundParameters) -> String {
    let params: Params = inbound
        .iter()
        .filter(|(k, _)| k.starts_with(PREFIX_PARAM) && k.as_str() != SIGNATURE)
        .map(|(k, v)| (k.clone(), Value::Scalar(v.clone())))
        .collect();
    build_base_string(&params)
}

/// The validation state of a session.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// Nothing has been checked yet.
    Unvalidated,
    /// The inbound signature matched; the session key has not been examined.
    SignatureChecked,
    /// Both the signature and the session key are valid.
    SessionChecked(Session),
    /// A check failed; nothing from the inbound parameters may be trusted.
    Rejected,
}

/// Drives a session through signature and session-key validation.
///
/// The signature must be checked before the session key, and any failure rejects the whole
/// session.  Checking a new signature starts the validation over.
#[derive(Clone, Debug)]
pub struct SessionValidator {
    state: SessionState,
}

impl Default for SessionValidator {
    fn default() -> Self {
        SessionValidator::new()
    }
}

impl SessionValidator {
    pub fn new() -> Self {
        SessionValidator {
            state: SessionState::Unvalidated,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Check the platform's signature over the prefixed inbound parameters.
    pub fn check_signature(
        &mut self,
        signature: &str,
        inbound: &InboundParameters,
        secret: &str,
    ) -> Result<()> {
        self.state = SessionState::Unvalidated;
        let base_string = inbound_base_string(inbound);
        match signature::verify(signature, &base_string, secret) {
            Ok(()) => {
                debug!("inbound signature verified");
                self.state = SessionState::SignatureChecked;
                Ok(())
            }
            Err(e) => {
                self.state = SessionState::Rejected;
                Err(e)
            }
        }
    }

    /// Parse and accept the session key.  Only valid after a successful signature check; any
    /// failure, including calling this out of order, rejects the session.
    pub fn check_session_key(
        &mut self,
        session_key: &str,
        inbound: &InboundParameters,
    ) -> Result<&Session> {
        if self.state != SessionState::SignatureChecked {
            warn!("rejecting session: session key checked before signature");
            self.state = SessionState::Rejected;
            return Err(Error::SignatureNotChecked);
        }

        match Session::from_params(session_key, inbound) {
            Ok(session) => {
                debug!("session key accepted for user {:?}", session.user_id());
                self.state = SessionState::SessionChecked(session);
                self.validate()
            }
            Err(e) => {
                warn!("rejecting session: {}", e);
                self.state = SessionState::Rejected;
                Err(e)
            }
        }
    }

    /// Get the validated session.
    pub fn validate(&self) -> Result<&Session> {
        match self.state {
            SessionState::SessionChecked(ref session) => Ok(session),
            SessionState::Rejected => Err(Error::SessionRejected),
            SessionState::SignatureChecked => Err(Error::config("Require session key")),
            SessionState::Unvalidated => Err(Error::SignatureNotChecked),
        }
    }
}
