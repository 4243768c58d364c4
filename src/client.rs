use crate::credentials::Credentials;
use crate::error::*;
use crate::request::RequestBuilder;
use crate::session::{Session, SessionState, SessionValidator, SESSION_KEY, SIGNATURE};
use crate::transport::{HttpRequest, Method, ResponseDecoder, Transport};
use crate::value::{InboundParameters, Params};
use log::debug;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://api.weibo.com/game/1/";
pub const DEFAULT_USER_AGENT: &str = "Weiyouxi Agent Alpha 0.0.1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A client for the platform API, acting on behalf of one user session.
///
/// A client owns its credentials and session exclusively.  It performs no internal locking:
/// callers that share one client between threads must serialize access themselves.
pub struct Client<T: Transport> {
    credentials: Credentials,
    inbound: InboundParameters,
    session_key: Option<String>,
    signature: Option<String>,
    validator: SessionValidator,
    transport: T,
    api_url: Url,
    user_agent: String,
    connect_timeout: Duration,
    timeout: Duration,
    http_code: Option<u16>,
}

impl<T: Transport> Client<T> {
    /// Create a new client from the parameters the platform handed to the application.
    ///
    /// If the parameters carry both `wyx_session_key` and `wyx_signature`, the signature and
    /// then the session key are checked immediately, and a failure of either fails
    /// construction.
    pub fn new(
        credentials: Credentials,
        inbound: InboundParameters,
        transport: T,
    ) -> Result<Self> {
        let session_key = inbound.get(SESSION_KEY).cloned();
        let signature = inbound.get(SIGNATURE).cloned();
        let mut client = Client {
            credentials,
            inbound,
            session_key,
            signature,
            validator: SessionValidator::new(),
            transport,
            api_url: Url::parse(DEFAULT_API_URL)?,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: DEFAULT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
            http_code: None,
        };

        if client.session_key.is_some() && client.signature.is_some() {
            client.check_signature(None)?;
            client.check_session_key()?;
        }

        Ok(client)
    }

    /// Set the signature and check it.
    ///
    /// This is useful when the signature did not arrive with the other inbound parameters.  If
    /// `params` is given and non-empty, it replaces the stored inbound parameters and the
    /// signature is checked against it.
    pub fn set_and_check_signature<S: Into<String>>(
        &mut self,
        signature: S,
        params: Option<InboundParameters>,
    ) -> Result<()> {
        self.signature = Some(signature.into());
        self.check_signature(params)
    }

    /// Check the stored signature against the inbound parameters (or `params`, as for
    /// `set_and_check_signature`).
    pub fn check_signature(&mut self, params: Option<InboundParameters>) -> Result<()> {
        if let Some(params) = params {
            if !params.is_empty() {
                if let Some(session_key) = params.get(SESSION_KEY) {
                    self.session_key = Some(session_key.clone());
                }
                self.inbound = params;
            }
        }
        let signature = self
            .signature
            .as_deref()
            .ok_or_else(|| Error::config("Require signature"))?;
        self.validator
            .check_signature(signature, &self.inbound, self.credentials.secret())
    }

    /// Set the session key and check it.  The signature must already have been checked.
    ///
    /// On failure the key is discarded and the session is rejected.
    pub fn set_and_check_session_key<S: Into<String>>(
        &mut self,
        session_key: S,
    ) -> Result<&Session> {
        self.session_key = Some(session_key.into());
        self.check_session_key()
    }

    pub fn check_session_key(&mut self) -> Result<&Session> {
        let session_key = self
            .session_key
            .take()
            .ok_or_else(|| Error::config("Require session key"))?;
        let checked = self
            .validator
            .check_session_key(&session_key, &self.inbound)
            .map(|_| ());
        checked?;
        self.session_key = Some(session_key);
        self.validator.validate()
    }

    /// The validated session.
    pub fn session(&self) -> Result<&Session> {
        self.validator.validate()
    }

    pub fn session_state(&self) -> &SessionState {
        self.validator.state()
    }

    /// The id of the user, if the session has been validated.
    pub fn user_id(&self) -> Option<u64> {
        self.session().ok().and_then(Session::user_id)
    }

    /// Call an API endpoint with `GET`, returning the raw response body.
    pub fn get(&mut self, api: &str, params: Params) -> Result<String> {
        self.call(Method::Get, api, params)
    }

    /// Call an API endpoint with `POST`, returning the raw response body.
    pub fn post(&mut self, api: &str, params: Params) -> Result<String> {
        self.call(Method::Post, api, params)
    }

    pub fn get_decoded<D: ResponseDecoder>(
        &mut self,
        api: &str,
        params: Params,
        decoder: &D,
    ) -> Result<D::Output> {
        let body = self.get(api, params)?;
        decoder.decode(&body).map_err(Error::Decode)
    }

    pub fn post_decoded<D: ResponseDecoder>(
        &mut self,
        api: &str,
        params: Params,
        decoder: &D,
    ) -> Result<D::Output> {
        let body = self.post(api, params)?;
        decoder.decode(&body).map_err(Error::Decode)
    }

    fn call(&mut self, method: Method, api: &str, params: Params) -> Result<String> {
        let url = self.api_url.join(api.trim_start_matches('/'))?;
        // API paths are relative; anything resolving outside the base URL is refused
        if !url.as_str().starts_with(self.api_url.as_str()) {
            return Err(Error::InvalidUrl(format!(
                "{} is outside {}",
                api, self.api_url
            )));
        }

        // only a validated session key is ever sent
        let session_key = self.validator.validate().ok().and_then(Session::session_key);
        let signed = RequestBuilder::new(&self.credentials)
            .session_key(session_key)
            .params(params)
            .request()
            .signed_string()?;

        let request = HttpRequest {
            url,
            method,
            signed,
            user_agent: self.user_agent.clone(),
            connect_timeout: self.connect_timeout,
            timeout: self.timeout,
        };

        debug!("{} {}", request.method, request.url);
        let response = self.transport.send(&request).map_err(Error::Transport)?;
        debug!("{} {} -> {}", request.method, request.url, response.status);
        self.http_code = Some(response.status);
        Ok(response.body)
    }

    /// The HTTP status of the last API call.
    pub fn http_code(&self) -> Option<u16> {
        self.http_code
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Set the base URL that API paths are appended to.
    pub fn set_api_url(&mut self, api_url: &str) -> Result<()> {
        let mut url = Url::parse(api_url)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.api_url = url;
        Ok(())
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn set_user_agent<S: Into<String>>(&mut self, user_agent: S) {
        self.user_agent = user_agent.into();
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn set_connect_timeout(&mut self, timeout: Duration) {
        self.connect_timeout = timeout;
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }
}
