//! Interfaces to the collaborators that perform HTTP and decode responses.
//!
//! This crate does not contain an HTTP client.  Applications implement [`Transport`] with the
//! client of their choice; the [`Client`](crate::Client) hands it a fully formed, already-signed
//! request.

use std::fmt;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A signed request, ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The endpoint URL, without the signed parameters.
    pub url: Url,
    pub method: Method,
    /// The signed parameter string: the query string of a `GET`, or the body of a `POST`.
    pub signed: String,
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl HttpRequest {
    /// The URL to request: for `GET`, the endpoint with the signed string as its query.
    pub fn full_url(&self) -> Url {
        let mut url = self.url.clone();
        if self.method == Method::Get {
            url.set_query(Some(&self.signed));
        }
        url
    }

    /// The request body: the signed string for `POST`, nothing for `GET`.
    pub fn body(&self) -> Option<&str> {
        match self.method {
            Method::Post => Some(&self.signed),
            Method::Get => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Performs blocking HTTP requests on behalf of the client.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, failure::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, failure::Error> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, failure::Error> {
        (**self).send(request)
    }
}

/// Turns a response body into structured data.
pub trait ResponseDecoder {
    type Output;
    fn decode(&self, body: &str) -> Result<Self::Output, failure::Error>;
}

/// Decodes the platform's JSON payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl ResponseDecoder for JsonDecoder {
    type Output = serde_json::Value;

    fn decode(&self, body: &str) -> Result<serde_json::Value, failure::Error> {
        Ok(serde_json::from_str(body)?)
    }
}
