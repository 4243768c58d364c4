//! This crate provides request signing and session validation for the Weiyouxi game API.
//!
//! The platform signs the parameters it hands to an application after a user logs in, and
//! expects every API call to be signed in turn.  Both signatures are the lower-case hex SHA-1
//! digest of a canonical "base string" with the application secret appended.  The base string
//! is built by percent-encoding every key and value (with the platform's own profile, see
//! [`encode`]), sorting by key, and joining `key=value` pairs with `&`.
//!
//! HTTP itself is left to the application, through the [`Transport`] trait.
//!
//! # Examples
//!
//! ## Validating the inbound session
//!
//! ```
//! use wyx_sign::{Client, Credentials, HttpRequest, HttpResponse, InboundParameters, Transport};
//!
//! struct MyTransport;
//! impl Transport for MyTransport {
//!     fn send(&self, request: &HttpRequest) -> Result<HttpResponse, failure::Error> {
//!         // use your HTTP client of choice here
//!         Ok(HttpResponse { status: 200, body: "{}".to_string() })
//!     }
//! }
//!
//! let credentials = Credentials::new(1111111111u64, "2222222222").unwrap();
//!
//! // these arrive as query parameters from the platform
//! let mut inbound = InboundParameters::new();
//! inbound.insert("wyx_user_id".into(), "1234567".into());
//! inbound.insert("wyx_session_key".into(), "6d2dc9a8_1334570000_1234567".into());
//! inbound.insert("wyx_create".into(), "1334560000".into());
//! inbound.insert("wyx_expire".into(), "1334570000".into());
//! let signature = wyx_sign::sign(
//!     &wyx_sign::inbound_base_string(&inbound),
//!     credentials.secret(),
//! ).unwrap();
//! inbound.insert("wyx_signature".into(), signature);
//!
//! let client = Client::new(credentials, inbound, MyTransport).unwrap();
//! assert_eq!(client.user_id(), Some(1234567));
//! ```
//!
//! ## Calling the API
//!
//! ```
//! # use wyx_sign::{Client, Credentials, HttpRequest, HttpResponse, InboundParameters, Transport};
//! # struct MyTransport;
//! # impl Transport for MyTransport {
//! #     fn send(&self, request: &HttpRequest) -> Result<HttpResponse, failure::Error> {
//! #         Ok(HttpResponse { status: 200, body: r#"{"id": 33333}"#.to_string() })
//! #     }
//! # }
//! use wyx_sign::{JsonDecoder, Params, Value};
//!
//! let credentials = Credentials::new(1111111111u64, "2222222222").unwrap();
//! let mut client = Client::new(credentials, InboundParameters::new(), MyTransport).unwrap();
//!
//! let mut params = Params::new();
//! params.insert("uid".to_string(), Value::from(33333));
//! let user_info = client.get_decoded("user/show", params, &JsonDecoder).unwrap();
//! assert_eq!(user_info["id"], 33333);
//! assert_eq!(client.http_code(), Some(200));
//! ```

mod base_string;
mod client;
mod credentials;
mod crypto;
mod encode;
mod error;
mod request;
mod session;
mod signature;
mod transport;
mod value;

pub use crate::base_string::build_base_string;
pub use crate::client::{Client, DEFAULT_API_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use crate::credentials::Credentials;
pub use crate::crypto::{
    set_boxed_cryptographer, set_cryptographer, CryptoError, Cryptographer, Hasher,
    SetCryptographerError,
};
pub use crate::encode::encode;
pub use crate::error::*;
pub use crate::request::{Request, RequestBuilder};
pub use crate::session::{
    inbound_base_string, Session, SessionKey, SessionState, SessionValidator, PREFIX_PARAM,
};
pub use crate::signature::{sign, verify};
pub use crate::transport::{
    HttpRequest, HttpResponse, JsonDecoder, Method, ResponseDecoder, Transport,
};
pub use crate::value::{InboundParameters, Params, Value};
