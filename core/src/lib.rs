//! Minimal HTTP/1.1 client built directly on `std::net::TcpStream`.
//!
//! # Overview
//! Builds raw request text by hand, writes it to a socket, drains the reply
//! until the peer goes quiet, and pulls the status code out of the status
//! line. No HTTP library sits underneath; the point is to make the wire
//! format visible.
//!
//! # Design
//! - `request` builds the exact bytes to send; `response` parses what came
//!   back; `session` owns the socket for one request; `client` ties them
//!   together.
//! - `Client::request` returns a typed `ClientError` on failure. `get`,
//!   `post` and `command` collapse every failure into the sentinel
//!   `Response` (500, empty body).
//! - One connection per request, closed before the response is parsed.
//!   No pooling, no keep-alive, no TLS, no chunked decoding.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod request;
pub mod response;
pub mod session;

pub use client::Client;
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::{HttpRequest, Method, Response, Target};
pub use request::{build_request, encode_form, parse_target};
pub use response::{parse_response, parse_status_line};
pub use session::Session;
