//! Error types for the request pipeline.
//!
//! # Design
//! Every stage of a request (URL parsing, connect, send, receive, decode,
//! parse) has its own variant so `Client::request` callers can tell what
//! went wrong. The convenience entry points (`get`, `post`, `command`)
//! discard this detail and return the sentinel response instead.

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors produced while building, sending or parsing a request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The URL could not be parsed, including malformed ports.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Only plain `http` is spoken.
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,

    /// Name resolution failed, or every resolved address refused or timed out.
    #[error("failed to connect to {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    #[error("failed to send request: {0}")]
    Send(#[source] io::Error),

    /// A read failed for a reason other than the receive timeout.
    #[error("failed to receive response: {0}")]
    Receive(#[source] io::Error),

    #[error("response is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),

    /// No blank line between headers and body. An empty response lands here.
    #[error("response has no header/body separator")]
    MissingSeparator,

    #[error("malformed status line: {0:?}")]
    BadStatusLine(String),

    #[error("status code {0} is outside 100-599")]
    StatusOutOfRange(u16),
}

pub type Result<T> = std::result::Result<T, ClientError>;
