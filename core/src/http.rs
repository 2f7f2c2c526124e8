//! HTTP wire types for the raw-socket client.
//!
//! # Design
//! These types describe requests and responses as plain data. `HttpRequest`
//! knows how to serialize itself into the exact bytes that go on the wire;
//! `Response` is the parsed result handed back to callers. Neither type
//! touches the network, so both are easy to construct directly in tests.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved
//! between the builder, the session and the caller without lifetimes.

use std::fmt;

/// Protocol version written on every request line.
pub const PROTOCOL: &str = "HTTP/1.1";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a request goes: host and port to connect to, path for the request
/// line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
    pub path: String,
}

/// An HTTP request described as plain data.
///
/// Built by `request::build_request`. The `Display` impl produces the
/// complete request text: request line, headers in insertion order, a blank
/// line, then the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub target: Target,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    pub fn request_line(&self) -> String {
        format!("{} {} {}", self.method, self.target.path, PROTOCOL)
    }
}

impl fmt::Display for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\r\n", self.request_line())?;
        for (name, value) in &self.headers {
            write!(f, "{name}: {value}\r\n")?;
        }
        write!(f, "\r\n{}", self.body)
    }
}

/// A parsed HTTP response: status code and body text, nothing else.
///
/// The default value is the sentinel returned for any failed request:
/// status 500 with an empty body. A sentinel is indistinguishable from a
/// real server 500 with no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status_code: u16,
    body: String,
}

impl Response {
    pub const SENTINEL_STATUS: u16 = 500;

    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new(Self::SENTINEL_STATUS, String::new())
    }
}

/// Renders as `"<code>\r\n<body>"`, the format the CLI prints.
impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\r\n{}", self.status_code, self.body)
    }
}
