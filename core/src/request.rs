//! Raw request construction.
//!
//! # Design
//! `build_request` turns a URL, a method and optional form arguments into an
//! `HttpRequest` whose `Display` output is sent verbatim. The header set is
//! fixed (`Accept`, `Host`, `Content-Length`, in that order) so the bytes on
//! the wire are fully determined by the inputs.

use tracing::trace;
use url::form_urlencoded;
use url::Url;

use crate::error::{ClientError, Result};
use crate::http::{HttpRequest, Method, Target};

/// Port used when the URL does not name one.
pub const DEFAULT_PORT: u16 = 80;

/// Split a URL into host, port and path.
///
/// A URL without `://` is read as `http://<url>`. Query strings and
/// fragments are dropped; only the path reaches the request line. The host
/// is lowercased, `.`/`..` path segments are resolved, and an empty port
/// (`host:/`) means port 80.
pub fn parse_target(raw: &str) -> Result<Target> {
    let url = if raw.contains("://") {
        Url::parse(raw)?
    } else {
        Url::parse(&format!("http://{raw}"))?
    };

    if url.scheme() != "http" {
        return Err(ClientError::UnsupportedScheme(url.scheme().to_string()));
    }

    let host = match url.host_str() {
        Some(host) if !host.is_empty() => host.to_string(),
        _ => return Err(ClientError::MissingHost),
    };
    let port = url.port_or_known_default().unwrap_or(DEFAULT_PORT);
    let path = match url.path() {
        "" => "/".to_string(),
        path => path.to_string(),
    };

    Ok(Target { host, port, path })
}

/// Encode `args` as an `application/x-www-form-urlencoded` body, keeping
/// their order.
pub fn encode_form(args: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(args)
        .finish()
}

/// Build the complete request for `url`.
///
/// `args` only matter for `Method::Post`; a GET always has an empty body.
pub fn build_request(url: &str, method: Method, args: &[(&str, &str)]) -> Result<HttpRequest> {
    let target = parse_target(url)?;
    let body = match method {
        Method::Post => encode_form(args),
        Method::Get => String::new(),
    };

    let headers = vec![
        ("Accept".to_string(), "*/*".to_string()),
        ("Host".to_string(), target.host.clone()),
        ("Content-Length".to_string(), body.len().to_string()),
    ];

    trace!(%method, host = %target.host, port = target.port, path = %target.path, "built request");

    Ok(HttpRequest {
        method,
        target,
        headers,
        body,
    })
}
