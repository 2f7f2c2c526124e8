//! Naive response parser.
//!
//! Only the status line is interpreted. Headers are skipped and the body is
//! returned exactly as received, so chunked or compressed bodies come back
//! in their encoded form.

use crate::error::{ClientError, Result};
use crate::http::Response;

const HEADER_TERMINATOR: &str = "\r\n\r\n";

/// Parse a raw response into its status code and body.
pub fn parse_response(raw: &str) -> Result<Response> {
    let (head, body) = raw
        .split_once(HEADER_TERMINATOR)
        .ok_or(ClientError::MissingSeparator)?;
    let status_line = head.split("\r\n").next().unwrap_or_default();
    let status_code = parse_status_line(status_line)?;
    Ok(Response::new(status_code, body))
}

/// Extract the status code from `HTTP/<version> <code>[ <reason>]`.
///
/// The version is digits and dots, the code exactly three digits within
/// 100-599. The reason phrase may be any text, including several words or
/// nothing at all.
pub fn parse_status_line(line: &str) -> Result<u16> {
    let malformed = || ClientError::BadStatusLine(line.to_string());

    let rest = line.strip_prefix("HTTP/").ok_or_else(malformed)?;
    let (version, rest) = rest.split_once(' ').ok_or_else(malformed)?;
    if version.is_empty() || !version.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(malformed());
    }

    let code = match rest.split_once(' ') {
        Some((code, _reason)) => code,
        None => rest,
    };
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let code: u16 = code.parse().map_err(|_| malformed())?;
    if !(100..=599).contains(&code) {
        return Err(ClientError::StatusOutOfRange(code));
    }
    Ok(code)
}
