//! Blocking HTTP/1.1 client over a raw TCP socket.
//!
//! # Design
//! `Client` holds only its `ClientConfig` and carries no state between
//! calls. Each request runs the same pipeline:
//!
//! ```text
//! build -> connect -> send -> receive -> close -> parse
//! ```
//!
//! `Client::request` returns the pipeline's `Result` unchanged. `get`,
//! `post` and `command` are the lossy entry points: any error becomes the
//! sentinel `Response` (500, empty body) and the cause is only logged.

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpRequest, Method, Response};
use crate::request::build_request;
use crate::response::parse_response;
use crate::session::Session;

/// Synchronous client that opens one connection per request.
#[derive(Debug, Clone, Default)]
pub struct Client {
    config: ClientConfig,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a GET to `url`. Failures return the sentinel response.
    pub fn get(&self, url: &str) -> Response {
        self.request_or_sentinel(url, Method::Get, &[])
    }

    /// Send a POST to `url` with `args` as a form-encoded body. Failures
    /// return the sentinel response.
    pub fn post(&self, url: &str, args: &[(&str, &str)]) -> Response {
        self.request_or_sentinel(url, Method::Post, args)
    }

    /// POST when `command` is exactly `"POST"`, GET for anything else.
    ///
    /// The match is case-sensitive, so `"post"` sends a GET. `args` are
    /// ignored on the GET path.
    pub fn command(&self, url: &str, command: &str, args: &[(&str, &str)]) -> Response {
        match command {
            "POST" => self.post(url, args),
            _ => self.get(url),
        }
    }

    /// Run the whole pipeline and report what failed, if anything.
    pub fn request(&self, url: &str, method: Method, args: &[(&str, &str)]) -> Result<Response> {
        let request = build_request(url, method, args)?;
        let raw = self.exchange(&request)?;
        parse_response(&raw)
    }

    fn request_or_sentinel(&self, url: &str, method: Method, args: &[(&str, &str)]) -> Response {
        self.request(url, method, args).unwrap_or_else(|err| {
            debug!(%method, url, error = %err, "request failed, returning sentinel");
            Response::default()
        })
    }

    /// Connect, send `request`, and drain the reply. The session is dropped
    /// (and the socket closed) on every error path.
    fn exchange(&self, request: &HttpRequest) -> Result<String> {
        let target = &request.target;
        let mut session = Session::connect(&target.host, target.port, &self.config)?;
        session.send_all(&request.to_string())?;
        let raw = session.receive_all()?;
        session.close();
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};
    use std::time::Duration;

    use super::*;
    use crate::error::ClientError;

    fn client() -> Client {
        Client::with_config(ClientConfig::default().with_read_timeout(Duration::from_millis(300)))
    }

    /// Accept one connection, capture the request head, reply with `reply`,
    /// and hang up.
    fn serve_once(reply: &'static str) -> (u16, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let n = stream.read(&mut buf).unwrap();
            stream.write_all(reply.as_bytes()).unwrap();
            String::from_utf8_lossy(&buf[..n]).into_owned()
        });
        (port, handle)
    }

    fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    #[test]
    fn new_client_uses_default_config() {
        assert_eq!(Client::new().config(), &ClientConfig::default());
        let config = ClientConfig::default().with_connect_timeout(Duration::from_millis(100));
        assert_eq!(Client::with_config(config).config().connect_timeout, Duration::from_millis(100));
    }

    #[test]
    fn get_returns_parsed_response() {
        let (port, server) = serve_once("HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello");
        let response = client().get(&format!("http://127.0.0.1:{port}/greeting"));
        let sent = server.join().unwrap();

        assert_eq!(response, Response::new(200, "hello"));
        assert!(sent.starts_with("GET /greeting HTTP/1.1\r\n"));
    }

    #[test]
    fn unreachable_host_returns_sentinel() {
        let response = client().get(&format!("http://127.0.0.1:{}/", closed_port()));
        assert_eq!(response, Response::default());
    }

    #[test]
    fn request_reports_connect_error() {
        let err = client()
            .request(&format!("http://127.0.0.1:{}/", closed_port()), Method::Get, &[])
            .unwrap_err();
        assert!(matches!(err, ClientError::Connect { .. }));
    }

    #[test]
    fn malformed_status_line_returns_sentinel() {
        let (port, server) = serve_once("HTTP/1.1 OK 200\r\n\r\nbody");
        let response = client().get(&format!("http://127.0.0.1:{port}/"));
        server.join().unwrap();

        assert_eq!(response.status_code(), 500);
        assert_eq!(response.body(), "");
    }

    #[test]
    fn missing_separator_returns_sentinel() {
        let (port, server) = serve_once("HTTP/1.1 200 OK\r\nContent-Length: 5\r\nhello");
        let response = client().get(&format!("http://127.0.0.1:{port}/"));
        server.join().unwrap();

        assert_eq!(response, Response::default());
    }

    #[test]
    fn invalid_url_returns_sentinel() {
        assert_eq!(client().get("http://example.com:port/"), Response::default());
        assert_eq!(client().post("https://example.com/", &[]), Response::default());
    }

    #[test]
    fn command_post_sends_form_body() {
        let (port, server) = serve_once("HTTP/1.1 201 CREATED\r\n\r\n");
        let response = client().command(
            &format!("http://127.0.0.1:{port}/items"),
            "POST",
            &[("a", "1"), ("b", "2")],
        );
        let sent = server.join().unwrap();

        assert_eq!(response.status_code(), 201);
        assert!(sent.starts_with("POST /items HTTP/1.1\r\n"));
        assert!(sent.ends_with("Content-Length: 7\r\n\r\na=1&b=2"));
    }

    #[test]
    fn command_get_and_unknown_fall_through_to_get() {
        for name in ["GET", "post", "DELETE", ""] {
            let (port, server) = serve_once("HTTP/1.1 200 OK\r\n\r\n");
            let response = client().command(
                &format!("http://127.0.0.1:{port}/"),
                name,
                &[("ignored", "yes")],
            );
            let sent = server.join().unwrap();

            assert_eq!(response.status_code(), 200, "{name:?}");
            assert_eq!(
                sent,
                "GET / HTTP/1.1\r\nAccept: */*\r\nHost: 127.0.0.1\r\nContent-Length: 0\r\n\r\n",
                "{name:?}"
            );
        }
    }
}
