//! One TCP connection, used for exactly one request.
//!
//! # Design
//! `Session` owns its `TcpStream`. Dropping the session closes the socket, so
//! every early return in the request pipeline releases the connection
//! without explicit cleanup. `close` exists for the success path to shut the
//! connection down before parsing starts.
//!
//! The receive loop has no notion of `Content-Length` or chunked framing. It
//! stops at the first zero-length read or the first read timeout, whichever
//! comes first. A slow server can therefore be cut short, and a server that
//! keeps the connection open costs one full read timeout per request.

use std::io::{self, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};

use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// An open connection to a single host.
#[derive(Debug)]
pub struct Session {
    stream: TcpStream,
    peer: SocketAddr,
    chunk_size: usize,
}

impl Session {
    /// Resolve `host` and connect to the first address that accepts within
    /// the connect timeout. Read and write timeouts are set before returning.
    pub fn connect(host: &str, port: u16, config: &ClientConfig) -> Result<Self> {
        let connect_error = |source: io::Error| ClientError::Connect {
            host: host.to_string(),
            port,
            source,
        };

        // IPv6 literals keep their brackets in URLs but not in socket addresses.
        let bare_host = host.trim_start_matches('[').trim_end_matches(']');
        let addrs = (bare_host, port).to_socket_addrs().map_err(connect_error)?;

        let mut last_error = None;
        for addr in addrs {
            debug!(%addr, "connecting");
            match TcpStream::connect_timeout(&addr, config.connect_timeout) {
                Ok(stream) => {
                    stream
                        .set_read_timeout(Some(config.read_timeout))
                        .and_then(|()| stream.set_write_timeout(Some(config.write_timeout)))
                        .map_err(connect_error)?;
                    return Ok(Self {
                        stream,
                        peer: addr,
                        chunk_size: config.chunk_size.max(1),
                    });
                }
                Err(err) => {
                    debug!(%addr, error = %err, "connect attempt failed");
                    last_error = Some(err);
                }
            }
        }

        Err(connect_error(last_error.unwrap_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "host resolved to no addresses")
        })))
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// Write the whole payload as UTF-8 and flush it. A write that stalls for
    /// longer than the write timeout fails with `ClientError::Send`.
    pub fn send_all(&mut self, data: &str) -> Result<()> {
        self.stream
            .write_all(data.as_bytes())
            .and_then(|()| self.stream.flush())
            .map_err(ClientError::Send)?;
        debug!(peer = %self.peer, bytes = data.len(), "request sent");
        Ok(())
    }

    /// Read until the peer closes the connection or the read timeout fires,
    /// then decode everything received as UTF-8.
    pub fn receive_all(&mut self) -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = vec![0u8; self.chunk_size];

        loop {
            match self.stream.read(&mut chunk) {
                Ok(0) => {
                    trace!(peer = %self.peer, "peer closed connection");
                    break;
                }
                Ok(n) => {
                    trace!(peer = %self.peer, bytes = n, "received chunk");
                    buffer.extend_from_slice(&chunk[..n]);
                }
                Err(err) if is_timeout(&err) => {
                    trace!(peer = %self.peer, "read timed out");
                    break;
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(ClientError::Receive(err)),
            }
        }

        debug!(peer = %self.peer, bytes = buffer.len(), "response received");
        Ok(String::from_utf8(buffer)?)
    }

    /// Shut the connection down and release the socket. Shutdown errors are
    /// ignored; the peer may already be gone.
    pub fn close(self) {
        if let Err(err) = self.stream.shutdown(Shutdown::Both) {
            trace!(peer = %self.peer, error = %err, "shutdown failed");
        }
    }
}

// Unix reports an expired read timeout as WouldBlock, Windows as TimedOut.
fn is_timeout(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
    )
}
