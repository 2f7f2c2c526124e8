//! Client tuning knobs.

use std::time::Duration;

/// Timeouts and buffer sizes used by every request a `Client` makes.
///
/// The read timeout doubles as the end-of-response signal: once no data
/// arrives for that long, whatever has been received is treated as the
/// complete response. The write timeout bounds each write while sending, so
/// a peer that never reads fails the request instead of blocking it. Zero
/// durations are rejected by the OS at connect time and surface as a connect
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientConfig {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
    pub chunk_size: usize,
}

impl ClientConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);
    pub const DEFAULT_CHUNK_SIZE: usize = 1024;

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Self::DEFAULT_TIMEOUT,
            read_timeout: Self::DEFAULT_TIMEOUT,
            write_timeout: Self::DEFAULT_TIMEOUT,
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
        }
    }
}
