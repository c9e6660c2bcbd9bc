// silica/src/transport/mock.rs

//! In-memory transport for tests.

use std::time::Duration;

use crate::transport::traits::{SenseTarget, TagHandle, Transport};
use crate::{Error, Result};

/// Mock transport for unit tests. It records exchanged payloads and returns
/// queued responses; an exhausted response queue simulates a timeout.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every payload handed to `exchange`, `None` for listen-only calls.
    pub sent: Vec<Option<Vec<u8>>>,
    /// Raw responses, status byte included, returned in order.
    pub responses: Vec<Vec<u8>>,
    /// Sense outcomes returned in order; exhausted queue means no card.
    pub tags: Vec<Option<TagHandle>>,
    /// Timeouts passed to `exchange`, for assertions.
    pub timeouts: Vec<Duration>,
}

impl MockTransport {
    /// Empty mock: no responses queued, no tags to sense.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response (status byte included).
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Queue a sense outcome.
    pub fn push_tag(&mut self, tag: Option<TagHandle>) {
        self.tags.push(tag);
    }

    /// Take the most recently exchanged payload.
    pub fn pop_sent(&mut self) -> Option<Option<Vec<u8>>> {
        self.sent.pop()
    }

    /// Number of exchanges performed so far.
    pub fn exchange_count(&self) -> usize {
        self.sent.len()
    }
}

impl Transport for MockTransport {
    fn exchange(&mut self, command: Option<&[u8]>, timeout: Duration) -> Result<Vec<u8>> {
        self.sent.push(command.map(|c| c.to_vec()));
        self.timeouts.push(timeout);
        if self.responses.is_empty() {
            Err(Error::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }

    fn sense(&mut self, _target: &SenseTarget) -> Result<Option<TagHandle>> {
        if self.tags.is_empty() {
            Ok(None)
        } else {
            Ok(self.tags.remove(0))
        }
    }
}
