// silica/src/transport/traits.rs

//! The transport abstraction and its small value types.

use std::time::Duration;

use crate::types::Idm;
use crate::Result;

/// Polling target handed to [`Transport::sense`], e.g. FeliCa at
/// 212 kbit/s ("212F").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenseTarget {
    bitrate_type: &'static str,
}

impl SenseTarget {
    /// FeliCa, 212 kbit/s.
    pub const FELICA_212F: Self = Self {
        bitrate_type: crate::constants::SENSE_TARGET_212F,
    };

    /// Bitrate/type label, e.g. "212F".
    pub fn bitrate_type(&self) -> &str {
        self.bitrate_type
    }
}

/// A card found by [`Transport::sense`]. Lives only as long as the card
/// stays in the field; holds no transport resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagHandle {
    idm: Idm,
}

impl TagHandle {
    /// Wrap the identifier of a sensed card.
    pub fn new(idm: Idm) -> Self {
        Self { idm }
    }

    /// The sensed card's IDm.
    pub fn idm(&self) -> &Idm {
        &self.idm
    }
}

/// Transport trait abstracts the reader hardware away from protocol logic.
///
/// `exchange` is the single synchronous request/response primitive: the
/// command is already transport-framed by the caller (or `None` to just
/// listen), and the returned bytes still carry the transport status byte as
/// their first byte. Timeouts are enforced here, per exchange.
pub trait Transport {
    /// Send an optional framed command and wait for a response.
    fn exchange(&mut self, command: Option<&[u8]>, timeout: Duration) -> Result<Vec<u8>>;

    /// Look for a card matching `target`. Absence of a card is a normal
    /// outcome, not an error.
    fn sense(&mut self, target: &SenseTarget) -> Result<Option<TagHandle>>;
}
