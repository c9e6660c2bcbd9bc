// silica/src/protocol/exchange.rs

//! Transport-level framing and the exchange primitive.

use std::time::Duration;

use crate::constants::MAX_COMMAND_LEN;
use crate::transport::Transport;
use crate::{Error, Result};

/// Prepend the one-byte length prefix the transport expects.
///
/// The prefix counts itself, so the first byte is `command.len() + 1`. The
/// transport echoes a status/length byte back as the first response byte,
/// which [`strip_status`] removes on the way in.
pub fn frame_command(command: &[u8]) -> Result<Vec<u8>> {
    if command.len() > MAX_COMMAND_LEN {
        return Err(Error::CommandTooLong {
            actual: command.len(),
        });
    }

    let mut out = Vec::with_capacity(command.len() + 1);
    out.push((command.len() + 1) as u8);
    out.extend_from_slice(command);
    Ok(out)
}

/// Drop the transport-level status/length byte from a response. An empty
/// response stays empty.
pub fn strip_status(response: &[u8]) -> Vec<u8> {
    match response.split_first() {
        Some((_, rest)) => rest.to_vec(),
        None => Vec::new(),
    }
}

/// One framed request/response exchange against a [`Transport`].
///
/// Knows nothing about command semantics; it only applies the length prefix
/// on the way out and strips the status byte on the way in.
pub struct Exchange<'t, T: Transport + ?Sized> {
    transport: &'t mut T,
    timeout: Duration,
}

impl<'t, T: Transport + ?Sized> Exchange<'t, T> {
    /// Bind a transport and a per-exchange timeout.
    pub fn new(transport: &'t mut T, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    /// Send a command (or just listen when `None`) and return the response
    /// with its status byte stripped.
    pub fn send(&mut self, command: Option<&[u8]>) -> Result<Vec<u8>> {
        let framed = match command {
            Some(cmd) => Some(frame_command(cmd)?),
            None => None,
        };

        if let Some(f) = &framed {
            log::debug!("exchange >> {}", crate::utils::bytes_to_hex(f));
        } else {
            log::debug!("exchange >> (listen)");
        }

        let raw = self.transport.exchange(framed.as_deref(), self.timeout)?;
        log::debug!("exchange << {}", crate::utils::bytes_to_hex(&raw));

        Ok(strip_status(&raw))
    }
}
