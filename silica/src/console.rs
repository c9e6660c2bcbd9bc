// silica/src/console.rs

//! Interactive raw command console.
//!
//! The session loop cycles through awaiting input, dispatching one exchange,
//! and reporting its outcome (success, invalid input, or timeout) before
//! awaiting input again. The only mutable session state is the last-seen
//! IDm, owned by the [`Console`] and threaded explicitly through input
//! normalization and response inspection.

use std::io::{BufRead, Write};
use std::time::Duration;

use crate::constants::RESP_POLLING;
use crate::protocol::Exchange;
use crate::transport::Transport;
use crate::types::{Idm, SystemCode};
use crate::{Error, Result};

/// Token users type to stand in for the tracked identifier.
pub const IDM_PLACEHOLDER: &str = "[idm]";

/// Marker shown in place of the tracked identifier in displayed responses.
pub const IDM_REDACTION: &str = " [IDm] ";

/// Console session over one sensed card.
pub struct Console<'t, T: Transport + ?Sized> {
    transport: &'t mut T,
    timeout: Duration,
    system_code: SystemCode,
    idm: Option<Idm>,
}

impl<'t, T: Transport + ?Sized> Console<'t, T> {
    /// Bind a transport, a per-exchange timeout, and the system code used
    /// for the default poll.
    pub fn new(transport: &'t mut T, timeout: Duration, system_code: SystemCode) -> Self {
        Self {
            transport,
            timeout,
            system_code,
            idm: None,
        }
    }

    /// The identifier captured from the most recent polling-style response.
    pub fn idm(&self) -> Option<&Idm> {
        self.idm.as_ref()
    }

    /// The command synthesized while no identifier is tracked yet,
    /// displayed as if the user had typed it.
    pub fn default_poll_command(&self) -> String {
        format!("00 {} 00 00", self.system_code.to_hex())
    }

    /// Strip whitespace, fold to lowercase, then substitute the `[idm]`
    /// placeholder. With no identifier tracked the placeholder is left
    /// alone.
    fn normalize(line: &str, idm: Option<&Idm>) -> String {
        let mut s: String = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        if let Some(idm) = idm {
            s = s.replace(IDM_PLACEHOLDER, &idm.to_hex());
        }
        s
    }

    /// Capture the identifier from a polling-style response: first byte
    /// 0x01 and at least 9 bytes, IDm in bytes 1..9. Overwrites any
    /// previously tracked value. Returns the newly captured identifier.
    fn observe_response(&mut self, resp: &[u8]) -> Option<Idm> {
        if resp.len() >= 9 && resp[0] == RESP_POLLING {
            let idm = Idm::try_from(&resp[1..9]).ok()?;
            self.idm = Some(idm);
            Some(idm)
        } else {
            None
        }
    }

    /// Hex form of a response for display, with any occurrence of the
    /// tracked identifier replaced by the redaction marker. Cosmetic only.
    fn render_response(&self, resp: &[u8]) -> String {
        let mut h = crate::utils::bytes_to_hex(resp);
        if let Some(idm) = &self.idm {
            h = h.replace(&idm.to_hex(), IDM_REDACTION);
        }
        h
    }

    /// Run the session until end of input. End of input is the user's way
    /// out and is not an error; the loop always finishes the exchange in
    /// flight before checking for it again.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        loop {
            write!(out, "<< # ")?;
            out.flush()?;

            let line = if self.idm.is_none() {
                // No identifier yet: poll instead of blocking for input.
                let cmd = self.default_poll_command();
                writeln!(out, "{}", cmd)?;
                cmd
            } else {
                let mut buf = String::new();
                if input.read_line(&mut buf)? == 0 {
                    writeln!(out)?;
                    return Ok(());
                }
                buf
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let normalized = Self::normalize(line, self.idm.as_ref());
            let payload = match crate::utils::parse_hex(&normalized) {
                Ok(p) => p,
                Err(e) => {
                    writeln!(out, "Invalid input: {}", e)?;
                    continue;
                }
            };

            let resp = {
                let mut exchange = Exchange::new(&mut *self.transport, self.timeout);
                match exchange.send(Some(&payload)) {
                    Ok(r) => r,
                    Err(Error::Timeout) => {
                        writeln!(out, "TIMEOUT")?;
                        continue;
                    }
                    Err(e @ Error::CommandTooLong { .. }) => {
                        writeln!(out, "Invalid input: {}", e)?;
                        continue;
                    }
                    // Device-level failures are fatal to the session.
                    Err(e) => return Err(e),
                }
            };

            if resp.is_empty() {
                writeln!(out, ">> # <no response>")?;
                continue;
            }

            if let Some(idm) = self.observe_response(&resp) {
                writeln!(out, "\t[IDm] set to {}", idm.to_hex())?;
            }

            writeln!(out, ">> # {}", self.render_response(&resp))?;
        }
    }
}
