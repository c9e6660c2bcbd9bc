// silica/src/card.rs

//! Card-level operations built on one exchange each.

use std::time::Duration;

use crate::protocol::{Exchange, WriteSystemBlock};
use crate::transport::Transport;
use crate::{Error, Result};

/// Send a single system-block write and check the card's answer.
///
/// Validation and encoding complete before the one exchange call, so a
/// failed request never leaves a partial write behind. A rejection (wrong
/// response code or non-zero status flags, e.g. a locked block or a card
/// that is not a SiliCa) surfaces as [`Error::TagCommand`] carrying the
/// attempted block number.
pub fn write_system_block<T: Transport + ?Sized>(
    transport: &mut T,
    request: &WriteSystemBlock,
    timeout: Duration,
) -> Result<()> {
    let block = request.block_num();
    let mut exchange = Exchange::new(transport, timeout);
    let resp = exchange.send(Some(&request.encode()))?;

    let expected = request.command_code().wrapping_add(1);
    if resp.first() != Some(&expected) {
        return Err(Error::TagCommand { block });
    }

    // When present, the two status flags follow the echoed 8-byte IDm.
    if resp.len() >= 11 && (resp[9] != 0 || resp[10] != 0) {
        return Err(Error::TagCommand { block });
    }

    Ok(())
}
