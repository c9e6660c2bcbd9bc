// silica/src/prelude.rs

//! Convenience re-exports of the crate's most used items.

pub use crate::card::write_system_block;
pub use crate::console::Console;
pub use crate::protocol::{
    frame_command, resolve, strip_status, Exchange, ResolveError, Target, WriteSystemBlock,
};
pub use crate::transport::{MockTransport, SenseTarget, TagHandle, Transport};
pub use crate::{BlockData, Error, Idm, Pmm, Result, ServiceCode, SystemCode};

// Re-export small utilities for convenience
pub use crate::utils::{
    bytes_to_hex, bytes_to_hex_spaced, default_exchange_timeout, ms, parse_hex,
};
