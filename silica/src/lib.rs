// silica/src/lib.rs

//! silica
//!
//! Raw FeliCa console and SiliCa system-block writer.
//!
//! The crate frames raw commands for a reader transport, encodes the
//! "write system block" command family, resolves symbolic write targets
//! (raw block, identifier pair, service code, system code), and runs an
//! interactive console that tracks and substitutes the card's IDm.
#![warn(missing_docs)]

pub mod card;
pub mod console;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
