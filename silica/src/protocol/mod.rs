// silica/src/protocol/mod.rs

//! Wire-level command framing, encoding and target resolution.

pub mod exchange;
pub mod target;
pub mod write;

pub use exchange::{frame_command, strip_status, Exchange};
pub use target::{resolve, ResolveError, Target};
pub use write::WriteSystemBlock;
