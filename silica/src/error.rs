// silica/src/error.rs

//! Crate-wide error and result types.

use thiserror::Error;

use crate::protocol::target::ResolveError;

/// 共通エラー型
///
/// Recoverable protocol conditions (timeout, malformed input) and fatal
/// setup conditions (no device) are distinct variants so callers never have
/// to distinguish them by catch ordering.
#[derive(Error, Debug)]
pub enum Error {
    /// No reader could be opened on the requested device path.
    #[error("no usable device found")]
    DeviceNotFound,

    // USB 実装を後から有効化できるように optional dependency にしている
    /// Error from the underlying USB stack.
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    /// A fixed-size value was built from a slice of the wrong length.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length in bytes.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// The command does not fit the one-byte length prefix.
    #[error("command too long: {actual} bytes (max {max})", max = crate::constants::MAX_COMMAND_LEN)]
    CommandTooLong {
        /// Length of the rejected command in bytes.
        actual: usize,
    },

    /// User-supplied hex could not be decoded.
    #[error("invalid hex input: {0}")]
    InvalidHex(String),

    /// A symbolic write target failed to resolve.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The card did not answer within the exchange timeout.
    #[error("operation timed out")]
    Timeout,

    /// The card answered but refused the write.
    #[error("write to block {block:#04x} rejected by card")]
    TagCommand {
        /// Block number of the rejected write.
        block: u8,
    },

    /// I/O failure on the console streams.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
