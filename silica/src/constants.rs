// silica/src/constants.rs
//! Protocol constants shared across the crate.

/// FeliCa Polling command code.
pub const CMD_POLLING: u8 = 0x00;

/// Polling response code (first byte of a polling-style response).
pub const RESP_POLLING: u8 = 0x01;

/// Write command code used for SiliCa system blocks.
pub const CMD_WRITE: u8 = 0x08;

/// Block-list element flag: 2-byte element, access without block-count
/// extension.
pub const BLOCK_LIST_FLAG: u8 = 0x80;

/// System block holding the IDm/PMm pair.
pub const BLOCK_IDM: u8 = 0x83;

/// System block holding the service code.
pub const BLOCK_SERVICE: u8 = 0x84;

/// System block holding the system code.
pub const BLOCK_SYSTEM: u8 = 0x85;

/// Number of user-writable data blocks on a SiliCa. Raw writes address
/// blocks 0..RAW_BLOCK_LIMIT only.
pub const RAW_BLOCK_LIMIT: u8 = 14;

/// PMm appended when only an 8-byte IDm is supplied for the identifier
/// block: 00 01 FF FF FF FF FF FF.
pub const DEFAULT_PMM: [u8; 8] = [0x00, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];

/// Longest command the one-byte length prefix can frame (prefix counts
/// itself, so len + 1 must fit in a byte).
pub const MAX_COMMAND_LEN: usize = 254;

/// FeliCa 212 kbit/s polling target, as understood by the sensing layer.
pub const SENSE_TARGET_212F: &str = "212F";
