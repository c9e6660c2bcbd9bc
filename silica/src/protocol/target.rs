// silica/src/protocol/target.rs

//! Symbolic write-target resolution.

use thiserror::Error;

use crate::constants::{BLOCK_IDM, BLOCK_SERVICE, BLOCK_SYSTEM, RAW_BLOCK_LIMIT};
use crate::types::{BlockData, Pmm};

use super::write::WriteSystemBlock;

/// Why a symbolic command and its parameter could not be turned into a
/// write. Nothing is sent to the card when any of these occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The name matches no target family.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A numeric name outside the raw block range.
    #[error("block number must be between 0 and 13")]
    BlockOutOfRange,

    /// Raw block writes take exactly 16 bytes.
    #[error("data must be exactly 16 bytes for raw write, got {actual}")]
    RawDataLength {
        /// Length actually supplied.
        actual: usize,
    },

    /// Identifier writes take 8 bytes (IDm) or 16 (IDm + PMm).
    #[error("IDm must be 8 bytes, PMm optional 8 bytes (total 16 bytes), got {actual}")]
    IdentifierLength {
        /// Length actually supplied.
        actual: usize,
    },

    /// Service code writes take exactly 2 bytes.
    #[error("service code must be 2 bytes, got {actual}")]
    ServiceCodeLength {
        /// Length actually supplied.
        actual: usize,
    },

    /// System code writes take exactly 2 bytes.
    #[error("system code must be 2 bytes, got {actual}")]
    SystemCodeLength {
        /// Length actually supplied.
        actual: usize,
    },
}

/// The closed set of write targets. Classification happens once, in
/// [`Target::classify`]; each variant owns its validation and value
/// construction as a match arm in [`Target::build_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A user-writable data block addressed by its literal number.
    Raw(u8),
    /// The IDm/PMm identifier block (0x83).
    Identifier,
    /// The service code block (0x84).
    Service,
    /// The system code block (0x85).
    System,
}

impl Target {
    /// Classify a command name, case-insensitively. All-digit names select
    /// a raw block; the symbolic families match on their prefix.
    pub fn classify(name: &str) -> Result<Self, ResolveError> {
        let name = name.to_ascii_lowercase();

        if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
            // Parse into something wider than u8 first so "256" is an
            // out-of-range block, not a parse failure.
            let block: u32 = name
                .parse()
                .map_err(|_| ResolveError::BlockOutOfRange)?;
            if block >= RAW_BLOCK_LIMIT as u32 {
                return Err(ResolveError::BlockOutOfRange);
            }
            return Ok(Self::Raw(block as u8));
        }

        if name.starts_with("idm") {
            Ok(Self::Identifier)
        } else if name.starts_with("ser") {
            Ok(Self::Service)
        } else if name.starts_with("sys") {
            Ok(Self::System)
        } else {
            Err(ResolveError::UnknownCommand(name))
        }
    }

    /// The system block this target writes to.
    pub fn block_number(&self) -> u8 {
        match self {
            Self::Raw(n) => *n,
            Self::Identifier => BLOCK_IDM,
            Self::Service => BLOCK_SERVICE,
            Self::System => BLOCK_SYSTEM,
        }
    }

    /// Validate the parameter against this family's length rule and build
    /// the 16-byte block value.
    pub fn build_data(&self, param: &[u8]) -> Result<BlockData, ResolveError> {
        let mut value = [0u8; 16];
        match self {
            Self::Raw(_) => {
                if param.len() != 16 {
                    return Err(ResolveError::RawDataLength {
                        actual: param.len(),
                    });
                }
                value.copy_from_slice(param);
            }
            Self::Identifier => match param.len() {
                16 => value.copy_from_slice(param),
                8 => {
                    value[..8].copy_from_slice(param);
                    value[8..].copy_from_slice(Pmm::DEFAULT.as_bytes());
                }
                actual => return Err(ResolveError::IdentifierLength { actual }),
            },
            Self::Service => {
                if param.len() != 2 {
                    return Err(ResolveError::ServiceCodeLength {
                        actual: param.len(),
                    });
                }
                // The card stores the service code byte-swapped.
                value[0] = param[1];
                value[1] = param[0];
            }
            Self::System => {
                if param.len() != 2 {
                    return Err(ResolveError::SystemCodeLength {
                        actual: param.len(),
                    });
                }
                value[..2].copy_from_slice(param);
            }
        }
        Ok(BlockData::from_bytes(value))
    }
}

/// Resolve a symbolic command name and raw parameter into a ready-to-send
/// [`WriteSystemBlock`].
pub fn resolve(name: &str, param: &[u8]) -> Result<WriteSystemBlock, ResolveError> {
    let target = Target::classify(name)?;
    let data = target.build_data(param)?;
    Ok(WriteSystemBlock::new(target.block_number(), data))
}
