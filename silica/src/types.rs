// silica/src/types.rs

//! Fixed-size FeliCa value types.

use crate::Error;
use std::convert::TryFrom;

/// IDm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Idm([u8; 8]);

impl Idm {
    /// Wrap an 8-byte IDm.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// The raw 8 bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Lowercase hex, no separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 8 {
            return Err(Error::InvalidLength {
                expected: 8,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes[..8]);
        Ok(Self(arr))
    }
}

/// PMm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pmm([u8; 8]);

impl Pmm {
    /// Default PMm appended when the identifier block is written from an
    /// 8-byte IDm alone.
    pub const DEFAULT: Self = Self(crate::constants::DEFAULT_PMM);

    /// Wrap an 8-byte PMm.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// The raw 8 bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Pmm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 8 {
            return Err(Error::InvalidLength {
                expected: 8,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes[..8]);
        Ok(Self(arr))
    }
}

/// SystemCode (u16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemCode(u16);

impl SystemCode {
    /// The wildcard system code that matches any card.
    pub const ANY: Self = Self(0xffff);

    /// Wrap a system code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// The numeric value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Big-endian hex as it appears inside a raw polling command,
    /// e.g. 0xFFFF -> "ffff".
    pub fn to_hex(&self) -> String {
        format!("{:04x}", self.0)
    }

    /// Parse the 4-hex-digit form supplied on the command line.
    pub fn from_hex(s: &str) -> crate::Result<Self> {
        if s.len() != 4 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(format!(
                "system code must be 4 hex digits, got {:?}",
                s
            )));
        }
        let code = u16::from_str_radix(s, 16)
            .map_err(|_| Error::InvalidHex(format!("system code must be 4 hex digits, got {:?}", s)))?;
        Ok(Self(code))
    }
}

/// ServiceCode (u16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceCode(u16);

impl ServiceCode {
    /// The "write with key" service every system-block write goes through.
    pub const SYSTEM_WRITE: Self = Self(0x0009);

    /// Wrap a service code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// The numeric value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Little-endian wire form, as it appears in a command body.
    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; 16]);

impl BlockData {
    /// Wrap a 16-byte block value.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// The raw 16 bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Lowercase hex, no separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 16 {
            return Err(Error::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(&bytes[..16]);
        Ok(Self(arr))
    }
}
