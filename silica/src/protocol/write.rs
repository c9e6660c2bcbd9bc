// silica/src/protocol/write.rs

//! Encoding for the SiliCa "write system block" command.

use crate::constants::{BLOCK_LIST_FLAG, CMD_WRITE};
use crate::types::{BlockData, ServiceCode};

/// A single SiliCa system-block write, immutable once built.
///
/// The value is a [`BlockData`], so a wrong length is impossible past
/// construction; the block number fits a byte by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSystemBlock {
    block_num: u8,
    data: BlockData,
}

impl WriteSystemBlock {
    /// Build a write for the given block number and value.
    pub fn new(block_num: u8, data: BlockData) -> Self {
        Self { block_num, data }
    }

    /// Target block number.
    pub fn block_num(&self) -> u8 {
        self.block_num
    }

    /// Value to be written.
    pub fn data(&self) -> &BlockData {
        &self.data
    }

    /// FeliCa command code for the write.
    pub fn command_code(&self) -> u8 {
        CMD_WRITE
    }

    /// Encode the parameter body: number_of_services(1) + service_code(2)
    /// + number_of_blocks(1) + block_list_element(2) + block_data(16).
    /// Always 22 bytes regardless of block number.
    pub fn encode_body(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(22);
        buf.push(1);
        buf.extend_from_slice(&ServiceCode::SYSTEM_WRITE.to_le_bytes());
        buf.push(1);
        buf.push(BLOCK_LIST_FLAG);
        buf.push(self.block_num);
        buf.extend_from_slice(self.data.as_bytes());
        buf
    }

    /// Encode the full command: command code followed by the body.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(23);
        buf.push(self.command_code());
        buf.extend_from_slice(&self.encode_body());
        buf
    }
}
