//! Shared fixtures for integration tests.

use silica::test_support::{framed_response, polling_payload};
use silica::Idm;

pub const SAMPLE_IDM: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];

pub fn sample_idm() -> Idm {
    Idm::from_bytes(SAMPLE_IDM)
}

/// A raw transport response carrying a polling answer for [`SAMPLE_IDM`].
pub fn polling_response() -> Vec<u8> {
    framed_response(&polling_payload(SAMPLE_IDM))
}

/// A raw transport response acknowledging a system-block write.
pub fn write_ok_response() -> Vec<u8> {
    let mut payload = vec![0x09];
    payload.extend_from_slice(&SAMPLE_IDM);
    payload.push(0);
    payload.push(0);
    framed_response(&payload)
}
