// silica/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These centralize common MockTransport seeding so tests across the crate
//! and the tests/ directory build raw transport responses the same way.
#![allow(dead_code)]

use crate::constants::RESP_POLLING;
use crate::transport::MockTransport;

/// Wrap a payload the way the transport hands responses back: a leading
/// status/length byte (which the exchange layer strips) followed by the
/// payload.
#[doc(hidden)]
pub fn framed_response(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + 1);
    out.push((payload.len() + 1) as u8);
    out.extend_from_slice(payload);
    out
}

/// A polling-style response payload: response code 0x01, the given IDm,
/// then the default PMm.
#[doc(hidden)]
pub fn polling_payload(idm: [u8; 8]) -> Vec<u8> {
    let mut out = vec![RESP_POLLING];
    out.extend_from_slice(&idm);
    out.extend_from_slice(&crate::constants::DEFAULT_PMM);
    out
}

/// Build a MockTransport pre-seeded with the given raw responses.
#[doc(hidden)]
pub fn mock_with_responses(responses: Vec<Vec<u8>>) -> MockTransport {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    mock
}
