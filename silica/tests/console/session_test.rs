#[path = "../common/mod.rs"]
mod common;

use std::io::Cursor;

use silica::console::Console;
use silica::test_support::framed_response;
use silica::transport::MockTransport;
use silica::utils::ms;
use silica::SystemCode;

use common::fixtures;

const IDM_HEX: &str = "0123456789abcdef";

/// The full console scenario from a cold start: the default polling
/// command is synthesized and sent, the response teaches the console the
/// IDm, a placeholder command is expanded, and the IDm is redacted in
/// displayed output.
#[test]
fn cold_start_session() {
    let mut mock = MockTransport::new();
    mock.push_response(fixtures::polling_response());
    // Reply to the user's substituted command echoes the IDm, so the
    // display must redact it there too.
    let mut echo = vec![0x0d];
    echo.extend_from_slice(&fixtures::SAMPLE_IDM);
    mock.push_response(framed_response(&echo));

    let mut console = Console::new(&mut mock, ms(1000), SystemCode::ANY);
    let mut out = Vec::new();
    console
        .run(Cursor::new("0c [idm]\n"), &mut out)
        .unwrap();

    let shown = String::from_utf8(out).unwrap();

    // Default command displayed as if typed.
    assert!(shown.contains("<< # 00 ffff 00 00"));
    // Identifier capture reported separately from the raw response.
    assert!(shown.contains(&format!("[IDm] set to {}", IDM_HEX)));
    // Both responses redact the identifier's hex.
    assert!(shown.contains(">> # 01 [IDm] "));
    assert!(shown.contains(">> # 0d [IDm] "));
    assert!(!shown.contains(IDM_HEX.to_uppercase().as_str()));

    assert_eq!(console.idm(), Some(&fixtures::sample_idm()));

    // Two exchanges: the poll and the expanded placeholder command.
    assert_eq!(mock.sent.len(), 2);
    let poll = mock.sent[0].as_ref().unwrap();
    assert_eq!(poll, &vec![0x06, 0x00, 0xff, 0xff, 0x00, 0x00]);
    let expanded = mock.sent[1].as_ref().unwrap();
    let mut expected = vec![0x0a, 0x0c];
    expected.extend_from_slice(&fixtures::SAMPLE_IDM);
    assert_eq!(expanded, &expected);
}

#[test]
fn custom_system_code_drives_default_poll() {
    let mut mock = MockTransport::new();
    mock.push_response(fixtures::polling_response());

    let mut console = Console::new(&mut mock, ms(1000), SystemCode::new(0xfe00));
    let mut out = Vec::new();
    console.run(Cursor::new(""), &mut out).unwrap();

    let poll = mock.sent[0].as_ref().unwrap();
    assert_eq!(poll, &vec![0x06, 0x00, 0xfe, 0x00, 0x00, 0x00]);
}

#[test]
fn malformed_hex_keeps_session_state() {
    let mut mock = MockTransport::new();
    mock.push_response(fixtures::polling_response());

    let mut console = Console::new(&mut mock, ms(1000), SystemCode::ANY);
    let mut out = Vec::new();
    console.run(Cursor::new("zz\n"), &mut out).unwrap();

    let shown = String::from_utf8(out).unwrap();
    assert!(shown.contains("Invalid input:"));
    // The bad line never reached the transport and the IDm survived.
    assert_eq!(console.idm(), Some(&fixtures::sample_idm()));
    assert_eq!(mock.sent.len(), 1);
}

#[test]
fn timeout_then_clean_exit() {
    // Only the poll answer is queued: the next command times out.
    let mut mock = silica::test_support::mock_with_responses(vec![fixtures::polling_response()]);

    let mut console = Console::new(&mut mock, ms(1000), SystemCode::ANY);
    let mut out = Vec::new();
    console.run(Cursor::new("00ffff0000\n"), &mut out).unwrap();

    let shown = String::from_utf8(out).unwrap();
    assert!(shown.contains("TIMEOUT"));
    // End of input after the timeout finishes the session without error.
    assert!(shown.ends_with("<< # \n"));
}
