use silica::protocol::{frame_command, strip_status, Exchange};
use silica::transport::MockTransport;
use silica::utils::ms;
use silica::Error;

use proptest::prelude::*;

#[test]
fn framing_is_length_prefix_plus_one() {
    let cmd = [0x00, 0xff, 0xff, 0x00, 0x00];
    let framed = frame_command(&cmd).unwrap();
    assert_eq!(framed[0] as usize, cmd.len() + 1);
    assert_eq!(&framed[1..], &cmd);
}

#[test]
fn framing_upper_bound_is_254() {
    assert!(frame_command(&vec![0u8; 254]).is_ok());
    assert!(matches!(
        frame_command(&vec![0u8; 255]),
        Err(Error::CommandTooLong { actual: 255 })
    ));
}

proptest! {
    // The transport strips and prepends asymmetrically, so there is no
    // frame/unframe roundtrip; the two halves are checked independently.
    #[test]
    fn frame_layout_prop(cmd in prop::collection::vec(any::<u8>(), 1..=254)) {
        let framed = frame_command(&cmd).unwrap();
        prop_assert_eq!(framed.len(), cmd.len() + 1);
        prop_assert_eq!(framed[0] as usize, cmd.len() + 1);
        prop_assert_eq!(&framed[1..], &cmd[..]);
    }

    #[test]
    fn strip_status_drops_exactly_one_byte(resp in prop::collection::vec(any::<u8>(), 1..64)) {
        prop_assert_eq!(strip_status(&resp), &resp[1..]);
    }
}

#[test]
fn exchange_roundtrip_through_mock() {
    let mut mock = MockTransport::new();
    mock.push_response(vec![0x10, 0x0d, 0xde, 0xad]);

    let mut ex = Exchange::new(&mut mock, ms(250));
    let resp = ex.send(Some(&[0x0c, 0x01])).unwrap();
    assert_eq!(resp, vec![0x0d, 0xde, 0xad]);

    assert_eq!(mock.sent, vec![Some(vec![0x03, 0x0c, 0x01])]);
    assert_eq!(mock.timeouts, vec![ms(250)]);
}

#[test]
fn listen_only_exchange_sends_nothing() {
    let mut mock = MockTransport::new();
    mock.push_response(vec![0x01, 0xaa]);

    let mut ex = Exchange::new(&mut mock, ms(250));
    let resp = ex.send(None).unwrap();
    assert_eq!(resp, vec![0xaa]);
    assert_eq!(mock.sent, vec![None]);
}
