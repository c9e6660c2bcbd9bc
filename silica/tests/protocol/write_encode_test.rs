use silica::protocol::{frame_command, resolve, WriteSystemBlock};
use silica::BlockData;

#[test]
fn wire_layout_is_bit_exact() {
    // opcode, 01 <service code> (00), 01 80 <block>, 16 payload bytes
    let value: [u8; 16] = *b"0123456789abcdef";
    let cmd = WriteSystemBlock::new(0x07, BlockData::from_bytes(value));

    let mut expected = vec![0x08, 0x01, 0x09, 0x00, 0x01, 0x80, 0x07];
    expected.extend_from_slice(&value);
    assert_eq!(cmd.encode(), expected);
}

#[test]
fn body_is_22_bytes_for_every_target() {
    let cases = [
        resolve("0", &[0u8; 16]).unwrap(),
        resolve("13", &[0xff; 16]).unwrap(),
        resolve("idm", &[0x11; 8]).unwrap(),
        resolve("ser", &[0x09, 0x00]).unwrap(),
        resolve("sys", &[0xfe, 0x00]).unwrap(),
    ];
    for cmd in cases {
        assert_eq!(cmd.encode_body().len(), 22);
        assert_eq!(cmd.encode().len(), 23);
    }
}

#[test]
fn framed_write_command_end_to_end() {
    // A resolved idm write, fully framed for the transport.
    let idm = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];
    let cmd = resolve("idm", &idm).unwrap();
    let framed = frame_command(&cmd.encode()).unwrap();

    assert_eq!(framed.len(), 24);
    assert_eq!(framed[0], 24); // len + 1, counting the prefix itself
    assert_eq!(framed[1], 0x08);
    assert_eq!(&framed[2..8], &[0x01, 0x09, 0x00, 0x01, 0x80, 0x83]);
    assert_eq!(&framed[8..16], &idm);
    assert_eq!(
        &framed[16..24],
        &[0x00, 0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
    );
}
