use silica::protocol::{resolve, ResolveError};

fn padded(head: &[u8]) -> [u8; 16] {
    let mut v = [0u8; 16];
    v[..head.len()].copy_from_slice(head);
    v
}

#[test]
fn every_raw_block_resolves_verbatim() {
    let value: Vec<u8> = (0x10..0x20).collect();
    for n in 0u8..14 {
        let cmd = resolve(&n.to_string(), &value).unwrap();
        assert_eq!(cmd.block_num(), n);
        assert_eq!(&cmd.data().as_bytes()[..], &value[..]);
    }
}

#[test]
fn raw_block_boundaries() {
    assert_eq!(
        resolve("14", &[0u8; 16]),
        Err(ResolveError::BlockOutOfRange)
    );
    assert!(matches!(
        resolve("-1", &[0u8; 16]),
        Err(ResolveError::UnknownCommand(_))
    ));
}

#[test]
fn identifier_families() {
    let idm = [0xde, 0xad, 0xbe, 0xef, 0x00, 0x11, 0x22, 0x33];
    let cmd = resolve("idm", &idm).unwrap();
    assert_eq!(cmd.block_num(), 0x83);
    let mut expected = [0u8; 16];
    expected[..8].copy_from_slice(&idm);
    expected[8..].copy_from_slice(&[0x00, 0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
    assert_eq!(cmd.data().as_bytes(), &expected);

    // Full 16-byte identifier pair passes through untouched, and longer
    // spellings of the name match on the prefix.
    let pair: Vec<u8> = (0..16).collect();
    let cmd = resolve("idm_pmm", &pair).unwrap();
    assert_eq!(cmd.block_num(), 0x83);
    assert_eq!(&cmd.data().as_bytes()[..], &pair[..]);
}

#[test]
fn service_code_reversed_system_code_not() {
    let ser = resolve("service", &[0x09, 0x00]).unwrap();
    assert_eq!(ser.block_num(), 0x84);
    assert_eq!(ser.data().as_bytes(), &padded(&[0x00, 0x09]));

    let sys = resolve("system", &[0xff, 0xff]).unwrap();
    assert_eq!(sys.block_num(), 0x85);
    assert_eq!(sys.data().as_bytes(), &padded(&[0xff, 0xff]));
}

#[test]
fn constraint_failures_name_the_family() {
    assert_eq!(
        resolve("5", &[0u8; 4]),
        Err(ResolveError::RawDataLength { actual: 4 })
    );
    assert_eq!(
        resolve("idm", &[0u8; 12]),
        Err(ResolveError::IdentifierLength { actual: 12 })
    );
    assert_eq!(
        resolve("ser", &[0u8; 16]),
        Err(ResolveError::ServiceCodeLength { actual: 16 })
    );
    assert_eq!(
        resolve("sys", &[]),
        Err(ResolveError::SystemCodeLength { actual: 0 })
    );
    assert!(matches!(
        resolve("poll", &[]),
        Err(ResolveError::UnknownCommand(_))
    ));
}
