use beacon_rust::beacon_common_rs::packet::core::big_endian::{
    get_be16, get_be32, get_be64, set_be16, set_be32, set_be64, set_u8,
};

#[test]
fn test_fields_written_msb_first() {
    let mut data = [0u8; 16];
    set_be32(&mut data, 0, 0xB7624363);
    set_be16(&mut data, 4, 0x37D8);
    set_be16(&mut data, 6, 2);
    set_be64(&mut data, 8, 0x1122334455667788);

    assert_eq!(
        data,
        [
            0xB7, 0x62, 0x43, 0x63, 0x37, 0xD8, 0x00, 0x02,
            0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88,
        ]
    );
}

#[test]
fn test_write_only_touches_its_field() {
    let mut data = [0xAAu8; 8];
    set_be16(&mut data, 3, 0x0102);
    assert_eq!(data, [0xAA, 0xAA, 0xAA, 0x01, 0x02, 0xAA, 0xAA, 0xAA]);

    set_u8(&mut data, 7, 0x55);
    assert_eq!(data[7], 0x55);
}

#[test]
fn test_write_at_exact_end_is_allowed() {
    let mut data = [0u8; 32];
    set_be16(&mut data, 30, 0xFFFF);
    let tail = get_be64(&data, 24);
    set_be64(&mut data, 24, tail);
    assert_eq!(get_be16(&data, 30), 0xFFFF);
}

#[test]
fn test_signed_values() {
    let mut data = [0u8; 6];
    set_be32(&mut data, 0, (-52_516_272i32) as u32);
    set_be16(&mut data, 4, i16::MAX as u16);

    assert_eq!(get_be32(&data, 0) as i32, -52_516_272);
    assert_eq!(&data[4..6], &[0x7F, 0xFF]);
}

#[test]
#[should_panic]
fn test_be16_out_of_bounds() {
    let mut data = [0u8; 2];
    set_be16(&mut data, 1, 0);
}

#[test]
#[should_panic]
fn test_be64_out_of_bounds() {
    let mut data = [0u8; 32];
    set_be64(&mut data, 25, 0);
}

#[test]
#[should_panic]
fn test_u8_out_of_bounds() {
    let mut data = [0u8; 4];
    set_u8(&mut data, 4, 0);
}
