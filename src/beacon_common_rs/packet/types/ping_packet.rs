/// PingPacket (Type=1) と NopPacket (Type=0) の実装
///
/// Ping は接続とキーの確認用。受信側は ACK を返すが、このクライアントは読まない

use super::header::write_header;
use crate::beacon_common_rs::packet::core::big_endian::set_be16;
use crate::beacon_common_rs::packet::core::checksum::embed_packet_checksum;
use crate::beacon_common_rs::packet::core::protocol::{RequestType, HEADER_SIZE, PING_PACKET_SIZE};

pub const PING_ID_OFFSET: usize = 16;

/// 24 バイトの PingPacket を組み立てる
///
/// id 以降の予約フィールドは 0
pub fn build_ping_packet(key: u64, id: u16) -> [u8; PING_PACKET_SIZE] {
    let mut data = [0u8; PING_PACKET_SIZE];
    write_header(&mut data, RequestType::Ping, key);
    set_be16(&mut data, PING_ID_OFFSET, id);
    embed_packet_checksum(&mut data);
    data
}

/// ヘッダのみの NopPacket を組み立てる
pub fn build_nop_packet(key: u64) -> [u8; HEADER_SIZE] {
    let mut data = [0u8; HEADER_SIZE];
    write_header(&mut data, RequestType::Nop, key);
    embed_packet_checksum(&mut data);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ping_packet() {
        let data = build_ping_packet(0x1122334455667788, 7);
        assert_eq!(
            data,
            [
                0xB7, 0x62, 0x43, 0x63, 0x62, 0xBF, 0x00, 0x01,
                0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88,
                0x00, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            ]
        );
    }

    #[test]
    fn test_known_nop_packet() {
        let data = build_nop_packet(0x1122334455667788);
        assert_eq!(
            data,
            [
                0xB7, 0x62, 0x43, 0x63, 0x8D, 0xBE, 0x00, 0x00,
                0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88,
            ]
        );
    }
}
