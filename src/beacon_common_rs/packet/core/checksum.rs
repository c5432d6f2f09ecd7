/// Beacon パケットのチェックサム計算・検証機能
/// CRC-16/XMODEM（多項式 0x1021、初期値 0x0000、反転なし、最終XORなし）
/// 受信側と同じパラメータで計算する必要がある

use super::big_endian::{get_be16, set_be16};
use super::protocol::{CHECKSUM_OFFSET, HEADER_SIZE};

const POLYNOMIAL: u16 = 0x1021;

/// CRC 計算の初期値（XModem）
pub const CRC16_INITIAL: u16 = 0x0000;

const fn make_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = (i as u16) << 8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

static CRC16_TABLE: [u16; 256] = make_table();

/// 既存の CRC 値にバイト列を追加で反映する
///
/// Args:
///     crc: これまでの CRC 値（最初は CRC16_INITIAL）
///     data: 追加するバイト列
///
/// Returns:
///     更新後の CRC 値
pub fn update_crc16(crc: u16, data: &[u8]) -> u16 {
    data.iter().fold(crc, |crc, &octet| {
        (crc << 8) ^ CRC16_TABLE[usize::from((crc >> 8) as u8 ^ octet)]
    })
}

/// バイト列全体の CRC-16 を計算する
pub fn calc_crc16(data: &[u8]) -> u16 {
    update_crc16(CRC16_INITIAL, data)
}

/// パケットのチェックサムフィールドを0にしてから CRC を計算し、書き戻す
///
/// パケットはヘッダ（16バイト）以上の長さである必要がある
pub fn embed_packet_checksum(packet: &mut [u8]) {
    set_be16(packet, CHECKSUM_OFFSET, 0);
    let crc = calc_crc16(packet);
    set_be16(packet, CHECKSUM_OFFSET, crc);
}

/// パケットに埋め込まれたチェックサムを検証する
///
/// Returns:
///     チェックサムが正しければtrue。ヘッダより短いデータはfalse
pub fn verify_packet_checksum(packet: &[u8]) -> bool {
    if packet.len() < HEADER_SIZE {
        return false;
    }

    let stored = get_be16(packet, CHECKSUM_OFFSET);
    let mut zeroed = packet.to_vec();
    set_be16(&mut zeroed, CHECKSUM_OFFSET, 0);
    calc_crc16(&zeroed) == stored
}
