use crate::beacon_common_rs::packet::core::big_endian::{get_be16, get_be32, get_be64};
use crate::beacon_common_rs::packet::core::checksum::verify_packet_checksum;
use crate::beacon_common_rs::packet::core::protocol::{
    CHECKSUM_OFFSET, FIX_PACKET_SIZE, HEADER_SIZE, KEY_OFFSET, MAGIC_OFFSET, TYPE_OFFSET,
};
use crate::beacon_common_rs::packet::types::fix_packet::{LATITUDE_OFFSET, LONGITUDE_OFFSET};
use crate::beacon_common_rs::packet::types::header::fixed_point_to_angle;
use log::debug;

/// 送信パケットの内容を debug ログへ出力する
/// - ヘッダ各フィールドとチェックサム検証結果
/// - Fix パケットであれば座標
pub struct PacketDebugLogger;

impl PacketDebugLogger {
    pub fn log_request(buf: &[u8]) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        debug!("[PacketDebug] {}", Self::describe_request(buf));
        debug!("[PacketDebug] raw={}", hex::encode(buf));
    }

    /// パケットの要約を1行の文字列にする
    pub fn describe_request(buf: &[u8]) -> String {
        if buf.len() < HEADER_SIZE {
            return format!("too short: {} bytes", buf.len());
        }

        let mut line = format!(
            "req magic={:08X} crc={:04X} type={} key={:016X} len={} chk_ok={}",
            get_be32(buf, MAGIC_OFFSET),
            get_be16(buf, CHECKSUM_OFFSET),
            get_be16(buf, TYPE_OFFSET),
            get_be64(buf, KEY_OFFSET),
            buf.len(),
            verify_packet_checksum(buf)
        );
        if buf.len() == FIX_PACKET_SIZE {
            let lat = fixed_point_to_angle(get_be32(buf, LATITUDE_OFFSET) as i32);
            let lon = fixed_point_to_angle(get_be32(buf, LONGITUDE_OFFSET) as i32);
            line.push_str(&format!(" lat={:.6} lon={:.6}", lat, lon));
        }
        line
    }
}
