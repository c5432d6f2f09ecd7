/// FixPacket 実装 (Type=2)
/// GPS の測位結果を受信側へ送る 32 バイトのパケット
///
/// レイアウト:
///     0..16   ヘッダ (magic, crc, type, key)
///     16..20  緯度 (マイクロ度, i32)
///     20..24  経度 (マイクロ度, i32)
///     24..26  方位 (度 0..359, 0xFFFF=不明)
///     26..28  速度 (m/16s, 0xFFFF=不明)
///     28..30  高度 (m, i16, 0x7FFF=不明)
///     30..32  予約 (0)

use super::header::{set_angle, write_header};
use crate::beacon_common_rs::packet::core::big_endian::set_be16;
use crate::beacon_common_rs::packet::core::checksum::embed_packet_checksum;
use crate::beacon_common_rs::packet::core::protocol::{
    RequestType, FIX_PACKET_SIZE, INVALID_S16, INVALID_U16,
};

pub const LATITUDE_OFFSET: usize = 16;
pub const LONGITUDE_OFFSET: usize = 20;
pub const DIRECTION_OFFSET: usize = 24;
pub const SPEED_OFFSET: usize = 26;
pub const ALTITUDE_OFFSET: usize = 28;

/// 位置のみの FixPacket を組み立てる
///
/// 方位・速度・高度はすべて「不明」の番兵値になる
///
/// Args:
///     key: 端末に割り当てられたクライアントキー
///     latitude: 緯度（度、北が正）
///     longitude: 経度（度、東が正）
///
/// Returns:
///     チェックサム埋め込み済みの 32 バイト
pub fn build_fix_packet(key: u64, latitude: f64, longitude: f64) -> [u8; FIX_PACKET_SIZE] {
    FixReport::new(latitude, longitude).to_bytes(key)
}

/// 任意のテレメトリ付きの測位情報
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixReport {
    pub latitude: f64,
    pub longitude: f64,
    /// 進行方向（度、0..359）
    pub direction: Option<u16>,
    /// 速度（m/16s）
    pub speed: Option<u16>,
    /// 海抜高度（m）
    pub altitude: Option<i16>,
}

impl FixReport {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            direction: None,
            speed: None,
            altitude: None,
        }
    }

    pub fn with_direction(mut self, degrees: u16) -> Self {
        self.direction = Some(degrees);
        self
    }

    pub fn with_speed(mut self, speed: u16) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_altitude(mut self, meters: i16) -> Self {
        self.altitude = Some(meters);
        self
    }

    /// 指定したキーでパケットにシリアライズする
    pub fn to_bytes(&self, key: u64) -> [u8; FIX_PACKET_SIZE] {
        let mut data = [0u8; FIX_PACKET_SIZE];

        write_header(&mut data, RequestType::Fix, key);
        set_angle(&mut data, LATITUDE_OFFSET, self.latitude);
        set_angle(&mut data, LONGITUDE_OFFSET, self.longitude);

        set_be16(&mut data, DIRECTION_OFFSET, self.direction.unwrap_or(INVALID_U16));
        set_be16(&mut data, SPEED_OFFSET, self.speed.unwrap_or(INVALID_U16));
        set_be16(&mut data, ALTITUDE_OFFSET, self.altitude.unwrap_or(INVALID_S16) as u16);

        embed_packet_checksum(&mut data);
        data
    }
}
