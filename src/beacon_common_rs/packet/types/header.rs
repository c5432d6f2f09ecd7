/// 全パケット共通のヘッダ書き込みと座標の固定小数点変換

use crate::beacon_common_rs::packet::core::big_endian::{set_be16, set_be32, set_be64};
use crate::beacon_common_rs::packet::core::protocol::{
    RequestType, ANGLE_SCALE, CHECKSUM_OFFSET, KEY_OFFSET, MAGIC, MAGIC_OFFSET, TYPE_OFFSET,
};

/// magic, 種別, キーを書き込む。チェックサムフィールドは0にしておく
pub fn write_header(data: &mut [u8], request_type: RequestType, key: u64) {
    set_be32(data, MAGIC_OFFSET, MAGIC);
    set_be16(data, CHECKSUM_OFFSET, 0);
    set_be16(data, TYPE_OFFSET, request_type.code());
    set_be64(data, KEY_OFFSET, key);
}

/// 度単位の座標をマイクロ度の i32 に変換する
///
/// 範囲チェックは行わない。i32 に収まらない値（約 ±2147.48 度の外側）は
/// 2の補数で折り返される
pub fn angle_to_fixed_point(degrees: f64) -> i32 {
    (degrees * ANGLE_SCALE).round() as i64 as i32
}

/// マイクロ度の固定小数点値を度に戻す
pub fn fixed_point_to_angle(fixed: i32) -> f64 {
    f64::from(fixed) / ANGLE_SCALE
}

/// 座標を指定位置に書き込む
pub fn set_angle(data: &mut [u8], offset: usize, degrees: f64) {
    set_be32(data, offset, angle_to_fixed_point(degrees) as u32);
}
