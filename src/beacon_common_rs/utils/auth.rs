use crate::beacon_common_rs::packet::core::exceptions::{BeaconError, BeaconResult};

/// 16進文字列のクライアントキーを u64 に変換する
///
/// 先頭の "0x" は省略可能。16桁に満たない場合は上位を0で埋める
pub fn parse_client_key(text: &str) -> BeaconResult<u64> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(BeaconError::InvalidKey("キーが空です".into()));
    }
    if digits.len() > 16 {
        return Err(BeaconError::InvalidKey(format!(
            "{} (16桁を超えています)",
            text
        )));
    }

    // hex は偶数桁のみ受け付けるので左を0で埋める
    let padded = format!("{:0>16}", digits);
    let mut bytes = [0u8; 8];
    hex::decode_to_slice(&padded, &mut bytes)
        .map_err(|e| BeaconError::InvalidKey(format!("{}: {}", text, e)))?;
    Ok(u64::from_be_bytes(bytes))
}

/// クライアントキーをログ表示用の16進文字列にする
pub fn format_client_key(key: u64) -> String {
    hex::encode(key.to_be_bytes())
}
