/// ビッグエンディアン（ネットワークバイトオーダー）のフィールド読み書き
///
/// すべての関数は `offset + フィールド長 <= data.len()` を前提とする。
/// 範囲外の指定はプログラミングエラーとしてスライスの境界チェックで panic する。

/// 1バイトを書き込む
pub fn set_u8(data: &mut [u8], offset: usize, value: u8) {
    data[offset] = value;
}

/// 16ビット整数を上位バイトから書き込む
///
/// Args:
///     data: 書き込み先バッファ
///     offset: 書き込み開始位置（バイト）
///     value: 書き込む値
pub fn set_be16(data: &mut [u8], offset: usize, value: u16) {
    data[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
}

/// 32ビット整数を上位バイトから書き込む
pub fn set_be32(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}

/// 64ビット整数を上位バイトから書き込む
pub fn set_be64(data: &mut [u8], offset: usize, value: u64) {
    data[offset..offset + 8].copy_from_slice(&value.to_be_bytes());
}

/// 16ビット整数を読み出す
pub fn get_be16(data: &[u8], offset: usize) -> u16 {
    let mut bytes = [0u8; 2];
    bytes.copy_from_slice(&data[offset..offset + 2]);
    u16::from_be_bytes(bytes)
}

/// 32ビット整数を読み出す
pub fn get_be32(data: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[offset..offset + 4]);
    u32::from_be_bytes(bytes)
}

/// 64ビット整数を読み出す
pub fn get_be64(data: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[offset..offset + 8]);
    u64::from_be_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_be16() {
        let mut data = [0u8; 4];
        set_be16(&mut data, 1, 0xABCD);
        assert_eq!(data, [0x00, 0xAB, 0xCD, 0x00]);
    }

    #[test]
    fn test_set_be32_msb_first() {
        let mut data = [0u8; 4];
        set_be32(&mut data, 0, 0xB7624363);
        assert_eq!(data, [0xB7, 0x62, 0x43, 0x63]);
    }

    #[test]
    fn test_set_be64() {
        let mut data = [0u8; 10];
        set_be64(&mut data, 2, 0x1122334455667788);
        assert_eq!(&data[2..], &[0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]);
        assert_eq!(&data[..2], &[0, 0]);
    }

    #[test]
    fn test_signed_value_via_cast() {
        let mut data = [0u8; 4];
        set_be32(&mut data, 0, -1i32 as u32);
        assert_eq!(data, [0xFF; 4]);
        assert_eq!(get_be32(&data, 0) as i32, -1);
    }

    #[test]
    fn test_get_mirrors_set() {
        let mut data = [0u8; 16];
        set_u8(&mut data, 0, 0x5A);
        set_be16(&mut data, 2, 0x7FFF);
        set_be64(&mut data, 8, u64::MAX - 1);
        assert_eq!(data[0], 0x5A);
        assert_eq!(get_be16(&data, 2), 0x7FFF);
        assert_eq!(get_be64(&data, 8), u64::MAX - 1);
    }

    #[test]
    #[should_panic]
    fn test_write_past_end_panics() {
        let mut data = [0u8; 32];
        set_be32(&mut data, 30, 1);
    }

    #[test]
    #[should_panic]
    fn test_read_past_end_panics() {
        let data = [0u8; 8];
        get_be64(&data, 1);
    }
}
