/// Beacon データグラムプロトコルの定数定義
/// 多バイト整数はすべてビッグエンディアン

/// 受信側の既定ポート
pub const DEFAULT_PORT: u16 = 5598;

/// すべてのパケット先頭に置かれるマジックナンバー
pub const MAGIC: u32 = 0xB762_4363;

/// 値なしを表す符号なし16ビットフィールドの番兵（方位・速度）
pub const INVALID_U16: u16 = u16::MAX;

/// 値なしを表す符号付き16ビットフィールドの番兵（高度）
pub const INVALID_S16: i16 = i16::MAX;

/// ヘッダ（magic, crc, type, key）のサイズ
pub const HEADER_SIZE: usize = 16;
pub const FIX_PACKET_SIZE: usize = 32;
pub const PING_PACKET_SIZE: usize = 24;

pub const MAGIC_OFFSET: usize = 0;
pub const CHECKSUM_OFFSET: usize = 4;
pub const TYPE_OFFSET: usize = 6;
pub const KEY_OFFSET: usize = 8;

/// 座標の固定小数点スケール（マイクロ度）
pub const ANGLE_SCALE: f64 = 1_000_000.0;

/// クライアントから送信するリクエスト種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum RequestType {
    Nop = 0,
    Ping = 1,
    Fix = 2,
}

/// 受信側が返すレスポンス種別（このクライアントでは読み取らない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ResponseType {
    Nop = 0,
    Ack = 1,
}

impl RequestType {
    pub fn code(self) -> u16 {
        self as u16
    }
}

impl ResponseType {
    pub fn code(self) -> u16 {
        self as u16
    }
}
