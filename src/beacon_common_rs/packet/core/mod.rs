//! パケットコア機能
//! チェックサム計算、ビッグエンディアン書き込み、プロトコル定数、エラー処理等のコア機能

pub mod big_endian;
pub mod checksum;
pub mod exceptions;
pub mod protocol;

// 便利な再エクスポート
pub use big_endian::{get_be16, get_be32, get_be64, set_be16, set_be32, set_be64, set_u8};
pub use checksum::{calc_crc16, embed_packet_checksum, update_crc16, verify_packet_checksum};
pub use exceptions::{BeaconError, BeaconResult};
pub use protocol::{RequestType, ResponseType};
