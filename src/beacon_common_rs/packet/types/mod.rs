/// Beacon パケット型定義

pub mod fix_packet;
pub mod header;
pub mod ping_packet;

// 便利な再エクスポート
pub use fix_packet::{build_fix_packet, FixReport};
pub use header::{angle_to_fixed_point, fixed_point_to_angle};
pub use ping_packet::{build_nop_packet, build_ping_packet};
