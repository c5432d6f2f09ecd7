/// Beacon Rust Implementation
/// Beacon GPS telemetry protocol client and utilities in Rust

pub mod beacon_common_rs;

// 便利な再エクスポート
pub mod prelude {
    pub use crate::beacon_common_rs::clients::async_beacon_client::AsyncBeaconClient;
    pub use crate::beacon_common_rs::clients::beacon_client::BeaconClient;
    pub use crate::beacon_common_rs::clients::FixSender;
    pub use crate::beacon_common_rs::packet::core::{BeaconError, BeaconResult};
    pub use crate::beacon_common_rs::packet::types::{build_fix_packet, FixReport};
}
