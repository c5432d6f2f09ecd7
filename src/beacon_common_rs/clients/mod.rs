/// Beacon クライアント実装

pub mod async_beacon_client;
pub mod beacon_client;
pub mod utils;

use crate::beacon_common_rs::packet::core::exceptions::BeaconResult;
use async_trait::async_trait;

// 便利な再エクスポート
pub use async_beacon_client::AsyncBeaconClient;
pub use beacon_client::BeaconClient;

/// 測位結果を1件ずつ送信できるもの
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FixSender {
    async fn send_fix(&self, latitude: f64, longitude: f64) -> BeaconResult<()>;
}
