/// 設定・ログ・ネットワーク等の共通ユーティリティ

pub mod auth;
pub mod config_loader;
pub mod log_config;
pub mod network;

pub use auth::{format_client_key, parse_client_key};
pub use config_loader::{BeaconConfig, ConfigLoader};
pub use log_config::init_logging;
pub use network::resolve_destination;
