//! Beacon パケット処理
//! core: バイト操作・チェックサム・定数・エラー型
//! types: 各リクエストパケットの組み立て
//! debug: 送信パケットのダンプ

pub mod core;
pub mod debug;
pub mod types;
