//! Beacon 共通ライブラリ
//! パケット生成、クライアント、設定・ログ等のユーティリティ

pub mod clients;
pub mod packet;
pub mod utils;
