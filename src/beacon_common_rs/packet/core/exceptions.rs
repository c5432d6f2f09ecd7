/// Beacon クライアント用エラー型定義

use std::error::Error;
use std::fmt;
use std::io;

/// Beacon クライアントの統合エラー型
#[derive(Debug)]
pub enum BeaconError {
    /// ソケットの作成・バインドに失敗
    SocketCreation(io::Error),
    /// データグラムの送信に失敗
    Transmission(io::Error),
    /// close 済みのクライアントで送信しようとした
    Closed,
    /// 送信先ホストの名前解決に失敗
    Resolve(String),
    /// クライアントキーの形式が不正
    InvalidKey(String),
    /// 設定ファイル・環境変数の内容が不正
    Config(String),
    /// トラックファイルの読み込みに失敗
    Track(String),
}

impl fmt::Display for BeaconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeaconError::SocketCreation(err) => write!(f, "ソケットの作成に失敗しました: {}", err),
            BeaconError::Transmission(err) => write!(f, "送信に失敗しました: {}", err),
            BeaconError::Closed => write!(f, "クライアントは既にクローズされています"),
            BeaconError::Resolve(msg) => write!(f, "名前解決エラー: {}", msg),
            BeaconError::InvalidKey(msg) => write!(f, "不正なクライアントキー: {}", msg),
            BeaconError::Config(msg) => write!(f, "設定エラー: {}", msg),
            BeaconError::Track(msg) => write!(f, "トラックファイルエラー: {}", msg),
        }
    }
}

impl Error for BeaconError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BeaconError::SocketCreation(err) | BeaconError::Transmission(err) => Some(err),
            _ => None,
        }
    }
}

/// Result型のエイリアス
pub type BeaconResult<T> = Result<T, BeaconError>;

impl BeaconError {
    /// 設定エラーを作成
    pub fn config(msg: impl Into<String>) -> Self {
        BeaconError::Config(msg.into())
    }

    /// I/O 由来のエラーであれば、その種別を返す
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            BeaconError::SocketCreation(err) | BeaconError::Transmission(err) => Some(err.kind()),
            _ => None,
        }
    }
}
