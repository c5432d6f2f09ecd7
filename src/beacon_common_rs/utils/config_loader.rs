use crate::beacon_common_rs::packet::core::exceptions::{BeaconError, BeaconResult};
use crate::beacon_common_rs::packet::core::protocol::DEFAULT_PORT;
use crate::beacon_common_rs::utils::auth::parse_client_key;
use log::warn;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}
impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "localhost".into(), port: DEFAULT_PORT }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// 16進文字列のクライアントキー
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub timestamps: bool,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".into(), timestamps: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeaconConfig {
    pub server: ServerConfig,
    pub client: ClientConfig,
    pub logging: LogConfig,
}

impl BeaconConfig {
    /// 設定されたクライアントキーを数値に変換する
    pub fn client_key(&self) -> BeaconResult<u64> {
        parse_client_key(&self.client.key)
    }
}

pub struct ConfigLoader {
    config_paths: Vec<PathBuf>,
    env_prefix: String,
    load_dotenv: bool,
    require_file: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_paths: vec![PathBuf::from("beacon.toml"), PathBuf::from("beacon.json")],
            env_prefix: "BEACON_".into(),
            load_dotenv: true,
            require_file: false,
        }
    }
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self { config_paths: paths, ..Self::new() }
    }
    /// 明示的に指定された設定ファイルを読む。ファイルが無ければ `load` はエラーを返す
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Self { config_paths: vec![path.into()], require_file: true, ..Self::new() }
    }
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.into();
        self
    }
    pub fn without_dotenv(mut self) -> Self {
        self.load_dotenv = false;
        self
    }

    /// 既定値 -> 最初に見つかった設定ファイル -> 環境変数 の順に適用して検証する
    pub fn load(&self) -> BeaconResult<BeaconConfig> {
        let mut config = BeaconConfig::default();
        let mut found = false;
        for path in &self.config_paths {
            if path.exists() {
                config = self.load_from_file(path)?;
                found = true;
                break;
            }
        }
        if self.require_file && !found {
            return Err(BeaconError::config(format!(
                "Config file not found: {:?}",
                self.config_paths
            )));
        }
        if self.load_dotenv {
            if let Err(e) = dotenvy::dotenv() {
                if !e.not_found() {
                    warn!("Failed to load .env: {}", e);
                }
            }
        }
        self.apply_env_overrides(&mut config)?;
        self.validate_config(&config)?;
        Ok(config)
    }

    pub fn load_from_file(&self, path: &Path) -> BeaconResult<BeaconConfig> {
        let content = fs::read_to_string(path)
            .map_err(|e| BeaconError::config(format!("Failed to read config file {:?}: {}", path, e)))?;
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| BeaconError::config(format!("Failed to parse JSON config: {}", e))),
            Some("toml") => toml::from_str(&content)
                .map_err(|e| BeaconError::config(format!("Failed to parse TOML config: {}", e))),
            _ => Err(BeaconError::config("Unsupported config file format")),
        }
    }

    fn apply_env_overrides(&self, config: &mut BeaconConfig) -> BeaconResult<()> {
        if let Ok(host) = env::var(format!("{}SERVER_HOST", self.env_prefix)) {
            config.server.host = host;
        }
        if let Ok(port_str) = env::var(format!("{}SERVER_PORT", self.env_prefix)) {
            config.server.port = port_str
                .parse()
                .map_err(|_| BeaconError::config("Invalid port number in environment variable"))?;
        }
        if let Ok(key) = env::var(format!("{}CLIENT_KEY", self.env_prefix)) {
            config.client.key = key;
        }
        if let Ok(level) = env::var(format!("{}LOG_LEVEL", self.env_prefix)) {
            config.logging.level = level;
        }
        Ok(())
    }

    pub fn validate_config(&self, config: &BeaconConfig) -> BeaconResult<()> {
        if config.server.host.is_empty() {
            return Err(BeaconError::config("Server host cannot be empty"));
        }
        if config.server.port == 0 {
            return Err(BeaconError::config("Server port must be greater than 0"));
        }
        match config.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => {}
            _ => {
                return Err(BeaconError::config(
                    "Invalid log level. Must be one of: trace, debug, info, warn, error, off",
                ))
            }
        }
        if !config.client.key.is_empty() {
            config.client_key()?;
        }
        Ok(())
    }

    pub fn save_config(&self, config: &BeaconConfig, path: &Path) -> BeaconResult<()> {
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(config)
                .map_err(|e| BeaconError::config(format!("Failed to serialize config to JSON: {}", e)))?,
            Some("toml") => toml::to_string_pretty(config)
                .map_err(|e| BeaconError::config(format!("Failed to serialize config to TOML: {}", e)))?,
            _ => return Err(BeaconError::config("Unsupported config file format for saving")),
        };
        fs::write(path, content)
            .map_err(|e| BeaconError::config(format!("Failed to write config file: {}", e)))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
