use beacon_rust::beacon_common_rs::clients::beacon_client::BeaconClient;
use beacon_rust::beacon_common_rs::packet::types::FixReport;
use beacon_rust::beacon_common_rs::utils::auth::{format_client_key, parse_client_key};
use beacon_rust::beacon_common_rs::utils::config_loader::ConfigLoader;
use beacon_rust::beacon_common_rs::utils::log_config::init_logging;
use clap::Parser;
use log::info;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "beacon-fix")]
#[command(about = "Beacon Fix Client - GPS 測位結果を1件送信")]
#[command(version = "0.1.0")]
struct Cli {
    /// 設定ファイル (TOML / JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// サーバーホスト
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// サーバーポート
    #[arg(short, long)]
    port: Option<u16>,

    /// クライアントキー (16進)
    #[arg(short, long)]
    key: Option<String>,

    /// 進行方向 (度, 0-359)
    #[arg(long)]
    direction: Option<u16>,

    /// 速度 (m/16s)
    #[arg(long)]
    speed: Option<u16>,

    /// 高度 (m)
    #[arg(long, allow_negative_numbers = true)]
    altitude: Option<i16>,

    /// デバッグモード
    #[arg(short, long)]
    debug: bool,

    /// 緯度
    #[arg(allow_negative_numbers = true)]
    latitude: f64,

    /// 経度
    #[arg(allow_negative_numbers = true)]
    longitude: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::from_file(path.clone()),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load()?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.debug {
        config.logging.level = "debug".into();
    }
    init_logging(&config.logging.level, config.logging.timestamps)?;

    let key = match &cli.key {
        Some(key) => parse_client_key(key)?,
        None => config.client_key()?,
    };

    let mut report = FixReport::new(cli.latitude, cli.longitude);
    report.direction = cli.direction;
    report.speed = cli.speed;
    report.altitude = cli.altitude;

    let mut client = BeaconClient::connect(&config.server.host, config.server.port, key)?;
    let result = client.send_fix_report(&report);
    client.close();
    result?;

    info!(
        "Fix ({:.6}, {:.6}) sent to {} with key {}",
        cli.latitude,
        cli.longitude,
        client.destination(),
        format_client_key(key)
    );
    Ok(())
}
