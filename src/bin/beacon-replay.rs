use beacon_rust::beacon_common_rs::clients::async_beacon_client::AsyncBeaconClient;
use beacon_rust::beacon_common_rs::clients::utils::replay::{load_track, replay_track};
use beacon_rust::beacon_common_rs::utils::auth::parse_client_key;
use beacon_rust::beacon_common_rs::utils::config_loader::ConfigLoader;
use beacon_rust::beacon_common_rs::utils::log_config::init_logging;
use clap::Parser;
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "beacon-replay")]
#[command(about = "Beacon Replay - 記録済みトラックを Beacon サーバーへ再送信")]
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

    /// 送信間隔 (ms)
    #[arg(short, long, default_value = "200")]
    interval: u64,

    /// デバッグモード
    #[arg(short, long)]
    debug: bool,

    /// トラックファイル (.gpx または JSON 配列)
    track: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
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

    let points = load_track(&cli.track)?;
    info!("{} points loaded from {}", points.len(), cli.track.display());

    let mut client = AsyncBeaconClient::connect(&config.server.host, config.server.port, key).await?;
    let summary = replay_track(&client, &points, Duration::from_millis(cli.interval)).await;
    client.close();

    info!("Replay finished: {} sent, {} failed", summary.sent, summary.failed);
    Ok(())
}
