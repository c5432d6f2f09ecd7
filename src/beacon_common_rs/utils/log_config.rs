use chrono::{DateTime, Local};
use log::{Level, LevelFilter};
use std::io::Write;
use std::str::FromStr;

/// `[timestamp] [LEVEL] [module] message` 形式の1行を作る
pub fn format_log_line(timestamp: Option<DateTime<Local>>, level: Level, module: &str, message: &str) -> String {
    let mut parts = Vec::new();
    if let Some(ts) = timestamp {
        parts.push(format!("[{}]", ts.format("%Y-%m-%d %H:%M:%S%.3f")));
    }
    parts.push(format!("[{}]", level));
    parts.push(format!("[{}]", module));
    parts.push(message.to_string());
    parts.join(" ")
}

/// ログレベル文字列を解析する
pub fn parse_level(level: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(level).map_err(|_| format!("Invalid log level: {}", level))
}

/// env_logger を初期化する
///
/// `RUST_LOG` が設定されていればそちらを優先する。
/// 既にロガーが設定済みの場合はエラーを返す
pub fn init_logging(level: &str, timestamps: bool) -> Result<(), String> {
    let filter = parse_level(level)?;
    let mut builder = env_logger::Builder::new();
    builder.filter_level(filter);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.format(move |buf, record| {
        let ts = if timestamps { Some(Local::now()) } else { None };
        writeln!(
            buf,
            "{}",
            format_log_line(ts, record.level(), record.module_path().unwrap_or("beacon"), &record.args().to_string())
        )
    });
    builder
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_with_timestamp() {
        let ts = Local.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap();
        let line = format_log_line(Some(ts), Level::Info, "beacon_fix", "sent");
        assert_eq!(line, "[2024-05-01 12:30:45.000] [INFO] [beacon_fix] sent");
    }

    #[test]
    fn test_format_without_timestamp() {
        let line = format_log_line(None, Level::Warn, "replay", "failed");
        assert_eq!(line, "[WARN] [replay] failed");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("WARN").unwrap(), LevelFilter::Warn);
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn test_second_init_is_reported() {
        let _ = init_logging("info", false);
        let err = init_logging("info", false).unwrap_err();
        assert!(err.starts_with("Failed to install logger"));
    }
}
