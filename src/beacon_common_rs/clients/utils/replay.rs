/// 記録済みトラックの再送信（デバッグ用）
///
/// トラックファイルは GPX (拡張子 `.gpx`) か
/// `{"latitude": .., "longitude": ..}` の JSON 配列

use crate::beacon_common_rs::clients::FixSender;
use crate::beacon_common_rs::packet::core::exceptions::{BeaconError, BeaconResult};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// 既定の送信間隔
pub const DEFAULT_REPLAY_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub sent: usize,
    pub failed: usize,
}

pub fn parse_track(content: &str) -> BeaconResult<Vec<TrackPoint>> {
    serde_json::from_str(content).map_err(|e| BeaconError::Track(format!("JSON の解析に失敗: {}", e)))
}

/// GPX 文書から点を取り出す
///
/// トラック(セグメント順) -> ルート -> ウェイポイント の順に、文書内の並びのまま並べる
pub fn parse_gpx_track(content: &str) -> BeaconResult<Vec<TrackPoint>> {
    let gpx = gpx::read(content.as_bytes())
        .map_err(|e| BeaconError::Track(format!("GPX の解析に失敗: {}", e)))?;

    let track_points = gpx.tracks.iter().flat_map(|t| t.segments.iter()).flat_map(|s| s.points.iter());
    let route_points = gpx.routes.iter().flat_map(|r| r.points.iter());

    Ok(track_points
        .chain(route_points)
        .chain(gpx.waypoints.iter())
        .map(|wp| {
            let point = wp.point();
            TrackPoint { latitude: point.y(), longitude: point.x() }
        })
        .collect())
}

/// 拡張子が `gpx` なら GPX、それ以外は JSON として読む
pub fn load_track<P: AsRef<Path>>(path: P) -> BeaconResult<Vec<TrackPoint>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| BeaconError::Track(format!("{}: {}", path.display(), e)))?;
    let is_gpx = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("gpx"));
    if is_gpx {
        parse_gpx_track(&content)
    } else {
        parse_track(&content)
    }
}

/// トラックの各点を順番に送信する
///
/// 送信失敗はログに残して数えるだけで、残りの点の送信は続ける。
/// 待ち時間は点と点の間にだけ入る
pub async fn replay_track<S>(sender: &S, points: &[TrackPoint], interval: Duration) -> ReplaySummary
where
    S: FixSender + Sync + ?Sized,
{
    let mut summary = ReplaySummary::default();

    for (i, point) in points.iter().enumerate() {
        if i > 0 && !interval.is_zero() {
            tokio::time::sleep(interval).await;
        }

        match sender.send_fix(point.latitude, point.longitude).await {
            Ok(()) => {
                summary.sent += 1;
                info!("#{} {:.6} {:.6}", i + 1, point.latitude, point.longitude);
            }
            Err(e) => {
                summary.failed += 1;
                warn!("#{} {:.6} {:.6} の送信に失敗: {}", i + 1, point.latitude, point.longitude, e);
            }
        }
    }

    summary
}
