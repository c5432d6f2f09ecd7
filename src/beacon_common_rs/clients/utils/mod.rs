/// クライアント用ユーティリティ

pub mod ping_id_generator;
pub mod replay;

pub use ping_id_generator::PingIdGenerator;
pub use replay::{load_track, parse_gpx_track, parse_track, replay_track, ReplaySummary, TrackPoint, DEFAULT_REPLAY_INTERVAL};
