use crate::beacon_common_rs::packet::core::exceptions::{BeaconError, BeaconResult};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs};

/// ホスト名とポートから送信先アドレスを解決する（最初の候補を使う）
pub fn resolve_destination(host: &str, port: u16) -> BeaconResult<SocketAddr> {
    (host, port)
        .to_socket_addrs()
        .map_err(|e| BeaconError::Resolve(format!("{}:{}: {}", host, port, e)))?
        .next()
        .ok_or_else(|| BeaconError::Resolve(format!("{}:{}: アドレスが見つかりません", host, port)))
}

/// 送信先と同じアドレスファミリのエフェメラルポートを返す
pub fn ephemeral_bind_addr(destination: &SocketAddr) -> SocketAddr {
    if destination.is_ipv4() {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
    } else {
        SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
    }
}
