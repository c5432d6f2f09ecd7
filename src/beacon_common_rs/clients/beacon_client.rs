use crate::beacon_common_rs::clients::utils::ping_id_generator::PingIdGenerator;
use crate::beacon_common_rs::packet::core::exceptions::{BeaconError, BeaconResult};
use crate::beacon_common_rs::packet::debug::PacketDebugLogger;
use crate::beacon_common_rs::packet::types::{
    build_fix_packet, build_nop_packet, build_ping_packet, FixReport,
};
use crate::beacon_common_rs::utils::network::{ephemeral_bind_addr, resolve_destination};
use log::debug;
use std::net::{SocketAddr, UdpSocket};

/// Beacon データグラムプロトコルのクライアント
///
/// 送信は1回の `send_to` のみで、再送や応答の待ち受けは行わない。
/// ソケットは `close` または drop 時に解放される
#[derive(Debug)]
pub struct BeaconClient {
    key: u64,
    destination: SocketAddr,
    socket: Option<UdpSocket>,
    ping_ids: PingIdGenerator,
}

impl BeaconClient {
    /// 送信先とクライアントキーを指定して作成する
    ///
    /// 送信先と同じアドレスファミリのエフェメラルポートにバインドする
    pub fn new(destination: SocketAddr, key: u64) -> BeaconResult<Self> {
        let socket = UdpSocket::bind(ephemeral_bind_addr(&destination))
            .map_err(BeaconError::SocketCreation)?;

        debug!(
            "Beacon client bound to {:?}, destination {}",
            socket.local_addr().ok(),
            destination
        );

        Ok(Self {
            key,
            destination,
            socket: Some(socket),
            ping_ids: PingIdGenerator::new(),
        })
    }

    /// ホスト名を解決してから作成する
    pub fn connect(host: &str, port: u16, key: u64) -> BeaconResult<Self> {
        let destination = resolve_destination(host, port)?;
        Self::new(destination, key)
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    pub fn destination(&self) -> SocketAddr {
        self.destination
    }

    pub fn local_addr(&self) -> BeaconResult<SocketAddr> {
        self.socket()?.local_addr().map_err(BeaconError::SocketCreation)
    }

    pub fn is_closed(&self) -> bool {
        self.socket.is_none()
    }

    /// ソケットを解放する。2回目以降の呼び出しは何もしない
    pub fn close(&mut self) {
        if self.socket.take().is_some() {
            debug!("Beacon client for {} closed", self.destination);
        }
    }

    /// 位置のみの Fix パケットを送信する
    pub fn send_fix(&self, latitude: f64, longitude: f64) -> BeaconResult<()> {
        self.send_packet(&build_fix_packet(self.key, latitude, longitude))
    }

    /// 方位・速度・高度付きの Fix パケットを送信する
    pub fn send_fix_report(&self, report: &FixReport) -> BeaconResult<()> {
        self.send_packet(&report.to_bytes(self.key))
    }

    /// Ping パケットを送信し、使用した id を返す
    pub fn send_ping(&mut self) -> BeaconResult<u16> {
        let id = self.ping_ids.next_id();
        self.send_packet(&build_ping_packet(self.key, id))?;
        Ok(id)
    }

    pub fn send_nop(&self) -> BeaconResult<()> {
        self.send_packet(&build_nop_packet(self.key))
    }

    fn socket(&self) -> BeaconResult<&UdpSocket> {
        self.socket.as_ref().ok_or(BeaconError::Closed)
    }

    fn send_packet(&self, data: &[u8]) -> BeaconResult<()> {
        let socket = self.socket()?;
        PacketDebugLogger::log_request(data);

        let sent = socket
            .send_to(data, self.destination)
            .map_err(BeaconError::Transmission)?;
        debug!("Sent {} bytes to {}", sent, self.destination);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loopback() -> SocketAddr {
        "127.0.0.1:9".parse().unwrap()
    }

    #[test]
    fn test_new_binds_ephemeral_port() {
        let client = BeaconClient::new(loopback(), 0x42).unwrap();
        let local = client.local_addr().unwrap();

        assert!(local.is_ipv4());
        assert_ne!(local.port(), 0);
        assert_eq!(client.key(), 0x42);
        assert_eq!(client.destination(), loopback());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut client = BeaconClient::new(loopback(), 1).unwrap();
        client.close();
        client.close();

        assert!(client.is_closed());
        assert!(matches!(client.send_fix(1.0, 2.0), Err(BeaconError::Closed)));
        assert!(matches!(client.local_addr(), Err(BeaconError::Closed)));
    }

    #[test]
    fn test_ping_ids_advance() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        let mut client = BeaconClient::new(receiver.local_addr().unwrap(), 1).unwrap();

        assert_eq!(client.send_ping().unwrap(), 1);
        assert_eq!(client.send_ping().unwrap(), 2);
    }
}
