use crate::beacon_common_rs::clients::utils::ping_id_generator::PingIdGenerator;
use crate::beacon_common_rs::clients::FixSender;
use crate::beacon_common_rs::packet::core::exceptions::{BeaconError, BeaconResult};
use crate::beacon_common_rs::packet::debug::PacketDebugLogger;
use crate::beacon_common_rs::packet::types::{
    build_fix_packet, build_nop_packet, build_ping_packet, FixReport,
};
use crate::beacon_common_rs::utils::network::{ephemeral_bind_addr, resolve_destination};
use async_trait::async_trait;
use log::debug;
use std::net::SocketAddr;
use tokio::net::UdpSocket;

/// tokio 版の Beacon クライアント
///
/// `BeaconClient` と同じく送りっぱなしで、応答は読まない
#[derive(Debug)]
pub struct AsyncBeaconClient {
    key: u64,
    destination: SocketAddr,
    socket: Option<UdpSocket>,
    ping_ids: PingIdGenerator,
}

impl AsyncBeaconClient {
    pub async fn new(destination: SocketAddr, key: u64) -> BeaconResult<Self> {
        let socket = UdpSocket::bind(ephemeral_bind_addr(&destination))
            .await
            .map_err(BeaconError::SocketCreation)?;

        debug!(
            "Async beacon client bound to {:?}, destination {}",
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

    pub async fn connect(host: &str, port: u16, key: u64) -> BeaconResult<Self> {
        let destination = resolve_destination(host, port)?;
        Self::new(destination, key).await
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
            debug!("Async beacon client for {} closed", self.destination);
        }
    }

    pub async fn send_fix(&self, latitude: f64, longitude: f64) -> BeaconResult<()> {
        self.send_packet(&build_fix_packet(self.key, latitude, longitude))
            .await
    }

    pub async fn send_fix_report(&self, report: &FixReport) -> BeaconResult<()> {
        self.send_packet(&report.to_bytes(self.key)).await
    }

    pub async fn send_ping(&mut self) -> BeaconResult<u16> {
        let id = self.ping_ids.next_id();
        self.send_packet(&build_ping_packet(self.key, id)).await?;
        Ok(id)
    }

    pub async fn send_nop(&self) -> BeaconResult<()> {
        self.send_packet(&build_nop_packet(self.key)).await
    }

    fn socket(&self) -> BeaconResult<&UdpSocket> {
        self.socket.as_ref().ok_or(BeaconError::Closed)
    }

    async fn send_packet(&self, data: &[u8]) -> BeaconResult<()> {
        let socket = self.socket()?;
        PacketDebugLogger::log_request(data);

        let sent = socket
            .send_to(data, self.destination)
            .await
            .map_err(BeaconError::Transmission)?;
        debug!("Sent {} bytes to {}", sent, self.destination);
        Ok(())
    }
}

#[async_trait]
impl FixSender for AsyncBeaconClient {
    async fn send_fix(&self, latitude: f64, longitude: f64) -> BeaconResult<()> {
        AsyncBeaconClient::send_fix(self, latitude, longitude).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beacon_common_rs::packet::core::checksum::verify_packet_checksum;

    #[tokio::test]
    async fn test_send_fix_reaches_receiver() {
        let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let client = AsyncBeaconClient::new(receiver.local_addr().unwrap(), 7)
            .await
            .unwrap();

        FixSender::send_fix(&client, 35.681236, 139.767125).await.unwrap();

        let mut buf = [0u8; 64];
        let (size, from) = receiver.recv_from(&mut buf).await.unwrap();
        assert_eq!(size, 32);
        assert_eq!(from.port(), client.local_addr().unwrap().port());
        assert_eq!(&buf[..size], &build_fix_packet(7, 35.681236, 139.767125));
        assert!(verify_packet_checksum(&buf[..size]));
    }

    #[tokio::test]
    async fn test_ping_and_nop_sizes() {
        let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let mut client = AsyncBeaconClient::new(receiver.local_addr().unwrap(), 7)
            .await
            .unwrap();
        let mut buf = [0u8; 64];

        let id = client.send_ping().await.unwrap();
        let (size, _) = receiver.recv_from(&mut buf).await.unwrap();
        assert_eq!(size, 24);
        assert_eq!(&buf[16..18], &id.to_be_bytes());

        client.send_nop().await.unwrap();
        let (size, _) = receiver.recv_from(&mut buf).await.unwrap();
        assert_eq!(size, 16);
    }

    #[tokio::test]
    async fn test_rejected_send_is_a_transmission_error() {
        // SO_BROADCAST 無しのブロードキャスト宛ては EACCES になる
        let client = AsyncBeaconClient::new("255.255.255.255:5598".parse().unwrap(), 1)
            .await
            .unwrap();

        let result = FixSender::send_fix(&client, 1.0, 2.0).await;
        assert!(matches!(result, Err(BeaconError::Transmission(_))));
    }

    #[tokio::test]
    async fn test_send_after_close() {
        let mut client = AsyncBeaconClient::new("127.0.0.1:9".parse().unwrap(), 1)
            .await
            .unwrap();
        client.close();
        client.close();

        let result = client.send_fix(0.0, 0.0).await;
        assert!(matches!(result, Err(BeaconError::Closed)));
    }
}
