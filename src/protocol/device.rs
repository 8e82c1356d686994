use std::{net::SocketAddr, time::Duration};

use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use rand::Rng;
use tokio::{net::{lookup_host, UdpSocket}, time::{sleep, timeout, Instant}};
use tokio_util::udp::UdpFramed;
use tracing::{debug, info, instrument, trace};

use crate::ir::Waveform;
use crate::transmit::{DeviceSession, TransmitError};

use super::addresses::{MacAddress, DEFAULT_DEVICE_TYPE, DEFAULT_PORT};
use super::codec::{BroadlinkCodec, Packet, PacketError, INITIAL_KEY};
use super::commands::*;


pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const LEARN_POLL_INTERVAL: Duration = Duration::from_secs(1);


fn packet_error(err: PacketError) -> TransmitError {
    match err {
        PacketError::Io(err) => err.into(),
        other => TransmitError::InvalidPayload(other.to_string())
    }
}

fn check_error(packet: Packet) -> Result<Packet, TransmitError> {
    match packet.error {
        0 => Ok(packet),
        ERROR_AUTHENTICATION | ERROR_NOT_AUTHORIZED => Err(TransmitError::Authentication),
        code => Err(TransmitError::InvalidPayload(format!("device error {code}")))
    }
}


fn is_reply(packet: &Packet, request: u16, count: u16) -> bool {
    packet.command == response_id(request) && packet.count == count
}


/// Session with a Broadlink RM transceiver over UDP.
///
/// The socket is opened on first use. Each call is one request/response exchange bounded
/// by the configured timeout.
pub struct BroadlinkDevice {
    host: String,
    port: u16,
    mac: MacAddress,
    device_type: u16,
    timeout: Duration,

    count: u16,
    device_id: u32,
    key: [u8; 16],

    socket: Option<(UdpFramed<BroadlinkCodec>, SocketAddr)>
}

impl BroadlinkDevice {
    pub fn new(host: impl Into<String>, mac: MacAddress) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            mac,
            device_type: DEFAULT_DEVICE_TYPE,
            timeout: DEFAULT_TIMEOUT,
            count: rand::thread_rng().gen(),
            device_id: 0,
            key: INITIAL_KEY,
            socket: None
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_device_type(mut self, device_type: u16) -> Self {
        self.device_type = device_type;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn mac(&self) -> MacAddress {
        self.mac
    }

    pub fn is_authenticated(&self) -> bool {
        self.device_id != 0
    }

    async fn socket(&mut self) -> Result<&mut (UdpFramed<BroadlinkCodec>, SocketAddr), TransmitError> {
        if self.socket.is_none() {
            let addr = lookup_host((self.host.as_str(), self.port)).await?
                .next()
                .ok_or_else(|| TransmitError::Transport(format!("could not resolve {}", self.host)))?;

            let local: SocketAddr = if addr.is_ipv4() {
                ([0u8; 4], 0).into()
            } else {
                ([0u16; 8], 0).into()
            };

            let socket = UdpSocket::bind(local).await?;

            debug!(%addr, "opened socket");

            self.socket = Some((UdpFramed::new(socket, BroadlinkCodec::new()), addr));
        }

        self.socket.as_mut()
            .ok_or_else(|| TransmitError::Transport("socket unavailable".to_string()))
    }

    /// One request/response round trip. The response's error code is not checked.
    #[instrument(skip_all, fields(command = T::ID))]
    async fn exchange_raw<T: Command>(&mut self, cmd: &T) -> Result<Packet, TransmitError> {
        self.count = self.count.wrapping_add(1);

        let request = Packet::request(cmd, self.count, self.device_type, self.mac, self.device_id)
            .map_err(packet_error)?;

        let (key, wait, count) = (self.key, self.timeout, self.count);
        let (framed, addr) = self.socket().await?;
        let addr = *addr;

        framed.codec_mut().set_key(key);
        framed.send((request, addr)).await.map_err(packet_error)?;

        // late replies to earlier (timed out) requests are still queued on the socket
        let response = timeout(wait, async {
            loop {
                match framed.next().await {
                    Some(Ok((packet, from))) if from == addr && is_reply(&packet, T::ID, count) => return Ok(packet),
                    Some(Ok((packet, from))) if from == addr => {
                        trace!(command = packet.command, count = packet.count, "ignoring stale response")
                    },
                    Some(Ok((_, from))) => trace!(%from, "ignoring datagram from unexpected peer"),
                    Some(Err(err)) => return Err(packet_error(err)),
                    None => return Err(TransmitError::Transport("socket closed".to_string()))
                }
            }
        }).await.map_err(|_| TransmitError::Timeout)??;

        trace!(error = response.error, bytes = response.payload.len(), "response");

        Ok(response)
    }

    async fn exchange<T: Command>(&mut self, cmd: &T) -> Result<Packet, TransmitError> {
        check_error(self.exchange_raw(cmd).await?)
    }

    /// Put the transceiver into learning mode. It captures the next waveform it receives.
    pub async fn enter_learning(&mut self) -> Result<(), TransmitError> {
        self.exchange(&DeviceRequest::EnterLearning).await.map(|_| ())
    }

    /// Fetch the captured waveform, if there is one yet.
    pub async fn check_data(&mut self) -> Result<Option<Waveform>, TransmitError> {
        let response = self.exchange_raw(&DeviceRequest::CheckData).await?;

        if response.error == ERROR_NO_DATA {
            return Ok(None);
        }

        let response = check_error(response)?;

        Ok(DeviceRequest::learned_data(&response.payload)
            .and_then(|data| Waveform::new(Bytes::copy_from_slice(data)).ok()))
    }

    /// Enter learning mode and poll for a captured waveform until `wait` elapses.
    #[instrument(skip(self), fields(host = %self.host))]
    pub async fn learn(&mut self, wait: Duration) -> Result<Option<Waveform>, TransmitError> {
        self.enter_learning().await?;
        info!("learning, waiting for a button press");

        let deadline = Instant::now() + wait;

        while Instant::now() < deadline {
            if let Some(waveform) = self.check_data().await? {
                return Ok(Some(waveform));
            }

            sleep(LEARN_POLL_INTERVAL).await;
        }

        Ok(None)
    }
}

impl DeviceSession for BroadlinkDevice {
    #[instrument(skip(self), fields(host = %self.host, mac = %self.mac))]
    async fn authenticate(&mut self) -> Result<(), TransmitError> {
        self.device_id = 0;
        self.key = INITIAL_KEY;

        let response = self.exchange(&AuthRequest::default()).await?;

        let auth = AuthResponse::parse(&response.payload)
            .map_err(|err| TransmitError::InvalidPayload(format!("authentication response: {err:?}")))?;

        self.device_id = auth.device_id;
        self.key = auth.key;

        debug!(device_id = auth.device_id, "authenticated");

        Ok(())
    }

    async fn transmit(&mut self, waveform: &Waveform) -> Result<(), TransmitError> {
        self.exchange(&DeviceRequest::SendData(waveform.to_bytes())).await.map(|_| ())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_device_errors() {
        let mac = MacAddress([1, 2, 3, 4, 5, 6]);
        let request = Packet::request(&DeviceRequest::CheckData, 1, DEFAULT_DEVICE_TYPE, mac, 1).unwrap();

        assert!(check_error(request.response(0, Bytes::new())).is_ok());
        assert_eq!(check_error(request.response(-1, Bytes::new())), Err(TransmitError::Authentication));
        assert_eq!(check_error(request.response(-7, Bytes::new())), Err(TransmitError::Authentication));
        assert!(matches!(check_error(request.response(-5, Bytes::new())), Err(TransmitError::InvalidPayload(_))));
    }

    #[test]
    fn pairs_responses_with_requests() {
        let mac = MacAddress([1, 2, 3, 4, 5, 6]);
        let request = Packet::request(&DeviceRequest::CheckData, 9, DEFAULT_DEVICE_TYPE, mac, 1).unwrap();
        let response = request.response(0, Bytes::new());

        assert!(is_reply(&response, DeviceRequest::ID, 9));
        assert!(!is_reply(&response, DeviceRequest::ID, 8));
        assert!(!is_reply(&response, AuthRequest::ID, 9));
        assert!(!is_reply(&request, DeviceRequest::ID, 9));
    }

    #[tokio::test]
    async fn silent_device_times_out() {
        // bound but never answers
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = silent.local_addr().unwrap().port();

        let mut device = BroadlinkDevice::new("127.0.0.1", MacAddress::default())
            .with_port(port)
            .with_timeout(Duration::from_millis(50));

        assert_eq!(device.authenticate().await, Err(TransmitError::Timeout));
        assert!(!device.is_authenticated());
    }
}
