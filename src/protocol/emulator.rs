//! Emulator for a Broadlink RM transceiver.
//!
//! Answers authentication with a fresh session key, records every waveform it is asked to
//! send and supports the learning commands. Failures can be injected through an
//! [EmulatorHandle] to exercise retry paths without hardware.

use std::{collections::VecDeque, io, net::SocketAddr, sync::Arc, time::Duration};

use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use packed_struct::PackedStruct;
use rand::Rng;
use tokio::{net::{ToSocketAddrs, UdpSocket}, sync::Mutex, time::sleep};
use tokio_util::udp::UdpFramed;
use tracing::{debug, info, warn};

use super::addresses::MacAddress;
use super::codec::{BroadlinkCodec, Packet, PacketError};
use super::commands::*;


#[derive(Default)]
struct EmulatorState {
    device_id: u32,
    key: Option<[u8; 16]>,
    authentications: usize,
    sent: Vec<Bytes>,
    learning: bool,
    learned: Option<Bytes>,
    failures: VecDeque<i16>,
    delays: VecDeque<Duration>,
}


/// Shared view of a running emulator.
#[derive(Clone, Default)]
pub struct EmulatorHandle(Arc<Mutex<EmulatorState>>);

impl EmulatorHandle {
    /// Payloads of every send data command, as received (zero padded).
    pub async fn sent(&self) -> Vec<Bytes> {
        self.0.lock().await.sent.clone()
    }

    pub async fn authentications(&self) -> usize {
        self.0.lock().await.authentications
    }

    /// Answer the next device commands with these error codes, one each.
    pub async fn fail_next(&self, codes: impl IntoIterator<Item = i16>) {
        self.0.lock().await.failures.extend(codes);
    }

    /// Hold back the responses to the next device commands, one delay each.
    pub async fn delay_next(&self, delays: impl IntoIterator<Item = Duration>) {
        self.0.lock().await.delays.extend(delays);
    }

    /// Pretend a button press was captured.
    pub async fn set_learned(&self, data: Bytes) {
        self.0.lock().await.learned = Some(data);
    }

    /// Forget the session, as a power cycle would.
    pub async fn reset_session(&self) {
        let mut state = self.0.lock().await;
        state.key = None;
        state.device_id = 0;
    }
}


pub struct Emulator {
    framed: UdpFramed<BroadlinkCodec>,
    local_addr: SocketAddr,
    mac: MacAddress,
    state: EmulatorHandle
}

impl Emulator {
    pub async fn bind(addr: impl ToSocketAddrs, mac: MacAddress) -> io::Result<Self> {
        let socket = UdpSocket::bind(addr).await?;
        let local_addr = socket.local_addr()?;

        Ok(Self {
            framed: UdpFramed::new(socket, BroadlinkCodec::new()),
            local_addr,
            mac,
            state: EmulatorHandle::default()
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn handle(&self) -> EmulatorHandle {
        self.state.clone()
    }

    pub async fn run(mut self) -> Result<(), PacketError> {
        info!(addr = %self.local_addr, mac = %self.mac, "emulating RM transceiver");

        while let Some(item) = self.framed.next().await {
            let (request, from) = match item {
                Ok(item) => item,
                Err(PacketError::Io(err)) => return Err(err.into()),
                Err(err) => {
                    // undecodable datagrams get no answer, like the real thing
                    warn!(%err, "dropping datagram");
                    continue;
                }
            };

            debug!(%from, command = request.command, count = request.count, "request");

            let response = self.respond(&request).await;

            if request.command == DeviceRequest::ID {
                let delay = self.state.0.lock().await.delays.pop_front();

                if let Some(delay) = delay {
                    debug!(?delay, "delaying response");
                    sleep(delay).await;
                }
            }

            self.framed.send((response, from)).await?;
        }

        Ok(())
    }

    async fn respond(&mut self, request: &Packet) -> Packet {
        let mut state = self.state.0.lock().await;

        let (error, payload) = match request.command {
            AuthRequest::ID => {
                let key: [u8; 16] = rand::random();
                let device_id = rand::thread_rng().gen_range(1..=u32::MAX);

                match (AuthResponse { device_id, key }).pack() {
                    Ok(payload) => {
                        state.key = Some(key);
                        state.device_id = device_id;
                        state.authentications += 1;

                        // the response itself still goes out under the initial key
                        self.framed.codec_mut().set_key(key);

                        info!(device_id, "client authenticated");

                        (0, Bytes::copy_from_slice(&payload))
                    },
                    Err(err) => {
                        warn!(?err, "failed to pack authentication response");
                        (ERROR_AUTHENTICATION, Bytes::new())
                    }
                }
            },

            DeviceRequest::ID if state.key.is_none() || request.device_id != state.device_id => {
                (ERROR_NOT_AUTHORIZED, Bytes::new())
            },

            DeviceRequest::ID => {
                if let Some(code) = state.failures.pop_front() {
                    debug!(code, "injected failure");
                    return request.response(code, Bytes::new());
                }

                match DeviceRequest::parse(&request.payload) {
                    Some(DeviceRequest::SendData(data)) => {
                        info!(bytes = data.len(), "sending waveform");

                        if state.learning {
                            state.learning = false;
                            state.learned = Some(data.clone());
                        }

                        state.sent.push(data);
                        (0, Bytes::new())
                    },
                    Some(DeviceRequest::EnterLearning) => {
                        state.learning = true;
                        state.learned = None;
                        (0, Bytes::new())
                    },
                    Some(DeviceRequest::CheckData) => match &state.learned {
                        Some(data) => (0, DeviceRequest::learned_response(data)),
                        None => (ERROR_NO_DATA, Bytes::new())
                    },
                    None => (ERROR_UNSUPPORTED, Bytes::new())
                }
            },

            other => {
                debug!(command = other, "unsupported command");
                (ERROR_UNSUPPORTED, Bytes::new())
            }
        };

        request.response(error, payload)
    }
}
