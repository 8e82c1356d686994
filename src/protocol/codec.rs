use std::io;

use aes::cipher::{block_padding::NoPadding, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use bytes::{BufMut, Bytes, BytesMut};
use packed_struct::prelude::*;
use packed_struct::PackedStructSlice;
use thiserror::Error;
use tokio_util::codec::{Decoder, Encoder};

use super::addresses::MacAddress;
use super::commands::{response_id, AuthRequest, Command};


const MAGIC: [u8; 8] = [0x5a, 0xa5, 0xaa, 0x55, 0x5a, 0xa5, 0xaa, 0x55];

/// Key every device accepts for authentication.
pub const INITIAL_KEY: [u8; 16] = [
    0x09, 0x76, 0x28, 0x34, 0x3f, 0xe9, 0x9e, 0x23, 0x76, 0x5c, 0x15, 0x13, 0xac, 0xcf, 0x8b, 0x02
];

const IV: [u8; 16] = [
    0x56, 0x2e, 0x17, 0x99, 0x6d, 0x09, 0x3d, 0x28, 0xdd, 0xb3, 0xba, 0x69, 0x5a, 0x2e, 0x6f, 0x58
];

const CHECKSUM_SEED: u16 = 0xbeaf;
const CHECKSUM_OFFSET: usize = 0x20;
const BLOCK_SIZE: usize = 16;

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;


/// Fixed 0x38 byte header in front of every datagram. All integers little-endian.
#[derive(PackedStruct, Clone, Debug, PartialEq)]
#[packed_struct(bit_numbering="msb0")]
pub struct PacketHeader {
    #[packed_field(bytes="0..=7")]
    magic: [u8; 8],

    #[packed_field(bytes="8..=31")]
    _reserved0: [u8; 24],

    /// Checksum of the whole datagram (with this field zeroed)
    #[packed_field(bytes="32..=33", endian="lsb")]
    pub checksum: u16,

    /// Device error code, responses only
    #[packed_field(bytes="34..=35", endian="lsb")]
    pub error: i16,

    #[packed_field(bytes="36..=37", endian="lsb")]
    pub device_type: u16,

    #[packed_field(bytes="38..=39", endian="lsb")]
    pub command: u16,

    #[packed_field(bytes="40..=41", endian="lsb")]
    pub count: u16,

    /// MAC address, reversed
    #[packed_field(bytes="42..=47")]
    pub mac: [u8; 6],

    #[packed_field(bytes="48..=51", endian="lsb")]
    pub device_id: u32,

    /// Checksum of the plaintext (padded) payload
    #[packed_field(bytes="52..=53", endian="lsb")]
    pub payload_checksum: u16,

    #[packed_field(bytes="54..=55")]
    _reserved1: [u8; 2],
}

impl PacketHeader {
    pub const SIZE: usize = 0x38;
}


/// A decrypted request or response.
#[derive(Clone, Debug, PartialEq)]
pub struct Packet {
    pub command: u16,
    pub count: u16,
    pub device_type: u16,
    pub mac: MacAddress,
    pub device_id: u32,
    pub error: i16,
    pub payload: Bytes
}

impl Packet {
    /// A request for `cmd` with no session assigned yet.
    pub fn request<T: Command>(cmd: &T, count: u16, device_type: u16, mac: MacAddress, device_id: u32) -> Result<Self, PacketError> {
        Ok(Self {
            command: T::ID,
            count,
            device_type,
            mac,
            device_id,
            error: 0,
            payload: cmd.payload()?
        })
    }

    /// The response to `self`, as a device would send it.
    pub fn response(&self, error: i16, payload: Bytes) -> Self {
        Self {
            command: response_id(self.command),
            error,
            payload,
            ..self.clone()
        }
    }
}


trait Checksum {
    fn checksum(&mut self) -> u16;
}

impl <'a>Checksum for std::slice::Iter<'a, u8> {
    fn checksum(&mut self) -> u16 {
        self.fold(CHECKSUM_SEED, |acc, byte| acc.wrapping_add(*byte as u16))
    }
}


#[derive(Error, Debug)]
pub enum PacketError {
    #[error("datagram too short ({0} bytes)")]
    TooShort(usize),
    #[error("packet magic not found")]
    BadMagic,
    #[error("invalid checksum (expected {expected:x}, actual: {actual:x})")]
    InvalidChecksum {
        expected: u16,
        actual: u16
    },
    #[error("invalid payload checksum (expected {expected:x}, actual: {actual:x})")]
    InvalidPayloadChecksum {
        expected: u16,
        actual: u16
    },
    #[error("encrypted payload of {0} bytes is not a whole number of blocks")]
    Decrypt(usize),
    #[error("packing error: {0:?}")]
    Packing(PackingError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<PackingError> for PacketError {
    fn from(err: PackingError) -> Self {
        PacketError::Packing(err)
    }
}


/// Datagram codec for the Broadlink RM protocol.
///
/// Holds the session key. Authentication packets (in both directions) always use
/// [INITIAL_KEY]; everything else uses the session key.
pub struct BroadlinkCodec {
    key: [u8; 16]
}

impl BroadlinkCodec {
    pub fn new() -> Self {
        Self { key: INITIAL_KEY }
    }

    pub fn key(&self) -> &[u8; 16] {
        &self.key
    }

    pub fn set_key(&mut self, key: [u8; 16]) {
        self.key = key;
    }

    fn key_for(&self, command: u16) -> &[u8; 16] {
        if command == AuthRequest::ID || command == response_id(AuthRequest::ID) {
            &INITIAL_KEY
        } else {
            &self.key
        }
    }
}

impl Default for BroadlinkCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for BroadlinkCodec {
    type Item = Packet;

    type Error = PacketError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }

        // one datagram per call -- always consume all of it, so a bad datagram is dropped
        let mut datagram = src.split_to(src.len());

        if datagram.len() < PacketHeader::SIZE {
            return Err(PacketError::TooShort(datagram.len()));
        }

        let header = PacketHeader::unpack_from_slice(&datagram[..PacketHeader::SIZE])?;

        if header.magic != MAGIC {
            return Err(PacketError::BadMagic);
        }

        datagram[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 2].fill(0);
        let expected = datagram.iter().checksum();
        if expected != header.checksum {
            return Err(PacketError::InvalidChecksum { expected, actual: header.checksum });
        }

        let encrypted = &datagram[PacketHeader::SIZE..];

        let payload = if encrypted.is_empty() {
            Vec::new()
        } else {
            let key = self.key_for(header.command);

            match Aes128CbcDec::new(key.into(), &IV.into()).decrypt_padded_vec_mut::<NoPadding>(encrypted) {
                Ok(payload) => payload,
                // error responses are not always encrypted properly, the code is all that matters
                Err(_) if header.error != 0 => Vec::new(),
                Err(_) => return Err(PacketError::Decrypt(encrypted.len()))
            }
        };

        if header.error == 0 {
            let expected = payload.iter().checksum();
            if expected != header.payload_checksum {
                return Err(PacketError::InvalidPayloadChecksum { expected, actual: header.payload_checksum });
            }
        }

        Ok(Some(Packet {
            command: header.command,
            count: header.count,
            device_type: header.device_type,
            mac: MacAddress::from_wire(header.mac),
            device_id: header.device_id,
            error: header.error,
            payload: payload.into()
        }))
    }
}

impl Encoder<Packet> for BroadlinkCodec {
    type Error = PacketError;

    fn encode(&mut self, packet: Packet, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let mut payload = packet.payload.to_vec();
        payload.resize(payload.len().div_ceil(BLOCK_SIZE) * BLOCK_SIZE, 0x00);

        let header = PacketHeader {
            magic: MAGIC,
            _reserved0: [0x00; 24],
            checksum: 0,
            error: packet.error,
            device_type: packet.device_type,
            command: packet.command,
            count: packet.count,
            mac: packet.mac.to_wire(),
            device_id: packet.device_id,
            payload_checksum: payload.iter().checksum(),
            _reserved1: [0x00; 2],
        };

        let key = self.key_for(packet.command);
        let encrypted = Aes128CbcEnc::new(key.into(), &IV.into()).encrypt_padded_vec_mut::<NoPadding>(&payload);

        let start = dst.len();
        dst.reserve(PacketHeader::SIZE + encrypted.len());

        dst.put(&header.pack()?[..]);
        dst.put(&encrypted[..]);

        let checksum = dst[start..].iter().checksum();
        dst[start + CHECKSUM_OFFSET..start + CHECKSUM_OFFSET + 2].copy_from_slice(&checksum.to_le_bytes());

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use tokio_util::codec::FramedRead;

    use crate::protocol::commands::DeviceRequest;

    use super::*;

    fn hex(s: &str) -> Vec<u8> {
        (0..s.len()).step_by(2).map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap()).collect()
    }

    const MAC: MacAddress = MacAddress([0x34, 0xea, 0x34, 0x12, 0xab, 0x0f]);

    /// Authentication request as sent by the reference client library (count 0x1234).
    const AUTH_PACKET: &str = concat!(
        "5aa5aa555aa5aa55000000000000000000000000000000000000000000000000",
        "e1ee00001227650034120fab1234ea3400000000b2c30000",
        "453452e7f92eda958344930835ef9a6d93b0b6da60530408ebba79410b080296",
        "f9f7cd7779b46f2513e2c5bbd4450e907fa1ba8fc5e0169776e2620824fff3f8",
        "5f6f64f7120b1f724ff1b048b76e3e30",
    );

    #[test]
    fn encodes_auth_request() {
        let packet = Packet::request(&AuthRequest::default(), 0x1234, 0x2712, MAC, 0).unwrap();

        let mut buf = BytesMut::new();
        BroadlinkCodec::new().encode(packet, &mut buf).unwrap();

        assert_eq!(&buf[..], &hex(AUTH_PACKET)[..]);
    }

    #[test]
    fn decodes_auth_request() {
        let mut buf = BytesMut::from(&hex(AUTH_PACKET)[..]);

        // a codec holding some other session key still reads authentication packets
        let mut codec = BroadlinkCodec::new();
        codec.set_key([0xaa; 16]);

        let packet = codec.decode(&mut buf).unwrap().unwrap();
        assert!(buf.is_empty());

        assert_eq!(packet.command, AuthRequest::ID);
        assert_eq!(packet.count, 0x1234);
        assert_eq!(packet.device_type, 0x2712);
        assert_eq!(packet.mac, MAC);
        assert_eq!(packet.device_id, 0);
        assert_eq!(packet.payload, AuthRequest::default().payload().unwrap());
    }

    #[test]
    fn session_key_applies_to_commands() {
        let key = [0x42; 16];
        let request = DeviceRequest::SendData(Bytes::from_static(&[0x26, 0x00, 0x02, 0x00, 0x11, 0x22]));
        let packet = Packet::request(&request, 7, 0x2712, MAC, 0xdeadbeef).unwrap();

        let mut sender = BroadlinkCodec::new();
        sender.set_key(key);

        let mut buf = BytesMut::new();
        sender.encode(packet.clone(), &mut buf).unwrap();
        assert_eq!(buf.len(), PacketHeader::SIZE + 16);

        // wrong key: garbage plaintext, caught by the payload checksum
        let mut stale = BroadlinkCodec::new();
        assert!(matches!(
            stale.decode(&mut buf.clone()),
            Err(PacketError::InvalidPayloadChecksum { .. })
        ));

        let mut receiver = BroadlinkCodec::new();
        receiver.set_key(key);
        let decoded = receiver.decode(&mut buf).unwrap().unwrap();

        assert_eq!(decoded.device_id, 0xdeadbeef);
        // payload comes back zero padded to the block size
        assert_eq!(&decoded.payload[..10], &packet.payload[..]);
        assert!(decoded.payload[10..].iter().all(|b| *b == 0));
        assert_eq!(DeviceRequest::parse(&decoded.payload), Some(DeviceRequest::SendData(
            Bytes::from_static(&[0x26, 0x00, 0x02, 0x00, 0x11, 0x22, 0, 0, 0, 0, 0, 0])
        )));
    }

    #[test]
    fn rejects_corrupted_datagrams() {
        let mut codec = BroadlinkCodec::new();

        let mut corrupted = hex(AUTH_PACKET);
        corrupted[0x40] ^= 0x01;
        assert!(matches!(
            codec.decode(&mut BytesMut::from(&corrupted[..])),
            Err(PacketError::InvalidChecksum { actual: 0xeee1, .. })
        ));

        let mut bad_magic = hex(AUTH_PACKET);
        bad_magic[0] = 0x00;
        assert!(matches!(codec.decode(&mut BytesMut::from(&bad_magic[..])), Err(PacketError::BadMagic)));

        assert!(matches!(codec.decode(&mut BytesMut::from(&[0x5a; 12][..])), Err(PacketError::TooShort(12))));
    }

    #[test]
    fn error_response_keeps_code() {
        let request = Packet::request(&DeviceRequest::CheckData, 1, 0x2712, MAC, 1).unwrap();
        let response = request.response(-5, Bytes::new());

        let mut codec = BroadlinkCodec::new();
        let mut buf = BytesMut::new();
        codec.encode(response, &mut buf).unwrap();

        let decoded = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(decoded.command, 0x3ee);
        assert_eq!(decoded.error, -5);
        assert!(decoded.payload.is_empty());
    }

    #[tokio::test]
    async fn framed_read_yields_one_packet_per_datagram() {
        let datagram = hex(AUTH_PACKET);

        let mut fr = FramedRead::new(&datagram[..], BroadlinkCodec::new());
        let packet = fr.next().await.unwrap().unwrap();
        assert_eq!(packet.command, AuthRequest::ID);
        assert!(fr.next().await.is_none());
    }
}
