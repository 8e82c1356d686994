use bytes::{Buf, BufMut, Bytes, BytesMut};
use packed_struct::prelude::*;
use packed_struct::PackedStructSlice;

/*
    Commands:

    0x65 = authenticate        -> 0x3e9
    0x6a = device command      -> 0x3ee
        sub-command 0x02 = send data
        sub-command 0x03 = enter learning
        sub-command 0x04 = check learned data

    Device error codes (signed, little-endian at header 0x22):
        -1 = authentication failed
        -4 = command not supported
        -5 = no data / storage error
        -7 = not authorized (stale session)
*/

pub const ERROR_AUTHENTICATION: i16 = -1;
pub const ERROR_UNSUPPORTED: i16 = -4;
pub const ERROR_NO_DATA: i16 = -5;
pub const ERROR_NOT_AUTHORIZED: i16 = -7;

/// Responses carry the request's command id plus this offset.
const RESPONSE_OFFSET: u16 = 0x384;

pub const fn response_id(request: u16) -> u16 {
    request + RESPONSE_OFFSET
}


pub trait Command {
    const ID: u16;

    /// Plaintext payload (before padding and encryption).
    fn payload(&self) -> Result<Bytes, PackingError>;
}


/// Command `0x65` -- Authenticate (request).
///
/// Always encrypted with the well-known initial key. The device answers with an
/// [AuthResponse] carrying the session key for every later command.
#[derive(PackedStruct, Clone, Debug, PartialEq)]
#[packed_struct(bit_numbering="msb0")]
pub struct AuthRequest {
    #[packed_field(bytes="0..=3")]
    _reserved0: [u8; 4],

    /// Client identifier, conventionally all `0x31`
    #[packed_field(bytes="4..=19")]
    pub client_id: [u8; 16],

    #[packed_field(bytes="20..=29")]
    _reserved1: [u8; 10],

    #[packed_field(bytes="30")]
    pub unknown_byte30: u8,

    #[packed_field(bytes="31..=44")]
    _reserved2: [u8; 14],

    #[packed_field(bytes="45")]
    pub unknown_byte45: u8,

    #[packed_field(bytes="46..=47")]
    _reserved3: [u8; 2],

    /// Client name, shown nowhere
    #[packed_field(bytes="48..=53")]
    pub client_name: [u8; 6],

    #[packed_field(bytes="54..=79")]
    _reserved4: [u8; 26],
}

impl Default for AuthRequest {
    fn default() -> Self {
        Self {
            _reserved0: [0x00; 4],
            client_id: [0x31; 16],
            _reserved1: [0x00; 10],
            unknown_byte30: 0x01,
            _reserved2: [0x00; 14],
            unknown_byte45: 0x01,
            _reserved3: [0x00; 2],
            client_name: *b"Test 1",
            _reserved4: [0x00; 26],
        }
    }
}

impl Command for AuthRequest {
    const ID: u16 = 0x65;

    fn payload(&self) -> Result<Bytes, PackingError> {
        Ok(Bytes::copy_from_slice(&self.pack()?))
    }
}


/// Response to [AuthRequest].
#[derive(PackedStruct, Clone, Debug, PartialEq)]
#[packed_struct(bit_numbering="msb0")]
pub struct AuthResponse {
    #[packed_field(bytes="0..=3", endian="lsb")]
    pub device_id: u32,

    #[packed_field(bytes="4..=19")]
    pub key: [u8; 16],
}

impl AuthResponse {
    const SIZE: usize = 20;

    /// Read from a (padded) response payload.
    pub fn parse(payload: &[u8]) -> Result<Self, PackingError> {
        Self::unpack_from_slice(payload.get(..Self::SIZE).unwrap_or(payload))
    }
}


/// Command `0x6a` -- everything after authentication.
///
/// The payload starts with a little-endian `u32` sub-command.
#[derive(Clone, Debug, PartialEq)]
pub enum DeviceRequest {
    /// Emit a waveform
    SendData(Bytes),
    /// Start capturing the next waveform the receiver sees
    EnterLearning,
    /// Fetch a captured waveform
    CheckData,
}

impl DeviceRequest {
    const SEND_DATA: u32 = 0x02;
    const ENTER_LEARNING: u32 = 0x03;
    const CHECK_DATA: u32 = 0x04;

    fn sub_command(&self) -> u32 {
        match self {
            DeviceRequest::SendData(_) => Self::SEND_DATA,
            DeviceRequest::EnterLearning => Self::ENTER_LEARNING,
            DeviceRequest::CheckData => Self::CHECK_DATA,
        }
    }

    pub fn parse(mut payload: &[u8]) -> Option<Self> {
        if payload.len() < 4 {
            return None;
        }

        match payload.get_u32_le() {
            Self::SEND_DATA => Some(DeviceRequest::SendData(Bytes::copy_from_slice(payload))),
            Self::ENTER_LEARNING => Some(DeviceRequest::EnterLearning),
            Self::CHECK_DATA => Some(DeviceRequest::CheckData),
            _ => None
        }
    }

    /// Captured waveform in a [DeviceRequest::CheckData] response payload.
    pub fn learned_data(payload: &[u8]) -> Option<&[u8]> {
        payload.get(4..).filter(|data| !data.is_empty())
    }

    /// Response payload for a [DeviceRequest::CheckData] request.
    pub fn learned_response(data: &[u8]) -> Bytes {
        let mut payload = BytesMut::with_capacity(4 + data.len());
        payload.put_u32_le(Self::CHECK_DATA);
        payload.put(data);
        payload.freeze()
    }
}

impl Command for DeviceRequest {
    const ID: u16 = 0x6a;

    fn payload(&self) -> Result<Bytes, PackingError> {
        let data: &[u8] = match self {
            DeviceRequest::SendData(data) => &data[..],
            _ => &[],
        };

        let mut payload = BytesMut::with_capacity(4 + data.len());
        payload.put_u32_le(self.sub_command());
        payload.put(data);

        Ok(payload.freeze())
    }
}
