use std::fmt::Debug;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use thiserror::Error;

/// Prefix expected by the Home Assistant `remote.send_command` service for base64 payloads.
pub const REMOTE_COMMAND_PREFIX: &str = "b64:";

/// Length of one pulse tick in nanoseconds (269/8192 ms).
const TICK_NS: u64 = 269_000_000 / 8192;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WaveformError {
    #[error("invalid base64: {0}")]
    Base64(String),
    #[error("empty waveform")]
    Empty,
    #[error("waveform truncated (declared {declared} bytes of pulse data, {available} available)")]
    Truncated {
        declared: usize,
        available: usize
    },
}


/// A pre-recorded remote control button press, in the transceiver's raw format.
#[derive(Clone, PartialEq, Eq)]
pub struct Waveform(Bytes);

impl Waveform {
    pub fn new(data: impl Into<Bytes>) -> Result<Self, WaveformError> {
        let data = data.into();

        if data.is_empty() {
            return Err(WaveformError::Empty);
        }

        Ok(Self(data))
    }

    /// Decode a waveform from its base64 transport encoding.
    pub fn from_base64(text: &str) -> Result<Self, WaveformError> {
        let data = STANDARD.decode(text.trim())
            .map_err(|err| WaveformError::Base64(err.to_string()))?;

        Self::new(data)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// The waveform as a `remote.send_command` command string (`b64:` + base64).
    pub fn remote_command(&self) -> String {
        format!("{REMOTE_COMMAND_PREFIX}{}", self.to_base64())
    }

    /// Decode the pulse train.
    ///
    /// Layout: type byte, repeat count, little-endian `u16` data length, then one byte per
    /// pulse. A `0x00` byte escapes a big-endian `u16` pulse for durations over 255 ticks.
    /// Anything after the declared length is padding.
    pub fn pulses(&self) -> Result<Pulses, WaveformError> {
        let data = &self.0[..];

        let [kind, repeat, len_lo, len_hi, body @ ..] = data else {
            return Err(WaveformError::Truncated { declared: 4, available: data.len() });
        };

        let declared = u16::from_le_bytes([*len_lo, *len_hi]) as usize;
        if declared > body.len() {
            return Err(WaveformError::Truncated { declared, available: body.len() });
        }

        let mut ticks = Vec::with_capacity(declared);
        let mut iter = body[..declared].iter();

        while let Some(&byte) = iter.next() {
            let tick = match byte {
                0x00 => {
                    let (Some(&hi), Some(&lo)) = (iter.next(), iter.next()) else {
                        return Err(WaveformError::Truncated { declared, available: body.len() });
                    };
                    u16::from_be_bytes([hi, lo])
                },
                other => other as u16
            };

            ticks.push(tick);
        }

        Ok(Pulses {
            kind: (*kind).into(),
            repeat: *repeat,
            ticks
        })
    }
}

impl Debug for Waveform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let head = &self.0[..self.0.len().min(8)];
        write!(f, "Waveform({} bytes, {head:02x?}..)", self.0.len())
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadKind {
    Infrared,
    Rf433,
    Rf315,
    Unknown(u8)
}

impl From<u8> for PayloadKind {
    fn from(value: u8) -> Self {
        match value {
            0x26 => Self::Infrared,
            0xb2 => Self::Rf433,
            0xd7 => Self::Rf315,
            other => Self::Unknown(other)
        }
    }
}


#[derive(Clone, Debug)]
pub struct Pulses {
    pub kind: PayloadKind,
    pub repeat: u8,
    pub ticks: Vec<u16>
}

impl Pulses {
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Pulse durations in microseconds.
    pub fn durations_us(&self) -> impl Iterator<Item = u64> + '_ {
        self.ticks.iter().map(|&t| t as u64 * TICK_NS / 1000)
    }

    pub fn total_us(&self) -> u64 {
        self.durations_us().sum()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    // first code of the GREE YB0FB2 cool table
    const GREE_COOL_16: &str = "JgCSAAABJpMVNhUSFhIVNhUSFTYVEhYSFRIVEhYSFRIVEhYSFRIVEhYSFRIVEhUTFRIVNhUSFhIVEhUSFRIWEhU2FRIWNRYSFRIVNhUSFgACjRU2FTYVEhYSFRIVEhYSFRIVEhYSFRIVEhUTFTYVEhUSFhIVEhUSFRMVEhUSFRIWEhUSFRIWEhUSFTYVEhY2FRIVAA0FAAAAAAAA";

    #[test]
    fn decodes_base64() {
        let waveform = Waveform::from_base64(GREE_COOL_16).unwrap();

        assert_eq!(waveform.len(), 156);
        assert_eq!(&waveform.as_bytes()[..4], &[0x26, 0x00, 0x92, 0x00]);
        assert_eq!(waveform.to_base64(), GREE_COOL_16);
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(Waveform::from_base64("not base64!"), Err(WaveformError::Base64(_))));
        assert_eq!(Waveform::from_base64(""), Err(WaveformError::Empty));
    }

    #[test]
    fn remote_command_is_prefixed() {
        let waveform = Waveform::from_base64(GREE_COOL_16).unwrap();
        let command = waveform.remote_command();

        assert!(command.starts_with("b64:JgCS"));
        assert_eq!(&command[4..], GREE_COOL_16);
    }

    #[test]
    fn decodes_pulses() {
        let pulses = Waveform::from_base64(GREE_COOL_16).unwrap().pulses().unwrap();

        assert_eq!(pulses.kind, PayloadKind::Infrared);
        assert_eq!(pulses.repeat, 0);
        // leading 0x00 0x01 0x26 is the long header mark
        assert_eq!(pulses.ticks[0], 0x0126);
        assert_eq!(pulses.ticks[1], 0x93);
        // trailing 0x00 0x0d 0x05 is the inter-frame gap
        assert_eq!(*pulses.ticks.last().unwrap(), 0x0d05);
        assert!(pulses.total_us() > 0);
    }

    #[test]
    fn detects_truncated_pulses() {
        let waveform = Waveform::new(vec![0x26, 0x00, 0x10, 0x00, 0x15, 0x36]).unwrap();
        assert_eq!(waveform.pulses().unwrap_err(), WaveformError::Truncated { declared: 16, available: 2 });

        let waveform = Waveform::new(vec![0x26, 0x00, 0x02, 0x00, 0x00, 0x01]).unwrap();
        assert!(matches!(waveform.pulses(), Err(WaveformError::Truncated { .. })));
    }
}
