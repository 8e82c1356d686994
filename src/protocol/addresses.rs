use std::{fmt, str::FromStr};

use thiserror::Error;

/// UDP port the RM family listens on.
pub const DEFAULT_PORT: u16 = 80;

/// Device type sent in every request header (RM2).
pub const DEFAULT_DEVICE_TYPE: u16 = 0x2712;


#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid MAC address {0:?} (expected six hex octets)")]
pub struct MacAddressError(String);


/// Hardware address of a transceiver. Stored in display order, written reversed on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    pub fn to_wire(self) -> [u8; 6] {
        let mut octets = self.0;
        octets.reverse();
        octets
    }

    pub fn from_wire(mut octets: [u8; 6]) -> Self {
        octets.reverse();
        Self(octets)
    }
}

impl FromStr for MacAddress {
    type Err = MacAddressError;

    /// Accepts `aa:bb:cc:dd:ee:ff`, `aa-bb-cc-dd-ee-ff` or `aabbccddeeff`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MacAddressError(s.to_string());

        let hex: String = s.chars().filter(|c| *c != ':' && *c != '-').collect();
        if hex.len() != 12 || !hex.is_ascii() {
            return Err(err());
        }

        let mut octets = [0u8; 6];
        for (i, octet) in octets.iter_mut().enumerate() {
            *octet = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| err())?;
        }

        Ok(Self(octets))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}
