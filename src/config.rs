use std::time::Duration;

use anyhow::{bail, Context, Result};
use thiserror::Error;
use url::Url;

use crate::hass::{HaClient, RemoteEntity};
use crate::ir::Waveform;
use crate::protocol::{addresses::{MacAddressError, DEFAULT_DEVICE_TYPE}, BroadlinkDevice, MacAddress};
use crate::transmit::{DeviceSession, TransmitError};


#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("{0} requires a host to be specified in the url")]
    MissingHost(&'static str),
    #[error("broadlink requires a mac query parameter")]
    MissingMac,
    #[error(transparent)]
    InvalidMac(#[from] MacAddressError),
    #[error("invalid device type {0:?}")]
    InvalidDeviceType(String),
    #[error("hass+remote requires an entity id")]
    MissingEntity,
    #[error("hass+remote requires the homeassistant settings")]
    HomeAssistantRequired,
}


/// The transceiver a thermostat transmits through.
pub enum Device {
    Broadlink(BroadlinkDevice),
    Remote(RemoteEntity)
}

impl Device {
    /// Open a device from its URL:
    ///
    /// * `broadlink://HOST[:PORT]?mac=AA:BB:CC:DD:EE:FF[&devtype=0x2712]`
    /// * `hass+remote:remote.entity_id` (or `hass+remote://remote.entity_id`)
    pub fn open(url: &Url, hass: Option<&HaClient>, timeout: Duration) -> Result<Self> {
        match url.scheme() {
            "broadlink" => {
                let host = url.host_str()
                    .ok_or(DeviceError::MissingHost("broadlink"))
                    .with_context(|| format!("invalid device url: {url}"))?;

                let mut mac = None;
                let mut device_type = DEFAULT_DEVICE_TYPE;

                for (key, value) in url.query_pairs() {
                    match key.as_ref() {
                        "mac" => {
                            mac = Some(value.parse::<MacAddress>()
                                .map_err(DeviceError::from)
                                .with_context(|| format!("invalid device url: {url}"))?);
                        },
                        "devtype" => {
                            device_type = parse_device_type(&value)
                                .with_context(|| format!("invalid device url: {url}"))?;
                        },
                        _ => ()
                    }
                }

                let mac = mac.ok_or(DeviceError::MissingMac)
                    .with_context(|| format!("invalid device url: {url}"))?;

                let mut device = BroadlinkDevice::new(host, mac)
                    .with_device_type(device_type)
                    .with_timeout(timeout);

                if let Some(port) = url.port() {
                    device = device.with_port(port);
                }

                Ok(Self::Broadlink(device))
            },
            "hass+remote" => {
                let entity_id = match url.host_str() {
                    Some(host) => host,
                    None => url.path()
                };

                if entity_id.is_empty() {
                    return Err(DeviceError::MissingEntity).with_context(|| format!("invalid device url: {url}"));
                }

                let client = hass.ok_or(DeviceError::HomeAssistantRequired)
                    .with_context(|| format!("cannot open {url}"))?;

                Ok(Self::Remote(RemoteEntity::new(client.clone(), entity_id)))
            },
            other => {
                bail!("url scheme {other} not supported");
            }
        }
    }

    pub fn broadlink_mut(&mut self) -> Option<&mut BroadlinkDevice> {
        match self {
            Device::Broadlink(device) => Some(device),
            Device::Remote(_) => None
        }
    }
}

fn parse_device_type(value: &str) -> Result<u16, DeviceError> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => value.parse()
    };

    parsed.map_err(|_| DeviceError::InvalidDeviceType(value.to_string()))
}

impl DeviceSession for Device {
    async fn authenticate(&mut self) -> Result<(), TransmitError> {
        match self {
            Device::Broadlink(device) => device.authenticate().await,
            Device::Remote(remote) => remote.authenticate().await,
        }
    }

    async fn transmit(&mut self, waveform: &Waveform) -> Result<(), TransmitError> {
        match self {
            Device::Broadlink(device) => device.transmit(waveform).await,
            Device::Remote(remote) => remote.transmit(waveform).await,
        }
    }

    fn requires_authentication(&self) -> bool {
        match self {
            Device::Broadlink(device) => device.requires_authentication(),
            Device::Remote(remote) => remote.requires_authentication(),
        }
    }
}
