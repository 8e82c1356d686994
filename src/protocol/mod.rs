//! Broadlink RM network protocol.

pub mod addresses;
pub mod codec;
pub mod commands;
pub mod device;
pub mod emulator;

pub use addresses::MacAddress;
pub use device::BroadlinkDevice;
pub use emulator::{Emulator, EmulatorHandle};
