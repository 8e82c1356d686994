pub mod modes;
pub mod selector;
pub mod thermostat;

pub use modes::{FanMode, Mode};
pub use selector::{effective_mode, select, SelectError, Selection};
pub use thermostat::{DefaultModeSource, Thermostat, ThermostatError, ThermostatState};
