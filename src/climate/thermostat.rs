use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use crate::ir::CommandSet;
use crate::sensor::{parse_reading, SensorValueError, TemperatureReading};
use crate::transmit::{DeviceSession, Transmitter};

use super::modes::{FanMode, Mode};
use super::selector::{select, Selection};


#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermostatError {
    #[error("{name} has no codes for mode {mode}")]
    Unsupported {
        name: String,
        mode: Mode
    },
    #[error("invalid target temperature {0}")]
    InvalidTemperature(f32),
}


/// Names the mode to switch to when a setpoint arrives while the unit is off.
#[allow(async_fn_in_trait)]
pub trait DefaultModeSource {
    async fn default_mode(&mut self) -> Option<Mode>;
}

/// No default; the controller falls back to `auto`.
impl DefaultModeSource for () {
    async fn default_mode(&mut self) -> Option<Mode> {
        None
    }
}

impl DefaultModeSource for Mode {
    async fn default_mode(&mut self) -> Option<Mode> {
        Some(*self)
    }
}

impl<D: DefaultModeSource> DefaultModeSource for Option<D> {
    async fn default_mode(&mut self) -> Option<Mode> {
        match self {
            Some(source) => source.default_mode().await,
            None => None
        }
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThermostatState {
    pub mode: Mode,
    pub target_temperature: f32,
    pub fan_mode: FanMode,
    /// Last measured room temperature, °C
    pub current_temperature: Option<f32>,
    /// Whether the device accepted the code for this state.
    pub confirmed: bool,
}


/// Thermostat controller for one air conditioner.
///
/// Every command updates the state as requested, then selects and transmits the matching
/// code; `confirmed` records whether the transmission got through. State is never left
/// half-updated across an await: the default mode is looked up before anything changes,
/// and the transmission happens once the state is complete.
pub struct Thermostat<S, D = ()> {
    name: String,
    codes: CommandSet,
    transmitter: Transmitter<S>,
    default_mode: D,
    state: ThermostatState
}

impl<S: DeviceSession, D: DefaultModeSource> Thermostat<S, D> {
    pub fn new(name: impl Into<String>, codes: CommandSet, transmitter: Transmitter<S>, default_mode: D) -> Self {
        let state = ThermostatState {
            mode: Mode::Off,
            target_temperature: codes.range().min() as f32,
            fan_mode: FanMode::Auto,
            current_temperature: None,
            confirmed: true
        };

        Self {
            name: name.into(),
            codes,
            transmitter,
            default_mode,
            state
        }
    }

    /// Initial setpoint, kept within the code book's range.
    pub fn with_target_temperature(mut self, temperature: f32) -> Self {
        let range = self.codes.range();

        if temperature.is_finite() {
            self.state.target_temperature = temperature.clamp(range.min() as f32, range.max() as f32);
        }

        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn codes(&self) -> &CommandSet {
        &self.codes
    }

    pub fn state(&self) -> ThermostatState {
        self.state
    }

    pub fn transmitter(&self) -> &Transmitter<S> {
        &self.transmitter
    }

    pub fn transmitter_mut(&mut self) -> &mut Transmitter<S> {
        &mut self.transmitter
    }

    /// Setpoint range offered to users: one degree past each end, so overshooting a bound
    /// can be expressed (and switches the unit off).
    pub fn ui_range(&self) -> (f32, f32) {
        let range = self.codes.range();
        (range.min() as f32 - 1.0, range.max() as f32 + 1.0)
    }

    #[instrument(skip(self), fields(thermostat = %self.name))]
    pub async fn set_mode(&mut self, mode: Mode) -> Result<bool, ThermostatError> {
        self.check_supported(mode)?;

        info!(%mode, "set mode");
        self.state.mode = mode;

        Ok(self.apply().await)
    }

    #[instrument(skip(self), fields(thermostat = %self.name))]
    pub async fn set_temperature(&mut self, temperature: f32) -> Result<bool, ThermostatError> {
        if !temperature.is_finite() {
            return Err(ThermostatError::InvalidTemperature(temperature));
        }

        let range = self.codes.range();
        let (min, max) = (range.min() as f32, range.max() as f32);

        if temperature < min {
            info!(min, "setpoint below range, switching off");
            self.state.mode = Mode::Off;
            self.state.target_temperature = min;
        } else if temperature > max {
            info!(max, "setpoint above range, switching off");
            self.state.mode = Mode::Off;
            self.state.target_temperature = max;
        } else if self.state.mode.is_off() && self.state.current_temperature.is_some() {
            let mode = self.resolve_default_mode().await;

            info!(%mode, "setpoint while off, switching on");
            self.state.target_temperature = temperature;
            self.state.mode = mode;
        } else {
            self.state.target_temperature = temperature;
        }

        Ok(self.apply().await)
    }

    #[instrument(skip(self), fields(thermostat = %self.name))]
    pub async fn set_fan_mode(&mut self, fan_mode: FanMode) -> bool {
        info!(%fan_mode, "set fan mode");
        self.state.fan_mode = fan_mode;

        self.apply().await
    }

    /// Switch on in the default mode (`auto` without one).
    #[instrument(skip(self), fields(thermostat = %self.name))]
    pub async fn turn_on(&mut self) -> bool {
        let mode = self.resolve_default_mode().await;

        info!(%mode, "turn on");
        self.state.mode = mode;

        self.apply().await
    }

    #[instrument(skip(self), fields(thermostat = %self.name))]
    pub async fn turn_off(&mut self) -> bool {
        info!("turn off");
        self.state.mode = Mode::Off;

        self.apply().await
    }

    /// Record a measured temperature (°C). Nothing is transmitted.
    pub fn on_measurement(&mut self, celsius: f32) {
        debug!(thermostat = %self.name, celsius, "measurement");
        self.state.current_temperature = Some(celsius);
    }

    /// Record a parsed reading. A bad reading is logged and the last measurement kept.
    pub fn on_reading(&mut self, reading: Result<TemperatureReading, SensorValueError>) -> bool {
        match reading {
            Ok(reading) => {
                self.on_measurement(reading.celsius());
                true
            },
            Err(err) => {
                warn!(thermostat = %self.name, %err, "unable to update from sensor");
                false
            }
        }
    }

    pub fn on_sensor_payload(&mut self, payload: &[u8]) -> bool {
        self.on_reading(parse_reading(payload))
    }

    fn check_supported(&self, mode: Mode) -> Result<(), ThermostatError> {
        if self.codes.supports(mode) {
            Ok(())
        } else {
            Err(ThermostatError::Unsupported { name: self.name.clone(), mode })
        }
    }

    async fn resolve_default_mode(&mut self) -> Mode {
        match self.default_mode.default_mode().await {
            Some(mode) if self.codes.supports(mode) => mode,
            Some(mode) => {
                warn!(thermostat = %self.name, %mode, "default mode not supported, using auto");
                Mode::Auto
            },
            None => Mode::Auto
        }
    }

    async fn apply(&mut self) -> bool {
        let selection = Selection {
            mode: self.state.mode,
            target_temperature: self.state.target_temperature,
            measured_temperature: self.state.current_temperature,
            fan_mode: self.state.fan_mode
        };

        let confirmed = match select(&self.codes, &selection) {
            Ok(waveform) => self.transmitter.send(waveform).await,
            Err(err) => {
                error!(thermostat = %self.name, %err, "nothing to transmit");
                false
            }
        };

        self.state.confirmed = confirmed;
        confirmed
    }
}
