use thiserror::Error;

use crate::ir::{CommandSet, Waveform};

use super::modes::{FanMode, Mode};


#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    #[error("no codes recorded for mode {0}")]
    Unsupported(Mode),
}


/// Inputs of one command selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub mode: Mode,
    pub target_temperature: f32,
    pub measured_temperature: Option<f32>,
    pub fan_mode: FanMode,
}

/// Resolve `auto` to heat or cool: heat while the room is colder than the target, cool
/// otherwise or when nothing has been measured yet. Other modes resolve to themselves.
pub fn effective_mode(mode: Mode, target_temperature: f32, measured_temperature: Option<f32>) -> Mode {
    match (mode, measured_temperature) {
        (Mode::Auto, Some(measured)) if measured < target_temperature => Mode::Heat,
        (Mode::Auto, _) => Mode::Cool,
        (other, _) => other,
    }
}

/// Pick the waveform for a selection.
///
/// Pure: the same selection against the same code set always yields the same waveform.
/// The target is clamped into the code set's range before indexing.
pub fn select<'a>(codes: &'a CommandSet, selection: &Selection) -> Result<&'a Waveform, SelectError> {
    let range = codes.range();
    let offset = range.offset(selection.target_temperature);

    let mode = effective_mode(selection.mode, selection.target_temperature, selection.measured_temperature);

    let waveform = match mode {
        Mode::Off | Mode::Idle => Some(codes.off()),
        Mode::Heat => codes.heat().get(offset),
        Mode::Cool | Mode::Auto => codes.cool(selection.fan_mode).get(offset),
        Mode::Fan => codes.fan(),
        Mode::Dehumidification => codes.dehumidification().and_then(|table| table.get(offset)),
    };

    waveform.ok_or(SelectError::Unsupported(mode))
}
