use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Thermostat operating mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, AsRefStr, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Mode {
    #[default]
    Off,
    Idle,
    Heat,
    Cool,
    Auto,

    #[serde(alias = "fan_only")]
    #[strum(to_string = "fan", serialize = "fan_only")]
    Fan,

    #[serde(alias = "dry")]
    #[strum(to_string = "dehumidification", serialize = "dry")]
    Dehumidification,
}

impl Mode {
    /// `off` and `idle` both mean the unit is switched off.
    pub fn is_off(self) -> bool {
        matches!(self, Mode::Off | Mode::Idle)
    }

    /// Name of the mode in the Home Assistant MQTT climate vocabulary.
    pub fn hass_mode(self) -> &'static str {
        match self {
            Mode::Off | Mode::Idle => "off",
            Mode::Heat => "heat",
            Mode::Cool => "cool",
            Mode::Auto => "auto",
            Mode::Fan => "fan_only",
            Mode::Dehumidification => "dry",
        }
    }
}

/// Fan speed variant. Selects between the cool tables on units recorded per fan speed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, AsRefStr, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FanMode {
    Silent,
    #[default]
    Auto,
}
