use std::{path::{Path, PathBuf}, time::Duration};

use anyhow::Context;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

use crate::ir::{CodeSource, Model};
use crate::transmit::RetryPolicy;


pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const ENV_PREFIX: &str = "IRCLIMATE";


#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub log: LogSettings,
    pub mqtt: MqttSettings,
    pub homeassistant: Option<HomeAssistantSettings>,
    #[serde(default)]
    pub thermostats: Vec<ThermostatSettings>,
}

impl Settings {
    /// `path` layered with `IRCLIMATE__SECTION__KEY` environment variables.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"))
            .build()?
            .try_deserialize()
    }
}


#[derive(Debug, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}


#[derive(Debug, Deserialize)]
pub struct MqttSettings {
    pub host: String,
    #[serde(default = "default_mqtt_port")]
    pub port: u16,
    #[serde(default = "default_client_id")]
    pub client_id: String,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default = "default_base_topic")]
    pub base_topic: String,
    /// Home Assistant discovery prefix. An empty string turns discovery off.
    #[serde(default = "default_discovery_prefix")]
    pub discovery_prefix: Option<String>,
}

impl MqttSettings {
    pub fn discovery_prefix(&self) -> Option<&str> {
        self.discovery_prefix.as_deref().filter(|prefix| !prefix.is_empty())
    }
}

fn default_mqtt_port() -> u16 {
    1883
}

fn default_client_id() -> String {
    "irclimate2mqtt".to_string()
}

fn default_base_topic() -> String {
    "irclimate".to_string()
}

fn default_discovery_prefix() -> Option<String> {
    Some("homeassistant".to_string())
}


#[derive(Debug, Deserialize)]
pub struct HomeAssistantSettings {
    pub url: String,
    pub token: String,
}


#[derive(Debug, Deserialize)]
pub struct ThermostatSettings {
    pub id: String,
    pub name: Option<String>,
    pub device: Url,
    pub model: Option<Model>,
    pub codes: Option<PathBuf>,
    pub sensor_topic: Option<String>,
    pub sensor_entity: Option<String>,
    pub default_operation_entity: Option<String>,
    pub target_temperature: Option<f32>,
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ThermostatSettings {
    /// Exactly one of `model` and `codes` names the code book.
    pub fn code_source(&self) -> anyhow::Result<CodeSource> {
        CodeSource::resolve(self.model, self.codes.as_deref())
            .with_context(|| format!("thermostat {}", self.id))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retry_attempts)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_retry_attempts() -> u32 {
    RetryPolicy::DEFAULT_ATTEMPTS
}

fn default_timeout_secs() -> u64 {
    10
}


#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn parse(toml: &str) -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn applies_defaults() {
        let settings = parse(r#"
            [mqtt]
            host = "broker.local"

            [[thermostats]]
            id = "bedroom"
            device = "broadlink://192.168.1.20?mac=34:ea:34:12:ab:0f"
            model = "gree-yb0fb2"
        "#).unwrap();

        assert_eq!(settings.log.level, "info");
        assert_eq!(settings.mqtt.port, 1883);
        assert_eq!(settings.mqtt.client_id, "irclimate2mqtt");
        assert_eq!(settings.mqtt.base_topic, "irclimate");
        assert_eq!(settings.mqtt.discovery_prefix(), Some("homeassistant"));
        assert!(settings.homeassistant.is_none());

        let thermostat = &settings.thermostats[0];
        assert_eq!(thermostat.code_source().unwrap(), CodeSource::Builtin(Model::GreeYb0fb2));
        assert_eq!(thermostat.retry_policy().attempts(), 2);
        assert_eq!(thermostat.timeout(), Duration::from_secs(10));
        assert!(thermostat.sensor_topic.is_none());
    }

    #[test]
    fn full_settings() {
        let settings = parse(r#"
            [log]
            level = "debug"

            [mqtt]
            host = "broker.local"
            port = 8883
            username = "hvac"
            password = "hunter2"
            discovery_prefix = ""

            [homeassistant]
            url = "http://homeassistant.local:8123"
            token = "secret"

            [[thermostats]]
            id = "living_room"
            name = "Living Room"
            device = "hass+remote:remote.living_room"
            codes = "codes/gree-revised.toml"
            sensor_topic = "sensors/living_room/temperature"
            default_operation_entity = "input_select.hvac_default"
            target_temperature = 22.5
            retry_attempts = 3
            timeout_secs = 5
        "#).unwrap();

        assert_eq!(settings.log.level, "debug");
        assert_eq!(settings.mqtt.port, 8883);
        assert_eq!(settings.mqtt.discovery_prefix(), None);
        assert_eq!(settings.homeassistant.unwrap().token, "secret");

        let thermostat = &settings.thermostats[0];
        assert_eq!(thermostat.device.scheme(), "hass+remote");
        assert_eq!(thermostat.code_source().unwrap(), CodeSource::File(PathBuf::from("codes/gree-revised.toml")));
        assert_eq!(thermostat.target_temperature, Some(22.5));
        assert_eq!(thermostat.retry_policy().attempts(), 3);
    }

    #[test]
    fn code_book_is_required_once() {
        let settings = parse(r#"
            [mqtt]
            host = "broker.local"

            [[thermostats]]
            id = "none"
            device = "broadlink://rm.local?mac=34ea3412ab0f"

            [[thermostats]]
            id = "both"
            device = "broadlink://rm.local?mac=34ea3412ab0f"
            model = "midea"
            codes = "codes.toml"
        "#).unwrap();

        assert!(settings.thermostats[0].code_source().is_err());
        assert!(settings.thermostats[1].code_source().is_err());
    }

    #[test]
    fn rejects_unknown_models() {
        assert!(parse(r#"
            [mqtt]
            host = "broker.local"

            [[thermostats]]
            id = "x"
            device = "broadlink://rm.local?mac=34ea3412ab0f"
            model = "daikin"
        "#).is_err());
    }
}
