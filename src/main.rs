use std::{path::PathBuf, time::Duration};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};

use irclimate2mqtt::{
    climate::Thermostat,
    config::Device,
    hass::{HaClient, HaModeSource},
    init_tracing,
    mqtt::{Bridge, Climate},
    settings::{Settings, ThermostatSettings, DEFAULT_CONFIG_PATH},
    transmit::Transmitter,
};


const HASS_TIMEOUT: Duration = Duration::from_secs(10);


#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file. Settings can be overridden with IRCLIMATE__SECTION__KEY
    /// environment variables.
    #[arg(short, long, env = "IRCLIMATE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}


async fn build_thermostat(settings: &ThermostatSettings, hass: Option<&HaClient>) -> Result<Climate> {
    let source = settings.code_source()?;
    let codes = source.load().with_context(|| format!("failed to load code book {source}"))?;

    let name = settings.name.clone().unwrap_or_else(|| codes.name().to_string());

    let device = Device::open(&settings.device, hass, settings.timeout())?;

    let mut transmitter = Transmitter::new(device, settings.retry_policy());
    transmitter.connect().await;

    let default_mode = match &settings.default_operation_entity {
        Some(entity_id) => {
            let client = hass.context("default_operation_entity requires the homeassistant settings")?;
            Some(HaModeSource::new(client.clone(), entity_id))
        },
        None => None
    };

    let mut thermostat = Thermostat::new(name, codes, transmitter, default_mode);

    if let Some(temperature) = settings.target_temperature {
        thermostat = thermostat.with_target_temperature(temperature);
    }

    if let Some(entity_id) = &settings.sensor_entity {
        let client = hass.context("sensor_entity requires the homeassistant settings")?;

        match client.get_state(entity_id).await {
            Ok(Some(state)) => {
                thermostat.on_reading(state.reading());
            },
            Ok(None) => warn!(%entity_id, "sensor entity not found"),
            Err(err) => warn!(%entity_id, %err, "failed to read sensor entity"),
        }
    }

    Ok(thermostat)
}


#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load(&args.config)
        .with_context(|| format!("failed to load settings from {}", args.config.display()))?;

    init_tracing(&settings.log.level);

    if settings.thermostats.is_empty() {
        bail!("no thermostats configured");
    }

    let hass = settings.homeassistant.as_ref()
        .map(|hass| HaClient::new(&hass.url, &hass.token, HASS_TIMEOUT))
        .transpose()
        .context("invalid homeassistant settings")?;

    let mut bridge = Bridge::new(&settings.mqtt);

    for thermostat in &settings.thermostats {
        let climate = build_thermostat(thermostat, hass.as_ref()).await
            .with_context(|| format!("failed to set up thermostat {}", thermostat.id))?;

        bridge.add(&thermostat.id, climate, thermostat.sensor_topic.as_deref())?;
    }

    info!(mqtt = %settings.mqtt.host, thermostats = settings.thermostats.len(), "starting");

    tokio::select! {
        result = bridge.run() => result,
        _ = tokio::signal::ctrl_c() => {
            info!("shutting down");
            Ok(())
        }
    }
}
