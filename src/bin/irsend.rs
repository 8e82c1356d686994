use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use url::Url;

use irclimate2mqtt::{
    climate::{select, FanMode, Mode, Selection},
    config::Device,
    hass::HaClient,
    init_tracing,
    ir::CodeArgs,
    transmit::{RetryPolicy, Transmitter},
};


/// Selects the code for one thermostat state and transmits it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Device URL
    ///
    /// either broadlink://HOST[:PORT]?mac=MAC or hass+remote:remote.entity_id
    device: Url,

    #[command(flatten)]
    codes: CodeArgs,

    #[arg(long, default_value = "auto")]
    mode: Mode,

    /// Target temperature, °C (defaults to the bottom of the code book's range)
    #[arg(long)]
    target: Option<f32>,

    #[arg(long, default_value = "auto")]
    fan: FanMode,

    /// Measured room temperature, °C. Resolves auto to heat or cool.
    #[arg(long)]
    measured: Option<f32>,

    #[arg(long, env = "HASS_URL")]
    hass_url: Option<String>,

    #[arg(long, env = "HASS_TOKEN", hide_env_values = true)]
    hass_token: Option<String>,

    /// Total transmission attempts
    #[arg(long, default_value_t = RetryPolicy::DEFAULT_ATTEMPTS)]
    attempts: u32,

    /// Device timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}


#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing("info");

    let source = args.codes.source()?;
    let codes = source.load().with_context(|| format!("failed to load code book {source}"))?;

    let selection = Selection {
        mode: args.mode,
        target_temperature: args.target.unwrap_or(codes.range().min() as f32),
        measured_temperature: args.measured,
        fan_mode: args.fan,
    };

    let waveform = select(&codes, &selection)?;

    let timeout = Duration::from_secs(args.timeout);

    let hass = match (&args.hass_url, &args.hass_token) {
        (Some(url), Some(token)) => Some(HaClient::new(url, token, timeout)?),
        (None, None) => None,
        _ => bail!("--hass-url and --hass-token must be given together"),
    };

    let device = Device::open(&args.device, hass.as_ref(), timeout)?;

    let mut transmitter = Transmitter::new(device, RetryPolicy::new(args.attempts));
    transmitter.connect().await;

    info!(mode = %selection.mode, target = selection.target_temperature, bytes = waveform.len(), "transmitting");

    if !transmitter.send(waveform).await {
        bail!("transmission to {} failed", args.device);
    }

    Ok(())
}
