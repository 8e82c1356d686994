use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use url::Url;

use irclimate2mqtt::{config::Device, init_tracing, protocol::device::DEFAULT_TIMEOUT, transmit::DeviceSession};


/// Captures a waveform from a remote with the transceiver's learning mode
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL of the transceiver: broadlink://HOST[:PORT]?mac=MAC
    device: Url,

    /// Seconds to wait for a button press
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}


#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing("warn");

    let mut device = Device::open(&args.device, None, DEFAULT_TIMEOUT)?;

    let Some(device) = device.broadlink_mut() else {
        bail!("learning requires a broadlink:// device");
    };

    device.authenticate().await
        .with_context(|| format!("failed to authenticate with {}", args.device))?;

    println!("{}", "Point the remote at the transceiver and press a button...".bright_yellow());

    let Some(waveform) = device.learn(Duration::from_secs(args.timeout)).await? else {
        bail!("nothing received within {} seconds", args.timeout);
    };

    let pulses = waveform.pulses().map(|pulses| pulses.len()).unwrap_or_default();

    println!("{}", format!("{} bytes, {pulses} pulses", waveform.len()).as_str().green());
    println!("{}", waveform.to_base64());

    Ok(())
}
