use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use irclimate2mqtt::{init_tracing, protocol::{Emulator, MacAddress}};


/// Emulator for a Broadlink RM transceiver
///
/// Answers authentication, send and learning commands over UDP, so the bridge can be
/// exercised without hardware.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:80")]
    listen: SocketAddr,

    /// MAC address reported in responses
    #[arg(long, default_value = "34:ea:34:12:ab:0f")]
    mac: MacAddress,
}


#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing("info");

    let emulator = Emulator::bind(args.listen, args.mac).await
        .with_context(|| format!("failed to listen on {}", args.listen))?;

    info!(addr = %emulator.local_addr(), mac = %args.mac, "emulating Broadlink RM");

    emulator.run().await?;

    Ok(())
}
