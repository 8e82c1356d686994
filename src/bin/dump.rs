use anyhow::{Context, Result};

use clap::Parser;
use colored::{ColoredString, Colorize};
use irclimate2mqtt::ir::{CodeArgs, TableKind, Waveform};


/// Lists every waveform of a code book
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    codes: CodeArgs,

    /// Also print each waveform as base64
    #[arg(long)]
    base64: bool,
}


fn coloured(kind: TableKind, line: String) -> ColoredString {
    match kind {
        TableKind::Off => line.as_str().on_black().bright_white(),
        TableKind::Fan => line.as_str().on_cyan().bright_white(),
        TableKind::Heat => line.as_str().on_red().bright_white(),
        TableKind::Cool => line.as_str().on_blue().bright_white(),
        TableKind::CoolSilent => line.as_str().on_bright_blue().bright_white(),
        TableKind::CoolAuto => line.as_str().on_blue().bright_white(),
        TableKind::Dehumidification => line.as_str().on_green().bright_white(),
    }
}

fn describe(label: &str, waveform: &Waveform) -> String {
    let pulses = match waveform.pulses() {
        Ok(pulses) => format!("{:4} pulses {:8.1} ms", pulses.len(), pulses.total_us() as f64 / 1000.0),
        Err(err) => format!("undecodable: {err}"),
    };

    format!("{label: <6} {:4} bytes {pulses}", waveform.len())
}


fn main() -> Result<()> {
    let args = Args::parse();

    let source = args.codes.source()?;
    let codes = source.load().with_context(|| format!("failed to load code book {source}"))?;

    let range = codes.range();

    println!("{} ({source}): {}..={} °C", codes.name().bold(), range.min(), range.max());

    let print = |kind: TableKind, label: &str, waveform: &Waveform| {
        println!("{}", coloured(kind, describe(label, waveform)));

        if args.base64 {
            println!("       {}", waveform.to_base64().as_str().dimmed());
        }
    };

    println!("\n{}", TableKind::Off);
    print(TableKind::Off, "-", codes.off());

    if let Some(fan) = codes.fan() {
        println!("\n{}", TableKind::Fan);
        print(TableKind::Fan, "-", fan);
    }

    for (kind, table) in codes.tables() {
        println!("\n{kind}");

        for (offset, waveform) in table.iter().enumerate() {
            let label = format!("{}°C", range.temperature_at(offset));
            print(kind, &label, waveform);
        }
    }

    Ok(())
}
