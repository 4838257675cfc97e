//! Command line surface and polling loop used by the `pi` binary.

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use mcp3xxx::{AnalogInput, Chip};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Poll an MCP3xxx ADC and print each channel in volts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// ADC part number (MCP3002, MCP3004, MCP3008, MCP3204, MCP3208)
    #[arg(short = 'm', long, default_value = "MCP3008")]
    pub chip: Chip,

    /// Chip select line the ADC is wired to
    #[arg(short = 's', long, default_value_t = 0)]
    pub chip_select: u8,

    /// Voltage on the ADC's reference pin
    #[arg(short = 'r', long, default_value_t = 3.3)]
    pub vref: f32,

    /// Only poll this channel (default: every channel)
    #[arg(short = 'c', long)]
    pub channel: Option<u8>,

    /// Milliseconds between polls
    #[arg(short = 'i', long, default_value_t = 500)]
    pub interval_ms: u64,

    /// Stop after this many polls (default: run forever)
    #[arg(short = 'n', long)]
    pub count: Option<u64>,

    /// Enable debug logging
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Args {
    /// Logs go to stderr so stdout carries only readings.
    pub fn init_tracing(&self) -> anyhow::Result<()> {
        let mut filter = EnvFilter::from_default_env();

        if self.debug {
            filter = filter
                .add_directive("mcp3xxx=trace".parse()?)
                .add_directive("mcp3xxx_input=debug".parse()?);
        }

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();

        Ok(())
    }
}

/// Reads the selected channels every interval and writes one line per reading.
///
/// The first failed read ends polling.
pub fn poll<I>(input: &mut I, args: &Args, out: &mut impl Write) -> anyhow::Result<()>
where
    I: AnalogInput,
    I::Error: std::error::Error + Send + Sync + 'static,
{
    let channels: Vec<u8> = match args.channel {
        Some(channel) => vec![channel],
        None => (0..input.channel_count()).collect(),
    };

    let interval = Duration::from_millis(args.interval_ms);

    let mut polls = 0;

    loop {
        for &channel in &channels {
            let reading = input
                .read(channel)
                .with_context(|| format!("Failed to read channel {channel}"))?;

            debug!(channel, value = reading.value, kind = %reading.kind, "reading");

            writeln!(out, "{channel}: {:.3} V ({})", reading.value, reading.kind)?;
        }

        polls += 1;

        if args.count.is_some_and(|count| polls >= count) {
            return Ok(());
        }

        std::thread::sleep(interval);
    }
}
