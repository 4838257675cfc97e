//! Polls an MCP3xxx ADC wired to a Raspberry Pi's SPI0 bus.

use std::cell::RefCell;
use std::convert::Infallible;

use anyhow::Context;
use clap::Parser;
use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal::spi::{Phase, Polarity};
use embedded_hal_bus::spi::RefCellDevice;
use mcp3xxx::{Config, DeviceVariant, Mcp3xxx, McpInput};
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};
use tracing::info;

use mcp3xxx_input::cli::{self, Args};

/// Chip select is asserted by the SPI peripheral itself through [`SlaveSelect`].
struct HardwareCs;

impl ErrorType for HardwareCs {
    type Error = Infallible;
}

impl OutputPin for HardwareCs {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn slave_select(line: u8) -> anyhow::Result<SlaveSelect> {
    match line {
        0 => Ok(SlaveSelect::Ss0),
        1 => Ok(SlaveSelect::Ss1),
        2 => Ok(SlaveSelect::Ss2),
        _ => anyhow::bail!("No chip select line {line} on SPI0"),
    }
}

fn rppal_mode(mode: embedded_hal::spi::Mode) -> Mode {
    match (mode.polarity, mode.phase) {
        (Polarity::IdleLow, Phase::CaptureOnFirstTransition) => Mode::Mode0,
        (Polarity::IdleLow, Phase::CaptureOnSecondTransition) => Mode::Mode1,
        (Polarity::IdleHigh, Phase::CaptureOnFirstTransition) => Mode::Mode2,
        (Polarity::IdleHigh, Phase::CaptureOnSecondTransition) => Mode::Mode3,
    }
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    args.init_tracing()?;

    let variant = DeviceVariant::new(
        args.chip,
        Config {
            chip_select: args.chip_select,
            reference_voltage: args.vref,
        },
    )?;

    let spi = Spi::new(
        Bus::Spi0,
        slave_select(variant.chip_select())?,
        mcp3xxx::SPI_SPEED_HZ,
        rppal_mode(mcp3xxx::SPI_MODE),
    )
    .context("Failed to open SPI0")?;

    spi.set_bits_per_word(mcp3xxx::SPI_BITS_PER_WORD)
        .context("Failed to set SPI word size")?;

    // RefCellDevice needs the bus behind a RefCell; only the one SlaveSelect line is reachable
    let spi = RefCell::new(spi);

    let device = RefCellDevice::new_no_delay(&spi, HardwareCs);

    let mut input = McpInput::new(Mcp3xxx::new(device, variant));

    info!(device = %input, vref = variant.reference_voltage(), "polling");

    cli::poll(&mut input, &args, &mut std::io::stdout().lock())
}
