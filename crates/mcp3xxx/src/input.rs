//! Host-facing analog inputs.

use core::fmt;

use crate::{Error, Mcp3xxx, Transport, MAX_CHANNELS};

/// Kind of value a [`Reading`] carries, as the host framework names it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SensorType {
    /// A voltage sampled from an analog pin.
    AnalogSensor,
}

impl SensorType {
    pub const fn as_str(self) -> &'static str {
        match self {
            SensorType::AnalogSensor => "analog_sensor",
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single value reported to the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    pub value: f32,
    pub kind: SensorType,
}

/// Something the host can poll for analog readings.
pub trait AnalogInput {
    type Error;

    /// Number of channels that can be read.
    fn channel_count(&self) -> u8;

    /// Samples `channel` now. Nothing is cached between calls.
    fn read(&mut self, channel: u8) -> Result<Reading, Self::Error>;
}

/// Exposes an [`Mcp3xxx`] as an [`AnalogInput`] reporting volts.
pub struct McpInput<SPI> {
    adc: Mcp3xxx<SPI>,
}

impl<SPI: Transport> McpInput<SPI> {
    pub fn new(adc: Mcp3xxx<SPI>) -> Self {
        adc.into()
    }

    pub fn adc(&self) -> &Mcp3xxx<SPI> {
        &self.adc
    }

    pub fn into_inner(self) -> Mcp3xxx<SPI> {
        self.adc
    }

    /// Reads every channel in order. The first failure aborts the sweep.
    pub fn read_all(&mut self) -> Result<[Option<Reading>; MAX_CHANNELS], Error<SPI::Error>> {
        let mut readings = [None; MAX_CHANNELS];

        for (channel, slot) in self.adc.channels().zip(readings.iter_mut()) {
            *slot = Some(self.read(channel)?);
        }

        Ok(readings)
    }
}

impl<SPI: Transport> From<Mcp3xxx<SPI>> for McpInput<SPI> {
    fn from(adc: Mcp3xxx<SPI>) -> Self {
        Self { adc }
    }
}

impl<SPI: Transport> AnalogInput for McpInput<SPI> {
    type Error = Error<SPI::Error>;

    fn channel_count(&self) -> u8 {
        self.adc.variant().channel_count()
    }

    fn read(&mut self, channel: u8) -> Result<Reading, Self::Error> {
        let value = self.adc.read_voltage(channel)?;

        Ok(Reading {
            value,
            kind: SensorType::AnalogSensor,
        })
    }
}

impl<SPI> fmt::Display for McpInput<SPI> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.adc, f)
    }
}
