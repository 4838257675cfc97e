//! Provides drivers for the Microchip MCP3002, MCP3004/3008 and MCP3204/3208 ADCs via the
//! `embedded-hal` ecosystem.
//!
//! [`Mcp3xxx`] drives any supported chip given its [`DeviceVariant`]. The per-chip modules wrap
//! it with a typed [`Channel`](mcp3008::Channel) list so out-of-range channels cannot be named,
//! and [`McpInput`] reports readings in volts for polling hosts.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

/// Generates a driver bound to one chip with its own channel list.
macro_rules! typed_driver {
    (
        $(#[$meta:meta])*
        $driver:ident, $chip:expr, [$($channel:ident = $index:literal),+ $(,)?]
    ) => {
        use crate::{Chip, Config, ConfigError, DeviceVariant, Error, Mcp3xxx, Transport};

        $(#[$meta])*
        pub struct $driver<SPI> {
            adc: Mcp3xxx<SPI>,
        }

        impl<SPI: Transport> $driver<SPI> {
            /// Creates a new driver from an SPI peripheral, on chip select 0 with a 3.3V reference.
            /// Please ensure the SPI bus is in SPI mode 0, aka (0, 0).
            pub fn new(spi: SPI) -> Self {
                spi.into()
            }

            /// Creates a new driver from an SPI peripheral wired as described by `config`.
            pub fn with_config(spi: SPI, config: Config) -> Result<Self, ConfigError> {
                let variant = DeviceVariant::new($chip, config)?;

                Ok(Self {
                    adc: Mcp3xxx::new(spi, variant),
                })
            }

            /// Read a channel and return the raw value.
            /// If `single_ended` is `true`, the conversion will be completed in single-ended mode.
            /// If `false`, the conversion will instead use differential mode.
            pub fn read_with_mode(
                &mut self,
                ch: Channel,
                single_ended: bool,
            ) -> Result<u16, Error<SPI::Error>> {
                self.adc.read_raw(ch.into(), !single_ended)
            }

            /// Read a channel and return the raw value in single-ended mode.
            pub fn read(&mut self, ch: Channel) -> Result<u16, Error<SPI::Error>> {
                self.read_with_mode(ch, true)
            }

            /// Read a channel and return the raw value in differential mode.
            pub fn read_differential(&mut self, ch: Channel) -> Result<u16, Error<SPI::Error>> {
                self.read_with_mode(ch, false)
            }

            /// Read a channel in single-ended mode and return the voltage.
            pub fn read_voltage(&mut self, ch: Channel) -> Result<f32, Error<SPI::Error>> {
                self.adc.read_voltage(ch.into())
            }

            pub fn into_inner(self) -> Mcp3xxx<SPI> {
                self.adc
            }
        }

        impl<SPI: Transport> From<SPI> for $driver<SPI> {
            fn from(spi: SPI) -> Self {
                Self {
                    adc: Mcp3xxx::new(spi, DeviceVariant::from($chip)),
                }
            }
        }

        #[allow(missing_docs)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum Channel {
            $($channel = $index),+
        }

        impl Channel {
            /// Iterate over all channels.
            pub fn all() -> impl Iterator<Item = Self> {
                [$(Self::$channel),+].into_iter()
            }
        }

        impl From<Channel> for u8 {
            fn from(ch: Channel) -> u8 {
                ch as u8
            }
        }
    };
}

mod chip;
mod device;
mod error;
mod family;
mod input;
#[cfg(test)]
mod mock;
mod transport;
mod variant;

#[cfg(feature = "mcp3002")]
pub mod mcp3002;

#[cfg(feature = "mcp3004")]
pub mod mcp3004;

#[cfg(feature = "mcp3008")]
pub mod mcp3008;

#[cfg(feature = "mcp3204")]
pub mod mcp3204;

#[cfg(feature = "mcp3208")]
pub mod mcp3208;

pub use chip::{Chip, ParseChipError};
pub use device::{Mcp3xxx, Readings, MAX_CHANNELS};
pub use error::{ConfigError, Error};
pub use family::{Family, Frame, FRAME_LEN};
pub use input::{AnalogInput, McpInput, Reading, SensorType};
pub use transport::{Transport, SPI_BITS_PER_WORD, SPI_MODE, SPI_SPEED_HZ};
pub use variant::{Config, DeviceVariant, MAX_CHIP_SELECT};
