use crate::{Chip, ConfigError, Error, Family};

/// Highest chip select line on a Raspberry Pi SPI bus.
pub const MAX_CHIP_SELECT: u8 = 2;

/// Construction parameters for a single chip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Chip select line the chip is wired to.
    pub chip_select: u8,
    /// Voltage on the chip's V<sub>REF</sub> pin.
    pub reference_voltage: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chip_select: 0,
            reference_voltage: 3.3,
        }
    }
}

/// A chip together with how it is wired. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceVariant {
    chip: Chip,
    chip_select: u8,
    reference_voltage: f32,
}

impl DeviceVariant {
    /// Validates `config` for `chip`.
    pub fn new(chip: Chip, config: Config) -> Result<Self, ConfigError> {
        let Config {
            chip_select,
            reference_voltage,
        } = config;

        if !reference_voltage.is_finite() || reference_voltage <= 0.0 {
            return Err(ConfigError::ReferenceVoltage(reference_voltage));
        }

        if chip_select > MAX_CHIP_SELECT {
            return Err(ConfigError::ChipSelect(chip_select));
        }

        Ok(Self {
            chip,
            chip_select,
            reference_voltage,
        })
    }

    pub fn chip(&self) -> Chip {
        self.chip
    }

    pub fn family(&self) -> Family {
        self.chip.family()
    }

    pub fn chip_select(&self) -> u8 {
        self.chip_select
    }

    pub fn reference_voltage(&self) -> f32 {
        self.reference_voltage
    }

    pub fn channel_count(&self) -> u8 {
        self.chip.channel_count()
    }

    pub fn resolution(&self) -> u8 {
        self.chip.resolution()
    }

    /// Largest raw reading, 2<sup>resolution</sup> - 1.
    pub fn max_raw(&self) -> u16 {
        (1 << self.resolution()) - 1
    }

    /// Rejects channels the chip does not have.
    pub fn check_channel<E>(&self, channel: u8) -> Result<(), Error<E>> {
        let count = self.channel_count();

        if channel < count {
            Ok(())
        } else {
            Err(Error::InvalidChannel { channel, count })
        }
    }

    /// Scales a raw reading to [0, 1].
    pub fn to_fraction(&self, raw: u16) -> f32 {
        f32::from(raw.min(self.max_raw())) / f32::from(self.max_raw())
    }

    /// Scales a raw reading to [0, V<sub>REF</sub>].
    pub fn to_voltage(&self, raw: u16) -> f32 {
        self.to_fraction(raw) * self.reference_voltage
    }
}

impl From<Chip> for DeviceVariant {
    /// Wires `chip` with the default [`Config`].
    fn from(chip: Chip) -> Self {
        let Config {
            chip_select,
            reference_voltage,
        } = Config::default();

        Self {
            chip,
            chip_select,
            reference_voltage,
        }
    }
}
