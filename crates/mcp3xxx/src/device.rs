use core::fmt;
use core::ops::Range;

use tracing::{debug, trace};

use crate::{DeviceVariant, Error, Frame, Transport, FRAME_LEN};

/// Most channels any supported chip provides.
pub const MAX_CHANNELS: usize = 8;

/// Driver for any supported chip, configured by its [`DeviceVariant`].
pub struct Mcp3xxx<SPI> {
    spi: SPI,
    variant: DeviceVariant,
}

impl<SPI: Transport> Mcp3xxx<SPI> {
    /// Creates a new driver from an SPI peripheral.
    /// Please ensure the SPI bus is in SPI mode 0, aka (0, 0).
    pub fn new(spi: SPI, variant: DeviceVariant) -> Self {
        Self { spi, variant }
    }

    pub fn variant(&self) -> &DeviceVariant {
        &self.variant
    }

    /// Releases the SPI peripheral.
    pub fn release(self) -> SPI {
        self.spi
    }

    /// Every valid channel index.
    pub fn channels(&self) -> Range<u8> {
        0..self.variant.channel_count()
    }

    /// Runs one conversion and returns the raw reading.
    ///
    /// The channel is checked before anything is sent. Failed or short transfers are
    /// reported as-is and never retried.
    pub fn read_raw(&mut self, channel: u8, differential: bool) -> Result<u16, Error<SPI::Error>> {
        if let Err(error) = self.variant.check_channel(channel) {
            debug!(chip = self.variant.chip().name(), channel, "rejected channel");
            return Err(error);
        }

        let family = self.variant.family();
        let request = family.encode(channel, differential);
        let mut response: Frame = [0; FRAME_LEN];

        let received = self
            .spi
            .transfer(&mut response, &request)
            .map_err(Error::Transport)?;

        if received < FRAME_LEN {
            debug!(chip = self.variant.chip().name(), channel, received, "short response");
            return Err(Error::ShortResponse { received });
        }

        let raw = family.decode(&response);

        trace!(chip = self.variant.chip().name(), channel, differential, raw, "sampled");

        Ok(raw)
    }

    /// Read a channel and return the raw value in single-ended mode.
    pub fn read(&mut self, channel: u8) -> Result<u16, Error<SPI::Error>> {
        self.read_raw(channel, false)
    }

    /// Read a channel pair and return the raw value in differential mode.
    pub fn read_differential(&mut self, channel: u8) -> Result<u16, Error<SPI::Error>> {
        self.read_raw(channel, true)
    }

    /// Single-ended reading scaled to [0, 1].
    pub fn read_fraction(&mut self, channel: u8) -> Result<f32, Error<SPI::Error>> {
        let raw = self.read(channel)?;

        Ok(self.variant.to_fraction(raw))
    }

    /// Single-ended reading in volts.
    pub fn read_voltage(&mut self, channel: u8) -> Result<f32, Error<SPI::Error>> {
        let raw = self.read(channel)?;

        Ok(self.variant.to_voltage(raw))
    }

    /// Reads every channel in index order. The first failure aborts the sweep.
    pub fn read_all(&mut self, differential: bool) -> Result<Readings, Error<SPI::Error>> {
        let mut readings = Readings::default();

        for channel in self.channels() {
            readings.push(self.read_raw(channel, differential)?);
        }

        Ok(readings)
    }
}

impl<SPI> fmt::Display for Mcp3xxx<SPI> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(chip={})",
            self.variant.chip(),
            self.variant.chip_select()
        )
    }
}

/// Raw readings for every channel of a chip, in channel order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Readings {
    values: [u16; MAX_CHANNELS],
    len: usize,
}

impl Readings {
    fn push(&mut self, value: u16) {
        self.values[self.len] = value;
        self.len += 1;
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.values[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.as_slice().iter().copied()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Counting, FakeChip, Truncating};
    use crate::{Chip, Config};

    #[test]
    fn reads_each_family() {
        for chip in Chip::ALL {
            let values = [0, 1, 512, 1023, 7, 300, 900, 1000].map(|v| {
                if chip.resolution() == 12 {
                    v * 4
                } else {
                    v
                }
            });

            let mut adc = Mcp3xxx::new(FakeChip::new(chip, values), chip.into());

            for channel in adc.channels() {
                assert_eq!(adc.read(channel), Ok(values[channel as usize]), "{chip}");
            }
        }
    }

    #[test]
    fn differential_flag_reaches_the_wire() {
        let mut adc = Mcp3xxx::new(FakeChip::new(Chip::Mcp3208, [11; 8]), Chip::Mcp3208.into());

        assert_eq!(adc.read_differential(6), Ok(11));
        assert_eq!(adc.release().last_request, Some((6, false)));

        let mut adc = Mcp3xxx::new(FakeChip::new(Chip::Mcp3002, [11; 8]), Chip::Mcp3002.into());

        assert_eq!(adc.read(1), Ok(11));
        assert_eq!(adc.release().last_request, Some((1, true)));
    }

    #[test]
    fn invalid_channel_sends_nothing() {
        let mut adc = Mcp3xxx::new(Counting::default(), Chip::Mcp3004.into());

        assert_eq!(
            adc.read(8),
            Err(Error::InvalidChannel {
                channel: 8,
                count: 4
            })
        );
        assert_eq!(adc.read_raw(4, true).map_err(|e| e.is_transport_failure()), Err(false));
        assert_eq!(adc.release().transfers, 0);
    }

    #[test]
    fn short_response_is_a_transport_failure() {
        let mut adc = Mcp3xxx::new(Truncating(2), Chip::Mcp3008.into());

        let error = adc.read(0).unwrap_err();

        assert_eq!(error, Error::ShortResponse { received: 2 });
        assert!(error.is_transport_failure());
    }

    #[test]
    fn transport_errors_propagate() {
        let mut adc = Mcp3xxx::new(Counting::failing(), Chip::Mcp3008.into());

        let error = adc.read(3).unwrap_err();

        assert!(matches!(error, Error::Transport(_)));
        assert_eq!(adc.release().transfers, 1);
    }

    #[test]
    fn scaled_reads() {
        let variant = DeviceVariant::new(
            Chip::Mcp3008,
            Config {
                chip_select: 1,
                reference_voltage: 5.0,
            },
        )
        .unwrap();
        let mut adc = Mcp3xxx::new(FakeChip::new(Chip::Mcp3008, [0, 1023, 0, 0, 0, 0, 0, 0]), variant);

        assert_eq!(adc.read_voltage(0), Ok(0.0));
        assert_eq!(adc.read_voltage(1), Ok(5.0));
        assert_eq!(adc.read_fraction(1), Ok(1.0));
    }

    #[test]
    fn read_all_in_channel_order() {
        let mut adc = Mcp3xxx::new(
            FakeChip::new(Chip::Mcp3204, [4095, 2048, 1, 0, 9, 9, 9, 9]),
            Chip::Mcp3204.into(),
        );

        let readings = adc.read_all(false).unwrap();

        assert_eq!(readings.len(), 4);
        assert_eq!(readings.as_slice(), &[4095, 2048, 1, 0]);
    }

    #[test]
    fn read_all_stops_at_first_failure() {
        let mut adc = Mcp3xxx::new(Counting::failing(), Chip::Mcp3008.into());

        assert!(adc.read_all(false).is_err());
        assert_eq!(adc.release().transfers, 1);
    }

    #[test]
    fn display_names_chip_and_line() {
        let variant = DeviceVariant::new(
            Chip::Mcp3204,
            Config {
                chip_select: 1,
                ..Config::default()
            },
        )
        .unwrap();
        let adc = Mcp3xxx::new(Counting::default(), variant);

        assert_eq!(format!("{adc}"), "MCP3204(chip=1)");
    }
}
