use embedded_hal::spi::{Mode, SpiDevice, MODE_0};

/// SPI mode every supported chip expects, aka (0, 0).
pub const SPI_MODE: Mode = MODE_0;

/// Word size of every transfer.
pub const SPI_BITS_PER_WORD: u8 = 8;

/// Clock used for conversions, slow enough for any supply voltage the parts accept.
pub const SPI_SPEED_HZ: u32 = 10_000;

/// Full-duplex byte exchange with a single selected chip.
///
/// Every [`SpiDevice`] is a transport. Implement this directly for buses that can
/// report clocking in fewer bytes than requested.
pub trait Transport {
    /// Bus error.
    type Error;

    /// Clocks out `write` while filling `read`, returning how many bytes were received.
    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<usize, Self::Error>;
}

impl<SPI: SpiDevice> Transport for SPI {
    type Error = SPI::Error;

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<usize, Self::Error> {
        SpiDevice::transfer(self, read, write)?;

        Ok(read.len())
    }
}
