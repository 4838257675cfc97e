use core::fmt;

/// Failure while taking a reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The channel is not addressable on this chip. Nothing was sent.
    InvalidChannel {
        /// Requested channel.
        channel: u8,
        /// Channels the chip provides.
        count: u8,
    },
    /// The SPI transfer itself failed.
    Transport(E),
    /// The transfer completed but clocked in fewer bytes than a full response.
    ShortResponse {
        /// Bytes actually received.
        received: usize,
    },
}

impl<E> Error<E> {
    /// `true` when the failure came from the bus rather than the request.
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::ShortResponse { .. })
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidChannel { channel, count } => {
                write!(f, "channel {channel} is out of range for a {count} channel ADC")
            }
            Error::Transport(error) => write!(f, "SPI transfer failed: {error:?}"),
            Error::ShortResponse { received } => write!(
                f,
                "SPI transfer returned {received} bytes, expected {}",
                crate::FRAME_LEN
            ),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

/// Rejected construction parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Reference voltage must be finite and above zero.
    ReferenceVoltage(f32),
    /// No such chip select line.
    ChipSelect(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReferenceVoltage(vref) => {
                write!(f, "reference voltage must be positive, got {vref}")
            }
            ConfigError::ChipSelect(line) => write!(
                f,
                "chip select line {line} does not exist, expected 0 to {}",
                crate::MAX_CHIP_SELECT
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
