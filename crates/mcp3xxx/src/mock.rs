//! Test doubles standing in for a wired chip.

use embedded_hal::spi::{self, ErrorKind, ErrorType, Operation, SpiDevice};

use crate::{Chip, Family, Transport};

#[derive(Debug, PartialEq)]
pub struct MockError;

impl spi::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Answers every request the way the real chip would, with `values` on its inputs.
pub struct FakeChip {
    chip: Chip,
    values: [u16; 8],
    /// Channel and single-ended flag of the last request.
    pub last_request: Option<(u8, bool)>,
}

impl FakeChip {
    pub fn new(chip: Chip, values: [u16; 8]) -> Self {
        Self {
            chip,
            values,
            last_request: None,
        }
    }

    fn respond(&mut self, request: &[u8], response: &mut [u8]) {
        assert_eq!(request.len(), 3);
        assert_eq!(response.len(), 3);

        let (channel, single_ended) = match self.chip.family() {
            Family::Mcp3002 => {
                assert_eq!(request[0], 0b0000_0001, "Missing start flag");
                ((request[1] >> 6) & 0b1, request[1] >> 7 == 1)
            }
            Family::Mcp300x => {
                assert_eq!(request[0], 0b0000_0001, "Missing start flag");
                ((request[1] >> 4) & 0b111, request[1] >> 7 == 1)
            }
            Family::Mcp320x => {
                assert_eq!(request[0] >> 2, 0b0000_0001, "Missing start flag");
                ((request[0] & 0b1) << 2 | request[1] >> 6, (request[0] >> 1) & 0b1 == 1)
            }
        };

        self.last_request = Some((channel, single_ended));

        let value = self.values[channel as usize];

        // Bits outside the result are left high so decoding has to mask them
        let frame = match self.chip.family() {
            Family::Mcp3002 => [0xFF, (value >> 6) as u8, (value << 2) as u8],
            Family::Mcp300x => [0xFF, 0b1111_1000 | (value >> 8) as u8, value as u8],
            Family::Mcp320x => [0xFF, 0b1110_0000 | (value >> 8) as u8, value as u8],
        };

        response.copy_from_slice(&frame);
    }
}

impl ErrorType for FakeChip {
    type Error = MockError;
}

impl SpiDevice for FakeChip {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        assert_eq!(operations.len(), 1);

        match &mut operations[0] {
            Operation::Transfer(read, write) => self.respond(&**write, &mut **read),
            _ => panic!("Not an expected operation"),
        }

        Ok(())
    }
}

/// Counts transfers, optionally failing every one of them.
#[derive(Default)]
pub struct Counting {
    pub transfers: usize,
    fail: bool,
}

impl Counting {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl ErrorType for Counting {
    type Error = MockError;
}

impl SpiDevice for Counting {
    fn transaction(&mut self, _: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        self.transfers += 1;

        if self.fail {
            Err(MockError)
        } else {
            Ok(())
        }
    }
}

/// A bus that only ever clocks in the given number of bytes.
pub struct Truncating(pub usize);

impl Transport for Truncating {
    type Error = MockError;

    fn transfer(&mut self, read: &mut [u8], _: &[u8]) -> Result<usize, Self::Error> {
        let received = self.0.min(read.len());

        read[..received].fill(0xFF);

        Ok(received)
    }
}
