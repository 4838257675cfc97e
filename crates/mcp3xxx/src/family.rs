//! Bit-level request encoding and response decoding for each MCP3xxx family.
//!
//! Every conversion is a single 3-byte full-duplex exchange. Where the request
//! bits sit in that exchange, and where the result comes back, differs between
//! families, so an encoder and decoder must always come from the same [`Family`].

/// Number of bytes clocked in each direction for a single conversion.
pub const FRAME_LEN: usize = 3;

/// A request or response for a single conversion.
pub type Frame = [u8; FRAME_LEN];

/// Start bit that begins every conversion request.
const START: u8 = 0b0000_0001;

/// Wire layout shared by a group of chips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// 10-bit, 2-channel (MCP3002).
    Mcp3002,
    /// 10-bit, 4 or 8 channel (MCP3004, MCP3008).
    Mcp300x,
    /// 12-bit, 4 or 8 channel (MCP3204, MCP3208).
    Mcp320x,
}

impl Family {
    /// Builds the request that starts a conversion on `channel`.
    ///
    /// `channel` must already be valid for the chip. Only the bits that fit the
    /// family's channel field are used.
    pub fn encode(self, channel: u8, differential: bool) -> Frame {
        let single_ended = u8::from(!differential);

        match self {
            Family::Mcp3002 => [START, single_ended << 7 | (channel & 0b1) << 6, 0],
            Family::Mcp300x => [
                START,
                single_ended << 7
                    | bit(channel, 2) << 6
                    | bit(channel, 1) << 5
                    | bit(channel, 0) << 4,
                0,
            ],
            Family::Mcp320x => [
                START << 2 | single_ended << 1 | bit(channel, 2),
                bit(channel, 1) << 7 | bit(channel, 0) << 6,
                0,
            ],
        }
    }

    /// Bits per reading.
    pub const fn resolution(self) -> u8 {
        match self {
            Family::Mcp3002 | Family::Mcp300x => 10,
            Family::Mcp320x => 12,
        }
    }

    /// Extracts the reading, at this family's resolution, from a response.
    pub fn decode(self, response: &Frame) -> u16 {
        let [b0, b1, b2] = *response;
        let resolution = self.resolution();

        match self {
            // One empty and one null bit lead the result, so it straddles all three bytes
            Family::Mcp3002 => {
                let stream = u32::from(b0) << 14 | u32::from(b1) << 6 | u32::from(b2) >> 2;

                (stream & mask(resolution)) as u16
            }
            Family::Mcp300x | Family::Mcp320x => {
                let msb_mask = mask(resolution - 8) as u8;

                u16::from(b1 & msb_mask) << 8 | u16::from(b2)
            }
        }
    }
}

fn bit(value: u8, index: u8) -> u8 {
    (value >> index) & 0b1
}

/// Mask selecting the lowest `bits` bits.
fn mask(bits: u8) -> u32 {
    (1 << bits) - 1
}
