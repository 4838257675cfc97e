use core::fmt;
use core::str::FromStr;

use crate::family::Family;

/// Supported MCP3xxx parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Chip {
    /// 2 channels, 10 bits.
    Mcp3002,
    /// 4 channels, 10 bits.
    Mcp3004,
    /// 8 channels, 10 bits.
    Mcp3008,
    /// 4 channels, 12 bits.
    Mcp3204,
    /// 8 channels, 12 bits.
    Mcp3208,
}

impl Chip {
    /// Every supported part.
    pub const ALL: [Chip; 5] = [
        Chip::Mcp3002,
        Chip::Mcp3004,
        Chip::Mcp3008,
        Chip::Mcp3204,
        Chip::Mcp3208,
    ];

    /// Wire layout used by this part.
    pub const fn family(self) -> Family {
        match self {
            Chip::Mcp3002 => Family::Mcp3002,
            Chip::Mcp3004 | Chip::Mcp3008 => Family::Mcp300x,
            Chip::Mcp3204 | Chip::Mcp3208 => Family::Mcp320x,
        }
    }

    /// Number of addressable channels.
    pub const fn channel_count(self) -> u8 {
        match self {
            Chip::Mcp3002 => 2,
            Chip::Mcp3004 | Chip::Mcp3204 => 4,
            Chip::Mcp3008 | Chip::Mcp3208 => 8,
        }
    }

    /// Bits per reading.
    pub const fn resolution(self) -> u8 {
        self.family().resolution()
    }

    /// Part number as printed on the package.
    pub const fn name(self) -> &'static str {
        match self {
            Chip::Mcp3002 => "MCP3002",
            Chip::Mcp3004 => "MCP3004",
            Chip::Mcp3008 => "MCP3008",
            Chip::Mcp3204 => "MCP3204",
            Chip::Mcp3208 => "MCP3208",
        }
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Chip {
    type Err = ParseChipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chip::ALL
            .into_iter()
            .find(|chip| chip.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(ParseChipError)
    }
}

/// Returned when a part name is not one of the supported chips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseChipError;

impl fmt::Display for ParseChipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of MCP3002, MCP3004, MCP3008, MCP3204, MCP3208")
    }
}

impl core::error::Error for ParseChipError {}
