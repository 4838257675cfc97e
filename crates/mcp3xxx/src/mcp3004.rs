//! MCP3004: four 10-bit channels, or two differential pairs.

typed_driver! {
    /// MCP3004 driver
    Mcp3004, Chip::Mcp3004, [CH0 = 0, CH1 = 1, CH2 = 2, CH3 = 3]
}
