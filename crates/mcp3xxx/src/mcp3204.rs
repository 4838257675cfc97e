//! MCP3204: four 12-bit channels, or two differential pairs.

typed_driver! {
    /// MCP3204 driver
    Mcp3204, Chip::Mcp3204, [CH0 = 0, CH1 = 1, CH2 = 2, CH3 = 3]
}
