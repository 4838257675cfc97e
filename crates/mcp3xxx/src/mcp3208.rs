//! MCP3208: eight 12-bit channels, or four differential pairs.

typed_driver! {
    /// MCP3208 driver
    Mcp3208, Chip::Mcp3208,
    [CH0 = 0, CH1 = 1, CH2 = 2, CH3 = 3, CH4 = 4, CH5 = 5, CH6 = 6, CH7 = 7]
}
