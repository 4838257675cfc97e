//! MCP3008: eight 10-bit channels, or four differential pairs.

typed_driver! {
    /// MCP3008 driver
    Mcp3008, Chip::Mcp3008,
    [CH0 = 0, CH1 = 1, CH2 = 2, CH3 = 3, CH4 = 4, CH5 = 5, CH6 = 6, CH7 = 7]
}
