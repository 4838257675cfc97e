//! MCP3002: two 10-bit channels, or one differential pair.

typed_driver! {
    /// MCP3002 driver
    Mcp3002, Chip::Mcp3002, [CH0 = 0, CH1 = 1]
}
