//! Host side of the MCP3xxx analog inputs: command line surface and polling loop.

pub mod cli;
