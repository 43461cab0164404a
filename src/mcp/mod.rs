/// MCP protocol implementation
///
/// This module is the dashboard's presentation layer: JSON-RPC parsing,
/// tool routing and text rendering.

pub mod protocol;
pub mod server;

// Re-export main types
pub use server::McpServer;
