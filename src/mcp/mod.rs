//! Model Context Protocol (MCP) server implementation.
//!
//! This module provides an MCP server that exposes translation status to AI
//! assistants. The server implements the MCP specification for tool calling.
//!
//! ## Module Structure
//!
//! - `helpers`: Context loading, pagination and result serialization
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific type definitions

mod helpers;
mod server;
pub mod types;

pub use server::{StarlightI18nMcpServer, run_server};
