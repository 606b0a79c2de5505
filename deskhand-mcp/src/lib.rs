//! # deskhand-mcp
//!
//! MCP tool server exposing joke providers, Jira issue search and ServiceNow
//! incident search. The binary wires these modules together; they are a
//! library so the HTTP transport can be exercised from integration tests.

pub mod context;
pub mod dispatch;
pub mod protocol;
pub mod registry;
pub mod server;
pub mod stdio;
pub mod tools;

pub use context::ServerContext;
pub use dispatch::{DispatchError, Dispatcher};
pub use registry::{RegistryError, ToolDescriptor, ToolRegistry};
