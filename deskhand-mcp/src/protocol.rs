//! MCP protocol message types and JSON-RPC envelopes

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The only JSON-RPC version we speak
pub const JSONRPC_VERSION: &str = "2.0";

/// Protocol revisions we can answer `initialize` with, oldest first
pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] = &["2024-11-05", "2025-03-26", "2025-06-18"];

/// Revision offered when the client asks for one we do not know
pub const LATEST_PROTOCOL_VERSION: &str = "2025-06-18";

/// JSON-RPC request message. A missing `id` makes it a notification; an
/// explicit `"id": null` is kept as `Some(Value::Null)` and still answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
  pub jsonrpc: String,
  #[serde(default, deserialize_with = "present_id", skip_serializing_if = "Option::is_none")]
  pub id: Option<Value>,
  pub method: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub params: Option<Value>,
}

impl JsonRpcRequest {
  pub const fn is_notification(&self) -> bool {
    self.id.is_none()
  }
}

/// Only called when `id` is present, so `null` maps to `Some(Value::Null)`.
fn present_id<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
  D: Deserializer<'de>,
{
  Value::deserialize(deserializer).map(Some)
}

/// JSON-RPC response message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
  pub jsonrpc: String,
  pub id: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub result: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
  pub fn success(id: Value, result: Value) -> Self {
    Self {
      jsonrpc: JSONRPC_VERSION.to_string(),
      id: Some(id),
      result: Some(result),
      error: None,
    }
  }

  /// Error response; `id` is `None` (serialized as `null`) when the request
  /// could not be read far enough to know it.
  pub fn error(id: Option<Value>, error: JsonRpcError) -> Self {
    Self {
      jsonrpc: JSONRPC_VERSION.to_string(),
      id,
      result: None,
      error: Some(error),
    }
  }
}

/// JSON-RPC error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
  pub code: i32,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<Value>,
}

impl JsonRpcError {
  pub const PARSE_ERROR: i32 = -32700;
  pub const INVALID_REQUEST: i32 = -32600;
  pub const METHOD_NOT_FOUND: i32 = -32601;
  pub const INVALID_PARAMS: i32 = -32602;
  pub const INTERNAL_ERROR: i32 = -32603;
  /// Server-defined: HTTP method other than POST on the MCP endpoint
  pub const METHOD_NOT_ALLOWED: i32 = -32000;

  pub fn new(code: i32, message: impl Into<String>) -> Self {
    Self {
      code,
      message: message.into(),
      data: None,
    }
  }

  pub fn parse_error(message: impl Into<String>) -> Self {
    Self::new(Self::PARSE_ERROR, message)
  }

  pub fn invalid_request(message: impl Into<String>) -> Self {
    Self::new(Self::INVALID_REQUEST, message)
  }

  pub fn method_not_found(message: impl Into<String>) -> Self {
    Self::new(Self::METHOD_NOT_FOUND, message)
  }

  pub fn invalid_params(message: impl Into<String>) -> Self {
    Self::new(Self::INVALID_PARAMS, message)
  }

  pub fn internal_error(message: impl Into<String>) -> Self {
    Self::new(Self::INTERNAL_ERROR, message)
  }

  pub fn method_not_allowed() -> Self {
    Self::new(Self::METHOD_NOT_ALLOWED, "Method not allowed.")
  }
}

/// MCP server capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCapabilities {
  pub tools: ToolsCapability,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCapability {
  #[serde(rename = "listChanged")]
  pub list_changed: bool,
}

/// Initialize request parameters. Only the protocol version matters to us.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitializeParams {
  #[serde(rename = "protocolVersion", default)]
  pub protocol_version: Option<String>,
  #[serde(rename = "clientInfo", default, skip_serializing_if = "Option::is_none")]
  pub client_info: Option<ClientInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
  pub name: String,
  #[serde(default)]
  pub version: String,
}

/// Initialize response result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResult {
  #[serde(rename = "protocolVersion")]
  pub protocol_version: String,
  pub capabilities: ServerCapabilities,
  #[serde(rename = "serverInfo")]
  pub server_info: ServerInfo,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub instructions: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
  pub name: String,
  pub version: String,
}

impl Default for ServerInfo {
  fn default() -> Self {
    Self {
      name: env!("CARGO_PKG_NAME").to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
    }
  }
}

/// Tool definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
  pub name: String,
  pub description: String,
  #[serde(rename = "inputSchema")]
  pub input_schema: Value,
}

/// Tool call parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolParams {
  pub name: String,
  #[serde(default)]
  pub arguments: Option<Value>,
}

/// Tool call result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolResult {
  pub content: Vec<ToolContent>,
  #[serde(rename = "isError")]
  pub is_error: bool,
}

impl CallToolResult {
  pub fn text(text: impl Into<String>) -> Self {
    Self {
      content: vec![ToolContent::Text { text: text.into() }],
      is_error: false,
    }
  }

  pub fn error(message: impl Into<String>) -> Self {
    Self {
      content: vec![ToolContent::Text { text: message.into() }],
      is_error: true,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
  #[serde(rename = "text")]
  Text { text: String },
}

/// List tools result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListToolsResult {
  pub tools: Vec<Tool>,
}
