//! JSON-RPC dispatch.
//!
//! Turns one inbound [`JsonRpcRequest`] into at most one tool invocation and
//! at most one [`JsonRpcResponse`]. Transports own framing; everything about
//! method routing and error mapping lives here.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::protocol::{
  CallToolParams, CallToolResult, InitializeParams, InitializeResult, JSONRPC_VERSION, JsonRpcError, JsonRpcRequest,
  JsonRpcResponse, LATEST_PROTOCOL_VERSION, ListToolsResult, SUPPORTED_PROTOCOL_VERSIONS, ServerCapabilities,
  ServerInfo, ToolsCapability,
};
use crate::registry::ToolRegistry;

/// Failures that are answered with a protocol-level error. The handler is
/// never invoked when one of these is returned.
#[derive(Debug, Error)]
pub enum DispatchError {
  #[error("Unknown tool: {0}")]
  UnknownTool(String),

  #[error("Invalid arguments for tool '{tool}': {source}")]
  InvalidArguments {
    tool: String,
    #[source]
    source: serde_json::Error,
  },
}

impl From<&DispatchError> for JsonRpcError {
  fn from(err: &DispatchError) -> Self {
    match err {
      DispatchError::UnknownTool(_) => Self::method_not_found(err.to_string()),
      DispatchError::InvalidArguments { .. } => Self::invalid_params(err.to_string()),
    }
  }
}

pub struct Dispatcher<C> {
  registry: ToolRegistry<C>,
  context: Arc<C>,
  server_info: ServerInfo,
}

impl<C: Send + Sync + 'static> Dispatcher<C> {
  pub fn new(registry: ToolRegistry<C>, context: Arc<C>) -> Self {
    Self {
      registry,
      context,
      server_info: ServerInfo::default(),
    }
  }

  pub const fn registry(&self) -> &ToolRegistry<C> {
    &self.registry
  }

  /// Handle one message. Notifications yield `None`, even malformed ones.
  pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    let Some(id) = request.id else {
      tracing::debug!(method = %request.method, "Received notification");
      return None;
    };

    if request.jsonrpc != JSONRPC_VERSION {
      tracing::warn!(version = %request.jsonrpc, "Rejecting request with unsupported JSON-RPC version");
      return Some(JsonRpcResponse::error(
        Some(id),
        JsonRpcError::invalid_request(format!("Unsupported JSON-RPC version: {}", request.jsonrpc)),
      ));
    }

    tracing::debug!(method = %request.method, "Handling request");
    let response = match request.method.as_str() {
      "initialize" => self.initialize(id, request.params),
      "ping" => JsonRpcResponse::success(id, json!({})),
      "tools/list" => respond(
        id,
        &ListToolsResult {
          tools: self.registry.list(),
        },
      ),
      "tools/call" => self.tools_call(id, request.params).await,
      method => JsonRpcResponse::error(Some(id), JsonRpcError::method_not_found(format!("Method not found: {method}"))),
    };

    Some(response)
  }

  /// Run one tool.
  ///
  /// Missing or `null` arguments are treated as an empty object. A handler
  /// failure is still `Ok`: it becomes a result with `isError` set.
  pub async fn call_tool(&self, name: &str, arguments: Option<Value>) -> Result<CallToolResult, DispatchError> {
    let tool = self
      .registry
      .get(name)
      .ok_or_else(|| DispatchError::UnknownTool(name.to_string()))?;

    let arguments = match arguments {
      None | Some(Value::Null) => Value::Object(Map::new()),
      Some(arguments) => arguments,
    };

    let future = tool
      .prepare(Arc::clone(&self.context), arguments)
      .map_err(|source| DispatchError::InvalidArguments {
        tool: name.to_string(),
        source,
      })?;

    tracing::info!(tool = name, "Calling tool");
    match future.await {
      Ok(text) => Ok(CallToolResult::text(text)),
      Err(err) => {
        tracing::warn!(tool = name, error = %err, "Tool call failed");
        Ok(CallToolResult::error(err.to_string()))
      }
    }
  }

  fn initialize(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
    let params: InitializeParams = match params {
      None | Some(Value::Null) => InitializeParams::default(),
      Some(params) => match serde_json::from_value(params) {
        Ok(params) => params,
        Err(e) => {
          let error = JsonRpcError::invalid_params(format!("Invalid initialize params: {e}"));
          return JsonRpcResponse::error(Some(id), error);
        }
      },
    };

    let protocol_version = params
      .protocol_version
      .filter(|version| SUPPORTED_PROTOCOL_VERSIONS.contains(&version.as_str()))
      .unwrap_or_else(|| LATEST_PROTOCOL_VERSION.to_string());

    if let Some(client) = &params.client_info {
      tracing::info!(client = %client.name, version = %client.version, %protocol_version, "Client initialized");
    }

    respond(
      id,
      &InitializeResult {
        protocol_version,
        capabilities: ServerCapabilities {
          tools: ToolsCapability { list_changed: false },
        },
        server_info: self.server_info.clone(),
        instructions: Some(
          "Tools for fetching jokes, searching Jira issues and searching ServiceNow incidents.".to_string(),
        ),
      },
    )
  }

  async fn tools_call(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
    let params: CallToolParams = match params.map(serde_json::from_value::<CallToolParams>) {
      Some(Ok(params)) => params,
      Some(Err(e)) => {
        let error = JsonRpcError::invalid_params(format!("Invalid tools/call params: {e}"));
        return JsonRpcResponse::error(Some(id), error);
      }
      None => return JsonRpcResponse::error(Some(id), JsonRpcError::invalid_params("Missing tools/call params")),
    };

    match self.call_tool(&params.name, params.arguments).await {
      Ok(result) => respond(id, &result),
      Err(err) => {
        tracing::warn!(tool = %params.name, error = %err, "Rejected tool call");
        JsonRpcResponse::error(Some(id), JsonRpcError::from(&err))
      }
    }
  }
}

fn respond<T: Serialize>(id: Value, result: &T) -> JsonRpcResponse {
  match serde_json::to_value(result) {
    Ok(value) => JsonRpcResponse::success(id, value),
    Err(e) => JsonRpcResponse::error(Some(id), JsonRpcError::internal_error(format!("Failed to encode result: {e}"))),
  }
}
