//! Newline-delimited JSON-RPC over stdin/stdout.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::dispatch::Dispatcher;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};

/// Serve on the process's stdin/stdout until stdin closes.
pub async fn serve_stdio<C: Send + Sync + 'static>(dispatcher: Arc<Dispatcher<C>>) -> Result<()> {
  tracing::info!("Serving MCP on stdio");
  serve_lines(&dispatcher, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// Read one message per line from `reader`, writing one response per line
/// to `writer`. Blank lines are skipped.
pub async fn serve_lines<C, R, W>(dispatcher: &Dispatcher<C>, reader: R, mut writer: W) -> Result<()>
where
  C: Send + Sync + 'static,
  R: AsyncBufRead + Unpin,
  W: AsyncWrite + Unpin,
{
  let mut lines = reader.lines();
  while let Some(line) = lines.next_line().await.context("Failed to read from input")? {
    if line.trim().is_empty() {
      continue;
    }

    let response = match serde_json::from_str::<JsonRpcRequest>(&line) {
      Ok(request) => dispatcher.handle(request).await,
      Err(e) => {
        tracing::warn!(error = %e, "Failed to parse JSON-RPC message");
        Some(JsonRpcResponse::error(None, JsonRpcError::parse_error(format!("Parse error: {e}"))))
      }
    };

    if let Some(response) = response {
      let mut encoded = serde_json::to_vec(&response).context("Failed to encode response")?;
      encoded.push(b'\n');
      writer.write_all(&encoded).await.context("Failed to write response")?;
      writer.flush().await.context("Failed to flush output")?;
    }
  }

  tracing::info!("Input closed, stopping");
  Ok(())
}

#[cfg(test)]
mod tests {
  use deskhand_core::ToolError;
  use schemars::JsonSchema;
  use serde::Deserialize;
  use serde_json::{Value, json};

  use super::*;
  use crate::registry::{ToolDescriptor, ToolRegistry};

  #[derive(Debug, Deserialize, JsonSchema)]
  struct GreetParams {
    name: String,
  }

  async fn greet(_context: Arc<()>, params: GreetParams) -> Result<String, ToolError> {
    Ok(format!("Hello, {}!", params.name))
  }

  fn dispatcher() -> Dispatcher<()> {
    let registry = ToolRegistry::new(vec![ToolDescriptor::new("greet", "Say hello", greet)]).unwrap();
    Dispatcher::new(registry, Arc::new(()))
  }

  async fn run(input: &str) -> Vec<Value> {
    let mut output = Vec::new();
    serve_lines(&dispatcher(), input.as_bytes(), &mut output).await.unwrap();

    String::from_utf8(output)
      .unwrap()
      .lines()
      .map(|line| serde_json::from_str(line).unwrap())
      .collect()
  }

  #[tokio::test]
  async fn test_one_response_per_request() {
    let input = concat!(
      r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05"}}"#,
      "\n",
      r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
      "\n\n",
      r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"greet","arguments":{"name":"Ada"}}}"#,
      "\n",
    );

    let responses = run(input).await;

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(responses[1]["id"], 2);
    assert_eq!(responses[1]["result"]["content"][0]["text"], "Hello, Ada!");
  }

  #[tokio::test]
  async fn test_unparseable_line_is_parse_error() {
    let responses = run("not json\n").await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], Value::Null);
    assert_eq!(responses[0]["error"]["code"], json!(-32700));
    assert!(
      responses[0]["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Parse error")
    );
  }
}
