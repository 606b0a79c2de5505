//! HTTP transport.
//!
//! A single stateless endpoint: every `POST /mcp` carries one JSON-RPC message
//! and gets at most one JSON-RPC message back.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::dispatch::Dispatcher;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};

/// Path of the MCP endpoint
pub const MCP_PATH: &str = "/mcp";

/// Build the router serving `dispatcher` at [`MCP_PATH`].
pub fn router<C: Send + Sync + 'static>(dispatcher: Arc<Dispatcher<C>>) -> Router {
  Router::new()
    .route(MCP_PATH, post(handle_post::<C>).fallback(method_not_allowed))
    .layer(TraceLayer::new_for_http())
    .with_state(dispatcher)
}

/// Serve until SIGINT or SIGTERM.
pub async fn serve<C: Send + Sync + 'static>(addr: SocketAddr, dispatcher: Arc<Dispatcher<C>>) -> Result<()> {
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .with_context(|| format!("Failed to bind {addr}"))?;
  let local_addr = listener.local_addr().context("Failed to read listener address")?;
  info!(%local_addr, path = MCP_PATH, "Listening for MCP requests");

  axum::serve(listener, router(dispatcher))
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

  info!("Shutdown complete");
  Ok(())
}

async fn handle_post<C: Send + Sync + 'static>(State(dispatcher): State<Arc<Dispatcher<C>>>, body: Bytes) -> Response {
  let request: JsonRpcRequest = match serde_json::from_slice(&body) {
    Ok(request) => request,
    Err(e) => {
      tracing::warn!(error = %e, "Rejecting malformed JSON-RPC payload");
      return (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(JsonRpcResponse::error(None, JsonRpcError::internal_error("Internal server error"))),
      )
        .into_response();
    }
  };

  match dispatcher.handle(request).await {
    Some(response) => (StatusCode::OK, Json(response)).into_response(),
    None => StatusCode::ACCEPTED.into_response(),
  }
}

async fn method_not_allowed() -> Response {
  (
    StatusCode::METHOD_NOT_ALLOWED,
    Json(JsonRpcResponse::error(None, JsonRpcError::method_not_allowed())),
  )
    .into_response()
}

async fn shutdown_signal() {
  tokio::select! {
    _ = tokio::signal::ctrl_c() => {
      info!("Received SIGINT, shutting down...");
    }
    () = terminate() => {
      info!("Received SIGTERM, shutting down...");
    }
  }
}

#[cfg(unix)]
async fn terminate() {
  use tokio::signal::unix::{SignalKind, signal};

  match signal(SignalKind::terminate()) {
    Ok(mut sigterm) => {
      sigterm.recv().await;
    }
    Err(e) => {
      tracing::warn!(error = %e, "Failed to install SIGTERM handler");
      std::future::pending::<()>().await;
    }
  }
}

#[cfg(not(unix))]
async fn terminate() {
  std::future::pending::<()>().await;
}
