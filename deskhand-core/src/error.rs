//! Error taxonomy for tool handlers.
//!
//! A handler either produces text or fails with a [`ToolError`]. Validation
//! failures are raised before any network traffic; upstream failures wrap
//! whatever the external API told us. Neither kind is retried.

use std::fmt::Display;

use thiserror::Error;

/// Failure of a single tool invocation.
#[derive(Debug, Error)]
pub enum ToolError {
  /// Malformed or missing filter input. Raised before any network call.
  #[error("Invalid arguments: {0}")]
  Validation(String),

  /// The external API rejected the request or answered with something we
  /// could not understand.
  #[error(transparent)]
  Upstream(#[from] UpstreamError),
}

impl ToolError {
  pub fn validation(message: impl Into<String>) -> Self {
    Self::Validation(message.into())
  }
}

/// Failure talking to one of the external APIs.
#[derive(Debug, Error)]
pub enum UpstreamError {
  /// Non-success HTTP status. `body` is the raw response text.
  #[error("{service} API error: HTTP {status} - {body}")]
  Status {
    service: &'static str,
    status: u16,
    body: String,
  },

  /// Success status, but the body did not match the expected shape.
  #[error("Failed to parse {service} response: {message}")]
  Malformed { service: &'static str, message: String },

  /// No HTTP response was received at all.
  #[error("Failed to reach {service}: {message}")]
  Transport { service: &'static str, message: String },
}

impl UpstreamError {
  pub fn malformed(service: &'static str, err: impl Display) -> Self {
    Self::Malformed {
      service,
      message: err.to_string(),
    }
  }

  pub fn transport(service: &'static str, err: impl Display) -> Self {
    Self::Transport {
      service,
      message: err.to_string(),
    }
  }

  /// HTTP status carried by the error, if the upstream answered at all.
  pub const fn status(&self) -> Option<u16> {
    match self {
      Self::Status { status, .. } => Some(*status),
      Self::Malformed { .. } | Self::Transport { .. } => None,
    }
  }
}
