//! # Deskhand Core Library
//!
//! Shared building blocks for the deskhand backends: the backend-agnostic
//! [`IssueFilter`] that the Jira and ServiceNow translators consume, the
//! startup [`Config`] sourced from the environment, the error taxonomy used by
//! every tool handler, and the small HTTP helpers each backend client needs.

pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod url;

// Re-export main types for the backend crates
pub use config::{Config, ConfigError, JiraConfig, ServiceNowConfig};
pub use error::{ToolError, UpstreamError};
pub use filter::{DEFAULT_LIMIT, FilterArgs, IssueFilter, MAX_LIMIT};
