//! # Jira API Client
//!
//! Jira Cloud REST integration for deskhand: translates an
//! [`IssueFilter`](deskhand_core::IssueFilter) into JQL and runs it against
//! the issue search endpoint.

mod client;
pub mod consts;
mod endpoints;
pub mod jql;
pub mod models;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
pub use jql::build_jql;
// Re-export models
pub use models::{JiraAuth, JiraIssue, JiraIssueFields, JiraIssueStatus, JiraSearchResults};
