//! # ServiceNow API Client
//!
//! ServiceNow Table API integration for deskhand: translates an
//! [`IssueFilter`](deskhand_core::IssueFilter) into an encoded query and reads
//! matching records from the `incident` table.

mod client;
pub mod consts;
mod endpoints;
pub mod models;
pub mod query;

pub use client::{ServiceNowClient, create_servicenow_client};
pub use models::{ServiceNowAuth, ServiceNowIncident, TableResponse};
pub use query::build_encoded_query;
