//! # Jira API Endpoints
//!
//! Endpoint implementations for the Jira resources deskhand reads.

pub mod search;
