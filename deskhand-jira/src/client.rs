use anyhow::{Context, Result};
use deskhand_core::JiraConfig;
use deskhand_core::http::{basic_auth_header, build_client};
use reqwest::Client;

use crate::consts::USER_AGENT;
use crate::models::JiraAuth;

/// Represents a Jira API client
///
/// The Basic authentication header is computed once here and sent as a
/// default header on every request.
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
}

impl JiraClient {
  /// Create a new Jira client
  pub fn new(base_url: &str, auth: &JiraAuth) -> Result<Self> {
    let header = basic_auth_header(&auth.email, &auth.api_token)?;
    let client = build_client(USER_AGENT, Some(header))?;
    Ok(Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
    })
  }

  /// Base URL of the Jira site this client talks to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

/// Create a Jira client from startup configuration
pub fn create_jira_client(config: &JiraConfig) -> Result<JiraClient> {
  let base_url = config.base_url().context("Invalid Jira domain")?;
  let auth = JiraAuth {
    email: config.email.clone(),
    api_token: config.api_token.clone(),
  };

  JiraClient::new(&base_url, &auth)
}
