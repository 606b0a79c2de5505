use anyhow::{Context, Result};
use deskhand_core::ServiceNowConfig;
use deskhand_core::http::{basic_auth_header, build_client};
use reqwest::Client;

use crate::consts::USER_AGENT;
use crate::models::ServiceNowAuth;

/// Represents a ServiceNow Table API client for a single instance
pub struct ServiceNowClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
}

impl ServiceNowClient {
  /// Create a new ServiceNow client
  pub fn new(base_url: &str, auth: &ServiceNowAuth) -> Result<Self> {
    let header = basic_auth_header(&auth.username, &auth.password)?;
    let client = build_client(USER_AGENT, Some(header))?;
    Ok(Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
    })
  }

  /// Base URL of the instance this client talks to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

/// Create a ServiceNow client from startup configuration
pub fn create_servicenow_client(config: &ServiceNowConfig) -> Result<ServiceNowClient> {
  let base_url = config.base_url().context("Invalid ServiceNow instance")?;
  let auth = ServiceNowAuth {
    username: config.username.clone(),
    password: config.password.clone(),
  };

  ServiceNowClient::new(&base_url, &auth)
}
