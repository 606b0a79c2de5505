//! Shared server context available to all tool handlers.

use anyhow::{Context, Result};
use deskhand_core::Config;
use deskhand_jira::{JiraClient, create_jira_client};
use deskhand_jokes::{JokeClient, JokeEndpoints};
use deskhand_servicenow::{ServiceNowClient, create_servicenow_client};

/// Backend clients, built once at startup and shared read-only by every
/// request.
pub struct ServerContext {
  pub jira: JiraClient,
  pub servicenow: ServiceNowClient,
  pub jokes: JokeClient,
  /// Scope of every ServiceNow search
  pub servicenow_instance: String,
}

impl ServerContext {
  pub const fn new(
    jira: JiraClient,
    servicenow: ServiceNowClient,
    jokes: JokeClient,
    servicenow_instance: String,
  ) -> Self {
    Self {
      jira,
      servicenow,
      jokes,
      servicenow_instance,
    }
  }

  /// Build every backend client from startup configuration.
  pub fn from_config(config: &Config) -> Result<Self> {
    let jira = create_jira_client(&config.jira).context("Failed to create Jira client")?;
    let servicenow = create_servicenow_client(&config.servicenow).context("Failed to create ServiceNow client")?;
    let jokes = JokeClient::new(JokeEndpoints::default()).context("Failed to create joke client")?;

    Ok(Self::new(jira, servicenow, jokes, config.servicenow.instance.clone()))
  }
}

#[cfg(test)]
mod tests {
  use deskhand_core::{JiraConfig, ServiceNowConfig};

  use super::*;

  #[test]
  fn test_from_config() -> Result<()> {
    let config = Config {
      jira: JiraConfig {
        domain: "acme.atlassian.net".to_string(),
        email: "bot@acme.test".to_string(),
        api_token: "token".to_string(),
      },
      servicenow: ServiceNowConfig {
        instance: "acme".to_string(),
        username: "admin".to_string(),
        password: "secret".to_string(),
      },
    };

    let context = ServerContext::from_config(&config)?;

    assert_eq!(context.jira.base_url(), "https://acme.atlassian.net");
    assert_eq!(context.servicenow.base_url(), "https://acme.service-now.com");
    assert_eq!(context.servicenow_instance, "acme");
    assert_eq!(context.jokes.endpoints(), &JokeEndpoints::default());

    Ok(())
  }
}
