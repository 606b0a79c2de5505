//! Startup configuration sourced from the process environment.
//!
//! All credentials are read exactly once, before the server starts accepting
//! requests. A missing value is a startup error; handlers never look at the
//! environment themselves.

use std::fmt;

use anyhow::Result;
use thiserror::Error;

use crate::url::{ensure_url_scheme, servicenow_instance_url};

/// Jira Cloud domain, e.g. `company.atlassian.net`.
pub const ENV_JIRA_DOMAIN: &str = "JIRA_DOMAIN";
/// Email address of the Jira API user.
pub const ENV_JIRA_EMAIL: &str = "JIRA_EMAIL";
/// Jira API token paired with [`ENV_JIRA_EMAIL`].
pub const ENV_JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";
/// ServiceNow instance name, e.g. `dev12345`.
pub const ENV_SERVICENOW_INSTANCE: &str = "SERVICENOW_INSTANCE";
/// ServiceNow user for Basic authentication.
pub const ENV_SERVICENOW_USERNAME: &str = "SERVICENOW_USERNAME";
/// Password for [`ENV_SERVICENOW_USERNAME`].
pub const ENV_SERVICENOW_PASSWORD: &str = "SERVICENOW_PASSWORD";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("Missing required environment variables: {}", .0.join(", "))]
  Missing(Vec<&'static str>),
}

/// Jira connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct JiraConfig {
  pub domain: String,
  pub email: String,
  pub api_token: String,
}

impl JiraConfig {
  /// `https://<domain>`, or the domain as given if it already has a scheme.
  pub fn base_url(&self) -> Result<String> {
    ensure_url_scheme(&self.domain)
  }
}

impl fmt::Debug for JiraConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("JiraConfig")
      .field("domain", &self.domain)
      .field("email", &self.email)
      .field("api_token", &"<redacted>")
      .finish()
  }
}

/// ServiceNow connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceNowConfig {
  pub instance: String,
  pub username: String,
  pub password: String,
}

impl ServiceNowConfig {
  /// `https://<instance>.service-now.com`.
  pub fn base_url(&self) -> Result<String> {
    servicenow_instance_url(&self.instance)
  }
}

impl fmt::Debug for ServiceNowConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ServiceNowConfig")
      .field("instance", &self.instance)
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .finish()
  }
}

/// Everything the server needs to reach its backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub jira: JiraConfig,
  pub servicenow: ServiceNowConfig,
}

impl Config {
  /// Read the configuration from the process environment.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Resolve the configuration through an arbitrary lookup.
  ///
  /// Values that are unset or blank are reported together in a single
  /// [`ConfigError::Missing`].
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut missing = Vec::new();
    let mut require = |name: &'static str| match lookup(name).map(|v| v.trim().to_string()) {
      Some(value) if !value.is_empty() => value,
      _ => {
        missing.push(name);
        String::new()
      }
    };

    let jira = JiraConfig {
      domain: require(ENV_JIRA_DOMAIN),
      email: require(ENV_JIRA_EMAIL),
      api_token: require(ENV_JIRA_API_TOKEN),
    };
    let servicenow = ServiceNowConfig {
      instance: require(ENV_SERVICENOW_INSTANCE),
      username: require(ENV_SERVICENOW_USERNAME),
      password: require(ENV_SERVICENOW_PASSWORD),
    };

    if !missing.is_empty() {
      return Err(ConfigError::Missing(missing));
    }

    tracing::debug!(jira = ?jira, servicenow = ?servicenow, "Loaded configuration");
    Ok(Self { jira, servicenow })
  }
}
