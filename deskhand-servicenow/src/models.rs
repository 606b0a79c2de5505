use serde::Deserialize;

/// ServiceNow Basic authentication credentials
#[derive(Clone)]
pub struct ServiceNowAuth {
  pub username: String,
  pub password: String,
}

/// Envelope returned by every Table API list call
#[derive(Debug, Deserialize)]
pub struct TableResponse<T> {
  pub result: Vec<T>,
}

/// Represents a record from the `incident` table
#[derive(Debug, Deserialize)]
pub struct ServiceNowIncident {
  pub number: String,
  #[serde(default)]
  pub short_description: String,
}
