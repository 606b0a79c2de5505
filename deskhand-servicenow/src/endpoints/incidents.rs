//! # ServiceNow Incident Endpoint
//!
//! Reads incidents through `GET /api/now/table/incident`.

use deskhand_core::http::read_json;
use deskhand_core::{IssueFilter, UpstreamError};

use crate::client::ServiceNowClient;
use crate::consts::{INCIDENT_TABLE_PATH, SERVICE};
use crate::models::{ServiceNowIncident, TableResponse};
use crate::query::build_encoded_query;

impl ServiceNowClient {
  /// List incidents matching `filter`, at most `filter.limit()` of them.
  pub async fn list_incidents(&self, filter: &IssueFilter) -> Result<Vec<ServiceNowIncident>, UpstreamError> {
    let query = build_encoded_query(filter);
    let url = format!("{}{}", self.base_url, INCIDENT_TABLE_PATH);
    tracing::debug!(%query, limit = filter.limit(), "Listing ServiceNow incidents");

    let response = self
      .client
      .get(&url)
      .header("Accept", "application/json")
      .query(&[("sysparm_limit", filter.limit().to_string()), ("sysparm_query", query)])
      .send()
      .await
      .map_err(|e| UpstreamError::transport(SERVICE, e))?;

    let table: TableResponse<ServiceNowIncident> = read_json(SERVICE, response).await?;
    Ok(table.result)
  }
}
