//! ServiceNow incident search tool.

use std::sync::Arc;

use deskhand_core::{FilterArgs, IssueFilter, ToolError};
use deskhand_servicenow::ServiceNowIncident;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::context::ServerContext;

pub const NO_INCIDENTS: &str = "No incidents found.";

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchServiceNowIncidentsParams {
  /// Filter by incident state (e.g. "2" for In Progress).
  pub state: Option<String>,
  /// Filter by the assigned user.
  pub assigned_to: Option<String>,
  /// Filter by priority (e.g. "1" for Critical).
  pub priority: Option<String>,
  /// Text that must appear in the short description.
  pub text: Option<String>,
  /// Maximum number of incidents to return. Defaults to 5, capped at 100.
  pub limit: Option<i64>,
}

impl SearchServiceNowIncidentsParams {
  fn into_filter_args(self, instance: &str) -> FilterArgs {
    FilterArgs {
      status: self.state,
      assignee: self.assigned_to,
      priority: self.priority,
      text: self.text,
      limit: self.limit,
      ..FilterArgs::new(instance)
    }
  }
}

pub async fn search_servicenow_incidents(
  context: Arc<ServerContext>,
  params: SearchServiceNowIncidentsParams,
) -> Result<String, ToolError> {
  let filter = IssueFilter::new(params.into_filter_args(&context.servicenow_instance))?;
  let incidents = context.servicenow.list_incidents(&filter).await?;
  Ok(format_incidents(&incidents))
}

/// One `#NUMBER: short_description` line per incident
pub fn format_incidents(incidents: &[ServiceNowIncident]) -> String {
  if incidents.is_empty() {
    return NO_INCIDENTS.to_string();
  }

  incidents
    .iter()
    .map(|incident| format!("#{}: {}", incident.number, incident.short_description))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_incidents() {
    let incidents = vec![
      ServiceNowIncident {
        number: "INC0010001".to_string(),
        short_description: "Disk full on db01".to_string(),
      },
      ServiceNowIncident {
        number: "INC0010002".to_string(),
        short_description: "VPN down".to_string(),
      },
    ];

    assert_eq!(
      format_incidents(&incidents),
      "#INC0010001: Disk full on db01\n#INC0010002: VPN down"
    );
  }

  #[test]
  fn test_format_no_incidents_uses_sentinel() {
    assert_eq!(format_incidents(&[]), NO_INCIDENTS);
  }

  #[test]
  fn test_params_scope_is_instance() {
    let params = SearchServiceNowIncidentsParams {
      state: Some(" 2 ".to_string()),
      assigned_to: Some("bob".to_string()),
      priority: Some("1".to_string()),
      text: None,
      limit: Some(0),
    };

    let err = IssueFilter::new(params.into_filter_args("prod1")).unwrap_err();
    assert!(err.to_string().contains("limit must be a positive integer"));

    let params = SearchServiceNowIncidentsParams {
      state: Some(" 2 ".to_string()),
      assigned_to: Some("bob".to_string()),
      priority: Some("1".to_string()),
      text: None,
      limit: None,
    };
    let filter = IssueFilter::new(params.into_filter_args("prod1")).unwrap();
    assert_eq!(filter.scope(), "prod1");
    assert_eq!(filter.status(), Some("2"));
    assert_eq!(filter.priority(), Some("1"));
    assert_eq!(filter.limit(), 5);
  }
}
