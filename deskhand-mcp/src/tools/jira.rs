//! Jira issue search tool.

use std::sync::Arc;

use deskhand_core::{FilterArgs, IssueFilter, ToolError};
use deskhand_jira::JiraIssue;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::context::ServerContext;

pub const NO_ISSUES: &str = "No matching issues found.";

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchJiraIssuesParams {
  /// Jira project key (e.g. "PROJ").
  pub project_key: String,
  /// Filter by status name (e.g. "In Progress").
  pub status: Option<String>,
  /// Filter by assignee account name or email.
  pub assignee: Option<String>,
  /// Filter by label.
  pub label: Option<String>,
  /// Text that must appear in the issue summary.
  pub text: Option<String>,
  /// Filter by issue type (e.g. "Bug").
  pub issue_type: Option<String>,
  /// Maximum number of issues to return. Defaults to 5, capped at 100.
  pub limit: Option<i64>,
}

impl From<SearchJiraIssuesParams> for FilterArgs {
  fn from(params: SearchJiraIssuesParams) -> Self {
    Self {
      scope: params.project_key,
      status: params.status,
      assignee: params.assignee,
      label: params.label,
      text: params.text,
      issue_type: params.issue_type,
      priority: None,
      limit: params.limit,
    }
  }
}

pub async fn search_jira_issues(
  context: Arc<ServerContext>,
  params: SearchJiraIssuesParams,
) -> Result<String, ToolError> {
  let filter = IssueFilter::new(params.into())?;
  let issues = context.jira.search_issues(&filter).await?;
  Ok(format_issues(&issues))
}

/// One `#KEY: summary [status]` line per issue
pub fn format_issues(issues: &[JiraIssue]) -> String {
  if issues.is_empty() {
    return NO_ISSUES.to_string();
  }

  issues
    .iter()
    .map(|issue| format!("#{}: {} [{}]", issue.key, issue.fields.summary, issue.fields.status.name))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
  use deskhand_jira::{JiraIssueFields, JiraIssueStatus};

  use super::*;

  fn issue(key: &str, summary: &str, status: &str) -> JiraIssue {
    JiraIssue {
      key: key.to_string(),
      fields: JiraIssueFields {
        summary: summary.to_string(),
        status: JiraIssueStatus {
          name: status.to_string(),
        },
      },
    }
  }

  #[test]
  fn test_format_issues() {
    let issues = vec![
      issue("MCP-1", "Add search tool", "Done"),
      issue("MCP-2", "Fix escaping", "In Progress"),
    ];

    assert_eq!(
      format_issues(&issues),
      "#MCP-1: Add search tool [Done]\n#MCP-2: Fix escaping [In Progress]"
    );
  }

  #[test]
  fn test_format_no_issues_uses_sentinel() {
    assert_eq!(format_issues(&[]), NO_ISSUES);
  }

  #[test]
  fn test_params_map_to_filter() {
    let params: SearchJiraIssuesParams = serde_json::from_value(serde_json::json!({
        "project_key": "MCP",
        "status": "Done",
        "assignee": "jane",
        "limit": 3
    }))
    .unwrap();

    let filter = IssueFilter::new(params.into()).unwrap();
    assert_eq!(filter.scope(), "MCP");
    assert_eq!(filter.status(), Some("Done"));
    assert_eq!(filter.assignee(), Some("jane"));
    assert_eq!(filter.limit(), 3);
  }
}
