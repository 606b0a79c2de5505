use serde::Deserialize;

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub email: String,
  pub api_token: String,
}

/// Body of `GET /rest/api/3/search`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraSearchResults {
  #[serde(default)]
  pub issues: Vec<JiraIssue>,
  pub total: Option<u64>,
}

/// Represents a Jira issue
#[derive(Debug, Deserialize)]
pub struct JiraIssue {
  pub key: String,
  pub fields: JiraIssueFields,
}

/// Represents the Jira issue fields deskhand reports on
#[derive(Debug, Deserialize)]
pub struct JiraIssueFields {
  pub summary: String,
  pub status: JiraIssueStatus,
}

/// Represents a Jira issue status
#[derive(Debug, Deserialize)]
pub struct JiraIssueStatus {
  pub name: String,
}
