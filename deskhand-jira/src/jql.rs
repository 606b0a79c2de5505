//! Translation of an [`IssueFilter`] into a JQL query.
//!
//! Clauses are emitted in a fixed order (project, status, summary, labels,
//! assignee, issue type) and joined with ` AND `. Only the project key is
//! left unquoted; every other value is wrapped in double quotes with `\` and
//! `"` escaped. URL encoding is left to the request builder.

use deskhand_core::IssueFilter;

/// Build the JQL for a filter.
///
/// A filter with only a scope yields `project=<scope>`.
pub fn build_jql(filter: &IssueFilter) -> String {
  let mut clauses = vec![format!("project={}", filter.scope())];

  let quoted = [
    ("status", "=", filter.status()),
    ("summary", "~", filter.text()),
    ("labels", "=", filter.label()),
    ("assignee", "=", filter.assignee()),
    ("issuetype", "=", filter.issue_type()),
  ];
  for (field, op, value) in quoted {
    if let Some(value) = value {
      clauses.push(format!("{field}{op}\"{}\"", escape_value(value)));
    }
  }

  clauses.join(" AND ")
}

fn escape_value(value: &str) -> String {
  value.replace('\\', "\\\\").replace('"', "\\\"")
}
