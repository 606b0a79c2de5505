//! Backend-agnostic search filter.
//!
//! Tool handlers collect raw arguments into [`FilterArgs`] and validate them
//! into an [`IssueFilter`]. Translators only ever read the validated filter,
//! so every query they build has a non-empty scope and a positive limit.

use crate::error::ToolError;

/// Result limit used when the caller does not supply one.
pub const DEFAULT_LIMIT: u32 = 5;

/// Largest limit ever sent upstream. Bigger requests are capped to it.
pub const MAX_LIMIT: u32 = 100;

/// Raw, unvalidated filter input as received from a tool call.
#[derive(Debug, Clone, Default)]
pub struct FilterArgs {
  /// Project key for Jira, instance name for ServiceNow.
  pub scope: String,
  pub status: Option<String>,
  pub assignee: Option<String>,
  pub label: Option<String>,
  pub text: Option<String>,
  pub issue_type: Option<String>,
  pub priority: Option<String>,
  pub limit: Option<i64>,
}

impl FilterArgs {
  pub fn new(scope: impl Into<String>) -> Self {
    Self {
      scope: scope.into(),
      ..Self::default()
    }
  }
}

/// Validated, immutable search filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueFilter {
  scope: String,
  status: Option<String>,
  assignee: Option<String>,
  label: Option<String>,
  text: Option<String>,
  issue_type: Option<String>,
  priority: Option<String>,
  limit: u32,
}

impl IssueFilter {
  /// Validate raw arguments.
  ///
  /// Fails when the scope is blank or when a limit is given that is not a
  /// positive integer. Limits above [`MAX_LIMIT`] are capped. Optional fields
  /// are trimmed and blank ones dropped.
  pub fn new(args: FilterArgs) -> Result<Self, ToolError> {
    let scope = args.scope.trim();
    if scope.is_empty() {
      return Err(ToolError::validation("scope must not be empty"));
    }

    let limit = match args.limit {
      None => DEFAULT_LIMIT,
      Some(n) if n <= 0 => {
        return Err(ToolError::validation(format!("limit must be a positive integer, got {n}")));
      }
      Some(n) => u32::try_from(n).map_or(MAX_LIMIT, |n| n.min(MAX_LIMIT)),
    };

    Ok(Self {
      scope: scope.to_string(),
      status: non_blank(args.status),
      assignee: non_blank(args.assignee),
      label: non_blank(args.label),
      text: non_blank(args.text),
      issue_type: non_blank(args.issue_type),
      priority: non_blank(args.priority),
      limit,
    })
  }

  pub fn scope(&self) -> &str {
    &self.scope
  }

  pub fn status(&self) -> Option<&str> {
    self.status.as_deref()
  }

  pub fn assignee(&self) -> Option<&str> {
    self.assignee.as_deref()
  }

  pub fn label(&self) -> Option<&str> {
    self.label.as_deref()
  }

  pub fn text(&self) -> Option<&str> {
    self.text.as_deref()
  }

  pub fn issue_type(&self) -> Option<&str> {
    self.issue_type.as_deref()
  }

  pub fn priority(&self) -> Option<&str> {
    self.priority.as_deref()
  }

  pub const fn limit(&self) -> u32 {
    self.limit
  }
}

fn non_blank(value: Option<String>) -> Option<String> {
  value
    .map(|v| v.trim().to_string())
    .filter(|v| !v.is_empty())
}
