//! Translation of an [`IssueFilter`] into a ServiceNow encoded query.
//!
//! Clauses use field-specific operators and are joined with `^`, the encoded
//! query AND. The scope selects the instance and never appears in the query,
//! so a filter with no optional fields translates to an empty string.

use deskhand_core::IssueFilter;

/// Build the `sysparm_query` value for a filter.
pub fn build_encoded_query(filter: &IssueFilter) -> String {
  let clauses = [
    ("assigned_to=", filter.assignee()),
    ("state=", filter.status()),
    ("priority=", filter.priority()),
    ("short_descriptionLIKE", filter.text()),
  ];

  clauses
    .into_iter()
    .filter_map(|(prefix, value)| value.map(|v| format!("{prefix}{}", escape_value(v))))
    .collect::<Vec<_>>()
    .join("^")
}

// A bare `^` would start a new clause.
fn escape_value(value: &str) -> String {
  value.replace('^', "^^")
}

#[cfg(test)]
mod tests {
  use deskhand_core::FilterArgs;

  use super::*;

  fn filter(args: FilterArgs) -> IssueFilter {
    IssueFilter::new(args).unwrap()
  }

  #[test]
  fn test_scope_only_is_empty() {
    assert_eq!(build_encoded_query(&filter(FilterArgs::new("prod1"))), "");
  }

  #[test]
  fn test_assignee_and_text() {
    let args = FilterArgs {
      assignee: Some("bob".to_string()),
      text: Some("disk full".to_string()),
      ..FilterArgs::new("prod1")
    };

    assert_eq!(
      build_encoded_query(&filter(args)),
      "assigned_to=bob^short_descriptionLIKEdisk full"
    );
  }

  #[test]
  fn test_all_clauses_in_stable_order() {
    let args = FilterArgs {
      assignee: Some("bob".to_string()),
      status: Some("2".to_string()),
      priority: Some("1".to_string()),
      text: Some("vpn".to_string()),
      ..FilterArgs::new("prod1")
    };

    insta::assert_snapshot!(
      build_encoded_query(&filter(args)),
      @"assigned_to=bob^state=2^priority=1^short_descriptionLIKEvpn"
    );
  }

  #[test]
  fn test_blank_fields_never_appear() {
    let args = FilterArgs {
      assignee: Some("   ".to_string()),
      status: Some(" 6 ".to_string()),
      priority: Some(String::new()),
      ..FilterArgs::new("prod1")
    };

    assert_eq!(build_encoded_query(&filter(args)), "state=6");
  }

  #[test]
  fn test_jira_only_fields_are_ignored() {
    let args = FilterArgs {
      label: Some("backend".to_string()),
      issue_type: Some("Bug".to_string()),
      ..FilterArgs::new("prod1")
    };

    assert_eq!(build_encoded_query(&filter(args)), "");
  }

  #[test]
  fn test_caret_in_value_is_escaped() {
    let args = FilterArgs {
      text: Some("a^b".to_string()),
      ..FilterArgs::new("prod1")
    };

    assert_eq!(build_encoded_query(&filter(args)), "short_descriptionLIKEa^^b");
  }
}
