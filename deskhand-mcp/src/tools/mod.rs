//! Tool handlers and the catalogue the server registers at startup.

pub mod jira;
pub mod jokes;
pub mod servicenow;

use crate::context::ServerContext;
use crate::registry::{RegistryError, ToolDescriptor, ToolRegistry};

/// Every tool this server exposes, in listing order.
pub fn catalogue() -> Vec<ToolDescriptor<ServerContext>> {
  vec![
    ToolDescriptor::new(
      "get_chuck_joke",
      "Get a random Chuck Norris joke, optionally from a specific category",
      jokes::get_chuck_joke,
    ),
    ToolDescriptor::new(
      "list_chuck_categories",
      "List the categories available for Chuck Norris jokes",
      jokes::list_chuck_categories,
    ),
    ToolDescriptor::new("get_dad_joke", "Get a random dad joke", jokes::get_dad_joke),
    ToolDescriptor::new(
      "get_yo_mama_joke",
      "Get a random yo mama joke, prefixed with its category",
      jokes::get_yo_mama_joke,
    ),
    ToolDescriptor::new(
      "search_jira_issues",
      "Search Jira issues in a project, filtered by status, assignee, label, summary text and issue type",
      jira::search_jira_issues,
    ),
    ToolDescriptor::new(
      "search_servicenow_incidents",
      "Search ServiceNow incidents, filtered by state, assignee, priority and short description text",
      servicenow::search_servicenow_incidents,
    ),
  ]
}

pub fn registry() -> Result<ToolRegistry<ServerContext>, RegistryError> {
  ToolRegistry::new(catalogue())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_registry_lists_catalogue_in_order() {
    let registry = registry().unwrap();

    let names: Vec<String> = registry.list().into_iter().map(|tool| tool.name).collect();
    assert_eq!(
      names,
      vec![
        "get_chuck_joke",
        "list_chuck_categories",
        "get_dad_joke",
        "get_yo_mama_joke",
        "search_jira_issues",
        "search_servicenow_incidents",
      ]
    );
  }

  #[test]
  fn test_jira_schema_requires_project_key() {
    let registry = registry().unwrap();
    let schema = registry.get("search_jira_issues").unwrap().input_schema();

    assert_eq!(schema["required"], serde_json::json!(["project_key"]));
    assert!(schema["properties"]["limit"]["type"].to_string().contains("integer"));
  }
}
