//! Constants for the deskhand-jira client.

/// Service name used in logs and error messages
pub const SERVICE: &str = "Jira";

/// Issue search path, relative to the site base URL
pub const SEARCH_PATH: &str = "/rest/api/3/search";

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("deskhand/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
