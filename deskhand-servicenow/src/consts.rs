//! Constants for the deskhand-servicenow client.

/// Service name used in logs and error messages
pub const SERVICE: &str = "ServiceNow";

/// Incident table path, relative to the instance base URL
pub const INCIDENT_TABLE_PATH: &str = "/api/now/table/incident";

/// User-Agent header value for the ServiceNow API client
pub const USER_AGENT: &str = concat!("deskhand/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
