//! URL helpers for turning configured hosts into API base URLs.

use anyhow::{Context, Result, bail};
use url::Url;

/// ServiceNow's SaaS domain; instances live at `<instance>.service-now.com`.
pub const SERVICENOW_DOMAIN: &str = "service-now.com";

/// Ensure a host has an `http://` or `https://` scheme.
///
/// Hosts without a scheme get `https://`. The result never ends with a slash
/// so callers can append API paths directly.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    bail!("Host cannot be empty");
  }

  let url = match Url::parse(trimmed) {
    Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => url,
    _ => Url::parse(&format!("https://{trimmed}")).with_context(|| format!("Failed to parse host '{trimmed}'"))?,
  };

  Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Base URL for a ServiceNow instance.
///
/// A bare instance name such as `dev12345` expands to
/// `https://dev12345.service-now.com`. A value that already carries a scheme
/// is taken as the full base URL.
pub fn servicenow_instance_url(instance: &str) -> Result<String> {
  let trimmed = instance.trim();
  if trimmed.contains("://") {
    return ensure_url_scheme(trimmed);
  }
  if trimmed.is_empty() {
    bail!("ServiceNow instance cannot be empty");
  }

  ensure_url_scheme(&format!("{trimmed}.{SERVICENOW_DOMAIN}"))
}
