use anyhow::Result;
use deskhand_core::http::build_client;
use reqwest::Client;

use crate::consts::{CHUCK_NORRIS_BASE_URL, DAD_JOKE_BASE_URL, USER_AGENT, YO_MAMA_BASE_URL};

/// Base URLs of the joke providers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeEndpoints {
  pub chuck_norris: String,
  pub dad: String,
  pub yo_mama: String,
}

impl Default for JokeEndpoints {
  fn default() -> Self {
    Self {
      chuck_norris: CHUCK_NORRIS_BASE_URL.to_string(),
      dad: DAD_JOKE_BASE_URL.to_string(),
      yo_mama: YO_MAMA_BASE_URL.to_string(),
    }
  }
}

/// Client for the public joke APIs. No authentication is involved.
pub struct JokeClient {
  pub(crate) client: Client,
  pub(crate) endpoints: JokeEndpoints,
}

impl JokeClient {
  /// Create a client for the given providers
  pub fn new(endpoints: JokeEndpoints) -> Result<Self> {
    let client = build_client(USER_AGENT, None)?;
    Ok(Self { client, endpoints })
  }

  pub fn endpoints(&self) -> &JokeEndpoints {
    &self.endpoints
  }
}
