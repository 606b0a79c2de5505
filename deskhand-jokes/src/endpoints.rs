//! # Joke Endpoints
//!
//! One fixed GET per provider; each response is decoded into its model.

use deskhand_core::UpstreamError;
use deskhand_core::http::read_json;

use crate::client::JokeClient;
use crate::consts::{CHUCK_NORRIS_SERVICE, DAD_JOKE_SERVICE, YO_MAMA_SERVICE};
use crate::models::{ChuckNorrisJoke, DadJoke, YoMamaJoke};

impl JokeClient {
  /// Fetch a random Chuck Norris joke, optionally from one category
  pub async fn chuck_norris_joke(&self, category: Option<&str>) -> Result<ChuckNorrisJoke, UpstreamError> {
    let url = format!("{}/jokes/random", self.endpoints.chuck_norris);
    tracing::debug!(%url, ?category, "Fetching Chuck Norris joke");
    let mut request = self.client.get(&url).header("Accept", "application/json");
    if let Some(category) = category {
      request = request.query(&[("category", category)]);
    }

    let response = request
      .send()
      .await
      .map_err(|e| UpstreamError::transport(CHUCK_NORRIS_SERVICE, e))?;
    read_json(CHUCK_NORRIS_SERVICE, response).await
  }

  /// List the Chuck Norris joke categories
  pub async fn chuck_norris_categories(&self) -> Result<Vec<String>, UpstreamError> {
    let url = format!("{}/jokes/categories", self.endpoints.chuck_norris);

    let response = self
      .client
      .get(&url)
      .header("Accept", "application/json")
      .send()
      .await
      .map_err(|e| UpstreamError::transport(CHUCK_NORRIS_SERVICE, e))?;
    read_json(CHUCK_NORRIS_SERVICE, response).await
  }

  /// Fetch a random dad joke
  pub async fn dad_joke(&self) -> Result<DadJoke, UpstreamError> {
    let url = format!("{}/", self.endpoints.dad);
    tracing::debug!(%url, "Fetching dad joke");

    // Without this header the API answers with an HTML page
    let response = self
      .client
      .get(&url)
      .header("Accept", "application/json")
      .send()
      .await
      .map_err(|e| UpstreamError::transport(DAD_JOKE_SERVICE, e))?;
    read_json(DAD_JOKE_SERVICE, response).await
  }

  /// Fetch a random yo-mama joke with its category
  pub async fn yo_mama_joke(&self) -> Result<YoMamaJoke, UpstreamError> {
    let url = format!("{}/api/v1/jokes/random/", self.endpoints.yo_mama);
    tracing::debug!(%url, "Fetching yo mama joke");

    let response = self
      .client
      .get(&url)
      .header("Accept", "application/json")
      .send()
      .await
      .map_err(|e| UpstreamError::transport(YO_MAMA_SERVICE, e))?;
    read_json(YO_MAMA_SERVICE, response).await
  }
}
