//! Joke tools. Each makes one unauthenticated GET and returns the joke text.

use std::sync::Arc;

use deskhand_core::ToolError;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::context::ServerContext;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ChuckJokeParams {
  /// Joke category (e.g. "dev"). Use `list_chuck_categories` to see them all.
  pub category: Option<String>,
}

/// For tools that take no arguments.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct NoParams {}

pub async fn get_chuck_joke(context: Arc<ServerContext>, params: ChuckJokeParams) -> Result<String, ToolError> {
  let category = params.category.as_deref().map(str::trim).filter(|c| !c.is_empty());
  let joke = context.jokes.chuck_norris_joke(category).await?;
  Ok(joke.value)
}

pub async fn list_chuck_categories(context: Arc<ServerContext>, _params: NoParams) -> Result<String, ToolError> {
  let categories = context.jokes.chuck_norris_categories().await?;
  Ok(categories.join(", "))
}

pub async fn get_dad_joke(context: Arc<ServerContext>, _params: NoParams) -> Result<String, ToolError> {
  let joke = context.jokes.dad_joke().await?;
  Ok(joke.joke)
}

pub async fn get_yo_mama_joke(context: Arc<ServerContext>, _params: NoParams) -> Result<String, ToolError> {
  let joke = context.jokes.yo_mama_joke().await?;
  Ok(joke.tagged())
}
