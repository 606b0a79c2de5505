use serde::Deserialize;

/// Body of `GET /jokes/random` on the Chuck Norris API
#[derive(Debug, Deserialize)]
pub struct ChuckNorrisJoke {
  pub value: String,
  #[serde(default)]
  pub categories: Vec<String>,
}

/// Body of `GET /` on icanhazdadjoke with `Accept: application/json`
#[derive(Debug, Deserialize)]
pub struct DadJoke {
  pub joke: String,
}

/// Body of `GET /api/v1/jokes/random/` on the yo-mama jokes API
#[derive(Debug, Deserialize)]
pub struct YoMamaJoke {
  pub joke: String,
  pub category: String,
}

impl YoMamaJoke {
  /// `"<category>: <joke>"`
  pub fn tagged(&self) -> String {
    format!("{}: {}", self.category, self.joke)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_chuck_norris_joke_deserialization() {
    let json = json!({
        "categories": [],
        "created_at": "2020-01-05 13:42:19.897976",
        "icon_url": "https://api.chucknorris.io/img/avatar/chuck-norris.png",
        "id": "abc",
        "url": "https://api.chucknorris.io/jokes/abc",
        "value": "Chuck Norris can divide by zero."
    });

    let joke: ChuckNorrisJoke = serde_json::from_value(json).unwrap();
    assert_eq!(joke.value, "Chuck Norris can divide by zero.");
    assert!(joke.categories.is_empty());
  }

  #[test]
  fn test_yo_mama_joke_tagged() {
    let joke: YoMamaJoke = serde_json::from_value(json!({
        "joke": "Yo mama so old her birth certificate says expired.",
        "category": "old"
    }))
    .unwrap();

    assert_eq!(joke.tagged(), "old: Yo mama so old her birth certificate says expired.");
  }

  #[test]
  fn test_dad_joke_requires_joke_field() {
    assert!(serde_json::from_value::<DadJoke>(json!({ "id": "x", "status": 200 })).is_err());
  }
}
