//! Constants for the deskhand-jokes client.

/// Base URL of the Chuck Norris joke API
pub const CHUCK_NORRIS_BASE_URL: &str = "https://api.chucknorris.io";

/// Base URL of the icanhazdadjoke API
pub const DAD_JOKE_BASE_URL: &str = "https://icanhazdadjoke.com";

/// Base URL of the yo-mama jokes API
pub const YO_MAMA_BASE_URL: &str = "https://www.yomama-jokes.com";

/// Service names used in logs and error messages
pub const CHUCK_NORRIS_SERVICE: &str = "Chuck Norris API";
pub const DAD_JOKE_SERVICE: &str = "icanhazdadjoke";
pub const YO_MAMA_SERVICE: &str = "Yo Mama API";

/// User-Agent header value; icanhazdadjoke asks clients to identify themselves
pub const USER_AGENT: &str = concat!("deskhand/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
