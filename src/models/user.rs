//! User profile models returned by the session endpoints.

use serde::Deserialize;

/// Profile of the commenting user bound to the current session token.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub player_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Returns the name shown next to the user's comments.
    pub fn display_name(&self) -> &str {
        self.player_name.as_deref().unwrap_or("Anonymous")
    }
}
