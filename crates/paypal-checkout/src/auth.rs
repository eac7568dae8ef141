//! OAuth2 client-credentials token

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Token returned by the PayPal OAuth2 endpoint
///
/// Not cached by this crate; callers re-authenticate or track
/// [`AuthResult::expires_in`] themselves.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResult {
    pub access_token: String,

    #[serde(default)]
    pub token_type: String,

    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: u64,

    #[serde(default)]
    pub scope: String,

    #[serde(default)]
    pub app_id: String,

    #[serde(default)]
    pub nonce: String,
}

impl AuthResult {
    /// Token lifetime as a `Duration`
    pub const fn expires_in(&self) -> Duration {
        Duration::from_secs(self.expires_in)
    }

    /// `Authorization` header value
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    pub(crate) fn has_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }
}

impl fmt::Debug for AuthResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResult")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .field("app_id", &self.app_id)
            .finish_non_exhaustive()
    }
}
