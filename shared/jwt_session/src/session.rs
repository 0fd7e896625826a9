use crate::util::decode_claims;
use tokio::sync::RwLock;

///
/// Authenticated session of the operator.
///
/// Session is created by the caller and passed explicitly to whatever
/// needs to talk to the backend on the operator's behalf.
///
pub struct Session {
    access_token: RwLock<String>,
    refresh_token: RwLock<Option<String>>,
}

impl Session {
    pub fn new(access_token: String, refresh_token: Option<String>) -> Self {
        Self {
            access_token: RwLock::new(access_token),
            refresh_token: RwLock::new(refresh_token),
        }
    }

    pub async fn access_token(&self) -> String {
        self.access_token.read().await.clone()
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.refresh_token.read().await.clone()
    }

    ///
    /// Replaces access token. Refresh token is replaced only
    /// when backend rotated it.
    ///
    pub async fn replace_tokens(&self, access_token: String, refresh_token: Option<String>) {
        *self.access_token.write().await = access_token;

        if let Some(refresh_token) = refresh_token {
            *self.refresh_token.write().await = Some(refresh_token);
        }
    }

    ///
    /// Checks `exp` claim of the access token against `now` (unix timestamp).
    ///
    /// Token that cannot be decoded is never considered expired,
    /// backend decides about it.
    ///
    pub async fn access_token_expired(&self, now: i64) -> bool {
        let access_token = self.access_token.read().await;

        match decode_claims(&access_token) {
            Ok(claims) => claims.exp <= now,
            Err(err) => {
                tracing::debug!(%err, "access token claims unreadable");
                false
            }
        }
    }
}
