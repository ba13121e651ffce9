//! Login state persisted in storage.
//!
//! A session is either authenticated with a token pair, a guest session,
//! or signed out. The catalogue is only shown to the first two.

use crate::error::Result;
use crate::storage::Storage;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key of the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// Storage key of the guest flag
pub const GUEST_KEY: &str = "isGuest";

/// Access and refresh token returned by a successful login.
///
/// Accepts both `token` and `accessToken` for the access token, since the
/// login endpoint has used both names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    #[serde(alias = "accessToken")]
    pub token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Session state on top of a [`Storage`].
///
/// Holds no state of its own: every read goes to storage and every change
/// is written through immediately.
#[derive(Debug)]
pub struct Session<S: Storage> {
    storage: S,
}

impl<S: Storage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Store the token pair from a successful login and leave guest mode
    pub fn login(&mut self, tokens: &TokenPair) -> Result<()> {
        self.storage.set(TOKEN_KEY, &tokens.token)?;
        self.storage.set(REFRESH_TOKEN_KEY, &tokens.refresh_token)?;
        self.storage.remove(GUEST_KEY)?;
        info!("Logged in as user");
        Ok(())
    }

    /// Enter the catalogue without credentials
    pub fn continue_as_guest(&mut self) -> Result<()> {
        self.storage.set(GUEST_KEY, "true")?;
        info!("Logged in as guest");
        Ok(())
    }

    /// Forget tokens and the guest flag
    pub fn logout(&mut self) -> Result<()> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(REFRESH_TOKEN_KEY)?;
        self.storage.remove(GUEST_KEY)?;
        Ok(())
    }

    pub fn access_token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Replace the access token after a refresh, keeping the refresh token
    pub fn store_access_token(&mut self, token: &str) -> Result<()> {
        self.storage.set(TOKEN_KEY, token)
    }

    pub fn is_guest(&self) -> bool {
        self.storage.get(GUEST_KEY).as_deref() == Some("true")
    }

    /// Whether the catalogue may be shown: a stored token or guest mode
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some() || self.is_guest()
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_signed_out_by_default() {
        let session = Session::new(MemoryStorage::new());
        assert!(!session.is_authenticated());
        assert!(!session.is_guest());
        assert!(session.access_token().is_none());
    }

    #[test]
    fn test_login_stores_token_pair() {
        let mut session = Session::new(MemoryStorage::new());
        session.continue_as_guest().unwrap();

        session.login(&TokenPair::new("access", "refresh")).unwrap();

        assert!(session.is_authenticated());
        assert!(!session.is_guest());
        assert_eq!(session.access_token().as_deref(), Some("access"));
        assert_eq!(session.refresh_token().as_deref(), Some("refresh"));
    }

    #[test]
    fn test_guest_is_authenticated_without_token() {
        let mut session = Session::new(MemoryStorage::new());
        session.continue_as_guest().unwrap();

        assert!(session.is_authenticated());
        assert!(session.access_token().is_none());
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut session = Session::new(MemoryStorage::new());
        session.login(&TokenPair::new("access", "refresh")).unwrap();
        session.continue_as_guest().unwrap();

        session.logout().unwrap();

        assert!(!session.is_authenticated());
        assert!(session.into_inner().is_empty());
    }

    #[test]
    fn test_store_access_token_keeps_refresh_token() {
        let mut session = Session::new(MemoryStorage::new());
        session.login(&TokenPair::new("old", "refresh")).unwrap();

        session.store_access_token("new").unwrap();

        assert_eq!(session.access_token().as_deref(), Some("new"));
        assert_eq!(session.refresh_token().as_deref(), Some("refresh"));
    }

    #[test]
    fn test_token_pair_accepts_login_response() {
        let pair: TokenPair =
            serde_json::from_str(r#"{"accessToken": "a", "refreshToken": "r", "id": 1}"#).unwrap();
        assert_eq!(pair, TokenPair::new("a", "r"));
    }
}
