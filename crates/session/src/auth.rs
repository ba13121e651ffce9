//! Bearer-token requests with a single refresh on authorization failure.
//!
//! The HTTP client itself lives outside this crate. What lives here is the
//! retry rule every authenticated call follows:
//!
//! 1. Send the request with the stored access token
//! 2. If it fails with [`AuthError::Unauthorized`], exchange the stored
//!    refresh token for a new access token, exactly once
//! 3. Store the new token and send the original request once more
//! 4. Anything else, including a second authorization failure, goes back
//!    to the caller unchanged
//!
//! There is no loop: a request is attempted at most twice.

use crate::error::{AuthError, Result};
use crate::session::Session;
use crate::storage::Storage;
use std::future::Future;
use tracing::{debug, error, warn};

/// Exchanges a refresh token for a new access token.
pub trait TokenRefresher {
    fn refresh(
        &self,
        refresh_token: &str,
    ) -> impl Future<Output = Result<String, AuthError>> + Send;
}

/// Send `request` with the session's bearer token, refreshing it once on
/// an authorization failure.
///
/// # Arguments
/// * `session` - Source of the access and refresh tokens; updated on refresh
/// * `refresher` - Performs the token exchange
/// * `request` - Builds and sends the request for a given bearer token
///
/// # Returns
/// The request's own result, or the original `Unauthorized` when no
/// refresh was possible
pub async fn send_with_refresh<S, R, T, F, Fut>(
    session: &mut Session<S>,
    refresher: &R,
    mut request: F,
) -> Result<T, AuthError>
where
    S: Storage,
    R: TokenRefresher,
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<T, AuthError>>,
{
    match request(session.access_token()).await {
        Err(AuthError::Unauthorized) => {}
        other => return other,
    }

    let Some(refresh_token) = session.refresh_token() else {
        warn!("Request unauthorized and no refresh token stored");
        return Err(AuthError::Unauthorized);
    };

    let token = match refresher.refresh(&refresh_token).await {
        Ok(token) => token,
        Err(e) => {
            error!("Error refreshing token: {}", e);
            return Err(AuthError::Unauthorized);
        }
    };

    session.store_access_token(&token)?;
    debug!("Access token refreshed, retrying request once");
    request(Some(token)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::TokenPair;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Hands out `fresh` (or fails) and counts how often it was asked
    struct CountingRefresher {
        calls: AtomicUsize,
        succeed: bool,
    }

    impl CountingRefresher {
        fn new(succeed: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                succeed,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TokenRefresher for CountingRefresher {
        async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(refresh_token, "refresh");
            if self.succeed {
                Ok("fresh".to_string())
            } else {
                Err(AuthError::RefreshFailed("refresh token expired".to_string()))
            }
        }
    }

    fn logged_in() -> Session<MemoryStorage> {
        let mut session = Session::new(MemoryStorage::new());
        session.login(&TokenPair::new("stale", "refresh")).unwrap();
        session
    }

    /// A fake endpoint that only accepts the token `accepted`, recording
    /// every token it was called with.
    fn endpoint<'a>(
        seen: &'a RefCell<Vec<Option<String>>>,
        accepted: &'a str,
    ) -> impl FnMut(Option<String>) -> std::future::Ready<Result<u32, AuthError>> + 'a {
        move |token| {
            seen.borrow_mut().push(token.clone());
            let outcome = if token.as_deref() == Some(accepted) {
                Ok(200)
            } else {
                Err(AuthError::Unauthorized)
            };
            std::future::ready(outcome)
        }
    }

    #[tokio::test]
    async fn test_success_needs_no_refresh() {
        let mut session = logged_in();
        let refresher = CountingRefresher::new(true);
        let seen = RefCell::new(Vec::new());

        let status = send_with_refresh(&mut session, &refresher, endpoint(&seen, "stale"))
            .await
            .unwrap();

        assert_eq!(status, 200);
        assert_eq!(refresher.calls(), 0);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_unauthorized_refreshes_once_and_retries() {
        let mut session = logged_in();
        let refresher = CountingRefresher::new(true);
        let seen = RefCell::new(Vec::new());

        let status = send_with_refresh(&mut session, &refresher, endpoint(&seen, "fresh"))
            .await
            .unwrap();

        assert_eq!(status, 200);
        assert_eq!(refresher.calls(), 1);
        assert_eq!(
            *seen.borrow(),
            vec![Some("stale".to_string()), Some("fresh".to_string())]
        );
        assert_eq!(session.access_token().as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_second_unauthorized_is_not_retried() {
        let mut session = logged_in();
        let refresher = CountingRefresher::new(true);
        let seen = RefCell::new(Vec::new());

        let err = send_with_refresh(&mut session, &refresher, endpoint(&seen, "never"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Unauthorized));
        assert_eq!(refresher.calls(), 1);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_propagates_unauthorized() {
        let mut session = logged_in();
        let refresher = CountingRefresher::new(false);
        let seen = RefCell::new(Vec::new());

        let err = send_with_refresh(&mut session, &refresher, endpoint(&seen, "fresh"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Unauthorized));
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(session.access_token().as_deref(), Some("stale"));
    }

    #[tokio::test]
    async fn test_missing_refresh_token_skips_refresh() {
        let mut session = Session::new(MemoryStorage::new());
        session.continue_as_guest().unwrap();
        let refresher = CountingRefresher::new(true);
        let seen = RefCell::new(Vec::new());

        let err = send_with_refresh(&mut session, &refresher, endpoint(&seen, "fresh"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Unauthorized));
        assert_eq!(refresher.calls(), 0);
        assert_eq!(*seen.borrow(), vec![None]);
    }

    #[tokio::test]
    async fn test_other_errors_pass_through() {
        let mut session = logged_in();
        let refresher = CountingRefresher::new(true);

        let err = send_with_refresh(&mut session, &refresher, |_token| async {
            Err::<u32, _>(AuthError::Transport("connection reset".to_string()))
        })
        .await
        .unwrap_err();

        assert!(matches!(err, AuthError::Transport(_)));
        assert_eq!(refresher.calls(), 0);
    }
}
