use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::session::{Session, SessionProvider};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("sign in required")]
    SignInRequired,

    #[error("session has expired")]
    Expired,
}

/// Gate for pages that only render for a signed-in user.
pub struct AuthGuard<'a> {
    provider: &'a dyn SessionProvider,
}

impl<'a> AuthGuard<'a> {
    pub fn new(provider: &'a dyn SessionProvider) -> Self {
        Self { provider }
    }

    /// Resolve the session that a guarded page may use.
    ///
    /// An expired session is refused just like a missing one.
    pub fn require(&self, now: DateTime<Utc>) -> Result<Session, AuthError> {
        let session = self.provider.session().ok_or(AuthError::SignInRequired)?;
        if session.is_expired(now) {
            tracing::info!("refusing expired session");
            return Err(AuthError::Expired);
        }
        Ok(session)
    }
}
