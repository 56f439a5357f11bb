use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated session handed over by the auth collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Identity shown to the user, if the provider exposes one.
    pub user_email: Option<String>,

    /// Bearer token forwarded to protected endpoints.
    pub access_token: Option<String>,

    /// Expiration timestamp; `None` means the provider did not say.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            ..Self::default()
        }
    }

    pub fn expiring_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(expires_at) if now >= expires_at)
    }
}

/// Source of the current session.
pub trait SessionProvider: Send + Sync {
    /// The current session, or `None` when nobody is signed in.
    fn session(&self) -> Option<Session>;
}

/// A provider that always answers with the same session.
#[derive(Debug, Clone, Default)]
pub struct StaticSession(Option<Session>);

impl StaticSession {
    pub fn signed_in(session: Session) -> Self {
        Self(Some(session))
    }

    pub fn signed_out() -> Self {
        Self(None)
    }
}

impl SessionProvider for StaticSession {
    fn session(&self) -> Option<Session> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn expiry_is_inclusive() {
        let now = Utc::now();
        let session = Session::with_token("t").expiring_at(now);
        assert!(session.is_expired(now));
        assert!(!session.is_expired(now - Duration::seconds(1)));
    }

    #[test]
    fn sessions_without_expiry_never_expire() {
        assert!(!Session::with_token("t").is_expired(Utc::now()));
    }

    #[test]
    fn static_provider_answers_consistently() {
        assert_eq!(StaticSession::signed_out().session(), None);
        let provider = StaticSession::signed_in(Session::with_token("abc"));
        assert_eq!(provider.session().unwrap().access_token.as_deref(), Some("abc"));
    }

    #[test]
    fn session_round_trips_through_json() {
        let json = r#"{"user_email":"a@b.c","access_token":null,"expires_at":null}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.user_email.as_deref(), Some("a@b.c"));
    }
}
