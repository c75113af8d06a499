//! The injectable session service.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::storage::SessionStorage;
use crate::api::User;
use crate::error::Result;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the serialized [`User`].
pub const USER_KEY: &str = "user";

const EVENT_CAPACITY: usize = 16;

/// A point-in-time copy of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Bearer token, if signed in.
    pub token: Option<String>,
    /// Cached identity of the signed-in user.
    pub user: Option<User>,
}

/// Change notifications published by [`SessionService`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A session was stored.
    SignedIn {
        /// The new bearer token.
        token: String,
        /// The user returned by the backend, if any.
        user: Option<User>,
    },
    /// The session was cleared.
    SignedOut,
}

struct Inner {
    storage: Box<dyn SessionStorage>,
    events: broadcast::Sender<SessionEvent>,
    writes: Mutex<()>,
}

/// Read/write/subscribe access to the durable session.
///
/// Cheap to clone; every clone talks to the same storage and publishes to
/// the same subscribers. Reads always go to storage, so a change made
/// through another handle over the same backing store is seen by the next
/// read.
#[derive(Clone)]
pub struct SessionService {
    inner: Arc<Inner>,
}

impl fmt::Debug for SessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService")
            .field("storage", &self.inner.storage)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionService {
    /// Creates a service over `storage`.
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                storage: Box::new(storage),
                events,
                writes: Mutex::new(()),
            }),
        }
    }

    /// Returns the stored token. An empty token counts as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner
            .storage
            .get(TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    /// Returns the cached user, if one is stored and readable.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        let raw = self.inner.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Stored user record is unreadable");
                None
            }
        }
    }

    /// Whether a token is present. The token is not validated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Returns both token and user.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        Session {
            token: self.token(),
            user: self.user(),
        }
    }

    /// Stores a new session and notifies subscribers.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    pub fn set_session(&self, token: &str, user: Option<&User>) -> Result<()> {
        {
            let _guard = self.inner.writes.lock();
            self.inner.storage.set(TOKEN_KEY, token)?;
            match user {
                Some(user) => self
                    .inner
                    .storage
                    .set(USER_KEY, &serde_json::to_string(user)?)?,
                None => self.inner.storage.remove(USER_KEY)?,
            }
        }

        tracing::info!(
            username = user.map_or("<unknown>", |u| u.username.as_str()),
            "Session started"
        );
        let _ = self.inner.events.send(SessionEvent::SignedIn {
            token: token.to_string(),
            user: user.cloned(),
        });
        Ok(())
    }

    /// Removes token and user and notifies subscribers.
    ///
    /// Both keys are removed even if the first removal fails.
    ///
    /// # Errors
    ///
    /// Returns the first storage error encountered.
    pub fn clear_session(&self) -> Result<()> {
        let result = {
            let _guard = self.inner.writes.lock();
            let token = self.inner.storage.remove(TOKEN_KEY);
            let user = self.inner.storage.remove(USER_KEY);
            token.and(user)
        };

        tracing::info!("Session cleared");
        let _ = self.inner.events.send(SessionEvent::SignedOut);
        result
    }

    /// Subscribes to session changes made through any clone of this service.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Role;
    use crate::session::{FileStorage, MemoryStorage};
    use pretty_assertions::assert_eq;

    fn alice() -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            full_name: "Alice A".to_string(),
            role: Role::Staff,
            created_at: Some("2024-03-01T08:30:00".to_string()),
        }
    }

    #[test]
    fn test_set_session_is_immediately_readable() {
        let session = SessionService::new(MemoryStorage::new());
        assert!(!session.is_authenticated());

        session.set_session("tok-1", Some(&alice())).unwrap();

        assert_eq!(session.token().as_deref(), Some("tok-1"));
        assert_eq!(session.user(), Some(alice()));
    }

    #[test]
    fn test_clear_session_removes_both_keys() {
        let storage = MemoryStorage::new();
        let session = SessionService::new(storage.clone());
        session.set_session("tok-1", Some(&alice())).unwrap();

        session.clear_session().unwrap();

        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
        assert_eq!(session.snapshot(), Session::default());
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "").unwrap();

        let session = SessionService::new(storage);
        assert!(session.token().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_session_without_user_drops_stale_user() {
        let session = SessionService::new(MemoryStorage::new());
        session.set_session("tok-1", Some(&alice())).unwrap();
        session.set_session("tok-2", None).unwrap();

        assert_eq!(session.token().as_deref(), Some("tok-2"));
        assert!(session.user().is_none());
    }

    #[test]
    fn test_unreadable_user_is_ignored() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok").unwrap();
        storage.set(USER_KEY, "not json").unwrap();

        let session = SessionService::new(storage);
        assert!(session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_change_through_other_handle_is_visible() {
        let storage = MemoryStorage::new();
        let tab_a = SessionService::new(storage.clone());
        let tab_b = SessionService::new(storage);

        tab_a.set_session("tok", None).unwrap();
        assert!(tab_b.is_authenticated());

        tab_b.clear_session().unwrap();
        assert!(!tab_a.is_authenticated());
    }

    #[test]
    fn test_file_backed_session_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        SessionService::new(FileStorage::new(&path))
            .set_session("tok", Some(&alice()))
            .unwrap();

        let restarted = SessionService::new(FileStorage::new(&path));
        assert_eq!(restarted.token().as_deref(), Some("tok"));
        assert_eq!(restarted.user().map(|u| u.username), Some("alice".to_string()));
    }

    #[tokio::test]
    async fn test_subscribers_see_sign_in_and_out() {
        let session = SessionService::new(MemoryStorage::new());
        let mut events = session.subscribe();

        session.set_session("tok", Some(&alice())).unwrap();
        session.clone().clear_session().unwrap();

        assert_eq!(
            events.recv().await.unwrap(),
            SessionEvent::SignedIn {
                token: "tok".to_string(),
                user: Some(alice()),
            }
        );
        assert_eq!(events.recv().await.unwrap(), SessionEvent::SignedOut);
    }
}
