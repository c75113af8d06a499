//! # Application State
//!
//! Global state management using Dioxus signals and context.

use dioxus::prelude::*;
use quickstore_core::{
    Config, FileStorage, MemoryStorage, QuickStoreClient, SessionEvent, SessionService, User,
};
use tokio::sync::broadcast::error::RecvError;

/// Global application state.
///
/// Shared across all components via Dioxus context.
/// Use `use_context::<AppState>()` to access in components.
///
/// The [`SessionService`] is the source of truth; `token` and `user` are
/// reactive mirrors kept current by [`AppState::follow_session`].
///
/// # Examples
///
/// ```rust,ignore
/// #[component]
/// fn Greeting() -> Element {
///     let state = use_context::<AppState>();
///
///     rsx! {
///         if let Some(user) = state.user.read().as_ref() {
///             p { "Hello, {user.full_name}" }
///         }
///     }
/// }
/// ```
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded client configuration.
    pub config: Signal<Config>,

    /// Session read/write/subscribe handle.
    pub session: Signal<SessionService>,

    // ==================== Session mirror ====================
    /// Current bearer token (if signed in).
    pub token: Signal<Option<String>>,

    /// Cached identity of the signed-in user.
    pub user: Signal<Option<User>>,

    /// One-shot notice for the next page (e.g. after registration).
    pub flash: Signal<Option<String>>,
}

impl AppState {
    /// Creates the application state, loading persisted config and the
    /// stored session from disk.
    ///
    /// Falls back to an in-memory session when no config directory exists.
    #[must_use]
    pub fn new() -> Self {
        let config = Config::load();

        let session = match config.session_path() {
            Some(path) => SessionService::new(FileStorage::new(path)),
            None => {
                tracing::warn!("No config directory; session will not survive a restart");
                SessionService::new(MemoryStorage::new())
            }
        };
        let snapshot = session.snapshot();

        Self {
            config: Signal::new(config),
            session: Signal::new(session),
            token: Signal::new(snapshot.token),
            user: Signal::new(snapshot.user),
            flash: Signal::new(None),
        }
    }

    /// Creates a [`QuickStoreClient`] bound to the current session.
    #[must_use]
    pub fn client(&self) -> QuickStoreClient {
        QuickStoreClient::new(self.config.read().api_url.clone(), self.session())
    }

    /// A handle to the session service.
    #[must_use]
    pub fn session(&self) -> SessionService {
        self.session.peek().clone()
    }

    /// Leaves a notice for the next page.
    pub fn set_flash(&mut self, notice: Option<String>) {
        self.flash.set(notice);
    }

    /// Takes the pending notice, if any.
    pub fn take_flash(&mut self) -> Option<String> {
        self.flash.write().take()
    }

    /// Re-reads the session from storage into the mirrors.
    fn refresh(&mut self) {
        let snapshot = self.session.peek().snapshot();
        self.token.set(snapshot.token);
        self.user.set(snapshot.user);
    }

    /// Applies session events to the mirrors until the service goes away.
    pub async fn follow_session(mut self) {
        let mut events = self.session.peek().subscribe();
        loop {
            match events.recv().await {
                Ok(SessionEvent::SignedIn { token, user }) => {
                    self.token.set(Some(token));
                    self.user.set(user);
                }
                Ok(SessionEvent::SignedOut) => {
                    self.token.set(None);
                    self.user.set(None);
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Session events lagged; re-reading storage");
                    self.refresh();
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
