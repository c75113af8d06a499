//! Browser-style navigation history with the auth gate applied.

use super::gate::{AuthGate, GateDecision};
use super::route::Route;

/// One entry of the history stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The route shown for this entry.
    pub route: Route,
    /// One-shot message carried to the destination view
    /// (e.g. "注册成功，请登录" after registration).
    pub notice: Option<String>,
}

impl HistoryEntry {
    fn new(route: Route, notice: Option<String>) -> Self {
        Self { route, notice }
    }
}

/// History stack.
///
/// Every time the current entry changes, the [`AuthGate`] is consulted; a
/// redirect replaces the current entry so that going back never lands on a
/// bounced protected page.
#[derive(Debug, Clone)]
pub struct Navigator {
    gate: AuthGate,
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl Navigator {
    /// Opens the history at `route`.
    #[must_use]
    pub fn new(gate: AuthGate, route: Route) -> Self {
        let mut nav = Self {
            gate,
            entries: vec![HistoryEntry::new(route, None)],
            index: 0,
        };
        nav.settle();
        nav
    }

    /// The entry being shown.
    #[must_use]
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    /// The route being shown.
    #[must_use]
    pub fn route(&self) -> &Route {
        &self.current().route
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Takes the notice attached to the current entry, leaving `None`.
    pub fn take_notice(&mut self) -> Option<String> {
        self.entries[self.index].notice.take()
    }

    /// Navigates to `route`, discarding any forward entries.
    pub fn push(&mut self, route: Route, notice: Option<String>) -> &HistoryEntry {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry::new(route, notice));
        self.index = self.entries.len() - 1;
        self.settle();
        self.current()
    }

    /// Navigates to `route`, replacing the current entry.
    pub fn replace(&mut self, route: Route, notice: Option<String>) -> &HistoryEntry {
        self.entries[self.index] = HistoryEntry::new(route, notice);
        self.settle();
        self.current()
    }

    /// Navigates to a path.
    pub fn push_path(&mut self, path: &str) -> &HistoryEntry {
        self.push(Route::parse(path), None)
    }

    /// Steps back one entry. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        self.settle();
        true
    }

    /// Steps forward one entry. Returns `false` at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        self.settle();
        true
    }

    fn settle(&mut self) {
        if let GateDecision::Redirect { to, replace } = self.gate.check(self.route()) {
            if replace {
                self.entries[self.index] = HistoryEntry::new(to, None);
            } else {
                self.entries.truncate(self.index + 1);
                self.entries.push(HistoryEntry::new(to, None));
                self.index = self.entries.len() - 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStorage, SessionService};
    use pretty_assertions::assert_eq;

    fn navigator(signed_in: bool, start: Route) -> (SessionService, Navigator) {
        let session = SessionService::new(MemoryStorage::new());
        if signed_in {
            session.set_session("tok", None).unwrap();
        }
        let nav = Navigator::new(AuthGate::new(session.clone()), start);
        (session, nav)
    }

    #[test]
    fn test_start_on_protected_page_without_session() {
        let (_, nav) = navigator(false, Route::Users);

        assert_eq!(nav.route(), &Route::Login);
        assert_eq!(nav.entries().len(), 1);
    }

    #[test]
    fn test_bounce_replaces_entry() {
        let (_, mut nav) = navigator(false, Route::Register);

        nav.push_path("/users");
        assert_eq!(nav.route(), &Route::Login);

        // Back goes to the page before the bounce, never to /users.
        assert!(nav.back());
        assert_eq!(nav.route(), &Route::Register);
        assert!(nav.entries().iter().all(|e| e.route != Route::Users));
    }

    #[test]
    fn test_signed_in_navigation_renders_content() {
        let (_, mut nav) = navigator(true, Route::Dashboard);

        nav.push_path("/users");
        assert_eq!(nav.route(), &Route::Users);
        nav.push_path("/reports");
        assert_eq!(nav.route(), &Route::Reports);
        assert!(nav.back());
        assert_eq!(nav.route(), &Route::Users);
    }

    #[test]
    fn test_logout_then_back_is_bounced() {
        let (session, mut nav) = navigator(true, Route::Dashboard);
        nav.push_path("/users");

        session.clear_session().unwrap();
        nav.push(Route::Login, None);
        assert!(nav.back());

        assert_eq!(nav.route(), &Route::Login);
    }

    #[test]
    fn test_rendered_page_stays_until_next_navigation() {
        let (session, mut nav) = navigator(true, Route::Users);

        session.clear_session().unwrap();
        assert_eq!(nav.route(), &Route::Users);

        nav.push_path("/orders");
        assert_eq!(nav.route(), &Route::Login);
    }

    #[test]
    fn test_notice_is_delivered_once() {
        let (_, mut nav) = navigator(false, Route::Register);
        nav.push(Route::Login, Some("注册成功，请登录".to_string()));

        assert_eq!(nav.take_notice().as_deref(), Some("注册成功，请登录"));
        assert_eq!(nav.take_notice(), None);
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let (_, mut nav) = navigator(true, Route::Dashboard);
        nav.push_path("/users");
        nav.back();
        nav.push_path("/orders");

        assert!(!nav.forward());
        assert_eq!(nav.entries().len(), 2);
    }
}
