//! # Navigation Shell
//!
//! State of the persistent chrome around every protected page: the side
//! menu (collapsible on narrow screens), the account menu and the
//! change-password dialog.
//!
//! ```text
//! +---------------------------------------------+
//! | Menu    |  Title               [Account v]  |
//! |         |------------------------------------|
//! | Dash    |                                   |
//! | Products|        Feature view               |
//! | ...     |                                   |
//! +---------------------------------------------+
//! ```

pub mod menu;
mod password;

pub use menu::{active_item, MenuItem, MENU_ITEMS};
pub use password::PasswordDialog;

use crate::api::{ApiResult, ChangePasswordRequest};
use crate::routing::Route;
use crate::session::SessionService;

/// Brand shown at the top of the side menu.
pub const APP_BRAND: &str = "QuickStore";

/// Title shown in the top bar.
pub const APP_TITLE: &str = "Aluminum Warehouse Management";

/// Identifies one submission of one change-password dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordTicket(u64);

/// Shell state for the page currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationShell {
    current: Route,
    drawer_open: bool,
    account_menu_open: bool,
    password_dialog: Option<PasswordDialog>,
    password_generation: u64,
}

impl NavigationShell {
    /// Shell wrapping `current`.
    #[must_use]
    pub fn new(current: Route) -> Self {
        Self {
            current,
            drawer_open: false,
            account_menu_open: false,
            password_dialog: None,
            password_generation: 0,
        }
    }

    /// All menu entries.
    #[must_use]
    pub fn menu(&self) -> &'static [MenuItem] {
        &MENU_ITEMS
    }

    /// The wrapped route.
    #[must_use]
    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Records a route change made outside the menu. Closes the drawer.
    pub fn set_current(&mut self, route: Route) {
        self.current = route;
        self.drawer_open = false;
    }

    /// Whether `item` is the highlighted entry.
    #[must_use]
    pub fn is_active(&self, item: &MenuItem) -> bool {
        active_item(&self.current).is_some_and(|active| active == item)
    }

    /// Picks a menu entry: closes the drawer and returns the route to
    /// navigate to.
    pub fn select(&mut self, item: &MenuItem) -> Route {
        let route = item.route();
        self.set_current(route.clone());
        route
    }

    // ==================== Drawer ====================

    /// Whether the collapsed menu is open (narrow screens only).
    #[must_use]
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Opens or closes the collapsed menu.
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Closes the collapsed menu.
    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    // ==================== Account menu ====================

    /// Whether the account menu is open.
    #[must_use]
    pub fn account_menu_open(&self) -> bool {
        self.account_menu_open
    }

    /// Opens the account menu.
    pub fn open_account_menu(&mut self) {
        self.account_menu_open = true;
    }

    /// Closes the account menu.
    pub fn close_account_menu(&mut self) {
        self.account_menu_open = false;
    }

    /// Opens a blank change-password dialog and closes the account menu.
    pub fn open_password_dialog(&mut self) {
        self.account_menu_open = false;
        self.password_generation += 1;
        self.password_dialog = Some(PasswordDialog::default());
    }

    /// Closes the dialog, discarding fields and messages.
    pub fn close_password_dialog(&mut self) {
        self.password_dialog = None;
    }

    /// The open dialog.
    #[must_use]
    pub fn password_dialog(&self) -> Option<&PasswordDialog> {
        self.password_dialog.as_ref()
    }

    /// Mutable access to the open dialog.
    pub fn password_dialog_mut(&mut self) -> Option<&mut PasswordDialog> {
        self.password_dialog.as_mut()
    }

    /// Starts submitting the open dialog.
    pub fn begin_password_submit(&mut self) -> Option<(PasswordTicket, ChangePasswordRequest)> {
        let req = self.password_dialog.as_mut()?.begin_submit()?;
        Some((PasswordTicket(self.password_generation), req))
    }

    /// Applies a change-password response to the dialog `ticket` was issued
    /// for. Returns `false` if that dialog has been closed or replaced and
    /// the result was dropped.
    pub fn finish_password_submit(&mut self, ticket: PasswordTicket, result: ApiResult<()>) -> bool {
        match self.password_dialog.as_mut() {
            Some(dialog) if ticket.0 == self.password_generation => {
                dialog.finish_submit(result);
                true
            }
            _ => {
                tracing::debug!(
                    ticket = ticket.0,
                    latest = self.password_generation,
                    ok = result.is_ok(),
                    "Dropping change-password result for a closed dialog"
                );
                false
            }
        }
    }

    /// Clears the session and returns the login route.
    ///
    /// A storage failure is logged; the user is still sent to login.
    pub fn logout(&mut self, session: &SessionService) -> Route {
        if let Err(e) = session.clear_session() {
            tracing::warn!(error = %e, "Failed to clear session storage");
        }
        self.account_menu_open = false;
        self.password_dialog = None;
        self.drawer_open = false;
        Route::Login
    }
}
