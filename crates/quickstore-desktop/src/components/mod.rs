//! # UI Components
//!
//! Shell chrome shared by every protected page:
//! - [`Guarded`] - Auth gate in front of the shell
//! - [`Layout`] - Main application layout wrapper
//! - [`Sidebar`] - Side menu
//! - [`Header`] - Top bar with the account menu
//! - [`PasswordDialog`] - Change-password dialog

mod guarded;
mod header;
mod layout;
mod password_dialog;
mod sidebar;

pub use guarded::Guarded;
pub use header::Header;
pub use layout::Layout;
pub use password_dialog::PasswordDialog;
pub use sidebar::Sidebar;
