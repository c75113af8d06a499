//! # Routing
//!
//! Application routes, the authentication gate and a browser-style history.
//!
//! - [`Route`] - every screen the console can show
//! - [`AuthGate`] - allows protected routes only while a token is stored
//! - [`Navigator`] - history stack that applies gate redirects by replacing
//!   the bounced entry

mod gate;
mod history;
mod route;

pub use gate::{decide, AuthGate, GateDecision};
pub use history::{HistoryEntry, Navigator};
pub use route::Route;
