//! # Layout Component
//!
//! Main application layout wrapper providing consistent structure.

use dioxus::prelude::*;
use quickstore_core::NavigationShell;

use super::{Header, PasswordDialog, Sidebar};
use crate::router::Route;

/// Main layout wrapper component.
///
/// Owns the [`NavigationShell`] state (drawer, account menu, password
/// dialog) and shares it with the chrome through context. Routed views are
/// rendered inside the main content area via `Outlet`.
///
/// # Structure
///
/// ```text
/// +---------------------------------------------+
/// | Sidebar |         Header                    |
/// |         |------------------------------------|
/// |  Menu   |                                   |
/// |  Items  |         Main Content              |
/// |         |         (Outlet)                  |
/// |         |                                   |
/// +---------------------------------------------+
/// ```
#[component]
pub fn Layout() -> Element {
    let route = use_route::<Route>();
    let shell = use_context_provider(|| Signal::new(NavigationShell::new(route.to_core())));

    let drawer_class = if shell.read().drawer_open() {
        "app-layout drawer-open"
    } else {
        "app-layout"
    };

    rsx! {
        div {
            class: "{drawer_class}",

            Sidebar {}

            div {
                class: "main-panel",

                Header {}

                main {
                    class: "content",

                    Outlet::<Route> {}
                }
            }

            if shell.read().password_dialog().is_some() {
                PasswordDialog {}
            }
        }
    }
}
