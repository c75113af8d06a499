//! # Sidebar Component
//!
//! The fixed side menu. Collapses into a drawer on narrow windows.

use dioxus::prelude::*;
use quickstore_core::shell::{active_item, APP_BRAND};
use quickstore_core::NavigationShell;

use crate::router::Route;

/// Navigation sidebar component.
///
/// Highlights the entry whose path equals the current route exactly.
#[component]
pub fn Sidebar() -> Element {
    let mut shell = use_context::<Signal<NavigationShell>>();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let active = active_item(&route.to_core());
    let menu = shell.read().menu();

    rsx! {
        if shell.read().drawer_open() {
            div {
                class: "drawer-backdrop",
                onclick: move |_| shell.write().close_drawer(),
            }
        }

        nav {
            class: "sidebar",

            div {
                class: "sidebar-brand",
                "{APP_BRAND}"
            }

            div {
                class: "nav-links",

                for item in menu.iter() {
                    button {
                        key: "{item.path}",
                        class: if active == Some(item) { "nav-link active" } else { "nav-link" },
                        onclick: move |_| {
                            let target = shell.write().select(item);
                            nav.push(Route::from(&target));
                        },
                        span { class: "material-icon", "{item.icon}" }
                        span { "{item.label}" }
                    }
                }
            }
        }
    }
}
