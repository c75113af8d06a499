//! # Header Component
//!
//! Top bar with the drawer toggle, title and account menu.

use dioxus::prelude::*;
use quickstore_core::shell::APP_TITLE;
use quickstore_core::NavigationShell;

use crate::router::Route;
use crate::state::AppState;

/// Application header component.
///
/// The account menu offers "change password" and "logout".
#[component]
pub fn Header() -> Element {
    let state = use_context::<AppState>();
    let mut shell = use_context::<Signal<NavigationShell>>();
    let nav = use_navigator();

    let on_logout = move |_| {
        let target = shell.write().logout(&state.session());
        nav.push(Route::from(&target));
    };

    let menu_open = shell.read().account_menu_open();

    rsx! {
        header {
            class: "app-header",

            button {
                class: "btn-ghost drawer-toggle",
                onclick: move |_| shell.write().toggle_drawer(),
                "☰"
            }

            h1 { "{APP_TITLE}" }

            div { class: "header-right",
                div { class: "user-menu",
                    button {
                        class: "user-avatar",
                        onclick: move |_| {
                            if menu_open {
                                shell.write().close_account_menu();
                            } else {
                                shell.write().open_account_menu();
                            }
                        },
                        match state.user.read().as_ref() {
                            Some(user) => rsx! {
                                "{user.full_name.chars().next().unwrap_or('?')}"
                            },
                            None => rsx! { "?" },
                        }
                    }

                    if menu_open {
                        div { class: "account-menu glass-panel",
                            if let Some(user) = state.user.read().as_ref() {
                                div { class: "account-info",
                                    span { class: "username", "{user.full_name}" }
                                    span { class: "text-secondary", "{user.role.label()}" }
                                }
                            }
                            button {
                                class: "menu-item",
                                onclick: move |_| shell.write().open_password_dialog(),
                                "修改密码"
                            }
                            button {
                                class: "menu-item",
                                onclick: on_logout,
                                "退出登录"
                            }
                        }
                    }
                }
            }
        }
    }
}
