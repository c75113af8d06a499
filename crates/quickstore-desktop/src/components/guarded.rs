//! # Auth Gate
//!
//! Pass-through wrapper that keeps protected pages away from signed-out users.

use dioxus::prelude::*;
use quickstore_core::routing::{decide, GateDecision};

use crate::router::Route;
use crate::state::AppState;

/// Renders the nested routes when a session token is present, otherwise
/// replaces the current history entry with the redirect target.
///
/// The token is read reactively, so signing out from anywhere bounces the
/// open protected page.
#[component]
pub fn Guarded() -> Element {
    let state = use_context::<AppState>();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let decision = decide(state.token.read().as_deref(), &route.to_core());

    match decision {
        GateDecision::Allow => rsx! {
            Outlet::<Route> {}
        },
        GateDecision::Redirect { to, replace } => {
            tracing::debug!(from = %route, to = %to, "Redirecting unauthenticated visit");
            let target = Route::from(&to);
            if replace {
                nav.replace(target);
            } else {
                nav.push(target);
            }
            rsx! {}
        }
    }
}
