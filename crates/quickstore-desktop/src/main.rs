//! # QuickStore Desktop
//!
//! Native desktop console for the QuickStore warehouse backend.
//!
//! ## Architecture
//!
//! All session, API and form logic lives in `quickstore-core`; this crate
//! only renders that state with Dioxus and wires user events to it.
//!
//! ## Modules
//!
//! - [`components`] - Shell chrome (auth gate, layout, side menu, header, dialogs)
//! - [`router`] - Application routes
//! - [`state`] - Global application state
//! - [`views`] - Page-level view components

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod components;
mod router;
mod state;
mod views;

use router::Route;
use state::AppState;

fn main() {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to set tracing subscriber: {e}");
    }

    tracing::info!("Starting QuickStore Desktop");

    let cfg = Config::new().with_window(
        WindowBuilder::new()
            .with_title(quickstore_core::shell::APP_BRAND)
            .with_inner_size(LogicalSize::new(1280.0, 800.0))
            .with_min_inner_size(LogicalSize::new(480.0, 600.0)),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(cfg).launch(App);
}

/// Root application component.
///
/// Provides global state, keeps it in step with the session and renders the
/// router.
#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    use_future(move || async move { state.follow_session().await });

    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }
        Router::<Route> {}
    }
}
