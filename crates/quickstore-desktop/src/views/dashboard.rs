//! # Dashboard View

use dioxus::prelude::*;
use quickstore_core::views::STAT_CARDS;

use crate::state::AppState;

/// Stats dashboard. The figures are static.
#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div { class: "dashboard-view",
            h2 { class: "mb-lg", "Dashboard" }

            if let Some(user) = state.user.read().as_ref() {
                p { class: "text-secondary mb-md", "Welcome back, {user.full_name}" }
            }

            div { class: "stat-grid",
                for card in STAT_CARDS.iter() {
                    div {
                        key: "{card.title}",
                        class: "stat-card glass-panel",
                        style: "border-top: 4px solid {card.accent}",
                        h3 { "{card.title}" }
                        div { class: "stat-value", style: "color: {card.accent}", "{card.value}" }
                        p { class: "text-secondary", "{card.description}" }
                    }
                }
            }
        }
    }
}
