//! Pages that exist in the menu but have no content yet.

use dioxus::prelude::*;

#[component]
fn UnderConstruction(title: &'static str) -> Element {
    rsx! {
        div { class: "placeholder-view",
            h2 { "{title}" }
            p { class: "text-secondary", "Page under construction" }
        }
    }
}

/// Product catalogue.
#[component]
pub fn Products() -> Element {
    rsx! { UnderConstruction { title: "Products" } }
}

/// Orders.
#[component]
pub fn Orders() -> Element {
    rsx! { UnderConstruction { title: "Orders" } }
}

/// Inbound shipments.
#[component]
pub fn Inbound() -> Element {
    rsx! { UnderConstruction { title: "Inbound" } }
}

/// Customers.
#[component]
pub fn Customers() -> Element {
    rsx! { UnderConstruction { title: "Customers" } }
}

/// Delivery tasks.
#[component]
pub fn Delivery() -> Element {
    rsx! { UnderConstruction { title: "Delivery" } }
}

/// Reports.
#[component]
pub fn Reports() -> Element {
    rsx! { UnderConstruction { title: "Reports" } }
}

/// Settings.
#[component]
pub fn Settings() -> Element {
    rsx! { UnderConstruction { title: "Settings" } }
}

/// Shown for any unknown path inside the shell.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "placeholder-view",
            h2 { "Page not found" }
            p { class: "text-secondary mono", "{path}" }
        }
    }
}
