//! The fixed side menu.

use crate::routing::Route;

/// One side-menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Text shown in the menu.
    pub label: &'static str,
    /// Icon name, resolved by the front end.
    pub icon: &'static str,
    /// Target path.
    pub path: &'static str,
}

impl MenuItem {
    /// The route this entry navigates to.
    #[must_use]
    pub fn route(&self) -> Route {
        Route::parse(self.path)
    }
}

/// Menu entries, top to bottom.
pub const MENU_ITEMS: [MenuItem; 9] = [
    MenuItem { label: "Dashboard", icon: "dashboard", path: "/" },
    MenuItem { label: "Products", icon: "inventory", path: "/products" },
    MenuItem { label: "Orders", icon: "shopping_cart", path: "/orders" },
    MenuItem { label: "Inbound", icon: "add_box", path: "/inbound" },
    MenuItem { label: "Customers", icon: "person", path: "/customers" },
    MenuItem { label: "Delivery", icon: "local_shipping", path: "/delivery" },
    MenuItem { label: "Users", icon: "people", path: "/users" },
    MenuItem { label: "Reports", icon: "assignment", path: "/reports" },
    MenuItem { label: "Settings", icon: "settings", path: "/settings" },
];

/// The entry to highlight for `route`. Matching is exact, so `/` only
/// highlights Dashboard.
#[must_use]
pub fn active_item(route: &Route) -> Option<&'static MenuItem> {
    MENU_ITEMS.iter().find(|item| item.path == route.path())
}
