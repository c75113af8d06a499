//! Route table.

use std::fmt;

/// Application routes.
///
/// Everything except [`Route::Login`] and [`Route::Register`] requires a
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Sign-in form.
    Login,
    /// Account registration form.
    Register,
    /// Stats dashboard, `/`.
    Dashboard,
    /// Product catalogue (not built yet).
    Products,
    /// Orders (not built yet).
    Orders,
    /// Inbound shipments (not built yet).
    Inbound,
    /// Customers (not built yet).
    Customers,
    /// Delivery tasks (not built yet).
    Delivery,
    /// User management.
    Users,
    /// Reports (not built yet).
    Reports,
    /// Settings (not built yet).
    Settings,
    /// Any other path.
    NotFound(String),
}

impl Route {
    /// Resolves a path. Query strings, fragments and a trailing slash are
    /// ignored.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Self::Dashboard,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/products" => Self::Products,
            "/orders" => Self::Orders,
            "/inbound" => Self::Inbound,
            "/customers" => Self::Customers,
            "/delivery" => Self::Delivery,
            "/users" => Self::Users,
            "/reports" => Self::Reports,
            "/settings" => Self::Settings,
            other => Self::NotFound(other.to_string()),
        }
    }

    /// Canonical path of this route.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/",
            Self::Products => "/products",
            Self::Orders => "/orders",
            Self::Inbound => "/inbound",
            Self::Customers => "/customers",
            Self::Delivery => "/delivery",
            Self::Users => "/users",
            Self::Reports => "/reports",
            Self::Settings => "/settings",
            Self::NotFound(path) => path,
        }
    }

    /// Whether the route is reachable without a session.
    #[must_use]
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// Whether the route only shows the "under construction" page.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(
            self,
            Self::Products
                | Self::Orders
                | Self::Inbound
                | Self::Customers
                | Self::Delivery
                | Self::Reports
                | Self::Settings
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
