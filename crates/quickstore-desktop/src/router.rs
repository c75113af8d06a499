//! # Routing
//!
//! Defines the application routes and navigation structure.

use dioxus::prelude::*;
use quickstore_core::Route as CoreRoute;

use crate::components::{Guarded, Layout};
use crate::views::{
    Customers, Dashboard, Delivery, Inbound, Login, NotFound, Orders, Products, Register,
    Reports, Settings, Users,
};

/// Application routes.
///
/// Login and registration are public. Everything else sits behind the
/// [`Guarded`] auth gate and inside the [`Layout`] shell.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    /// Sign-in form.
    #[route("/login")]
    Login {},

    /// Account registration form.
    #[route("/register")]
    Register {},

    #[layout(Guarded)]
        #[layout(Layout)]
            /// Stats dashboard.
            #[route("/")]
            Dashboard {},

            #[route("/products")]
            Products {},

            #[route("/orders")]
            Orders {},

            #[route("/inbound")]
            Inbound {},

            #[route("/customers")]
            Customers {},

            #[route("/delivery")]
            Delivery {},

            /// User management.
            #[route("/users")]
            Users {},

            #[route("/reports")]
            Reports {},

            #[route("/settings")]
            Settings {},

            /// Any other path, still behind the gate.
            ///
            /// # Parameters
            ///
            /// * `segments` - The unmatched path segments
            #[route("/:..segments")]
            NotFound { segments: Vec<String> },
}

impl Route {
    /// The headless route this page corresponds to.
    #[must_use]
    pub fn to_core(&self) -> CoreRoute {
        match self {
            Self::Login {} => CoreRoute::Login,
            Self::Register {} => CoreRoute::Register,
            Self::Dashboard {} => CoreRoute::Dashboard,
            Self::Products {} => CoreRoute::Products,
            Self::Orders {} => CoreRoute::Orders,
            Self::Inbound {} => CoreRoute::Inbound,
            Self::Customers {} => CoreRoute::Customers,
            Self::Delivery {} => CoreRoute::Delivery,
            Self::Users {} => CoreRoute::Users,
            Self::Reports {} => CoreRoute::Reports,
            Self::Settings {} => CoreRoute::Settings,
            Self::NotFound { segments } => CoreRoute::NotFound(format!("/{}", segments.join("/"))),
        }
    }
}

impl From<&CoreRoute> for Route {
    fn from(route: &CoreRoute) -> Self {
        match route {
            CoreRoute::Login => Self::Login {},
            CoreRoute::Register => Self::Register {},
            CoreRoute::Dashboard => Self::Dashboard {},
            CoreRoute::Products => Self::Products {},
            CoreRoute::Orders => Self::Orders {},
            CoreRoute::Inbound => Self::Inbound {},
            CoreRoute::Customers => Self::Customers {},
            CoreRoute::Delivery => Self::Delivery {},
            CoreRoute::Users => Self::Users {},
            CoreRoute::Reports => Self::Reports {},
            CoreRoute::Settings => Self::Settings {},
            CoreRoute::NotFound(path) => Self::NotFound {
                segments: path
                    .split('/')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
        }
    }
}
