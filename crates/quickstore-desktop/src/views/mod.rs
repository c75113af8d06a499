//! # Views
//!
//! Page-level view components for the QuickStore desktop application.
//!
//! - [`Login`] - Sign-in form
//! - [`Register`] - Account registration
//! - [`Dashboard`] - Stat cards
//! - [`Users`] - User management table
//! - [`Products`], [`Orders`], [`Inbound`], [`Customers`], [`Delivery`],
//!   [`Reports`], [`Settings`] - Not built yet
//! - [`NotFound`] - Unknown paths

mod dashboard;
mod login;
mod placeholder;
mod register;
mod users;

pub use dashboard::Dashboard;
pub use login::Login;
pub use placeholder::{
    Customers, Delivery, Inbound, NotFound, Orders, Products, Reports, Settings,
};
pub use register::Register;
pub use users::Users;
