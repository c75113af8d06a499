//! # QuickStore Core
//!
//! Headless building blocks of the QuickStore warehouse console.
//!
//! Everything a front end needs to talk to the QuickStore backend lives
//! here, free of any UI framework, so that the desktop application and the
//! command-line client share one implementation.
//!
//! ## Modules
//!
//! - [`api`] - HTTP client for the QuickStore REST backend
//! - [`config`] - Persisted client configuration
//! - [`session`] - Durable session storage and the injectable [`SessionService`]
//! - [`routing`] - Routes, the [`AuthGate`] and a history model
//! - [`shell`] - Navigation shell state (menu, drawer, account menu, password dialog)
//! - [`views`] - Feature view state machines (login, register, dashboard, users)
//!
//! ## Example
//!
//! ```rust,no_run
//! use quickstore_core::{MemoryStorage, QuickStoreClient, SessionService};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let session = SessionService::new(MemoryStorage::new());
//! let client = QuickStoreClient::new("http://localhost:8080", session.clone());
//!
//! let login = client.login("alice", "secret").await?;
//! session.set_session(&login.token, login.user.as_ref())?;
//!
//! let users = client.list_users().await?;
//! println!("{} users", users.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod routing;
pub mod session;
pub mod shell;
pub mod views;

pub use api::{ApiError, ApiResult, QuickStoreClient, Role, User};
pub use config::Config;
pub use error::{Error, Result};
pub use routing::{AuthGate, GateDecision, Navigator, Route};
pub use session::{FileStorage, MemoryStorage, SessionEvent, SessionService, SessionStorage};
pub use shell::NavigationShell;
