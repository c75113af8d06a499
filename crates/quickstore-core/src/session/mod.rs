//! # Session
//!
//! Durable client-side session state.
//!
//! - [`SessionStorage`] - key/value backend (`token`, `user`)
//! - [`FileStorage`] / [`MemoryStorage`] - storage implementations
//! - [`SessionService`] - the injected read/write/subscribe facade used by
//!   every view

mod service;
mod storage;

pub use service::{Session, SessionEvent, SessionService, TOKEN_KEY, USER_KEY};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
