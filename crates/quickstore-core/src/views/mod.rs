//! # Views
//!
//! UI-independent state machines behind each screen.
//!
//! Every action is split into a `begin_*` step (validate, mark pending,
//! build the request) and a `finish_*` step (fold the response back in), so
//! a front end never holds view state across an `await`. The async
//! `submit`/`load` helpers chain both steps for headless callers.
//!
//! - [`LoginForm`] - sign in
//! - [`RegisterForm`] - create an account
//! - [`dashboard`] - static stat cards
//! - [`UsersView`] - user management table, edit dialog and delete flow

mod action;
pub mod dashboard;
mod login;
mod notice;
mod register;
mod users;

pub use action::ActionState;
pub use dashboard::{StatCard, STAT_CARDS};
pub use login::LoginForm;
pub use notice::{Notice, NoticeKind, Notices, NOTICE_TIMEOUT};
pub use register::{RegisterForm, REGISTER_SUCCESS_NOTICE};
pub use users::{EditDialog, EditTicket, LoadState, LoadTicket, UsersView, DELETE_CONFIRMATION};

/// Shown when a request never reached the backend.
pub const NETWORK_ERROR: &str = "网络错误，请稍后重试";

/// Shown when a required form field is blank.
pub const REQUIRED_FIELDS: &str = "请填写所有必填项";
