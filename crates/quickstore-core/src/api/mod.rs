//! # API Client
//!
//! HTTP client for communicating with the QuickStore backend.
//!
//! This module provides the [`QuickStoreClient`] for making API requests
//! and the wire types exchanged with the backend.

mod client;
mod error;
mod types;

pub use client::QuickStoreClient;
pub use error::{ApiError, ApiResult};
pub use types::{
    ChangePasswordRequest, LoginRequest, LoginResponse, ParseRoleError, RegisterRequest, Role,
    UpdateUserRequest, User,
};
