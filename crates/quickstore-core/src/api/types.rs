//! # API Types
//!
//! Types for API requests and responses. Field names are camelCase on the
//! wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrator.
    #[serde(alias = "ADMIN")]
    Admin,
    /// Office staff.
    #[default]
    #[serde(alias = "STAFF")]
    Staff,
    /// Warehouse worker.
    #[serde(alias = "WAREHOUSE")]
    Warehouse,
}

impl Role {
    /// All roles in display order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Staff, Role::Warehouse];

    /// Wire value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::Warehouse => "warehouse",
        }
    }

    /// Label shown in forms and tables.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "管理员",
            Self::Staff => "办公室人员",
            Self::Warehouse => "仓库人员",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}' (expected admin, staff or warehouse)")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            "warehouse" => Ok(Self::Warehouse),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

/// A user account as returned by `/api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier.
    pub id: i64,
    /// Login name; immutable after creation.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Account role.
    pub role: Role,
    /// Creation timestamp as sent by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// Creation time formatted for tables (local time when the backend
    /// sends an offset), or the raw value when it cannot be parsed.
    #[must_use]
    pub fn created_at_display(&self) -> String {
        let Some(raw) = self.created_at.as_deref() else {
            return String::new();
        };

        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
            return dt
                .with_timezone(&chrono::Local)
                .format(DISPLAY_FORMAT)
                .to_string();
        }

        chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map_or_else(|_| raw.to_string(), |dt| dt.format(DISPLAY_FORMAT).to_string())
    }
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,
    /// Password.
    pub password: String,
    /// Password repeated.
    pub confirm_password: String,
    /// Display name.
    pub full_name: String,
    /// Requested role.
    pub role: Role,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for protected endpoints.
    pub token: String,
    /// The signed-in user.
    #[serde(default)]
    pub user: Option<User>,
}

/// Body of `POST /api/users/change-password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Current password.
    pub old_password: String,
    /// Replacement password.
    pub new_password: String,
    /// Replacement password repeated.
    pub confirm_password: String,
}

/// Body of `PUT /api/users/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// New display name.
    pub full_name: String,
    /// New role.
    pub role: Role,
}
