//! # API Client
//!
//! HTTP client for communicating with the QuickStore backend.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::{ApiError, ApiResult};
use super::types::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest, UpdateUserRequest, User,
};
use crate::session::SessionService;

/// Error body shape used by the backend.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the QuickStore REST API.
///
/// Protected calls read the bearer token from the injected
/// [`SessionService`] at the moment they are issued. Each call is a single
/// attempt: no retries, no timeout, no backoff.
///
/// # Examples
///
/// ```rust,no_run
/// use quickstore_core::{MemoryStorage, QuickStoreClient, SessionService};
///
/// # async fn run() -> quickstore_core::ApiResult<()> {
/// let session = SessionService::new(MemoryStorage::new());
/// let client = QuickStoreClient::new("http://localhost:8080", session);
///
/// for user in client.list_users().await? {
///     println!("{} ({})", user.username, user.role.label());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct QuickStoreClient {
    base_url: String,
    http: Client,
    session: SessionService,
}

impl QuickStoreClient {
    /// Creates a new client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>, session: SessionService) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
            session,
        }
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the session this client authenticates with.
    #[must_use]
    pub fn session(&self) -> &SessionService {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches the bearer token when one is stored.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => {
                tracing::debug!("No session token, sending request unauthenticated");
                request
            }
        }
    }

    // ==================== Authentication ====================

    /// Registers a new account.
    ///
    /// The response body is ignored on success.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Network`] - Network request failed
    /// * [`ApiError::Server`] - Username taken or validation error
    pub async fn register(&self, req: &RegisterRequest) -> ApiResult<()> {
        tracing::debug!(username = %req.username, "POST /api/auth/register");
        let res = self
            .http
            .post(self.url("/api/auth/register"))
            .json(req)
            .send()
            .await?;

        check(res).await.map(drop)
    }

    /// Exchanges credentials for a token.
    ///
    /// Does not touch the session; callers store the result.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Network`] - Network request failed
    /// * [`ApiError::Server`] - Bad credentials
    /// * [`ApiError::InvalidResponse`] - Response could not be parsed
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        tracing::debug!(%username, "POST /api/auth/login");
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let res = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&req)
            .send()
            .await?;

        read_json(check(res).await?).await
    }

    /// Changes the signed-in user's password.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Network`] - Network request failed
    /// * [`ApiError::Server`] - Wrong old password or unauthorized
    pub async fn change_password(&self, req: &ChangePasswordRequest) -> ApiResult<()> {
        tracing::debug!("POST /api/users/change-password");
        let res = self
            .authorized(self.http.post(self.url("/api/users/change-password")))
            .json(req)
            .send()
            .await?;

        check(res).await.map(drop)
    }

    // ==================== Users ====================

    /// Lists all user accounts.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Network`] - Network request failed
    /// * [`ApiError::Server`] - Missing or expired token
    /// * [`ApiError::InvalidResponse`] - Response could not be parsed
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        tracing::debug!("GET /api/users");
        let res = self
            .authorized(self.http.get(self.url("/api/users")))
            .send()
            .await?;

        read_json(check(res).await?).await
    }

    /// Updates a user's display name and role.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Network`] - Network request failed
    /// * [`ApiError::Server`] - User not found or validation error
    pub async fn update_user(&self, id: i64, req: &UpdateUserRequest) -> ApiResult<()> {
        tracing::debug!(id, "PUT /api/users/:id");
        let res = self
            .authorized(self.http.put(self.url(&format!("/api/users/{id}"))))
            .json(req)
            .send()
            .await?;

        check(res).await.map(drop)
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Network`] - Network request failed
    /// * [`ApiError::Server`] - User not found or unauthorized
    pub async fn delete_user(&self, id: i64) -> ApiResult<()> {
        tracing::debug!(id, "DELETE /api/users/:id");
        let res = self
            .authorized(self.http.delete(self.url(&format!("/api/users/{id}"))))
            .send()
            .await?;

        check(res).await.map(drop)
    }
}

/// Passes success responses through and turns the rest into
/// [`ApiError::Server`].
async fn check(res: Response) -> ApiResult<Response> {
    if res.status().is_success() {
        return Ok(res);
    }

    let status = res.status().as_u16();
    let is_json = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));
    let body = res.text().await.unwrap_or_default();

    let parsed = if is_json {
        serde_json::from_str::<ErrorBody>(&body).ok()
    } else {
        None
    };
    let message = match parsed {
        Some(parsed) => parsed.message,
        None => Some(body),
    };
    let message = message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());

    tracing::warn!(status, message = message.as_deref().unwrap_or(""), "Request failed");
    Err(ApiError::Server { status, message })
}

async fn read_json<T: DeserializeOwned>(res: Response) -> ApiResult<T> {
    res.json()
        .await
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))
}
