//! Account registration form.

use super::{ActionState, REQUIRED_FIELDS};
use crate::api::{ApiError, ApiResult, QuickStoreClient, RegisterRequest, Role};
use crate::routing::{HistoryEntry, Route};

/// Notice shown on the login screen after a successful registration.
pub const REGISTER_SUCCESS_NOTICE: &str = "注册成功，请登录";

const PASSWORD_MISMATCH: &str = "两次输入的密码不一致";
const REGISTER_FAILED: &str = "注册失败，请检查输入信息";

/// State of the registration screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    /// Username input.
    pub username: String,
    /// Password input.
    pub password: String,
    /// Password confirmation input.
    pub confirm_password: String,
    /// Full name input.
    pub full_name: String,
    /// Selected role, staff by default.
    pub role: Role,
    /// Last error.
    pub error: Option<String>,
    /// Submit state.
    pub action: ActionState,
}

impl RegisterForm {
    /// Validates the inputs and marks the form pending.
    ///
    /// A password/confirmation mismatch never produces a request.
    pub fn begin_submit(&mut self) -> Option<RegisterRequest> {
        if self.action.is_pending() {
            return None;
        }
        self.error = None;

        if self.password != self.confirm_password {
            self.error = Some(PASSWORD_MISMATCH.to_string());
            return None;
        }

        let username = self.username.trim().to_string();
        let full_name = self.full_name.trim().to_string();
        if username.is_empty() || full_name.is_empty() || self.password.is_empty() {
            self.error = Some(REQUIRED_FIELDS.to_string());
            return None;
        }

        self.action.begin();
        Some(RegisterRequest {
            username,
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            full_name,
            role: self.role,
        })
    }

    /// Folds the response in. On success returns the login entry to push,
    /// carrying [`REGISTER_SUCCESS_NOTICE`].
    pub fn finish_submit(&mut self, result: ApiResult<()>) -> Option<HistoryEntry> {
        match result {
            Ok(()) => {
                self.action.finish(true);
                self.password.clear();
                self.confirm_password.clear();
                Some(HistoryEntry {
                    route: Route::Login,
                    notice: Some(REGISTER_SUCCESS_NOTICE.to_string()),
                })
            }
            Err(ApiError::Network(e)) => {
                self.error = Some(format!("网络错误: {e}"));
                self.action.finish(false);
                None
            }
            Err(e) => {
                self.error = Some(e.message_or(REGISTER_FAILED));
                self.action.finish(false);
                None
            }
        }
    }

    /// Runs a full submit against `client`.
    pub async fn submit(&mut self, client: &QuickStoreClient) -> Option<HistoryEntry> {
        let req = self.begin_submit()?;
        let result = client.register(&req).await;
        self.finish_submit(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStorage, SessionService};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(uri: String) -> QuickStoreClient {
        QuickStoreClient::new(uri, SessionService::new(MemoryStorage::new()))
    }

    fn alice_form() -> RegisterForm {
        RegisterForm {
            username: "alice".to_string(),
            password: "p1".to_string(),
            confirm_password: "p1".to_string(),
            full_name: "Alice A".to_string(),
            role: Role::Staff,
            ..RegisterForm::default()
        }
    }

    #[tokio::test]
    async fn test_register_redirects_to_login_with_notice() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .and(body_json(json!({
                "username": "alice",
                "password": "p1",
                "confirmPassword": "p1",
                "fullName": "Alice A",
                "role": "staff"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut form = alice_form();
        let entry = form.submit(&client(mock_server.uri())).await.unwrap();

        assert_eq!(entry.route, Route::Login);
        assert_eq!(entry.notice.as_deref(), Some("注册成功，请登录"));
    }

    #[tokio::test]
    async fn test_plain_text_success_also_redirects() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&mock_server)
            .await;

        let mut form = alice_form();
        assert!(form.submit(&client(mock_server.uri())).await.is_some());
    }

    #[tokio::test]
    async fn test_mismatched_passwords_send_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut form = RegisterForm {
            confirm_password: "p2".to_string(),
            ..alice_form()
        };

        assert!(form.submit(&client(mock_server.uri())).await.is_none());
        assert_eq!(form.error.as_deref(), Some("两次输入的密码不一致"));
        assert_eq!(form.action, ActionState::Idle);
    }

    #[tokio::test]
    async fn test_server_rejection_uses_message_or_default() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({"message": "用户名已存在"})))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let client = client(mock_server.uri());
        let mut form = alice_form();

        assert!(form.submit(&client).await.is_none());
        assert_eq!(form.error.as_deref(), Some("用户名已存在"));

        assert!(form.submit(&client).await.is_none());
        assert_eq!(form.error.as_deref(), Some("注册失败，请检查输入信息"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_reports_network_error() {
        let mut form = alice_form();
        assert!(form.submit(&client("http://127.0.0.1:1".to_string())).await.is_none());
        assert!(form.error.unwrap().starts_with("网络错误: "));
    }
}
