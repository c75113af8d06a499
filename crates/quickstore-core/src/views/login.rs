//! Sign-in form.

use super::{ActionState, NETWORK_ERROR};
use crate::api::{ApiResult, LoginRequest, LoginResponse, QuickStoreClient};
use crate::routing::Route;
use crate::session::SessionService;

const MISSING_CREDENTIALS: &str = "请输入用户名和密码";
const LOGIN_FAILED: &str = "登录失败，请检查用户名和密码";

/// State of the login screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Username input.
    pub username: String,
    /// Password input.
    pub password: String,
    /// Message carried over from the previous screen.
    pub notice: Option<String>,
    /// Last error.
    pub error: Option<String>,
    /// Submit state.
    pub action: ActionState,
}

impl LoginForm {
    /// Empty form showing `notice` (if any) above the fields.
    #[must_use]
    pub fn with_notice(notice: Option<String>) -> Self {
        Self {
            notice,
            ..Self::default()
        }
    }

    /// Validates the inputs and marks the form pending.
    ///
    /// Returns `None` when nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.action.is_pending() {
            return None;
        }

        let username = self.username.trim().to_string();
        if username.is_empty() || self.password.is_empty() {
            self.error = Some(MISSING_CREDENTIALS.to_string());
            return None;
        }

        self.error = None;
        self.action.begin();
        Some(LoginRequest {
            username,
            password: self.password.clone(),
        })
    }

    /// Stores the session on success and returns where to go next.
    pub fn finish_submit(
        &mut self,
        session: &SessionService,
        result: ApiResult<LoginResponse>,
    ) -> Option<Route> {
        let res = match result {
            Ok(res) => res,
            Err(e) => {
                let message = if e.is_network() {
                    NETWORK_ERROR.to_string()
                } else {
                    e.message_or(LOGIN_FAILED)
                };
                self.error = Some(message);
                self.action.finish(false);
                return None;
            }
        };

        if let Err(e) = session.set_session(&res.token, res.user.as_ref()) {
            tracing::warn!(error = %e, "Failed to persist session");
            self.error = Some(format!("无法保存登录状态: {e}"));
            self.action.finish(false);
            return None;
        }

        self.password.clear();
        self.notice = None;
        self.action.finish(true);
        Some(Route::Dashboard)
    }

    /// Runs a full submit against `client`, storing the session in the
    /// client's [`SessionService`].
    pub async fn submit(&mut self, client: &QuickStoreClient) -> Option<Route> {
        let req = self.begin_submit()?;
        let result = client.login(&req.username, &req.password).await;
        self.finish_submit(client.session(), result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStorage;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(uri: String) -> QuickStoreClient {
        QuickStoreClient::new(uri, SessionService::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn test_successful_login_stores_session() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "jwt",
                "user": {"id": 4, "username": "dora", "fullName": "Dora D", "role": "admin"}
            })))
            .mount(&mock_server)
            .await;

        let client = client(mock_server.uri());
        let mut form = LoginForm::with_notice(Some("注册成功，请登录".to_string()));
        form.username = "dora".to_string();
        form.password = "pw".to_string();

        assert_eq!(form.submit(&client).await, Some(Route::Dashboard));
        assert_eq!(client.session().token().as_deref(), Some("jwt"));
        assert_eq!(client.session().user().unwrap().id, 4);
        assert!(form.password.is_empty());
        assert_eq!(form.action, ActionState::Succeeded);
    }

    #[tokio::test]
    async fn test_rejected_login_shows_server_message() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "用户名或密码错误"})),
            )
            .mount(&mock_server)
            .await;

        let client = client(mock_server.uri());
        let mut form = LoginForm {
            username: "dora".to_string(),
            password: "wrong".to_string(),
            ..LoginForm::default()
        };

        assert_eq!(form.submit(&client).await, None);
        assert_eq!(form.error.as_deref(), Some("用户名或密码错误"));
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_rejected_login_without_message_uses_fallback() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = client(mock_server.uri());
        let mut form = LoginForm {
            username: "dora".to_string(),
            password: "wrong".to_string(),
            ..LoginForm::default()
        };

        assert_eq!(form.submit(&client).await, None);
        assert_eq!(form.error.as_deref(), Some("登录失败，请检查用户名和密码"));
        assert_eq!(form.action, ActionState::Failed);
    }

    #[tokio::test]
    async fn test_unreachable_backend_shows_network_error() {
        let client = client("http://127.0.0.1:1".to_string());
        let mut form = LoginForm {
            username: "dora".to_string(),
            password: "pw".to_string(),
            ..LoginForm::default()
        };

        assert_eq!(form.submit(&client).await, None);
        assert_eq!(form.error.as_deref(), Some("网络错误，请稍后重试"));
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_blank_fields_send_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = client(mock_server.uri());
        let mut form = LoginForm {
            username: "   ".to_string(),
            password: "pw".to_string(),
            ..LoginForm::default()
        };

        assert_eq!(form.submit(&client).await, None);
        assert_eq!(form.error.as_deref(), Some(MISSING_CREDENTIALS));
    }

    #[test]
    fn test_pending_form_refuses_second_submit() {
        let mut form = LoginForm {
            username: "dora".to_string(),
            password: "pw".to_string(),
            ..LoginForm::default()
        };

        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }
}
