//! User management screen.
//!
//! `Idle -> Loading -> {Loaded | Failed}`. Every successful edit or delete
//! is followed by a full reload; the local list is never patched.

use super::{ActionState, Notices, NETWORK_ERROR};
use crate::api::{ApiResult, QuickStoreClient, Role, UpdateUserRequest, User};

/// Confirmation prompt shown before deleting.
pub const DELETE_CONFIRMATION: &str = "确定要删除这个用户吗？";

const LOAD_FAILED: &str = "获取用户列表失败";
const DELETE_SUCCESS: &str = "用户删除成功";
const DELETE_FAILED: &str = "删除用户失败";
const UPDATE_SUCCESS: &str = "用户更新成功";
const UPDATE_FAILED: &str = "更新失败";
const FULL_NAME_REQUIRED: &str = "请输入姓名";

/// Progress of the user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Not requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// List received.
    Loaded,
    /// Last request failed.
    Failed,
}

/// Identifies one list request; results of superseded requests are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Identifies one save of one edit dialog. A result whose dialog has since
/// been closed or reopened is not applied to the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditTicket {
    /// User being saved.
    pub user_id: i64,
    generation: u64,
}

/// The edit dialog for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDialog {
    /// User being edited.
    pub user_id: i64,
    /// Shown read-only.
    pub username: String,
    /// Full name input.
    pub full_name: String,
    /// Role selection.
    pub role: Role,
    /// Inline error.
    pub error: Option<String>,
    /// Save state.
    pub action: ActionState,
}

impl EditDialog {
    /// Dialog pre-filled from `user`.
    #[must_use]
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
            error: None,
            action: ActionState::Idle,
        }
    }

    /// Validates and marks the dialog pending.
    pub fn begin_submit(&mut self) -> Option<(i64, UpdateUserRequest)> {
        if self.action.is_pending() {
            return None;
        }

        if self.full_name.trim().is_empty() {
            self.error = Some(FULL_NAME_REQUIRED.to_string());
            return None;
        }

        self.error = None;
        self.action.begin();
        Some((
            self.user_id,
            UpdateUserRequest {
                full_name: self.full_name.clone(),
                role: self.role,
            },
        ))
    }
}

/// State of the user management screen.
#[derive(Debug, Clone, Default)]
pub struct UsersView {
    load: LoadState,
    users: Vec<User>,
    latest_ticket: u64,
    edit: Option<EditDialog>,
    edit_generation: u64,
    confirm_delete: Option<i64>,
    delete_action: ActionState,
    /// Auto-dismissing success/error messages.
    pub notices: Notices,
}

impl UsersView {
    /// A view that has not loaded anything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current load state.
    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Rows of the table.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The open edit dialog.
    #[must_use]
    pub fn edit(&self) -> Option<&EditDialog> {
        self.edit.as_ref()
    }

    /// Mutable access to the open edit dialog, for form input.
    pub fn edit_mut(&mut self) -> Option<&mut EditDialog> {
        self.edit.as_mut()
    }

    /// User awaiting delete confirmation.
    #[must_use]
    pub fn confirm_delete(&self) -> Option<i64> {
        self.confirm_delete
    }

    /// Whether a delete request is in flight.
    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.delete_action.is_pending()
    }

    // ==================== Loading ====================

    /// Starts a list request.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        self.load = LoadState::Loading;
        LoadTicket(self.latest_ticket)
    }

    /// Applies a list response. Returns `false` if `ticket` was superseded
    /// and the result was dropped.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: ApiResult<Vec<User>>) -> bool {
        if ticket.0 != self.latest_ticket {
            tracing::debug!(ticket = ticket.0, latest = self.latest_ticket, "Dropping stale user list");
            return false;
        }

        match result {
            Ok(users) => {
                self.users = users;
                self.load = LoadState::Loaded;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load users");
                self.load = LoadState::Failed;
                self.notices
                    .error(if e.is_network() { NETWORK_ERROR } else { LOAD_FAILED });
            }
        }
        true
    }

    /// Fetches the list from `client`.
    pub async fn load(&mut self, client: &QuickStoreClient) {
        let ticket = self.begin_load();
        let result = client.list_users().await;
        self.finish_load(ticket, result);
    }

    // ==================== Editing ====================

    /// Opens the edit dialog for user `id`. Returns `false` if no such row.
    pub fn open_edit(&mut self, id: i64) -> bool {
        match self.users.iter().find(|u| u.id == id) {
            Some(user) => {
                self.edit_generation += 1;
                self.edit = Some(EditDialog::for_user(user));
                true
            }
            None => false,
        }
    }

    /// Closes the edit dialog, discarding input.
    pub fn close_edit(&mut self) {
        self.edit = None;
    }

    /// Starts saving the open dialog.
    pub fn begin_edit(&mut self) -> Option<(EditTicket, UpdateUserRequest)> {
        let generation = self.edit_generation;
        let (user_id, req) = self.edit.as_mut()?.begin_submit()?;
        Some((EditTicket { user_id, generation }, req))
    }

    /// Applies the save response. Returns `true` when the list must be
    /// reloaded.
    ///
    /// The dialog closes only on success, and only if it is still the one
    /// `ticket` was issued for. Otherwise the outcome is reported as a notice
    /// and the open dialog is left untouched.
    pub fn finish_edit(&mut self, ticket: EditTicket, result: ApiResult<()>) -> bool {
        let current = self.edit_generation == ticket.generation
            && self.edit.as_ref().is_some_and(|d| d.user_id == ticket.user_id);

        match result {
            Ok(()) => {
                if current {
                    self.edit = None;
                }
                self.notices.success(UPDATE_SUCCESS);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, user_id = ticket.user_id, "Failed to update user");
                let message = if e.is_network() {
                    NETWORK_ERROR.to_string()
                } else {
                    e.message_or(UPDATE_FAILED)
                };
                match self.edit.as_mut() {
                    Some(dialog) if current => {
                        dialog.error = Some(message);
                        dialog.action.finish(false);
                    }
                    _ => self.notices.error(message),
                }
                false
            }
        }
    }

    /// Saves the open dialog and reloads on success.
    pub async fn save_edit(&mut self, client: &QuickStoreClient) -> bool {
        let Some((ticket, req)) = self.begin_edit() else {
            return false;
        };
        let result = client.update_user(ticket.user_id, &req).await;
        let saved = self.finish_edit(ticket, result);
        if saved {
            self.load(client).await;
        }
        saved
    }

    // ==================== Deleting ====================

    /// Asks for confirmation before deleting user `id`.
    pub fn request_delete(&mut self, id: i64) {
        self.confirm_delete = Some(id);
    }

    /// Dismisses the confirmation without deleting.
    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }

    /// Confirms the pending delete and returns the id to send.
    pub fn begin_delete(&mut self) -> Option<i64> {
        if self.delete_action.is_pending() {
            return None;
        }
        let id = self.confirm_delete.take()?;
        self.delete_action.begin();
        Some(id)
    }

    /// Applies the delete response. Returns `true` when the list must be
    /// reloaded.
    pub fn finish_delete(&mut self, result: ApiResult<()>) -> bool {
        match result {
            Ok(()) => {
                self.delete_action.finish(true);
                self.notices.success(DELETE_SUCCESS);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to delete user");
                self.delete_action.finish(false);
                self.notices
                    .error(if e.is_network() { NETWORK_ERROR } else { DELETE_FAILED });
                false
            }
        }
    }

    /// Deletes the confirmed user and reloads on success.
    pub async fn delete_confirmed(&mut self, client: &QuickStoreClient) -> bool {
        let Some(id) = self.begin_delete() else {
            return false;
        };
        let result = client.delete_user(id).await;
        let deleted = self.finish_delete(result);
        if deleted {
            self.load(client).await;
        }
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::session::{MemoryStorage, SessionService};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(uri: String, token: Option<&str>) -> QuickStoreClient {
        let session = SessionService::new(MemoryStorage::new());
        if let Some(token) = token {
            session.set_session(token, None).unwrap();
        }
        QuickStoreClient::new(uri, session)
    }

    fn user_json(id: i64, username: &str, full_name: &str, role: &str) -> Value {
        json!({
            "id": id,
            "username": username,
            "fullName": full_name,
            "role": role,
            "createdAt": "2024-02-03T04:05:06"
        })
    }

    #[tokio::test]
    async fn test_expired_token_shows_load_error_and_empty_table() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "token expired"})))
            .mount(&mock_server)
            .await;

        let mut view = UsersView::new();
        view.load(&client(mock_server.uri(), Some("stale"))).await;

        assert_eq!(view.load_state(), LoadState::Failed);
        assert_eq!(view.notices.error_text(), Some("获取用户列表失败"));
        assert!(view.users().is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_refetch_drops_row() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                user_json(1, "alice", "Alice A", "admin"),
                user_json(2, "bob", "Bob B", "staff"),
            ])))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([user_json(1, "alice", "Alice A", "admin")])),
            )
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/users/2"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client(mock_server.uri(), Some("tok"));
        let mut view = UsersView::new();
        view.load(&client).await;
        assert_eq!(view.users().len(), 2);

        view.request_delete(2);
        assert!(view.delete_confirmed(&client).await);

        assert!(view.users().iter().all(|u| u.id != 2));
        assert_eq!(view.notices.success_text(), Some("用户删除成功"));
        assert_eq!(view.confirm_delete(), None);
    }

    #[tokio::test]
    async fn test_cancelled_delete_sends_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut view = UsersView::new();
        view.request_delete(3);
        view.cancel_delete();

        assert!(!view.delete_confirmed(&client(mock_server.uri(), Some("tok"))).await);
    }

    #[tokio::test]
    async fn test_edit_full_name_keeps_role_and_closes_on_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([user_json(7, "wu", "Wu W", "warehouse")])),
            )
            .mount(&mock_server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/users/7"))
            .and(body_json(json!({"fullName": "Wu Wei", "role": "warehouse"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client(mock_server.uri(), Some("tok"));
        let mut view = UsersView::new();
        view.load(&client).await;

        assert!(view.open_edit(7));
        view.edit_mut().unwrap().full_name = "Wu Wei".to_string();

        assert!(view.save_edit(&client).await);
        assert!(view.edit().is_none());
        assert_eq!(view.notices.success_text(), Some("用户更新成功"));
    }

    #[tokio::test]
    async fn test_failed_edit_keeps_dialog_open() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([user_json(7, "wu", "Wu W", "warehouse")])),
            )
            .mount(&mock_server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/users/7"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "无权限"})))
            .mount(&mock_server)
            .await;

        let client = client(mock_server.uri(), Some("tok"));
        let mut view = UsersView::new();
        view.load(&client).await;
        view.open_edit(7);
        view.edit_mut().unwrap().role = Role::Admin;

        assert!(!view.save_edit(&client).await);

        let dialog = view.edit().unwrap();
        assert_eq!(dialog.error.as_deref(), Some("无权限"));
        assert_eq!(dialog.action, ActionState::Failed);
        assert_eq!(dialog.role, Role::Admin);
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let mut view = UsersView::new();
        let first = view.begin_load();
        let second = view.begin_load();

        assert!(view.finish_load(second, Ok(Vec::new())));
        assert!(!view.finish_load(
            first,
            Err(ApiError::Server {
                status: 500,
                message: None
            })
        ));
        assert_eq!(view.load_state(), LoadState::Loaded);
        assert_eq!(view.notices.error_text(), None);
    }

    #[test]
    fn test_edit_requires_full_name() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            full_name: "Alice A".to_string(),
            role: Role::Admin,
            created_at: None,
        };
        let mut dialog = EditDialog::for_user(&user);
        dialog.full_name = "  ".to_string();

        assert!(dialog.begin_submit().is_none());
        assert_eq!(dialog.error.as_deref(), Some("请输入姓名"));
        assert_eq!(dialog.action, ActionState::Idle);
    }

    #[test]
    fn test_open_edit_for_unknown_row() {
        let mut view = UsersView::new();
        assert!(!view.open_edit(99));
        assert!(view.edit().is_none());
    }

    fn view_with(users: &[(i64, &str)]) -> UsersView {
        let mut view = UsersView::new();
        let ticket = view.begin_load();
        let rows = users
            .iter()
            .map(|(id, name)| User {
                id: *id,
                username: name.to_lowercase(),
                full_name: (*name).to_string(),
                role: Role::Staff,
                created_at: None,
            })
            .collect();
        assert!(view.finish_load(ticket, Ok(rows)));
        view
    }

    #[test]
    fn test_late_edit_failure_does_not_touch_another_dialog() {
        let mut view = view_with(&[(7, "Wu"), (8, "Li")]);
        view.open_edit(7);
        let (ticket, _) = view.begin_edit().unwrap();

        view.close_edit();
        view.open_edit(8);
        view.edit_mut().unwrap().full_name = "Li Lei".to_string();

        let reload = view.finish_edit(
            ticket,
            Err(ApiError::Server {
                status: 403,
                message: Some("无权限".to_string()),
            }),
        );

        assert!(!reload);
        let dialog = view.edit().unwrap();
        assert_eq!(dialog.user_id, 8);
        assert_eq!(dialog.error, None);
        assert_eq!(view.notices.error_text(), Some("无权限"));

        assert!(view.finish_edit(ticket, Ok(())));
        assert_eq!(view.edit().map(|d| d.full_name.as_str()), Some("Li Lei"));
        assert_eq!(view.notices.success_text(), Some("用户更新成功"));
    }

    #[test]
    fn test_late_edit_result_ignores_reopened_dialog_for_same_user() {
        let mut view = view_with(&[(7, "Wu")]);
        view.open_edit(7);
        let (ticket, _) = view.begin_edit().unwrap();

        view.close_edit();
        view.open_edit(7);

        assert!(view.finish_edit(ticket, Ok(())));
        assert!(view.edit().is_some());
        assert_eq!(view.edit().unwrap().action, ActionState::Idle);
    }

    #[test]
    fn test_edit_sends_full_name_as_entered() {
        let mut view = view_with(&[(7, "Wu")]);
        view.open_edit(7);
        view.edit_mut().unwrap().full_name = " Wu Wei ".to_string();

        let (ticket, req) = view.begin_edit().unwrap();

        assert_eq!(ticket.user_id, 7);
        assert_eq!(req.full_name, " Wu Wei ");
    }

    #[tokio::test]
    async fn test_load_network_failure_message() {
        let mut view = UsersView::new();
        view.load(&client("http://127.0.0.1:1".to_string(), Some("tok")))
            .await;

        assert_eq!(view.load_state(), LoadState::Failed);
        assert_eq!(view.notices.error_text(), Some("网络错误，请稍后重试"));
        assert!(view.users().is_empty());
    }

    #[tokio::test]
    async fn test_delete_failure_message_keeps_rows() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/users/8"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "db down"})))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut view = view_with(&[(8, "Li")]);
        view.request_delete(8);

        assert!(!view.delete_confirmed(&client(mock_server.uri(), Some("tok"))).await);
        assert_eq!(view.notices.error_text(), Some("删除用户失败"));
        assert_eq!(view.users().len(), 1);
        assert!(!view.is_deleting());
    }
}
