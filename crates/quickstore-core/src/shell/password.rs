//! Change-password dialog.

use crate::api::{ApiResult, ChangePasswordRequest, QuickStoreClient};
use crate::views::{ActionState, NETWORK_ERROR, REQUIRED_FIELDS};

const PASSWORD_MISMATCH: &str = "两次输入的新密码不一致";
const CHANGE_SUCCESS: &str = "密码修改成功";
const CHANGE_FAILED: &str = "密码修改失败";

/// State of the change-password dialog. Dropping it resets every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordDialog {
    /// Current password input.
    pub old_password: String,
    /// New password input.
    pub new_password: String,
    /// New password confirmation input.
    pub confirm_password: String,
    /// Inline error.
    pub error: Option<String>,
    /// Inline success message.
    pub success: Option<String>,
    /// Submit state.
    pub action: ActionState,
}

impl PasswordDialog {
    /// Validates and marks the dialog pending.
    ///
    /// Mismatched new/confirm values never produce a request.
    pub fn begin_submit(&mut self) -> Option<ChangePasswordRequest> {
        if self.action.is_pending() {
            return None;
        }
        self.error = None;
        self.success = None;

        if self.new_password != self.confirm_password {
            self.error = Some(PASSWORD_MISMATCH.to_string());
            return None;
        }
        if self.old_password.is_empty() || self.new_password.is_empty() {
            self.error = Some(REQUIRED_FIELDS.to_string());
            return None;
        }

        self.action.begin();
        Some(ChangePasswordRequest {
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
            confirm_password: self.confirm_password.clone(),
        })
    }

    /// Applies the response.
    pub fn finish_submit(&mut self, result: ApiResult<()>) {
        match result {
            Ok(()) => {
                self.old_password.clear();
                self.new_password.clear();
                self.confirm_password.clear();
                self.success = Some(CHANGE_SUCCESS.to_string());
                self.action.finish(true);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Password change failed");
                self.error = Some(if e.is_network() {
                    NETWORK_ERROR.to_string()
                } else {
                    e.message_or(CHANGE_FAILED)
                });
                self.action.finish(false);
            }
        }
    }

    /// Runs a full submit. Returns `true` on success.
    pub async fn submit(&mut self, client: &QuickStoreClient) -> bool {
        let Some(req) = self.begin_submit() else {
            return false;
        };
        let result = client.change_password(&req).await;
        self.finish_submit(result);
        self.action == ActionState::Succeeded
    }
}
