//! # Change-Password Dialog

use dioxus::prelude::*;
use quickstore_core::NavigationShell;

use crate::state::AppState;

/// Modal form for changing the signed-in user's password.
///
/// Closing it drops the dialog state, so reopening starts blank and a
/// response still in flight for the old dialog is ignored.
#[component]
pub fn PasswordDialog() -> Element {
    let state = use_context::<AppState>();
    let mut shell = use_context::<Signal<NavigationShell>>();

    let on_submit = move |_| {
        let Some((ticket, req)) = shell.write().begin_password_submit() else {
            return;
        };
        let client = state.client();

        spawn(async move {
            let result = client.change_password(&req).await;
            shell.write().finish_password_submit(ticket, result);
        });
    };

    let Some(dialog) = shell.read().password_dialog().cloned() else {
        return rsx! {};
    };
    let pending = dialog.action.is_pending();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal glass-panel",
                h3 { "修改密码" }

                div { class: "form-group",
                    label { r#for: "old-password", "原密码" }
                    input {
                        id: "old-password",
                        r#type: "password",
                        value: "{dialog.old_password}",
                        disabled: pending,
                        oninput: move |evt| {
                            if let Some(d) = shell.write().password_dialog_mut() {
                                d.old_password = evt.value();
                            }
                        },
                    }
                }

                div { class: "form-group",
                    label { r#for: "new-password", "新密码" }
                    input {
                        id: "new-password",
                        r#type: "password",
                        value: "{dialog.new_password}",
                        disabled: pending,
                        oninput: move |evt| {
                            if let Some(d) = shell.write().password_dialog_mut() {
                                d.new_password = evt.value();
                            }
                        },
                    }
                }

                div { class: "form-group",
                    label { r#for: "confirm-password", "确认新密码" }
                    input {
                        id: "confirm-password",
                        r#type: "password",
                        value: "{dialog.confirm_password}",
                        disabled: pending,
                        oninput: move |evt| {
                            if let Some(d) = shell.write().password_dialog_mut() {
                                d.confirm_password = evt.value();
                            }
                        },
                    }
                }

                if let Some(err) = dialog.error.as_ref() {
                    div { class: "alert alert-error", "{err}" }
                }
                if let Some(msg) = dialog.success.as_ref() {
                    div { class: "alert alert-success", "{msg}" }
                }

                div { class: "btn-group",
                    button {
                        class: "btn-ghost",
                        onclick: move |_| shell.write().close_password_dialog(),
                        "取消"
                    }
                    button {
                        class: "btn-primary",
                        disabled: pending,
                        onclick: on_submit,
                        if pending { "提交中..." } else { "确认修改" }
                    }
                }
            }
        }
    }
}
