//! # Users View
//!
//! User management table with edit and delete dialogs.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use quickstore_core::views::{LoadState, NoticeKind, UsersView, DELETE_CONFIRMATION};
use quickstore_core::Role;

use crate::state::AppState;

const NOTICE_POLL: Duration = Duration::from_millis(250);

/// User management view.
///
/// Loads the list on mount and again after every successful edit or delete.
/// Only the newest list request is applied.
#[component]
pub fn Users() -> Element {
    let state = use_context::<AppState>();
    let mut view = use_signal(UsersView::new);

    let mut reload = move || {
        let ticket = view.write().begin_load();
        let client = state.client();
        spawn(async move {
            let result = client.list_users().await;
            view.write().finish_load(ticket, result);
        });
    };

    use_hook(move || reload());

    // Notices dismiss themselves after a few seconds.
    use_future(move || async move {
        loop {
            tokio::time::sleep(NOTICE_POLL).await;
            let due = view
                .peek()
                .notices
                .next_deadline()
                .is_some_and(|deadline| deadline <= Instant::now());
            if due {
                view.write().notices.expire(Instant::now());
            }
        }
    });

    let on_save = move |_| {
        let Some((ticket, req)) = view.write().begin_edit() else {
            return;
        };
        let client = state.client();
        spawn(async move {
            let result = client.update_user(ticket.user_id, &req).await;
            if view.write().finish_edit(ticket, result) {
                reload();
            }
        });
    };

    let on_confirm_delete = move |_| {
        let Some(id) = view.write().begin_delete() else {
            return;
        };
        let client = state.client();
        spawn(async move {
            let result = client.delete_user(id).await;
            if view.write().finish_delete(result) {
                reload();
            }
        });
    };

    let snapshot = view.read().clone();

    rsx! {
        div { class: "users-view",
            div { class: "page-header",
                h2 { "用户管理" }
                button {
                    class: "btn-ghost",
                    disabled: snapshot.load_state() == LoadState::Loading,
                    onclick: move |_| reload(),
                    "刷新"
                }
            }

            if let Some(text) = snapshot.notices.success_text() {
                div { class: "alert alert-success",
                    span { "{text}" }
                    button {
                        class: "btn-sm btn-ghost",
                        onclick: move |_| view.write().notices.dismiss(NoticeKind::Success),
                        "×"
                    }
                }
            }
            if let Some(text) = snapshot.notices.error_text() {
                div { class: "alert alert-error",
                    span { "{text}" }
                    button {
                        class: "btn-sm btn-ghost",
                        onclick: move |_| view.write().notices.dismiss(NoticeKind::Error),
                        "×"
                    }
                }
            }

            if snapshot.load_state() == LoadState::Loading {
                p { class: "text-secondary", "加载中..." }
            }

            table { class: "data-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "用户名" }
                        th { "姓名" }
                        th { "角色" }
                        th { "创建时间" }
                        th { "操作" }
                    }
                }
                tbody {
                    for (id, user) in snapshot.users().iter().map(|u| (u.id, u.clone())) {
                        tr { key: "{id}",
                            td { "{user.id}" }
                            td { "{user.username}" }
                            td { "{user.full_name}" }
                            td { "{user.role.label()}" }
                            td { "{user.created_at_display()}" }
                            td {
                                button {
                                    class: "btn-sm btn-ghost",
                                    onclick: move |_| {
                                        view.write().open_edit(id);
                                    },
                                    "编辑"
                                }
                                button {
                                    class: "btn-sm btn-danger",
                                    disabled: snapshot.is_deleting(),
                                    onclick: move |_| view.write().request_delete(id),
                                    "删除"
                                }
                            }
                        }
                    }
                }
            }

            if let Some(dialog) = snapshot.edit() {
                div { class: "modal-backdrop",
                    div { class: "modal glass-panel",
                        h3 { "编辑用户" }

                        div { class: "form-group",
                            label { "用户名" }
                            input { r#type: "text", value: "{dialog.username}", disabled: true }
                        }

                        div { class: "form-group",
                            label { r#for: "edit-full-name", "姓名" }
                            input {
                                id: "edit-full-name",
                                r#type: "text",
                                value: "{dialog.full_name}",
                                disabled: dialog.action.is_pending(),
                                oninput: move |evt| {
                                    if let Some(d) = view.write().edit_mut() {
                                        d.full_name = evt.value();
                                    }
                                },
                            }
                        }

                        div { class: "form-group",
                            label { r#for: "edit-role", "角色" }
                            select {
                                id: "edit-role",
                                value: "{dialog.role.as_str()}",
                                disabled: dialog.action.is_pending(),
                                onchange: move |evt| {
                                    if let (Ok(role), Some(d)) =
                                        (evt.value().parse::<Role>(), view.write().edit_mut())
                                    {
                                        d.role = role;
                                    }
                                },
                                for role in Role::ALL {
                                    option {
                                        value: "{role.as_str()}",
                                        selected: role == dialog.role,
                                        "{role.label()}"
                                    }
                                }
                            }
                        }

                        if let Some(err) = dialog.error.as_ref() {
                            div { class: "alert alert-error", "{err}" }
                        }

                        div { class: "btn-group",
                            button {
                                class: "btn-ghost",
                                onclick: move |_| view.write().close_edit(),
                                "取消"
                            }
                            button {
                                class: "btn-primary",
                                disabled: dialog.action.is_pending(),
                                onclick: on_save,
                                if dialog.action.is_pending() { "保存中..." } else { "保存" }
                            }
                        }
                    }
                }
            }

            if snapshot.confirm_delete().is_some() {
                div { class: "modal-backdrop",
                    div { class: "modal glass-panel",
                        p { "{DELETE_CONFIRMATION}" }
                        div { class: "btn-group",
                            button {
                                class: "btn-ghost",
                                onclick: move |_| view.write().cancel_delete(),
                                "取消"
                            }
                            button {
                                class: "btn-danger",
                                disabled: snapshot.is_deleting(),
                                onclick: on_confirm_delete,
                                "删除"
                            }
                        }
                    }
                }
            }
        }
    }
}
