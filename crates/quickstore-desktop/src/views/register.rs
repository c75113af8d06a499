//! # Register View

use dioxus::prelude::*;
use quickstore_core::views::RegisterForm;
use quickstore_core::Role;

use crate::router::Route;
use crate::state::AppState;

/// Account registration form.
///
/// On success the login page opens with a "registered" notice.
#[component]
pub fn Register() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();

    let mut form = use_signal(RegisterForm::default);

    let on_submit = move |_| {
        let Some(req) = form.write().begin_submit() else {
            return;
        };
        let client = state.client();

        spawn(async move {
            let result = client.register(&req).await;
            let next = form.write().finish_submit(result);
            if let Some(entry) = next {
                tracing::info!(username = %req.username, "Registered");
                state.set_flash(entry.notice);
                nav.push(Route::from(&entry.route));
            }
        });
    };

    let pending = form.read().action.is_pending();
    let role = form.read().role;

    rsx! {
        div { class: "login-view",
            div { class: "login-card glass-panel",
                div { class: "login-header",
                    h1 { "QuickStore" }
                    p { class: "text-secondary", "注册新账号" }
                }

                div { class: "login-form",
                    div { class: "form-group",
                        label { r#for: "username", "用户名" }
                        input {
                            id: "username",
                            r#type: "text",
                            value: "{form.read().username}",
                            disabled: pending,
                            oninput: move |evt| form.write().username = evt.value(),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "full-name", "姓名" }
                        input {
                            id: "full-name",
                            r#type: "text",
                            value: "{form.read().full_name}",
                            disabled: pending,
                            oninput: move |evt| form.write().full_name = evt.value(),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "password", "密码" }
                        input {
                            id: "password",
                            r#type: "password",
                            value: "{form.read().password}",
                            disabled: pending,
                            oninput: move |evt| form.write().password = evt.value(),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "confirm-password", "确认密码" }
                        input {
                            id: "confirm-password",
                            r#type: "password",
                            value: "{form.read().confirm_password}",
                            disabled: pending,
                            oninput: move |evt| form.write().confirm_password = evt.value(),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "role", "角色" }
                        select {
                            id: "role",
                            value: "{role.as_str()}",
                            disabled: pending,
                            onchange: move |evt| {
                                if let Ok(role) = evt.value().parse::<Role>() {
                                    form.write().role = role;
                                }
                            },
                            for option_role in Role::ALL {
                                option {
                                    value: "{option_role.as_str()}",
                                    selected: option_role == role,
                                    "{option_role.label()}"
                                }
                            }
                        }
                    }

                    if let Some(err) = form.read().error.as_ref() {
                        div { class: "alert alert-error", "{err}" }
                    }

                    button {
                        class: "btn-primary btn-lg btn-block",
                        disabled: pending,
                        onclick: on_submit,
                        if pending { "注册中..." } else { "注册" }
                    }

                    p { class: "login-hint text-secondary",
                        "已有账号？"
                        Link { to: Route::Login {}, "登录" }
                    }
                }
            }
        }
    }
}
