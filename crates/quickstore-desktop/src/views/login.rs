//! # Login View

use dioxus::prelude::*;
use quickstore_core::views::LoginForm;

use crate::router::Route;
use crate::state::AppState;

/// Sign-in form.
///
/// Shows the notice carried over from registration, if any. On success the
/// session is stored and the dashboard opens.
#[component]
pub fn Login() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();

    let mut form = use_signal(|| LoginForm::with_notice(state.take_flash()));

    let mut do_login = move || {
        let Some(req) = form.write().begin_submit() else {
            return;
        };
        let client = state.client();

        spawn(async move {
            let result = client.login(&req.username, &req.password).await;
            let next = form.write().finish_submit(client.session(), result);
            if let Some(route) = next {
                tracing::info!(username = %req.username, "Signed in");
                nav.push(Route::from(&route));
            }
        });
    };

    let pending = form.read().action.is_pending();

    rsx! {
        div { class: "login-view",
            div { class: "login-card glass-panel",
                div { class: "login-header",
                    h1 { "QuickStore" }
                    p { class: "text-secondary", "登录" }
                }

                if let Some(notice) = form.read().notice.as_ref() {
                    div { class: "alert alert-success", "{notice}" }
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
                        label { r#for: "password", "密码" }
                        input {
                            id: "password",
                            r#type: "password",
                            value: "{form.read().password}",
                            disabled: pending,
                            oninput: move |evt| form.write().password = evt.value(),
                            onkeypress: move |evt| {
                                if evt.key() == Key::Enter {
                                    do_login();
                                }
                            },
                        }
                    }

                    if let Some(err) = form.read().error.as_ref() {
                        div { class: "alert alert-error", "{err}" }
                    }

                    button {
                        class: "btn-primary btn-lg btn-block",
                        disabled: pending,
                        onclick: move |_| do_login(),
                        if pending { "登录中..." } else { "登录" }
                    }

                    p { class: "login-hint text-secondary",
                        "还没有账号？"
                        Link { to: Route::Register {}, "注册" }
                    }
                }
            }
        }
    }
}
