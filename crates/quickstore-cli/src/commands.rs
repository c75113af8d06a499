//! CLI command implementations.
//!
//! Each command drives the same view state machines as the desktop app, so
//! validation, messages and session handling are identical.

use anyhow::{anyhow, bail, Result};
use quickstore_core::routing::HistoryEntry;
use quickstore_core::shell::{PasswordDialog, APP_BRAND, APP_TITLE};
use quickstore_core::views::{
    LoadState, LoginForm, RegisterForm, UsersView, DELETE_CONFIRMATION, STAT_CARDS,
};
use quickstore_core::{
    AuthGate, Config, FileStorage, GateDecision, NavigationShell, Navigator, QuickStoreClient,
    Role, Route, SessionService, SessionStorage, User,
};
use std::io::{BufRead, Write};

/// Shared handles for a single CLI invocation.
#[derive(Debug, Clone)]
pub struct Context {
    pub client: QuickStoreClient,
}

impl Context {
    /// Builds the context from loaded configuration. Returns `None` when no
    /// session file location can be determined.
    pub fn from_config(config: &Config) -> Option<Self> {
        let path = config.session_path()?;
        tracing::debug!(path = %path.display(), api_url = %config.api_url, "Using session file");
        Some(Self::new(&config.api_url, FileStorage::new(path)))
    }

    pub fn new(api_url: &str, storage: impl SessionStorage + 'static) -> Self {
        let session = SessionService::new(storage);
        Self {
            client: QuickStoreClient::new(api_url, session),
        }
    }

    fn session(&self) -> &SessionService {
        self.client.session()
    }

    /// Fails unless a session token is stored.
    fn require_session(&self, route: &Route) -> Result<()> {
        match AuthGate::new(self.session().clone()).check(route) {
            GateDecision::Allow => Ok(()),
            GateDecision::Redirect { .. } => {
                bail!("not signed in; run `quickstore login` first")
            }
        }
    }
}

/// Create a new account.
pub async fn register(
    ctx: &Context,
    username: String,
    password: String,
    confirm_password: String,
    full_name: String,
    role: Role,
) -> Result<()> {
    let mut form = RegisterForm {
        username,
        password,
        confirm_password,
        full_name,
        role,
        ..RegisterForm::default()
    };

    match form.submit(&ctx.client).await {
        Some(HistoryEntry { route, notice }) => {
            if let Some(notice) = notice {
                println!("{notice}");
            }
            println!("Next: {route}");
            Ok(())
        }
        None => Err(rejected(form.error)),
    }
}

/// Sign in and store the session.
pub async fn login(ctx: &Context, username: String, password: String) -> Result<()> {
    let mut form = LoginForm {
        username,
        password,
        ..LoginForm::default()
    };

    match form.submit(&ctx.client).await {
        Some(route) => {
            let who = ctx
                .session()
                .user()
                .map_or_else(|| form.username.clone(), |u| describe_user(&u));
            println!("Signed in as {who}");
            println!("Next: {route}");
            Ok(())
        }
        None => Err(rejected(form.error)),
    }
}

/// Clear the stored session.
pub fn logout(ctx: &Context) -> Result<()> {
    let mut shell = NavigationShell::new(Route::Dashboard);
    let route = shell.logout(ctx.session());
    println!("Signed out");
    println!("Next: {route}");
    Ok(())
}

/// Show the signed-in user.
pub fn whoami(ctx: &Context) -> Result<()> {
    let session = ctx.session().snapshot();
    match (session.token, session.user) {
        (None, _) => println!("Not signed in"),
        (Some(_), Some(user)) => println!("{}", describe_user(&user)),
        (Some(_), None) => println!("Signed in (no user profile stored)"),
    }
    Ok(())
}

/// Change the signed-in user's password.
pub async fn passwd(ctx: &Context, old: String, new: String, confirm: String) -> Result<()> {
    ctx.require_session(&Route::Dashboard)?;

    let mut shell = NavigationShell::new(Route::Dashboard);
    shell.open_password_dialog();
    let dialog = shell
        .password_dialog_mut()
        .ok_or_else(|| anyhow!("password dialog did not open"))?;
    *dialog = PasswordDialog {
        old_password: old,
        new_password: new,
        confirm_password: confirm,
        ..PasswordDialog::default()
    };

    if dialog.submit(&ctx.client).await {
        println!("{}", dialog.success.as_deref().unwrap_or_default());
        Ok(())
    } else {
        Err(rejected(dialog.error.take()))
    }
}

/// List all users.
pub async fn users_list(ctx: &Context) -> Result<()> {
    ctx.require_session(&Route::Users)?;

    let mut view = UsersView::new();
    view.load(&ctx.client).await;

    print!("{}", render_users_table(view.users()));
    if view.load_state() == LoadState::Failed {
        return Err(rejected(view.notices.error_text().map(str::to_string)));
    }
    Ok(())
}

/// Change a user's full name and/or role. Unspecified fields keep their
/// current values.
pub async fn users_edit(
    ctx: &Context,
    id: i64,
    full_name: Option<String>,
    role: Option<Role>,
) -> Result<()> {
    ctx.require_session(&Route::Users)?;

    let mut view = UsersView::new();
    view.load(&ctx.client).await;
    if view.load_state() == LoadState::Failed {
        return Err(rejected(view.notices.error_text().map(str::to_string)));
    }
    if !view.open_edit(id) {
        bail!("no user with id {id}");
    }

    if let Some(dialog) = view.edit_mut() {
        if let Some(name) = full_name {
            dialog.full_name = name;
        }
        if let Some(role) = role {
            dialog.role = role;
        }
    }

    if view.save_edit(&ctx.client).await {
        if let Some(text) = view.notices.success_text() {
            println!("{text}");
        }
        print!("{}", render_users_table(view.users()));
        Ok(())
    } else {
        Err(rejected(view.edit().and_then(|d| d.error.clone())))
    }
}

/// Delete a user, asking for confirmation unless `yes` is set.
pub async fn users_delete(ctx: &Context, id: i64, yes: bool) -> Result<()> {
    ctx.require_session(&Route::Users)?;

    let mut view = UsersView::new();
    view.request_delete(id);

    if !yes && !confirm(&format!("{DELETE_CONFIRMATION} (id {id})"))? {
        view.cancel_delete();
        println!("Cancelled");
        return Ok(());
    }

    if view.delete_confirmed(&ctx.client).await {
        if let Some(text) = view.notices.success_text() {
            println!("{text}");
        }
        print!("{}", render_users_table(view.users()));
        Ok(())
    } else {
        Err(rejected(view.notices.error_text().map(str::to_string)))
    }
}

/// Resolve `path` through the auth gate and print where it lands.
pub fn nav(ctx: &Context, path: &str) -> Result<()> {
    let requested = Route::parse(path);
    let nav = Navigator::new(AuthGate::new(ctx.session().clone()), requested.clone());

    if nav.route() == &requested {
        println!("{requested}: allowed");
    } else {
        println!("{requested}: redirected to {}", nav.route());
    }

    if !nav.route().is_public() {
        print!("{}", render_shell(&NavigationShell::new(nav.route().clone())));
    }
    Ok(())
}

/// Show the dashboard figures.
pub fn dashboard(ctx: &Context) -> Result<()> {
    ctx.require_session(&Route::Dashboard)?;
    print!("{}", render_dashboard());
    Ok(())
}

// ==================== Rendering ====================

fn rejected(message: Option<String>) -> anyhow::Error {
    anyhow!(message.unwrap_or_else(|| "request failed".to_string()))
}

fn describe_user(user: &User) -> String {
    format!("{} ({}, {})", user.username, user.full_name, user.role.label())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn render_users_table(users: &[User]) -> String {
    let mut out = format!(
        "{:<6} {:<16} {:<20} {:<12} {}\n",
        "ID", "USERNAME", "FULL NAME", "ROLE", "CREATED"
    );
    for user in users {
        out.push_str(&format!(
            "{:<6} {:<16} {:<20} {:<12} {}\n",
            user.id,
            user.username,
            user.full_name,
            user.role.label(),
            user.created_at_display()
        ));
    }
    if users.is_empty() {
        out.push_str("(no users)\n");
    }
    out
}

fn render_shell(shell: &NavigationShell) -> String {
    let mut out = format!("{APP_BRAND} | {APP_TITLE}\n");
    for item in shell.menu() {
        let marker = if shell.is_active(item) { '>' } else { ' ' };
        out.push_str(&format!("{marker} {} {:<10} {}\n", item.icon, item.label, item.path));
    }
    let route = shell.current();
    if route.is_placeholder() {
        out.push_str("\nPage under construction\n");
    } else if matches!(route, Route::NotFound(_)) {
        out.push_str("\nPage not found\n");
    }
    out
}

fn render_dashboard() -> String {
    let mut out = String::from("Dashboard\n=========\n");
    for card in &STAT_CARDS {
        out.push_str(&format!(
            "{:<18} {:>6}  {}\n",
            card.title, card.value, card.description
        ));
    }
    out
}
