//! QuickStore CLI - Command-line interface for the QuickStore console.

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use quickstore_core::{Config, Role};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::Context;

/// QuickStore - warehouse console
#[derive(Parser, Debug)]
#[command(name = "quickstore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Backend origin (overrides config and QUICKSTORE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Session file (defaults to the platform config directory)
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new account
    Register {
        /// Username
        #[arg(long)]
        username: String,
        /// Password
        #[arg(long)]
        password: String,
        /// Password again
        #[arg(long)]
        confirm_password: String,
        /// Full name
        #[arg(long)]
        full_name: String,
        /// Role: admin, staff or warehouse
        #[arg(long, default_value = "staff")]
        role: Role,
    },

    /// Sign in and store the session
    Login {
        /// Username
        #[arg(long)]
        username: String,
        /// Password
        #[arg(long)]
        password: String,
    },

    /// Clear the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Change the signed-in user's password
    Passwd {
        /// Current password
        #[arg(long)]
        old: String,
        /// New password
        #[arg(long)]
        new: String,
        /// New password again
        #[arg(long)]
        confirm: String,
    },

    /// Manage user accounts
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Resolve a path through the auth gate and show the menu
    Nav {
        /// Path such as /users
        path: String,
    },

    /// Show the dashboard figures
    Dashboard,

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug)]
enum UserCommands {
    /// List all users
    List,

    /// Change a user's full name and/or role
    Edit {
        /// User id
        id: i64,
        /// New full name
        #[arg(long)]
        full_name: Option<String>,
        /// New role
        #[arg(long)]
        role: Option<Role>,
    },

    /// Delete a user
    Delete {
        /// User id
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("quickstore={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if matches!(cli.command, Commands::Version) {
        println!("quickstore {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = Config::load().with_api_url_override(cli.api_url);
    if cli.session_file.is_some() {
        config.session_file = cli.session_file;
    }
    let ctx = Context::from_config(&config).context("cannot locate the session file")?;

    match cli.command {
        Commands::Register {
            username,
            password,
            confirm_password,
            full_name,
            role,
        } => commands::register(&ctx, username, password, confirm_password, full_name, role).await?,
        Commands::Login { username, password } => commands::login(&ctx, username, password).await?,
        Commands::Logout => commands::logout(&ctx)?,
        Commands::Whoami => commands::whoami(&ctx)?,
        Commands::Passwd { old, new, confirm } => commands::passwd(&ctx, old, new, confirm).await?,
        Commands::Users { command } => match command {
            UserCommands::List => commands::users_list(&ctx).await?,
            UserCommands::Edit {
                id,
                full_name,
                role,
            } => commands::users_edit(&ctx, id, full_name, role).await?,
            UserCommands::Delete { id, yes } => commands::users_delete(&ctx, id, yes).await?,
        },
        Commands::Nav { path } => commands::nav(&ctx, &path)?,
        Commands::Dashboard => commands::dashboard(&ctx)?,
        Commands::Version => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_users_edit() {
        let cli = Cli::try_parse_from([
            "quickstore", "users", "edit", "7", "--full-name", "Wu Wei", "--role", "admin",
        ])
        .unwrap();

        match cli.command {
            Commands::Users {
                command: UserCommands::Edit { id, full_name, role },
            } => {
                assert_eq!(id, 7);
                assert_eq!(full_name.as_deref(), Some("Wu Wei"));
                assert_eq!(role, Some(Role::Admin));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_register_role_defaults_to_staff() {
        let cli = Cli::try_parse_from([
            "quickstore",
            "register",
            "--username",
            "alice",
            "--password",
            "p1",
            "--confirm-password",
            "p1",
            "--full-name",
            "Alice A",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Commands::Register {
                role: Role::Staff,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = Cli::try_parse_from(["quickstore", "users", "edit", "1", "--role", "boss"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "quickstore",
            "whoami",
            "--api-url",
            "http://api:9000",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://api:9000"));
        assert_eq!(cli.verbose, 1);
    }
}
