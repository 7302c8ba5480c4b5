//! Userdesk - terminal admin panel for a user directory

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use userdesk::api::{ApiClient, MutationOutcome, UserService};
use userdesk::config::Config;
use userdesk::directory::{CREATED_MESSAGE, DELETE_CONFIRM_TEXT, UPDATED_MESSAGE};
use userdesk::user::{User, UserDraft};
use userdesk::{App, validate};

/// Terminal admin panel for a user directory
#[derive(Parser)]
#[command(name = "userdesk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the REST API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Override the GraphQL endpoint URL
    #[arg(long, global = true)]
    graphql_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all users
    List,
    /// Create a user
    Create {
        /// Display name (at least 3 characters)
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
    },
    /// Update the user currently stored under TARGET
    Update {
        /// Email of the user to update
        target: String,
        /// New display name (at least 3 characters)
        #[arg(long)]
        name: String,
        /// New email address
        #[arg(long)]
        email: String,
    },
    /// Delete a user by email
    Delete {
        /// Email of the user to delete
        email: String,
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Config {
        /// Print the config file path instead
        #[arg(long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    // Clear the log file on startup
    if let Err(e) = std::fs::write("/tmp/userdesk.log", "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Log to /tmp/userdesk.log - tail with: tail -f /tmp/userdesk.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender = tracing_appender::rolling::never("/tmp", "userdesk.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = load_config(&cli, &config_path)?;

    match cli.command {
        Some(Commands::Config { path }) => cmd_config(&config, &config_path, path),
        Some(Commands::List) => cmd_list(&ApiClient::from_config(&config)),
        Some(Commands::Create { name, email }) => {
            cmd_create(&ApiClient::from_config(&config), UserDraft { name, email })
        }
        Some(Commands::Update {
            target,
            name,
            email,
        }) => cmd_update(
            &ApiClient::from_config(&config),
            &target,
            UserDraft { name, email },
        ),
        Some(Commands::Delete { email, force }) => {
            cmd_delete(&ApiClient::from_config(&config), &email, force)
        }
        None => {
            let service: Arc<dyn UserService> = Arc::new(ApiClient::from_config(&config));
            let app = App::new(config, service);
            userdesk::tui::run(app)
        }
    }
}

fn load_config(cli: &Cli, path: &std::path::Path) -> Result<Config> {
    let mut config = Config::load_or_default(path)?;
    if let Some(url) = &cli.api_url {
        config.api_url.clone_from(url);
    }
    if let Some(url) = &cli.graphql_url {
        config.graphql_url.clone_from(url);
    }
    Ok(config)
}

fn cmd_config(config: &Config, path: &std::path::Path, path_only: bool) -> Result<()> {
    if path_only {
        println!("{}", path.display());
    } else {
        let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
        println!("{json}");
    }
    Ok(())
}

fn cmd_list(service: &dyn UserService) -> Result<()> {
    let users = service.list_users()?;
    print!("{}", format_table(&users));
    Ok(())
}

fn format_table(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found\n".to_string();
    }

    let index_width = users.len().to_string().len().max(1);
    let name_width = users
        .iter()
        .map(|u| u.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = format!("{:<index_width$}  {:<name_width$}  Email\n", "#", "Name");
    for (i, user) in users.iter().enumerate() {
        out.push_str(&format!(
            "{:<index_width$}  {:<name_width$}  {}\n",
            i + 1,
            user.name,
            user.email
        ));
    }
    out
}

fn cmd_create(service: &dyn UserService, draft: UserDraft) -> Result<()> {
    let user = validate::validate_create(&draft)?;
    match service.create_user(&user)? {
        MutationOutcome::Applied => println!("{CREATED_MESSAGE}"),
        MutationOutcome::Rejected(reason) => bail!("Could not create user: {reason}"),
    }
    Ok(())
}

fn cmd_update(service: &dyn UserService, target: &str, draft: UserDraft) -> Result<()> {
    let user = validate::validate_update(&draft)?;
    match service.update_user(target, &user)? {
        MutationOutcome::Applied => println!("{UPDATED_MESSAGE}"),
        MutationOutcome::Rejected(reason) => bail!("Could not update user: {reason}"),
    }
    Ok(())
}

fn cmd_delete(service: &dyn UserService, email: &str, force: bool) -> Result<()> {
    if !force {
        print!("Delete {email}? {DELETE_CONFIRM_TEXT} [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    match service.delete_user(email)? {
        MutationOutcome::Applied => println!("{email} has been deleted."),
        MutationOutcome::Rejected(reason) => bail!("Could not delete {email}: {reason}"),
    }
    Ok(())
}
