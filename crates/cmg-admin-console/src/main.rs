/*
[INPUT]:  CLI arguments, YAML configuration file, persisted session
[OUTPUT]: TUI, legacy panel or scripted category operations
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or tracing setup
*/

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use cmg_admin_adapter::{AdminClient, AdminError, AuthManager, SessionFile, SessionStore};
use cmg_admin_console::ConsoleConfig;
use cmg_admin_console::cli::{Cli, Command, commands, legacy};
use cmg_admin_console::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogWriterFactory, run_tui};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        if matches!(err.downcast_ref::<AdminError>(), Some(AdminError::SessionExpired)) {
            eprintln!("Hint: run `cmg-admin login --email <EMAIL>` to sign in again");
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Cli::parse();
    let command = args.command();

    let config = ConsoleConfig::load(args.config_path.as_deref(), args.api_url.as_deref())
        .context("load configuration")?;

    let log_buffer = Arc::new(Mutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
    // Keeps the rolling file writer flushing until exit
    let _file_guard = match command {
        Command::Tui => Some(init_tui_tracing(
            &args.log_level,
            &config.log_dir,
            LogWriterFactory::new(log_buffer.clone()),
        )?),
        _ => {
            init_tracing(&args.log_level)?;
            None
        }
    };

    let auth = build_auth(&config)?;
    info!(
        api_url = %config.api_url,
        authenticated = auth.is_authenticated(),
        "starting cmg-admin"
    );

    match command {
        Command::Tui => run_tui(auth, log_buffer, config.page_size).await,
        Command::Legacy => legacy::run_legacy(&auth, config.legacy_page_size).await,
        Command::Login { email, password } => commands::login(&auth, email, password).await,
        Command::Logout => commands::logout(&auth),
        Command::Categories(command) => {
            let mut stdout = std::io::stdout().lock();
            commands::run_categories(&auth, command, &mut stdout).await
        }
    }
}

fn build_auth(config: &ConsoleConfig) -> Result<AuthManager> {
    let store = SessionStore::with_file(SessionFile::new(&config.session_file));
    let client = AdminClient::with_session(config.client_config(), store)
        .context("create admin client")?;
    let auth = AuthManager::new(client);
    if auth.restore() {
        info!(session_file = %config.session_file.display(), "session restored");
    }
    Ok(auth)
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn init_tui_tracing(
    log_level: &str,
    log_dir: &Path,
    buffer_writer: LogWriterFactory,
) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("create log dir {}", log_dir.display()))?;
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("cmg-admin")
        .filename_suffix("log")
        .build(log_dir)
        .context("create rolling log file")?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(buffer_writer))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}
