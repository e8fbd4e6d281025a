//! Inventory Desk - terminal front end for the Smart Inventory API
//!
//! Runs one command given on the command line, or an interactive shell
//! when none is given.

mod cli;
mod config;
mod context;
mod error;
mod notify;
mod prompt;
mod render;
mod shell;
mod views;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::Cli;
use crate::config::{DeskConfig, LOG_FILE};
use crate::context::AppContext;
use crate::notify::Notice;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        )
    }
}

/// Daily log file under the data directory; the console only with `--verbose`
///
/// The returned guard flushes the file writer and must live until exit.
fn init_logging(config: &DeskConfig) -> anyhow::Result<WorkerGuard> {
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create logs directory {}", log_dir.display()))?;

    let file_appender = rolling::daily(&log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = if let Ok(from_env) = EnvFilter::try_from_default_env() {
        from_env
    } else if cfg!(debug_assertions) {
        EnvFilter::new("info,inventory_desk=debug,inventory_client=debug,reqwest=warn")
    } else {
        EnvFilter::new("warn,inventory_desk=info,inventory_client=info")
    };

    let file_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_writer(non_blocking_file);

    // Notices already reach the terminal, so the console layer is opt-in
    let console_layer = config.verbose.then(|| {
        fmt::layer()
            .with_timer(LocalTimer)
            .with_ansi(true)
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        let msg = info.to_string();
        eprintln!("!!! DESK PANIC !!!\nMessage: {}\nBacktrace:\n{}", msg, backtrace);
        tracing::error!(target: "panic", message = %msg, backtrace = %backtrace, "panic occurred");
    }));

    tracing::info!(path = %log_dir.display(), "Tracing initialized");
    Ok(guard)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // A missing .env is fine; the environment and flags still apply
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = DeskConfig::from_cli(&cli);
    let _guard = init_logging(&config)?;

    tracing::info!(
        api_url = %config.api_url,
        timeout_secs = config.timeout_secs,
        data_dir = %config.data_dir().display(),
        "Inventory desk starting"
    );

    let mut ctx = AppContext::new(&config).context("Failed to start the desk")?;

    let Some(command) = cli.command else {
        shell::run(&mut ctx).await?;
        return Ok(ExitCode::SUCCESS);
    };

    match views::run(&mut ctx, command).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::warn!(code = %e.code(), error = %e, "Command failed");
            Notice::error(e.to_string()).emit();
            Ok(ExitCode::FAILURE)
        }
    }
}
