//! AlumNext - Campus Networking Mockup
//!
//! A terminal rendition of a university alumni/student networking
//! platform front-end: landing, login, registration and dashboard
//! screens with simulated sign-in. Sessions are fabricated locally,
//! stamped with a placeholder token, and persisted to a single JSON
//! record; there is no backend and no real credential check.

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod forms;
pub mod logging;
pub mod password;
pub mod routes;
pub mod tui;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::auth::{AuthContext, SessionStore};
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::ExitCode;
use crate::tui::{run_tui, App, Theme};

/// Run the application logic with parsed CLI arguments.
///
/// Dispatches to the `logout`/`status` subcommands or starts the TUI.
/// Hydration runs to completion before the TUI becomes interactive, so
/// the route guard never observes the loading state in practice.
///
/// # Errors
///
/// Returns an error for store I/O failures, terminal failures, or an
/// undeterminable data directory. Interruption (Ctrl+C) is not an
/// error; it maps to [`ExitCode::Interrupted`].
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let config = Config::load();
    let data_dir = config.resolve_data_dir(cli.data_dir.as_ref())?;
    log::debug!("Session store directory: {}", data_dir.display());
    let store = SessionStore::new(&data_dir);

    match cli.command {
        Some(command) => run_command(command, &store),
        None => {
            let mut auth = AuthContext::new(store);
            auth.hydrate().context("Failed to restore session")?;

            let theme = Theme::from_arg(cli.theme.unwrap_or(config.theme));
            let mut app = App::new(auth, theme);

            // Ctrl+C delivered as a signal (outside raw mode) flips this
            // flag; inside raw mode the key reaches the app directly.
            let shutdown = Arc::new(AtomicBool::new(false));
            let handler_flag = Arc::clone(&shutdown);
            if let Err(e) = ctrlc::set_handler(move || {
                handler_flag.store(true, Ordering::SeqCst);
            }) {
                log::warn!("Failed to install Ctrl+C handler: {e}");
            }

            run_tui(&mut app, Some(Arc::clone(&shutdown)))?;

            if app.was_interrupted() || shutdown.load(Ordering::SeqCst) {
                log::info!("Interrupted by user");
                Ok(ExitCode::Interrupted)
            } else {
                Ok(ExitCode::Success)
            }
        }
    }
}

/// Execute a non-interactive subcommand against the session store.
///
/// `logout` removes the persisted record (absence included, so running it
/// twice succeeds both times); `status` reports the stored identity.
///
/// # Errors
///
/// Returns an error when the store cannot be read or cleared.
pub fn run_command(command: Commands, store: &SessionStore) -> Result<ExitCode> {
    match command {
        Commands::Logout => {
            store.clear().context("Failed to clear session")?;
            log::info!("Session cleared");
            println!("Signed out.");
            Ok(ExitCode::Success)
        }
        Commands::Status => {
            match store.load().context("Failed to read session")? {
                Some(session) => {
                    println!(
                        "Signed in as {} <{}> ({})",
                        session.user.name, session.user.email, session.role
                    );
                }
                None => println!("Not signed in."),
            }
            Ok(ExitCode::Success)
        }
    }
}
