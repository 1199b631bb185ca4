//! Command-line interface definitions for AlumNext.
//!
//! All CLI arguments and subcommands use the clap derive API. Global
//! options (verbosity, theme, data directory) apply to every subcommand;
//! running with no subcommand starts the interactive TUI.
//!
//! # Example
//!
//! ```bash
//! # Start the interactive TUI (default)
//! alumnext
//!
//! # Verbose mode for debugging
//! alumnext -v
//!
//! # Show whether a session is persisted, then drop it
//! alumnext status
//! alumnext logout
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Campus networking mockup with simulated sign-in.
///
/// AlumNext renders the landing, login, registration and dashboard screens
/// of a student/alumni networking platform in the terminal. Sessions are
/// fabricated locally and persisted to a single JSON record; no network
/// is involved.
#[derive(Debug, Parser)]
#[command(name = "alumnext")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit fatal errors as JSON on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Directory holding the persisted session record
    ///
    /// If not specified, a platform-specific data directory is used.
    #[arg(long, global = true, value_name = "PATH", env = "ALUMNEXT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// TUI color theme
    #[arg(long, global = true, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Subcommand to execute; omit to start the TUI
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for AlumNext.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Remove the persisted session without starting the TUI
    Logout,
    /// Report whether a session is persisted and for whom
    Status,
}

/// TUI color theme selection.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeArg {
    /// Follow the terminal background
    #[default]
    Auto,
    /// Dark navy background with gold accents
    Dark,
    /// Light background
    Light,
}
