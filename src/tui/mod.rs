//! Terminal User Interface module.
//!
//! Interactive screens for the AlumNext mockup using ratatui with the
//! crossterm backend.
//!
//! # Architecture
//!
//! The TUI follows a unidirectional data flow:
//! 1. Key events are captured from the terminal (crossterm)
//! 2. Events are translated to Actions for the current screen
//! 3. Actions modify the App state (navigation, drafts, auth)
//! 4. The UI renders based on the current App state
//!
//! One screen exists per route: landing, login, the two registration
//! forms, the dashboard and a 404 fallback.

pub mod app;
pub mod events;
pub mod run;
pub mod theme;
pub mod ui;

// Re-export commonly used types
pub use app::{Action, App};
pub use events::{EventError, EventHandler};
pub use run::{run_tui, TuiError, TuiResult};
pub use theme::Theme;
pub use ui::render;
