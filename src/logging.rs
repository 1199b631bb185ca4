//! Logging setup for AlumNext.
//!
//! Uses the `log` facade with an `env_logger` backend writing to stderr.
//! `RUST_LOG` takes precedence when set; otherwise the level comes from
//! the CLI flags (`--quiet` → errors only, `-v` → debug, `-vv` → trace,
//! default info).
//!
//! While the TUI holds the alternate screen, stderr output is invisible
//! until exit, so interactive runs keep the default level at info and
//! rely on `status`/`logout` or a redirected stderr for debugging.

use env_logger::Builder;
use log::LevelFilter;
use std::env;
use std::io::Write;

/// Initialize the global logger. Call exactly once, before the TUI starts.
///
/// # Panics
///
/// Panics on a second call; `env_logger` installs a process-global logger.
pub fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();

    if env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(level_for(verbose, quiet));
    }

    // Targets matter once -v is on; below that a bare level prefix reads
    // better in a redirected stderr stream.
    let with_target = verbose >= 1;
    builder.format(move |buf, record| {
        let style = buf.default_level_style(record.level());
        if with_target {
            writeln!(
                buf,
                "{} {style}{:<5}{style:#} {}: {}",
                buf.timestamp_seconds(),
                record.level(),
                record.target(),
                record.args()
            )
        } else {
            writeln!(
                buf,
                "{style}{:<5}{style:#} {}",
                record.level(),
                record.args()
            )
        }
    });

    builder.init();
    log::debug!("Logging ready at {:?}", log::max_level());
}

/// CLI flags to level filter. `quiet` beats any verbosity count.
fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}
