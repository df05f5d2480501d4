//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `text` - Joined plain text and markdown fencing
//! - `console` - Colored line-by-line console output

mod config;
mod console;
mod text;

use crate::error::{Result, TreeError};
use crate::tree::TreeRow;

// Re-export public types and functions
pub use config::OutputConfig;
pub use console::ConsoleFormatter;
pub use text::{render_rows, render_text, wrap_markdown, write_file};

/// Deliver rows to the configured destination.
///
/// Files receive the exact text payload. Stdout gets the payload plus a
/// final newline, colored per [`OutputConfig::console_color`].
pub fn emit(rows: &[TreeRow], config: &OutputConfig) -> Result<()> {
    if let Some(path) = &config.output_file {
        let text = render_text(rows, config.markdown);
        write_file(path, &text)?;
        log::info!("wrote {} lines to {}", rows.len(), path.display());
        return Ok(());
    }

    let stdout_err = |e: std::io::Error| TreeError::io("<stdout>", e);
    if config.markdown {
        let text = render_text(rows, true);
        println_checked(&text).map_err(stdout_err)
    } else {
        ConsoleFormatter::stdout(config.console_color())
            .write_rows(rows)
            .map_err(stdout_err)
    }
}

fn println_checked(text: &str) -> std::io::Result<()> {
    use std::io::Write;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text)?;
    stdout.flush()
}
