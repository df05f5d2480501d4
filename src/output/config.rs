//! Output configuration types

use std::path::PathBuf;

use termcolor::ColorChoice;

/// Configuration for rendering and writing the tree.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Wrap the text in a ```` ```text ```` fence.
    pub markdown: bool,
    /// Color policy for stdout. Markdown and file output are always plain.
    pub color: ColorChoice,
    /// Write to this file instead of stdout.
    pub output_file: Option<PathBuf>,
}

impl OutputConfig {
    /// Effective color choice for console output.
    pub fn console_color(&self) -> ColorChoice {
        if self.markdown || self.output_file.is_some() {
            ColorChoice::Never
        } else {
            self.color
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            markdown: false,
            color: ColorChoice::Never,
            output_file: None,
        }
    }
}
