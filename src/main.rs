//! CLI entry point for codetree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use codetree::tree::{DEFAULT_IGNORE, split_list};
use codetree::{ExtensionSet, OutputConfig, TreeConfig, TreeWalker, emit};
use log::LevelFilter;
use termcolor::ColorChoice;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

fn color_choice(mode: ColorMode) -> ColorChoice {
    if should_use_color(mode) {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    }
}

#[derive(Parser, Debug)]
#[command(name = "codetree")]
#[command(about = "Pretty directory tree with box-drawing characters.")]
#[command(version)]
struct Args {
    /// Root folder
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Limit traversal depth (0 = list root only)
    #[arg(short = 'L', long = "max-depth", value_name = "N")]
    max_depth: Option<usize>,

    /// Show only code-ish files
    #[arg(long = "only-code")]
    only_code: bool,

    /// Comma-separated extra file extensions to include (e.g. .tex,.r)
    #[arg(long = "exts", value_name = "LIST")]
    exts: Option<String>,

    /// Comma-separated names to ignore wherever they appear in a path
    #[arg(long = "ignore", value_name = "LIST", default_value_t = DEFAULT_IGNORE.join(","))]
    ignore: String,

    /// Include dotfiles and dotfolders
    #[arg(long = "show-hidden")]
    show_hidden: bool,

    /// Wrap output in a ```text code block
    #[arg(long = "markdown")]
    markdown: bool,

    /// Write to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn tree_config(&self) -> TreeConfig {
        let extra = self.exts.as_deref().map(split_list).unwrap_or_default();
        TreeConfig::default()
            .with_max_depth(self.max_depth)
            .with_only_code(self.only_code)
            .with_ignore(split_list(&self.ignore))
            .with_extensions(ExtensionSet::with_extra(extra))
            .with_show_hidden(self.show_hidden)
    }

    fn output_config(&self) -> OutputConfig {
        OutputConfig {
            markdown: self.markdown,
            color: color_choice(self.color),
            output_file: self.output.clone(),
        }
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let walker = TreeWalker::new(args.tree_config());
    let rows = walker.walk(&args.path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    log::debug!("rendered {} rows", rows.len());

    if let Err(e) = emit(&rows, &args.output_config()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
