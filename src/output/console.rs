//! Console output formatter
//!
//! `ConsoleFormatter` writes rows line by line to a `WriteColor` sink,
//! highlighting directories and denied entries.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{RowKind, TreeRow};

/// Writes rows with colors to stdout or any other `WriteColor`.
pub struct ConsoleFormatter<W: WriteColor> {
    out: W,
}

impl ConsoleFormatter<StandardStream> {
    pub fn stdout(choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> ConsoleFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_row(&mut self, row: &TreeRow) -> io::Result<()> {
        write!(self.out, "{}{}", row.prefix, row.connector())?;

        match row.kind {
            RowKind::Root | RowKind::Dir => {
                self.out
                    .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(self.out, "{}/", row.name)?;
                self.out.reset()?;
            }
            RowKind::File => {
                write!(self.out, "{}", row.name)?;
            }
            RowKind::Denied => {
                self.out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write!(self.out, "[denied]")?;
                self.out.reset()?;
                write!(self.out, " {}/", row.name)?;
            }
        }
        writeln!(self.out)
    }

    pub fn write_rows(&mut self, rows: &[TreeRow]) -> io::Result<()> {
        for row in rows {
            self.write_row(row)?;
        }
        self.out.flush()
    }
}
