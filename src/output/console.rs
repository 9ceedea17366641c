//! Console output formatter
//!
//! `ConsoleFormatter` writes tree lines directly to stdout without
//! buffering the tree, for use with `TreeWalker`.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeOutput;

use super::{connector, summary_line};

/// Streaming console formatter - directories in bold blue when color is on.
pub struct ConsoleFormatter {
    stdout: StandardStream,
}

impl ConsoleFormatter {
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    fn write_dir_name(&mut self, name: &str) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.stdout, "{}/", name)?;
        self.stdout.reset()?;
        writeln!(self.stdout)
    }
}

impl TreeOutput for ConsoleFormatter {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        self.write_dir_name(name)
    }

    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()> {
        write!(self.stdout, "{}{}", prefix, connector(is_last))?;
        if is_dir {
            self.write_dir_name(name)
        } else {
            writeln!(self.stdout, "{}", name)
        }
    }

    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()> {
        writeln!(self.stdout)?;
        writeln!(self.stdout, "{}", summary_line(dir_count, file_count))?;
        self.stdout.flush()
    }
}
