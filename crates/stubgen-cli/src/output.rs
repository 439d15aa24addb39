//! User-facing terminal output.
//!
//! All success/progress text goes through [`OutputManager`] so that quiet
//! mode and colour handling are decided in one place. Diagnostic logging is
//! separate (see `logging.rs`) and writes to stderr.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Writes status lines to stdout, honouring `--quiet` and colour settings.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto resolves to Human on a TTY, Plain when piped.
        let resolved_format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Plain message without a badge; suppressed by `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.badged("\u{2713}", msg, |s, m| {
            format!("{} {}", s.green().bold(), m.green())
        })
    }

    /// Errors are always written, even under `--quiet`.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.badged("\u{2717}", msg, |s, m| {
            format!("{} {}", s.red().bold(), m.red())
        })
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.badged("\u{26a0}", msg, |s, m| {
            format!("{} {}", s.yellow().bold(), m.yellow())
        })
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.badged("\u{2139}", msg, |s, m| {
            format!("{} {}", s.blue().bold(), m.blue())
        })
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// One badge-prefixed line: `✓ msg`, coloured unless colour is off.
    fn badged(
        &self,
        symbol: &str,
        msg: &str,
        colorize: impl FnOnce(&str, &str) -> String,
    ) -> io::Result<()> {
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            colorize(symbol, msg)
        };
        self.term.write_line(&line)
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}
