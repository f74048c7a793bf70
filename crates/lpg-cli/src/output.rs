//! Terminal output.

use std::io;

use console::Term;
use owo_colors::{OwoColorize, Style};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Writes user-facing lines to stdout.
///
/// Everything except [`OutputManager::data`] is dropped under `--quiet`.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Output meant for pipes (`languages --format json`, `config get`).
    pub fn data(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2713}', Style::new().green(), msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{26a0}', Style::new().yellow(), msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2139}', Style::new().blue(), msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        let line = self.styled(text, Style::new().cyan().bold());
        self.print(&line)
    }

    fn marked(&self, marker: char, style: Style, msg: &str) -> io::Result<()> {
        let marker = self.styled(&marker.to_string(), style.bold());
        let line = format!("{marker} {}", self.styled(msg, style));
        self.print(&line)
    }

    fn styled(&self, text: &str, style: Style) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            text.style(style).to_string()
        }
    }
}
