//! Colored status output on stderr.
//!
//! Command results go to stdout; everything printed here is for the user
//! watching the terminal.

use console::{Style, Term};

pub(crate) struct Output {
    term: Term,
    green: Style,
    red: Style,
    label: Style,
    value: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            red: Style::new().red(),
            label: Style::new().dim(),
            value: Style::new().cyan().bold(),
        }
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a `label: value` line with the value highlighted.
    pub(crate) fn field(&self, label: &str, value: impl std::fmt::Display) {
        let _ = self.term.write_line(&format!(
            "{} {}",
            self.label.apply_to(format!("{label}:")),
            self.value.apply_to(value)
        ));
    }
}
