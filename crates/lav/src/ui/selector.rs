//! Terminal picker for a single version.
//!
//! [`Selector`] is the key-driven state; [`run`] draws it on a terminal and
//! feeds it keys until the user confirms or cancels.

use std::io;

use console::{Key, Term, style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Selected(String),
    Cancelled,
}

#[derive(Debug)]
pub struct Selector {
    app:      String,
    versions: Vec<String>,
    current:  Option<String>,
    cursor:   usize,
}

impl Selector {
    /// The cursor starts on `current` when it is one of `versions`.
    pub fn new(app: impl Into<String>, versions: Vec<String>, current: Option<String>) -> Self {
        let cursor = current
            .as_ref()
            .and_then(|c| versions.iter().position(|v| v == c))
            .unwrap_or(0);

        Self {
            app: app.into(),
            versions,
            current,
            cursor,
        }
    }

    pub fn handle(&mut self, key: &Key) -> Option<Outcome> {
        match key {
            Key::ArrowUp | Key::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            Key::ArrowDown | Key::Char('j') => {
                if self.cursor + 1 < self.versions.len() {
                    self.cursor += 1;
                }
                None
            }
            Key::Enter => self.versions.get(self.cursor).cloned().map(Outcome::Selected),
            // raw mode delivers Ctrl+C as ETX
            Key::Escape | Key::Char('q') | Key::Char('\u{3}') => Some(Outcome::Cancelled),
            _ => None,
        }
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![format!("Select version for {}:", self.app), String::new()];

        for (i, version) in self.versions.iter().enumerate() {
            let suffix = if self.current.as_deref() == Some(version.as_str()) {
                " (current)"
            } else {
                ""
            };
            if i == self.cursor {
                lines.push(style(format!("> {version}{suffix}")).cyan().bold().to_string());
            } else {
                lines.push(format!("  {version}{suffix}"));
            }
        }

        lines.push(String::new());
        lines.push(style("↑/↓: move  Enter: select  ESC: cancel").dim().to_string());
        lines
    }
}

pub fn run(term: &Term, selector: Selector) -> io::Result<Outcome> {
    term.hide_cursor()?;
    let outcome = drive(term, selector);
    term.show_cursor()?;
    outcome
}

fn drive(term: &Term, mut selector: Selector) -> io::Result<Outcome> {
    let mut drawn = 0;
    loop {
        if drawn > 0 {
            term.clear_last_lines(drawn)?;
        }
        let lines = selector.render();
        for line in &lines {
            term.write_line(line)?;
        }
        drawn = lines.len();

        let key = match term.read_key() {
            Ok(key) => key,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Key::Char('\u{3}'),
            Err(e) => return Err(e),
        };

        if let Some(outcome) = selector.handle(&key) {
            term.clear_last_lines(drawn)?;
            return Ok(outcome);
        }
    }
}
