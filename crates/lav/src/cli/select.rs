use std::io::Write;
use std::process::ExitCode;

use anyhow::bail;
use clap::Args;
use console::Term;
use lav_install::Installer;

use super::current_or_none;
use crate::ui::selector::{self, Outcome, Selector};

pub const EXAMPLES: &str = "\
Keys: up/down or k/j to move, Enter to select, Esc/q/Ctrl+C to cancel.

Examples:
  lav select go";

#[derive(Debug, Args)]
pub struct SelectArg {
    /// Application name
    #[arg(value_name = "app")]
    pub app: String,
}

impl SelectArg {
    pub fn run(self, installer: &Installer, out: &mut impl Write) -> anyhow::Result<ExitCode> {
        let store = installer.store();
        let versions = store.versions(&self.app)?;
        if versions.is_empty() {
            bail!("no versions installed for {}", self.app);
        }

        let term = Term::stderr();
        if !term.is_term() {
            bail!("select needs an interactive terminal; use 'lav use <app> <version>' instead");
        }

        let current = current_or_none(store, &self.app);
        match selector::run(&term, Selector::new(&self.app, versions, current))? {
            Outcome::Selected(version) => {
                installer.switch(&self.app, &version)?;
                writeln!(out, "Switched {} to version {}", self.app, version)?;
            }
            Outcome::Cancelled => writeln!(out, "Cancelled")?,
        }
        Ok(ExitCode::SUCCESS)
    }
}
