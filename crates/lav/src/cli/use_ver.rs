use std::io::Write;
use std::process::ExitCode;

use clap::Args;
use lav_install::Installer;

pub const EXAMPLES: &str = "\
Examples:
  lav use go 1.25.6
  lav use lav 0.0.1";

#[derive(Debug, Args)]
pub struct UseArg {
    /// Application name
    #[arg(value_name = "app")]
    pub app: String,

    /// Version to switch to
    #[arg(value_name = "version")]
    pub version: String,
}

impl UseArg {
    pub fn run(self, installer: &Installer, out: &mut impl Write) -> anyhow::Result<ExitCode> {
        installer.switch(&self.app, &self.version)?;
        writeln!(out, "Switched {} to version {}", self.app, self.version)?;
        Ok(ExitCode::SUCCESS)
    }
}
