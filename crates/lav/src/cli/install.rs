use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use lav_install::Installer;

pub const EXAMPLES: &str = "\
Examples:
  lav install ./lav lav 0.0.0
  lav install ~/Downloads/go1.25.6.linux-amd64/go go 1.25.6";

#[derive(Debug, Args)]
pub struct InstallArg {
    /// Path to a binary file or a folder containing bin/
    #[arg(value_name = "path")]
    pub path: PathBuf,

    /// Application name
    #[arg(value_name = "app")]
    pub app: String,

    /// Version string (e.g., 1.0.0)
    #[arg(value_name = "version")]
    pub version: String,
}

impl InstallArg {
    pub fn run(self, installer: &Installer, out: &mut impl Write) -> anyhow::Result<ExitCode> {
        installer.install(&self.path, &self.app, &self.version)?;
        writeln!(out, "Installed {} version {}", self.app, self.version)?;
        Ok(ExitCode::SUCCESS)
    }
}
