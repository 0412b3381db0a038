use std::io::Write;
use std::process::ExitCode;

use clap::Args;
use lav_store::Store;

use super::current_or_none;

pub const EXAMPLES: &str = "\
Examples:
  lav current      # Show current versions of all apps
  lav current go   # Show current version of go";

#[derive(Debug, Args)]
pub struct CurrentArg {
    /// Optional application name
    #[arg(value_name = "app")]
    pub app: Option<String>,
}

impl CurrentArg {
    pub fn run(self, store: &Store, out: &mut impl Write) -> anyhow::Result<ExitCode> {
        let Some(app) = self.app else {
            for app in store.apps()? {
                if let Some(current) = current_or_none(store, &app) {
                    writeln!(out, "{app}: {current}")?;
                }
            }
            return Ok(ExitCode::SUCCESS);
        };

        match store.current_version(&app)? {
            Some(current) => {
                writeln!(out, "{current}")?;
                Ok(ExitCode::SUCCESS)
            }
            None => {
                eprintln!("No current version set for {app}");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
