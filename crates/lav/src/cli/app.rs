use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lav_platform::OsEnvironment;

use super::{current, install, ls, select, use_ver};

#[derive(Debug, Parser)]
#[command(
    name = "lav",
    version,
    about = "Keep several versions of locally installed applications and switch between them",
    long_about = None,
    disable_version_flag = true,
    arg_required_else_help = true,
    arg(
        clap::Arg::new("version")
            .short('v')
            .long("version")
            .action(clap::ArgAction::Version)
            .help("Show version information")
    ),
    after_help = "Use 'lav <command> --help' for more information about a command."
)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install a binary or folder
    #[command(after_help = install::EXAMPLES)]
    Install(install::InstallArg),

    /// Switch to a specific version
    #[command(after_help = use_ver::EXAMPLES)]
    Use(use_ver::UseArg),

    /// List all apps, or the versions of one app
    #[command(visible_alias = "ls", after_help = ls::EXAMPLES)]
    List(ls::ListArg),

    /// Show the current version of one app or all apps
    #[command(after_help = current::EXAMPLES)]
    Current(current::CurrentArg),

    /// Pick the version to use from an interactive list
    #[command(after_help = select::EXAMPLES)]
    Select(select::SelectArg),
}

impl App {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        let env = OsEnvironment;
        let mut out = io::stdout().lock();

        let code = match self.cmd {
            Commands::Install(arg) => arg.run(&super::installer(&env)?, &mut out)?,
            Commands::Use(arg) => arg.run(&super::installer(&env)?, &mut out)?,
            Commands::List(arg) => arg.run(&super::store(&env)?, &mut out)?,
            Commands::Current(arg) => arg.run(&super::store(&env)?, &mut out)?,
            Commands::Select(arg) => arg.run(&super::installer(&env)?, &mut out)?,
        };

        out.flush()?;
        Ok(code)
    }
}

/// Help and version go to stdout with status 0; usage errors go to stderr
/// with status 1.
pub fn exit_with(err: clap::Error) -> ExitCode {
    if let Err(print_err) = err.print() {
        tracing::debug!(%print_err, "failed to print usage");
    }
    if err.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
