use std::process::ExitCode;

use clap::Parser;
use cli::app::App;

mod cli;
mod logging;
mod ui;

fn main() -> ExitCode {
    logging::init();

    let app = match App::try_parse() {
        Ok(app) => app,
        Err(err) => return cli::app::exit_with(err),
    };

    match app.run() {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
