// Entrypoint for the CLI application.
// Resolves the environment and the command line, hands both to
// `ui::run` and turns the outcome into the process exit status.

use clap::Parser;
use send_image::{ui, CliArgs, Config};
use std::process::ExitCode;

fn main() -> ExitCode {
    ui::init_logging();

    let config = Config::from_env();
    let args = CliArgs::try_parse_from(std::env::args_os());
    match ui::run(config, args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            ui::report_error(&err);
            ExitCode::from(err.exit_code())
        }
    }
}
