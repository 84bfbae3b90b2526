// UI layer: runs the preflight checks in order, shows a spinner while the
// upload is in flight and reports the outcome on the terminal.

use crate::api::{ApiClient, UploadReceipt};
use crate::cli::{usage_error, CliArgs};
use crate::config::Config;
use crate::error::AppError;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Run one upload.
///
/// Both inputs are resolved by the caller; they are checked here in a
/// fixed order so a missing credential is reported before a bad command
/// line, and a bad command line before any file or network access.
pub fn run(
    config: Result<Config, AppError>,
    args: Result<CliArgs, clap::Error>,
) -> Result<UploadReceipt, AppError> {
    let config = config?;
    let args = args.map_err(|e| usage_error(&e))?;
    let coords = args.coordinates()?;

    let api = ApiClient::new(&config)?;
    let receipt = with_spinner("Uploading...", || api.send_image(coords, &args.image_path))?;
    println!("Response status: {}", receipt.status);
    Ok(receipt)
}

/// Print an error as a single line on stderr.
pub fn report_error(err: &AppError) {
    eprintln!("{}", err);
}

/// Install the stderr log subscriber, filtered by `RUST_LOG` (default
/// `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Show a spinner on stderr while `f` runs. indicatif hides it when stderr
/// is not a terminal.
fn with_spinner<T>(msg: &'static str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(msg);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let out = f();
    spinner.finish_and_clear();
    out
}
