// Library root
// -----------
// The binary (`main.rs`) is a thin shell around these modules so the
// upload flow can be driven from tests without touching the process
// environment.
//
// Module responsibilities:
// - `config`: credential, endpoint and timeout, read once at start.
// - `cli`: positional arguments (`x`, `y`, `image_path`) and coordinate
//   parsing.
// - `api`: the blocking HTTP client that performs the single multipart
//   upload.
// - `error`: the error taxonomy and its mapping to exit codes.
// - `ui`: terminal feedback and the `run` orchestration.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

pub use api::{ApiClient, UploadReceipt};
pub use cli::{CliArgs, Coordinates};
pub use config::Config;
pub use error::AppError;
