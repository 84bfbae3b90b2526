// Command-line surface: `send-image <x> <y> <image_path>`.
//
// Arguments 1 to 3 are always values, even when they start with `-`, so
// the program has no flags. Coordinates are taken raw and parsed
// afterwards so a bad `x` or `y` produces our own message instead of
// clap's.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

use crate::error::AppError;

pub const USAGE: &str = "Usage: send-image <x> <y> <image_path>";

#[derive(Parser, Debug)]
#[command(
    name = "send-image",
    about = "Upload an image with x/y pixel offsets to the image service",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Horizontal offset in pixels
    #[arg(allow_hyphen_values = true)]
    pub x: OsString,

    /// Vertical offset in pixels
    #[arg(allow_hyphen_values = true)]
    pub y: OsString,

    /// Image to upload; sent as-is with content type image/jpeg
    #[arg(allow_hyphen_values = true)]
    pub image_path: PathBuf,

    /// Ignored
    #[arg(
        hide = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub extra: Vec<OsString>,
}

/// Pixel offsets forwarded to the service as query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinates {
    pub x: i64,
    pub y: i64,
}

impl CliArgs {
    /// Parse `x` and `y` as base-10 integers. No range checks.
    pub fn coordinates(&self) -> Result<Coordinates, AppError> {
        match (parse_int(&self.x), parse_int(&self.y)) {
            (Some(x), Some(y)) => Ok(Coordinates { x, y }),
            _ => {
                debug!(x = ?self.x, y = ?self.y, "coordinates are not integers");
                Err(AppError::InvalidCoordinates)
            }
        }
    }
}

fn parse_int(raw: &OsString) -> Option<i64> {
    raw.to_str()?.parse().ok()
}

/// Map a clap failure (too few positionals) to the one-line usage error.
pub fn usage_error(err: &clap::Error) -> AppError {
    debug!(kind = ?err.kind(), "rejected command line: {}", err);
    AppError::Usage(USAGE.into())
}
