// Error taxonomy: configuration and usage problems are caught before any
// I/O and exit with 1; reading the image or sending it exits with 2.

use thiserror::Error;

/// Exit status for configuration and usage errors.
pub const EXIT_USAGE: u8 = 1;
/// Exit status when the image could not be read or the request could not
/// be sent.
pub const EXIT_UPLOAD: u8 = 2;

/// Everything that can stop an upload before or while it is dispatched.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Environment variable API_KEY is not set")]
    MissingApiKey,

    #[error("{0}")]
    Usage(String),

    /// Reported once for both coordinates, even if only one is malformed.
    #[error("x and y must be integers")]
    InvalidCoordinates,

    #[error("upload failed: {0:#}")]
    Upload(#[from] anyhow::Error),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::MissingApiKey | AppError::Usage(_) | AppError::InvalidCoordinates => {
                EXIT_USAGE
            }
            AppError::Upload(_) => EXIT_UPLOAD,
        }
    }
}
