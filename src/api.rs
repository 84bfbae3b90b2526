// API client module: a small blocking HTTP client that sends one image to
// the image service. The response status is recorded but never judged;
// only a failure to read the file or to complete the exchange is an error.

use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client};
use reqwest::StatusCode;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::cli::Coordinates;
use crate::config::Config;

pub const API_KEY_HEADER: &str = "X-Api-Key";
pub const IMAGE_FIELD: &str = "image";
/// Declared for every upload; the file's real format is not inspected.
pub const IMAGE_MIME: &str = "image/jpeg";

/// Holds the reqwest blocking client together with the endpoint and the
/// credential sent on every request.
pub struct ApiClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

/// What came back from a dispatched upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadReceipt {
    pub status: StatusCode,
    pub bytes_sent: usize,
}

impl ApiClient {
    /// Build a client with the configured request timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// POST the image at `image_path` to `<endpoint>?x=<x>&y=<y>` as the
    /// multipart field `image`. The filename is the path as given, with
    /// only quotes and line breaks escaped.
    pub fn send_image(&self, coords: Coordinates, image_path: &Path) -> Result<UploadReceipt> {
        let image = read_image(image_path)?;
        let bytes_sent = image.len();

        let part = multipart::Part::bytes(image)
            .file_name(part_file_name(image_path))
            .mime_str(IMAGE_MIME)
            .context("invalid image content type")?;
        // Path separators stay as typed; `part_file_name` already escaped
        // what would break the header.
        let form = multipart::Form::new()
            .part(IMAGE_FIELD, part)
            .percent_encode_noop();

        debug!(
            endpoint = %self.endpoint,
            x = coords.x,
            y = coords.y,
            bytes = bytes_sent,
            "sending image"
        );
        let res = self
            .client
            .post(&self.endpoint)
            .query(&[("x", coords.x), ("y", coords.y)])
            .header(API_KEY_HEADER, &self.api_key)
            .multipart(form)
            .send()
            .with_context(|| format!("failed to send image to {}", self.endpoint))?;

        let status = res.status();
        if status.is_success() {
            info!(%status, bytes = bytes_sent, "image delivered");
        } else {
            warn!(%status, "image service answered with an error status");
        }
        Ok(UploadReceipt { status, bytes_sent })
    }
}

/// Read the whole file; the handle is closed before this returns.
fn read_image(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path)
        .with_context(|| format!("failed to read image file {}", path.display()))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)
        .with_context(|| format!("failed to read image file {}", path.display()))?;
    Ok(buf)
}

/// Multipart filename for `path`. Non-UTF-8 bytes become U+FFFD; `"`, CR
/// and LF are percent-encoded so the Content-Disposition line stays intact.
fn part_file_name(path: &Path) -> String {
    let mut name = String::new();
    for c in path.to_string_lossy().chars() {
        match c {
            '"' => name.push_str("%22"),
            '\r' => name.push_str("%0D"),
            '\n' => name.push_str("%0A"),
            c => name.push(c),
        }
    }
    name
}
