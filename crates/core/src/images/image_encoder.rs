use std::path::Path;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use log::debug;

use super::ImageRef;
use crate::errors::{Error, Result};

/// Turns an uploaded file into an image reference. Decoding is the only
/// suspension point in goal creation; a failure aborts the creation.
#[async_trait]
pub trait ImageEncoder: Send + Sync {
    async fn encode(&self, path: &Path) -> Result<ImageRef>;
}

/// Reads the file and embeds it as a base64 `data:` URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlImageEncoder;

impl DataUrlImageEncoder {
    pub fn new() -> Self {
        Self
    }

    fn mime_for(path: &Path) -> &'static str {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("svg") => "image/svg+xml",
            Some("bmp") => "image/bmp",
            Some("avif") => "image/avif",
            _ => "application/octet-stream",
        }
    }
}

#[async_trait]
impl ImageEncoder for DataUrlImageEncoder {
    async fn encode(&self, path: &Path) -> Result<ImageRef> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| Error::ImageDecode(format!("{}: {}", path.display(), e)))?;
        debug!("Encoding {} ({} bytes) as data URL", path.display(), bytes.len());
        Ok(ImageRef::data_url(Self::mime_for(path), &BASE64.encode(bytes)))
    }
}
