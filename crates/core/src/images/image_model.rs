use serde::{Deserialize, Serialize};

/// An encoded, directly displayable image (a `data:` URL).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(src: impl Into<String>) -> Self {
        Self(src.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds a `data:<mime>;base64,<payload>` reference.
    pub fn data_url(mime: &str, base64_payload: &str) -> Self {
        Self(format!("data:{};base64,{}", mime, base64_payload))
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
