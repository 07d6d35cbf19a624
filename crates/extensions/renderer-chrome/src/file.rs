//! [`PageRenderer`] that reads saved documents from disk.

use std::path::PathBuf;

use async_trait::async_trait;
use stockwatch_protocols::{PageRenderer, RenderError};
use tracing::debug;

/// Serves one saved HTML file regardless of the requested URL.
///
/// Used for offline checks against a page saved from a browser.
pub struct FileRenderer {
    path: PathBuf,
}

impl FileRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl PageRenderer for FileRenderer {
    fn name(&self) -> &str {
        "file"
    }

    async fn render(&self, url: &str) -> Result<String, RenderError> {
        debug!(path = %self.path.display(), url, "Reading saved page");
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}
