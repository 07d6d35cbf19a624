//! [`PageRenderer`] backed by headless Chrome.

use async_trait::async_trait;
use stockwatch_protocols::{PageRenderer, RenderError};
use tracing::{debug, info, warn};

use crate::cdp::{CdpClient, CdpError, PageSession};
use crate::launcher::{ChromeLauncher, ChromeProcess, ChromeRendererConfig};

/// Renders pages in a fresh Chrome per call.
///
/// Chrome is launched, the page loaded and read, and everything torn down
/// again before `render` returns, whether it succeeded or not.
pub struct ChromeRenderer {
    launcher: ChromeLauncher,
}

impl ChromeRenderer {
    pub fn new(config: ChromeRendererConfig) -> Self {
        Self {
            launcher: ChromeLauncher::new(config),
        }
    }

    pub fn config(&self) -> &ChromeRendererConfig {
        self.launcher.config()
    }

    /// Load `url` in `page` and return the settled document.
    async fn load(&self, page: &PageSession, url: &str) -> Result<String, CdpError> {
        let config = self.config();

        page.navigate(url, config.load_timeout).await?;

        // Lazy sections (buy box, delivery block) render on scroll.
        page.scroll_to_fraction(0.5).await?;

        match page
            .wait_for_selector(&config.marker_selector, config.marker_timeout)
            .await
        {
            Ok(_) => debug!(selector = %config.marker_selector, "Marker element present"),
            Err(CdpError::Timeout(_)) => warn!(
                selector = %config.marker_selector,
                timeout = ?config.marker_timeout,
                "Marker element never appeared, reading page as is"
            ),
            Err(e) => return Err(e),
        }

        page.get_content().await
    }

    /// Open a tab, load `url`, and close the tab again.
    async fn render_in(&self, client: &CdpClient, url: &str) -> Result<String, RenderError> {
        let page = client.new_page().await?;
        let result = self.load(&page, url).await;

        if let Err(e) = client.close_page(page.target_id()).await {
            debug!("Failed to close page {}: {}", page.target_id(), e);
        }

        Ok(result?)
    }

    async fn connect_and_render(&self, url: &str) -> Result<String, RenderError> {
        let client = CdpClient::connect(&self.config().endpoint()).await?;
        debug!(browser = client.browser_version(), "CDP session open");
        self.render_in(&client, url).await
    }
}

#[async_trait]
impl PageRenderer for ChromeRenderer {
    fn name(&self) -> &str {
        "chrome"
    }

    async fn render(&self, url: &str) -> Result<String, RenderError> {
        let process: Option<ChromeProcess> = if self.launcher.is_chrome_running().await {
            info!(
                "Chrome already running on port {}, reusing it",
                self.config().debug_port
            );
            None
        } else {
            Some(self.launcher.launch().await?)
        };

        let result = self.connect_and_render(url).await;

        if let Some(process) = process {
            process.shutdown().await;
        }

        let html = result?;
        info!(url, bytes = html.len(), "Rendered page");
        Ok(html)
    }
}
