//! Launcher configuration.

use std::path::PathBuf;
use std::time::Duration;

use stockwatch_config::BrowserConfig;

/// Settings for launching Chrome and rendering one page.
#[derive(Debug, Clone)]
pub struct ChromeRendererConfig {
    /// Chrome binary. Well-known locations are searched when unset.
    pub chrome_path: Option<PathBuf>,
    pub debug_port: u16,
    pub headless: bool,
    /// Persistent profile. A temporary profile is used when unset.
    pub profile_dir: Option<PathBuf>,
    pub window_width: u32,
    pub window_height: u32,
    pub lang: String,
    pub user_agent: String,
    /// Element whose appearance marks the page as settled.
    pub marker_selector: String,
    pub marker_timeout: Duration,
    pub load_timeout: Duration,
    /// How long to wait for a launched Chrome to open its debugging endpoint.
    pub launch_timeout: Duration,
}

impl Default for ChromeRendererConfig {
    fn default() -> Self {
        Self::from(&BrowserConfig::default())
    }
}

impl From<&BrowserConfig> for ChromeRendererConfig {
    fn from(config: &BrowserConfig) -> Self {
        Self {
            chrome_path: config.chrome_path.clone(),
            debug_port: config.debug_port,
            headless: config.headless,
            profile_dir: config.profile_dir.clone(),
            window_width: config.window_width,
            window_height: config.window_height,
            lang: config.lang.clone(),
            user_agent: config.user_agent.clone(),
            marker_selector: config.marker_selector.clone(),
            marker_timeout: Duration::from_millis(config.marker_timeout_ms),
            load_timeout: Duration::from_millis(config.load_timeout_ms),
            launch_timeout: Duration::from_millis(config.launch_timeout_ms),
        }
    }
}

impl ChromeRendererConfig {
    /// CDP endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("http://localhost:{}", self.debug_port)
    }
}
