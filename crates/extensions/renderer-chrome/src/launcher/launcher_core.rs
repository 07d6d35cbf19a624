//! Chrome discovery, launch and shutdown.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};

use stockwatch_protocols::RenderError;
use tempfile::TempDir;
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

use crate::cdp::CdpClient;

use super::ChromeRendererConfig;

const READY_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// A Chrome instance started for one render.
///
/// The child is killed on drop if [`ChromeProcess::shutdown`] was not called.
pub struct ChromeProcess {
    child: Child,
    /// Removed when the process is dropped.
    _temp_profile: Option<TempDir>,
}

impl ChromeProcess {
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Kill Chrome and wait for it to exit.
    pub async fn shutdown(mut self) {
        info!("Shutting down Chrome");
        if let Err(e) = self.child.kill().await {
            warn!("Failed to kill Chrome: {}", e);
        }
    }
}

/// Starts Chrome with remote debugging, or finds one already running.
pub struct ChromeLauncher {
    config: ChromeRendererConfig,
}

impl ChromeLauncher {
    pub fn new(config: ChromeRendererConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChromeRendererConfig {
        &self.config
    }

    /// Find Chrome executable path.
    pub fn find_chrome() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        let paths: &[&str] = &[
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "/Applications/Chromium.app/Contents/MacOS/Chromium",
        ];

        #[cfg(target_os = "linux")]
        let paths: &[&str] = &[
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
            "/snap/bin/chromium",
        ];

        #[cfg(target_os = "windows")]
        let paths: &[&str] = &[
            r"C:\Program Files\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
        ];

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        let paths: &[&str] = &[];

        paths.iter().map(PathBuf::from).find(|p| p.exists())
    }

    /// Configured binary, or the first well-known install location.
    pub fn chrome_path(&self) -> Result<PathBuf, RenderError> {
        match self.config.chrome_path {
            Some(ref path) if path.exists() => Ok(path.clone()),
            Some(ref path) => Err(RenderError::BrowserNotFound(path.display().to_string())),
            None => Self::find_chrome().ok_or_else(|| {
                RenderError::BrowserNotFound(
                    "no Chrome or Chromium install found; set browser.chrome_path".to_string(),
                )
            }),
        }
    }

    /// Command-line flags for a render session using `profile_dir`.
    pub fn launch_args(&self, profile_dir: &Path) -> Vec<String> {
        let config = &self.config;
        let mut args = vec![
            format!("--remote-debugging-port={}", config.debug_port),
            format!("--user-data-dir={}", profile_dir.display()),
            format!("--window-size={},{}", config.window_width, config.window_height),
            format!("--lang={}", config.lang),
            format!("--user-agent={}", config.user_agent),
            "--no-first-run".to_string(),
            "--no-default-browser-check".to_string(),
            "--no-sandbox".to_string(),
            "--disable-dev-shm-usage".to_string(),
            "--disable-gpu".to_string(),
            "--disable-extensions".to_string(),
            "--disable-background-networking".to_string(),
            "--disable-sync".to_string(),
            "--disable-translate".to_string(),
            "--metrics-recording-only".to_string(),
        ];
        if config.headless {
            args.push("--headless=new".to_string());
        }
        args
    }

    /// Check if Chrome is already running on the debug port.
    pub async fn is_chrome_running(&self) -> bool {
        CdpClient::version(&self.config.endpoint()).await.is_ok()
    }

    /// Launch Chrome with remote debugging enabled and wait for its endpoint.
    pub async fn launch(&self) -> Result<ChromeProcess, RenderError> {
        let chrome_path = self.chrome_path()?;

        let (profile_dir, temp_profile) = match self.config.profile_dir {
            Some(ref dir) => {
                tokio::fs::create_dir_all(dir).await?;
                (dir.clone(), None)
            }
            None => {
                let temp = tempfile::Builder::new()
                    .prefix("stockwatch-chrome-")
                    .tempdir()?;
                (temp.path().to_path_buf(), Some(temp))
            }
        };

        info!(
            chrome = %chrome_path.display(),
            profile = %profile_dir.display(),
            "Launching Chrome"
        );

        let child = Command::new(&chrome_path)
            .args(self.launch_args(&profile_dir))
            .arg("about:blank")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| RenderError::LaunchFailed(format!("{}: {}", chrome_path.display(), e)))?;

        let process = ChromeProcess {
            child,
            _temp_profile: temp_profile,
        };
        debug!("Chrome launched with PID: {:?}", process.id());

        let start = Instant::now();
        while !self.is_chrome_running().await {
            if start.elapsed() > self.config.launch_timeout {
                process.shutdown().await;
                return Err(RenderError::LaunchFailed(format!(
                    "Chrome did not open {} within {:?}",
                    self.config.endpoint(),
                    self.config.launch_timeout
                )));
            }
            tokio::time::sleep(READY_POLL_INTERVAL).await;
        }

        Ok(process)
    }
}
