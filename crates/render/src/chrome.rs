//! Chrome/Chromium discovery and DevTools driving.

use crate::error::{Error, ErrorKind, Result};
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;

/// A Chrome/Chromium executable to launch headless.
pub(crate) struct Chrome {
    path: PathBuf,
}

impl Chrome {
    /// Probes `$PATH` for well-known executable names.
    pub(crate) fn discover() -> Result<Self> {
        // TODO: probe the Windows/macOS executable names and install dirs too.
        let executables =
            ["google-chrome", "google-chrome-stable", "chromium", "chromium-browser", "chrome"];
        for exe in executables {
            if let Ok(path) = which::which(exe) {
                tracing::debug!(browser = %path.display(), "discovered browser executable");
                return Ok(Self { path });
            }
        }
        tracing::info!("no chrome/chromium executable found in PATH");
        exn::bail!(ErrorKind::BrowserNotFound);
    }

    /// Uses an explicit executable path, skipping discovery.
    pub(crate) fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Launches a headless instance and connects to its DevTools endpoint.
    pub(crate) fn launch(&self, sandbox: bool) -> Result<Browser> {
        let options = LaunchOptions::default_builder()
            .path(Some(self.path.clone()))
            .headless(true)
            .sandbox(sandbox)
            .build()
            .map_err(|e| Error::from(ErrorKind::BrowserLaunch(e.to_string())))?;
        Browser::new(options).map_err(|e| Error::from(ErrorKind::BrowserLaunch(e.to_string())))
    }
}

/// Navigates the tab and waits for the load to settle.
pub(crate) fn navigate(tab: &Tab, url: &str) -> Result<()> {
    tab.navigate_to(url)
        .and_then(|tab| tab.wait_until_navigated())
        .map_err(|e| Error::from(ErrorKind::Navigation(e.to_string())))?;
    Ok(())
}

/// Evaluates a script expression, returning its JSON value if it produced one.
pub(crate) fn evaluate(tab: &Tab, expression: &str) -> Result<Option<serde_json::Value>> {
    let object = tab
        .evaluate(expression, false)
        .map_err(|e| Error::from(ErrorKind::Script(e.to_string())))?;
    Ok(object.value)
}

/// Runs the browser's print pipeline and returns the PDF bytes.
pub(crate) fn print_to_pdf(tab: &Tab, options: PrintToPdfOptions) -> Result<Vec<u8>> {
    tab.print_to_pdf(Some(options)).map_err(|e| Error::from(ErrorKind::Print(e.to_string())))
}
