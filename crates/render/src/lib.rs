//! Chromium-driven HTML to PDF rendering.
//!
//! Accepts literal markup, a local file path, or a remote URL; injects
//! composed CSS (themes, custom fonts, watermark, debug outlines); and
//! delegates layout, pagination and PDF serialization to a headless
//! Chrome/Chromium instance driven over the DevTools protocol.
//!
//! # Example
//!
//! ```no_run
//! use htmlpress_render::{RenderOptions, Renderer, Theme, Watermark};
//! # use htmlpress_render::error::Result;
//!
//! # fn run() -> Result<()> {
//! let options = RenderOptions::default()
//!     .with_theme(Theme::Clean)
//!     .with_watermark(Watermark::new("DRAFT"));
//! let renderer = Renderer::new()?;
//! renderer.render_to("<h1>Quarterly Report</h1>", &options, "report.pdf")?;
//! # Ok(())
//! # }
//! ```

mod chrome;
mod diagnose;
pub mod error;
mod input;
mod options;
mod render;
mod style;

pub use crate::input::Input;
pub use crate::options::{FontFace, Margins, PaperFormat, RenderOptions, Watermark};
pub use crate::style::{StyleSheets, Theme};

use crate::chrome::Chrome;
use crate::error::Result;
use std::path::PathBuf;

/// A configured renderer bound to a browser executable.
///
/// Construction fails fast when no browser can be found; each call to
/// [`render`](Renderer::render) launches a fresh headless instance and tears
/// it down when the PDF bytes are ready.
pub struct Renderer {
    chrome: Chrome,
    sandbox: bool,
}

impl Renderer {
    /// Discovers a Chrome/Chromium executable on `$PATH`.
    pub fn new() -> Result<Self> {
        Ok(Self { chrome: Chrome::discover()?, sandbox: true })
    }

    /// Uses an explicit browser executable instead of discovery.
    pub fn with_browser(path: impl Into<PathBuf>) -> Self {
        Self { chrome: Chrome::at(path), sandbox: true }
    }

    /// Toggles the browser sandbox. Disabling it is sometimes required in
    /// containers that lack user namespaces.
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }
}

/// One-shot convenience: discover a browser, render, return the PDF bytes.
pub fn render(input: &str, options: &RenderOptions) -> Result<Vec<u8>> {
    Renderer::new()?.render(input, options)
}
