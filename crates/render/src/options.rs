//! Render options.
//!
//! [`RenderOptions`] collects everything that shapes the produced PDF: paper
//! geometry, print-pipeline switches, the builtin theme, watermark and font
//! descriptors, and the diagnostic flags. Options are plain data; validation
//! happens once per render via [`RenderOptions::validate`], which raises
//! [`ErrorKind::InvalidOptions`](crate::error::ErrorKind::InvalidOptions) for
//! contradictory values and logs advisory warnings for combinations that are
//! likely wrong but not fatal.

use crate::error::{ErrorKind, Result};
use crate::style::Theme;
use headless_chrome::types::PrintToPdfOptions;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::str::FromStr;

const MM_PER_INCH: f64 = 25.4;

/// Named paper sizes, dimensions in inches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperFormat {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    /// Explicit page dimensions in inches.
    Custom {
        width: f64,
        height: f64,
    },
}

impl PaperFormat {
    /// Page dimensions as `(width, height)` in inches, portrait.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            Self::A3 => (11.7, 16.54),
            Self::A4 => (8.27, 11.7),
            Self::A5 => (5.83, 8.27),
            Self::Letter => (8.5, 11.0),
            Self::Legal => (8.5, 14.0),
            Self::Tabloid => (11.0, 17.0),
            Self::Custom { width, height } => (width, height),
        }
    }
}

impl FromStr for PaperFormat {
    type Err = ErrorKind;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a3" => Ok(Self::A3),
            "a4" => Ok(Self::A4),
            "a5" => Ok(Self::A5),
            "letter" => Ok(Self::Letter),
            "legal" => Ok(Self::Legal),
            "tabloid" => Ok(Self::Tabloid),
            other => Err(ErrorKind::InvalidOptions(format!("unknown paper format: {other}"))),
        }
    }
}

impl Display for PaperFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::A3 => write!(f, "a3"),
            Self::A4 => write!(f, "a4"),
            Self::A5 => write!(f, "a5"),
            Self::Letter => write!(f, "letter"),
            Self::Legal => write!(f, "legal"),
            Self::Tabloid => write!(f, "tabloid"),
            Self::Custom { width, height } => write!(f, "{width}x{height}in"),
        }
    }
}

/// Per-edge page margins in millimetres.
///
/// Edges left as `None` fall back to the browser's print default (1 cm).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
}

impl Margins {
    /// The same margin on all four edges.
    pub fn uniform(mm: f64) -> Self {
        Self { top: Some(mm), bottom: Some(mm), left: Some(mm), right: Some(mm) }
    }

    /// Top and bottom margins only; horizontal edges keep the browser default.
    pub fn vertical(mm: f64) -> Self {
        Self { top: Some(mm), bottom: Some(mm), ..Self::default() }
    }

    /// `(top, bottom, left, right)` converted to inches for the print protocol.
    pub(crate) fn inches(self) -> (Option<f64>, Option<f64>, Option<f64>, Option<f64>) {
        let convert = |mm: Option<f64>| mm.map(|value| value / MM_PER_INCH);
        (convert(self.top), convert(self.bottom), convert(self.left), convert(self.right))
    }
}

/// A translucent text overlay composited onto every page.
#[derive(Clone, Debug, PartialEq)]
pub struct Watermark {
    /// The text content of the overlay.
    pub text: String,
    /// Opacity from 0.0 (invisible) to 1.0 (fully opaque).
    pub opacity: f64,
    /// CSS color of the overlay text.
    pub color: String,
}

impl Watermark {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), opacity: 0.1, color: "#000".to_string() }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// A custom font to embed via a generated `@font-face` rule.
#[derive(Clone, Debug, PartialEq)]
pub struct FontFace {
    /// Family name referenced from CSS.
    pub family: String,
    /// Path to a local font file, or a remote URL.
    pub source: String,
    /// Font weight (`400`, `bold`, ...). Defaults to `normal`.
    pub weight: Option<String>,
    /// Font style (`italic`, ...). Defaults to `normal`.
    pub style: Option<String>,
}

impl FontFace {
    pub fn new(family: impl Into<String>, source: impl Into<String>) -> Self {
        Self { family: family.into(), source: source.into(), weight: None, style: None }
    }

    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// Configuration for a single render.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Paper size. Ignored by the browser when `prefer_css_page_size` is set
    /// and the document carries an `@page` rule.
    pub format: PaperFormat,
    pub landscape: bool,
    /// Print scale factor; the protocol accepts 0.1 through 2.0.
    pub scale: f64,
    /// Page selection, e.g. `"1-5, 8"`. All pages when `None`.
    pub page_ranges: Option<String>,
    pub margins: Option<Margins>,
    pub print_background: bool,
    pub prefer_css_page_size: bool,
    /// HTML template for the repeated page header. Requires margins to be
    /// visible; `date`, `title`, `url`, `pageNumber` and `totalPages` class
    /// names are substituted by the browser.
    pub header_template: Option<String>,
    /// HTML template for the repeated page footer. Same substitutions as the
    /// header template.
    pub footer_template: Option<String>,
    pub theme: Theme,
    pub watermark: Option<Watermark>,
    pub fonts: Vec<FontFace>,
    /// Extra stylesheet files injected after the theme, in order.
    pub stylesheets: Vec<PathBuf>,
    /// Outline layout boundaries and page-break markers.
    pub debug: bool,
    /// Scan the rendered page for common layout problems and log them.
    pub explain: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: PaperFormat::default(),
            landscape: false,
            scale: 1.0,
            page_ranges: None,
            margins: None,
            print_background: true,
            prefer_css_page_size: false,
            header_template: None,
            footer_template: None,
            theme: Theme::default(),
            watermark: None,
            fonts: Vec::new(),
            stylesheets: Vec::new(),
            debug: false,
            explain: false,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: PaperFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }

    pub fn with_watermark(mut self, watermark: Watermark) -> Self {
        self.watermark = Some(watermark);
        self
    }

    pub fn with_font(mut self, font: FontFace) -> Self {
        self.fonts.push(font);
        self
    }

    pub fn with_stylesheet(mut self, path: impl Into<PathBuf>) -> Self {
        self.stylesheets.push(path.into());
        self
    }

    pub fn with_header_template(mut self, html: impl Into<String>) -> Self {
        self.header_template = Some(html.into());
        self
    }

    pub fn with_footer_template(mut self, html: impl Into<String>) -> Self {
        self.footer_template = Some(html.into());
        self
    }

    /// Rejects invalid or contradictory values and warns about combinations
    /// that are likely to produce a wrong but non-fatal result.
    pub fn validate(&self) -> Result<()> {
        if let Some(watermark) = &self.watermark {
            if !(0.0..=1.0).contains(&watermark.opacity) {
                exn::bail!(ErrorKind::InvalidOptions(format!(
                    "watermark opacity {} is outside 0.0..=1.0",
                    watermark.opacity
                )));
            }
            if watermark.text.trim().is_empty() {
                tracing::warn!("watermark text is empty; the overlay will be skipped");
            }
        }
        if !(0.1..=2.0).contains(&self.scale) {
            exn::bail!(ErrorKind::InvalidOptions(format!(
                "scale {} is outside the printable range 0.1..=2.0",
                self.scale
            )));
        }
        if let PaperFormat::Custom { width, height } = self.format {
            if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
                exn::bail!(ErrorKind::InvalidOptions(format!(
                    "custom paper dimensions {width}x{height} must be positive"
                )));
            }
        }
        if let Some(ranges) = &self.page_ranges {
            let valid = ranges.chars().all(|c| c.is_ascii_digit() || matches!(c, ',' | '-' | ' '));
            if ranges.trim().is_empty() || !valid {
                exn::bail!(ErrorKind::InvalidOptions(format!("malformed page ranges: {ranges:?}")));
            }
        }
        if self.header_template.is_some() && self.margins.is_none() {
            tracing::warn!("header template set without margins; the header may be clipped");
        }
        if self.footer_template.is_some() && self.margins.is_none() {
            tracing::warn!("footer template set without margins; the footer may be clipped");
        }
        Ok(())
    }

    fn has_page_chrome(&self) -> bool {
        self.header_template.is_some() || self.footer_template.is_some()
    }

    /// Margins actually sent to the printer. Header/footer templates pull in
    /// a 20 mm top/bottom default so the templates have room to render.
    pub(crate) fn resolved_margins(&self) -> Option<Margins> {
        match self.margins {
            Some(margins) => Some(margins),
            None if self.has_page_chrome() => Some(Margins::vertical(20.0)),
            None => None,
        }
    }

    /// Maps these options onto the DevTools `Page.printToPDF` parameters.
    pub(crate) fn print_options(&self) -> PrintToPdfOptions {
        let (width, height) = self.format.dimensions();
        let (top, bottom, left, right) =
            self.resolved_margins().map(Margins::inches).unwrap_or_default();
        PrintToPdfOptions {
            landscape: Some(self.landscape),
            display_header_footer: Some(self.has_page_chrome()),
            print_background: Some(self.print_background),
            scale: Some(self.scale),
            paper_width: Some(width),
            paper_height: Some(height),
            margin_top: top,
            margin_bottom: bottom,
            margin_left: left,
            margin_right: right,
            page_ranges: self.page_ranges.clone(),
            header_template: self.header_template.clone(),
            footer_template: self.footer_template.clone(),
            prefer_css_page_size: Some(self.prefer_css_page_size),
            ..Default::default()
        }
    }
}
