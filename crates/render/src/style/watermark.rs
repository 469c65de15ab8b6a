//! Watermark overlay generation.
//!
//! A watermark is two pieces working together: a fixed-position CSS rule
//! injected with the other stylesheets, and a script that appends the overlay
//! element to the document body once the page has loaded.

use crate::options::Watermark;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Class name shared between the generated rule and the inserted element.
pub(crate) const CLASS: &str = "htmlpress-watermark";

/// The overlay rule, rendered as CSS: centered, rotated, non-interactive.
pub(crate) struct WatermarkCss<'a>(pub(crate) &'a Watermark);

impl Display for WatermarkCss<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, ".{CLASS} {{")?;
        writeln!(f, "  position: fixed;")?;
        writeln!(f, "  top: 50%;")?;
        writeln!(f, "  left: 50%;")?;
        writeln!(f, "  transform: translate(-50%, -50%) rotate(-45deg);")?;
        writeln!(f, "  font-size: 80px;")?;
        writeln!(f, "  font-family: sans-serif;")?;
        writeln!(f, "  font-weight: bold;")?;
        writeln!(f, "  color: {};", self.0.color)?;
        writeln!(f, "  opacity: {};", self.0.opacity)?;
        writeln!(f, "  z-index: 9999;")?;
        writeln!(f, "  pointer-events: none;")?;
        writeln!(f, "  white-space: nowrap;")?;
        write!(f, "}}")
    }
}

/// Script that appends the overlay element to the body of the live page.
///
/// The text goes through a JSON string literal, so arbitrary content is safe
/// to interpolate.
pub(crate) fn insertion_script(watermark: &Watermark) -> String {
    let text = serde_json::Value::String(watermark.text.clone()).to_string();
    format!(
        "(() => {{\
           const mark = document.createElement('div');\
           mark.className = '{CLASS}';\
           mark.textContent = {text};\
           document.body.appendChild(mark);\
         }})()"
    )
}
