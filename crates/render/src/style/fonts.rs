//! `@font-face` rule generation.
//!
//! Remote font sources are referenced by URL. Local files are read and
//! inlined as base64 data URLs so they resolve regardless of the page
//! context (`file://` vs `http://`). An unreadable local font logs a warning
//! and is skipped rather than aborting the render.

use crate::input::is_remote;
use crate::options::FontFace;
use crate::style::css_escape_string;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::path::Path;

/// Renders one `@font-face` block per loadable font, concatenated.
pub(crate) fn font_face_css(fonts: &[FontFace]) -> String {
    let mut css = String::new();
    for font in fonts {
        let Some(src) = source(font) else { continue };
        css.push_str(&format!(
            "@font-face {{\n  font-family: \"{}\";\n  src: {};\n  font-weight: {};\n  font-style: {};\n}}\n",
            css_escape_string(&font.family),
            src,
            font.weight.as_deref().unwrap_or("normal"),
            font.style.as_deref().unwrap_or("normal"),
        ));
    }
    css
}

fn source(font: &FontFace) -> Option<String> {
    if is_remote(&font.source) {
        return Some(format!("url('{}')", font.source));
    }
    let path = Path::new(&font.source);
    match std::fs::read(path) {
        Ok(bytes) => {
            Some(format!("url('data:{};base64,{}')", mime_for(path), BASE64.encode(bytes)))
        }
        Err(error) => {
            tracing::warn!(
                family = %font.family,
                path = %path.display(),
                %error,
                "failed to load font; skipping",
            );
            None
        }
    }
}

fn mime_for(path: &Path) -> &'static str {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    match extension.to_ascii_lowercase().as_str() {
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        _ => "application/octet-stream",
    }
}
