//! The render pipeline.
//!
//! validate options → classify input → compose styles → load the page →
//! inject styles and the watermark element → optionally scan for layout
//! problems → print to PDF.

use crate::error::{ErrorKind, Result};
use crate::input::Input;
use crate::options::RenderOptions;
use crate::style::{StyleSheets, fonts, watermark};
use crate::{Renderer, chrome, diagnose};
use exn::ResultExt;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::instrument;

impl Renderer {
    /// Renders an input string (markup, file path, or URL) into PDF bytes.
    #[instrument(skip_all, fields(input_kind))]
    pub fn render(&self, input: &str, options: &RenderOptions) -> Result<Vec<u8>> {
        options.validate()?;
        let input = Input::classify(input)?;
        tracing::Span::current().record("input_kind", input.kind());
        let sheets = compose_styles(options)?;

        let browser = self.chrome.launch(self.sandbox)?;
        let tab = browser
            .new_tab()
            .map_err(|e| crate::error::Error::from(ErrorKind::BrowserLaunch(e.to_string())))?;

        // For persisted markup the temp file must outlive the navigation.
        let _persisted: Option<NamedTempFile>;
        match &input {
            Input::Markup(html) => {
                let file = persist_markup(html, &sheets)?;
                let url = format!("file://{}", file.path().display());
                chrome::navigate(&tab, &url)?;
                _persisted = Some(file);
            }
            Input::Url(url) | Input::File { url, .. } => {
                chrome::navigate(&tab, url)?;
                if !sheets.is_empty() {
                    chrome::evaluate(&tab, &style_injection_script(&sheets.to_css()))?;
                }
                _persisted = None;
            }
        }

        if let Some(mark) = options.watermark.as_ref().filter(|w| !w.text.trim().is_empty()) {
            chrome::evaluate(&tab, &watermark::insertion_script(mark))?;
        }

        if options.explain {
            // Diagnostics are advisory; a scan failure must not fail the render.
            match chrome::evaluate(&tab, diagnose::PAGE_SCAN) {
                Ok(value) => diagnose::report(&diagnose::decode_issues(value)),
                Err(error) => tracing::warn!(%error, "layout scan failed; skipping"),
            }
        }

        let pdf = chrome::print_to_pdf(&tab, options.print_options())?;
        tracing::debug!(bytes = pdf.len(), "PDF produced");
        Ok(pdf)
    }

    /// Renders and writes the PDF to `save_to`.
    pub fn render_to(
        &self,
        input: &str,
        options: &RenderOptions,
        save_to: impl AsRef<Path>,
    ) -> Result<()> {
        let save_to = save_to.as_ref();
        let pdf = self.render(input, options)?;
        std::fs::write(save_to, &pdf).or_raise(|| ErrorKind::Io)?;
        tracing::info!(path = %save_to.display(), bytes = pdf.len(), "PDF written");
        Ok(())
    }
}

/// Collects the CSS fragments for this render, in application order: fonts,
/// theme, user stylesheets, watermark, debug outlines.
fn compose_styles(options: &RenderOptions) -> Result<StyleSheets> {
    let mut sheets = StyleSheets::new();
    let font_css = fonts::font_face_css(&options.fonts);
    if !font_css.is_empty() {
        sheets.push_content(font_css);
    }
    for name in options.theme.builtins() {
        sheets.push_builtin(name)?;
    }
    for path in &options.stylesheets {
        sheets.push_file(path)?;
    }
    if let Some(mark) = options.watermark.as_ref().filter(|w| !w.text.trim().is_empty()) {
        sheets.push_content(watermark::WatermarkCss(mark).to_string());
    }
    if options.debug {
        sheets.push_builtin("debug.css")?;
    }
    Ok(sheets)
}

/// Writes markup to a temporary `.html` file, splicing the composed `<style>`
/// blocks in just before the closing `</head>` tag.
///
/// Without a head the blocks are prepended instead; the HTML parser hoists
/// leading metadata content into the head it synthesizes.
fn persist_markup(html: &str, sheets: &StyleSheets) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("htmlpress-")
        .suffix(".html")
        .tempfile()
        .or_raise(|| ErrorKind::Io)?;
    if sheets.is_empty() {
        file.write_all(html.as_bytes()).or_raise(|| ErrorKind::Io)?;
    } else if let Some(pos) = head_close_position(html.as_bytes()) {
        file.write_all(&html.as_bytes()[..pos]).or_raise(|| ErrorKind::Io)?;
        let blocks = sheets.write_style_blocks(&mut file).or_raise(|| ErrorKind::Io)?;
        file.write_all(&html.as_bytes()[pos..]).or_raise(|| ErrorKind::Io)?;
        tracing::debug!(position = pos, blocks, "stylesheets spliced into document head");
    } else {
        sheets.write_style_blocks(&mut file).or_raise(|| ErrorKind::Io)?;
        file.write_all(html.as_bytes()).or_raise(|| ErrorKind::Io)?;
        tracing::debug!("closing head tag not found; stylesheets prepended");
    }
    file.flush().or_raise(|| ErrorKind::Io)?;
    Ok(file)
}

fn head_close_position(html: &[u8]) -> Option<usize> {
    const NEEDLE: &[u8] = b"</head";
    html.windows(NEEDLE.len()).position(|w| w.eq_ignore_ascii_case(NEEDLE))
}

/// Script that appends the composed CSS to the head of a live page.
fn style_injection_script(css: &str) -> String {
    let payload = serde_json::Value::String(css.to_string()).to_string();
    format!(
        "(() => {{\
           const style = document.createElement('style');\
           style.textContent = {payload};\
           document.head.appendChild(style);\
         }})()"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sheets_with(content: &str) -> StyleSheets {
        let mut sheets = StyleSheets::new();
        sheets.push_content(content);
        sheets
    }

    #[rstest]
    #[case("<html><head></head><body></body></html>", Some(12))]
    #[case("<HTML><HEAD></HEAD></HTML>", Some(12))]
    #[case("<p>no head here</p>", None)]
    #[case("", None)]
    fn finds_the_closing_head_tag(#[case] html: &str, #[case] expected: Option<usize>) {
        assert_eq!(head_close_position(html.as_bytes()), expected);
    }

    #[test]
    fn splices_styles_before_the_closing_head_tag() {
        let html = "<html><head><title>t</title></head><body><p>hi</p></body></html>";
        let file = persist_markup(html, &sheets_with("body { margin: 0; }")).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        let style = written.find("<style>").unwrap();
        let head_close = written.find("</head>").unwrap();
        assert!(style < head_close);
        assert!(written.contains("body { margin: 0; }"));
        assert!(written.ends_with("</html>"));
    }

    #[test]
    fn prepends_styles_when_there_is_no_head() {
        let html = "<p>bare fragment</p>";
        let file = persist_markup(html, &sheets_with("p { color: red; }")).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert!(written.starts_with("<style>"));
        assert!(written.ends_with("<p>bare fragment</p>"));
    }

    #[test]
    fn writes_markup_untouched_when_there_are_no_styles() {
        let html = "<html><head></head><body></body></html>";
        let file = persist_markup(html, &StyleSheets::new()).unwrap();
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), html);
    }

    #[test]
    fn persisted_file_has_an_html_suffix() {
        // Chrome sniffs the content type of file:// URLs from the extension.
        let file = persist_markup("<p></p>", &StyleSheets::new()).unwrap();
        assert_eq!(file.path().extension().and_then(|e| e.to_str()), Some("html"));
    }

    #[test]
    fn injection_script_embeds_css_as_a_json_literal() {
        let script = style_injection_script("body { font-family: \"Inter\"; }\n");
        assert!(script.contains(r#""body { font-family: \"Inter\"; }\n""#));
        assert!(script.contains("document.head.appendChild(style)"));
    }

    #[test]
    fn composes_fragments_in_application_order() {
        let mut file = tempfile::Builder::new().suffix(".css").tempfile().unwrap();
        std::io::Write::write_all(&mut file, b".user { color: teal; }").unwrap();

        let options = RenderOptions::default()
            .with_font(crate::FontFace::new("Remote", "https://example.com/f.woff2"))
            .with_stylesheet(file.path())
            .with_watermark(crate::Watermark::new("DRAFT"));
        let css = compose_styles(&options).unwrap().to_css();

        let font = css.find("@font-face").unwrap();
        let theme = css.find("Page Setup").unwrap(); // standard theme marker
        let user = css.find(".user").unwrap();
        let mark = css.find(".htmlpress-watermark").unwrap();
        assert!(font < theme && theme < user && user < mark);
    }

    #[test]
    fn debug_outlines_come_last() {
        let options = RenderOptions {
            debug: true,
            ..RenderOptions::default()
        }
        .with_watermark(crate::Watermark::new("DRAFT"));
        let css = compose_styles(&options).unwrap().to_css();
        let mark = css.find(".htmlpress-watermark").unwrap();
        let debug = css.find("outline: 1px solid").unwrap();
        assert!(mark < debug);
    }

    #[test]
    fn blank_watermark_text_is_not_composed() {
        let options = RenderOptions::default().with_watermark(crate::Watermark::new("  "));
        let css = compose_styles(&options).unwrap().to_css();
        assert!(!css.contains(".htmlpress-watermark"));
    }
}
