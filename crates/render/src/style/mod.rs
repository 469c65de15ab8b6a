//! CSS style composition for rendered documents.
//!
//! Every render assembles zero or more CSS fragments in a fixed order:
//! generated `@font-face` rules, the theme's builtin stylesheets, any
//! user-provided stylesheet files, the watermark rule, and finally the debug
//! outlines. [`StyleSheets`] holds the fragments and serializes them either
//! as `<style>` blocks (spliced into persisted markup) or as one flat CSS
//! string (injected into live pages by script).
//!
//! All file-based styles are read eagerly at composition time so that missing
//! files fail fast rather than mid-render.

mod assets;
pub(crate) mod fonts;
mod theme;
pub(crate) mod watermark;

pub use self::theme::Theme;

use crate::error::{ErrorKind, Result};
use crate::style::assets::Builtins;
use exn::ResultExt;
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

enum Fragment {
    Builtin(String),
    // File contents land here too: styles are composed once per render, so
    // reading during composition costs nothing extra and fails fast.
    Content(String),
}

impl Fragment {
    fn css(&self) -> Cow<'_, [u8]> {
        match self {
            // Infallible: the builtin was validated when it was pushed.
            Self::Builtin(name) => Builtins::load(name).expect("builtin validated when pushed"),
            Self::Content(content) => Cow::Borrowed(content.as_bytes()),
        }
    }
}

/// An ordered collection of CSS fragments to inject into a rendered document.
///
/// Fragments apply in insertion order, so later fragments override earlier
/// ones under normal cascade rules.
#[derive(Default)]
pub struct StyleSheets {
    fragments: Vec<Fragment>,
}

impl StyleSheets {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the names of all embedded builtin stylesheets.
    pub fn list_builtins() -> Vec<Cow<'static, str>> {
        Builtins::list()
    }

    /// Appends a builtin stylesheet by name.
    ///
    /// Returns [`ErrorKind::AssetNotFound`](crate::error::ErrorKind::AssetNotFound)
    /// if `name` does not match any embedded asset.
    pub fn push_builtin(&mut self, name: impl AsRef<str>) -> Result<()> {
        let name = name.as_ref();
        if !Builtins::exists(name) {
            exn::bail!(ErrorKind::AssetNotFound(Builtins::identifier(name)));
        }
        self.fragments.push(Fragment::Builtin(name.to_string()));
        Ok(())
    }

    /// Appends a stylesheet read from a file on disk.
    pub fn push_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            exn::bail!(ErrorKind::AssetNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path).or_raise(|| ErrorKind::Io)?;
        self.fragments.push(Fragment::Content(content));
        Ok(())
    }

    /// Appends raw CSS content. Infallible since no I/O is involved.
    pub fn push_content(&mut self, content: impl Into<String>) {
        self.fragments.push(Fragment::Content(content.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Serializes every fragment as a `<style>` block, returning the count.
    pub(crate) fn write_style_blocks(&self, w: &mut impl Write) -> std::io::Result<usize> {
        for fragment in &self.fragments {
            w.write_all(b"<style>")?;
            w.write_all(&fragment.css())?;
            w.write_all(b"</style>\n")?;
        }
        Ok(self.fragments.len())
    }

    /// Concatenates every fragment into one CSS string, in order.
    pub(crate) fn to_css(&self) -> String {
        let mut css = String::new();
        for fragment in &self.fragments {
            css.push_str(&String::from_utf8_lossy(&fragment.css()));
            css.push('\n');
        }
        css
    }
}

/// Escapes a value per the [W3C CSS string token grammar][spec].
///
/// [spec]: https://www.w3.org/TR/css-syntax-3/#consume-string-token
pub(crate) fn css_escape_string(value: impl AsRef<str>) -> String {
    let value = value.as_ref();
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\a "),
            '\r' => out.push_str("\\d "),
            '\x0C' => out.push_str("\\c "),
            '\0' => out.push_str("\\fffd "),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write as _;

    #[test]
    fn fragments_keep_insertion_order() {
        let mut sheets = StyleSheets::new();
        sheets.push_content("body { color: red; }");
        sheets.push_content("body { color: blue; }");

        let css = sheets.to_css();
        let red = css.find("red").unwrap();
        let blue = css.find("blue").unwrap();
        assert!(red < blue);
    }

    #[test]
    fn style_blocks_wrap_each_fragment() {
        let mut sheets = StyleSheets::new();
        sheets.push_builtin("base.css").unwrap();
        sheets.push_content("p { margin: 0; }");

        let mut out = Vec::new();
        let blocks = sheets.write_style_blocks(&mut out).unwrap();
        assert_eq!(blocks, 2);
        let html = String::from_utf8(out).unwrap();
        assert_eq!(html.matches("<style>").count(), 2);
        assert_eq!(html.matches("</style>").count(), 2);
        assert!(html.contains("p { margin: 0; }"));
    }

    #[test]
    fn unknown_builtin_fails_on_push() {
        let mut sheets = StyleSheets::new();
        let error = sheets.push_builtin("missing.css").unwrap_err();
        assert!(error.to_string().contains("builtin:missing.css"));
        assert!(sheets.is_empty());
    }

    #[test]
    fn missing_file_fails_on_push() {
        let mut sheets = StyleSheets::new();
        assert!(sheets.push_file("/no/such/styles.css").is_err());
    }

    #[test]
    fn files_are_read_eagerly() {
        let mut file = tempfile::Builder::new().suffix(".css").tempfile().unwrap();
        file.write_all(b"h1 { page-break-after: avoid; }").unwrap();

        let mut sheets = StyleSheets::new();
        sheets.push_file(file.path()).unwrap();
        drop(file); // already read; deleting the file must not matter
        assert!(sheets.to_css().contains("page-break-after"));
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("with \"quotes\"", "with \\\"quotes\\\"")]
    #[case("back\\slash", "back\\\\slash")]
    #[case("line\nbreak", "line\\a break")]
    fn escapes_css_strings(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(css_escape_string(input), expected);
    }
}
