//! Input classification.
//!
//! The renderer accepts a single string that may be literal HTML markup, a
//! path to a local `.html`/`.htm` file, or a remote URL. [`Input::classify`]
//! decides which, using pattern heuristics: a scheme prefix marks a URL, and
//! an `.html` extension combined with the absence of tag-like syntax marks a
//! file path. Everything else is treated as markup.

use crate::error::{ErrorKind, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    // Infallible: pattern validated by the test suite.
    Regex::new(r"(?i)^https?://").expect("scheme pattern is valid")
});
static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.html?$").expect("extension pattern is valid"));
static TAG_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<[a-z].*>").expect("tag pattern is valid"));

/// A classified render input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// A remote URL, navigated to directly.
    Url(String),
    /// A local HTML file. Navigated via `url` so that relative resources
    /// (images, linked stylesheets) keep resolving against the real path.
    File {
        path: PathBuf,
        url: String,
    },
    /// Literal markup; the string is the document.
    Markup(String),
}

impl Input {
    /// Classifies a raw input string.
    ///
    /// A string that looks like a file path (ends in `.html`/`.htm`, contains
    /// no markup) must name an existing file; otherwise
    /// [`ErrorKind::FileNotFound`] is raised. A string ending in `.html` that
    /// *does* contain tags is markup, not a path.
    pub fn classify(raw: &str) -> Result<Self> {
        if SCHEME.is_match(raw) {
            return Ok(Self::Url(raw.to_string()));
        }
        if EXTENSION.is_match(raw) && !TAG_LIKE.is_match(raw) {
            let path = Path::new(raw)
                .canonicalize()
                .map_err(|_| ErrorKind::FileNotFound(raw.to_string()))?;
            let url = format!("file://{}", path.display());
            tracing::debug!(path = %path.display(), "input resolved to local file");
            return Ok(Self::File { path, url });
        }
        Ok(Self::Markup(raw.to_string()))
    }

    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Url(_) => "url",
            Self::File { .. } => "file",
            Self::Markup(_) => "markup",
        }
    }
}

/// Whether a font or stylesheet source is a remote URL rather than a path.
pub(crate) fn is_remote(source: &str) -> bool {
    SCHEME.is_match(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[rstest]
    #[case("https://example.com/report")]
    #[case("http://example.com/page.html")]
    #[case("HTTPS://EXAMPLE.COM")]
    fn classifies_urls(#[case] raw: &str) {
        assert_eq!(Input::classify(raw).unwrap(), Input::Url(raw.to_string()));
    }

    #[rstest]
    #[case("<h1>Hello</h1>")]
    #[case("just some text")]
    #[case("")]
    // Ends in .html but contains markup, so the string is the document.
    #[case("<p>see notes.html</p> trailer.html")]
    fn classifies_markup(#[case] raw: &str) {
        assert_eq!(Input::classify(raw).unwrap(), Input::Markup(raw.to_string()));
    }

    #[test]
    fn classifies_existing_file() {
        let mut file = tempfile::Builder::new().suffix(".html").tempfile().unwrap();
        file.write_all(b"<html></html>").unwrap();
        let raw = file.path().to_str().unwrap().to_string();

        let input = Input::classify(&raw).unwrap();
        match input {
            Input::File { path, url } => {
                assert!(path.is_absolute());
                assert!(url.starts_with("file://"));
                assert!(url.ends_with(".html"));
            }
            other => panic!("expected file input, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let error = Input::classify("/definitely/not/here.html").unwrap_err();
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn htm_extension_counts_as_file_pattern() {
        // Nonexistent, so classification fails rather than falling back to markup.
        assert!(Input::classify("missing.htm").is_err());
    }

    #[rstest]
    #[case("https://fonts.example.com/inter.woff2", true)]
    #[case("/usr/share/fonts/inter.woff2", false)]
    #[case("fonts/inter.ttf", false)]
    fn detects_remote_sources(#[case] source: &str, #[case] expected: bool) {
        assert_eq!(is_remote(source), expected);
    }
}
