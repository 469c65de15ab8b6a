//! Embedded stylesheet assets.
//!
//! Builtin theme and diagnostic stylesheets are embedded into the binary at
//! compile time using [`rust-embed`](rust_embed).

use crate::error::{ErrorKind, Result};
use exn::OptionExt;
use rust_embed::Embed;
use std::borrow::Cow;

#[derive(Embed)]
#[folder = "../../assets/styles/"]
pub(crate) struct Builtins;

impl Builtins {
    /// Get the CSS content of a builtin stylesheet by name.
    pub(crate) fn load(name: impl AsRef<str>) -> Result<Cow<'static, [u8]>> {
        Self::get(name.as_ref())
            .map(|f| f.data)
            .ok_or_raise(|| ErrorKind::AssetNotFound(Self::identifier(name)))
    }

    /// List all available builtin stylesheet names.
    pub(crate) fn list() -> Vec<Cow<'static, str>> {
        Self::iter().filter(|f| f.ends_with(".css")).collect()
    }

    pub(crate) fn exists(name: impl AsRef<str>) -> bool {
        Self::get(name.as_ref()).is_some()
    }

    pub(crate) fn identifier(name: impl AsRef<str>) -> String {
        format!("builtin:{}", name.as_ref().trim().trim_start_matches("builtin:"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_stylesheet_is_embedded() {
        for name in ["standard.css", "base.css", "clean.css", "corporate.css", "minimal.css"] {
            let css = Builtins::load(name);
            assert!(css.is_ok(), "missing builtin {name}");
            assert!(!css.unwrap().is_empty());
        }
    }

    #[test]
    fn debug_stylesheet_is_embedded() {
        assert!(Builtins::exists("debug.css"));
        let styles = Builtins::list();
        assert!(styles.iter().any(|s| s == "debug.css"));
    }

    #[test]
    fn unknown_asset_is_an_error() {
        assert!(Builtins::load("nope.css").is_err());
    }
}
