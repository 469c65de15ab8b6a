//! Builtin typographic themes.

use crate::error::ErrorKind;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// A named bundle of default CSS applied to the rendered document.
///
/// `Standard` is a complete formal-document stylesheet and stands alone. The
/// three smaller themes are layered on top of a shared page-break base sheet.
/// `None` suppresses default styling entirely (raw HTML).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Professional formal document styling.
    #[default]
    Standard,
    /// Minimalist, ample whitespace, sans-serif.
    Clean,
    /// Blue accents, serif body, sans-serif headers.
    Corporate,
    /// Bare bones, high contrast, monospace.
    Minimal,
    /// No default styling.
    None,
}

impl Theme {
    /// The embedded stylesheets this theme is composed of, in order.
    pub(crate) fn builtins(self) -> &'static [&'static str] {
        match self {
            Self::Standard => &["standard.css"],
            Self::Clean => &["base.css", "clean.css"],
            Self::Corporate => &["base.css", "corporate.css"],
            Self::Minimal => &["base.css", "minimal.css"],
            Self::None => &[],
        }
    }
}

impl FromStr for Theme {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "clean" => Ok(Self::Clean),
            "corporate" => Ok(Self::Corporate),
            "minimal" => Ok(Self::Minimal),
            "none" => Ok(Self::None),
            other => Err(ErrorKind::InvalidOptions(format!("unknown theme: {other}"))),
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Standard => "standard",
            Self::Clean => "clean",
            Self::Corporate => "corporate",
            Self::Minimal => "minimal",
            Self::None => "none",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("standard", Theme::Standard)]
    #[case("Clean", Theme::Clean)]
    #[case(" corporate ", Theme::Corporate)]
    #[case("MINIMAL", Theme::Minimal)]
    #[case("none", Theme::None)]
    fn parses_theme_names(#[case] raw: &str, #[case] expected: Theme) {
        assert_eq!(raw.parse::<Theme>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!("solarized".parse::<Theme>().is_err());
    }

    #[test]
    fn small_themes_layer_on_the_base_sheet() {
        for theme in [Theme::Clean, Theme::Corporate, Theme::Minimal] {
            assert_eq!(theme.builtins()[0], "base.css");
            assert_eq!(theme.builtins().len(), 2);
        }
        assert_eq!(Theme::Standard.builtins(), ["standard.css"]);
        assert!(Theme::None.builtins().is_empty());
    }
}
