//! Layered CLI configuration.
//!
//! Values resolve in order: builtin defaults, then `htmlpress.toml` in the
//! working directory, then `HTMLPRESS_*` environment variables. Command-line
//! flags override all of these (handled in `main`).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use htmlpress_render::{PaperFormat, Theme};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub(crate) const CONFIG_FILE: &str = "htmlpress.toml";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    /// Browser executable; discovered on `$PATH` when unset.
    pub(crate) browser: Option<PathBuf>,
    /// Default theme when no `--theme` flag is given.
    pub(crate) theme: Option<Theme>,
    /// Default paper format when no `--format` flag is given.
    pub(crate) format: Option<PaperFormat>,
    /// Browser sandbox toggle; disable in containers without user namespaces.
    pub(crate) sandbox: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { browser: None, theme: None, format: None, sandbox: true }
    }
}

impl Config {
    pub(crate) fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed("HTMLPRESS_"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
    }

    #[test]
    fn defaults_leave_everything_to_discovery() {
        let config: Config = defaults().extract().unwrap();
        assert!(config.browser.is_none());
        assert!(config.theme.is_none());
        assert!(config.format.is_none());
        assert!(config.sandbox);
    }

    #[test]
    fn toml_values_override_defaults() {
        let config: Config = defaults()
            .merge(Toml::string("theme = \"clean\"\nformat = \"letter\"\nsandbox = false"))
            .extract()
            .unwrap();
        assert_eq!(config.theme, Some(Theme::Clean));
        assert_eq!(config.format, Some(PaperFormat::Letter));
        assert!(!config.sandbox);
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config: Config =
            defaults().merge(Toml::string("browser = \"/usr/bin/chromium\"")).extract().unwrap();
        assert_eq!(config.browser, Some(PathBuf::from("/usr/bin/chromium")));
        assert!(config.sandbox);
    }

    #[test]
    fn unknown_theme_is_a_config_error() {
        let result: Result<Config, _> =
            defaults().merge(Toml::string("theme = \"solarized\"")).extract();
        assert!(result.is_err());
    }
}
