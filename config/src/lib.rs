//! Configuration, content files and preference persistence for Folio.
//!
//! Everything lives under the Folio home directory (`$FOLIO_HOME`, else
//! `~/.folio`):
//!
//! ```text
//! ~/.folio/
//!   config.toml        user configuration (optional)
//!   preferences.toml   persisted theme preference
//!   logs/folio.log     tracing output
//! ```

mod content;
mod hint;
mod preferences;

pub use content::{ContentLoadError, load_content};
pub use hint::{EnvColorSchemeHint, parse_colorfgbg};
pub use preferences::FilePreferenceStore;

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use folio_types::ThemePreference;
use folio_types::ui::UiOptions;

pub const FOLIO_HOME_ENV: &str = "FOLIO_HOME";
const DEFAULT_REVEAL_INTERVAL_MS: u64 = 100;
const DEFAULT_CARET_BLINK_MS: u64 = 500;
const DEFAULT_BREAKPOINT: u16 = 80;

const fn default_reveal_interval_ms() -> u64 {
    DEFAULT_REVEAL_INTERVAL_MS
}

const fn default_caret_blink_ms() -> u64 {
    DEFAULT_CARET_BLINK_MS
}

const fn default_breakpoint() -> u16 {
    DEFAULT_BREAKPOINT
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config at {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and the caret.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the typewriter reveal and smooth scrolling.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Path to a TOML file replacing the built-in page content. `~` expands to
    /// the home directory.
    pub content: Option<String>,
}

/// ```toml
/// [typewriter]
/// interval_ms = 100
/// caret_blink_ms = 500
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypewriterConfig {
    #[serde(default = "default_reveal_interval_ms")]
    pub interval_ms: u64,
    #[serde(default = "default_caret_blink_ms")]
    pub caret_blink_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_REVEAL_INTERVAL_MS,
            caret_blink_ms: DEFAULT_CARET_BLINK_MS,
        }
    }
}

impl TypewriterConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    #[must_use]
    pub fn caret_blink(&self) -> Duration {
        Duration::from_millis(self.caret_blink_ms)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Terminal width in columns below which the nav bar collapses into a menu.
    #[serde(default = "default_breakpoint")]
    pub breakpoint: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Color scheme assumed when the terminal does not report one.
    pub system: Option<ThemePreference>,
}

impl FolioConfig {
    /// Load `config.toml` from the Folio home. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let config = Self::parse(&content).map_err(|err| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, err);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source: err,
            }
        })?;
        config.check(path)?;
        Ok(Some(config))
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn check(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |message: &str| ConfigError::Invalid {
            path: path.to_path_buf(),
            message: message.to_owned(),
        };
        if self.typewriter.interval_ms == 0 {
            return Err(invalid("typewriter.interval_ms must be greater than 0"));
        }
        if self.typewriter.caret_blink_ms == 0 {
            return Err(invalid("typewriter.caret_blink_ms must be greater than 0"));
        }
        Ok(())
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        UiOptions {
            ascii_only: self.app.ascii_only,
            high_contrast: self.app.high_contrast,
            reduced_motion: self.app.reduced_motion,
        }
    }

    /// Resolved content file path, if one is configured.
    #[must_use]
    pub fn content_path(&self) -> Option<PathBuf> {
        self.app.content.as_deref().map(expand_home)
    }
}

/// The Folio home directory: `$FOLIO_HOME`, else `~/.folio`.
#[must_use]
pub fn folio_home() -> Option<PathBuf> {
    if let Some(dir) = env::var_os(FOLIO_HOME_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::home_dir().map(|home| home.join(".folio"))
}

fn config_path() -> Option<PathBuf> {
    folio_home().map(|home| home.join("config.toml"))
}

/// Expand a leading `~` to the home directory.
#[must_use]
pub fn expand_home(value: &str) -> PathBuf {
    if value == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = value.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(value)
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, FolioConfig, expand_home};
    use folio_types::ThemePreference;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn empty_config_uses_defaults() {
        let config = FolioConfig::parse("").expect("empty config parses");
        assert_eq!(config.typewriter.interval(), Duration::from_millis(100));
        assert_eq!(config.typewriter.caret_blink(), Duration::from_millis(500));
        assert_eq!(config.layout.breakpoint, 80);
        assert_eq!(config.theme.system, None);
        assert!(!config.app.reduced_motion);
    }

    #[test]
    fn parses_all_sections() {
        let config = FolioConfig::parse(
            r#"
            [app]
            ascii_only = true
            reduced_motion = true
            content = "/srv/portfolio.toml"

            [typewriter]
            interval_ms = 40

            [layout]
            breakpoint = 100

            [theme]
            system = "dark"
        "#,
        )
        .expect("valid config");

        let options = config.ui_options();
        assert!(options.ascii_only);
        assert!(options.reduced_motion);
        assert!(!options.high_contrast);
        assert_eq!(config.typewriter.interval(), Duration::from_millis(40));
        assert_eq!(config.typewriter.caret_blink(), Duration::from_millis(500));
        assert_eq!(config.layout.breakpoint, 100);
        assert_eq!(config.theme.system, Some(ThemePreference::Dark));
        assert_eq!(
            config.content_path(),
            Some(PathBuf::from("/srv/portfolio.toml"))
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FolioConfig::parse("[app]\ncolour = \"blue\"\n").is_err());
    }

    #[test]
    fn unknown_system_theme_is_rejected() {
        assert!(FolioConfig::parse("[theme]\nsystem = \"sepia\"\n").is_err());
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = FolioConfig::load_from(&dir.path().join("config.toml")).expect("no error");
        assert!(loaded.is_none());
    }

    #[test]
    fn zero_interval_is_invalid() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[typewriter]\ninterval_ms = 0\n").expect("write");
        let err = FolioConfig::load_from(&path).expect_err("zero interval");
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn parse_error_carries_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[app\n").expect("write");
        let err = FolioConfig::load_from(&path).expect_err("bad toml");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("relative/file.toml"), PathBuf::from("relative/file.toml"));
        assert_eq!(expand_home("/abs/file.toml"), PathBuf::from("/abs/file.toml"));
    }

    #[test]
    fn expand_home_replaces_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/site.toml"), home.join("site.toml"));
        }
    }
}
