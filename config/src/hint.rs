//! System color-scheme hint for terminals.
//!
//! Checked in order: `FOLIO_COLOR_SCHEME` (`dark`/`light`), the `COLORFGBG`
//! variable many terminals export, then the configured `[theme] system` value.

use std::env;

use tracing::debug;

use folio_engine::ColorSchemeHint;
use folio_types::ThemePreference;

pub const COLOR_SCHEME_ENV: &str = "FOLIO_COLOR_SCHEME";
const COLORFGBG_ENV: &str = "COLORFGBG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvColorSchemeHint {
    resolved: Option<ThemePreference>,
}

impl EnvColorSchemeHint {
    /// Read the process environment, falling back to `configured`.
    #[must_use]
    pub fn detect(configured: Option<ThemePreference>) -> Self {
        let explicit = env::var(COLOR_SCHEME_ENV).ok();
        let colorfgbg = env::var(COLORFGBG_ENV).ok();
        Self::from_sources(explicit.as_deref(), colorfgbg.as_deref(), configured)
    }

    #[must_use]
    pub fn from_sources(
        explicit: Option<&str>,
        colorfgbg: Option<&str>,
        configured: Option<ThemePreference>,
    ) -> Self {
        let resolved = explicit
            .and_then(|value| match value.parse::<ThemePreference>() {
                Ok(pref) => Some(pref),
                Err(e) => {
                    debug!("Ignoring {COLOR_SCHEME_ENV}: {e}");
                    None
                }
            })
            .or_else(|| colorfgbg.and_then(parse_colorfgbg))
            .or(configured);
        Self { resolved }
    }
}

impl ColorSchemeHint for EnvColorSchemeHint {
    fn preferred(&self) -> Option<ThemePreference> {
        self.resolved
    }
}

/// Interpret `COLORFGBG` (`"fg;bg"` or `"fg;default;bg"`).
///
/// The last field is the background palette index: 0-6 and 8 are dark
/// backgrounds, 7 and 9-15 light ones.
#[must_use]
pub fn parse_colorfgbg(value: &str) -> Option<ThemePreference> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(ThemePreference::Dark),
        7 | 9..=15 => Some(ThemePreference::Light),
        _ => None,
    }
}
