//! The terminal's theme surface.

use tracing::debug;

use folio_engine::{ThemePreference, ThemeSurface};

/// Dark flag read by the renderer when choosing a palette.
///
/// `generation` counts effective changes; repeated applies of the same value
/// leave it untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentTheme {
    dark: bool,
    generation: u64,
}

impl DocumentTheme {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl ThemeSurface for DocumentTheme {
    fn apply(&mut self, preference: ThemePreference) {
        let dark = preference.is_dark();
        if self.dark == dark && self.generation > 0 {
            return;
        }
        self.dark = dark;
        self.generation += 1;
        debug!(theme = %preference, generation = self.generation, "Applied theme");
    }
}

#[cfg(test)]
mod tests {
    use super::DocumentTheme;
    use folio_engine::{ThemePreference, ThemeSurface};

    #[test]
    fn apply_sets_dark_flag() {
        let mut doc = DocumentTheme::new();
        doc.apply(ThemePreference::Dark);
        assert!(doc.is_dark());
        doc.apply(ThemePreference::Light);
        assert!(!doc.is_dark());
        assert_eq!(doc.generation(), 2);
    }

    #[test]
    fn apply_is_idempotent() {
        let mut doc = DocumentTheme::new();
        doc.apply(ThemePreference::Light);
        doc.apply(ThemePreference::Light);
        doc.apply(ThemePreference::Light);
        assert!(!doc.is_dark());
        assert_eq!(doc.generation(), 1);
    }
}
