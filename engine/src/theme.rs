//! Theme preference resolution, toggling and write-through persistence.

use tracing::{debug, warn};

use folio_types::ThemePreference;

use crate::store::PreferenceStore;

/// Storage key for the persisted theme literal.
pub const THEME_KEY: &str = "theme";

/// Host hint about the preferred color scheme, consulted only when nothing is
/// persisted.
pub trait ColorSchemeHint {
    fn preferred(&self) -> Option<ThemePreference>;
}

impl ColorSchemeHint for Option<ThemePreference> {
    fn preferred(&self) -> Option<ThemePreference> {
        *self
    }
}

/// Projection of the theme onto the presentation environment.
///
/// Implementations must be idempotent: applying the value already in effect
/// changes nothing observable.
pub trait ThemeSurface {
    fn apply(&mut self, preference: ThemePreference);
}

/// Persisted value > system hint > `Light`.
///
/// Storage errors and unrecognised persisted values count as "nothing
/// persisted".
pub fn resolve_initial(
    store: &impl PreferenceStore,
    hint: &impl ColorSchemeHint,
) -> ThemePreference {
    match store.load(THEME_KEY) {
        Ok(Some(raw)) => match raw.parse::<ThemePreference>() {
            Ok(preference) => {
                debug!(%preference, "Theme resolved from stored preference");
                return preference;
            }
            Err(e) => warn!("Ignoring stored theme: {e}"),
        },
        Ok(None) => {}
        Err(e) => warn!("Theme preference unavailable, using defaults: {e}"),
    }

    if let Some(preference) = hint.preferred() {
        debug!(%preference, "Theme resolved from system color scheme");
        return preference;
    }
    ThemePreference::Light
}

pub struct ThemePreferenceController<S, A> {
    current: ThemePreference,
    store: S,
    surface: A,
}

impl<S: PreferenceStore, A: ThemeSurface> ThemePreferenceController<S, A> {
    /// Resolve the startup theme, apply it and write it through to storage.
    /// This is the only place the resolution runs.
    pub fn resolve(store: S, hint: &impl ColorSchemeHint, surface: A) -> Self {
        let current = resolve_initial(&store, hint);
        let mut controller = Self {
            current,
            store,
            surface,
        };
        controller.apply();
        controller.persist();
        controller
    }

    #[must_use]
    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Flip the theme, write it through to storage, then apply it.
    ///
    /// A failed write leaves the new value in effect for the session.
    pub fn toggle(&mut self) -> ThemePreference {
        self.current = self.current.toggled();
        self.persist();
        self.apply();
        self.current
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(THEME_KEY, self.current.as_str()) {
            warn!(theme = %self.current, "Failed to persist theme preference: {e}");
        }
    }

    /// Re-project the current value onto the surface.
    pub fn apply(&mut self) {
        self.surface.apply(self.current);
    }

    pub fn surface(&self) -> &A {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut A {
        &mut self.surface
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::{THEME_KEY, ThemePreferenceController, ThemeSurface, resolve_initial};
    use crate::store::{MemoryStore, UnavailableStore};
    use folio_types::ThemePreference::{self, Dark, Light};

    const NO_HINT: Option<ThemePreference> = None;

    /// Counts observable changes, the way a document class list would.
    #[derive(Debug, Default)]
    struct DarkFlag {
        dark: bool,
        changes: usize,
    }

    impl ThemeSurface for DarkFlag {
        fn apply(&mut self, preference: ThemePreference) {
            if self.dark != preference.is_dark() {
                self.dark = preference.is_dark();
                self.changes += 1;
            }
        }
    }

    #[test]
    fn stored_dark_wins_over_hint() {
        let store = MemoryStore::with(THEME_KEY, "dark");
        assert_eq!(resolve_initial(&store, &Some(Light)), Dark);
        assert_eq!(resolve_initial(&store, &NO_HINT), Dark);
    }

    #[test]
    fn hint_used_when_nothing_stored() {
        let store = MemoryStore::new();
        assert_eq!(resolve_initial(&store, &Some(Dark)), Dark);
        assert_eq!(resolve_initial(&store, &Some(Light)), Light);
    }

    #[test]
    fn light_when_nothing_available() {
        assert_eq!(resolve_initial(&MemoryStore::new(), &NO_HINT), Light);
        assert_eq!(resolve_initial(&UnavailableStore, &NO_HINT), Light);
    }

    #[test]
    fn unrecognised_stored_value_falls_through_to_hint() {
        let store = MemoryStore::with(THEME_KEY, "sepia");
        assert_eq!(resolve_initial(&store, &Some(Dark)), Dark);
    }

    #[test]
    fn unavailable_store_still_uses_hint() {
        assert_eq!(resolve_initial(&UnavailableStore, &Some(Dark)), Dark);
    }

    #[test]
    fn resolve_applies_initial_theme() {
        let controller =
            ThemePreferenceController::resolve(MemoryStore::new(), &Some(Dark), DarkFlag::default());
        assert!(controller.surface().dark);
        assert_eq!(controller.surface().changes, 1);
    }

    #[test]
    fn resolve_persists_the_resolved_theme() {
        let controller =
            ThemePreferenceController::resolve(MemoryStore::new(), &Some(Dark), DarkFlag::default());
        assert_eq!(controller.store().get(THEME_KEY), Some("dark"));

        let controller =
            ThemePreferenceController::resolve(MemoryStore::new(), &NO_HINT, DarkFlag::default());
        assert_eq!(controller.store().get(THEME_KEY), Some("light"));
    }

    #[test]
    fn resolve_replaces_unrecognised_stored_value() {
        let store = MemoryStore::with(THEME_KEY, "sepia");
        let controller = ThemePreferenceController::resolve(store, &NO_HINT, DarkFlag::default());
        assert_eq!(controller.store().get(THEME_KEY), Some("light"));
    }

    #[test]
    fn hint_dark_then_toggle_persists_light() {
        let mut controller =
            ThemePreferenceController::resolve(MemoryStore::new(), &Some(Dark), DarkFlag::default());
        assert_eq!(controller.current(), Dark);
        assert_eq!(controller.toggle(), Light);
        assert_eq!(controller.store().get(THEME_KEY), Some("light"));
        assert!(!controller.surface().dark);
    }

    #[test]
    fn double_toggle_restores_value_and_persisted_value() {
        let store = MemoryStore::with(THEME_KEY, "dark");
        let mut controller = ThemePreferenceController::resolve(store, &NO_HINT, DarkFlag::default());
        let before = controller.store().get(THEME_KEY).map(str::to_owned);

        controller.toggle();
        controller.toggle();

        assert_eq!(controller.current(), Dark);
        assert_eq!(controller.store().get(THEME_KEY).map(str::to_owned), before);
    }

    #[test]
    fn double_toggle_from_empty_store_restores_persisted_value() {
        let mut controller =
            ThemePreferenceController::resolve(MemoryStore::new(), &Some(Dark), DarkFlag::default());
        let before = controller.store().get(THEME_KEY).map(str::to_owned);

        controller.toggle();
        controller.toggle();

        assert_eq!(controller.current(), Dark);
        assert_eq!(controller.store().get(THEME_KEY).map(str::to_owned), before);
        assert_eq!(before.as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_works_in_memory_when_storage_fails() {
        let mut controller =
            ThemePreferenceController::resolve(UnavailableStore, &NO_HINT, DarkFlag::default());
        assert_eq!(controller.toggle(), Dark);
        assert!(controller.surface().dark);
        assert_eq!(controller.toggle(), Light);
    }

    #[test]
    fn repeated_apply_is_idempotent() {
        let mut controller =
            ThemePreferenceController::resolve(MemoryStore::new(), &Some(Dark), DarkFlag::default());
        controller.apply();
        controller.apply();
        assert_eq!(controller.surface().changes, 1);
    }
}
