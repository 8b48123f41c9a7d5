//! Page-level coordinator: owns the content and the three controllers and is
//! the single action surface for the presentation layer.

use std::time::Duration;

use tracing::{debug, info};

use folio_types::{ContentError, SectionId, SiteContent, ThemePreference};

use crate::navigation::{NavigationState, SectionNavigator, Viewport};
use crate::store::PreferenceStore;
use crate::theme::{ColorSchemeHint, ThemePreferenceController, ThemeSurface};
use crate::typewriter::{
    DEFAULT_CARET_BLINK, DEFAULT_REVEAL_INTERVAL, TypewriterEngine, UNICODE_CARET,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSettings {
    pub reveal_interval: Duration,
    pub caret_blink: Duration,
    pub caret_glyph: &'static str,
    /// Reveal the hero name at once instead of typing it.
    pub reduced_motion: bool,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
            caret_blink: DEFAULT_CARET_BLINK,
            caret_glyph: UNICODE_CARET,
            reduced_motion: false,
        }
    }
}

/// Collaborators the page is mounted into.
pub struct PageEnvironment<S, H, A, V> {
    pub store: S,
    pub hint: H,
    pub surface: A,
    pub viewport: V,
}

pub struct PageCoordinator<S, A, V> {
    content: SiteContent,
    typewriter: TypewriterEngine,
    theme: ThemePreferenceController<S, A>,
    navigator: SectionNavigator<V>,
    mounted: bool,
}

impl<S, A, V> PageCoordinator<S, A, V>
where
    S: PreferenceStore,
    A: ThemeSurface,
    V: Viewport,
{
    /// Validate `content`, create the controllers and start the hero typewriter.
    pub fn mount<H: ColorSchemeHint>(
        content: SiteContent,
        settings: PageSettings,
        env: PageEnvironment<S, H, A, V>,
    ) -> Result<Self, ContentError> {
        content.validate()?;

        let theme = ThemePreferenceController::resolve(env.store, &env.hint, env.surface);
        let navigator = SectionNavigator::new(env.viewport);
        let mut typewriter = TypewriterEngine::new(settings.caret_blink, settings.caret_glyph);
        if settings.reduced_motion {
            typewriter.start_revealed(content.hero.name.as_str());
        } else {
            typewriter.start(content.hero.name.as_str(), settings.reveal_interval);
        }

        info!(
            theme = %theme.current(),
            sections = content.nav.len(),
            skills = content.skills.len(),
            projects = content.projects.len(),
            "Page mounted"
        );

        Ok(Self {
            content,
            typewriter,
            theme,
            navigator,
            mounted: true,
        })
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    pub fn on_nav_click(&mut self, id: &str) {
        if self.ignore_when_unmounted("nav click") {
            return;
        }
        self.navigator.navigate_to(id);
    }

    /// Hero call-to-action.
    pub fn on_get_in_touch(&mut self) {
        if self.ignore_when_unmounted("get in touch") {
            return;
        }
        self.navigator.navigate_to_section(SectionId::Contact);
    }

    pub fn on_toggle_theme(&mut self) -> ThemePreference {
        if self.ignore_when_unmounted("theme toggle") {
            return self.theme.current();
        }
        self.theme.toggle()
    }

    pub fn on_toggle_menu(&mut self) {
        if self.ignore_when_unmounted("menu toggle") {
            return;
        }
        self.navigator.toggle_menu();
    }

    pub fn on_close_menu(&mut self) {
        if self.ignore_when_unmounted("menu close") {
            return;
        }
        self.navigator.close_menu();
    }

    /// The user scrolled by hand and `section` is now in view.
    pub fn on_scrolled_to(&mut self, section: SectionId) {
        if self.ignore_when_unmounted("scroll tracking") {
            return;
        }
        self.navigator.set_active_from_scroll(section);
    }

    /// Advance timers by the wall time since the previous frame.
    pub fn tick(&mut self, delta: Duration) {
        if self.mounted {
            self.typewriter.advance(delta);
        }
    }

    /// Cancel every pending timer. Later ticks and actions are ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.typewriter.cancel();
        self.mounted = false;
        info!("Page unmounted");
    }

    fn ignore_when_unmounted(&self, action: &str) -> bool {
        if !self.mounted {
            debug!(action, "Ignoring action on unmounted page");
        }
        !self.mounted
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    #[must_use]
    pub fn typewriter(&self) -> &TypewriterEngine {
        &self.typewriter
    }

    #[must_use]
    pub fn theme(&self) -> ThemePreference {
        self.theme.current()
    }

    pub fn theme_surface(&self) -> &A {
        self.theme.surface()
    }

    pub fn store(&self) -> &S {
        self.theme.store()
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationState {
        self.navigator.state()
    }

    pub fn viewport(&self) -> &V {
        self.navigator.viewport()
    }

    /// Layout feeds section positions and manual scrolling through here.
    pub fn viewport_mut(&mut self) -> &mut V {
        self.navigator.viewport_mut()
    }
}

impl<S, A, V> Drop for PageCoordinator<S, A, V> {
    fn drop(&mut self) {
        if self.mounted {
            self.typewriter.cancel();
            self.mounted = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{PageCoordinator, PageEnvironment, PageSettings};
    use crate::navigation::{NavigationState, Viewport};
    use crate::store::MemoryStore;
    use crate::theme::{THEME_KEY, ThemeSurface};
    use folio_types::{ContentError, SectionId, SiteContent, ThemePreference};

    #[derive(Debug, Default)]
    struct Surface(Option<ThemePreference>);

    impl ThemeSurface for Surface {
        fn apply(&mut self, preference: ThemePreference) {
            self.0 = Some(preference);
        }
    }

    #[derive(Debug, Default)]
    struct Rows {
        scrolled_to: Option<u16>,
    }

    impl Viewport for Rows {
        fn section_position(&self, section: SectionId) -> Option<u16> {
            Some(section.index() as u16 * 10)
        }

        fn smooth_scroll_to(&mut self, position: u16) {
            self.scrolled_to = Some(position);
        }
    }

    type Page = PageCoordinator<MemoryStore, Surface, Rows>;

    fn mount_with(content: SiteContent, settings: PageSettings) -> Result<Page, ContentError> {
        PageCoordinator::mount(
            content,
            settings,
            PageEnvironment {
                store: MemoryStore::new(),
                hint: Some(ThemePreference::Dark),
                surface: Surface::default(),
                viewport: Rows::default(),
            },
        )
    }

    fn page() -> Page {
        mount_with(SiteContent::builtin(), PageSettings::default()).expect("builtin content")
    }

    #[test]
    fn mount_resolves_theme_and_starts_typewriter() {
        let page = page();
        assert_eq!(page.theme(), ThemePreference::Dark);
        assert_eq!(page.theme_surface().0, Some(ThemePreference::Dark));
        assert_eq!(page.typewriter().source(), "Deependra Swami");
        assert_eq!(page.typewriter().revealed(), "");
        assert_eq!(page.navigation(), NavigationState::default());
    }

    #[test]
    fn mount_rejects_invalid_content() {
        let mut content = SiteContent::builtin();
        content.nav.push(content.nav[0].clone());
        assert!(matches!(
            mount_with(content, PageSettings::default()),
            Err(ContentError::DuplicateNavItem(SectionId::Home))
        ));
    }

    #[test]
    fn nav_click_delegates_to_navigator() {
        let mut page = page();
        page.on_toggle_menu();
        page.on_nav_click("skills");
        assert_eq!(
            page.navigation(),
            NavigationState {
                active: SectionId::Skills,
                menu_open: false
            }
        );
        assert_eq!(page.viewport().scrolled_to, Some(20));
    }

    #[test]
    fn unknown_nav_click_is_ignored() {
        let mut page = page();
        page.on_toggle_menu();
        page.on_nav_click("blog");
        assert_eq!(
            page.navigation(),
            NavigationState {
                active: SectionId::Home,
                menu_open: true
            }
        );
        assert_eq!(page.viewport().scrolled_to, None);
    }

    #[test]
    fn get_in_touch_goes_to_contact() {
        let mut page = page();
        page.on_get_in_touch();
        assert_eq!(page.navigation().active, SectionId::Contact);
    }

    #[test]
    fn toggle_theme_writes_through() {
        let mut page = page();
        assert_eq!(page.on_toggle_theme(), ThemePreference::Light);
        assert_eq!(page.store().get(THEME_KEY), Some("light"));
        assert_eq!(page.theme_surface().0, Some(ThemePreference::Light));
    }

    #[test]
    fn tick_drives_the_typewriter() {
        let mut page = page();
        page.tick(Duration::from_millis(100) * 8);
        assert_eq!(page.typewriter().revealed(), "Deependr");
    }

    #[test]
    fn reduced_motion_reveals_immediately() {
        let settings = PageSettings {
            reduced_motion: true,
            ..PageSettings::default()
        };
        let page = mount_with(SiteContent::builtin(), settings).expect("mount");
        assert_eq!(page.typewriter().revealed(), "Deependra Swami");
    }

    #[test]
    fn scroll_tracking_only_moves_indicator() {
        let mut page = page();
        page.on_scrolled_to(SectionId::Projects);
        assert_eq!(page.navigation().active, SectionId::Projects);
        assert_eq!(page.viewport().scrolled_to, None);
    }

    #[test]
    fn unmount_cancels_timers_and_freezes_state() {
        let mut page = page();
        page.tick(Duration::from_millis(300));
        page.unmount();
        assert!(!page.typewriter().is_running());

        page.tick(Duration::from_secs(5));
        page.on_nav_click("about");
        page.on_toggle_menu();
        let theme = page.theme();
        page.on_toggle_theme();

        assert_eq!(page.typewriter().revealed(), "Dee");
        assert_eq!(page.navigation(), NavigationState::default());
        assert_eq!(page.theme(), theme);
        assert!(!page.is_mounted());
    }
}
