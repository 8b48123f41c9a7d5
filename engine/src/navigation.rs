//! Active-section tracking, scroll-to-section navigation and the collapsible menu.

use tracing::debug;

use folio_types::SectionId;

/// Scroll surface the navigator drives.
pub trait Viewport {
    /// Top offset of `section` within the scrollable page, if laid out.
    fn section_position(&self, section: SectionId) -> Option<u16>;
    /// Start an animated scroll toward `position`.
    fn smooth_scroll_to(&mut self, position: u16);
}

/// Two independent axes; every combination is a valid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub active: SectionId,
    pub menu_open: bool,
}

pub struct SectionNavigator<V> {
    state: NavigationState,
    viewport: V,
}

impl<V: Viewport> SectionNavigator<V> {
    #[must_use]
    pub fn new(viewport: V) -> Self {
        Self {
            state: NavigationState::default(),
            viewport,
        }
    }

    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub fn active(&self) -> SectionId {
        self.state.active
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.state.menu_open
    }

    /// Navigate to the section named `id`.
    ///
    /// Unknown ids leave the state untouched. Returns whether navigation happened.
    pub fn navigate_to(&mut self, id: &str) -> bool {
        match id.parse::<SectionId>() {
            Ok(section) => {
                self.navigate_to_section(section);
                true
            }
            Err(e) => {
                debug!("Ignoring navigation request: {e}");
                false
            }
        }
    }

    /// Scroll to `section`, mark it active and close the menu.
    ///
    /// A section the viewport has not laid out yet is still marked active; only
    /// the scroll is skipped.
    pub fn navigate_to_section(&mut self, section: SectionId) {
        match self.viewport.section_position(section) {
            Some(position) => self.viewport.smooth_scroll_to(position),
            None => debug!(%section, "Section not laid out; skipping scroll"),
        }
        self.state.active = section;
        self.state.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.state.menu_open = false;
    }

    /// Passive tracking for scrolling the user did by hand. Only the indicator
    /// moves; the viewport and the menu are left alone.
    pub fn set_active_from_scroll(&mut self, section: SectionId) {
        self.state.active = section;
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }
}
