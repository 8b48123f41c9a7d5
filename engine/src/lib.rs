//! Interaction state for the Folio landing page.
//!
//! The engine owns three independent controllers and the coordinator that wires
//! them to user actions:
//!
//! ```text
//!                    PageCoordinator
//!        ┌──────────────────┼────────────────────┐
//!  TypewriterEngine  ThemePreferenceController  SectionNavigator
//!        │              │            │                 │
//!  ScheduledTask   PreferenceStore  ThemeSurface     Viewport
//! ```
//!
//! Nothing here renders. Controllers expose state and accept actions; the
//! environment (storage, the terminal, the scroll position) is reached only
//! through the injected collaborator traits, so every controller can be driven
//! in tests with plain in-memory doubles.
//!
//! Time is cooperative: the frame loop calls [`PageCoordinator::tick`] with the
//! elapsed wall time and due tasks fire inside that call.

mod navigation;
mod page;
mod schedule;
mod store;
mod theme;
mod typewriter;

pub use navigation::{NavigationState, SectionNavigator, Viewport};
pub use page::{PageCoordinator, PageEnvironment, PageSettings};
pub use schedule::ScheduledTask;
pub use store::{MemoryStore, PreferenceStore, StoreError, UnavailableStore};
pub use theme::{
    ColorSchemeHint, THEME_KEY, ThemePreferenceController, ThemeSurface, resolve_initial,
};
pub use typewriter::{
    ASCII_CARET, DEFAULT_CARET_BLINK, DEFAULT_REVEAL_INTERVAL, TypewriterEngine, UNICODE_CARET,
};

pub use folio_types::{SectionId, SiteContent, ThemePreference};
