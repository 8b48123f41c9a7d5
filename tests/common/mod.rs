//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::path::Path;

use folio_config::FilePreferenceStore;
use folio_engine::{
    PageCoordinator, PageEnvironment, PageSettings, PreferenceStore, ThemePreference,
};
use folio_tui::{DocumentTheme, Page, PageViewport};
use folio_types::SiteContent;

/// Section rows for a 20-row viewport over a 200-row document.
pub const LAYOUT: [Option<u16>; 5] = [Some(0), Some(20), Some(60), Some(110), Some(170)];

pub fn mount(
    content: SiteContent,
    store: Box<dyn PreferenceStore>,
    hint: Option<ThemePreference>,
    reduced_motion: bool,
) -> Page {
    PageCoordinator::mount(
        content,
        PageSettings {
            reduced_motion,
            ..PageSettings::default()
        },
        PageEnvironment {
            store,
            hint,
            surface: DocumentTheme::new(),
            viewport: PageViewport::new(true),
        },
    )
    .expect("content is valid")
}

/// The built-in page backed by a preference file at `path`.
pub fn mount_with_file(path: &Path, hint: Option<ThemePreference>) -> Page {
    mount(
        SiteContent::builtin(),
        Box::new(FilePreferenceStore::new(path)),
        hint,
        false,
    )
}

pub fn lay_out(page: &mut Page) {
    page.viewport_mut().set_layout(20, 200, LAYOUT);
}
