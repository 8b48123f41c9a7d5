//! End-to-end interaction flows against the terminal page type.

use std::fs;
use std::time::Duration;

use folio_config::load_content;
use folio_engine::{MemoryStore, SectionId, ThemePreference, UnavailableStore};
use folio_types::SiteContent;
use tempfile::tempdir;

use crate::common::{lay_out, mount};

const STEP: Duration = Duration::from_millis(100);

#[test]
fn hero_name_types_out_then_stops() {
    let mut page = mount(
        SiteContent::builtin(),
        Box::new(MemoryStore::new()),
        None,
        false,
    );
    assert_eq!(page.typewriter().revealed(), "");

    for _ in 0..4 {
        page.tick(STEP);
    }
    assert_eq!(page.typewriter().revealed(), "Deep");

    page.tick(Duration::from_secs(2));
    assert_eq!(page.typewriter().revealed(), "Deependra Swami");
    assert!(page.typewriter().is_complete());

    page.tick(Duration::from_secs(10));
    assert_eq!(page.typewriter().revealed(), "Deependra Swami");
}

#[test]
fn navigation_while_typing_does_not_disturb_reveal() {
    let mut page = mount(
        SiteContent::builtin(),
        Box::new(MemoryStore::new()),
        None,
        false,
    );
    lay_out(&mut page);
    page.tick(STEP * 3);

    page.on_toggle_menu();
    page.on_nav_click("projects");

    let nav = page.navigation();
    assert_eq!(nav.active, SectionId::Projects);
    assert!(!nav.menu_open);
    assert_eq!(page.viewport().offset(), 110);
    assert_eq!(page.typewriter().revealed(), "Dee");

    page.tick(STEP);
    assert_eq!(page.typewriter().revealed(), "Deep");
}

#[test]
fn unknown_target_changes_nothing() {
    let mut page = mount(
        SiteContent::builtin(),
        Box::new(MemoryStore::new()),
        None,
        true,
    );
    lay_out(&mut page);
    page.on_nav_click("about");
    page.on_toggle_menu();

    page.on_nav_click("blog");

    let nav = page.navigation();
    assert_eq!(nav.active, SectionId::About);
    assert!(nav.menu_open);
    assert_eq!(page.viewport().offset(), 20);
}

#[test]
fn unavailable_storage_still_toggles() {
    let mut page = mount(
        SiteContent::builtin(),
        Box::new(UnavailableStore),
        Some(ThemePreference::Dark),
        true,
    );
    assert_eq!(page.theme(), ThemePreference::Dark);
    assert_eq!(page.on_toggle_theme(), ThemePreference::Light);
    assert!(!page.theme_surface().is_dark());
}

#[test]
fn unmounted_page_ignores_actions_and_time() {
    let mut page = mount(
        SiteContent::builtin(),
        Box::new(MemoryStore::new()),
        None,
        false,
    );
    lay_out(&mut page);
    page.tick(STEP * 2);
    page.unmount();

    page.tick(Duration::from_secs(5));
    page.on_nav_click("contact");
    page.on_toggle_theme();

    assert_eq!(page.typewriter().revealed(), "De");
    assert_eq!(page.navigation().active, SectionId::Home);
    assert_eq!(page.theme(), ThemePreference::Light);
    assert!(!page.is_mounted());
}

#[test]
fn custom_content_file_drives_the_page() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("site.toml");
    fs::write(
        &path,
        r#"
        footer = "Built in a terminal"

        [hero]
        name = "Grace"
        role = "Rear Admiral"
        tagline = "It's easier to ask forgiveness."

        [[nav]]
        id = "home"
        label = "Top"

        [[nav]]
        id = "contact"
        label = "Say hi"

        [about]
        paragraphs = ["Wrote the first compiler."]

        [[skills]]
        name = "COBOL"
        category = "Languages"
        proficiency = 99

        [contact]
        heading = "Get in touch"
        message = ""
        email = "grace@example.org"
    "#,
    )
    .expect("write content");

    let content = load_content(&path).expect("valid content");
    let mut page = mount(content, Box::new(MemoryStore::new()), None, true);
    assert_eq!(page.typewriter().revealed(), "Grace");
    assert_eq!(page.content().label_for(SectionId::Contact), "Say hi");

    lay_out(&mut page);
    page.on_get_in_touch();
    assert_eq!(page.navigation().active, SectionId::Contact);
}
