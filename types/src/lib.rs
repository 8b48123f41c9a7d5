//! Core domain types for Folio.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod content;
mod section;
mod theme;
pub mod ui;

pub use content::{
    AboutContent, ContactContent, ContentError, HeroContent, Highlight, NavItem, Project,
    SiteContent, Skill, SkillIcon, SocialKind, SocialLink,
};
pub use section::{SectionId, UnknownSectionError};
pub use theme::{ThemePreference, UnknownThemeError};
