//! Page section identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One named, anchorable region of the page.
///
/// The set is closed and ordered top to bottom; `ALL` is the document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section id: {0:?}")]
pub struct UnknownSectionError(pub String);

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Position in document order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::About => 1,
            Self::Skills => 2,
            Self::Projects => 3,
            Self::Contact => 4,
        }
    }

    /// Next section in document order, wrapping at the end.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section in document order, wrapping at the start.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for SectionId {
    type Err = UnknownSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSectionError(s.to_owned()))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::SectionId;

    #[test]
    fn parses_known_ids() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn rejects_unknown_and_differently_cased_ids() {
        assert!("nonexistent".parse::<SectionId>().is_err());
        assert!("Home".parse::<SectionId>().is_err());
        assert!("".parse::<SectionId>().is_err());
    }

    #[test]
    fn document_order_matches_index() {
        for (i, id) in SectionId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn cycling_wraps() {
        assert_eq!(SectionId::Contact.next(), SectionId::Home);
        assert_eq!(SectionId::Home.prev(), SectionId::Contact);
        assert_eq!(SectionId::Skills.next(), SectionId::Projects);
    }
}
