//! Loading page content from a TOML file.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use folio_types::{ContentError, SiteContent};

#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("failed to read content file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid content in {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: ContentError,
    },
}

/// Read, parse and validate a content file.
pub fn load_content(path: &Path) -> Result<SiteContent, ContentLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content: SiteContent = toml::from_str(&raw).map_err(|source| ContentLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    content
        .validate()
        .map_err(|source| ContentLoadError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), "Loaded page content");
    Ok(content)
}
