//! Shared infrastructure utilities for Folio.
//!
//! - **`atomic_write`**: crash-safe file persistence (temp + rename), used for
//!   the preference file so a crash mid-toggle never leaves it truncated.

pub mod atomic_write;

pub use atomic_write::{
    AtomicWriteOptions, FileSyncPolicy, atomic_write_with_options, recover_bak_file,
};
