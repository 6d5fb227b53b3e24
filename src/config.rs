//! # Configuration
//!
//! Folio configuration is managed by [`confique`], which handles layered
//! loading from TOML files, environment variables, and programmatic
//! overrides. The library itself only defines the schema and defaults; host
//! applications decide where the config file lives and call
//! `FolioConfig::builder()` themselves.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data directory (via `directories`) | Where the profile blob is stored |
//! | `data_file` | `profile.json` | File name of the profile blob |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = "profile.json";

/// Configuration for folio, stored in `folio.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct FolioConfig {
    /// Directory holding the profile blob. When absent, an OS-appropriate
    /// per-user data directory is used.
    pub data_dir: Option<PathBuf>,

    /// File name of the profile blob within the data directory.
    pub data_file: Option<String>,
}

impl FolioConfig {
    /// Get the data file name, using the default when not configured.
    pub fn data_file_name(&self) -> String {
        self.data_file
            .clone()
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string())
    }
}
