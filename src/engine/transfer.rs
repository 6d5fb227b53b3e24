//! Export and import of the whole document.
//!
//! The wire format is a versioned envelope around the profile:
//!
//! ```json
//! { "formatVersion": 1, "profile": { ... } }
//! ```
//!
//! Import is all-or-nothing: parse and version-check first, persist through
//! the store, and only then replace both the draft and the committed
//! snapshot. Any failure leaves the engine exactly as it was.

use super::ProfileEngine;
use crate::error::{FolioError, Result};
use crate::model::Profile;
use crate::store::ProfileStore;
use serde::{Deserialize, Serialize};

/// Version of the export envelope. Bump on any breaking shape change and add
/// a migration at the import boundary.
pub const EXPORT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileExport {
    pub format_version: u32,
    pub profile: Profile,
}

impl<S: ProfileStore> ProfileEngine<S> {
    /// Serialize the draft into the canonical export envelope.
    pub fn export_document(&self) -> Result<String> {
        let envelope = ProfileExport {
            format_version: EXPORT_FORMAT_VERSION,
            profile: self.draft().clone(),
        };
        serde_json::to_string_pretty(&envelope).map_err(FolioError::Serialization)
    }

    /// Replace the whole document with an exported one and persist it.
    ///
    /// Rejects malformed JSON and unknown `formatVersion` values before any
    /// state change; a persistence failure also leaves both documents
    /// untouched.
    pub fn import_document(&mut self, serialized: &str) -> Result<()> {
        let envelope: ProfileExport =
            serde_json::from_str(serialized).map_err(FolioError::Serialization)?;
        if envelope.format_version != EXPORT_FORMAT_VERSION {
            return Err(FolioError::UnsupportedVersion {
                found: envelope.format_version,
                expected: EXPORT_FORMAT_VERSION,
            });
        }

        self.store_mut().save(&envelope.profile).map_err(|err| {
            tracing::warn!(error = %err, "import failed to persist, document unchanged");
            err
        })?;
        self.replace_documents(envelope.profile);
        Ok(())
    }
}
