//! # Draft/Commit Engine
//!
//! This module contains the **core business logic** of folio. The engine
//! holds two instances of the document: the *draft* (mutable, edited in
//! place) and the *committed* snapshot (immutable until a commit), and
//! exposes the full CRUD/reorder API over the draft.
//!
//! ## Role and Responsibilities
//!
//! - Apply every mutation to the draft while preserving ordering and
//!   identity invariants
//! - Derive dirty state by structural comparison, never a stored flag
//! - Commit (persist, then snapshot) and discard (revert to snapshot)
//!   atomically
//! - Export and import the document through a versioned envelope
//!
//! ## What the Engine Does NOT Do
//!
//! - **Validation of content**: emails, URLs, and image references pass
//!   through untouched; presentation layers validate before calling
//! - **Authorization**: the engine assumes it is invoked from an
//!   authenticated editing context
//! - **Rendering**: consumers read [`ProfileEngine::draft`] and re-render on
//!   their own schedule; the engine emits no callbacks
//!
//! ## Tolerant Mutations
//!
//! Updates and deletes addressed at an id that no longer exists are silent
//! no-ops. In an event-driven editor a delete and a follow-up edit from stale
//! UI state can race within the same tick; treating that as an error would
//! surface spurious failures for a single local user.
//!
//! ## Mutation Modules
//!
//! - [`personal`]: personal info merge, social link CRUD
//! - [`sections`]: section add/update/delete/reorder
//! - [`blocks`]: content blocks and tech stack items
//! - [`settings`]: display settings, theme, background, layout
//! - [`transfer`]: export/import
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Mutation tests build
//! fresh engines over [`InMemoryStore`](crate::store::memory::InMemoryStore)
//! and assert on the draft; persistence behavior is tested against the
//! fixtures in `store::memory` and the file store integration tests.

use crate::error::Result;
use crate::model::{
    BackgroundKind, BorderStyle, ContentBlockKind, Mode, Profile, ProfileSection, SectionKind,
    SocialPlatform,
};
use crate::store::ProfileStore;

pub mod blocks;
pub mod personal;
pub mod sections;
pub mod settings;
pub mod transfer;

/// The draft/commit engine. One instance per editing session, constructed at
/// application start and passed by reference to all consumers.
pub struct ProfileEngine<S: ProfileStore> {
    store: S,
    draft: Profile,
    committed: Profile,
}

impl<S: ProfileStore> ProfileEngine<S> {
    /// Build an engine over `store`, loading the last committed profile.
    ///
    /// A missing profile starts from the built-in template; a load failure
    /// (unreadable or corrupt storage) does the same, logged as a
    /// recoverable condition. Startup never fails.
    pub fn new(store: S) -> Self {
        let committed = match store.load() {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                tracing::debug!("no stored profile, starting from template");
                Profile::template()
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load stored profile, falling back to template");
                Profile::template()
            }
        };
        let draft = committed.clone();
        Self {
            store,
            draft,
            committed,
        }
    }

    /// The live working copy. All mutations apply here.
    pub fn draft(&self) -> &Profile {
        &self.draft
    }

    /// The last persisted snapshot.
    pub fn committed(&self) -> &Profile {
        &self.committed
    }

    /// Whether the draft differs structurally from the committed snapshot.
    ///
    /// Recomputed on demand rather than tracked per mutation, so it can never
    /// drift from the actual state. The document is small (dozens of
    /// entities), so the full comparison is cheap.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }

    /// Persist the draft, then make it the committed snapshot.
    ///
    /// On persistence failure the draft is left untouched and the error
    /// surfaces so the caller can retry.
    pub fn commit(&mut self) -> Result<()> {
        self.store.save(&self.draft).map_err(|err| {
            tracing::warn!(error = %err, "commit failed, draft preserved");
            err
        })?;
        self.committed = self.draft.clone();
        Ok(())
    }

    /// Throw away every uncommitted mutation, reverting the draft to the
    /// committed snapshot. Total, not selective.
    pub fn discard(&mut self) {
        self.draft = self.committed.clone();
    }

    pub(crate) fn draft_mut(&mut self) -> &mut Profile {
        &mut self.draft
    }

    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub(crate) fn replace_documents(&mut self, profile: Profile) {
        self.draft = profile.clone();
        self.committed = profile;
    }

    pub(crate) fn section_mut(&mut self, mode: Mode, id: &str) -> Option<&mut ProfileSection> {
        self.draft
            .content_mut(mode)
            .sections
            .iter_mut()
            .find(|s| s.id == id)
    }
}

// --- Mutation input types ---

/// Partial update for a mode's personal info. `None` fields are untouched.
#[derive(Debug, Clone, Default)]
pub struct PersonalInfoPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub show_email: Option<bool>,
    pub show_phone: Option<bool>,
    pub image: Option<String>,
    pub enable_3d: Option<bool>,
    pub enable_gradient: Option<bool>,
    pub border_style: Option<BorderStyle>,
}

#[derive(Debug, Clone, Default)]
pub struct SocialLinkPatch {
    pub platform: Option<SocialPlatform>,
    pub url: Option<String>,
}

/// Spec for a new section. The child collection starts empty and matches
/// `kind` by construction.
#[derive(Debug, Clone)]
pub struct NewSection {
    pub name: String,
    pub kind: SectionKind,
    pub enable_glass_effect: bool,
}

impl NewSection {
    pub fn new(name: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            enable_glass_effect: false,
        }
    }

    pub fn with_glass_effect(mut self) -> Self {
        self.enable_glass_effect = true;
        self
    }
}

/// Partial update for an existing section. The section's kind is fixed at
/// creation; only presentation fields can change.
#[derive(Debug, Clone, Default)]
pub struct SectionPatch {
    pub name: Option<String>,
    pub enable_glass_effect: Option<bool>,
}

/// Full editable field set of a content block. Used both to create a block
/// and to replace an existing block's fields wholesale; the block editor
/// always submits every field, so there is no partial form.
#[derive(Debug, Clone)]
pub struct NewContentBlock {
    pub kind: ContentBlockKind,
    pub content: String,
    pub duration: Option<String>,
    pub image: Option<String>,
    pub image_link: Option<String>,
    pub enable_glass_effect: bool,
}

impl NewContentBlock {
    pub fn new(kind: ContentBlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            duration: None,
            image: None,
            image_link: None,
            enable_glass_effect: false,
        }
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>, link: Option<String>) -> Self {
        self.image = Some(image.into());
        self.image_link = link;
        self
    }
}

/// Full editable field set of a tech stack item. Same create/replace dual
/// role as [`NewContentBlock`].
#[derive(Debug, Clone)]
pub struct NewTechStackItem {
    pub name: String,
    pub icon: String,
    pub link: Option<String>,
}

impl NewTechStackItem {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            link: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct DisplaySettingsPatch {
    pub show_primary: Option<bool>,
    pub show_secondary: Option<bool>,
    pub default_mode: Option<Mode>,
}

#[derive(Debug, Clone, Default)]
pub struct ThemePatch {
    pub accent_color: Option<String>,
    pub text_color: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct BackgroundPatch {
    pub kind: Option<BackgroundKind>,
    pub color: Option<String>,
    pub speed: Option<u8>,
    pub density: Option<u8>,
    pub interactive: Option<bool>,
    pub custom_options: Option<serde_json::Map<String, serde_json::Value>>,
}
