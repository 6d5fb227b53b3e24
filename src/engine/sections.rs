//! Section mutations: the top-level containers of each mode.
//!
//! Sections are the unit of reordering and of the "insert after" placement
//! policy: a new section lands at the top unless the caller names an
//! existing section to insert after. [`ProfileEngine::reorder_sections`] is
//! the sole rearrangement entry point; drag-and-drop UIs reduce their result
//! to an id order and pass it here.

use super::{NewSection, ProfileEngine, SectionPatch};
use crate::ident::generate_id;
use crate::model::{Mode, ProfileSection, SectionBody};
use crate::ordering::{renumber, reorder};
use crate::store::ProfileStore;

impl<S: ProfileStore> ProfileEngine<S> {
    /// Add a section and renumber the list. Returns the new section's id.
    ///
    /// Placement: top of the list when `insert_after` is `None` or names a
    /// section that no longer exists; immediately after the named section
    /// otherwise.
    pub fn add_section(
        &mut self,
        mode: Mode,
        spec: NewSection,
        insert_after: Option<&str>,
    ) -> String {
        let section = ProfileSection {
            id: generate_id("section"),
            name: spec.name,
            order: 0,
            enable_glass_effect: spec.enable_glass_effect,
            body: SectionBody::empty(spec.kind),
        };
        let id = section.id.clone();

        let sections = &mut self.draft_mut().content_mut(mode).sections;
        let index = insert_after
            .and_then(|after| sections.iter().position(|s| s.id == after))
            .map(|pos| pos + 1)
            .unwrap_or(0);
        sections.insert(index, section);
        renumber(sections);
        id
    }

    /// Merge `patch` into the section with `id`. No-op if the id vanished.
    pub fn update_section(&mut self, mode: Mode, id: &str, patch: SectionPatch) {
        if let Some(section) = self.section_mut(mode, id) {
            if let Some(name) = patch.name {
                section.name = name;
            }
            if let Some(glass) = patch.enable_glass_effect {
                section.enable_glass_effect = glass;
            }
        }
    }

    /// Remove the section with `id` and renumber survivors. No-op if the id
    /// vanished.
    pub fn delete_section(&mut self, mode: Mode, id: &str) {
        let sections = &mut self.draft_mut().content_mut(mode).sections;
        let before = sections.len();
        sections.retain(|s| s.id != id);
        if sections.len() != before {
            renumber(sections);
        }
    }

    /// Rearrange the mode's sections to match `ids`.
    ///
    /// Unknown ids are dropped; sections missing from `ids` are dropped from
    /// the document. Callers must pass a permutation of all current ids.
    pub fn reorder_sections(&mut self, mode: Mode, ids: &[String]) {
        let content = self.draft_mut().content_mut(mode);
        let sections = std::mem::take(&mut content.sections);
        content.sections = reorder(sections, ids);
    }
}
