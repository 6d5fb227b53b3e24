//! Content block and tech stack item mutations.
//!
//! Both families address an owning section by id first; a vanished or
//! wrong-kind section makes the whole call a silent no-op. Adds append at
//! the end of the child list; deletes renumber survivors so child orders
//! stay contiguous, matching the section-level policy.

use super::{NewContentBlock, NewTechStackItem, ProfileEngine};
use crate::ident::generate_id;
use crate::model::{ContentBlock, Mode, TechStackItem};
use crate::ordering::renumber;
use crate::store::ProfileStore;

impl<S: ProfileStore> ProfileEngine<S> {
    /// Append a block to a content section. Returns the new block's id, or
    /// `None` if the section is missing or holds tech stack items.
    pub fn add_content_block(
        &mut self,
        mode: Mode,
        section_id: &str,
        spec: NewContentBlock,
    ) -> Option<String> {
        let blocks = self.section_mut(mode, section_id)?.content_blocks_mut()?;
        let block = ContentBlock {
            id: generate_id("block"),
            kind: spec.kind,
            content: spec.content,
            duration: spec.duration,
            image: spec.image,
            image_link: spec.image_link,
            order: blocks.len() as u32,
            enable_glass_effect: spec.enable_glass_effect,
        };
        let id = block.id.clone();
        blocks.push(block);
        Some(id)
    }

    /// Replace the editable fields of an existing block, keeping its id and
    /// position. No-op if the section or block vanished.
    pub fn update_content_block(
        &mut self,
        mode: Mode,
        section_id: &str,
        block_id: &str,
        fields: NewContentBlock,
    ) {
        let Some(section) = self.section_mut(mode, section_id) else {
            return;
        };
        let Some(blocks) = section.content_blocks_mut() else {
            return;
        };
        if let Some(block) = blocks.iter_mut().find(|b| b.id == block_id) {
            block.kind = fields.kind;
            block.content = fields.content;
            block.duration = fields.duration;
            block.image = fields.image;
            block.image_link = fields.image_link;
            block.enable_glass_effect = fields.enable_glass_effect;
        }
    }

    /// Remove a block and renumber its siblings. No-op if the section or
    /// block vanished.
    pub fn delete_content_block(&mut self, mode: Mode, section_id: &str, block_id: &str) {
        let Some(section) = self.section_mut(mode, section_id) else {
            return;
        };
        let Some(blocks) = section.content_blocks_mut() else {
            return;
        };
        let before = blocks.len();
        blocks.retain(|b| b.id != block_id);
        if blocks.len() != before {
            renumber(blocks);
        }
    }

    /// Append an item to a tech stack section. Returns the new item's id, or
    /// `None` if the section is missing or holds content blocks.
    pub fn add_tech_stack(
        &mut self,
        mode: Mode,
        section_id: &str,
        spec: NewTechStackItem,
    ) -> Option<String> {
        let items = self.section_mut(mode, section_id)?.tech_stack_mut()?;
        let item = TechStackItem {
            id: generate_id("tech"),
            name: spec.name,
            icon: spec.icon,
            link: spec.link,
            order: items.len() as u32,
        };
        let id = item.id.clone();
        items.push(item);
        Some(id)
    }

    /// Replace the editable fields of an existing item, keeping its id and
    /// position. No-op if the section or item vanished.
    pub fn update_tech_stack(
        &mut self,
        mode: Mode,
        section_id: &str,
        tech_id: &str,
        fields: NewTechStackItem,
    ) {
        let Some(section) = self.section_mut(mode, section_id) else {
            return;
        };
        let Some(items) = section.tech_stack_mut() else {
            return;
        };
        if let Some(item) = items.iter_mut().find(|t| t.id == tech_id) {
            item.name = fields.name;
            item.icon = fields.icon;
            item.link = fields.link;
        }
    }

    /// Remove an item and renumber its siblings. No-op if the section or
    /// item vanished.
    pub fn delete_tech_stack(&mut self, mode: Mode, section_id: &str, tech_id: &str) {
        let Some(section) = self.section_mut(mode, section_id) else {
            return;
        };
        let Some(items) = section.tech_stack_mut() else {
            return;
        };
        let before = items.len();
        items.retain(|t| t.id != tech_id);
        if items.len() != before {
            renumber(items);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NewSection;
    use crate::model::{ContentBlockKind, SectionKind};
    use crate::store::memory::InMemoryStore;

    fn engine_with_sections() -> (ProfileEngine<InMemoryStore>, String, String) {
        let mut engine = ProfileEngine::new(InMemoryStore::new());
        let content = engine.add_section(
            Mode::Primary,
            NewSection::new("Projects", SectionKind::Content),
            None,
        );
        let tech = engine.add_section(
            Mode::Primary,
            NewSection::new("Stack", SectionKind::TechStack),
            None,
        );
        (engine, content, tech)
    }

    fn blocks_of<'a>(
        engine: &'a ProfileEngine<InMemoryStore>,
        section_id: &str,
    ) -> &'a [ContentBlock] {
        engine
            .draft()
            .primary
            .sections
            .iter()
            .find(|s| s.id == section_id)
            .unwrap()
            .content_blocks()
            .unwrap()
    }

    fn tech_of<'a>(
        engine: &'a ProfileEngine<InMemoryStore>,
        section_id: &str,
    ) -> &'a [TechStackItem] {
        engine
            .draft()
            .primary
            .sections
            .iter()
            .find(|s| s.id == section_id)
            .unwrap()
            .tech_stack()
            .unwrap()
    }

    #[test]
    fn blocks_append_with_sequential_orders() {
        let (mut engine, content, _) = engine_with_sections();
        engine.add_content_block(
            Mode::Primary,
            &content,
            NewContentBlock::new(ContentBlockKind::Title, "One"),
        );
        engine.add_content_block(
            Mode::Primary,
            &content,
            NewContentBlock::new(ContentBlockKind::Context, "Two").with_duration("2024"),
        );

        let blocks = blocks_of(&engine, &content);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].order, 0);
        assert_eq!(blocks[1].order, 1);
        assert_eq!(blocks[1].duration.as_deref(), Some("2024"));
    }

    #[test]
    fn add_block_to_tech_section_is_refused() {
        let (mut engine, _, tech) = engine_with_sections();
        let id = engine.add_content_block(
            Mode::Primary,
            &tech,
            NewContentBlock::new(ContentBlockKind::Title, "Nope"),
        );
        assert!(id.is_none());
        assert!(tech_of(&engine, &tech).is_empty());
    }

    #[test]
    fn add_block_to_vanished_section_is_refused() {
        let (mut engine, _, _) = engine_with_sections();
        let before = engine.draft().clone();
        let id = engine.add_content_block(
            Mode::Primary,
            "section-gone",
            NewContentBlock::new(ContentBlockKind::Title, "Nope"),
        );
        assert!(id.is_none());
        assert_eq!(engine.draft(), &before);
    }

    #[test]
    fn update_block_replaces_fields_but_keeps_identity() {
        let (mut engine, content, _) = engine_with_sections();
        let id = engine
            .add_content_block(
                Mode::Primary,
                &content,
                NewContentBlock::new(ContentBlockKind::Title, "Old").with_duration("2023"),
            )
            .unwrap();

        engine.update_content_block(
            Mode::Primary,
            &content,
            &id,
            NewContentBlock::new(ContentBlockKind::Context, "New")
                .with_image("img.png", Some("https://example.com".to_string())),
        );

        let block = &blocks_of(&engine, &content)[0];
        assert_eq!(block.id, id);
        assert_eq!(block.order, 0);
        assert_eq!(block.kind, ContentBlockKind::Context);
        assert_eq!(block.content, "New");
        // Replacement semantics: unsubmitted optional fields clear.
        assert!(block.duration.is_none());
        assert_eq!(block.image.as_deref(), Some("img.png"));
        assert_eq!(block.image_link.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn delete_block_renumbers_siblings() {
        let (mut engine, content, _) = engine_with_sections();
        let first = engine
            .add_content_block(
                Mode::Primary,
                &content,
                NewContentBlock::new(ContentBlockKind::Title, "A"),
            )
            .unwrap();
        engine.add_content_block(
            Mode::Primary,
            &content,
            NewContentBlock::new(ContentBlockKind::Context, "B"),
        );
        engine.add_content_block(
            Mode::Primary,
            &content,
            NewContentBlock::new(ContentBlockKind::Context, "C"),
        );

        engine.delete_content_block(Mode::Primary, &content, &first);

        let blocks = blocks_of(&engine, &content);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].order, 0);
        assert_eq!(blocks[1].order, 1);
    }

    #[test]
    fn stale_block_mutations_are_noops() {
        let (mut engine, content, _) = engine_with_sections();
        engine.add_content_block(
            Mode::Primary,
            &content,
            NewContentBlock::new(ContentBlockKind::Title, "A"),
        );
        let before = engine.draft().clone();

        engine.update_content_block(
            Mode::Primary,
            &content,
            "block-gone",
            NewContentBlock::new(ContentBlockKind::Title, "X"),
        );
        engine.delete_content_block(Mode::Primary, &content, "block-gone");
        assert_eq!(engine.draft(), &before);
    }

    #[test]
    fn tech_items_append_with_sequential_orders() {
        let (mut engine, _, tech) = engine_with_sections();
        engine.add_tech_stack(Mode::Primary, &tech, NewTechStackItem::new("Rust", "rust.svg"));
        engine.add_tech_stack(
            Mode::Primary,
            &tech,
            NewTechStackItem::new("Serde", "serde.svg").with_link("https://serde.rs"),
        );

        let items = tech_of(&engine, &tech);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].order, 0);
        assert_eq!(items[1].order, 1);
        assert_eq!(items[1].link.as_deref(), Some("https://serde.rs"));
    }

    #[test]
    fn add_tech_to_content_section_is_refused() {
        let (mut engine, content, _) = engine_with_sections();
        let id = engine.add_tech_stack(
            Mode::Primary,
            &content,
            NewTechStackItem::new("Rust", "rust.svg"),
        );
        assert!(id.is_none());
    }

    #[test]
    fn update_tech_replaces_fields() {
        let (mut engine, _, tech) = engine_with_sections();
        let id = engine
            .add_tech_stack(
                Mode::Primary,
                &tech,
                NewTechStackItem::new("Rust", "rust.svg").with_link("https://rust-lang.org"),
            )
            .unwrap();

        engine.update_tech_stack(
            Mode::Primary,
            &tech,
            &id,
            NewTechStackItem::new("Tokio", "tokio.svg"),
        );

        let item = &tech_of(&engine, &tech)[0];
        assert_eq!(item.id, id);
        assert_eq!(item.name, "Tokio");
        assert!(item.link.is_none());
    }

    #[test]
    fn delete_tech_renumbers_siblings() {
        let (mut engine, _, tech) = engine_with_sections();
        let a = engine
            .add_tech_stack(Mode::Primary, &tech, NewTechStackItem::new("A", "a.svg"))
            .unwrap();
        engine.add_tech_stack(Mode::Primary, &tech, NewTechStackItem::new("B", "b.svg"));
        engine.add_tech_stack(Mode::Primary, &tech, NewTechStackItem::new("C", "c.svg"));

        engine.delete_tech_stack(Mode::Primary, &tech, &a);

        let items = tech_of(&engine, &tech);
        assert_eq!(
            items.iter().map(|t| t.order).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }
}
