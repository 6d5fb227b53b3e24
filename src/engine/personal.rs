//! Personal info and social link mutations.

use super::{PersonalInfoPatch, ProfileEngine, SocialLinkPatch};
use crate::ident::generate_id;
use crate::model::{Mode, SocialLink, SocialPlatform};
use crate::store::ProfileStore;

impl<S: ProfileStore> ProfileEngine<S> {
    /// Merge `patch` into the mode's personal info. Fields left `None` are
    /// untouched; no content validation happens here.
    pub fn update_personal_info(&mut self, mode: Mode, patch: PersonalInfoPatch) {
        let personal = &mut self.draft_mut().content_mut(mode).personal;
        if let Some(name) = patch.name {
            personal.name = name;
        }
        if let Some(title) = patch.title {
            personal.title = title;
        }
        if let Some(email) = patch.email {
            personal.email = email;
        }
        if let Some(phone) = patch.phone {
            personal.phone = phone;
        }
        if let Some(show_email) = patch.show_email {
            personal.show_email = show_email;
        }
        if let Some(show_phone) = patch.show_phone {
            personal.show_phone = show_phone;
        }
        if let Some(image) = patch.image {
            personal.image = image;
        }
        if let Some(enable_3d) = patch.enable_3d {
            personal.enable_3d = enable_3d;
        }
        if let Some(enable_gradient) = patch.enable_gradient {
            personal.enable_gradient = enable_gradient;
        }
        if let Some(border_style) = patch.border_style {
            personal.border_style = border_style;
        }
    }

    /// Append a social link; its `order` records the insertion rank.
    /// Returns the new link's id.
    pub fn add_social_link(
        &mut self,
        mode: Mode,
        platform: SocialPlatform,
        url: impl Into<String>,
    ) -> String {
        let links = &mut self.draft_mut().content_mut(mode).social_links;
        let link = SocialLink {
            id: generate_id("social"),
            platform,
            url: url.into(),
            order: links.len() as u32,
        };
        let id = link.id.clone();
        links.push(link);
        id
    }

    /// Merge `patch` into the link with `id`. No-op if the id vanished.
    pub fn update_social_link(&mut self, mode: Mode, id: &str, patch: SocialLinkPatch) {
        let links = &mut self.draft_mut().content_mut(mode).social_links;
        if let Some(link) = links.iter_mut().find(|l| l.id == id) {
            if let Some(platform) = patch.platform {
                link.platform = platform;
            }
            if let Some(url) = patch.url {
                link.url = url;
            }
        }
    }

    /// Remove the link with `id`. Survivors keep their `order` values; the
    /// social list is the one collection that tolerates gaps.
    pub fn delete_social_link(&mut self, mode: Mode, id: &str) {
        self.draft_mut()
            .content_mut(mode)
            .social_links
            .retain(|l| l.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BorderStyle;
    use crate::store::memory::InMemoryStore;

    fn fresh_engine() -> ProfileEngine<InMemoryStore> {
        ProfileEngine::new(InMemoryStore::new())
    }

    #[test]
    fn personal_patch_merges_only_given_fields() {
        let mut engine = fresh_engine();
        let before = engine.draft().primary.personal.clone();

        engine.update_personal_info(
            Mode::Primary,
            PersonalInfoPatch {
                name: Some("Ada".to_string()),
                border_style: Some(BorderStyle::Star),
                ..Default::default()
            },
        );

        let after = &engine.draft().primary.personal;
        assert_eq!(after.name, "Ada");
        assert_eq!(after.border_style, BorderStyle::Star);
        assert_eq!(after.title, before.title);
        assert_eq!(after.email, before.email);
    }

    #[test]
    fn personal_patch_is_mode_scoped() {
        let mut engine = fresh_engine();
        let secondary_before = engine.draft().secondary.personal.clone();

        engine.update_personal_info(
            Mode::Primary,
            PersonalInfoPatch {
                name: Some("Ada".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(engine.draft().secondary.personal, secondary_before);
    }

    #[test]
    fn hiding_a_contact_keeps_its_value() {
        let mut engine = fresh_engine();
        engine.update_personal_info(
            Mode::Primary,
            PersonalInfoPatch {
                show_email: Some(false),
                ..Default::default()
            },
        );
        let personal = &engine.draft().primary.personal;
        assert!(!personal.show_email);
        assert!(!personal.email.is_empty());
    }

    #[test]
    fn added_links_take_sequential_orders() {
        let mut engine = fresh_engine();
        engine.add_social_link(Mode::Primary, SocialPlatform::Github, "https://github.com/a");
        engine.add_social_link(Mode::Primary, SocialPlatform::Twitter, "https://x.com/a");
        engine.add_social_link(Mode::Primary, SocialPlatform::Medium, "https://medium.com/@a");

        let orders: Vec<u32> = engine
            .draft()
            .primary
            .social_links
            .iter()
            .map(|l| l.order)
            .collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn deleting_a_link_leaves_order_gaps() {
        let mut engine = fresh_engine();
        engine.add_social_link(Mode::Primary, SocialPlatform::Github, "https://github.com/a");
        let middle = engine.add_social_link(Mode::Primary, SocialPlatform::Twitter, "https://x.com/a");
        engine.add_social_link(Mode::Primary, SocialPlatform::Medium, "https://medium.com/@a");

        engine.delete_social_link(Mode::Primary, &middle);

        let orders: Vec<u32> = engine
            .draft()
            .primary
            .social_links
            .iter()
            .map(|l| l.order)
            .collect();
        assert_eq!(orders, vec![0, 2]);
    }

    #[test]
    fn update_link_merges_fields() {
        let mut engine = fresh_engine();
        let id = engine.add_social_link(Mode::Primary, SocialPlatform::Github, "https://old");
        engine.update_social_link(
            Mode::Primary,
            &id,
            SocialLinkPatch {
                url: Some("https://new".to_string()),
                ..Default::default()
            },
        );
        let link = &engine.draft().primary.social_links[0];
        assert_eq!(link.url, "https://new");
        assert_eq!(link.platform, SocialPlatform::Github);
    }

    #[test]
    fn stale_link_update_is_a_noop() {
        let mut engine = fresh_engine();
        engine.add_social_link(Mode::Primary, SocialPlatform::Github, "https://a");
        let before = engine.draft().clone();

        engine.update_social_link(
            Mode::Primary,
            "social-gone",
            SocialLinkPatch {
                url: Some("https://b".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(engine.draft(), &before);
    }

    #[test]
    fn stale_link_delete_is_a_noop() {
        let mut engine = fresh_engine();
        engine.add_social_link(Mode::Primary, SocialPlatform::Github, "https://a");
        let before = engine.draft().clone();

        engine.delete_social_link(Mode::Primary, "social-gone");
        assert_eq!(engine.draft(), &before);
    }
}
