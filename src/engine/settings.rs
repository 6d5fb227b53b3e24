//! Display settings, theme, background, and layout mutations. All direct
//! partial merges, mode-independent or mode-scoped as named.

use super::{BackgroundPatch, DisplaySettingsPatch, ProfileEngine, ThemePatch};
use crate::model::{LayoutType, Mode};
use crate::store::ProfileStore;

impl<S: ProfileStore> ProfileEngine<S> {
    /// Merge `patch` into the mode-independent display settings.
    pub fn update_display_settings(&mut self, patch: DisplaySettingsPatch) {
        let settings = &mut self.draft_mut().display_settings;
        if let Some(show_primary) = patch.show_primary {
            settings.show_primary = show_primary;
        }
        if let Some(show_secondary) = patch.show_secondary {
            settings.show_secondary = show_secondary;
        }
        if let Some(default_mode) = patch.default_mode {
            settings.default_mode = default_mode;
        }
    }

    /// Merge `patch` into the mode-independent theme.
    pub fn update_theme(&mut self, patch: ThemePatch) {
        let theme = &mut self.draft_mut().theme;
        if let Some(accent_color) = patch.accent_color {
            theme.accent_color = accent_color;
        }
        if let Some(text_color) = patch.text_color {
            theme.text_color = text_color;
        }
    }

    /// Merge `patch` into the mode's background configuration.
    pub fn update_background(&mut self, mode: Mode, patch: BackgroundPatch) {
        let background = &mut self.draft_mut().content_mut(mode).background;
        if let Some(kind) = patch.kind {
            background.kind = kind;
        }
        if let Some(color) = patch.color {
            background.color = color;
        }
        if let Some(speed) = patch.speed {
            background.speed = speed;
        }
        if let Some(density) = patch.density {
            background.density = density;
        }
        if let Some(interactive) = patch.interactive {
            background.interactive = interactive;
        }
        if let Some(custom_options) = patch.custom_options {
            background.custom_options = custom_options;
        }
    }

    /// Set the mode's layout.
    pub fn update_layout(&mut self, mode: Mode, layout: LayoutType) {
        self.draft_mut().content_mut(mode).layout = layout;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BackgroundKind;
    use crate::store::memory::InMemoryStore;

    fn fresh_engine() -> ProfileEngine<InMemoryStore> {
        ProfileEngine::new(InMemoryStore::new())
    }

    #[test]
    fn display_settings_merge_partially() {
        let mut engine = fresh_engine();
        engine.update_display_settings(DisplaySettingsPatch {
            show_secondary: Some(false),
            ..Default::default()
        });
        let settings = &engine.draft().display_settings;
        assert!(settings.show_primary);
        assert!(!settings.show_secondary);
        assert_eq!(settings.default_mode, Mode::Primary);
    }

    #[test]
    fn default_mode_can_flip() {
        let mut engine = fresh_engine();
        engine.update_display_settings(DisplaySettingsPatch {
            default_mode: Some(Mode::Secondary),
            ..Default::default()
        });
        assert_eq!(engine.draft().display_settings.default_mode, Mode::Secondary);
    }

    #[test]
    fn theme_merges_partially() {
        let mut engine = fresh_engine();
        let text_before = engine.draft().theme.text_color.clone();
        engine.update_theme(ThemePatch {
            accent_color: Some("#ff0000".to_string()),
            ..Default::default()
        });
        assert_eq!(engine.draft().theme.accent_color, "#ff0000");
        assert_eq!(engine.draft().theme.text_color, text_before);
    }

    #[test]
    fn background_is_mode_scoped() {
        let mut engine = fresh_engine();
        let secondary_before = engine.draft().secondary.background.clone();

        engine.update_background(
            Mode::Primary,
            BackgroundPatch {
                kind: Some(BackgroundKind::Particles),
                speed: Some(80),
                ..Default::default()
            },
        );

        let primary = &engine.draft().primary.background;
        assert_eq!(primary.kind, BackgroundKind::Particles);
        assert_eq!(primary.speed, 80);
        // Unpatched fields kept.
        assert!(!primary.interactive);
        assert_eq!(engine.draft().secondary.background, secondary_before);
    }

    #[test]
    fn layout_updates_one_mode() {
        let mut engine = fresh_engine();
        engine.update_layout(Mode::Secondary, LayoutType::RightSide);
        assert_eq!(engine.draft().secondary.layout, LayoutType::RightSide);
        assert_eq!(engine.draft().primary.layout, LayoutType::Default);
    }
}
