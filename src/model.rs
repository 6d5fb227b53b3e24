//! # Domain Model: The Profile Document
//!
//! This module defines the document the engine edits: a [`Profile`] carrying
//! two independent content trees ([`Mode::Primary`] and [`Mode::Secondary`]),
//! plus the mode-independent [`DisplaySettings`] and [`Theme`].
//!
//! ## Shape
//!
//! ```text
//! Profile
//! ├── displaySettings          (mode-independent)
//! ├── theme                    (mode-independent)
//! ├── primary: ModeContent
//! │   ├── personal             (singleton, never deleted)
//! │   ├── socialLinks[]        (ordered, gap-tolerant)
//! │   ├── sections[]           (ordered, contiguous 0..n-1)
//! │   │   └── contentBlocks[] | techStack[]   (ordered, contiguous)
//! │   ├── background
//! │   └── layoutType
//! └── secondary: ModeContent   (same shape, fully independent)
//! ```
//!
//! ## Sections Are a Tagged Union
//!
//! A section holds *either* content blocks *or* tech stack items, never both.
//! [`SectionBody`] encodes that as a sum type with a serialized `"type"` tag
//! (`"content"` / `"techStack"`), so an impossible section cannot be
//! constructed or deserialized with both child collections populated.
//!
//! ## Wire Format
//!
//! Everything serializes camelCase to a single JSON object; this is the same
//! shape the engine persists, exports, and imports. The only non-structural
//! field is the export envelope's version marker, which lives in
//! [`crate::engine::transfer`], not here.
//!
//! ## Invariants
//!
//! The model itself is passive; [`crate::engine`] enforces after every
//! mutation that ids are unique within their collection and that `order`
//! values in sections and their children form `0..n-1`. Social links are the
//! documented exception: their `order` records insertion rank and keeps gaps
//! after deletions.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentBlockKind {
    Title,
    Context,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Gradient,
    Star,
    Electric,
    Pixel,
    Blur,
    None,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self::Gradient
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    None,
    Particles,
    Grid,
    Gradient,
    Meteors,
}

impl Default for BackgroundKind {
    fn default() -> Self {
        Self::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutType {
    Default,
    LeftSide,
    RightSide,
}

impl Default for LayoutType {
    fn default() -> Self {
        Self::Default
    }
}

/// The closed set of platforms a social link may point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Linkedin,
    Github,
    Email,
    Website,
    Twitter,
    Facebook,
    Instagram,
    Youtube,
    Tiktok,
    Behance,
    Dribbble,
    Medium,
}

fn default_true() -> bool {
    true
}

/// Per-mode personal info. A singleton: always present, never deleted, only
/// merged into field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    /// Contact visibility flags default to visible when absent from stored data.
    #[serde(default = "default_true")]
    pub show_email: bool,
    #[serde(default = "default_true")]
    pub show_phone: bool,
    pub image: String,
    /// 3-D hover effect on the profile image.
    #[serde(default, rename = "enable3D")]
    pub enable_3d: bool,
    /// Animated border around the profile card.
    #[serde(default)]
    pub enable_gradient: bool,
    #[serde(default)]
    pub border_style: BorderStyle,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            email: String::new(),
            phone: String::new(),
            show_email: true,
            show_phone: true,
            image: String::new(),
            enable_3d: false,
            enable_gradient: false,
            border_style: BorderStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub id: String,
    pub platform: SocialPlatform,
    pub url: String,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContentBlockKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_link: Option<String>,
    pub order: u32,
    #[serde(default)]
    pub enable_glass_effect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStackItem {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub order: u32,
}

/// Discriminates the two section shapes without carrying their payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Content,
    TechStack,
}

/// The payload side of a section. The serialized `"type"` tag is the
/// discriminant; exactly one child collection exists by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SectionBody {
    #[serde(rename_all = "camelCase")]
    Content { content_blocks: Vec<ContentBlock> },
    #[serde(rename_all = "camelCase")]
    TechStack { tech_stack: Vec<TechStackItem> },
}

impl SectionBody {
    pub fn empty(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Content => Self::Content {
                content_blocks: Vec::new(),
            },
            SectionKind::TechStack => Self::TechStack {
                tech_stack: Vec::new(),
            },
        }
    }

    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Content { .. } => SectionKind::Content,
            Self::TechStack { .. } => SectionKind::TechStack,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSection {
    pub id: String,
    pub name: String,
    pub order: u32,
    #[serde(default)]
    pub enable_glass_effect: bool,
    #[serde(flatten)]
    pub body: SectionBody,
}

impl ProfileSection {
    pub fn kind(&self) -> SectionKind {
        self.body.kind()
    }

    pub fn content_blocks(&self) -> Option<&[ContentBlock]> {
        match &self.body {
            SectionBody::Content { content_blocks } => Some(content_blocks),
            SectionBody::TechStack { .. } => None,
        }
    }

    pub fn content_blocks_mut(&mut self) -> Option<&mut Vec<ContentBlock>> {
        match &mut self.body {
            SectionBody::Content { content_blocks } => Some(content_blocks),
            SectionBody::TechStack { .. } => None,
        }
    }

    pub fn tech_stack(&self) -> Option<&[TechStackItem]> {
        match &self.body {
            SectionBody::TechStack { tech_stack } => Some(tech_stack),
            SectionBody::Content { .. } => None,
        }
    }

    pub fn tech_stack_mut(&mut self) -> Option<&mut Vec<TechStackItem>> {
        match &mut self.body {
            SectionBody::TechStack { tech_stack } => Some(tech_stack),
            SectionBody::Content { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundConfig {
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    pub color: String,
    /// Animation speed, 0-100.
    pub speed: u8,
    /// Element density, 0-100.
    pub density: u8,
    pub interactive: bool,
    /// Renderer-specific extras, passed through untouched.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub custom_options: serde_json::Map<String, serde_json::Value>,
}

impl BackgroundConfig {
    pub fn none(color: &str) -> Self {
        Self {
            kind: BackgroundKind::None,
            color: color.to_string(),
            speed: 50,
            density: 50,
            interactive: false,
            custom_options: serde_json::Map::new(),
        }
    }
}

/// Which mode(s) are publicly visible and which is shown first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    pub show_primary: bool,
    pub show_secondary: bool,
    pub default_mode: Mode,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_primary: true,
            show_secondary: true,
            default_mode: Mode::Primary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub accent_color: String,
    pub text_color: String,
}

/// Everything one mode owns, independently of the other mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeContent {
    pub personal: PersonalInfo,
    pub social_links: Vec<SocialLink>,
    pub sections: Vec<ProfileSection>,
    pub background: BackgroundConfig,
    #[serde(rename = "layoutType", default)]
    pub layout: LayoutType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub display_settings: DisplaySettings,
    pub primary: ModeContent,
    pub secondary: ModeContent,
    pub theme: Theme,
}

impl Profile {
    pub fn content(&self, mode: Mode) -> &ModeContent {
        match mode {
            Mode::Primary => &self.primary,
            Mode::Secondary => &self.secondary,
        }
    }

    pub fn content_mut(&mut self, mode: Mode) -> &mut ModeContent {
        match mode {
            Mode::Primary => &mut self.primary,
            Mode::Secondary => &mut self.secondary,
        }
    }

    /// The built-in starting profile, used when the store has nothing to load.
    pub fn template() -> Self {
        TEMPLATE.clone()
    }
}

static TEMPLATE: Lazy<Profile> = Lazy::new(|| Profile {
    id: "default-profile".to_string(),
    display_settings: DisplaySettings::default(),
    primary: ModeContent {
        personal: PersonalInfo {
            name: "Your Name".to_string(),
            title: "Frontend Developer".to_string(),
            email: "you@example.com".to_string(),
            phone: "+00 000-000-0000".to_string(),
            enable_3d: true,
            ..PersonalInfo::default()
        },
        social_links: Vec::new(),
        sections: vec![
            ProfileSection {
                id: "primary-section-1".to_string(),
                name: "Tech Stack".to_string(),
                order: 0,
                enable_glass_effect: false,
                body: SectionBody::empty(SectionKind::TechStack),
            },
            ProfileSection {
                id: "primary-section-2".to_string(),
                name: "Past Projects".to_string(),
                order: 1,
                enable_glass_effect: false,
                body: SectionBody::Content {
                    content_blocks: vec![
                        ContentBlock {
                            id: "primary-block-1".to_string(),
                            kind: ContentBlockKind::Title,
                            content: "Project Title".to_string(),
                            duration: None,
                            image: None,
                            image_link: None,
                            order: 0,
                            enable_glass_effect: false,
                        },
                        ContentBlock {
                            id: "primary-block-2".to_string(),
                            kind: ContentBlockKind::Context,
                            content: "Brief description of your project".to_string(),
                            duration: Some("2024".to_string()),
                            image: None,
                            image_link: None,
                            order: 1,
                            enable_glass_effect: false,
                        },
                    ],
                },
            },
            ProfileSection {
                id: "primary-section-3".to_string(),
                name: "Education".to_string(),
                order: 2,
                enable_glass_effect: false,
                body: SectionBody::Content {
                    content_blocks: vec![
                        ContentBlock {
                            id: "primary-block-3".to_string(),
                            kind: ContentBlockKind::Title,
                            content: "School Name".to_string(),
                            duration: None,
                            image: None,
                            image_link: None,
                            order: 0,
                            enable_glass_effect: false,
                        },
                        ContentBlock {
                            id: "primary-block-4".to_string(),
                            kind: ContentBlockKind::Context,
                            content: "Degree / Course".to_string(),
                            duration: Some("2020 - 2024".to_string()),
                            image: None,
                            image_link: None,
                            order: 1,
                            enable_glass_effect: false,
                        },
                    ],
                },
            },
        ],
        background: BackgroundConfig::none("#ffffff"),
        layout: LayoutType::Default,
    },
    secondary: ModeContent {
        personal: PersonalInfo {
            name: "yourname.eth".to_string(),
            title: "Community Ambassador".to_string(),
            email: "persona@example.com".to_string(),
            ..PersonalInfo::default()
        },
        social_links: Vec::new(),
        sections: vec![
            ProfileSection {
                id: "secondary-section-1".to_string(),
                name: "Communities".to_string(),
                order: 0,
                enable_glass_effect: false,
                body: SectionBody::empty(SectionKind::TechStack),
            },
            ProfileSection {
                id: "secondary-section-2".to_string(),
                name: "Footprints".to_string(),
                order: 1,
                enable_glass_effect: false,
                body: SectionBody::Content {
                    content_blocks: vec![
                        ContentBlock {
                            id: "secondary-block-1".to_string(),
                            kind: ContentBlockKind::Title,
                            content: "Community Ambassador".to_string(),
                            duration: None,
                            image: None,
                            image_link: None,
                            order: 0,
                            enable_glass_effect: false,
                        },
                        ContentBlock {
                            id: "secondary-block-2".to_string(),
                            kind: ContentBlockKind::Context,
                            content: "Role description and contributions".to_string(),
                            duration: Some("2024".to_string()),
                            image: None,
                            image_link: None,
                            order: 1,
                            enable_glass_effect: false,
                        },
                    ],
                },
            },
        ],
        background: BackgroundConfig::none("#000000"),
        layout: LayoutType::Default,
    },
    theme: Theme {
        accent_color: "#3b82f6".to_string(),
        text_color: "#000000".to_string(),
    },
});
