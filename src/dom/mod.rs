//! The page the renderers write into
//!
//! A [`Dom`] exposes a fixed set of owned regions (by element id) and any
//! number of static label elements (by `data-i18n` key). Renderers produce
//! [`Patch`]es; the `Dom` applies them.

mod element;
mod host;

pub use element::{Element, Fragment, Node};
pub use host::HostPage;

use thiserror::Error;

use crate::config::RevealConfig;
use crate::content::Language;

/// Errors raised while applying patches
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("Host page has no element with id \"{0}\"")]
    MissingRegion(&'static str),
}

/// A container element the renderer owns and fully rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    HeroTitle,
    HeroSubtitle,
    HeroBackground,
    AboutIntro,
    StatsGrid,
    AboutLinks,
    ServicesGrid,
    TeamGrid,
    CasesContainer,
    GalleryGrid,
    ContactText,
    ContactInfo,
    LangToggle,
}

impl Region {
    pub const ALL: [Region; 13] = [
        Region::HeroTitle,
        Region::HeroSubtitle,
        Region::HeroBackground,
        Region::AboutIntro,
        Region::StatsGrid,
        Region::AboutLinks,
        Region::ServicesGrid,
        Region::TeamGrid,
        Region::CasesContainer,
        Region::GalleryGrid,
        Region::ContactText,
        Region::ContactInfo,
        Region::LangToggle,
    ];

    /// The element id in the host page
    pub fn id(self) -> &'static str {
        match self {
            Region::HeroTitle => "hero-title",
            Region::HeroSubtitle => "hero-subtitle",
            Region::HeroBackground => "hero-bg",
            Region::AboutIntro => "about-intro",
            Region::StatsGrid => "stats-grid",
            Region::AboutLinks => "about-links",
            Region::ServicesGrid => "services-grid",
            Region::TeamGrid => "team-grid",
            Region::CasesContainer => "cases-container",
            Region::GalleryGrid => "gallery-grid",
            Region::ContactText => "contact-text",
            Region::ContactInfo => "contact-info",
            Region::LangToggle => "lang-toggle",
        }
    }

    pub fn from_id(id: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.id() == id)
    }

    /// Regions a host page may leave out; patches to them are dropped
    pub fn is_optional(self) -> bool {
        matches!(self, Region::HeroBackground)
    }
}

/// What a patch writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Region(Region),
    /// Every element tagged `data-i18n="<key>"`
    Label(&'static str),
}

/// New inner content for a target
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Plain text, escaped on write
    Text(String),
    Html(Fragment),
}

impl Content {
    pub fn to_html(&self) -> String {
        match self {
            Content::Text(text) => crate::helpers::html_escape(text),
            Content::Html(fragment) => fragment.render(),
        }
    }
}

/// Replace the inner content of one target
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    pub target: Target,
    pub content: Content,
}

impl Patch {
    pub fn text(region: Region, text: impl Into<String>) -> Self {
        Self {
            target: Target::Region(region),
            content: Content::Text(text.into()),
        }
    }

    pub fn html(region: Region, fragment: Fragment) -> Self {
        Self {
            target: Target::Region(region),
            content: Content::Html(fragment),
        }
    }

    pub fn label(key: &'static str, text: impl Into<String>) -> Self {
        Self {
            target: Target::Label(key),
            content: Content::Text(text.into()),
        }
    }
}

/// A page that can receive rendered content
pub trait Dom {
    /// Whether the page declares a region
    fn has_region(&self, region: Region) -> bool;

    /// Replace the inner content of a target
    fn apply(&mut self, patch: &Patch) -> Result<(), DomError>;

    /// Mark the whole document as being in `language`
    fn set_document_language(&mut self, language: Language);

    /// Start the scroll-reveal effects; called once at startup
    fn init_reveal(&mut self, reveal: &RevealConfig);

    /// Throw away the whole visible page and show `fragment` instead
    fn replace_body(&mut self, fragment: &Fragment);
}
