//! Content-to-page rendering
//!
//! A [`RenderRequest`] carries everything a render pass depends on. The
//! section renderers turn it into patches and [`render_all`] applies them to
//! a [`Dom`] in a fixed order.

pub mod sections;

use crate::content::{ContentDocument, Language, LocalizedText};
use crate::dom::{Dom, DomError, Patch, Target};

/// Default prefix for contact handle links
pub const DEFAULT_TWITTER_BASE: &str = "https://twitter.com/";

/// The immutable input of one render pass
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub document: &'a ContentDocument,
    pub language: Language,
    pub twitter_base: &'a str,
    /// Page the toggle control links to, if the other language has one
    pub toggle_href: Option<&'a str>,
}

impl<'a> RenderRequest<'a> {
    pub fn new(document: &'a ContentDocument, language: Language) -> Self {
        Self {
            document,
            language,
            twitter_base: DEFAULT_TWITTER_BASE,
            toggle_href: None,
        }
    }

    pub fn with_twitter_base(mut self, base: &'a str) -> Self {
        self.twitter_base = base;
        self
    }

    pub fn with_toggle_href(mut self, href: Option<&'a str>) -> Self {
        self.toggle_href = href;
        self
    }

    /// Resolve a localized value in the request language
    pub fn t<'b>(&self, value: &'b LocalizedText) -> &'b str {
        value.resolve(self.language)
    }
}

type SectionRenderer = fn(&RenderRequest) -> Vec<Patch>;

/// Every renderer, in the order a pass runs them
const SECTIONS: &[(&str, SectionRenderer)] = &[
    ("labels", sections::labels),
    ("hero", sections::hero),
    ("about", sections::about),
    ("services", sections::services),
    ("team", sections::team),
    ("cases", sections::cases),
    ("gallery", sections::gallery),
    ("contact", sections::contact),
    ("toggle", sections::toggle),
];

/// All patches of a full render pass
pub fn render_patches(req: &RenderRequest) -> Vec<Patch> {
    SECTIONS
        .iter()
        .flat_map(|(_, render)| render(req))
        .collect()
}

/// Run every section renderer and write the result into `dom`
///
/// Patches to optional regions the page lacks are dropped. Any other missing
/// region fails the pass before `dom` is touched.
pub fn render_all<D: Dom + ?Sized>(req: &RenderRequest, dom: &mut D) -> Result<(), DomError> {
    let mut patches = Vec::new();
    for (name, render) in SECTIONS {
        let section = render(req);
        tracing::trace!("Section {} produced {} patches", name, section.len());
        patches.extend(section);
    }

    patches.retain(|patch| match patch.target {
        Target::Region(region) => !region.is_optional() || dom.has_region(region),
        Target::Label(_) => true,
    });
    let missing = patches.iter().find_map(|patch| match patch.target {
        Target::Region(region) if !dom.has_region(region) => Some(region),
        _ => None,
    });
    if let Some(region) = missing {
        return Err(DomError::MissingRegion(region.id()));
    }

    dom.set_document_language(req.language);
    for patch in &patches {
        dom.apply(patch)?;
    }
    tracing::debug!("Rendered {} patches in {}", patches.len(), req.language);
    Ok(())
}
