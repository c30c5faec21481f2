//! Page session: startup sequencing and the language toggle
//!
//! ```text
//! Loading --load ok--> Ready(cn) <--toggle--> Ready(en)
//!    \
//!     `--load error / timeout--> Failed
//! ```

use thiserror::Error;

use crate::config::PortalConfig;
use crate::content::{ContentSource, ContentStore, Language, LoadError};
use crate::dom::{Dom, DomError, Element, Fragment};
use crate::render::{self, RenderRequest};

/// Message shown in place of the page when the content cannot be loaded
pub const LOAD_ERROR_MESSAGE: &str = "Loading Error. Please check console.";

/// Errors from session operations
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Content is not loaded (session is {0})")]
    NotReady(&'static str),

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Where startup got to
#[derive(Debug)]
pub enum StartupState {
    Loading,
    Ready(ContentStore),
    Failed(LoadError),
}

impl StartupState {
    pub fn name(&self) -> &'static str {
        match self {
            StartupState::Loading => "loading",
            StartupState::Ready(_) => "ready",
            StartupState::Failed(_) => "failed",
        }
    }
}

/// One page view: owns the page and, once loaded, the content store
pub struct Session<D: Dom> {
    dom: D,
    state: StartupState,
    twitter_base: String,
    /// Generated page of each language, for the toggle link
    page_links: Vec<(Language, String)>,
}

impl<D: Dom> Session<D> {
    /// A session that has not loaded anything yet
    pub fn new(config: &PortalConfig, dom: D) -> Self {
        Self {
            dom,
            state: StartupState::Loading,
            twitter_base: config.twitter_base.clone(),
            page_links: if config.link_pages {
                Language::ALL
                    .iter()
                    .map(|&lang| (lang, config.page_name(lang)))
                    .collect()
            } else {
                Vec::new()
            },
        }
    }

    /// Start effects, load the document and render every section once.
    ///
    /// A load failure is not an `Err`: the page body is replaced by an error
    /// message and the session ends in [`StartupState::Failed`].
    pub async fn start(
        config: &PortalConfig,
        source: &ContentSource,
        mut dom: D,
    ) -> Result<Self, SessionError> {
        dom.init_reveal(&config.reveal);
        let mut session = Self::new(config, dom);

        match ContentStore::load(source, config.language).await {
            Ok(store) => session.ready(store)?,
            Err(e) => session.fail(e),
        }

        Ok(session)
    }

    /// Render a loaded store and enter `Ready`
    ///
    /// If the page cannot take the render, nothing is written and the
    /// session stays where it was.
    pub fn ready(&mut self, store: ContentStore) -> Result<(), SessionError> {
        render_store(&store, &self.twitter_base, &self.page_links, &mut self.dom)?;
        self.state = StartupState::Ready(store);
        Ok(())
    }

    /// Enter `Failed`: log and replace the whole page with one message
    pub fn fail(&mut self, error: LoadError) {
        tracing::error!("Failed to load site content: {}", error);
        let message: Fragment = Element::new("h1")
            .class("load-error")
            .attr("style", "text-align:center; margin-top:20vh")
            .text(LOAD_ERROR_MESSAGE)
            .into();
        self.dom.replace_body(&message);
        self.state = StartupState::Failed(error);
    }

    /// Switch to the other language and re-render from the same document
    pub fn toggle(&mut self) -> Result<Language, SessionError> {
        let next = self.language()?.other();
        self.set_language(next)?;
        Ok(next)
    }

    /// Jump to a language and re-render
    pub fn set_language(&mut self, language: Language) -> Result<(), SessionError> {
        let store = match &mut self.state {
            StartupState::Ready(store) => store,
            other => return Err(SessionError::NotReady(other.name())),
        };

        let previous = store.language();
        store.set_language(language);
        if let Err(e) = render_store(store, &self.twitter_base, &self.page_links, &mut self.dom) {
            store.set_language(previous);
            return Err(e.into());
        }
        tracing::info!("Switched language to {}", language);
        Ok(())
    }

    /// Re-run every section renderer against the current store
    pub fn render(&mut self) -> Result<(), SessionError> {
        let StartupState::Ready(store) = &self.state else {
            return Err(SessionError::NotReady(self.state.name()));
        };
        render_store(store, &self.twitter_base, &self.page_links, &mut self.dom)?;
        Ok(())
    }

    pub fn language(&self) -> Result<Language, SessionError> {
        match &self.state {
            StartupState::Ready(store) => Ok(store.language()),
            other => Err(SessionError::NotReady(other.name())),
        }
    }

    pub fn state(&self) -> &StartupState {
        &self.state
    }

    pub fn store(&self) -> Option<&ContentStore> {
        match &self.state {
            StartupState::Ready(store) => Some(store),
            _ => None,
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn into_dom(self) -> D {
        self.dom
    }
}

fn render_store<D: Dom>(
    store: &ContentStore,
    twitter_base: &str,
    page_links: &[(Language, String)],
    dom: &mut D,
) -> Result<(), DomError> {
    let language = store.language();
    let toggle_href = page_links
        .iter()
        .find(|(lang, _)| *lang == language.other())
        .map(|(_, page)| page.as_str());
    let req = RenderRequest::new(store.document(), language)
        .with_twitter_base(twitter_base)
        .with_toggle_href(toggle_href);
    render::render_all(&req, dom)
}
