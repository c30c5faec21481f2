//! Generator module - writes the rendered host page for each language

use anyhow::{bail, Result};
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::content::Language;
use crate::dom::HostPage;
use crate::session::{Session, StartupState};
use crate::Portal;

/// Static page generator
pub struct Generator {
    portal: Portal,
}

impl Generator {
    /// Create a new generator
    pub fn new(portal: &Portal) -> Self {
        Self {
            portal: portal.clone(),
        }
    }

    /// Output file for a language; the startup language owns `index.html`
    pub fn output_path(&self, lang: Language) -> PathBuf {
        self.portal.public_dir.join(self.portal.config.page_name(lang))
    }

    /// Generate the page in both languages and copy the assets.
    ///
    /// One session renders the startup language, then toggles once and
    /// renders the other, without reading the document again.
    pub async fn generate(&self) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.portal.public_dir)?;
        self.copy_assets()?;

        let mut session = self.start().await?;
        if let StartupState::Failed(e) = session.state() {
            let path = self.output_path(self.portal.config.language);
            fs::write(&path, session.dom().to_html())?;
            bail!("Wrote error page to {:?}: {}", path, e);
        }

        let mut written = Vec::with_capacity(Language::ALL.len());
        for _ in Language::ALL {
            let lang = session.language()?;
            let path = self.output_path(lang);
            fs::write(&path, session.dom().to_html())?;
            tracing::info!("Generated: {:?}", path);
            written.push(path);
            session.toggle()?;
        }

        Ok(written)
    }

    /// Render the page in one language, without writing anything
    pub async fn render_page(&self, lang: Language) -> Result<String> {
        let mut session = self.start().await?;
        if session.store().is_some() && session.language()? != lang {
            session.set_language(lang)?;
        }
        Ok(session.dom().to_html())
    }

    async fn start(&self) -> Result<Session<HostPage>> {
        let page = HostPage::load(&self.portal.template_path).map_err(|e| {
            anyhow::anyhow!(
                "Failed to read host page {:?}: {}",
                self.portal.template_path,
                e
            )
        })?;
        let session =
            Session::start(&self.portal.config, &self.portal.content_source(), page).await?;
        Ok(session)
    }

    /// Copy the assets directory into the public directory
    fn copy_assets(&self) -> Result<usize> {
        let assets_dir = &self.portal.assets_dir;
        if !assets_dir.exists() {
            return Ok(0);
        }

        let target = match assets_dir.file_name() {
            Some(name) => self.portal.public_dir.join(name),
            None => self.portal.public_dir.clone(),
        };

        let mut copied = 0;
        for entry in WalkDir::new(assets_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(assets_dir)?;
            let dest = target.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            copied += 1;
        }

        tracing::debug!("Copied {} asset files", copied);
        Ok(copied)
    }
}
