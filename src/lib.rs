//! portal-rs: a bilingual single-page portal renderer
//!
//! The whole page is driven by one content document. Every section is
//! rendered from that document into the owned regions of a host HTML page,
//! and re-rendered in place when the display language is toggled.

pub mod commands;
pub mod config;
pub mod content;
pub mod dom;
pub mod generator;
pub mod helpers;
pub mod i18n;
pub mod render;
pub mod server;
pub mod session;
pub mod templates;

use anyhow::Result;
use std::path::Path;

pub use content::{ContentDocument, Language, LocalizedText};
pub use session::Session;

/// The main portal application
#[derive(Clone)]
pub struct Portal {
    /// Portal configuration
    pub config: config::PortalConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content document path
    pub content_path: std::path::PathBuf,
    /// Host page template path
    pub template_path: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
    /// Static assets directory
    pub assets_dir: std::path::PathBuf,
}

impl Portal {
    /// Create a new portal instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::PortalConfig::load(&config_path)?
        } else {
            config::PortalConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a portal from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::PortalConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        Self {
            content_path: base_dir.join(&config.content),
            template_path: base_dir.join(&config.template),
            public_dir: base_dir.join(&config.public_dir),
            assets_dir: base_dir.join(&config.assets_dir),
            base_dir,
            config,
        }
    }

    /// Where the content document is read from
    pub fn content_source(&self) -> content::ContentSource {
        content::ContentSource::new(&self.content_path)
            .strict(self.config.strict_schema)
            .timeout(self.config.load_timeout())
    }

    /// Generate the static pages
    pub async fn generate(&self) -> Result<()> {
        commands::generate::run(self).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
