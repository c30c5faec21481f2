//! Portal configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::content::Language;

/// Main portal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    // Site
    pub title: String,
    /// Language shown at startup
    pub language: Language,

    // Files
    /// Content document, relative to the base directory
    pub content: String,
    /// Host page template
    pub template: String,
    pub public_dir: String,
    /// Copied verbatim into the public directory
    pub assets_dir: String,

    // Rendering
    /// Prefix for contact handle links
    pub twitter_base: String,
    #[serde(default)]
    pub reveal: RevealConfig,
    /// Point the language toggle at the other language's generated page
    pub link_pages: bool,

    // Loading
    /// Validate the content document before rendering
    pub strict_schema: bool,
    /// Give up loading the document after this many milliseconds
    pub load_timeout_ms: Option<u64>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            title: "Portal".to_string(),
            language: Language::Cn,

            content: "site_content.json".to_string(),
            template: "index.html".to_string(),
            public_dir: "public".to_string(),
            assets_dir: "assets".to_string(),

            twitter_base: "https://twitter.com/".to_string(),
            reveal: RevealConfig::default(),
            link_pages: true,

            strict_schema: false,
            load_timeout_ms: None,

            extra: HashMap::new(),
        }
    }
}

impl PortalConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: PortalConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_timeout(&self) -> Option<Duration> {
        self.load_timeout_ms.map(Duration::from_millis)
    }

    /// File name of the generated page for a language.
    ///
    /// The startup language owns `index.html`; the other one sits beside it
    /// as `index.<code>.html` so relative asset paths keep working.
    pub fn page_name(&self, language: Language) -> String {
        if language == self.language {
            "index.html".to_string()
        } else {
            format!("index.{}.html", language.code())
        }
    }
}

/// Scroll-reveal animation settings, handed to the effects script once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Animation duration in milliseconds
    pub duration: u32,
    /// Animate each element only the first time it scrolls into view
    pub once: bool,
    /// Trigger offset in pixels
    pub offset: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration: 800,
            once: true,
            offset: 100,
        }
    }
}

impl RevealConfig {
    /// Inline script starting the effects library with these settings
    pub fn init_script(&self) -> String {
        format!(
            "<script>if (window.AOS) {{ AOS.init({{duration: {}, once: {}, offset: {}}}); }}</script>\n",
            self.duration, self.once, self.offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default();
        assert_eq!(config.language, Language::Cn);
        assert_eq!(config.content, "site_content.json");
        assert_eq!(config.reveal, RevealConfig::default());
        assert_eq!(config.load_timeout(), None);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: 3am Club
language: en
strict_schema: true
load_timeout_ms: 2500
reveal:
  duration: 600
"#;
        let config: PortalConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "3am Club");
        assert_eq!(config.language, Language::En);
        assert!(config.strict_schema);
        assert_eq!(config.load_timeout(), Some(Duration::from_millis(2500)));
        assert_eq!(config.reveal.duration, 600);
        assert!(config.reveal.once);
        assert_eq!(config.reveal.offset, 100);
    }

    #[test]
    fn test_page_names_follow_startup_language() {
        let mut config = PortalConfig::default();
        assert!(config.link_pages);
        assert_eq!(config.page_name(Language::Cn), "index.html");
        assert_eq!(config.page_name(Language::En), "index.en.html");

        config.language = Language::En;
        assert_eq!(config.page_name(Language::En), "index.html");
        assert_eq!(config.page_name(Language::Cn), "index.cn.html");
    }

    #[test]
    fn test_init_script() {
        let script = RevealConfig::default().init_script();
        assert!(script.contains("AOS.init({duration: 800, once: true, offset: 100})"));
    }
}
