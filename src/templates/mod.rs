//! Built-in scaffolding for new portals
//!
//! The host page and a sample content document are embedded in the binary
//! and written out by `init`.

/// Default host page with every owned region and label
pub const HOST_PAGE: &str = include_str!("index.html");

/// Sample content document
pub const SAMPLE_CONTENT: &str = include_str!("site_content.json");

/// Default `_config.yml`
pub const CONFIG: &str = r#"# Portal Configuration

# Site
title: 3am Club
language: cn

# Files
content: site_content.json
template: index.html
public_dir: public
assets_dir: assets

# Rendering
twitter_base: https://twitter.com/
reveal:
  duration: 800
  once: true
  offset: 100
# Link the language toggle to the other generated page
link_pages: true

# Loading
strict_schema: false
# load_timeout_ms: 5000
"#;
