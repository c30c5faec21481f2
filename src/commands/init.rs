//! Initialize a new portal

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::templates;

/// Initialize a new portal in the given directory
///
/// Existing files are left alone so re-running never clobbers content.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("assets/images"))?;

    let files = [
        ("_config.yml", templates::CONFIG),
        ("index.html", templates::HOST_PAGE),
        ("site_content.json", templates::SAMPLE_CONTENT),
    ];

    for (name, content) in files {
        let path = target_dir.join(name);
        if path.exists() {
            tracing::warn!("Skipping existing file {:?}", path);
            continue;
        }
        fs::write(&path, content)?;
        tracing::debug!("Created {:?}", path);
    }

    Ok(())
}
