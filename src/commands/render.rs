//! Render the page in one language

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::Language;
use crate::generator::Generator;
use crate::Portal;

/// Render the page in `lang`, to `output` or stdout
pub async fn run(portal: &Portal, lang: Language, output: Option<&Path>) -> Result<()> {
    let html = Generator::new(portal).render_page(lang).await?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, html)?;
            tracing::info!("Rendered {} page to {:?}", lang, path);
        }
        None => print!("{}", html),
    }

    Ok(())
}
