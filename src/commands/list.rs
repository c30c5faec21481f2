//! List portal content

use anyhow::{bail, Result};

use crate::content::{ContentDocument, ContentStore, Language};
use crate::render::sections::CASE_IMAGE_LIMIT;
use crate::Portal;

/// List one section of the content document, resolved in `lang`
pub async fn run(portal: &Portal, section: &str, lang: Language) -> Result<()> {
    let store = ContentStore::load(&portal.content_source(), lang).await?;
    for line in lines(store.document(), section, lang)? {
        println!("{}", line);
    }
    Ok(())
}

/// Text lines describing a section
pub fn lines(doc: &ContentDocument, section: &str, lang: Language) -> Result<Vec<String>> {
    let mut out = Vec::new();

    match section {
        "service" | "services" => {
            out.push(format!("Services ({}):", doc.services.len()));
            for service in &doc.services {
                out.push(format!(
                    "  {} - {}",
                    service.title.resolve(lang),
                    service.desc.resolve(lang)
                ));
            }
        }
        "team" => {
            out.push(format!("Team ({}):", doc.team.len()));
            for member in &doc.team {
                let followers = member
                    .followers()
                    .map(|f| format!(" ({} Fans)", f))
                    .unwrap_or_default();
                out.push(format!("  {}{} [{}]", member.name, followers, member.twitter));
            }
        }
        "case" | "cases" => {
            out.push(format!("Cases ({}):", doc.cases.len()));
            for case in &doc.cases {
                let shown = case.images.len().min(CASE_IMAGE_LIMIT);
                out.push(format!(
                    "  {} - {}/{} images",
                    case.title.resolve(lang),
                    shown,
                    case.images.len()
                ));
            }
        }
        "stat" | "stats" => {
            out.push(format!("Stats ({}):", doc.about.stats.len()));
            for stat in &doc.about.stats {
                out.push(format!("  {} {}", stat.value, stat.label.resolve(lang)));
            }
        }
        "link" | "links" => {
            out.push(format!("Links ({}):", doc.about.links.len()));
            for (key, url) in &doc.about.links {
                out.push(format!("  {} -> {}", key.to_uppercase(), url));
            }
        }
        "gallery" => {
            let gallery = doc.gallery.as_deref().unwrap_or_default();
            out.push(format!("Gallery ({}):", gallery.len()));
            for image in gallery {
                out.push(format!("  {}", image));
            }
        }
        other => bail!(
            "Unknown section type: {} (expected services, team, cases, stats, links or gallery)",
            other
        ),
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::SAMPLE_CONTENT;

    fn doc() -> ContentDocument {
        ContentDocument::from_json(SAMPLE_CONTENT).unwrap()
    }

    #[test]
    fn test_list_services_in_english() {
        let lines = lines(&doc(), "services", Language::En).unwrap();
        assert_eq!(lines[0], "Services (3):");
        assert!(lines[1].starts_with("  Project Promotion - "));
    }

    #[test]
    fn test_list_links_in_order() {
        let lines = lines(&doc(), "links", Language::Cn).unwrap();
        assert_eq!(lines[1], "  WEBSITE -> https://my3am.xyz");
        assert_eq!(lines[4], "  TELEGRAM -> https://t.me/my3amclub");
    }

    #[test]
    fn test_unknown_section() {
        assert!(lines(&doc(), "posts", Language::Cn).is_err());
    }
}
