//! Section renderers
//!
//! Each function projects one slice of the document, resolved to the request
//! language, into patches for the regions it owns. They are pure: the same
//! request always yields the same patches.

use super::RenderRequest;
use crate::content::{CaseStudy, Service, Stat, TeamMember};
use crate::dom::{Element, Fragment, Patch, Region};
use crate::helpers::{background_image, handle_url, is_external, mailto};
use crate::i18n;

/// Images shown per case study
pub const CASE_IMAGE_LIMIT: usize = 4;

const LINK_STYLE: &str = "color:var(--secondary)";

/// `data-i18n` labels from the built-in phrase table
pub fn labels(req: &RenderRequest) -> Vec<Patch> {
    i18n::keys()
        .filter_map(|key| i18n::phrase(key, req.language).map(|text| Patch::label(key, text)))
        .collect()
}

pub fn hero(req: &RenderRequest) -> Vec<Patch> {
    let hero = &req.document.hero;
    let mut patches = vec![
        Patch::text(Region::HeroTitle, hero.title.as_str()),
        Patch::text(Region::HeroSubtitle, req.t(&hero.subtitle)),
    ];

    if let Some(bg) = hero.bg_image.as_deref().filter(|s| !s.is_empty()) {
        patches.push(Patch::html(
            Region::HeroBackground,
            Element::new("div")
                .class("hero-bg-image")
                .attr("style", background_image(bg))
                .into(),
        ));
    }

    patches
}

pub fn about(req: &RenderRequest) -> Vec<Patch> {
    let about = &req.document.about;

    let stats: Fragment = about.stats.iter().map(|stat| stat_card(req, stat)).collect();

    let links: Fragment = about
        .links
        .iter()
        .map(|(key, url)| {
            external_link(url)
                .class("social-icon")
                .text(key.to_uppercase())
        })
        .collect();

    vec![
        Patch::text(Region::AboutIntro, req.t(&about.intro)),
        Patch::html(Region::StatsGrid, stats),
        Patch::html(Region::AboutLinks, links),
    ]
}

fn stat_card(req: &RenderRequest, stat: &Stat) -> Element {
    Element::new("div")
        .class("stat-card")
        .child(Element::new("span").class("stat-value").text(stat.value.as_str()))
        .child(Element::new("span").class("stat-label").text(req.t(&stat.label)))
}

pub fn services(req: &RenderRequest) -> Vec<Patch> {
    let cards: Fragment = req
        .document
        .services
        .iter()
        .map(|service| service_card(req, service))
        .collect();
    vec![Patch::html(Region::ServicesGrid, cards)]
}

fn service_card(req: &RenderRequest, service: &Service) -> Element {
    Element::new("div")
        .class("service-card")
        .child(Element::new("h3").text(req.t(&service.title)))
        .child(Element::new("p").text(req.t(&service.desc)))
}

pub fn team(req: &RenderRequest) -> Vec<Patch> {
    let cards: Fragment = req
        .document
        .team
        .iter()
        .map(|member| team_card(req, member))
        .collect();
    vec![Patch::html(Region::TeamGrid, cards)]
}

fn team_card(req: &RenderRequest, member: &TeamMember) -> Element {
    let avatar = member.image().map(|src| {
        Element::new("img")
            .attr("src", src)
            .class("team-img")
            .attr("alt", member.name.as_str())
    });

    let link = external_link(&member.twitter)
        .class("team-link")
        .child_opt(avatar)
        .child(
            Element::new("div")
                .class("team-overlay")
                .child(Element::new("span").class("twitter-icon").text("𝕏")),
        );

    let header = Element::new("div")
        .class("team-header")
        .child(Element::new("h3").text(member.name.as_str()))
        .child_opt(
            member
                .role()
                .map(|role| Element::new("span").class("team-role").text(role)),
        )
        .child_opt(member.followers().map(|count| {
            Element::new("span")
                .class("team-followers")
                .text(format!("{} Fans", count))
        }));

    Element::new("div")
        .class("team-card")
        .child(Element::new("div").class("team-img-wrapper").child(link))
        .child(
            Element::new("div")
                .class("team-info")
                .child(header)
                .child(Element::new("p").class("text-muted").text(req.t(&member.desc))),
        )
}

pub fn cases(req: &RenderRequest) -> Vec<Patch> {
    let cards: Fragment = req
        .document
        .cases
        .iter()
        .map(|case| case_card(req, case))
        .collect();
    vec![Patch::html(Region::CasesContainer, cards)]
}

fn case_card(req: &RenderRequest, case: &CaseStudy) -> Element {
    let images = case.images.iter().take(CASE_IMAGE_LIMIT).map(|src| {
        Element::new("img")
            .attr("src", src.as_str())
            .class("case-img")
            .attr("loading", "lazy")
    });

    Element::new("div")
        .class("case-card")
        .attr("data-aos", "fade-up")
        .child(
            Element::new("div")
                .class("case-content")
                .child(
                    Element::new("div")
                        .class("case-text")
                        .child(Element::new("h3").text(req.t(&case.title)))
                        .child(Element::new("p").text(req.t(&case.desc))),
                )
                .child(Element::new("div").class("case-gallery").children(images)),
        )
}

/// Leaves the region alone when there is nothing to show
pub fn gallery(req: &RenderRequest) -> Vec<Patch> {
    let Some(images) = req.document.gallery.as_ref().filter(|g| !g.is_empty()) else {
        return Vec::new();
    };

    let items: Fragment = images
        .iter()
        .map(|src| {
            Element::new("img")
                .attr("src", src.as_str())
                .class("gallery-item")
                .attr("loading", "lazy")
        })
        .collect();
    vec![Patch::html(Region::GalleryGrid, items)]
}

pub fn contact(req: &RenderRequest) -> Vec<Patch> {
    let contact = &req.document.contact;

    let mut info = Fragment::new();
    info.push(contact_item(
        "Email:",
        Element::new("a")
            .attr("href", mailto(&contact.email))
            .attr("style", LINK_STYLE)
            .text(contact.email.as_str()),
    ));
    info.push(contact_item(
        "Twitter:",
        handle_link(req.twitter_base, &contact.twitter),
    ));
    if let Some(bd) = contact.bd.as_deref().filter(|s| !s.is_empty()) {
        info.push(contact_item("BD:", handle_link(req.twitter_base, bd)));
    }

    vec![
        Patch::text(Region::ContactText, req.t(&contact.text)),
        Patch::html(Region::ContactInfo, info),
    ]
}

fn contact_item(label: &str, link: Element) -> Element {
    Element::new("div")
        .class("contact-item")
        .child(Element::new("strong").text(label))
        .text(" ")
        .child(link)
}

/// Link shows the handle as written; the target drops a leading `@`
fn handle_link(base: &str, handle: &str) -> Element {
    Element::new("a")
        .attr("href", handle_url(base, handle))
        .attr("target", "_blank")
        .attr("rel", "noopener")
        .attr("style", LINK_STYLE)
        .text(handle)
}

fn external_link(url: &str) -> Element {
    let link = Element::new("a").attr("href", url).attr("target", "_blank");
    if is_external(url) {
        link.attr("rel", "noopener")
    } else {
        link
    }
}

/// The toggle control offers the other language first, linking to its page
/// when one exists
pub fn toggle(req: &RenderRequest) -> Vec<Patch> {
    let label = req.language.toggle_label();
    let patch = match req.toggle_href {
        Some(href) => Patch::html(
            Region::LangToggle,
            Element::new("a")
                .attr("href", href)
                .attr("hreflang", req.language.other().html_lang())
                .text(label)
                .into(),
        ),
        None => Patch::text(Region::LangToggle, label),
    };
    vec![patch]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentDocument, Language};
    use crate::dom::Content;

    fn document() -> ContentDocument {
        ContentDocument::from_json(
            r#"{
            "hero": {"title": "3am Club", "subtitle": {"cn": "加密社区", "en": "Crypto community"}},
            "about": {
                "intro": {"cn": "简介", "en": "Intro"},
                "stats": [
                    {"value": "37k+", "label": {"cn": "推特粉丝", "en": "Twitter Followers"}},
                    {"value": "100+", "label": {"cn": "KOL", "en": "KOLs"}}
                ],
                "links": {"website": "https://my3am.xyz", "telegram": "https://t.me/my3amclub"}
            },
            "services": [
                {"title": {"cn": "甲", "en": "A"}, "desc": "a"},
                {"title": {"cn": "乙", "en": "B"}, "desc": "b"},
                {"title": {"cn": "丙", "en": "C"}, "desc": "c"}
            ],
            "team": [
                {"name": "sanyi", "twitter": "https://x.com/sanyi_eth_", "image": "assets/sanyi.jpg",
                 "followers": "25.8K+", "role": "Web3 KOL", "desc": {"cn": "大使", "en": "Ambassador"}},
                {"name": "雪球", "twitter": "https://x.com/xueqiu88", "desc": {"cn": "研究者"}}
            ],
            "cases": [
                {"title": "Galaxy Brain", "desc": {"cn": "案例", "en": "Case"},
                 "images": ["1.jpg", "2.jpg", "3.jpg", "4.jpg", "5.jpg", "6.jpg"]}
            ],
            "gallery": [],
            "contact": {"text": {"cn": "联系", "en": "Reach us"}, "email": "my3amclub@gmail.com",
                        "twitter": "@My3amclub"}
        }"#,
        )
        .unwrap()
    }

    fn html(patches: &[Patch], region: Region) -> String {
        patches
            .iter()
            .find(|p| p.target == crate::dom::Target::Region(region))
            .map(|p| p.content.to_html())
            .unwrap()
    }

    #[test]
    fn test_hero_resolves_subtitle() {
        let doc = document();
        let req = RenderRequest::new(&doc, Language::En);
        let patches = hero(&req);
        assert_eq!(patches[0], Patch::text(Region::HeroTitle, "3am Club"));
        assert_eq!(
            patches[1],
            Patch::text(Region::HeroSubtitle, "Crypto community")
        );
        assert_eq!(patches.len(), 2);
    }

    #[test]
    fn test_hero_background_when_set() {
        let mut doc = document();
        doc.hero.bg_image = Some("assets/bg.jpg".to_string());
        let patches = hero(&RenderRequest::new(&doc, Language::Cn));
        assert_eq!(
            html(&patches, Region::HeroBackground),
            r#"<div class="hero-bg-image" style="background-image: url(&#39;assets/bg.jpg&#39;)"></div>"#
        );
    }

    #[test]
    fn test_about_stats_and_links() {
        let doc = document();
        let patches = about(&RenderRequest::new(&doc, Language::Cn));
        assert_eq!(
            html(&patches, Region::StatsGrid),
            concat!(
                r#"<div class="stat-card"><span class="stat-value">37k+</span><span class="stat-label">推特粉丝</span></div>"#,
                r#"<div class="stat-card"><span class="stat-value">100+</span><span class="stat-label">KOL</span></div>"#
            )
        );
        assert_eq!(
            html(&patches, Region::AboutLinks),
            concat!(
                r#"<a href="https://my3am.xyz" target="_blank" rel="noopener" class="social-icon">WEBSITE</a>"#,
                r#"<a href="https://t.me/my3amclub" target="_blank" rel="noopener" class="social-icon">TELEGRAM</a>"#
            )
        );
    }

    #[test]
    fn test_services_keep_order() {
        let doc = document();
        let out = html(
            &services(&RenderRequest::new(&doc, Language::En)),
            Region::ServicesGrid,
        );
        let a = out.find("<h3>A</h3>").unwrap();
        let b = out.find("<h3>B</h3>").unwrap();
        let c = out.find("<h3>C</h3>").unwrap();
        assert!(a < b && b < c);
        assert_eq!(out.matches("service-card").count(), 3);
    }

    #[test]
    fn test_team_optional_fields() {
        let doc = document();
        let out = html(
            &team(&RenderRequest::new(&doc, Language::En)),
            Region::TeamGrid,
        );
        assert_eq!(out.matches("team-card").count(), 2);
        assert_eq!(out.matches("team-followers").count(), 1);
        assert_eq!(out.matches("<img").count(), 1);
        assert!(out.contains(r#"<span class="team-followers">25.8K+ Fans</span>"#));
        assert!(out.contains(r#"<span class="team-role">Web3 KOL</span>"#));
        // no `en` desc for the second member
        assert!(out.contains(r#"<p class="text-muted">研究者</p>"#));
        assert!(!out.contains("undefined"));
    }

    #[test]
    fn test_cases_truncate_images() {
        let doc = document();
        let out = html(
            &cases(&RenderRequest::new(&doc, Language::Cn)),
            Region::CasesContainer,
        );
        assert_eq!(out.matches(r#"class="case-img""#).count(), 4);
        assert!(out.contains(r#"src="4.jpg""#));
        assert!(!out.contains(r#"src="5.jpg""#));
        assert!(out.find("1.jpg").unwrap() < out.find("4.jpg").unwrap());
        assert!(out.contains(r#"data-aos="fade-up""#));
    }

    #[test]
    fn test_empty_or_missing_gallery_yields_no_patch() {
        let mut doc = document();
        assert!(gallery(&RenderRequest::new(&doc, Language::Cn)).is_empty());
        doc.gallery = None;
        assert!(gallery(&RenderRequest::new(&doc, Language::Cn)).is_empty());
        doc.gallery = Some(vec!["a.png".to_string(), "b.png".to_string()]);
        let patches = gallery(&RenderRequest::new(&doc, Language::Cn));
        assert_eq!(
            html(&patches, Region::GalleryGrid),
            r#"<img src="a.png" class="gallery-item" loading="lazy"><img src="b.png" class="gallery-item" loading="lazy">"#
        );
    }

    #[test]
    fn test_contact_handle_link() {
        let doc = document();
        let patches = contact(&RenderRequest::new(&doc, Language::En));
        assert_eq!(patches[0], Patch::text(Region::ContactText, "Reach us"));
        let out = html(&patches, Region::ContactInfo);
        assert!(out.contains(r#"href="mailto:my3amclub@gmail.com""#));
        assert!(out.contains(r#"href="https://twitter.com/My3amclub""#));
        assert!(out.contains(">@My3amclub</a>"));
        assert_eq!(out.matches("contact-item").count(), 2);
    }

    #[test]
    fn test_content_strings_are_escaped() {
        let mut doc = document();
        doc.services[0].desc = "<img src=x onerror=alert(1)>".into();
        let out = html(
            &services(&RenderRequest::new(&doc, Language::Cn)),
            Region::ServicesGrid,
        );
        assert!(out.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!out.contains("<img"));
    }

    #[test]
    fn test_labels_cover_phrase_table() {
        let doc = document();
        let patches = labels(&RenderRequest::new(&doc, Language::En));
        assert_eq!(patches.len(), i18n::keys().count());
        assert!(patches.contains(&Patch::label("nav.home", "Home")));
        assert!(matches!(patches[0].content, Content::Text(_)));
    }

    #[test]
    fn test_toggle_plain_or_linked() {
        let doc = document();
        let plain = toggle(&RenderRequest::new(&doc, Language::En));
        assert_eq!(plain, vec![Patch::text(Region::LangToggle, "中文 / EN")]);

        let linked = toggle(&RenderRequest::new(&doc, Language::En).with_toggle_href(Some("index.html")));
        assert_eq!(
            html(&linked, Region::LangToggle),
            r#"<a href="index.html" hreflang="zh">中文 / EN</a>"#
        );
    }
}
