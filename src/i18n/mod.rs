//! Built-in phrases for static page labels
//!
//! Navigation entries, call-to-action buttons and section headings are not
//! part of the content document. Host page elements carry a `data-i18n` key
//! and get the phrase for the active language on every render pass.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::content::Language;

/// Label key -> (cn, en)
const PHRASES: &[(&str, &str, &str)] = &[
    ("nav.home", "首页", "Home"),
    ("nav.about", "关于", "About"),
    ("nav.services", "服务", "Services"),
    ("nav.team", "团队", "Team"),
    ("nav.contact", "联系", "Contact"),
    ("hero.cta", "加入我们", "Join Us"),
    ("hero.more", "了解更多", "Learn More"),
    ("section.about", "关于我们", "About Us"),
    ("section.services", "我们的服务", "Our Services"),
    ("section.team", "核心团队", "Core Team"),
    ("section.cases", "成功案例", "Success Stories"),
    ("section.invest", "生态与投资", "Ecosystem & Invest"),
    ("section.contact", "联系我们", "Contact Us"),
];

lazy_static! {
    static ref TABLE: HashMap<&'static str, (&'static str, &'static str)> = PHRASES
        .iter()
        .map(|&(key, cn, en)| (key, (cn, en)))
        .collect();
}

/// Phrase for a label key, `None` for keys outside the table
pub fn phrase(key: &str, lang: Language) -> Option<&'static str> {
    TABLE.get(key).map(|&(cn, en)| match lang {
        Language::Cn => cn,
        Language::En => en,
    })
}

/// Every known label key, in table order
pub fn keys() -> impl Iterator<Item = &'static str> {
    PHRASES.iter().map(|(key, _, _)| *key)
}
