//! The content document and its sections

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Language;

/// A value that is either language-invariant or translated per language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum LocalizedText {
    /// The same text in every language
    Plain(String),
    /// Language code -> text (`cn` and `en` expected, other codes ignored)
    Localized(IndexMap<String, Option<String>>),
    /// `null` or missing
    #[default]
    Empty,
}

impl LocalizedText {
    /// Resolve to display text for `lang`.
    ///
    /// Falls back to `cn`, then to the empty string. Empty entries count as missing.
    pub fn resolve(&self, lang: Language) -> &str {
        match self {
            LocalizedText::Plain(s) => s,
            LocalizedText::Localized(map) => lookup(map, lang.code())
                .or_else(|| lookup(map, Language::Cn.code()))
                .unwrap_or(""),
            LocalizedText::Empty => "",
        }
    }

    /// Build a `cn`/`en` pair
    pub fn pair(cn: &str, en: &str) -> Self {
        let mut map = IndexMap::new();
        map.insert("cn".to_string(), Some(cn.to_string()));
        map.insert("en".to_string(), Some(en.to_string()));
        LocalizedText::Localized(map)
    }
}

impl From<&str> for LocalizedText {
    fn from(s: &str) -> Self {
        LocalizedText::Plain(s.to_string())
    }
}

fn lookup<'a>(map: &'a IndexMap<String, Option<String>>, code: &str) -> Option<&'a str> {
    map.get(code)
        .and_then(|v| v.as_deref())
        .filter(|s| !s.is_empty())
}

/// The whole portal content, loaded once per session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub hero: Hero,
    pub about: About,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub cases: Vec<CaseStudy>,
    #[serde(default)]
    pub gallery: Option<Vec<String>>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: LocalizedText,
    /// Background image of the hero banner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub intro: LocalizedText,
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// Platform key -> URL, in display order
    #[serde(default)]
    pub links: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    #[serde(default)]
    pub label: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub desc: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<Followers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub desc: LocalizedText,
}

impl TeamMember {
    /// Avatar URL, if one is set
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.is_empty())
    }

    /// Follower count as displayed, if worth showing
    pub fn followers(&self) -> Option<String> {
        self.followers.as_ref().and_then(Followers::display)
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref().filter(|s| !s.is_empty())
    }
}

/// Follower count: either a raw number or a preformatted label like `70K+`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Followers {
    Count(serde_json::Number),
    Label(String),
}

impl Followers {
    /// Display text; `None` for zero or empty values
    pub fn display(&self) -> Option<String> {
        match self {
            Followers::Count(n) if n.as_f64() == Some(0.0) => None,
            Followers::Count(n) => Some(n.to_string()),
            Followers::Label(s) if s.is_empty() => None,
            Followers::Label(s) => Some(s.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub desc: LocalizedText,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub text: LocalizedText,
    #[serde(default)]
    pub email: String,
    /// Twitter handle, optionally prefixed with `@`
    #[serde(default)]
    pub twitter: String,
    /// Business development handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bd: Option<String>,
}

impl ContentDocument {
    /// Parse a document from JSON text
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_ignores_language() {
        let text = LocalizedText::from("3am Club");
        assert_eq!(text.resolve(Language::Cn), "3am Club");
        assert_eq!(text.resolve(Language::En), "3am Club");
    }

    #[test]
    fn test_fallback_to_cn() {
        let text: LocalizedText = serde_json::from_str(r#"{"cn": "关于"}"#).unwrap();
        assert_eq!(text.resolve(Language::En), "关于");

        let text: LocalizedText = serde_json::from_str(r#"{"cn": "关于", "en": ""}"#).unwrap();
        assert_eq!(text.resolve(Language::En), "关于");

        let text: LocalizedText = serde_json::from_str(r#"{"cn": "关于", "en": null}"#).unwrap();
        assert_eq!(text.resolve(Language::En), "关于");
    }

    #[test]
    fn test_no_known_key_resolves_empty() {
        let text: LocalizedText = serde_json::from_str(r#"{"fr": "à propos"}"#).unwrap();
        assert_eq!(text.resolve(Language::Cn), "");
        assert_eq!(text.resolve(Language::En), "");
        assert_eq!(LocalizedText::Empty.resolve(Language::En), "");

        let text: LocalizedText = serde_json::from_str("null").unwrap();
        assert_eq!(text, LocalizedText::Empty);
    }

    #[test]
    fn test_followers_display() {
        let count: Followers = serde_json::from_str("1200").unwrap();
        assert_eq!(count.display(), Some("1200".to_string()));
        let label: Followers = serde_json::from_str(r#""70K+""#).unwrap();
        assert_eq!(label.display(), Some("70K+".to_string()));
        let zero: Followers = serde_json::from_str("0").unwrap();
        assert_eq!(zero.display(), None);
    }

    #[test]
    fn test_links_keep_document_order() {
        let about: About = serde_json::from_str(
            r#"{"intro": "x", "stats": [], "links": {"website": "a", "twitter": "b", "discord": "c"}}"#,
        )
        .unwrap();
        let keys: Vec<_> = about.links.keys().map(String::as_str).collect();
        assert_eq!(keys, ["website", "twitter", "discord"]);
    }
}
