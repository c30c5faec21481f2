//! HTML host page backed by a template file

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::ops::Range;
use std::path::Path;

use super::{Dom, DomError, Fragment, Patch, Region, Target};
use crate::config::RevealConfig;
use crate::content::Language;
use crate::helpers::is_void_element;

lazy_static! {
    static ref OPEN_TAG: Regex = Regex::new(r"(?s)<([a-zA-Z][a-zA-Z0-9-]*)(\s[^>]*)?>").unwrap();
    static ref ID_ATTR: Regex = Regex::new(r#"(?:^|\s)id\s*=\s*["']([^"']*)["']"#).unwrap();
    static ref LABEL_ATTR: Regex =
        Regex::new(r#"(?:^|\s)data-i18n\s*=\s*["']([^"']*)["']"#).unwrap();
    static ref BODY_OPEN: Regex = Regex::new(r"(?i)<body(\s[^>]*)?>").unwrap();
    static ref BODY_CLOSE: Regex = Regex::new(r"(?i)</body\s*>").unwrap();
    static ref ANY_TAG: Regex = Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9-]*)(?:\s[^>]*)?>").unwrap();
    static ref HTML_LANG: Regex =
        Regex::new(r#"(?i)<html\b[^>]*?\slang\s*=\s*["']([^"']*)["']"#).unwrap();
}

enum Slot {
    Region(Region),
    Label(String),
}

#[derive(Debug, Clone)]
enum Segment {
    Static(String),
    Region { region: Region, html: String },
    Label { key: String, html: String },
}

/// A host page whose owned regions and label elements can be rewritten
///
/// The template is split once into static text and slots; serializing puts
/// the current slot contents back in place.
#[derive(Debug, Clone)]
pub struct HostPage {
    head: String,
    /// Byte range of the `<html lang>` value inside `head`
    lang_attr: Option<Range<usize>>,
    segments: Vec<Segment>,
    tail: String,
    reveal: Option<String>,
    body_override: Option<String>,
}

impl HostPage {
    /// Load a host page template from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let html = fs::read_to_string(path.as_ref())?;
        Ok(Self::parse(&html))
    }

    /// Split a template into static text and owned slots
    pub fn parse(html: &str) -> Self {
        let (head, body, tail) = split_body(html);
        let segments = parse_segments(body);
        tracing::debug!(
            "Host page has {} regions and {} labels",
            segments
                .iter()
                .filter(|s| matches!(s, Segment::Region { .. }))
                .count(),
            segments
                .iter()
                .filter(|s| matches!(s, Segment::Label { .. }))
                .count()
        );

        Self {
            head: head.to_string(),
            lang_attr: HTML_LANG
                .captures(head)
                .and_then(|c| c.get(1))
                .map(|m| m.range()),
            segments,
            tail: tail.to_string(),
            reveal: None,
            body_override: None,
        }
    }

    /// Current inner HTML of a region (first match)
    pub fn region_html(&self, region: Region) -> Option<&str> {
        self.segments.iter().find_map(|s| match s {
            Segment::Region { region: r, html } if *r == region => Some(html.as_str()),
            _ => None,
        })
    }

    /// Value of the `lang` attribute on `<html>`
    pub fn document_language(&self) -> Option<&str> {
        self.lang_attr.clone().map(|range| &self.head[range])
    }

    /// Whether the host page declares a region
    pub fn has_region(&self, region: Region) -> bool {
        self.region_html(region).is_some()
    }

    /// Current inner HTML of every element tagged with `key`
    pub fn label_html(&self, key: &str) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Label { key: k, html } if k == key => Some(html.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether the body was replaced by [`Dom::replace_body`]
    pub fn is_replaced(&self) -> bool {
        self.body_override.is_some()
    }

    /// Serialize the page
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(self.head.len() + self.tail.len() + 4096);
        out.push_str(&self.head);

        match &self.body_override {
            Some(body) => out.push_str(body),
            None => {
                for segment in &self.segments {
                    match segment {
                        Segment::Static(text) => out.push_str(text),
                        Segment::Region { html, .. } | Segment::Label { html, .. } => {
                            out.push_str(html)
                        }
                    }
                }
                if let Some(script) = &self.reveal {
                    out.push_str(script);
                }
            }
        }

        out.push_str(&self.tail);
        out
    }
}

impl Dom for HostPage {
    fn has_region(&self, region: Region) -> bool {
        self.region_html(region).is_some()
    }

    fn set_document_language(&mut self, language: Language) {
        let Some(range) = self.lang_attr.clone() else {
            return;
        };
        let code = language.html_lang();
        self.head.replace_range(range.clone(), code);
        self.lang_attr = Some(range.start..range.start + code.len());
    }

    fn apply(&mut self, patch: &Patch) -> Result<(), DomError> {
        let new_html = patch.content.to_html();
        match &patch.target {
            Target::Region(region) => {
                let mut found = false;
                for segment in &mut self.segments {
                    if let Segment::Region { region: r, html } = segment {
                        if r == region {
                            html.clone_from(&new_html);
                            found = true;
                        }
                    }
                }
                if found {
                    Ok(())
                } else {
                    Err(DomError::MissingRegion(region.id()))
                }
            }
            Target::Label(key) => {
                for segment in &mut self.segments {
                    if let Segment::Label { key: k, html } = segment {
                        if k == key {
                            html.clone_from(&new_html);
                        }
                    }
                }
                Ok(())
            }
        }
    }

    fn init_reveal(&mut self, reveal: &RevealConfig) {
        self.reveal = Some(reveal.init_script());
    }

    fn replace_body(&mut self, fragment: &Fragment) {
        self.body_override = Some(fragment.render());
    }
}

/// Split into (up to and including `<body>`, body content, from `</body>`)
fn split_body(html: &str) -> (&str, &str, &str) {
    let Some(open) = BODY_OPEN.find(html) else {
        return ("", html, "");
    };
    let close = BODY_CLOSE
        .find_at(html, open.end())
        .map(|m| m.start())
        .unwrap_or(html.len());
    (&html[..open.end()], &html[open.end()..close], &html[close..])
}

fn parse_segments(body: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in OPEN_TAG.captures_iter(body) {
        let Some(open) = caps.get(0) else { continue };
        if open.start() < cursor {
            // Inside a slot we already claimed
            continue;
        }

        let tag = caps[1].to_ascii_lowercase();
        let attrs = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        if is_void_element(&tag) || attrs.trim_end().ends_with('/') {
            continue;
        }

        let region = ID_ATTR
            .captures(attrs)
            .and_then(|c| Region::from_id(&c[1]));
        let label = LABEL_ATTR.captures(attrs).map(|c| c[1].to_string());
        let slot = match (region, label) {
            (Some(region), _) => Slot::Region(region),
            (None, Some(key)) => Slot::Label(key),
            (None, None) => continue,
        };

        let Some(close) = find_close(body, &tag, open.end()) else {
            tracing::warn!("Unclosed <{}> in host page, leaving it static", tag);
            continue;
        };

        segments.push(Segment::Static(body[cursor..open.end()].to_string()));
        let html = body[open.end()..close].to_string();
        segments.push(match slot {
            Slot::Region(region) => Segment::Region { region, html },
            Slot::Label(key) => Segment::Label { key, html },
        });
        cursor = close;
    }

    segments.push(Segment::Static(body[cursor..].to_string()));
    segments
}

/// Byte offset of the closing tag matching an element opened before `from`
fn find_close(html: &str, tag: &str, from: usize) -> Option<usize> {
    let mut depth = 1usize;

    for caps in ANY_TAG.captures_iter(&html[from..]) {
        if !caps[2].eq_ignore_ascii_case(tag) {
            continue;
        }
        let m = caps.get(0)?;
        if caps[1].is_empty() {
            if !m.as_str().ends_with("/>") {
                depth += 1;
            }
        } else {
            depth -= 1;
            if depth == 0 {
                return Some(from + m.start());
            }
        }
    }
    None
}
