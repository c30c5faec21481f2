//! Structural validation of a raw content document
//!
//! Only used when `strict_schema` is enabled. Reports the first offending
//! field by its JSON path so authors can find it quickly.

use serde_json::Value;
use thiserror::Error;

/// A missing or mistyped field in the content document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid content field `{path}`: {reason}")]
pub struct SchemaError {
    pub path: String,
    pub reason: String,
}

impl SchemaError {
    fn new(path: &str, reason: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

type Check = fn(&Value, &str) -> Result<(), SchemaError>;

/// Validate a document against the portal content shape
pub fn validate(doc: &Value) -> Result<(), SchemaError> {
    object(doc, "$")?;

    let hero = field(doc, "hero", "hero")?;
    string(field(hero, "title", "hero.title")?, "hero.title")?;
    localized(field(hero, "subtitle", "hero.subtitle")?, "hero.subtitle")?;
    optional(hero, "bg_image", "hero.bg_image", string)?;

    let about = field(doc, "about", "about")?;
    localized(field(about, "intro", "about.intro")?, "about.intro")?;
    each(field(about, "stats", "about.stats")?, "about.stats", |stat, path| {
        string(field(stat, "value", &format!("{path}.value"))?, &format!("{path}.value"))?;
        localized(field(stat, "label", &format!("{path}.label"))?, &format!("{path}.label"))
    })?;
    let links = field(about, "links", "about.links")?;
    for (key, url) in object(links, "about.links")? {
        string(url, &format!("about.links.{key}"))?;
    }

    each(field(doc, "services", "services")?, "services", |service, path| {
        localized(field(service, "title", &format!("{path}.title"))?, &format!("{path}.title"))?;
        localized(field(service, "desc", &format!("{path}.desc"))?, &format!("{path}.desc"))
    })?;

    each(field(doc, "team", "team")?, "team", |member, path| {
        string(field(member, "name", &format!("{path}.name"))?, &format!("{path}.name"))?;
        string(field(member, "twitter", &format!("{path}.twitter"))?, &format!("{path}.twitter"))?;
        optional(member, "image", &format!("{path}.image"), string)?;
        optional(member, "followers", &format!("{path}.followers"), scalar)?;
        optional(member, "role", &format!("{path}.role"), string)?;
        localized(field(member, "desc", &format!("{path}.desc"))?, &format!("{path}.desc"))
    })?;

    each(field(doc, "cases", "cases")?, "cases", |case, path| {
        localized(field(case, "title", &format!("{path}.title"))?, &format!("{path}.title"))?;
        localized(field(case, "desc", &format!("{path}.desc"))?, &format!("{path}.desc"))?;
        let images = format!("{path}.images");
        each(field(case, "images", &images)?, &images, string)
    })?;

    if let Some(gallery) = doc.get("gallery").filter(|v| !v.is_null()) {
        each(gallery, "gallery", string)?;
    }

    let contact = field(doc, "contact", "contact")?;
    localized(field(contact, "text", "contact.text")?, "contact.text")?;
    string(field(contact, "email", "contact.email")?, "contact.email")?;
    string(field(contact, "twitter", "contact.twitter")?, "contact.twitter")?;
    optional(contact, "bd", "contact.bd", string)?;

    Ok(())
}

fn field<'a>(parent: &'a Value, key: &str, path: &str) -> Result<&'a Value, SchemaError> {
    match parent.get(key) {
        Some(Value::Null) | None => Err(SchemaError::new(path, "missing")),
        Some(value) => Ok(value),
    }
}

fn optional(parent: &Value, key: &str, path: &str, check: Check) -> Result<(), SchemaError> {
    match parent.get(key) {
        Some(Value::Null) | None => Ok(()),
        Some(value) => check(value, path),
    }
}

fn object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a serde_json::Map<String, Value>, SchemaError> {
    value
        .as_object()
        .ok_or_else(|| SchemaError::new(path, format!("expected an object, found {}", kind(value))))
}

fn string(value: &Value, path: &str) -> Result<(), SchemaError> {
    match value {
        Value::String(_) => Ok(()),
        other => Err(SchemaError::new(
            path,
            format!("expected a string, found {}", kind(other)),
        )),
    }
}

fn scalar(value: &Value, path: &str) -> Result<(), SchemaError> {
    match value {
        Value::String(_) | Value::Number(_) => Ok(()),
        other => Err(SchemaError::new(
            path,
            format!("expected a number or string, found {}", kind(other)),
        )),
    }
}

/// A plain string or a map holding at least `cn` and `en`
fn localized(value: &Value, path: &str) -> Result<(), SchemaError> {
    match value {
        Value::String(_) => Ok(()),
        Value::Object(map) => {
            for code in ["cn", "en"] {
                match map.get(code) {
                    Some(Value::String(_)) => {}
                    Some(other) => {
                        return Err(SchemaError::new(
                            &format!("{path}.{code}"),
                            format!("expected a string, found {}", kind(other)),
                        ))
                    }
                    None => return Err(SchemaError::new(&format!("{path}.{code}"), "missing")),
                }
            }
            Ok(())
        }
        other => Err(SchemaError::new(
            path,
            format!("expected a string or language map, found {}", kind(other)),
        )),
    }
}

fn each<F>(value: &Value, path: &str, check: F) -> Result<(), SchemaError>
where
    F: Fn(&Value, &str) -> Result<(), SchemaError>,
{
    let items = value
        .as_array()
        .ok_or_else(|| SchemaError::new(path, format!("expected an array, found {}", kind(value))))?;
    for (i, item) in items.iter().enumerate() {
        check(item, &format!("{path}[{i}]"))?;
    }
    Ok(())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "hero": {"title": "3am Club", "subtitle": {"cn": "社区", "en": "Community"}},
            "about": {
                "intro": {"cn": "简介", "en": "Intro"},
                "stats": [{"value": "37k+", "label": {"cn": "推特粉丝", "en": "Followers"}}],
                "links": {"twitter": "https://twitter.com/my3amclub"}
            },
            "services": [{"title": {"cn": "推动", "en": "Promotion"}, "desc": "..."}],
            "team": [{"name": "sanyi", "twitter": "https://x.com/sanyi", "followers": "25.8K+",
                      "desc": {"cn": "大使", "en": "Ambassador"}}],
            "cases": [{"title": "Galaxy Brain", "desc": "d", "images": ["a.jpg"]}],
            "gallery": ["g.jpg"],
            "contact": {"text": "hi", "email": "a@b.c", "twitter": "@my3amclub"}
        })
    }

    #[test]
    fn test_valid_document() {
        assert_eq!(validate(&valid()), Ok(()));
    }

    #[test]
    fn test_missing_field_is_named() {
        let mut doc = valid();
        doc["team"][0].as_object_mut().unwrap().remove("desc");
        let err = validate(&doc).unwrap_err();
        assert_eq!(err.path, "team[0].desc");
        assert_eq!(err.reason, "missing");
    }

    #[test]
    fn test_localized_requires_both_languages() {
        let mut doc = valid();
        doc["hero"]["subtitle"] = json!({"cn": "社区"});
        let err = validate(&doc).unwrap_err();
        assert_eq!(err.path, "hero.subtitle.en");
    }

    #[test]
    fn test_wrong_type_reports_kind() {
        let mut doc = valid();
        doc["cases"][0]["images"] = json!("a.jpg");
        let err = validate(&doc).unwrap_err();
        assert_eq!(err.path, "cases[0].images");
        assert!(err.reason.contains("expected an array"));
    }

    #[test]
    fn test_gallery_is_optional() {
        let mut doc = valid();
        doc.as_object_mut().unwrap().remove("gallery");
        assert_eq!(validate(&doc), Ok(()));
    }
}
