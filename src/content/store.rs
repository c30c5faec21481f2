//! Content store: the loaded document plus the active language

use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use super::schema::{self, SchemaError};
use super::{ContentDocument, Language, LocalizedText};

/// Failure to obtain the content document
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read content document {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse content document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Timed out after {0:?} waiting for content document")]
    Timeout(Duration),
}

/// Where the content document comes from
#[derive(Debug, Clone)]
pub struct ContentSource {
    path: PathBuf,
    strict: bool,
    timeout: Option<Duration>,
}

impl ContentSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            strict: false,
            timeout: None,
        }
    }

    /// Validate the raw document before deserializing it
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Give up on the read after `timeout`
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the document
    pub async fn load(&self) -> Result<ContentDocument, LoadError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.read())
                .await
                .map_err(|_| LoadError::Timeout(limit))?,
            None => self.read().await,
        }
    }

    async fn read(&self) -> Result<ContentDocument, LoadError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Read {
                path: self.path.clone(),
                source,
            })?;
        parse(&text, self.strict)
    }
}

/// Parse document text, optionally validating its shape first
pub fn parse(text: &str, strict: bool) -> Result<ContentDocument, LoadError> {
    if strict {
        let raw: serde_json::Value = serde_json::from_str(text)?;
        schema::validate(&raw)?;
        return Ok(serde_json::from_value(raw)?);
    }
    Ok(ContentDocument::from_json(text)?)
}

/// Holds the document for the page session and the current language
#[derive(Debug, Clone)]
pub struct ContentStore {
    document: ContentDocument,
    language: Language,
}

impl ContentStore {
    pub fn new(document: ContentDocument, language: Language) -> Self {
        Self { document, language }
    }

    /// Load a store from `source`, starting in `language`
    pub async fn load(source: &ContentSource, language: Language) -> Result<Self, LoadError> {
        let document = source.load().await?;
        tracing::debug!(
            "Loaded content document {:?}: {} services, {} team members, {} cases",
            source.path(),
            document.services.len(),
            document.team.len(),
            document.cases.len()
        );
        Ok(Self::new(document, language))
    }

    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Resolve a localized value in the current language
    pub fn resolve(&self, value: &LocalizedText) -> String {
        value.resolve(self.language).to_string()
    }
}
