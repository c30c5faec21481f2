//! Content document, language state and loading

pub mod document;
pub mod language;
pub mod schema;
pub mod store;

pub use document::{
    About, CaseStudy, Contact, ContentDocument, Followers, Hero, LocalizedText, Service, Stat,
    TeamMember,
};
pub use language::{Language, LanguageError};
pub use schema::SchemaError;
pub use store::{ContentSource, ContentStore, LoadError};
