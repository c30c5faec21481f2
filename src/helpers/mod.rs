//! Helper functions shared by the renderers
//!
//! Escaping and URL building used when turning content into markup.

mod html;
mod url;

pub use html::*;
pub use url::*;
