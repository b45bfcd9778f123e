//! Supplies raw document bytes from a literal, a file or an HTTP endpoint.

mod error;
mod screen_config;
mod source;

pub use error::LoaderError;
pub use screen_config::{NavigationType, ScreenConfig, DEFAULT_ENDPOINT};
pub use source::{load_document, DocumentSource, FileSource, HttpSource, LiteralSource};
