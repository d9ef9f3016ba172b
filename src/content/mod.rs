//! Content module - loads blog documents and renders their bodies

mod document;
mod error;
mod frontmatter;
pub mod loader;
mod markdown;

pub use document::{Document, SourceFormat, DEFAULT_TITLE};
pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
