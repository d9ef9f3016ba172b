//! Document model

use chrono::{DateTime, FixedOffset, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::{FrontMatter, MarkdownRenderer};
use crate::helpers::{full_date, iso_timestamp, parse_date};

/// Title used when the header declares none
pub const DEFAULT_TITLE: &str = "No Title";

/// Source file flavor, in lookup priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Markdown with components (`.mdx`)
    Mdx,
    /// Plain markdown (`.md`)
    Markdown,
}

impl SourceFormat {
    /// All recognized formats, highest priority first
    pub const ALL: [SourceFormat; 2] = [SourceFormat::Mdx, SourceFormat::Markdown];

    /// File extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            SourceFormat::Mdx => "mdx",
            SourceFormat::Markdown => "md",
        }
    }

    /// Recognize a content file and split off its slug
    ///
    /// Returns `None` for other extensions and for files with an empty stem.
    pub fn detect(path: &Path) -> Option<(String, SourceFormat)> {
        let ext = path.extension()?.to_str()?;
        let format = Self::ALL.into_iter().find(|f| f.extension() == ext)?;
        let stem = path.file_stem()?.to_str()?;
        if stem.is_empty() {
            return None;
        }
        Some((stem.to_string(), format))
    }
}

/// A published content item
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// File name without extension
    pub slug: String,

    /// Header title, or "No Title"
    pub title: String,

    /// Date as written in the header (or the load time)
    pub date: String,

    /// `date` as a calendar value, when it is in a recognized format
    pub published: Option<DateTime<FixedOffset>>,

    /// Header description, empty when absent
    pub description: String,

    /// Raw body with the header removed
    pub content: String,

    /// Extension the file was loaded from
    pub format: SourceFormat,

    /// Full source file path
    pub source: PathBuf,

    /// Custom front-matter fields
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Document {
    /// Build a document from parsed front-matter, applying defaults
    pub fn from_front_matter(
        slug: String,
        format: SourceFormat,
        source: PathBuf,
        fm: FrontMatter,
        body: &str,
    ) -> Self {
        let non_empty = |value: Option<String>| value.filter(|s| !s.is_empty());

        let title = non_empty(fm.title).unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let date = non_empty(fm.date).unwrap_or_else(|| iso_timestamp(&Utc::now()));
        let published = parse_date(&date);
        let description = fm.description.unwrap_or_default();

        Self {
            slug,
            title,
            date,
            published,
            description,
            content: body.to_string(),
            format,
            source,
            extra: fm.extra,
        }
    }

    /// Date for display ("March 1, 2024"), or the raw string when it doesn't parse
    pub fn display_date(&self) -> String {
        match &self.published {
            Some(date) => full_date(date),
            None => self.date.clone(),
        }
    }

    /// Render the body to HTML
    pub fn render_html(&self, renderer: &MarkdownRenderer) -> String {
        renderer.render(&self.content)
    }

    /// Look up a custom front-matter field
    pub fn field(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.extra.get(key)
    }
}
