//! Content loader - loads documents from the content directory

use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use super::error::{ContentError, Result};
use super::{Document, FrontMatter, SourceFormat};
use crate::config::DateOrder;

/// Loads documents from a content directory
///
/// Every call reads from disk; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    root: PathBuf,
    order: DateOrder,
}

impl ContentLoader {
    /// Create a loader rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            order: DateOrder::default(),
        }
    }

    /// Use a different date ordering for listings
    pub fn with_order(mut self, order: DateOrder) -> Self {
        self.order = order;
        self
    }

    /// Content directory this loader reads from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load every document, newest first
    ///
    /// A missing directory yields an empty list. Files that cannot be read or
    /// parsed are skipped with a warning.
    pub fn list(&self) -> Vec<Document> {
        if !self.root.exists() {
            tracing::debug!("Content directory {:?} does not exist", self.root);
            return Vec::new();
        }
        if !self.root.is_dir() {
            tracing::warn!("Content path {:?} is not a directory", self.root);
            return Vec::new();
        }

        // Pick one file per slug first; .mdx shadows .md, as in `get`
        let mut candidates: BTreeMap<String, (PathBuf, SourceFormat)> = BTreeMap::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Failed to read entry in {:?}: {}", self.root, e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            let Some((slug, format)) = SourceFormat::detect(&path) else {
                continue;
            };

            match candidates.entry(slug) {
                Entry::Vacant(slot) => {
                    slot.insert((path, format));
                }
                Entry::Occupied(mut slot) => {
                    let (kept, shadowed) = if format < slot.get().1 {
                        let previous = slot.insert((path, format));
                        (slot.get().0.clone(), previous.0)
                    } else {
                        (slot.get().0.clone(), path)
                    };
                    tracing::warn!(
                        "Skipping {:?}: slug {:?} already provided by {:?}",
                        shadowed,
                        slot.key(),
                        kept
                    );
                }
            }
        }

        let mut documents: Vec<Document> = candidates
            .into_iter()
            .filter_map(|(slug, (path, format))| {
                match self.load_document(&path, slug, format) {
                    Ok(doc) => Some(doc),
                    Err(e) => {
                        tracing::warn!("Failed to load document {:?}: {}", path, e);
                        None
                    }
                }
            })
            .collect();

        sort_documents(&mut documents, self.order);

        tracing::debug!(
            "Loaded {} documents from {:?}",
            documents.len(),
            self.root
        );
        documents
    }

    /// Load a single document by slug
    ///
    /// `<slug>.mdx` wins over `<slug>.md`. Missing, unreadable and malformed
    /// files all come back as `None`.
    pub fn get(&self, slug: &str) -> Option<Document> {
        if let Err(e) = validate_slug(slug) {
            tracing::debug!("{}", e);
            return None;
        }

        let (path, format) = SourceFormat::ALL.into_iter().find_map(|format| {
            let path = self
                .root
                .join(format!("{}.{}", slug, format.extension()));
            path.is_file().then_some((path, format))
        })?;

        match self.load_document(&path, slug.to_string(), format) {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::error!("Error reading markdown file for slug {}: {}", slug, e);
                None
            }
        }
    }

    /// Slugs of every listed document, in listing order
    pub fn slugs(&self) -> Vec<String> {
        self.list().into_iter().map(|doc| doc.slug).collect()
    }

    /// Load a single document from a file
    fn load_document(&self, path: &Path, slug: String, format: SourceFormat) -> Result<Document> {
        let content = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        let (fm, body) = FrontMatter::parse(&content)?;

        if ::slug::slugify(&slug) != slug {
            tracing::warn!("Slug {:?} from {:?} is not URL-safe", slug, path);
        }

        tracing::debug!("Loaded {:?} as {:?}", path, slug);
        Ok(Document::from_front_matter(
            slug,
            format,
            path.to_path_buf(),
            fm,
            body,
        ))
    }
}

/// A slug must name a single file inside the content directory
fn validate_slug(slug: &str) -> Result<()> {
    let mut components = Path::new(slug).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_normal || slug.contains(['/', '\\', '\0']) {
        return Err(ContentError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

/// Sort by date descending, ties broken by slug ascending
fn sort_documents(documents: &mut [Document], order: DateOrder) {
    documents.sort_by(|a, b| {
        let by_date = match order {
            DateOrder::Lexical => b.date.cmp(&a.date),
            DateOrder::Chronological => match (&a.published, &b.published) {
                (Some(x), Some(y)) => y.cmp(x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => b.date.cmp(&a.date),
            },
        };
        by_date.then_with(|| a.slug.cmp(&b.slug))
    });
}
