//! hxi-site: the content layer behind the HXI Labs blog
//!
//! Blog posts live as `.mdx` / `.md` files with a front-matter header in a
//! single content directory. [`content::ContentLoader`] lists them newest
//! first and looks them up by slug.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentLoader, Document};

/// Title shown when a requested post does not exist
pub const NOT_FOUND_TITLE: &str = "Post Not Found";

/// The site application
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Blog content directory
    pub content_dir: PathBuf,
}

impl Site {
    /// Create a new site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        // join() keeps an absolute content_dir as is
        let content_dir = base_dir.join(&config.content_dir);
        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Point the site at a different content directory
    pub fn set_content_dir<P: AsRef<Path>>(&mut self, dir: P) {
        self.content_dir = self.base_dir.join(dir);
    }

    /// Content loader for the blog directory
    pub fn loader(&self) -> ContentLoader {
        ContentLoader::new(&self.content_dir).with_order(self.config.date_order)
    }

    /// Title of the blog index page
    pub fn index_title(&self) -> String {
        format!("Blog | {}", self.config.title)
    }

    /// Title of a post page, or the not-found title
    pub fn page_title(&self, doc: Option<&Document>) -> String {
        match doc {
            Some(doc) => format!("{} | {}", doc.title, self.config.title),
            None => NOT_FOUND_TITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_site_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.content_dir, dir.path().join("src/content/blog"));
        assert_eq!(site.index_title(), "Blog | HXI Labs");
        assert_eq!(site.page_title(None), "Post Not Found");
        assert!(site.loader().list().is_empty());
    }

    #[test]
    fn test_site_reads_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "title: Studio\ncontent_dir: posts\n",
        )
        .unwrap();
        fs::create_dir(dir.path().join("posts")).unwrap();
        fs::write(
            dir.path().join("posts/hello.md"),
            "---\ntitle: Hello\ndate: 2024-01-01\n---\nhi",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        let doc = site.loader().get("hello").unwrap();
        assert_eq!(site.page_title(Some(&doc)), "Hello | Studio");
    }

    #[test]
    fn test_absolute_content_dir_override() {
        let base = tempfile::tempdir().unwrap();
        let content = tempfile::tempdir().unwrap();
        let mut site = Site::new(base.path()).unwrap();
        site.set_content_dir(content.path());
        assert_eq!(site.loader().root(), content.path());
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "title: [unclosed\n").unwrap();
        assert!(Site::new(dir.path()).is_err());
    }
}
