//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// How documents are ordered by date in listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrder {
    /// Plain string comparison of the `date` field
    #[default]
    Lexical,
    /// Calendar comparison of parsed dates; unparseable dates sort last
    Chronological,
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,

    // Content
    /// Blog content directory, relative to the base directory unless absolute
    pub content_dir: String,
    pub date_order: DateOrder,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "HXI Labs".to_string(),
            description: "Thoughts on technology, design, and human connection.".to_string(),
            content_dir: "src/content/blog".to_string(),
            date_order: DateOrder::Lexical,
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        tracing::debug!("Loaded site config from {:?}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "HXI Labs");
        assert_eq!(config.content_dir, "src/content/blog");
        assert_eq!(config.date_order, DateOrder::Lexical);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Studio
content_dir: posts
date_order: chronological
analytics: plausible
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Studio");
        assert_eq!(config.content_dir, "posts");
        assert_eq!(config.date_order, DateOrder::Chronological);
        assert_eq!(
            config.description,
            "Thoughts on technology, design, and human connection."
        );
        assert!(config.extra.contains_key("analytics"));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SiteConfig::load(dir.path().join("_config.yml")).is_err());
    }

    #[test]
    fn test_reject_unknown_order() {
        let yaml = "date_order: alphabetical\n";
        assert!(serde_yaml::from_str::<SiteConfig>(yaml).is_err());
    }
}
