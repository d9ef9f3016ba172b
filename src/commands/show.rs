//! Show a single blog post

use anyhow::Result;
use std::io::Write;

use crate::content::MarkdownRenderer;
use crate::{Site, NOT_FOUND_TITLE};

/// Print a post's page title, metadata and body
pub fn run<W: Write>(site: &Site, slug: &str, html: bool, out: &mut W) -> Result<()> {
    let Some(doc) = site.loader().get(slug) else {
        anyhow::bail!("{}: {}", NOT_FOUND_TITLE, slug);
    };

    writeln!(out, "{}", site.page_title(Some(&doc)))?;
    if !doc.description.is_empty() {
        writeln!(out, "{}", doc.description)?;
    }
    writeln!(out, "{}", doc.display_date())?;
    writeln!(out)?;

    if html {
        write!(out, "{}", doc.render_html(&MarkdownRenderer::new()))?;
    } else {
        writeln!(out, "{}", doc.content)?;
    }
    Ok(())
}
