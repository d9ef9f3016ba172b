//! List blog posts

use anyhow::Result;
use std::io::Write;

use crate::Site;

/// Print every post, newest first
pub fn run<W: Write>(site: &Site, json: bool, out: &mut W) -> Result<()> {
    let docs = site.loader().list();
    tracing::info!("Listing {} posts from {:?}", docs.len(), site.content_dir);

    if json {
        serde_json::to_writer_pretty(&mut *out, &docs)?;
        writeln!(out)?;
        return Ok(());
    }

    if docs.is_empty() {
        writeln!(out, "No blog posts found.")?;
        return Ok(());
    }

    writeln!(out, "Posts ({}):", docs.len())?;
    for doc in &docs {
        writeln!(out, "  {} - {} [{}]", doc.display_date(), doc.title, doc.slug)?;
    }
    Ok(())
}

/// Print one slug per line, for enumerating every post page
pub fn slugs<W: Write>(site: &Site, out: &mut W) -> Result<()> {
    for slug in site.loader().slugs() {
        writeln!(out, "{}", slug)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site_with_posts(posts: &[(&str, &str)]) -> (tempfile::TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        let mut site = Site::new(dir.path()).unwrap();
        site.set_content_dir("blog");
        fs::create_dir_all(&site.content_dir).unwrap();
        for (name, content) in posts {
            fs::write(site.content_dir.join(name), content).unwrap();
        }
        (dir, site)
    }

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_list_text() {
        let (_dir, site) = site_with_posts(&[
            ("first.md", "---\ntitle: First\ndate: 2024-01-01\n---\none"),
            ("second.mdx", "---\ntitle: Second\ndate: 2024-02-01T10:00:00Z\n---\ntwo"),
        ]);
        let text = output(|out| run(&site, false, out));
        assert_eq!(
            text,
            "Posts (2):\n  February 1, 2024 - Second [second]\n  January 1, 2024 - First [first]\n"
        );
    }

    #[test]
    fn test_list_empty() {
        let (_dir, site) = site_with_posts(&[]);
        assert_eq!(output(|out| run(&site, false, out)), "No blog posts found.\n");
    }

    #[test]
    fn test_list_json() {
        let (_dir, site) = site_with_posts(&[(
            "first.md",
            "---\ntitle: First\ndate: 2024-01-01\nauthor: Kim\n---\none",
        )]);
        let text = output(|out| run(&site, true, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["slug"], "first");
        assert_eq!(value[0]["content"], "one");
        assert_eq!(value[0]["extra"]["author"], "Kim");
    }

    #[test]
    fn test_slugs() {
        let (_dir, site) = site_with_posts(&[
            ("old.md", "---\ndate: 2023-01-01\n---\n"),
            ("new.md", "---\ndate: 2024-01-01\n---\n"),
        ]);
        assert_eq!(output(|out| slugs(&site, out)), "new\nold\n");
    }
}
