//! CLI entry point for hxi-site

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hxi-site")]
#[command(version)]
#[command(about = "Browse the HXI Labs blog content", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Override the blog content directory
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Print the posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single post
    Show {
        /// Slug of the post (file name without extension)
        slug: String,

        /// Render the body to HTML
        #[arg(long)]
        html: bool,
    },

    /// Print every post slug
    Slugs,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "hxi_site=debug,info"
    } else {
        "hxi_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let mut site = hxi_site::Site::new(&base_dir)?;
    if let Some(dir) = cli.content_dir {
        site.set_content_dir(dir);
    }
    tracing::debug!("Using content directory {:?}", site.content_dir);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List { json } => {
            hxi_site::commands::list::run(&site, json, &mut out)?;
        }

        Commands::Show { slug, html } => {
            hxi_site::commands::show::run(&site, &slug, html, &mut out)?;
        }

        Commands::Slugs => {
            hxi_site::commands::list::slugs(&site, &mut out)?;
        }

        Commands::Version => {
            writeln!(out, "hxi-site version {}", env!("CARGO_PKG_VERSION"))?;
        }
    }

    Ok(())
}
