//! Generate static files

use anyhow::{Context, Result};

use crate::content::ContentLoader;
use crate::generator::Generator;
use crate::Blog;

/// Generate the static site
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    let posts = ContentLoader::new(blog)
        .load_posts()
        .context("Failed to load posts")?;

    let published = posts.iter().filter(|p| p.is_published()).count();
    tracing::info!(
        "Loaded {} posts ({} drafts)",
        posts.len(),
        posts.len() - published
    );

    let generator = Generator::new(blog)?;
    let report = generator
        .generate(&posts)
        .with_context(|| format!("Failed to write site to {:?}", blog.public_dir))?;

    tracing::info!(
        "Wrote {} post pages and {} static files to {:?}",
        report.posts,
        report.assets,
        blog.public_dir
    );
    if report.skipped_drafts > 0 {
        tracing::info!("Skipped {} drafts", report.skipped_drafts);
    }

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
