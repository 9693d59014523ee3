//! List site content

use anyhow::Result;

use crate::content::ContentLoader;
use crate::Blog;

/// Print every post, newest first, drafts marked
pub fn run(blog: &Blog) -> Result<()> {
    let posts = ContentLoader::new(blog).load_posts()?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!(
            "  {:<20} {} [{}]",
            post.date.as_deref().unwrap_or("(draft)"),
            post.title,
            post.path
        );
    }

    Ok(())
}
