//! Create a new post

use anyhow::{bail, Result};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::helpers::normalize_route;
use crate::Blog;

/// Front-matter written into a new post
#[derive(Serialize)]
struct Scaffold<'a> {
    path: &'a str,
    title: &'a str,
    author: &'a str,
    date: String,
}

/// Write a post skeleton and return its file path
///
/// The post is served at `path` when given, otherwise at `/<slug of title>`.
pub fn create_post(blog: &Blog, title: &str, path: Option<&str>) -> Result<PathBuf> {
    let now = chrono::Local::now();
    let slug = slug::slugify(title);
    if slug.is_empty() {
        bail!("Title {:?} does not produce a usable file name", title);
    }

    let route = match path {
        Some(p) => match normalize_route(p) {
            Some(route) => route,
            None => bail!("Path {:?} would replace the home page", p),
        },
        None => format!("/{}", slug),
    };

    fs::create_dir_all(&blog.posts_dir)?;
    let file_path = blog.posts_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    let front_matter = serde_yaml::to_string(&Scaffold {
        path: &route,
        title,
        author: &blog.config.author,
        date: now.format("%Y-%m-%d %H:%M:%S").to_string(),
    })?;
    let content = format!("---\n{}---\n", front_matter);

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLoader;

    #[test]
    fn test_new_post_round_trips_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        let file = create_post(&blog, "Hello \"Rust\" World", None).unwrap();
        assert_eq!(file, blog.posts_dir.join("hello-rust-world.md"));

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello \"Rust\" World");
        assert_eq!(posts[0].path, "/hello-rust-world");
        assert_eq!(posts[0].author.as_deref(), Some("John Doe"));
        assert!(posts[0].is_published());
    }

    #[test]
    fn test_custom_path_and_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        create_post(&blog, "Intro", Some("2020/intro")).unwrap();
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts[0].path, "/2020/intro");

        assert!(create_post(&blog, "Intro", None).is_err());
        assert!(create_post(&blog, "Home", Some("/")).is_err());
    }

    #[test]
    fn test_backslashes_and_yaml_syntax_survive() {
        let dir = tempfile::tempdir().unwrap();
        let mut blog = Blog::new(dir.path()).unwrap();
        blog.config.author = r"DOMAIN\jcooper".to_string();

        let title = r#"Paths like C:\Users on Windows: a "guide" #1"#;
        create_post(&blog, title, None).unwrap();

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, title);
        assert_eq!(posts[0].author.as_deref(), Some(r"DOMAIN\jcooper"));
        assert!(posts[0].is_published());
        assert!(!posts[0].html.as_str().contains("title:"));
    }
}
