//! Content loader - loads posts from the posts directory

use chrono::{DateTime, Local};
use std::cmp::Reverse;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, PostId, PostRecord};
use crate::error::{BlogError, Result};
use crate::helpers::{format_date, normalize_route, prune_excerpt};
use crate::Blog;

/// Loads posts from the source directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        let renderer = MarkdownRenderer::with_options(&blog.config.highlight);
        Self { blog, renderer }
    }

    /// Load all posts, newest first
    ///
    /// Undated posts (drafts) sort after every dated post. Files that fail to
    /// load are logged and skipped.
    pub fn load_posts(&self) -> Result<Vec<PostRecord>> {
        let posts_dir = &self.blog.posts_dir;
        if !posts_dir.exists() {
            tracing::warn!("Posts directory {:?} does not exist", posts_dir);
            return Ok(Vec::new());
        }

        let mut loaded = Vec::new();

        for entry in WalkDir::new(posts_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                match self.load_post(path) {
                    Ok(post) => loaded.push(post),
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        sort_newest_first(&mut loaded);
        tracing::debug!("Loaded {} posts from {:?}", loaded.len(), posts_dir);

        Ok(loaded.into_iter().map(|(_, post)| post).collect())
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<(Option<DateTime<Local>>, PostRecord)> {
        let content = fs::read_to_string(path).map_err(|e| BlogError::io(path, e))?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let file_stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        let id = path
            .strip_prefix(&self.blog.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        let published_at = if fm.draft {
            None
        } else {
            match (fm.date.as_deref(), fm.parse_date()) {
                (Some(raw), None) if !raw.trim().is_empty() => {
                    tracing::warn!("Unrecognised date {:?} in {:?}, treating as draft", raw, path);
                    None
                }
                (_, parsed) => parsed,
            }
        };

        let route = match fm.path.as_deref().and_then(normalize_route) {
            Some(route) => route,
            None => {
                let fallback = format!("/{}/", slug::slugify(&file_stem));
                tracing::debug!("{:?} has no path, serving at {}", path, fallback);
                fallback
            }
        };

        let title = fm.title.unwrap_or_else(|| file_stem.clone());

        let (excerpt_md, full_md) = MarkdownRenderer::split_excerpt(body);
        let html = self.renderer.render(&full_md);

        let excerpt = match (fm.excerpt, excerpt_md) {
            (Some(explicit), _) => Some(explicit),
            (None, Some(md)) => Some(prune_excerpt(
                self.renderer.render(&md).as_str(),
                self.blog.config.excerpt_length,
            )),
            (None, None) => Some(prune_excerpt(html.as_str(), self.blog.config.excerpt_length)),
        }
        .filter(|e| !e.is_empty());

        let mut post = PostRecord::new(PostId::new(id), route, title);
        post.author = fm.author.filter(|a| !a.trim().is_empty());
        post.date = published_at.map(|d| format_date(&d, &self.blog.config.date_format));
        post.excerpt = excerpt;
        post.html = html;

        Ok((published_at, post))
    }
}

/// Sort by publish date descending; undated last; ties by id for a stable build
fn sort_newest_first(posts: &mut [(Option<DateTime<Local>>, PostRecord)]) {
    posts.sort_by(|(a_date, a), (b_date, b)| {
        Reverse(a_date)
            .cmp(&Reverse(b_date))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Find the post served at `path`
pub fn resolve_post<'p>(posts: &'p [PostRecord], path: &str) -> Result<&'p PostRecord> {
    posts
        .iter()
        .find(|p| p.path == path)
        .ok_or_else(|| BlogError::PostNotFound(path.to_string()))
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    fn blog_with_posts(posts: &[(&str, &str)]) -> (TempDir, Blog) {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::default();
        let posts_dir = dir.path().join(&config.source_dir).join(&config.posts_dir);
        fs::create_dir_all(&posts_dir).unwrap();
        for (name, content) in posts {
            let file = posts_dir.join(name);
            fs::create_dir_all(file.parent().unwrap()).unwrap();
            fs::write(file, content).unwrap();
        }
        let blog = Blog::new(dir.path()).unwrap();
        (dir, blog)
    }

    #[test]
    fn test_posts_sorted_newest_first_drafts_last() {
        let (_dir, blog) = blog_with_posts(&[
            ("old.md", "---\ntitle: Old\npath: /old\ndate: 2019-05-01\n---\nold"),
            ("draft.md", "---\ntitle: Draft\npath: /draft\n---\ndraft"),
            ("new.md", "---\ntitle: New\npath: /new\ndate: 2021-02-03\n---\nnew"),
        ]);

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Old", "Draft"]);
        assert_eq!(posts[0].date.as_deref(), Some("February 03, 2021"));
        assert_eq!(posts[2].date, None);
    }

    #[test]
    fn test_post_fields() {
        let (_dir, blog) = blog_with_posts(&[(
            "intro.md",
            "---\ntitle: Intro\npath: /intro\nauthor: Joshua Cooper\ndate: 2020-01-01\n---\n# Hi\n\nSome *text*.",
        )]);

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let post = &posts[0];
        assert_eq!(post.id.as_str(), "posts/intro.md");
        assert_eq!(post.path, "/intro");
        assert_eq!(post.author.as_deref(), Some("Joshua Cooper"));
        assert!(post.html.as_str().contains("<em>text</em>"));
        assert_eq!(post.excerpt.as_deref(), Some("Hi Some text."));
    }

    #[test]
    fn test_missing_path_and_title_fall_back_to_file_name() {
        let (_dir, blog) = blog_with_posts(&[("My First Post.md", "---\ndate: 2020-01-01\n---\nbody")]);

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts[0].title, "My First Post");
        assert_eq!(posts[0].path, "/my-first-post/");
    }

    #[test]
    fn test_draft_flag_and_bad_date_clear_date() {
        let (_dir, blog) = blog_with_posts(&[
            ("a.md", "---\ntitle: A\ndate: 2020-01-01\ndraft: true\n---\n"),
            ("b.md", "---\ntitle: B\ndate: sometime soon\n---\n"),
        ]);

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert!(posts.iter().all(|p| p.date.is_none()));
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn test_more_marker_and_explicit_excerpt() {
        let (_dir, blog) = blog_with_posts(&[
            ("a.md", "---\ntitle: A\n---\nTeaser.\n<!-- more -->\nRest."),
            ("b.md", "---\ntitle: B\nexcerpt: Hand written\n---\nBody."),
        ]);

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let a = posts.iter().find(|p| p.title == "A").unwrap();
        let b = posts.iter().find(|p| p.title == "B").unwrap();
        assert_eq!(a.excerpt.as_deref(), Some("Teaser."));
        assert!(a.html.as_str().contains("Rest."));
        assert_eq!(b.excerpt.as_deref(), Some("Hand written"));
    }

    #[test]
    fn test_broken_post_is_skipped() {
        let (_dir, blog) = blog_with_posts(&[
            ("bad.md", "{\"title\": }\nbody"),
            ("good.md", "---\ntitle: Good\n---\nbody"),
            ("notes.txt", "not a post"),
        ]);

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Good");
    }

    #[test]
    fn test_missing_posts_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert!(ContentLoader::new(&blog).load_posts().unwrap().is_empty());
    }

    #[test]
    fn test_resolve_post() {
        let posts = vec![
            PostRecord::new(PostId::new("a"), "/a", "A"),
            PostRecord::new(PostId::new("b"), "/b", "B"),
        ];
        assert_eq!(resolve_post(&posts, "/b").unwrap().title, "B");
        let err = resolve_post(&posts, "/c").unwrap_err();
        assert!(matches!(err, BlogError::PostNotFound(p) if p == "/c"));
    }
}
