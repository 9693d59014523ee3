//! Generator module - writes the static site using the built-in templates

use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::content::{resolve_post, PostRecord};
use crate::error::{BlogError, Result};
use crate::helpers::url_for;
use crate::templates::{TemplateRenderer, STYLESHEET, STYLESHEET_PATH};
use crate::views::{Clock, IndexView, LayoutShell, PostView, Seo, SystemClock};
use crate::Blog;

const MANIFEST_FILE: &str = "manifest.webmanifest";

/// What a generation run produced
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Post pages written
    pub posts: usize,
    /// Drafts listed nowhere and not written
    pub skipped_drafts: usize,
    /// Files copied from the static directory
    pub assets: usize,
}

/// Static site generator
pub struct Generator<C: Clock = SystemClock> {
    blog: Blog,
    renderer: TemplateRenderer,
    clock: C,
}

impl Generator<SystemClock> {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        Self::with_clock(blog, SystemClock)
    }
}

impl<C: Clock + Copy> Generator<C> {
    pub fn with_clock(blog: &Blog, clock: C) -> Result<Self> {
        Ok(Self {
            blog: blog.clone(),
            renderer: TemplateRenderer::new()?,
            clock,
        })
    }

    /// Generate the entire site from posts sorted newest first
    pub fn generate(&self, posts: &[PostRecord]) -> Result<GenerateReport> {
        let public_dir = &self.blog.public_dir;
        fs::create_dir_all(public_dir).map_err(|e| BlogError::io(public_dir, e))?;

        let mut report = GenerateReport {
            assets: self.copy_static_assets()?,
            ..GenerateReport::default()
        };

        write_file(&public_dir.join(STYLESHEET_PATH), STYLESHEET)?;

        let index = self.render_index_page(posts)?;
        write_file(&public_dir.join("index.html"), &index)?;
        tracing::debug!("Generated index with {} posts", posts.len());

        let mut seen = HashSet::new();
        for post in posts {
            if !post.is_published() && !self.blog.config.render_drafts {
                tracing::debug!("Skipping draft {}", post.id);
                report.skipped_drafts += 1;
                continue;
            }

            if !seen.insert(post.path.as_str()) {
                tracing::warn!(
                    "Route {} is used by more than one post, {} overwrites it",
                    post.path,
                    post.id
                );
            }

            let output_path = self.output_path(&post.path)?;
            let html = self.render_post_page(post)?;
            write_file(&output_path, &html)?;
            tracing::debug!("Generated: {:?}", output_path);
            report.posts += 1;
        }

        if self.blog.config.manifest.enable {
            self.generate_manifest()?;
        }

        Ok(report)
    }

    /// Full HTML document for the home page
    pub fn render_index_page(&self, posts: &[PostRecord]) -> Result<String> {
        let listing = IndexView::new(posts).render(&self.renderer, &self.blog.config)?;
        self.shell()
            .render(&self.renderer, &Seo::new("Home"), &listing)
    }

    /// Full HTML document for one post
    pub fn render_post_page(&self, post: &PostRecord) -> Result<String> {
        let body = PostView::from_record(post).render(&self.renderer)?;
        self.shell()
            .render(&self.renderer, &Seo::new(&post.title), &body)
    }

    /// Full HTML document for the post served at `path`
    pub fn render_post_at(&self, posts: &[PostRecord], path: &str) -> Result<String> {
        self.render_post_page(resolve_post(posts, path)?)
    }

    /// A fresh shell per page, so toggle state never leaks between pages
    fn shell(&self) -> LayoutShell<'_, C> {
        LayoutShell::with_clock(&self.blog.config, self.clock)
    }

    /// `public/<route>/index.html`
    fn output_path(&self, route: &str) -> Result<PathBuf> {
        let relative = Path::new(route.trim_start_matches('/'));
        let stays_inside = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if relative.as_os_str().is_empty() || !stays_inside {
            return Err(BlogError::InvalidRoute(route.to_string()));
        }
        Ok(self.blog.public_dir.join(relative).join("index.html"))
    }

    /// Write the web app manifest
    fn generate_manifest(&self) -> Result<()> {
        let config = &self.blog.config;
        let manifest = &config.manifest;

        let icons = manifest
            .icon
            .as_deref()
            .map(|icon| {
                let file_name = Path::new(icon)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| icon.to_string());
                let source = self.blog.base_dir.join(icon);
                let dest = self.blog.public_dir.join(&file_name);
                fs::copy(&source, &dest).map_err(|e| BlogError::io(&source, e))?;
                Ok::<_, BlogError>(vec![ManifestIcon {
                    src: url_for(config, &file_name),
                    mime_type: mime_for(&file_name),
                }])
            })
            .transpose()?
            .unwrap_or_default();

        let data = WebManifest {
            name: manifest.name.as_deref().unwrap_or(&config.title),
            short_name: manifest.short_name.as_deref().unwrap_or(&config.title),
            description: &config.description,
            start_url: &manifest.start_url,
            background_color: &manifest.background_color,
            theme_color: &manifest.theme_color,
            display: &manifest.display,
            icons,
        };

        let json = serde_json::to_string_pretty(&data)?;
        write_file(&self.blog.public_dir.join(MANIFEST_FILE), &json)?;
        tracing::debug!("Generated {}", MANIFEST_FILE);

        Ok(())
    }

    /// Copy the static directory into the public directory
    fn copy_static_assets(&self) -> Result<usize> {
        let static_dir = &self.blog.static_dir;
        if !static_dir.exists() {
            return Ok(0);
        }

        let mut copied = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let Ok(relative) = path.strip_prefix(static_dir) else {
                continue;
            };
            let dest = self.blog.public_dir.join(relative);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(|e| BlogError::io(parent, e))?;
            }
            fs::copy(path, &dest).map_err(|e| BlogError::io(path, e))?;
            copied += 1;
        }

        tracing::debug!("Copied {} static files", copied);
        Ok(copied)
    }
}

#[derive(Serialize)]
struct WebManifest<'a> {
    name: &'a str,
    short_name: &'a str,
    description: &'a str,
    start_url: &'a str,
    background_color: &'a str,
    theme_color: &'a str,
    display: &'a str,
    icons: Vec<ManifestIcon>,
}

#[derive(Serialize)]
struct ManifestIcon {
    src: String,
    #[serde(rename = "type")]
    mime_type: &'static str,
}

fn mime_for(file_name: &str) -> &'static str {
    match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BlogError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| BlogError::io(path, e))
}
