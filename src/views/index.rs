//! Post listing for the home page

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{PostRecord, TrustedHtml};
use crate::error::Result;
use crate::helpers::url_for;
use crate::templates::TemplateRenderer;

/// One entry of the post listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostLink {
    pub path: String,
    pub title: String,
    pub date: String,
    pub excerpt: Option<String>,
}

/// Link entries for every published post, in input order
///
/// Posts without a date are drafts and are left out silently. The input is
/// expected to be sorted already and is never reordered here.
pub fn index_entries(posts: &[PostRecord]) -> Vec<PostLink> {
    posts
        .iter()
        .filter(|post| post.is_published())
        .filter_map(|post| {
            Some(PostLink {
                path: post.path.clone(),
                title: post.title.clone(),
                date: post.date.clone()?,
                excerpt: post.excerpt.clone(),
            })
        })
        .collect()
}

/// The home page listing
pub struct IndexView {
    entries: Vec<PostLink>,
}

#[derive(Serialize)]
struct IndexData<'a> {
    posts: Vec<LinkData<'a>>,
}

#[derive(Serialize)]
struct LinkData<'a> {
    href: String,
    title: &'a str,
    date: &'a str,
    excerpt: Option<&'a str>,
}

impl IndexView {
    pub fn new(posts: &[PostRecord]) -> Self {
        Self {
            entries: index_entries(posts),
        }
    }

    pub fn entries(&self) -> &[PostLink] {
        &self.entries
    }

    /// Render the listing fragment
    pub fn render(&self, renderer: &TemplateRenderer, config: &SiteConfig) -> Result<TrustedHtml> {
        let data = IndexData {
            posts: self
                .entries
                .iter()
                .map(|entry| LinkData {
                    href: url_for(config, &entry.path),
                    title: &entry.title,
                    date: &entry.date,
                    excerpt: entry.excerpt.as_deref(),
                })
                .collect(),
        };

        Ok(TrustedHtml::new(renderer.render_data("index.html", &data)?))
    }
}
