//! Single post page

use serde::Serialize;

use crate::content::{PostRecord, TrustedHtml};
use crate::error::Result;
use crate::templates::TemplateRenderer;

/// The content shell of one post: title, optional byline, body
#[derive(Debug, Clone, Serialize)]
pub struct PostView<'a> {
    pub title: &'a str,
    pub author: Option<&'a str>,
    pub html: &'a TrustedHtml,
}

impl<'a> PostView<'a> {
    pub fn new(title: &'a str, author: Option<&'a str>, html: &'a TrustedHtml) -> Self {
        Self {
            title,
            author,
            html,
        }
    }

    pub fn from_record(post: &'a PostRecord) -> Self {
        Self::new(&post.title, post.author.as_deref(), &post.html)
    }

    /// Render the post fragment; the body is embedded verbatim
    pub fn render(&self, renderer: &TemplateRenderer) -> Result<TrustedHtml> {
        Ok(TrustedHtml::new(renderer.render_data("post.html", self)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_body() {
        let renderer = TemplateRenderer::new().unwrap();
        let body = TrustedHtml::new(r#"<p class="x">Hello & <em>welcome</em></p><script>run()</script>"#);

        let html = PostView::new("First Post", None, &body)
            .render(&renderer)
            .unwrap();
        let html = html.as_str();
        assert!(html.contains(r#"<h1 class="post-title">First Post</h1>"#));
        assert!(html.contains(body.as_str()));
    }

    #[test]
    fn test_no_byline_without_author() {
        let renderer = TemplateRenderer::new().unwrap();
        let body = TrustedHtml::new("<p>x</p>");

        let html = PostView::new("T", None, &body).render(&renderer).unwrap();
        assert!(!html.as_str().contains("<small"));
        assert!(!html.as_str().contains("post-author"));
    }

    #[test]
    fn test_byline_with_author() {
        let renderer = TemplateRenderer::new().unwrap();
        let body = TrustedHtml::new("<p>x</p>");

        let html = PostView::new("T", Some("A"), &body).render(&renderer).unwrap();
        assert!(html
            .as_str()
            .contains(r#"<small class="post-author">A</small>"#));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = TemplateRenderer::new().unwrap();
        let body = TrustedHtml::new("<p>same</p>");
        let view = PostView::new("T", Some("A"), &body);

        assert_eq!(
            view.render(&renderer).unwrap(),
            view.render(&renderer).unwrap()
        );
    }
}
