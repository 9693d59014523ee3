//! Document head metadata

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::TrustedHtml;
use crate::error::Result;
use crate::helpers::url_for;
use crate::templates::TemplateRenderer;

/// Head tags for a page, built from its title and the site metadata
#[derive(Debug, Clone)]
pub struct Seo<'a> {
    pub title: &'a str,
}

#[derive(Serialize)]
struct SeoData<'a> {
    title: &'a str,
    full_title: String,
    description: &'a str,
    author: &'a str,
    manifest_href: Option<String>,
    theme_color: &'a str,
}

impl<'a> Seo<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// `<title>` text: "Page | Site", or just the site title when they match
    pub fn full_title(&self, config: &SiteConfig) -> String {
        if self.title.is_empty() || self.title == config.title {
            config.title.clone()
        } else {
            format!("{} | {}", self.title, config.title)
        }
    }

    pub fn render(&self, renderer: &TemplateRenderer, config: &SiteConfig) -> Result<TrustedHtml> {
        let data = SeoData {
            title: self.title,
            full_title: self.full_title(config),
            description: &config.description,
            author: &config.author,
            manifest_href: config
                .manifest
                .enable
                .then(|| url_for(config, "manifest.webmanifest")),
            theme_color: &config.manifest.theme_color,
        };

        Ok(TrustedHtml::new(
            renderer.render_data("partials/seo.html", &data)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            title: "JocoBlog".to_string(),
            description: "Notes on Rust & friends".to_string(),
            author: "Joshua Cooper".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_full_title() {
        let config = config();
        assert_eq!(Seo::new("Home").full_title(&config), "Home | JocoBlog");
        assert_eq!(Seo::new("JocoBlog").full_title(&config), "JocoBlog");
        assert_eq!(Seo::new("").full_title(&config), "JocoBlog");
    }

    #[test]
    fn test_render_head() {
        let renderer = TemplateRenderer::new().unwrap();
        let head = Seo::new("Home").render(&renderer, &config()).unwrap();
        let head = head.as_str();

        assert!(head.contains("<title>Home | JocoBlog</title>"));
        assert!(head.contains(r#"<meta name="description" content="Notes on Rust &amp; friends">"#));
        assert!(head.contains(r#"<meta property="og:title" content="Home">"#));
        assert!(head.contains(r#"<link rel="manifest" href="/manifest.webmanifest">"#));
    }

    #[test]
    fn test_no_manifest_link_when_disabled() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut config = config();
        config.manifest.enable = false;

        let head = Seo::new("Home").render(&renderer, &config).unwrap();
        assert!(!head.as_str().contains("manifest"));
    }
}
