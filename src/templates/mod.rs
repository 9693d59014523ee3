//! Built-in blog templates using the Tera template engine
//!
//! Templates are embedded in the binary. Autoescaping stays on, so every
//! value is escaped unless the template marks it `safe`; only trusted
//! markup and pre-encoded hrefs are.

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::Result;

/// Stylesheet written next to the generated pages
pub const STYLESHEET: &str = include_str!("blog/style.css");

/// Route of the stylesheet under the site root
pub const STYLESHEET_PATH: &str = "style.css";

/// Template renderer with the embedded blog theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("blog/layout.html")),
            ("index.html", include_str!("blog/index.html")),
            ("post.html", include_str!("blog/post.html")),
            ("partials/nav.html", include_str!("blog/partials/nav.html")),
            ("partials/seo.html", include_str!("blog/partials/seo.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render a template from any serializable context
    pub fn render_data<T: Serialize>(&self, template_name: &str, data: &T) -> Result<String> {
        let context = Context::from_serialize(data)?;
        self.render(template_name, &context)
    }
}
