//! Content module - sources posts and turns them into records

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::FrontMatter;
pub use loader::{resolve_post, ContentLoader};
pub use markdown::MarkdownRenderer;
pub use post::{PostId, PostRecord, TrustedHtml};
