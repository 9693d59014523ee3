//! Configuration module

mod site;

pub use site::HighlightConfig;
pub use site::ManifestConfig;
pub use site::MenuItem;
pub use site::SiteConfig;
