//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{BlogError, Result};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub root: String,

    // Directory
    pub source_dir: String,
    pub posts_dir: String,
    pub static_dir: String,
    pub public_dir: String,

    // Writing
    pub date_format: String,
    pub excerpt_length: usize,
    pub render_drafts: bool,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Layout
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    /// Footer attribution, defaults to the author
    pub copyright: Option<String>,

    #[serde(default)]
    pub manifest: ManifestConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "JocoBlog".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            root: "/".to_string(),

            source_dir: "src".to_string(),
            posts_dir: "posts".to_string(),
            static_dir: "static".to_string(),
            public_dir: "public".to_string(),

            date_format: "MMMM DD, YYYY".to_string(),
            excerpt_length: 250,
            render_drafts: true,
            highlight: HighlightConfig::default(),

            menu: Vec::new(),
            copyright: None,

            manifest: ManifestConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| BlogError::io(path, e))?;
        serde_yaml::from_str(&content).map_err(|source| BlogError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Text shown after the year in the footer
    pub fn attribution(&self) -> &str {
        self.copyright.as_deref().unwrap_or(&self.author)
    }
}

/// A navigation menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub path: String,
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "InspiredGitHub".to_string(),
            line_number: false,
        }
    }
}

/// Web app manifest configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    pub enable: bool,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub start_url: String,
    pub background_color: String,
    pub theme_color: String,
    pub display: String,
    pub icon: Option<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            enable: true,
            name: None,
            short_name: None,
            start_url: "/".to_string(),
            background_color: "#04f".to_string(),
            theme_color: "#04f".to_string(),
            display: "minimal-ui".to_string(),
            icon: None,
        }
    }
}
