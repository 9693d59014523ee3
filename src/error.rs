//! Library error type

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or rendering the blog
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid site config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid front-matter: {0}")]
    FrontMatter(String),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("no post is served at {0:?}")]
    PostNotFound(String),

    #[error("route {0:?} does not stay inside the public directory")]
    InvalidRoute(String),
}

impl BlogError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BlogError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = BlogError> = std::result::Result<T, E>;
