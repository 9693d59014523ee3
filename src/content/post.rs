//! Post model

use serde::{Serialize, Serializer};
use std::fmt;

/// Opaque unique key assigned to a post by the content source
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pre-rendered markup that is embedded without escaping
///
/// Only the Markdown renderer and the views produce values of this type.
/// Anything held here is inserted verbatim into the page, so sanitising it
/// is the producer's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for TrustedHtml {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// One sourced Markdown document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRecord {
    /// Key assigned by the content source
    pub id: PostId,

    /// Public route the post is served at
    pub path: String,

    /// Display title
    pub title: String,

    pub author: Option<String>,

    /// Formatted publish date; a post without one is a draft
    pub date: Option<String>,

    /// Short plain-text summary
    pub excerpt: Option<String>,

    /// Rendered body
    pub html: TrustedHtml,
}

impl PostRecord {
    /// Create a record with only the fields every post has
    pub fn new(id: PostId, path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
            title: title.into(),
            author: None,
            date: None,
            excerpt: None,
            html: TrustedHtml::default(),
        }
    }

    /// Whether the post has a non-empty publish date
    pub fn is_published(&self) -> bool {
        self.date.as_deref().is_some_and(|d| !d.trim().is_empty())
    }
}
