//! Clip model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A unique identifier for a clip.
///
/// Ids are assigned by the API on creation and are opaque to this client;
/// they are never generated locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipId(String);

impl ClipId {
    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ClipId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ClipId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when parsing an unknown clip type name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown clip type: {0}")]
pub struct ParseClipTypeError(String);

/// The kind of content a clip holds.
///
/// Drives iconography and filtering, not stored behavior. The set is
/// closed; user-defined categories go through tags instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipType {
    #[default]
    Article,
    Code,
    Quote,
    Link,
    Work,
}

impl ClipType {
    /// Every clip type, in display order, for populating filter controls.
    pub const ALL: [Self; 5] = [Self::Article, Self::Code, Self::Quote, Self::Link, Self::Work];

    /// Whether drafts of this type must carry a URL.
    #[must_use]
    pub const fn requires_url(self) -> bool {
        matches!(self, Self::Link)
    }

    /// Wire/display name, always lowercase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Code => "code",
            Self::Quote => "quote",
            Self::Link => "link",
            Self::Work => "work",
        }
    }
}

impl fmt::Display for ClipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClipType {
    type Err = ParseClipTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "article" => Ok(Self::Article),
            "code" => Ok(Self::Code),
            "quote" => Ok(Self::Quote),
            "link" => Ok(Self::Link),
            "work" => Ok(Self::Work),
            other => Err(ParseClipTypeError(other.to_string())),
        }
    }
}

/// A saved clip: an article, code snippet, quote, or link with tags.
///
/// The record is canonical as returned by the API; `id` and `created_at`
/// are server-assigned and never change. Earlier API deployments emitted
/// the id as `_id`, so deserialization accepts both names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    /// Unique identifier
    #[serde(alias = "_id")]
    pub id: ClipId,
    /// Display title
    pub title: String,
    /// Free-form text body
    pub content: String,
    /// Content kind
    #[serde(rename = "type", default)]
    pub clip_type: ClipType,
    /// Source URL, present for links and optional elsewhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Lowercase tags, no duplicates
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation timestamp, server-assigned
    pub created_at: DateTime<Utc>,
}

impl Clip {
    /// Check whether this clip carries the given (lowercase) tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}
