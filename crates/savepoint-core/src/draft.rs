//! Draft composition and validation for the new/edit clip forms.
//!
//! Validation runs locally, before any network call; a rejected draft
//! never reaches the API client.

use serde::Serialize;
use thiserror::Error;

use crate::models::ClipType;
use crate::util::normalize_text_option;

/// Validation failures surfaced inline next to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,
    #[error("Content must not be empty")]
    EmptyContent,
    #[error("A URL is required for link clips")]
    MissingUrl,
}

/// JSON body for `POST /api/clips` and the editable part of a PUT.
///
/// The server assigns `id`, `createdAt`, and the default type on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewClipPayload {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// An in-progress clip being composed in a form, before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipDraft {
    pub title: String,
    pub content: String,
    pub clip_type: ClipType,
    pub url: Option<String>,
    pub tags: Vec<String>,
}

impl ClipDraft {
    /// Start an empty draft of the given type.
    #[must_use]
    pub fn new(clip_type: ClipType) -> Self {
        Self {
            clip_type,
            ..Self::default()
        }
    }

    /// Merge raw tag input into the draft's tag set.
    ///
    /// Accepts comma- or newline-delimited text as typed into the tag
    /// field; parsed tags already present on the draft are dropped.
    pub fn add_tags_from_input(&mut self, raw: &str) {
        for tag in parse_tag_input(raw) {
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
    }

    /// Validate the draft and produce the trimmed wire payload.
    pub fn validate(&self) -> Result<NewClipPayload, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let content = self.content.trim();
        if content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }

        let url = normalize_text_option(self.url.clone());
        if self.clip_type.requires_url() && url.is_none() {
            return Err(ValidationError::MissingUrl);
        }

        Ok(NewClipPayload {
            title: title.to_string(),
            content: content.to_string(),
            tags: self.tags.clone(),
            url,
        })
    }
}

/// Split raw tag input into normalized tags.
///
/// Segments are split on commas and newlines, trimmed, lowercased, empty
/// segments discarded, and duplicates dropped preserving first-seen order.
#[must_use]
pub fn parse_tag_input(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for segment in raw.split([',', '\n']) {
        let tag = segment.trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_draft() -> ClipDraft {
        ClipDraft {
            title: "  Grid cheatsheet  ".to_string(),
            content: "display: grid;".to_string(),
            clip_type: ClipType::Code,
            url: None,
            tags: vec!["css".to_string()],
        }
    }

    #[test]
    fn parse_tag_input_normalizes_and_dedupes() {
        assert_eq!(parse_tag_input("Work, work, WORK"), vec!["work"]);
    }

    #[test]
    fn parse_tag_input_splits_on_commas_and_newlines() {
        assert_eq!(
            parse_tag_input("rust, Web\nasync ,, \n"),
            vec!["rust", "web", "async"]
        );
    }

    #[test]
    fn parse_tag_input_handles_empty_input() {
        assert_eq!(parse_tag_input(""), Vec::<String>::new());
        assert_eq!(parse_tag_input(" , ,\n"), Vec::<String>::new());
    }

    #[test]
    fn add_tags_dedupes_against_existing() {
        let mut draft = valid_draft();
        draft.add_tags_from_input("CSS, grid");
        assert_eq!(draft.tags, vec!["css", "grid"]);
    }

    #[test]
    fn validate_trims_title_and_content() {
        let payload = valid_draft().validate().unwrap();
        assert_eq!(payload.title, "Grid cheatsheet");
        assert_eq!(payload.content, "display: grid;");
    }

    #[test]
    fn validate_rejects_whitespace_only_title() {
        let mut draft = valid_draft();
        draft.title = "   ".to_string();
        assert_eq!(draft.validate().unwrap_err(), ValidationError::EmptyTitle);
    }

    #[test]
    fn validate_rejects_empty_content() {
        let mut draft = valid_draft();
        draft.content = "\n\t".to_string();
        assert_eq!(draft.validate().unwrap_err(), ValidationError::EmptyContent);
    }

    #[test]
    fn validate_requires_url_for_links() {
        let mut draft = valid_draft();
        draft.clip_type = ClipType::Link;
        assert_eq!(draft.validate().unwrap_err(), ValidationError::MissingUrl);

        draft.url = Some("https://vercel.com/docs".to_string());
        let payload = draft.validate().unwrap();
        assert_eq!(payload.url.as_deref(), Some("https://vercel.com/docs"));
    }

    #[test]
    fn validate_drops_blank_optional_url() {
        let mut draft = valid_draft();
        draft.url = Some("   ".to_string());
        let payload = draft.validate().unwrap();
        assert_eq!(payload.url, None);
    }

    #[test]
    fn payload_omits_absent_url_on_the_wire() {
        let payload = valid_draft().validate().unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("url").is_none());
        assert_eq!(value["tags"], serde_json::json!(["css"]));
    }
}
