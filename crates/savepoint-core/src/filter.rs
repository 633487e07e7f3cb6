//! Filter engine: derives the visible subset of the clip collection.
//!
//! Filtering is a pure projection of (collection, criteria). It never
//! reorders the collection, only removes entries.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{Clip, ClipType};

/// Active filter dimensions for the dashboard.
///
/// The default value matches every clip. Dimensions combine with logical
/// AND: a clip must satisfy search text, selected tags, and selected type
/// simultaneously.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title or content
    pub search_text: String,
    /// A clip must carry every selected tag (AND, not OR)
    pub selected_tags: BTreeSet<String>,
    /// Single-valued type filter; `None` means no type filter
    pub selected_type: Option<ClipType>,
}

impl FilterCriteria {
    /// Criteria that match everything
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any dimension is active, for the "clear filters" control.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_text.is_empty()
            || !self.selected_tags.is_empty()
            || self.selected_type.is_some()
    }

    /// Check a clip against every active dimension.
    #[must_use]
    pub fn matches(&self, clip: &Clip) -> bool {
        self.matches_search(clip) && self.matches_tags(clip) && self.matches_type(clip)
    }

    fn matches_search(&self, clip: &Clip) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        clip.title.to_lowercase().contains(&needle)
            || clip.content.to_lowercase().contains(&needle)
    }

    fn matches_tags(&self, clip: &Clip) -> bool {
        self.selected_tags.iter().all(|tag| clip.has_tag(tag))
    }

    fn matches_type(&self, clip: &Clip) -> bool {
        self.selected_type
            .is_none_or(|selected| selected == clip.clip_type)
    }

    /// Replace the search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Add the tag if absent, remove it if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        let tag = tag.to_lowercase();
        if !self.selected_tags.remove(&tag) {
            self.selected_tags.insert(tag);
        }
    }

    /// Select the type, or clear the selection when it is already selected.
    pub fn toggle_type(&mut self, clip_type: ClipType) {
        if self.selected_type == Some(clip_type) {
            self.selected_type = None;
        } else {
            self.selected_type = Some(clip_type);
        }
    }

    /// Reset every dimension at once.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Order-preserving projection of `clips` through `criteria`.
#[must_use]
pub fn filter_clips(clips: &[Clip], criteria: &FilterCriteria) -> Vec<Clip> {
    clips
        .iter()
        .filter(|clip| criteria.matches(clip))
        .cloned()
        .collect()
}

/// Union of every clip's tags, for populating the tag filter control.
///
/// Computed from the full collection, not the filtered subset, so tag
/// options stay stable while the user filters.
#[must_use]
pub fn collect_tags(clips: &[Clip]) -> BTreeSet<String> {
    clips
        .iter()
        .flat_map(|clip| clip.tags.iter().cloned())
        .collect()
}
