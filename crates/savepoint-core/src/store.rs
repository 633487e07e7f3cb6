//! In-memory clip collection for the current session.

use crate::error::{Error, Result};
use crate::models::{Clip, ClipId};

/// Session-scoped clip collection, kept newest-first by creation time.
///
/// The store is authoritative for this session only; the API owns
/// persistence. Mutations are applied after the API confirms them, so a
/// failed request never changes what the user sees.
#[derive(Debug, Clone, Default)]
pub struct ClipStore {
    clips: Vec<Clip>,
}

impl ClipStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self { clips: Vec::new() }
    }

    /// Replace the entire collection, e.g. after the initial fetch.
    ///
    /// The incoming sequence is re-sorted newest-first; an empty sequence
    /// yields an empty collection.
    pub fn load(&mut self, mut clips: Vec<Clip>) {
        clips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.clips = clips;
    }

    /// Add a newly created clip at the head of the collection.
    ///
    /// Fails with [`Error::DuplicateId`] if the id is already present.
    pub fn insert(&mut self, clip: Clip) -> Result<()> {
        if self.contains(&clip.id) {
            return Err(Error::DuplicateId(clip.id));
        }
        self.clips.insert(0, clip);
        Ok(())
    }

    /// Replace the clip with the matching id wholesale.
    ///
    /// Fails with [`Error::NotFound`] if the id is absent, leaving the
    /// collection unchanged. `created_at` is never mutated by callers, so
    /// ordering is preserved.
    pub fn update(&mut self, clip: Clip) -> Result<()> {
        match self.clips.iter_mut().find(|candidate| candidate.id == clip.id) {
            Some(slot) => {
                *slot = clip;
                Ok(())
            }
            None => Err(Error::NotFound(clip.id)),
        }
    }

    /// Remove the clip with the given id.
    ///
    /// Removing an absent id is a no-op: deletes may race with another
    /// session or a double-click, and both outcomes are fine.
    pub fn remove(&mut self, id: &ClipId) {
        self.clips.retain(|clip| &clip.id != id);
    }

    /// Look up a clip by id.
    #[must_use]
    pub fn get(&self, id: &ClipId) -> Option<&Clip> {
        self.clips.iter().find(|clip| &clip.id == id)
    }

    /// Whether a clip with this id is present.
    #[must_use]
    pub fn contains(&self, id: &ClipId) -> bool {
        self.get(id).is_some()
    }

    /// Number of clips in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Owned copy of the full collection, newest first.
    ///
    /// The copy shares nothing with internal storage, so callers cannot
    /// bypass the store's invariants by mutating it.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Clip> {
        self.clips.clone()
    }
}
