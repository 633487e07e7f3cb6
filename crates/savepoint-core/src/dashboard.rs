//! Dashboard orchestration: session gate, confirmed mutations, filtering.
//!
//! Mutations are confirm-then-apply: the in-memory collection changes only
//! after the API accepts the operation, so a failed request never leaves
//! the view out of step with the server. Execution is single-threaded and
//! cooperative; mutating operations take `&mut self`, so a second
//! submission cannot start while one is awaited.

use std::collections::BTreeSet;

use crate::api::ClipApiClient;
use crate::draft::ClipDraft;
use crate::error::{Error, Result};
use crate::filter::{collect_tags, filter_clips, FilterCriteria};
use crate::models::{Clip, ClipId, ClipType};
use crate::session::SessionContext;
use crate::store::ClipStore;

/// Client-side state behind the clip dashboard.
pub struct Dashboard {
    api: ClipApiClient,
    session: SessionContext,
    store: ClipStore,
    criteria: FilterCriteria,
}

impl Dashboard {
    /// Build a dashboard for the given API client and session context.
    ///
    /// The collection starts empty; call [`refresh`](Self::refresh) once
    /// the session is authenticated.
    #[must_use]
    pub fn new(api: ClipApiClient, session: SessionContext) -> Self {
        Self {
            api,
            session,
            store: ClipStore::new(),
            criteria: FilterCriteria::new(),
        }
    }

    /// Swap in a new session context, e.g. after login or logout.
    pub fn set_session(&mut self, session: SessionContext) {
        self.session = session;
    }

    #[must_use]
    pub const fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Replace the collection with the server's current state.
    pub async fn refresh(&mut self) -> Result<()> {
        let clips = self.api.list_clips(self.token()?).await?;
        self.store.load(clips);
        Ok(())
    }

    /// Validate a draft, create it on the server, and insert the
    /// canonical record at the head of the collection.
    ///
    /// Validation failures are returned before any request is issued.
    pub async fn create(&mut self, draft: &ClipDraft) -> Result<Clip> {
        let payload = draft.validate()?;
        let clip = self.api.create_clip(self.token()?, &payload).await?;
        if let Err(error) = self.store.insert(clip.clone()) {
            tracing::warn!(%error, "clip collection diverged from server, reloading");
            self.refresh().await?;
        }
        Ok(clip)
    }

    /// Validate a draft and replace the identified clip wholesale,
    /// server first.
    ///
    /// When the clip is no longer in the collection (deleted from another
    /// session), the collection is reloaded and [`Error::NotFound`] is
    /// returned so the UI can tell the user.
    pub async fn save(&mut self, id: &ClipId, draft: &ClipDraft) -> Result<Clip> {
        let payload = draft.validate()?;
        let Some(existing) = self.store.get(id).cloned() else {
            tracing::warn!(clip_id = %id, "edited clip is gone from the collection, reloading");
            self.refresh().await?;
            return Err(Error::NotFound(id.clone()));
        };

        let updated = Clip {
            id: existing.id,
            title: payload.title,
            content: payload.content,
            clip_type: draft.clip_type,
            url: payload.url,
            tags: payload.tags,
            created_at: existing.created_at,
        };
        let clip = self.api.update_clip(self.token()?, &updated).await?;
        self.store.update(clip.clone())?;
        Ok(clip)
    }

    /// Delete a clip, server first; the collection shrinks only after the
    /// API confirms. Store removal is idempotent.
    pub async fn delete(&mut self, id: &ClipId) -> Result<()> {
        self.api.delete_clip(self.token()?, id).await?;
        self.store.remove(id);
        Ok(())
    }

    /// Clips passing the current filter, newest first.
    #[must_use]
    pub fn visible_clips(&self) -> Vec<Clip> {
        filter_clips(&self.store.snapshot(), &self.criteria)
    }

    /// The full collection, unfiltered, newest first.
    #[must_use]
    pub fn clips(&self) -> Vec<Clip> {
        self.store.snapshot()
    }

    /// Every tag in use across the full collection, for the sidebar.
    #[must_use]
    pub fn available_tags(&self) -> BTreeSet<String> {
        collect_tags(&self.store.snapshot())
    }

    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.criteria.is_active()
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.set_search(text);
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.criteria.toggle_tag(tag);
    }

    pub fn toggle_type(&mut self, clip_type: ClipType) {
        self.criteria.toggle_type(clip_type);
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear();
    }

    fn token(&self) -> Result<&str> {
        self.session.bearer_token().ok_or(Error::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Session, SessionUser};

    fn api() -> ClipApiClient {
        // Nothing in these tests reaches the network; the gate or the
        // validator rejects first.
        ClipApiClient::new("http://127.0.0.1:9").unwrap()
    }

    fn authenticated() -> SessionContext {
        SessionContext::authenticated(Session {
            access_token: "tok".to_string(),
            user: SessionUser {
                id: "u1".to_string(),
                email: None,
            },
        })
    }

    #[tokio::test]
    async fn refresh_is_gated_on_authentication() {
        let mut dashboard = Dashboard::new(api(), SessionContext::unauthenticated());
        assert!(matches!(
            dashboard.refresh().await,
            Err(Error::Unauthenticated)
        ));

        dashboard.set_session(SessionContext::loading());
        assert!(matches!(
            dashboard.refresh().await,
            Err(Error::Unauthenticated)
        ));
    }

    #[tokio::test]
    async fn delete_is_gated_on_authentication() {
        let mut dashboard = Dashboard::new(api(), SessionContext::loading());
        let result = dashboard.delete(&ClipId::from("1")).await;
        assert!(matches!(result, Err(Error::Unauthenticated)));
    }

    #[tokio::test]
    async fn create_rejects_invalid_drafts_before_any_request() {
        // Authenticated, but the draft is invalid: validation must win.
        let mut dashboard = Dashboard::new(api(), authenticated());
        let draft = ClipDraft::new(ClipType::Article);
        let result = dashboard.create(&draft).await;
        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(dashboard.clips().is_empty());
    }

    #[tokio::test]
    async fn save_rejects_invalid_drafts_before_any_request() {
        let mut dashboard = Dashboard::new(api(), authenticated());
        let draft = ClipDraft::new(ClipType::Code);
        let result = dashboard.save(&ClipId::from("1"), &draft).await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn filter_passthroughs_drive_the_criteria() {
        let mut dashboard = Dashboard::new(api(), SessionContext::loading());
        assert!(!dashboard.has_active_filters());

        dashboard.set_search("grid");
        dashboard.toggle_tag("css");
        dashboard.toggle_type(ClipType::Code);
        assert!(dashboard.has_active_filters());
        assert_eq!(dashboard.criteria().selected_type, Some(ClipType::Code));

        dashboard.clear_filters();
        assert!(!dashboard.has_active_filters());
        assert_eq!(dashboard.criteria(), &FilterCriteria::default());
    }
}
