//! Session collaborator contract.
//!
//! Authentication itself happens elsewhere; this module only models what
//! the dashboard needs from it: an auth state and, when authenticated, a
//! bearer token. The context is passed in explicitly at construction so
//! the store and filter engine are testable without a live auth subsystem.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Authentication state reported by the session collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthState {
    Loading,
    Authenticated,
    Unauthenticated,
}

/// The account behind the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: Option<String>,
}

/// An authenticated session holding the API bearer token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: SessionUser,
}

impl fmt::Debug for Session {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Session")
            .field("access_token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

/// Explicit session context handed to the dashboard at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    state: AuthState,
    session: Option<Session>,
}

impl SessionContext {
    /// Auth state is still being resolved; no API calls may be issued.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            state: AuthState::Loading,
            session: None,
        }
    }

    /// No authenticated user; the UI redirects to a login surface.
    #[must_use]
    pub const fn unauthenticated() -> Self {
        Self {
            state: AuthState::Unauthenticated,
            session: None,
        }
    }

    /// An authenticated session with its token.
    #[must_use]
    pub const fn authenticated(session: Session) -> Self {
        Self {
            state: AuthState::Authenticated,
            session: Some(session),
        }
    }

    #[must_use]
    pub const fn state(&self) -> AuthState {
        self.state
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated)
    }

    /// The bearer token, present only when authenticated.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        match self.state {
            AuthState::Authenticated => {
                self.session.as_ref().map(|session| session.access_token.as_str())
            }
            AuthState::Loading | AuthState::Unauthenticated => None,
        }
    }
}
