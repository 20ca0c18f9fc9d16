//! Signed-in user session.
//!
//! Pages never look the session up on their own; they receive a
//! [`SessionContext`] wrapping whichever [`SessionStore`] the front-end uses.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Identity of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    #[serde(default)]
    pub token: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            token: token.into(),
        }
    }
}

/// Backend trait for session storage.
pub trait SessionStore: Send + Sync {
    /// Load the stored session, if any.
    fn load(&self) -> Result<Option<Session>, SessionError>;

    /// Store a session, replacing any previous one.
    fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Remove the stored session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Session access handed to pages.
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// The stored session, if any.
    pub fn current(&self) -> Result<Option<Session>, SessionError> {
        self.store.load()
    }

    /// The signed-in user's id.
    pub fn user_id(&self) -> Result<String, SessionError> {
        self.current()?
            .map(|session| session.user_id)
            .ok_or(SessionError::NotSignedIn)
    }

    pub fn login(&self, session: &Session) -> Result<(), SessionError> {
        log::info!("signing in user {}", session.user_id);
        self.store.save(session)
    }

    pub fn logout(&self) -> Result<(), SessionError> {
        log::info!("signing out");
        self.store.clear()
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext").finish_non_exhaustive()
    }
}
