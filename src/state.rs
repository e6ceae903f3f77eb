#![cfg(feature = "server")]
//! In-memory session store standing in for the host's session subsystem

use crate::session::{AuthenticatedUser, SessionContext};
use lazy_static::lazy_static;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown session")]
    UnknownSession,
    #[error("anti-forgery token mismatch")]
    TokenMismatch,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, AuthenticatedUser>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for a user and return its id.
    /// Every session gets its own anti-forgery token.
    pub fn open(
        &mut self,
        display_name: &str,
        avatar_url: &str,
        capabilities: BTreeSet<String>,
    ) -> String {
        let session_id = uuid::Uuid::new_v4().simple().to_string();
        let user = AuthenticatedUser {
            display_name: display_name.to_string(),
            avatar_url: avatar_url.to_string(),
            capabilities,
            csrf_token: uuid::Uuid::new_v4().simple().to_string(),
        };
        self.sessions.insert(session_id.clone(), user);
        log::debug!("Session opened for '{}'", display_name);
        session_id
    }

    pub fn context(&self, session_id: Option<&str>) -> SessionContext {
        session_id
            .and_then(|id| self.sessions.get(id))
            .cloned()
            .map(SessionContext::Authenticated)
            .unwrap_or_default()
    }

    /// Close a session. The token must match the one issued with the session.
    pub fn terminate(
        &mut self,
        session_id: &str,
        csrf_token: &str,
    ) -> Result<AuthenticatedUser, SessionError> {
        let user = self
            .sessions
            .get(session_id)
            .ok_or(SessionError::UnknownSession)?;
        if user.csrf_token != csrf_token {
            return Err(SessionError::TokenMismatch);
        }
        self.sessions
            .remove(session_id)
            .ok_or(SessionError::UnknownSession)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

// Singleton
lazy_static! {
    pub static ref SESSION_STORE: Arc<tokio::sync::Mutex<SessionStore>> =
        Arc::new(tokio::sync::Mutex::new(SessionStore::new()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ADMIN_HOME;

    fn admin_caps() -> BTreeSet<String> {
        BTreeSet::from([ADMIN_HOME.to_string()])
    }

    #[test]
    fn test_open_and_read_context() {
        let mut store = SessionStore::new();
        assert!(store.is_empty());
        let id = store.open("Ana", "/a.png", admin_caps());

        let ctx = store.context(Some(&id));
        let user = ctx.user().expect("session should be authenticated");
        assert_eq!(user.display_name, "Ana");
        assert_eq!(user.avatar_url, "/a.png");
        assert!(user.can(ADMIN_HOME));
        assert!(!user.csrf_token.is_empty());
        assert_ne!(user.csrf_token, id);
    }

    #[test]
    fn test_unknown_or_missing_session_is_guest() {
        let mut store = SessionStore::new();
        store.open("Ana", "/a.png", BTreeSet::new());
        assert_eq!(store.context(None), SessionContext::Guest);
        assert_eq!(store.context(Some("nope")), SessionContext::Guest);
    }

    #[test]
    fn test_terminate_requires_matching_token() {
        let mut store = SessionStore::new();
        let id = store.open("Ana", "/a.png", BTreeSet::new());
        let token = store.context(Some(&id)).user().unwrap().csrf_token.clone();

        assert_eq!(
            store.terminate(&id, "forged"),
            Err(SessionError::TokenMismatch)
        );
        assert_eq!(store.len(), 1);

        let user = store.terminate(&id, &token).unwrap();
        assert_eq!(user.display_name, "Ana");
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.context(Some(&id)), SessionContext::Guest);
    }

    #[test]
    fn test_terminate_unknown_session() {
        let mut store = SessionStore::new();
        assert_eq!(
            store.terminate("missing", "tok"),
            Err(SessionError::UnknownSession)
        );
    }

    #[tokio::test]
    async fn test_shared_store_is_reachable() {
        let id = SESSION_STORE
            .lock()
            .await
            .open("Luis", "/l.png", BTreeSet::new());
        let ctx = SESSION_STORE.lock().await.context(Some(&id));
        assert!(ctx.is_authenticated());
    }
}
