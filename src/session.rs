//! Session facts shared between the server and the rendered views
//!
//! The navigation bar never decides who the visitor is. It receives a
//! [`SessionContext`] at render time and branches on it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Capability that unlocks the admin dashboard link
pub const ADMIN_HOME: &str = "admin.home";

/// Name of the cookie holding the session id
pub const SESSION_COOKIE: &str = "portal_session";

/// Form field carrying the anti-forgery token on state-changing posts
pub const CSRF_FIELD: &str = "_token";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub display_name: String,
    pub avatar_url: String,
    pub capabilities: BTreeSet<String>,
    pub csrf_token: String,
}

impl AuthenticatedUser {
    /// Whether the user holds the named capability
    pub fn can(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionContext {
    #[default]
    Guest,
    Authenticated(AuthenticatedUser),
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionContext::Authenticated(_))
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            SessionContext::Authenticated(user) => Some(user),
            SessionContext::Guest => None,
        }
    }
}

/// Avatar used when the identity provider has no picture for the user
pub fn initials_avatar_url(display_name: &str) -> String {
    let name: String = display_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("+");
    format!("https://ui-avatars.com/api/?name={name}&color=7F9CF5&background=EBF4FF")
}

/// Extract the session id from a raw `Cookie` header value
pub fn session_id_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

pub fn session_cookie(session_id: &str) -> String {
    format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax")
}

pub fn expired_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(capabilities: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            display_name: "Ana Ruiz".to_string(),
            avatar_url: "/avatars/ana.png".to_string(),
            capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
            csrf_token: "tok".to_string(),
        }
    }

    #[test]
    fn test_guest_is_default() {
        let ctx = SessionContext::default();
        assert!(!ctx.is_authenticated());
        assert!(ctx.user().is_none());
    }

    #[test]
    fn test_capability_check() {
        assert!(user_with(&[ADMIN_HOME]).can(ADMIN_HOME));
        assert!(!user_with(&[]).can(ADMIN_HOME));
        assert!(!user_with(&["admin.users"]).can(ADMIN_HOME));
    }

    #[test]
    fn test_session_id_from_cookie_header() {
        assert_eq!(
            session_id_from_cookie_header("theme=dark; portal_session=abc123; lang=es"),
            Some("abc123")
        );
        assert_eq!(session_id_from_cookie_header("portal_session=xyz"), Some("xyz"));
        assert_eq!(session_id_from_cookie_header("theme=dark"), None);
        assert_eq!(session_id_from_cookie_header("portal_session="), None);
        assert_eq!(session_id_from_cookie_header(""), None);
    }

    #[test]
    fn test_initials_avatar_url() {
        assert_eq!(
            initials_avatar_url("Ana  Ruiz"),
            "https://ui-avatars.com/api/?name=Ana+Ruiz&color=7F9CF5&background=EBF4FF"
        );
    }

    #[test]
    fn test_expired_cookie_clears_value() {
        let cookie = expired_session_cookie();
        assert!(cookie.starts_with("portal_session=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
