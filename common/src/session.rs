//! Session model and the persisted-credential seam
//!
//! The store is polled, not push-based: consumers re-derive UI
//! visibility after any mutation.

/// Authenticated-user state read from the key-value store.
///
/// A present token means the user is authenticated and the upload
/// surface is reachable; everything else reads as logged out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub display_name: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Greeting name; "User" when nothing was stored.
    pub fn greeting_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("User")
    }
}

/// Two opaque keys in client-side storage, behind a seam so the app
/// shell can be exercised against an in-memory fake.
pub trait SessionStore {
    fn get(&self) -> Session;
    /// Persists both keys. Storage failures are swallowed: a failed
    /// write degrades to logged-out reads.
    fn set(&self, token: &str, display_name: &str);
    fn clear(&self);
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    session: std::cell::RefCell<Session>,
}

impl SessionStore for MemoryStore {
    fn get(&self) -> Session {
        self.session.borrow().clone()
    }

    fn set(&self, token: &str, display_name: &str) {
        *self.session.borrow_mut() = Session {
            token: Some(token.to_string()),
            display_name: Some(display_name.to_string()),
        };
    }

    fn clear(&self) {
        *self.session.borrow_mut() = Session::anonymous();
    }
}

/// Display name for a fresh login: the backend's first name when it
/// sent one, otherwise the local part of the email.
pub fn display_name_for(first_name: &str, email: &str) -> String {
    if !first_name.trim().is_empty() {
        return first_name.trim().to_string();
    }
    email.split('@').next().unwrap_or(email).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_authenticated_iff_token_present() {
        assert!(!Session::anonymous().is_authenticated());
        let session = Session {
            token: Some("jwt".to_string()),
            display_name: None,
        };
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_greeting_name_fallback() {
        assert_eq!(Session::anonymous().greeting_name(), "User");
        let session = Session {
            token: Some("jwt".to_string()),
            display_name: Some("Jane".to_string()),
        };
        assert_eq!(session.greeting_name(), "Jane");
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::default();
        assert!(!store.get().is_authenticated());

        store.set("jwt", "Jane");
        let session = store.get();
        assert_eq!(session.token.as_deref(), Some("jwt"));
        assert_eq!(session.display_name.as_deref(), Some("Jane"));

        store.clear();
        assert!(!store.get().is_authenticated());
        assert!(store.get().display_name.is_none());
    }

    #[test]
    fn test_display_name_prefers_first_name() {
        assert_eq!(display_name_for("Jane", "jane.doe@example.com"), "Jane");
    }

    #[test]
    fn test_display_name_falls_back_to_email_local_part() {
        assert_eq!(display_name_for("", "jane.doe@example.com"), "jane.doe");
        assert_eq!(display_name_for("  ", "nobody"), "nobody");
    }
}
