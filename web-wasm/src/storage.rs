//! localStorage-backed session persistence

use gloo::storage::{LocalStorage, Storage};
use leafscan_common::{Session, SessionStore};

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";

/// Session store over the browser's localStorage. Writes that fail
/// (storage disabled, quota) are swallowed; subsequent reads then
/// report a logged-out session.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl SessionStore for LocalStorageStore {
    fn get(&self) -> Session {
        Session {
            token: LocalStorage::get(TOKEN_KEY).ok(),
            display_name: LocalStorage::get(USERNAME_KEY).ok(),
        }
    }

    fn set(&self, token: &str, display_name: &str) {
        let _ = LocalStorage::set(TOKEN_KEY, token);
        let _ = LocalStorage::set(USERNAME_KEY, display_name);
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USERNAME_KEY);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_session_roundtrip() {
        let store = LocalStorageStore;
        store.clear();
        assert!(!store.get().is_authenticated());

        store.set("jwt-token", "Jane");
        let session = store.get();
        assert_eq!(session.token.as_deref(), Some("jwt-token"));
        assert_eq!(session.display_name.as_deref(), Some("Jane"));

        store.clear();
        assert!(!store.get().is_authenticated());
    }
}
