//! Session persistence across page reloads.
//!
//! Two keys in local storage: the opaque credential token and the
//! JSON-serialized profile. They are only ever meaningful as a pair; a
//! lone key or an unparseable profile is scrubbed on load so callers never
//! see a half-populated session.

use crate::model::{Session, UserProfile};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Minimal key-value seam so the store can run against browser local
/// storage in the app and an in-memory map in tests.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// Browser `localStorage` backend. Storage may be unavailable (e.g.
/// disabled by the user agent); all operations degrade to no-ops then.
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|win| win.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|store| store.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(store) = Self::storage() {
            let _ = store.set_item(key, value);
        }
    }

    fn delete(&self, key: &str) {
        if let Some(store) = Self::storage() {
            let _ = store.remove_item(key);
        }
    }
}

pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl SessionStore<BrowserStore> {
    pub fn browser() -> Self {
        Self::new(BrowserStore)
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Restore the persisted session, or `None` if nothing (usable) is
    /// stored. Partial or corrupt state is cleared before returning.
    pub fn load(&self) -> Option<Session> {
        let token = self.store.read(TOKEN_KEY);
        let raw_user = self.store.read(USER_KEY);
        match (token, raw_user) {
            (Some(token), Some(raw)) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(user) => Some(Session { token, user }),
                Err(_) => {
                    self.clear();
                    None
                }
            },
            (None, None) => None,
            _ => {
                self.clear();
                None
            }
        }
    }

    /// Persist token and profile as a pair. If the profile cannot be
    /// serialized nothing is written, keeping the both-or-neither
    /// invariant for subsequent loads.
    pub fn save(&self, session: &Session) {
        if let Ok(raw) = serde_json::to_string(&session.user) {
            self.store.write(TOKEN_KEY, &session.token);
            self.store.write(USER_KEY, &raw);
        }
    }

    pub fn clear(&self) {
        self.store.delete(TOKEN_KEY);
        self.store.delete(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl KeyValueStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }
        fn write(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
        fn delete(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    fn sample_session() -> Session {
        Session {
            token: "t1".into(),
            user: UserProfile {
                username: "alice".into(),
                coins: 100,
                inventory: vec![],
            },
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = SessionStore::new(MemoryStore::default());
        store.save(&sample_session());
        assert_eq!(store.load(), Some(sample_session()));
    }

    #[test]
    fn load_with_nothing_stored_is_absent() {
        let store = SessionStore::new(MemoryStore::default());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn lone_token_is_absent_and_scrubbed() {
        let store = SessionStore::new(MemoryStore::default());
        store.store.write(TOKEN_KEY, "t1");
        assert_eq!(store.load(), None);
        // Self-healing: no residue left behind.
        assert_eq!(store.store.read(TOKEN_KEY), None);
    }

    #[test]
    fn lone_profile_is_absent_and_scrubbed() {
        let store = SessionStore::new(MemoryStore::default());
        store.store.write(USER_KEY, r#"{"username":"a","coins":1,"inventory":[]}"#);
        assert_eq!(store.load(), None);
        assert_eq!(store.store.read(USER_KEY), None);
    }

    #[test]
    fn corrupt_profile_is_absent_and_scrubs_both_keys() {
        let store = SessionStore::new(MemoryStore::default());
        store.store.write(TOKEN_KEY, "t1");
        store.store.write(USER_KEY, "not json");
        assert_eq!(store.load(), None);
        assert_eq!(store.store.read(TOKEN_KEY), None);
        assert_eq!(store.store.read(USER_KEY), None);
    }

    #[test]
    fn clear_removes_both_keys() {
        let store = SessionStore::new(MemoryStore::default());
        store.save(&sample_session());
        store.clear();
        assert_eq!(store.load(), None);
        assert_eq!(store.store.read(TOKEN_KEY), None);
        assert_eq!(store.store.read(USER_KEY), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_store_round_trips_and_clears() {
        let store = SessionStore::browser();
        store.clear();
        let session = Session {
            token: "t-browser".into(),
            user: UserProfile {
                username: "bob".into(),
                coins: 42,
                inventory: vec!["Fishing Rod".into()],
            },
        };
        store.save(&session);
        assert_eq!(store.load(), Some(session));
        store.clear();
        assert_eq!(store.load(), None);
    }
}
