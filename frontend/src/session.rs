use yew::prelude::*;

const TOKEN_KEY: &str = "token";
const NAME_KEY: &str = "name";

/// String key/value persistence backing the session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Failures to reach storage are treated as absence.
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!(key, "could not write to local storage");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                tracing::warn!(key, "could not remove from local storage");
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub display_name: String,
}

impl Session {
    pub fn load(store: &impl SessionStore) -> Option<Self> {
        let token = store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())?;
        let display_name = store.get(NAME_KEY).unwrap_or_default();
        Some(Self {
            token,
            display_name,
        })
    }

    pub fn save(&self, store: &impl SessionStore) {
        store.set(TOKEN_KEY, &self.token);
        store.set(NAME_KEY, &self.display_name);
    }

    pub fn clear(store: &impl SessionStore) {
        store.remove(TOKEN_KEY);
        store.remove(NAME_KEY);
    }
}

/// Root-provided handle on the signed-in session.
///
/// Sign-in and invalidation both go through here so storage and the
/// rendered state never disagree.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    current: UseStateHandle<Option<Session>>,
}

impl SessionContext {
    pub fn new(current: UseStateHandle<Option<Session>>) -> Self {
        Self { current }
    }

    pub fn session(&self) -> Option<&Session> {
        (*self.current).as_ref()
    }

    pub fn token(&self) -> Option<String> {
        self.session().map(|s| s.token.clone())
    }

    pub fn display_name(&self) -> Option<String> {
        self.session().map(|s| s.display_name.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.session().is_some()
    }

    pub fn sign_in(&self, session: Session) {
        session.save(&BrowserStore);
        tracing::info!(user = %session.display_name, "session started");
        self.current.set(Some(session));
    }

    pub fn invalidate(&self) {
        Session::clear(&BrowserStore);
        tracing::info!("session invalidated");
        self.current.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.items.borrow_mut().remove(key);
        }
    }

    #[test]
    fn save_then_load() {
        let store = MemoryStore::default();
        let session = Session {
            token: "abc123".into(),
            display_name: "1.234.567-8".into(),
        };
        session.save(&store);

        assert_eq!(store.get("token").as_deref(), Some("abc123"));
        assert_eq!(store.get("name").as_deref(), Some("1.234.567-8"));
        assert_eq!(Session::load(&store), Some(session));
    }

    #[test]
    fn missing_or_blank_token_means_signed_out() {
        let store = MemoryStore::default();
        assert_eq!(Session::load(&store), None);

        store.set("token", "  ");
        store.set("name", "someone");
        assert_eq!(Session::load(&store), None);
    }

    #[test]
    fn name_is_optional() {
        let store = MemoryStore::default();
        store.set("token", "t");
        let session = Session::load(&store).unwrap();
        assert_eq!(session.display_name, "");
    }

    #[test]
    fn clear_removes_both_keys() {
        let store = MemoryStore::default();
        Session {
            token: "t".into(),
            display_name: "n".into(),
        }
        .save(&store);

        Session::clear(&store);
        assert_eq!(store.get("token"), None);
        assert_eq!(store.get("name"), None);
    }
}
