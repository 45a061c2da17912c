//! Session Storage
//!
//! The session is the only state shared between pages. Views get it through
//! an injected `SessionContext` rather than a global.

use std::sync::Arc;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};
#[cfg(test)]
use std::sync::Mutex;

use crate::models::Session;

/// `localStorage` key holding the serialized session
pub const STORAGE_KEY: &str = "tasks.session";

/// get / set / clear contract for session persistence
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Option<Session>;
    fn set(&self, session: &Session);
    fn clear(&self);
}

/// Session persisted in the browser's `localStorage` as JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSessionStore;

impl LocalSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalSessionStore {
    fn get(&self) -> Option<Session> {
        let raw = Self::storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("Discarding unreadable stored session: {}", e);
                None
            }
        }
    }

    fn set(&self, session: &Session) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, session not persisted");
            return;
        };
        match serde_json::to_string(session) {
            Ok(raw) => {
                if storage.set_item(STORAGE_KEY, &raw).is_err() {
                    log::warn!("Failed to write session to localStorage");
                }
            }
            Err(e) => log::warn!("Failed to serialize session: {}", e),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(STORAGE_KEY).is_err() {
                log::warn!("Failed to remove session from localStorage");
            }
        }
    }
}

/// In-memory session store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
    writes: AtomicUsize,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.session.lock().ok()?.clone()
    }

    fn set(&self, session: &Session) {
        if let Ok(mut slot) = self.session.lock() {
            *slot = Some(session.clone());
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.session.lock() {
            *slot = None;
        }
    }
}

/// Cloneable handle to the session store, injected into each view
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Backed by `localStorage`
    pub fn browser() -> Self {
        Self::new(Arc::new(LocalSessionStore))
    }

    pub fn get_session(&self) -> Option<Session> {
        self.store.get()
    }

    pub fn set_session(&self, session: &Session) {
        self.store.set(session);
    }

    pub fn clear_session(&self) {
        self.store.clear();
    }

    /// Bearer token of the current session, read fresh on every call
    pub fn token(&self) -> Option<String> {
        self.get_session().map(|s| s.token).filter(|t| !t.is_empty())
    }
}
