//! Where the logged-in user survives a reload: browser localStorage on wasm,
//! a JSON file under the data dir on native, memory in tests.

use super::AuthError;
use crate::models::User;
use std::cell::RefCell;
use std::rc::Rc;

pub trait SessionStore {
    fn load(&self) -> Result<Option<User>, AuthError>;
    fn save(&self, user: &User) -> Result<(), AuthError>;
    fn clear(&self) -> Result<(), AuthError>;
}

/// In-memory store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<User>>>,
}

impl MemoryStore {
    pub fn with_user(user: User) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(user))),
        }
    }

    pub fn current(&self) -> Option<User> {
        self.slot.borrow().clone()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<User>, AuthError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, user: &User) -> Result<(), AuthError> {
        *self.slot.borrow_mut() = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::{AuthError, SessionStore, User};
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    /// JSON file holding the current user.
    #[derive(Clone, Debug)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<data dir>/login-form/session.json`, if the platform has a data dir.
        pub fn default_location() -> Option<Self> {
            dirs::data_dir().map(|dir| Self::new(dir.join("login-form").join("session.json")))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl SessionStore for FileStore {
        fn load(&self) -> Result<Option<User>, AuthError> {
            match fs::read_to_string(&self.path) {
                Ok(s) => Ok(Some(serde_json::from_str(&s)?)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        fn save(&self, user: &User) -> Result<(), AuthError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(user)?)?;
            Ok(())
        }

        fn clear(&self) -> Result<(), AuthError> {
            match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{AuthError, SessionStore, User};
    use gloo_storage::errors::StorageError;
    use gloo_storage::{LocalStorage, Storage};

    const USER_KEY: &str = "login_form_user";

    /// `window.localStorage` entry holding the current user.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserStore;

    impl SessionStore for BrowserStore {
        fn load(&self) -> Result<Option<User>, AuthError> {
            match LocalStorage::get::<User>(USER_KEY) {
                Ok(user) => Ok(Some(user)),
                Err(StorageError::KeyNotFound(_)) => Ok(None),
                Err(e) => Err(AuthError::Storage(e.to_string())),
            }
        }

        fn save(&self, user: &User) -> Result<(), AuthError> {
            LocalStorage::set(USER_KEY, user).map_err(|e| AuthError::Storage(e.to_string()))
        }

        fn clear(&self) -> Result<(), AuthError> {
            LocalStorage::delete(USER_KEY);
            Ok(())
        }
    }
}

/// Platform default store.
#[cfg(target_arch = "wasm32")]
pub fn default_store() -> Box<dyn SessionStore> {
    Box::new(BrowserStore)
}

/// Platform default store.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> Box<dyn SessionStore> {
    match FileStore::default_location() {
        Some(store) => Box::new(store),
        None => {
            tracing::warn!("no data dir; session will not persist");
            Box::new(MemoryStore::default())
        }
    }
}
