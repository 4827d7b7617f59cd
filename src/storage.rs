//! Persistence for the single credential string.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::StorageError;

/// Somewhere to keep the credential between page loads.
///
/// Methods take `&self`: the backing store is shared with the API client,
/// which reads it on every request.
pub trait CredentialStore {
    /// The stored credential, if any.
    fn load(&self) -> Option<String>;

    fn save(&self, value: &str) -> Result<(), StorageError>;

    fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(value.into()))),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

/// Values are written as JSON strings; anything that does not parse as one
/// is taken verbatim.
pub fn decode_stored(raw: &str) -> String {
    serde_json::from_str::<String>(raw).unwrap_or_else(|_| raw.to_string())
}

pub fn encode_stored(value: &str) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|e| StorageError::Write(e.to_string()))
}

#[cfg(feature = "frontend")]
pub use browser::LocalStore;

#[cfg(feature = "frontend")]
mod browser {
    use super::{decode_stored, encode_stored, CredentialStore};
    use crate::config::CREDENTIAL_STORAGE_KEY;
    use crate::error::StorageError;

    /// `window.localStorage`, under [`CREDENTIAL_STORAGE_KEY`].
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LocalStore;

    impl LocalStore {
        fn storage() -> Result<web_sys::Storage, StorageError> {
            web_sys::window()
                .and_then(|window| window.local_storage().ok().flatten())
                .ok_or(StorageError::Unavailable)
        }
    }

    impl CredentialStore for LocalStore {
        fn load(&self) -> Option<String> {
            let storage = match Self::storage() {
                Ok(storage) => storage,
                Err(e) => {
                    log::warn!("{}", e);
                    return None;
                }
            };
            match storage.get_item(CREDENTIAL_STORAGE_KEY) {
                Ok(value) => value.map(|raw| decode_stored(&raw)),
                Err(e) => {
                    log::warn!("failed to read stored credential: {:?}", e);
                    None
                }
            }
        }

        fn save(&self, value: &str) -> Result<(), StorageError> {
            let encoded = encode_stored(value)?;
            Self::storage()?
                .set_item(CREDENTIAL_STORAGE_KEY, &encoded)
                .map_err(|e| StorageError::Write(format!("{:?}", e)))
        }

        fn clear(&self) -> Result<(), StorageError> {
            Self::storage()?
                .remove_item(CREDENTIAL_STORAGE_KEY)
                .map_err(|e| StorageError::Write(format!("{:?}", e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_slot() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.save("abc123").unwrap();
        assert_eq!(other.load().as_deref(), Some("abc123"));
        other.clear().unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn stored_values_are_json_strings() {
        assert_eq!(encode_stored("abc123").unwrap(), "\"abc123\"");
        assert_eq!(decode_stored("\"abc123\""), "abc123");
    }

    #[test]
    fn raw_values_are_accepted_verbatim() {
        assert_eq!(decode_stored("abc123"), "abc123");
        assert_eq!(decode_stored(""), "");
    }
}
