//! `localStorage`-backed preference store.
//!
//! Storage can be missing (privacy modes, sandboxed iframes) or refuse writes
//! (quota). Reads degrade to `None`; writes report [`PageError::Storage`] and
//! the caller decides whether to care.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use page::error::PageError;
use page::storage::PreferenceStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, PageError> {
    let window = web_sys::window().ok_or_else(|| PageError::Storage("no window".to_owned()))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(PageError::Storage("localStorage unavailable".to_owned())),
        Err(e) => Err(PageError::Storage(format!("{e:?}"))),
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = match local_storage() {
                Ok(storage) => storage,
                Err(e) => {
                    log::debug!("preference {key} not read: {e}");
                    return None;
                }
            };
            match storage.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    log::debug!("preference {key} not read: {e:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::trace!("preference {key} not read outside the browser");
            None
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| PageError::Storage(format!("write to {key} refused: {e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::trace!("preference {key}={value} not written outside the browser");
            Ok(())
        }
    }
}
