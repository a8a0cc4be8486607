//! `localStorage` backend.
use a11y_widget_core::SettingsStorage;

use crate::dom;

/// Settings storage in the origin's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSettingsStorage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

fn handle() -> Result<web_sys::Storage, WebStorageError> {
    dom::local_storage().map_err(|err| WebStorageError::Unavailable(dom::js_error_message(&err)))
}

impl SettingsStorage for LocalSettingsStorage {
    type Error = WebStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        handle()?
            .get_item(key)
            .map_err(|err| WebStorageError::Storage(dom::js_error_message(&err)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        // Quota errors surface here.
        handle()?
            .set_item(key, value)
            .map_err(|err| WebStorageError::Storage(dom::js_error_message(&err)))
    }
}
