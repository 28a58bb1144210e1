use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::store::{KeyValueStore, StoreError};

/// Browser console logging with panic messages
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

fn js_err(e: JsValue) -> StoreError {
    StoreError::Unavailable(format!("{:?}", e))
}

/// window.localStorage
pub struct LocalStorageStore {
    storage: Storage,
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(js_err)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage.remove_item(key).map_err(js_err)
    }
}

pub fn open_store() -> Result<LocalStorageStore, StoreError> {
    let storage = web_sys::window()
        .ok_or_else(|| StoreError::Unavailable("no window".into()))?
        .local_storage()
        .map_err(js_err)?
        .ok_or_else(|| StoreError::Unavailable("LocalStorage disabled".into()))?;
    log::info!("Using LocalStorage");
    Ok(LocalStorageStore { storage })
}
