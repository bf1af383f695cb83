use std::rc::Rc;

use desa::KeyValueStore;

#[cfg(target_arch = "wasm32")]
mod local_storage;
mod timer;

pub use timer::BrowserTimer;

/// `localStorage` in the browser, an in-memory store everywhere else.
#[cfg(target_arch = "wasm32")]
pub fn key_value_store() -> Rc<dyn KeyValueStore> {
    use dioxus::prelude::warn;

    match local_storage::LocalStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            warn!("{}, keeping the session in memory", e);
            Rc::new(desa::MemoryStore::new())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn key_value_store() -> Rc<dyn KeyValueStore> {
    Rc::new(desa::MemoryStore::new())
}
