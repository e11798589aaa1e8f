//! Thin wrapper over `window.localStorage`; every failure reads as "absent"

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_item(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

pub fn set_item(key: &str, value: &str) {
    let Some(storage) = storage() else { return };
    if storage.set_item(key, value).is_err() {
        log::warn!("localStorage write failed for '{}'", key);
    }
}
